use crate::{
    error::NumvalError,
    fmt::{print_slice, VectorDisplay, VectorStyle},
    linalg::zip_apply,
};
use std::{
    fmt::{Display, Formatter},
    ops::{AddAssign, Index, IndexMut, SubAssign},
};

/// A vector of `N` doubles, `N` fixed at compile time.
///
/// The vector owns its elements. It is not `Copy`: assignment moves it and
/// [`Clone`] duplicates the storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<const N: usize>([f64; N]);

impl<const N: usize> Vector<N> {
    /// Creates a vector from the given elements.
    pub const fn new(data: [f64; N]) -> Self { Self(data) }

    /// Creates a vector with all elements set to the given value.
    pub const fn splat(value: f64) -> Self { Self([value; N]) }

    /// Creates a vector with all elements set to the given value.
    pub const fn full(value: f64) -> Self { Self::splat(value) }

    /// Creates a vector with all elements set to zero.
    pub const fn zeros() -> Self { Self::splat(0.0) }

    /// Returns the number of elements, `N`.
    #[inline]
    pub const fn len(&self) -> usize { N }

    /// Returns `true` if `N` is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool { N == 0 }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] { &self.0 }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] { &mut self.0 }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> { self.0.iter() }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&f64, NumvalError> {
        self.0
            .get(index)
            .ok_or(NumvalError::IndexOutOfRange { index, len: N })
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64, NumvalError> {
        self.0
            .get_mut(index)
            .ok_or(NumvalError::IndexOutOfRange { index, len: N })
    }

    /// Adds `other` element-wise in place.
    pub fn accumulate_add(&mut self, other: &Self) -> &mut Self {
        zip_apply(&mut self.0, &other.0, |a, b| a + b);
        self
    }

    /// Subtracts `other` element-wise in place.
    pub fn accumulate_sub(&mut self, other: &Self) -> &mut Self {
        zip_apply(&mut self.0, &other.0, |a, b| a - b);
        self
    }

    /// Returns a helper rendering the vector in the given style.
    pub fn display(&self, style: VectorStyle) -> VectorDisplay<'_> {
        VectorDisplay::new(&self.0, style)
    }

    /// Consumes the vector, returning its elements.
    pub fn into_inner(self) -> [f64; N] { self.0 }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self { Self::zeros() }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    fn from(data: [f64; N]) -> Self { Self(data) }
}

impl<const N: usize> AsRef<[f64]> for Vector<N> {
    fn as_ref(&self) -> &[f64] { &self.0 }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(x) => x,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(x) => x,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, const N: usize> IntoIterator for &'a Vector<N> {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

/// Normalized rendering `[1, 2, 3]`; the alternate flag (`{:#}`) selects the
/// legacy rendering `[1 2 3, ]`.
impl<const N: usize> Display for Vector<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let style = if f.alternate() {
            VectorStyle::Legacy
        } else {
            VectorStyle::Normalized
        };
        print_slice(f, &self.0, style)
    }
}

macro_rules! impl_ops_assign {
    ($($trait:ident, $op:ident, $acc:ident);*) => {
        $(
            impl<const N: usize> $trait for Vector<N> {
                #[inline]
                fn $op(&mut self, other: Vector<N>) { self.$acc(&other); }
            }

            impl<const N: usize> $trait<&Vector<N>> for Vector<N> {
                #[inline]
                fn $op(&mut self, other: &Vector<N>) { self.$acc(other); }
            }
        )*
    };
}

impl_ops_assign!(
    AddAssign, add_assign, accumulate_add;
    SubAssign, sub_assign, accumulate_sub);

impl_approx_for_vector!(Vector<N>, const N);
