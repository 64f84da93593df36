use crate::{
    error::NumvalError,
    fmt::{print_slice, VectorDisplay, VectorStyle},
    linalg::{zip_apply, Vector},
};
use std::{
    fmt::{Display, Formatter},
    ops::{AddAssign, Index, IndexMut, SubAssign},
};

/// A heap-allocated vector of doubles whose length is fixed at construction.
///
/// Combining two vectors of different length is reported as
/// [`NumvalError::DimensionMismatch`] by the `try_*` methods; the operator
/// forms panic with the same message.
#[derive(Debug, Clone, PartialEq)]
pub struct DynVector(Box<[f64]>);

impl DynVector {
    /// Creates a vector of `len` elements all set to `value`.
    pub fn splat(len: usize, value: f64) -> Self { Self(vec![value; len].into_boxed_slice()) }

    /// Creates a vector of `len` zeros.
    pub fn zeros(len: usize) -> Self { Self::splat(len, 0.0) }

    /// Creates a vector by copying the given elements.
    pub fn from_slice(data: &[f64]) -> Self { Self(data.into()) }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns `true` if the vector holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

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
        let len = self.len();
        self.0
            .get(index)
            .ok_or(NumvalError::IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64, NumvalError> {
        let len = self.len();
        self.0
            .get_mut(index)
            .ok_or(NumvalError::IndexOutOfRange { index, len })
    }

    fn check_dim(&self, other: &Self) -> Result<(), NumvalError> {
        if self.len() != other.len() {
            log::debug!(
                "Cannot combine vectors of length {} and {}",
                self.len(),
                other.len()
            );
            return Err(NumvalError::DimensionMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(())
    }

    /// Adds `other` element-wise in place.
    ///
    /// Fails without touching `self` if the lengths differ.
    pub fn try_accumulate_add(&mut self, other: &Self) -> Result<&mut Self, NumvalError> {
        self.check_dim(other)?;
        zip_apply(&mut self.0, &other.0, |a, b| a + b);
        Ok(self)
    }

    /// Subtracts `other` element-wise in place.
    ///
    /// Fails without touching `self` if the lengths differ.
    pub fn try_accumulate_sub(&mut self, other: &Self) -> Result<&mut Self, NumvalError> {
        self.check_dim(other)?;
        zip_apply(&mut self.0, &other.0, |a, b| a - b);
        Ok(self)
    }

    /// Returns a helper rendering the vector in the given style.
    pub fn display(&self, style: VectorStyle) -> VectorDisplay<'_> {
        VectorDisplay::new(&self.0, style)
    }
}

impl From<Vec<f64>> for DynVector {
    fn from(data: Vec<f64>) -> Self { Self(data.into_boxed_slice()) }
}

impl<const N: usize> From<Vector<N>> for DynVector {
    fn from(vector: Vector<N>) -> Self { Self(Box::new(vector.into_inner())) }
}

impl<const N: usize> TryFrom<DynVector> for Vector<N> {
    type Error = NumvalError;

    fn try_from(vector: DynVector) -> Result<Self, Self::Error> {
        <[f64; N]>::try_from(vector.as_slice())
            .map(Vector::new)
            .map_err(|_| NumvalError::DimensionMismatch {
                expected: N,
                actual: vector.len(),
            })
    }
}

impl AsRef<[f64]> for DynVector {
    fn as_ref(&self) -> &[f64] { &self.0 }
}

impl Index<usize> for DynVector {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(x) => x,
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<usize> for DynVector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(x) => x,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a> IntoIterator for &'a DynVector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

/// Normalized rendering `[1, 2, 3]`; the alternate flag (`{:#}`) selects the
/// legacy rendering `[1 2 3, ]`.
impl Display for DynVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let style = if f.alternate() {
            VectorStyle::Legacy
        } else {
            VectorStyle::Normalized
        };
        print_slice(f, &self.0, style)
    }
}

// Operator forms cannot return a `Result`, so a length mismatch panics.
macro_rules! impl_ops_assign {
    ($($trait:ident, $op:ident, $acc:ident);*) => {
        $(
            impl $trait<&DynVector> for DynVector {
                fn $op(&mut self, other: &DynVector) {
                    if let Err(err) = self.$acc(other) {
                        panic!("{err}");
                    }
                }
            }

            impl $trait for DynVector {
                #[inline]
                fn $op(&mut self, other: DynVector) { self.$op(&other); }
            }
        )*
    };
}

impl_ops_assign!(
    AddAssign, add_assign, try_accumulate_add;
    SubAssign, sub_assign, try_accumulate_sub);

impl_approx_for_vector!(DynVector);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dyn_vector_creation() {
        let v = DynVector::zeros(5);
        assert_eq!(v.len(), 5);
        assert!(v.iter().all(|&x| x == 0.0));

        let v = DynVector::splat(2, -1.5);
        assert_eq!(v.as_slice(), &[-1.5, -1.5]);

        let v = DynVector::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(v, DynVector::from_slice(&[1.0, 2.0, 3.0]));

        assert!(DynVector::zeros(0).is_empty());
    }

    #[test]
    fn dyn_vector_indexing() {
        let mut v = DynVector::from(vec![1.0, 2.0, 3.0]);
        v[2] = 7.0;
        assert_eq!(v[2], 7.0);
        assert_eq!(
            v.get(3),
            Err(NumvalError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(v.get_mut(3).is_err());
    }

    #[test]
    #[should_panic(expected = "index 2 is out of range for a vector of length 2")]
    fn dyn_vector_index_panics_past_end() {
        let mut v = DynVector::zeros(2);
        v[2] = 1.0;
    }

    #[test]
    fn dyn_vector_add_sub() {
        let mut a = DynVector::from(vec![1.0, 2.0, 3.0]);
        a += DynVector::splat(3, 1.0);
        assert_eq!(a.as_slice(), &[2.0, 3.0, 4.0]);
        a -= &DynVector::from(vec![2.0, 3.0, 4.0]);
        assert_eq!(a, DynVector::zeros(3));

        a.try_accumulate_add(&DynVector::splat(3, 2.0))
            .and_then(|a| a.try_accumulate_sub(&DynVector::splat(3, 0.5)))
            .unwrap();
        assert_eq!(a.as_slice(), &[1.5, 1.5, 1.5]);
    }

    #[test]
    fn dyn_vector_dimension_mismatch() {
        let mut a = DynVector::from(vec![1.0, 2.0]);
        let b = DynVector::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            a.try_accumulate_add(&b).unwrap_err(),
            NumvalError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
        assert!(a.try_accumulate_sub(&b).is_err());
        assert_eq!(a.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch: expected 3 elements, got 1")]
    fn dyn_vector_operator_panics_on_mismatch() {
        let mut a = DynVector::zeros(3);
        a += DynVector::zeros(1);
    }

    #[test]
    fn dyn_vector_conversions() {
        let v = DynVector::from(Vector::new([1.0, 2.0, 3.0]));
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);

        let fixed = Vector::<3>::try_from(v.clone()).unwrap();
        assert_eq!(fixed.as_slice(), v.as_slice());

        assert_eq!(
            Vector::<2>::try_from(v).unwrap_err(),
            NumvalError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn dyn_vector_display() {
        let v = DynVector::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.to_string(), "[1, 2, 3]");
        assert_eq!(format!("{:#}", v), "[1 2 3, ]");
        assert_eq!(
            format!("{:.2}", v.display(VectorStyle::Legacy)),
            "[1.00 2.00 3.00, ]"
        );
        assert_eq!(DynVector::zeros(0).to_string(), "[]");
    }

    #[test]
    fn dyn_vector_approx_eq() {
        let a = DynVector::from(vec![0.1 + 0.2]);
        approx::assert_relative_eq!(a, DynVector::from(vec![0.3]));
        approx::assert_relative_ne!(a, DynVector::from(vec![0.3, 0.0]));
    }

    proptest! {
        #[test]
        fn dyn_vector_add_sub_inverse(pairs in prop::collection::vec(
            (-100_000i32..100_000, -100_000i32..100_000), 0..32))
        {
            let x = DynVector::from(pairs.iter().map(|&(a, _)| f64::from(a)).collect::<Vec<_>>());
            let y = DynVector::from(pairs.iter().map(|&(_, b)| f64::from(b)).collect::<Vec<_>>());
            let mut z = x.clone();
            z.try_accumulate_add(&y).unwrap();
            for i in 0..z.len() {
                prop_assert_eq!(z[i], x[i] + y[i]);
            }
            z.try_accumulate_sub(&y).unwrap();
            prop_assert_eq!(z, x);
        }

        #[test]
        fn dyn_vector_mismatch_leaves_receiver(n in 0usize..16, m in 0usize..16) {
            prop_assume!(n != m);
            let mut a = DynVector::splat(n, 1.0);
            let b = DynVector::splat(m, 2.0);
            let err = a.try_accumulate_add(&b).unwrap_err();
            prop_assert_eq!(err, NumvalError::DimensionMismatch { expected: n, actual: m });
            prop_assert_eq!(a, DynVector::splat(n, 1.0));
        }
    }
}
