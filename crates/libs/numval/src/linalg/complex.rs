use crate::fmt::print_elem;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Num;
use std::{
    fmt::{Display, Formatter, Write},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

/// Complex number `re + im·i`.
///
/// The element type defaults to `f64`; any `T: Num + Copy` works, including
/// integers (note that integer division truncates and panics on a
/// zero-magnitude divisor).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Complex<T = f64> {
    /// Real part.
    pub re: T,
    /// Imaginary part.
    pub im: T,
}

impl<T> Complex<T> {
    /// Creates a complex number from its real and imaginary parts.
    pub const fn new(re: T, im: T) -> Self { Self { re, im } }
}

impl<T: Num + Copy> Complex<T> {
    /// Creates a complex number with a zero imaginary part.
    pub fn from_re(re: T) -> Self { Self::new(re, T::zero()) }

    /// Returns `0 + 0i`.
    pub fn zero() -> Self { Self::new(T::zero(), T::zero()) }

    /// Squared magnitude `re² + im²`.
    #[inline]
    fn norm_sqr(&self) -> T { self.re * self.re + self.im * self.im }

    /// Adds `other` in place.
    pub fn accumulate_add(&mut self, other: &Self) -> &mut Self {
        self.re = self.re + other.re;
        self.im = self.im + other.im;
        self
    }

    /// Subtracts `other` in place.
    pub fn accumulate_sub(&mut self, other: &Self) -> &mut Self {
        self.re = self.re - other.re;
        self.im = self.im - other.im;
        self
    }

    /// Multiplies by `other` in place.
    pub fn accumulate_mul(&mut self, other: &Self) -> &mut Self {
        let (re, im) = (self.re, self.im);
        self.re = re * other.re - im * other.im;
        self.im = re * other.im + im * other.re;
        self
    }

    /// Divides by `other` in place.
    ///
    /// A zero-magnitude divisor is not rejected: for floating-point elements
    /// both components become non-finite.
    ///
    /// # Panics
    ///
    /// For integer element types, when `other` is `0 + 0i`.
    pub fn accumulate_div(&mut self, other: &Self) -> &mut Self {
        let (re, im) = (self.re, self.im);
        let d = other.norm_sqr();
        if d.is_zero() {
            log::trace!("Dividing a complex number by zero");
        }
        self.re = (re * other.re + im * other.im) / d;
        self.im = (im * other.re - re * other.im) / d;
        self
    }
}

impl<T: Num + Copy> From<T> for Complex<T> {
    fn from(re: T) -> Self { Self::from_re(re) }
}

impl<T: Display> Display for Complex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char('(')?;
        print_elem(f, &self.re)?;
        f.write_str(", ")?;
        print_elem(f, &self.im)?;
        f.write_char(')')
    }
}

macro_rules! impl_ops_assign {
    ($($trait:ident, $op:ident, $acc:ident);*) => {
        $(
            impl<T: Num + Copy> $trait for Complex<T> {
                #[inline]
                fn $op(&mut self, other: Complex<T>) { self.$acc(&other); }
            }

            impl<T: Num + Copy> $trait<&Complex<T>> for Complex<T> {
                #[inline]
                fn $op(&mut self, other: &Complex<T>) { self.$acc(other); }
            }
        )*
    };
}

macro_rules! impl_ops {
    ($($trait:ident, $op:ident, $acc:ident);*) => {
        $(
            impl<T: Num + Copy> $trait for Complex<T> {
                type Output = Complex<T>;

                fn $op(mut self, other: Complex<T>) -> Complex<T> {
                    self.$acc(&other);
                    self
                }
            }

            impl<T: Num + Copy> $trait<&Complex<T>> for Complex<T> {
                type Output = Complex<T>;

                fn $op(mut self, other: &Complex<T>) -> Complex<T> {
                    self.$acc(other);
                    self
                }
            }

            impl<T: Num + Copy> $trait<Complex<T>> for &Complex<T> {
                type Output = Complex<T>;

                fn $op(self, other: Complex<T>) -> Complex<T> {
                    let mut out = *self;
                    out.$acc(&other);
                    out
                }
            }

            impl<T: Num + Copy> $trait<&Complex<T>> for &Complex<T> {
                type Output = Complex<T>;

                fn $op(self, other: &Complex<T>) -> Complex<T> {
                    let mut out = *self;
                    out.$acc(other);
                    out
                }
            }
        )*
    };
}

impl_ops_assign!(
    AddAssign, add_assign, accumulate_add;
    SubAssign, sub_assign, accumulate_sub;
    MulAssign, mul_assign, accumulate_mul;
    DivAssign, div_assign, accumulate_div);

impl_ops! {
    Add, add, accumulate_add;
    Sub, sub, accumulate_sub;
    Mul, mul, accumulate_mul;
    Div, div, accumulate_div
}

impl<T> AbsDiffEq for Complex<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.re.abs_diff_eq(&other.re, epsilon) && self.im.abs_diff_eq(&other.im, epsilon)
    }
}

impl<T> RelativeEq for Complex<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.re.relative_eq(&other.re, epsilon, max_relative)
            && self.im.relative_eq(&other.im, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Complex<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.re.ulps_eq(&other.re, epsilon, max_ulps)
            && self.im.ulps_eq(&other.im, epsilon, max_ulps)
    }
}
