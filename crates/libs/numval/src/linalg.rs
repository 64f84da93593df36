//! Value types: complex numbers and vectors.

/// Implements the `approx` comparison traits for a vector type by comparing
/// elements pairwise. Vectors of different length never compare equal.
macro_rules! impl_approx_for_vector {
    ($ty:ty $(, const $n:ident)?) => {
        impl$(<const $n: usize>)? approx::AbsDiffEq for $ty {
            type Epsilon = f64;

            fn default_epsilon() -> f64 { <f64 as approx::AbsDiffEq>::default_epsilon() }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                self.len() == other.len()
                    && self
                        .iter()
                        .zip(other.iter())
                        .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl$(<const $n: usize>)? approx::RelativeEq for $ty {
            fn default_max_relative() -> f64 {
                <f64 as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
                self.len() == other.len()
                    && self.iter().zip(other.iter()).all(|(a, b)| {
                        approx::RelativeEq::relative_eq(a, b, epsilon, max_relative)
                    })
            }
        }

        impl$(<const $n: usize>)? approx::UlpsEq for $ty {
            fn default_max_ulps() -> u32 { <f64 as approx::UlpsEq>::default_max_ulps() }

            fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
                self.len() == other.len()
                    && self
                        .iter()
                        .zip(other.iter())
                        .all(|(a, b)| approx::UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
            }
        }
    };
}

mod complex;
mod vector;
mod vector_dyn;

pub use complex::*;
pub use vector::*;
pub use vector_dyn::*;

/// Applies `op` element-wise, storing the result in `dst`.
///
/// Both slices must have the same length; callers check it beforehand.
#[inline]
pub(crate) fn zip_apply<F>(dst: &mut [f64], src: &[f64], op: F)
where
    F: Fn(f64, f64) -> f64,
{
    debug_assert_eq!(dst.len(), src.len(), "operands differ in length");
    for (a, b) in dst.iter_mut().zip(src.iter()) {
        *a = op(*a, *b);
    }
}
