//! # numval
//! Small numeric value types with in-place arithmetic and text formatting.
//!
//! - [`Complex`]: a complex number `re + im·i`, generic over its element type
//!   (defaults to `f64`).
//! - [`Vector`]: `N` doubles, `N` fixed at compile time.
//! - [`DynVector`]: doubles with a length fixed at construction time.
//!
//! All types are accumulated in place through the compound assignment
//! operators (`+=`, `-=`, and for complex numbers `*=`, `/=`) or the
//! equivalent `accumulate_*` methods, which return `&mut Self` so that calls
//! can be chained.
#![warn(missing_docs)]

pub mod error;
pub mod fmt;
pub mod linalg;

pub use error::NumvalError;
pub use fmt::{VectorDisplay, VectorStyle};
pub use linalg::{Complex, DynVector, Vector};
