//! Error type for numval.

/// Failures raised by vector element access and vector accumulation.
///
/// Complex arithmetic never fails: a zero-magnitude divisor produces
/// non-finite components following IEEE 754.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum NumvalError {
    /// An element was accessed outside `[0, len)`.
    #[error("index {index} is out of range for a vector of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the accessed vector.
        len: usize,
    },
    /// Two vectors of different length were combined.
    #[error("dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch {
        /// Length of the receiving vector.
        expected: usize,
        /// Length of the other operand.
        actual: usize,
    },
}
