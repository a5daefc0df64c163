//! Validation errors for unrolling parameters.
//!
//! Every operation in this crate is a pure, terminating computation, so the only
//! failure mode is rejecting a parameter set before any work is done. Errors are
//! small `Copy` values carrying the offending inputs.

/// Rejected unrolling parameters.
///
/// # Examples
///
/// ```
/// use lfsr::{UnrollError, unroll_lfsr};
///
/// let err = unroll_lfsr(8, 4, 0x10, false).unwrap_err();
/// assert_eq!(err, UnrollError::PolynomialOutOfRange { polynomial: 0x10, state_size: 4 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum UnrollError {
  /// The register has no positions.
  #[error("state size must be greater than zero")]
  ZeroStateSize,

  /// No clock cycles were requested.
  #[error("data size must be greater than zero")]
  ZeroDataSize,

  /// The tap mask has a bit set at or above the register width.
  #[error("polynomial {polynomial:#x} has taps at or above state size {state_size}")]
  PolynomialOutOfRange {
    /// The rejected tap mask.
    polynomial: u64,
    /// The register width it was checked against.
    state_size: usize,
  },

  /// Data-bit ids would reach into the initial-state namespace.
  #[error("data size {data_size} exceeds initial-state offset {offset}")]
  DataSizeExceedsOffset {
    /// Requested number of cycles.
    data_size: usize,
    /// Configured initial-state offset.
    offset: u64,
  },

  /// The highest initial-state id does not fit in a `u64`.
  #[error("initial-state offset {offset} overflows with state size {state_size}")]
  OffsetOverflow {
    /// Configured initial-state offset.
    offset: u64,
    /// Requested register width.
    state_size: usize,
  },

  /// An offset of zero cannot separate the two variable namespaces.
  #[error("initial-state offset must be greater than zero")]
  ZeroOffset,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, UnrollError>;
