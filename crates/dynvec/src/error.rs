//! Container-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during vector operations.
///
/// The two variants discriminate between a resource problem (allocation)
/// and caller misuse (bounds), so callers can react programmatically —
/// e.g. retry an append after freeing memory elsewhere, versus fixing an
/// index computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VecError {
    /// Backing storage could not be obtained during growth or shrink.
    ///
    /// The vector is unchanged: the operation that triggered the
    /// reallocation has not mutated size, capacity, or contents.
    AllocFailed {
        /// Number of bytes the failed allocation requested.
        requested_bytes: usize,
    },
    /// An index outside the vector's logical bounds.
    ///
    /// Raised by indexed access with `index >= len`, by `insert` with
    /// `index > len`, and by `erase` with `index >= len`. Bounds are
    /// checked against the logical length, never against capacity.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The vector's logical length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocFailed { requested_bytes } => {
                write!(
                    f,
                    "storage allocation failed: requested {requested_bytes} bytes"
                )
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds: length {len}")
            }
        }
    }
}

impl Error for VecError {}
