//! Growable contiguous vector with explicit storage management.
//!
//! [`DynVec`] owns a single contiguous buffer, a logical element count
//! (`len`) and an allocated-slot count (`capacity`), and provides amortized
//! O(1) append, O(1) indexed access, and O(N) positional insert/erase.
//!
//! # Architecture
//!
//! ```text
//! DynVec<T> (len + the manipulator operations)
//! └── RawBuf<T> (capacity + fallible allocation; frees memory, never drops elements)
//! ```
//!
//! # Storage policy
//!
//! - **Growth:** capacity 0 → 1 on the first append, doubling thereafter.
//!   This amortizes reallocation to O(1) per append over long sequences.
//! - **Shrink:** after an erase, if `len < capacity / 2` the buffer is
//!   reallocated down to `capacity / 2`, bounding wasted space to roughly
//!   2x occupancy. A shrink target of 0 releases storage entirely.
//! - Every reallocation is expressed as allocate-new, copy, swap, release-old.
//!   There is no in-place resize primitive, so the worst-case O(N) copy is
//!   visible in the code exactly where the cost model says it happens.
//!
//! # Errors
//!
//! Allocation failure and out-of-range access are distinct [`VecError`]
//! variants, surfaced synchronously from the triggering operation. A failed
//! operation leaves the vector in its prior valid state.
//!
//! # Safety
//!
//! `unsafe` is confined to the two storage modules (`raw` and `vec`); every
//! unsafe block carries a `// SAFETY:` comment tying it to the size/capacity
//! invariant. The rest of the crate forbids unsafe code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod error;
mod raw;
pub mod vec;

// Public re-exports for the primary API surface.
pub use error::VecError;
pub use vec::DynVec;
