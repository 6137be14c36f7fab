//! Benchmark fixtures for the dynvec container.
//!
//! Provides pre-built vectors at the sizes the benchmarks sweep, so the
//! bench bodies measure only the operation under test.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynvec::DynVec;

/// Build a vector holding `n` sequential `u64` values.
///
/// Capacity ends at the next power of two >= `n`, matching what any
/// push-built vector of that size looks like in practice.
pub fn filled_u64(n: u64) -> DynVec<u64> {
    let mut v = DynVec::new();
    for i in 0..n {
        v.push(i).expect("bench fixture allocation");
    }
    v
}

/// Build a vector of `n` short heap-allocated strings.
///
/// Exercises the container with a non-trivially-copyable element type.
pub fn filled_strings(n: usize) -> DynVec<String> {
    let mut v = DynVec::new();
    for i in 0..n {
        v.push(format!("element-{i}")).expect("bench fixture allocation");
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_u64_has_expected_shape() {
        let v = filled_u64(100);
        assert_eq!(v.len(), 100);
        assert_eq!(v.capacity(), 128);
        assert_eq!(*v.get(99).unwrap(), 99);
    }

    #[test]
    fn filled_strings_has_expected_shape() {
        let v = filled_strings(10);
        assert_eq!(v.len(), 10);
        assert_eq!(v.get(0).unwrap(), "element-0");
    }
}
