//! Raw single-owner storage handle.
//!
//! [`RawBuf`] is the container's only allocation primitive: a contiguous
//! run of uninitialized slots with an explicit capacity. It frees its
//! memory on drop but never drops elements — element lifetime is the
//! vector's concern, tracked by its logical length. Allocation is fallible
//! and surfaces as [`VecError::AllocFailed`] instead of aborting.

#![allow(unsafe_code)]

use std::alloc::{alloc, dealloc, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::VecError;

/// Owned, uninitialized, contiguous storage for `cap` elements of `T`.
///
/// Exactly one `RawBuf` references a given allocation at any time. A
/// capacity of 0 (and any capacity of a zero-sized `T`) holds no memory;
/// the pointer is dangling but well-aligned, which is all slice and
/// pointer arithmetic on zero bytes requires.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// The unallocated buffer: capacity 0, no memory held.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate storage for `cap` elements, all slots uninitialized.
    ///
    /// Returns `VecError::AllocFailed` if the byte size overflows a
    /// `Layout` or the allocator returns null. Zero-sized requests and
    /// zero-sized element types never touch the allocator.
    pub(crate) fn allocate(cap: usize) -> Result<Self, VecError> {
        if cap == 0 || mem::size_of::<T>() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap,
                _marker: PhantomData,
            });
        }

        let layout = Layout::array::<T>(cap).map_err(|_| VecError::AllocFailed {
            requested_bytes: cap.saturating_mul(mem::size_of::<T>()),
        })?;

        // SAFETY: `layout` has non-zero size (cap > 0 and size_of::<T>() > 0
        // were checked above).
        let raw = unsafe { alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => Ok(Self {
                ptr,
                cap,
                _marker: PhantomData,
            }),
            None => Err(VecError::AllocFailed {
                requested_bytes: layout.size(),
            }),
        }
    }

    /// Number of allocated slots.
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Base pointer for reads. Dangling (but aligned) when unallocated.
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Base pointer for writes. Dangling (but aligned) when unallocated.
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        let layout = match Layout::array::<T>(self.cap) {
            Ok(layout) => layout,
            // `allocate` succeeded with these exact inputs, so this arm
            // is unreachable; leaking beats a bogus dealloc.
            Err(_) => return,
        };
        // SAFETY: `ptr` was returned by `alloc` with this exact layout and
        // has not been freed; `RawBuf` is the allocation's sole owner.
        unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
    }
}
