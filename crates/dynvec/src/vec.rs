//! The dynamic vector container.
//!
//! [`DynVec`] keeps its elements in one contiguous buffer and maintains the
//! invariant `0 <= len <= capacity` across every operation: slots `[0, len)`
//! hold initialized values in insertion order, slots `[len, capacity)` are
//! uninitialized. Reallocation is always allocate-new, copy, swap,
//! release-old, so a failed allocation leaves the vector untouched.

#![allow(unsafe_code)]

use std::fmt;
use std::mem;
use std::ptr;
use std::slice;

use crate::error::VecError;
use crate::raw::RawBuf;

/// A growable contiguous vector with doubling growth and half-occupancy
/// shrink.
///
/// Append is amortized O(1), indexed access is O(1), positional insert and
/// erase are O(N). All fallible operations return [`VecError`] and leave
/// the vector in its prior valid state on failure.
///
/// The container provides no internal locking; a single instance must not
/// be used from multiple threads without external synchronization. Distinct
/// instances never share storage.
pub struct DynVec<T> {
    buf: RawBuf<T>,
    len: usize,
}

// SAFETY: DynVec exclusively owns its buffer and elements; moving the
// vector moves ownership of everything it points to, exactly as a `Box<[T]>`
// would. No interior sharing exists.
unsafe impl<T: Send> Send for DynVec<T> {}
// SAFETY: shared references to DynVec only permit reads of the initialized
// prefix; no interior mutability exists.
unsafe impl<T: Sync> Sync for DynVec<T> {}

impl<T> DynVec<T> {
    /// Create an empty vector. No storage is allocated.
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::empty(),
            len: 0,
        }
    }

    /// Logical element count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots. Always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buf.capacity() * mem::size_of::<T>()
    }

    /// Append `value` at the end.
    ///
    /// If the buffer is full, capacity grows to 1 (from empty) or doubles,
    /// and the elements are copied into the fresh allocation before the old
    /// one is released. On [`VecError::AllocFailed`] the vector is
    /// unchanged.
    pub fn push(&mut self, value: T) -> Result<(), VecError> {
        if self.len == self.buf.capacity() {
            self.reallocate(grown_capacity(self.buf.capacity()))?;
        }
        // SAFETY: len < capacity after the growth check; slot `len` is
        // in-bounds and uninitialized.
        unsafe { ptr::write(self.buf.as_mut_ptr().add(self.len), value) };
        self.len += 1;
        Ok(())
    }

    /// Insert `value` at logical position `index`, shifting later elements
    /// right.
    ///
    /// `index == len()` behaves as [`DynVec::push`]; `index > len()` is
    /// [`VecError::OutOfBounds`]. With spare capacity this is a single
    /// memmove; when full, a doubled buffer is allocated and the two halves
    /// are copied around the new slot.
    pub fn insert(&mut self, value: T, index: usize) -> Result<(), VecError> {
        if index > self.len {
            return Err(VecError::OutOfBounds {
                index,
                len: self.len,
            });
        }

        if self.len == self.buf.capacity() {
            let mut next = RawBuf::allocate(grown_capacity(self.buf.capacity()))?;
            // SAFETY: `next` holds at least len + 1 slots. The source ranges
            // [0, index) and [index, len) are initialized; they are moved
            // bitwise into disjoint ranges of the fresh buffer and the old
            // buffer is released without dropping them.
            unsafe {
                ptr::copy_nonoverlapping(self.buf.as_ptr(), next.as_mut_ptr(), index);
                ptr::write(next.as_mut_ptr().add(index), value);
                ptr::copy_nonoverlapping(
                    self.buf.as_ptr().add(index),
                    next.as_mut_ptr().add(index + 1),
                    self.len - index,
                );
            }
            self.buf = next;
        } else {
            // SAFETY: len < capacity, so shifting [index, len) up one slot
            // stays in-bounds. `ptr::copy` has memmove semantics and
            // handles the overlap; slot `index` is then overwritten with
            // the new value, never read.
            unsafe {
                let base = self.buf.as_mut_ptr();
                ptr::copy(base.add(index), base.add(index + 1), self.len - index);
                ptr::write(base.add(index), value);
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at logical position `index`, shifting
    /// later elements left.
    ///
    /// `index >= len()` is [`VecError::OutOfBounds`] — this deviates from
    /// silently ignoring bad indices, for consistency with `insert` and
    /// indexed access.
    ///
    /// After removal, if `len < capacity / 2` the buffer shrinks to
    /// `capacity / 2` (a target of 0 releases storage entirely). The shrink
    /// allocation happens before anything is mutated, so an
    /// [`VecError::AllocFailed`] leaves the vector unchanged.
    pub fn erase(&mut self, index: usize) -> Result<T, VecError> {
        if index >= self.len {
            return Err(VecError::OutOfBounds {
                index,
                len: self.len,
            });
        }

        let new_len = self.len - 1;
        let shrink_target = self.buf.capacity() / 2;

        // Shrink when occupancy drops below half capacity. A capacity of 1
        // halves to a target of 0, which releases storage entirely (a
        // capacity-1 vector can only be erased when it holds its single
        // element, so new_len is 0 there).
        if new_len < shrink_target || self.buf.capacity() == 1 {
            let mut next = RawBuf::allocate(shrink_target)?;
            // SAFETY: index < len, so the slot is initialized; it is read
            // out exactly once. The surviving ranges [0, index) and
            // (index, len) are moved bitwise into `next` (which holds
            // shrink_target > new_len slots, or zero slots when new_len is
            // 0), and the old buffer is released without dropping them.
            let value = unsafe {
                let base = self.buf.as_ptr();
                let value = ptr::read(base.add(index));
                ptr::copy_nonoverlapping(base, next.as_mut_ptr(), index);
                ptr::copy_nonoverlapping(
                    base.add(index + 1),
                    next.as_mut_ptr().add(index),
                    new_len - index,
                );
                value
            };
            self.buf = next;
            self.len = new_len;
            Ok(value)
        } else {
            // SAFETY: index < len; the element is read out exactly once,
            // then the tail (index, len) is shifted down over it. The slot
            // at new_len leaves the initialized prefix and is never read
            // or dropped again.
            let value = unsafe {
                let base = self.buf.as_mut_ptr();
                let value = ptr::read(base.add(index));
                ptr::copy(base.add(index + 1), base.add(index), new_len - index);
                value
            };
            self.len = new_len;
            Ok(value)
        }
    }

    /// Shared reference to the element at `index`.
    ///
    /// Checked against the logical length, never against capacity —
    /// allocated-but-unoccupied slots are not readable.
    pub fn get(&self, index: usize) -> Result<&T, VecError> {
        if index >= self.len {
            return Err(VecError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        // SAFETY: index < len, so the slot is in-bounds and initialized.
        Ok(unsafe { &*self.buf.as_ptr().add(index) })
    }

    /// Mutable reference to the element at `index`, for read-modify-write
    /// in place. Same bounds contract as [`DynVec::get`].
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, VecError> {
        if index >= self.len {
            return Err(VecError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        // SAFETY: index < len, so the slot is in-bounds and initialized;
        // &mut self guarantees exclusive access.
        Ok(unsafe { &mut *self.buf.as_mut_ptr().add(index) })
    }

    /// View of the initialized prefix as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized; the base pointer is
        // aligned even when unallocated (dangling, len 0).
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Mutable view of the initialized prefix as a slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`; &mut self guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the elements in order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Drop all elements and release the backing storage, returning to the
    /// empty state (`len == 0`, `capacity == 0`).
    ///
    /// Idempotent: clearing an empty vector performs no release. Runs
    /// automatically when the vector is dropped.
    pub fn clear(&mut self) {
        // SAFETY: slots [0, len) are initialized and dropped exactly once;
        // len is zeroed before the storage handle is replaced, so no state
        // ever describes released memory.
        unsafe {
            let initialized = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len);
            self.len = 0;
            ptr::drop_in_place(initialized);
        }
        self.buf = RawBuf::empty();
    }

    /// Replace the buffer with a fresh allocation of `new_cap` slots,
    /// moving the initialized prefix across. The old buffer is released
    /// only after the copy; on allocation failure nothing is mutated.
    fn reallocate(&mut self, new_cap: usize) -> Result<(), VecError> {
        debug_assert!(new_cap >= self.len);
        let mut next = RawBuf::allocate(new_cap)?;
        // SAFETY: the buffers are distinct allocations; the first `len`
        // slots of the old buffer are initialized and `next` has room for
        // them. Elements are moved bitwise, then the old buffer is
        // released without dropping them.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), next.as_mut_ptr(), self.len);
        }
        self.buf = next;
        Ok(())
    }
}

impl<T: Clone> DynVec<T> {
    /// Fallible deep copy: freshly allocated storage with the source's
    /// capacity, element values cloned in order. The copy shares nothing
    /// with the source and has an independent lifetime.
    pub fn try_clone(&self) -> Result<Self, VecError> {
        let mut copy = Self {
            buf: RawBuf::allocate(self.buf.capacity())?,
            len: 0,
        };
        for item in self.as_slice() {
            // SAFETY: copy.len < capacity (capacity >= self.len); each slot
            // is written exactly once. Growing copy.len as we go keeps the
            // partially-built copy droppable if a clone panics.
            unsafe { ptr::write(copy.buf.as_mut_ptr().add(copy.len), item.clone()) };
            copy.len += 1;
        }
        Ok(copy)
    }

    /// Build a vector from a slice, cloning the elements.
    ///
    /// Capacity equals the slice length exactly.
    pub fn from_slice(items: &[T]) -> Result<Self, VecError> {
        let mut vec = Self {
            buf: RawBuf::allocate(items.len())?,
            len: 0,
        };
        for item in items {
            // SAFETY: vec.len < items.len() == capacity; each slot written once.
            unsafe { ptr::write(vec.buf.as_mut_ptr().add(vec.len), item.clone()) };
            vec.len += 1;
        }
        Ok(vec)
    }
}

/// Doubling growth policy: 0 → 1, otherwise 2x.
fn grown_capacity(cap: usize) -> usize {
    if cap == 0 {
        1
    } else {
        // Saturate rather than overflow; the allocation itself rejects
        // sizes this large.
        cap.saturating_mul(2)
    }
}

impl<T> Drop for DynVec<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for DynVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynVec<T> {
    /// Deep copy.
    ///
    /// # Panics
    ///
    /// Panics if storage for the copy cannot be allocated. Use
    /// [`DynVec::try_clone`] for a fallible copy.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(e) => panic!("DynVec clone failed: {e}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynVec<T> {}

impl<'a, T> IntoIterator for &'a DynVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
