use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop, MaybeUninit};
use core::ptr::NonNull;
use core::slice;

use alloc::alloc::{alloc as raw_alloc, dealloc as raw_dealloc};

use const_default::ConstDefault;

use crate::error::StorageError;

use super::utils::array_layout;

/// The global allocation strategy shared by every `RawStorage`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Global;

impl Global {
    /// Obtain a block of memory for a non-empty layout.
    #[inline]
    pub fn try_alloc(&self, layout: Layout) -> Result<NonNull<u8>, StorageError> {
        debug_assert!(layout.size() > 0);
        NonNull::new(unsafe { raw_alloc(layout) }).ok_or(StorageError::AllocError)
    }

    /// # Safety
    /// The pointer must have been returned by `try_alloc` with the same layout.
    #[inline]
    pub unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() > 0 {
            raw_dealloc(ptr.as_ptr(), layout);
        }
    }
}

#[cold]
#[inline(never)]
fn slot_out_of_range(offset: usize, capacity: usize) -> ! {
    panic!("Invalid storage offset: {} (capacity {})", offset, capacity);
}

/// An owned block of uninitialized memory with room for `capacity` values
/// of type `T`.
///
/// The storage never inspects its contents. When dropped it releases the
/// block, but it does not drop any values which may have been written into
/// it: tracking which slots are live is the responsibility of the owner.
pub struct RawStorage<T> {
    data: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

impl<T> RawStorage<T> {
    /// Create an empty storage without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate storage for exactly `capacity` values, panicking on failure.
    pub fn allocate(capacity: usize) -> Self {
        match Self::try_allocate(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Allocate storage for exactly `capacity` values.
    ///
    /// A zero capacity, or a zero-sized `T`, does not allocate.
    pub fn try_allocate(capacity: usize) -> Result<Self, StorageError> {
        if capacity == 0 {
            return Ok(Self::new());
        }
        let layout = array_layout::<T>(capacity)?;
        let data = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            Global.try_alloc(layout)?.cast()
        };
        Ok(Self {
            data,
            capacity,
            _marker: PhantomData,
        })
    }

    /// # Safety
    /// `data` must be dangling when `capacity` is zero, otherwise it must
    /// have been allocated by the global allocator with the array layout of
    /// `capacity` values of `T`.
    #[inline]
    pub(crate) unsafe fn from_raw_parts(data: NonNull<T>, capacity: usize) -> Self {
        Self {
            data,
            capacity,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn into_raw_parts(self) -> (NonNull<T>, usize) {
        let me = ManuallyDrop::new(self);
        (me.data, me.capacity)
    }

    /// The number of values the block can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    /// Get the address of the slot at `offset`. The one-past-the-end offset
    /// (equal to the capacity) is accepted, but must never be read from.
    #[inline]
    pub fn address(&self, offset: usize) -> *const T {
        if offset > self.capacity {
            slot_out_of_range(offset, self.capacity);
        }
        unsafe { self.data.as_ptr().add(offset) }
    }

    /// Mutable form of [`address`](Self::address).
    #[inline]
    pub fn address_mut(&mut self, offset: usize) -> *mut T {
        if offset > self.capacity {
            slot_out_of_range(offset, self.capacity);
        }
        unsafe { self.data.as_ptr().add(offset) }
    }

    /// Access the slot at `index`. This does not imply that the slot holds
    /// a live value.
    #[inline]
    pub fn element_at(&self, index: usize) -> &MaybeUninit<T> {
        if index >= self.capacity {
            slot_out_of_range(index, self.capacity);
        }
        unsafe { &*self.data.as_ptr().add(index).cast() }
    }

    #[inline]
    pub fn element_at_mut(&mut self, index: usize) -> &mut MaybeUninit<T> {
        if index >= self.capacity {
            slot_out_of_range(index, self.capacity);
        }
        unsafe { &mut *self.data.as_ptr().add(index).cast() }
    }

    #[inline]
    pub fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr().cast(), self.capacity) }
    }

    /// Exchange the blocks owned by two storages.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T> ConstDefault for RawStorage<T> {
    const DEFAULT: Self = Self::new();
}

impl<T> Default for RawStorage<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if self.capacity != 0 && mem::size_of::<T>() != 0 {
            let layout = array_layout::<T>(self.capacity).expect("error calculating layout");
            unsafe { Global.release(self.data.cast(), layout) };
        }
    }
}

// The storage owns its block exclusively.
unsafe impl<T: Send> Send for RawStorage<T> {}

unsafe impl<T: Sync> Sync for RawStorage<T> {}
