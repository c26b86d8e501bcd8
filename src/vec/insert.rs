use core::mem::MaybeUninit;
use core::ptr;

use crate::storage::RawStorage;

/// Writes values into the spare capacity of a storage block.
///
/// Values written since the inserter was created are dropped if it is
/// dropped before `complete` is called, so a panicking constructor never
/// leaves live values outside of the owner's tracked length.
pub struct Inserter<'a, T> {
    buf: &'a mut [MaybeUninit<T>],
    start: usize,
    end: usize,
}

impl<'a, T> Inserter<'a, T> {
    #[inline]
    pub fn for_storage(storage: &'a mut RawStorage<T>, length: usize) -> Self {
        let buf = storage.as_uninit_slice_mut();
        debug_assert!(length <= buf.len());
        Self {
            buf,
            start: length,
            end: length,
        }
    }

    #[inline]
    pub fn push(&mut self, val: T) {
        self.buf[self.end].write(val);
        self.end += 1;
    }

    #[inline]
    pub fn push_clone(&mut self, val: &T)
    where
        T: Clone,
    {
        self.buf[self.end].write(val.clone());
        self.end += 1;
    }

    #[inline]
    pub fn full(&self) -> bool {
        self.end == self.buf.len()
    }

    /// Stop tracking the written values, returning the new length of the
    /// live range.
    #[inline]
    pub fn complete(mut self) -> usize {
        self.start = self.end;
        self.end
    }
}

impl<T> Drop for Inserter<'_, T> {
    #[inline]
    fn drop(&mut self) {
        if self.start != self.end {
            unsafe {
                ptr::drop_in_place(
                    &mut self.buf[self.start..self.end] as *mut [MaybeUninit<T>] as *mut [T],
                )
            };
        }
    }
}
