//! Raw storage for vector elements.

use core::ptr;

pub(crate) mod alloc;

pub(crate) mod utils;

pub use self::alloc::{Global, RawStorage};

/// Relocate `count` live values starting at `src` into the uninitialized
/// slots starting at `dst`.
///
/// Values are moved rather than copied: a Rust move is a bitwise
/// relocation which cannot fail, so the source block remains valid for
/// release no matter where a transfer is performed. After the call the
/// source slots must be treated as uninitialized and never dropped.
///
/// # Safety
/// `src` must point to `count` live values, `dst` must be valid for
/// `count` writes, and the two ranges must not overlap.
#[inline]
pub(crate) unsafe fn transfer<T>(src: *const T, dst: *mut T, count: usize) {
    if count > 0 {
        ptr::copy_nonoverlapping(src, dst, count);
    }
}

/// Shift `count` live values starting at `src` by `offset` slots within the
/// same block. Positive offsets move toward the end.
///
/// # Safety
/// The source range must be live, and the destination range must lie
/// within the capacity of the block.
#[inline]
pub(crate) unsafe fn shift<T>(src: *mut T, offset: isize, count: usize) {
    if count > 0 {
        ptr::copy(src, src.offset(offset), count);
    }
}
