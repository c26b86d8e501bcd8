//! A growable vector with explicitly managed raw storage.
//!
//! [`RawStorage`] owns a block of uninitialized slots and knows nothing of
//! their contents. [`Vector`] layers element lifetimes on top of it: values
//! are constructed and dropped only within its live range, and growth moves
//! the live values into a new block before the old one is released.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
#[macro_use]
extern crate std;

extern crate alloc;

pub(crate) mod error;

pub mod grow;

pub mod storage;

pub mod vec;

pub use {
    self::error::{IndexError, InsertionError, InsertionErrorKind, StorageError},
    self::grow::{Grow, GrowDoubling, GrowExact},
    self::storage::RawStorage,
    self::vec::Vector,
};
