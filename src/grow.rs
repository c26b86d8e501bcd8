//! Growth strategies applied when a vector runs out of capacity.

use core::fmt::Debug;

/// Determines the capacity of a replacement buffer when more room is
/// required by an insertion.
pub trait Grow: Debug {
    /// Select the capacity of the next buffer, given the current capacity
    /// and the minimum capacity required by the pending operation.
    fn next_capacity(prev: usize, minimum: usize) -> usize;
}

/// Grow only to the required minimum.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowExact;

impl Grow for GrowExact {
    #[inline]
    fn next_capacity(_prev: usize, minimum: usize) -> usize {
        minimum
    }
}

/// Double the capacity, starting from a single element.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowDoubling;

impl Grow for GrowDoubling {
    #[inline]
    fn next_capacity(prev: usize, minimum: usize) -> usize {
        let preferred = if prev == 0 { 1 } else { prev.saturating_mul(2) };
        preferred.max(minimum)
    }
}
