//! A growable vector built on [`RawStorage`].

use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::repeat;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop, MaybeUninit};
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::slice;

use const_default::ConstDefault;

use crate::error::{IndexError, InsertionError, InsertionErrorKind, StorageError};
use crate::grow::{Grow, GrowDoubling};
use crate::storage::{shift, transfer, RawStorage};

use self::insert::Inserter;

pub use self::into_iter::IntoIter;

#[macro_use]
mod macros;

pub(crate) mod insert;
mod into_iter;

#[inline]
/// Create a `Vector<T>` from a cloneable element T and a count of the number of elements.
pub fn from_elem<T: Clone>(elem: T, count: usize) -> Vector<T> {
    Vector::from_iter(repeat(elem).take(count))
}

/// A contiguous growable array.
///
/// Slots `[0, len)` of the owned storage hold live values, while slots
/// `[len, capacity)` are uninitialized. When an insertion finds the storage
/// full, a larger block is allocated according to the growth strategy `G`,
/// the live values are moved across and the previous block is released.
pub struct Vector<T, G: Grow = GrowDoubling> {
    storage: RawStorage<T>,
    length: usize,
    _grow: PhantomData<G>,
}

impl<T, G: Grow> Vector<T, G> {
    /// Constructs a new, empty `Vector<T, G>`.
    ///
    /// The vector will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use advanced_vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::new(),
            length: 0,
            _grow: PhantomData,
        }
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        Ok(Self {
            storage: RawStorage::try_allocate(capacity)?,
            length: 0,
            _grow: PhantomData,
        })
    }

    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Constructs a vector holding `length` default values, with a capacity
    /// of exactly `length`.
    ///
    /// If a call to `T::default` panics, the values already constructed are
    /// dropped and the storage is released.
    pub fn with_len(length: usize) -> Self
    where
        T: Default,
    {
        match Self::try_with_len(length) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    pub fn try_with_len(length: usize) -> Result<Self, StorageError>
    where
        T: Default,
    {
        let mut vec = Self::try_with_capacity(length)?;
        vec.extend_with(length, T::default);
        Ok(vec)
    }

    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(data.len());
        vec.extend_cloned(data);
        vec
    }

    pub fn try_from_slice(data: &[T]) -> Result<Self, StorageError>
    where
        T: Clone,
    {
        let mut vec = Self::try_with_capacity(data.len())?;
        vec.extend_cloned(data);
        Ok(vec)
    }
}

impl<T, G: Grow> Vector<T, G> {
    #[inline]
    fn into_parts(self) -> (RawStorage<T>, usize) {
        let me = ManuallyDrop::new(self);
        let storage = unsafe { ptr::read(&me.storage) };
        (storage, me.length)
    }

    /// Construct `count` values in the spare capacity using `f`.
    fn extend_with<F>(&mut self, count: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        let mut insert = Inserter::for_storage(&mut self.storage, self.length);
        for _ in 0..count {
            insert.push(f());
        }
        let new_len = insert.complete();
        self.length = new_len;
    }

    /// Clone `items` into the spare capacity.
    fn extend_cloned(&mut self, items: &[T])
    where
        T: Clone,
    {
        let mut insert = Inserter::for_storage(&mut self.storage, self.length);
        for item in items {
            insert.push_clone(item);
        }
        let new_len = insert.complete();
        self.length = new_len;
    }

    fn try_extend(&mut self, iter: &mut impl Iterator<Item = T>) -> Result<(), InsertionError<T>> {
        loop {
            let mut insert = Inserter::for_storage(&mut self.storage, self.length);
            let mut full;
            loop {
                full = insert.full();
                if full {
                    break;
                }
                let Some(item) = iter.next() else { break };
                insert.push(item);
            }
            let new_len = insert.complete();
            self.length = new_len;
            if !full {
                // ran out of items to insert
                break;
            }
            let Some(item) = iter.next() else { break };
            let min_reserve = iter.size_hint().0.saturating_add(1);
            if let Err(error) = self.try_grow(min_reserve) {
                return Err(InsertionError::new(error, item));
            }
            self.storage.element_at_mut(new_len).write(item);
            self.length = new_len + 1;
        }
        Ok(())
    }

    /// Move the live values into a new block of exactly `capacity` slots.
    fn reallocate(&mut self, capacity: usize) -> Result<(), StorageError> {
        debug_assert!(capacity >= self.length);
        let mut storage = RawStorage::try_allocate(capacity)?;
        unsafe { transfer(self.storage.as_ptr(), storage.as_mut_ptr(), self.length) };
        self.storage.swap(&mut storage);
        // the previous block is released here, holding no live values
        Ok(())
    }

    /// Ensure room for `additional` more values, growing per `G`.
    fn try_grow(&mut self, additional: usize) -> Result<(), StorageError> {
        let Some(required) = self.length.checked_add(additional) else {
            return Err(StorageError::CapacityLimit);
        };
        let capacity = self.storage.capacity();
        if required <= capacity {
            return Ok(());
        }
        self.reallocate(G::next_capacity(capacity, required))
    }

    /// Validate an insertion position, allocating the replacement block when
    /// the current one is full.
    fn prepare_insert(&self, index: usize) -> Result<Option<RawStorage<T>>, InsertionErrorKind> {
        if index > self.length {
            return Err(IndexError::new(index, self.length).into());
        }
        let capacity = self.storage.capacity();
        if self.length < capacity {
            return Ok(None);
        }
        let Some(required) = self.length.checked_add(1) else {
            return Err(StorageError::CapacityLimit.into());
        };
        let grown = RawStorage::try_allocate(G::next_capacity(capacity, required))?;
        Ok(Some(grown))
    }

    fn emplace_prepared<F>(&mut self, index: usize, grown: Option<RawStorage<T>>, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match grown {
            Some(grown) => self.emplace_with_reallocation(index, grown, f),
            None => self.emplace_without_reallocation(index, f),
        }
    }

    fn emplace_with_reallocation<F>(
        &mut self,
        index: usize,
        mut grown: RawStorage<T>,
        f: F,
    ) -> &mut T
    where
        F: FnOnce() -> T,
    {
        // Construct the new value first: if `f` panics, only the new block
        // is released and the current values are untouched.
        let slot = grown.address_mut(index);
        unsafe { slot.write(f()) };
        unsafe {
            let src = self.storage.as_mut_ptr();
            let dst = grown.as_mut_ptr();
            transfer(src, dst, index);
            transfer(src.add(index), dst.add(index + 1), self.length - index);
        }
        self.storage.swap(&mut grown);
        self.length += 1;
        unsafe { &mut *self.storage.as_mut_ptr().add(index) }
    }

    fn emplace_without_reallocation<F>(&mut self, index: usize, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let value = f();
        let tail_count = self.length - index;
        unsafe {
            let head = self.storage.as_mut_ptr().add(index);
            // the last value moves into the spare slot, then the rest follow
            shift(head, 1, tail_count);
            head.write(value);
        }
        self.length += 1;
        unsafe { &mut *self.storage.as_mut_ptr().add(index) }
    }
}

impl<T, G: Grow> Vector<T, G> {
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.storage.as_ptr(), self.length) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.storage.as_mut_ptr(), self.length) }
    }

    /// The number of values the current storage can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexError> {
        self.as_slice()
            .get(index)
            .ok_or(IndexError::new(index, self.length))
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        let length = self.length;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(IndexError::new(index, length))
    }

    #[inline]
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        let length = self.length;
        &mut self.storage.as_uninit_slice_mut()[length..]
    }

    /// Exchange the contents of two vectors without moving any values.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
        mem::swap(&mut self.length, &mut other.length);
    }

    /// Ensure that the capacity is at least `capacity`, panicking if the
    /// storage cannot be allocated.
    #[inline]
    pub fn reserve(&mut self, capacity: usize) {
        match self.try_reserve(capacity) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Ensure that the capacity is at least `capacity`.
    ///
    /// When the current storage is too small, a block of exactly `capacity`
    /// slots is allocated and the values are moved into it. If allocation
    /// fails, the vector is left unchanged.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), StorageError> {
        if capacity <= self.storage.capacity() {
            return Ok(());
        }
        self.reallocate(capacity)
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        match self.try_shrink_to_fit() {
            Ok(_) => (),
            Err(err) => err.panic(),
        }
    }

    pub fn try_shrink_to_fit(&mut self) -> Result<(), StorageError> {
        if self.storage.capacity() != self.length {
            self.reallocate(self.length)?;
        }
        Ok(())
    }

    /// Resize the vector, filling new slots with default values.
    #[inline]
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    #[inline]
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), StorageError>
    where
        T: Default,
    {
        self.try_resize_with(new_len, T::default)
    }

    #[inline]
    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        match self.try_resize_with(new_len, f) {
            Ok(_) => (),
            Err(err) => err.panic(),
        }
    }

    /// Resize the vector. Shrinking drops the trailing values, while growing
    /// reserves exactly `new_len` slots and then fills them using `f`.
    pub fn try_resize_with<F>(&mut self, new_len: usize, f: F) -> Result<(), StorageError>
    where
        F: FnMut() -> T,
    {
        match new_len.cmp(&self.length) {
            Ordering::Greater => {
                self.try_reserve(new_len)?;
                self.extend_with(new_len - self.length, f);
            }
            Ordering::Less => {
                self.truncate(new_len);
            }
            Ordering::Equal => {}
        }
        Ok(())
    }

    pub fn truncate(&mut self, length: usize) {
        let old_len = self.length;
        let new_len = length.min(old_len);
        let remove = old_len - new_len;
        if remove > 0 {
            self.length = new_len;
            unsafe {
                let to_drop: *mut [T] = ptr::slice_from_raw_parts_mut(
                    self.storage.as_mut_ptr().add(new_len),
                    remove,
                );
                ptr::drop_in_place(to_drop);
            }
        }
    }

    /// Append a value, growing the storage if it is full. Returns a
    /// reference to the new element.
    pub fn push(&mut self, value: T) -> &mut T {
        match self.try_push(value) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    pub fn try_push(&mut self, value: T) -> Result<&mut T, InsertionError<T>> {
        self.try_insert(self.length, value)
    }

    /// Construct a value at the end of the vector.
    ///
    /// When the storage must grow, the value is constructed in the new
    /// block before any existing values are moved.
    pub fn emplace_back<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.emplace(self.length, f)
    }

    /// Remove the last value and return it.
    pub fn pop(&mut self) -> Option<T> {
        if self.length > 0 {
            self.length -= 1;
            Some(unsafe { self.storage.element_at(self.length).assume_init_read() })
        } else {
            None
        }
    }

    /// Drop the last value, panicking if the vector is empty.
    pub fn pop_back(&mut self) {
        if let Err(error) = self.try_pop_back() {
            error.panic();
        }
    }

    pub fn try_pop_back(&mut self) -> Result<(), IndexError> {
        match self.pop() {
            Some(_) => Ok(()),
            None => Err(IndexError::new(0, 0)),
        }
    }

    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        match self.try_insert(index, value) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Insert a value at `index`, shifting the following values toward the
    /// end. An `index` equal to the length appends.
    ///
    /// On failure the vector is unchanged and the value is returned in the
    /// error.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, InsertionError<T>> {
        match self.prepare_insert(index) {
            Ok(grown) => Ok(self.emplace_prepared(index, grown, move || value)),
            Err(error) => Err(InsertionError::new(error, value)),
        }
    }

    pub fn emplace<F>(&mut self, index: usize, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace(index, f) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Construct a value at `index` using `f`.
    ///
    /// On failure the constructor is returned in the error without being
    /// called. If `f` panics, the vector is left unchanged.
    pub fn try_emplace<F>(&mut self, index: usize, f: F) -> Result<&mut T, InsertionError<F>>
    where
        F: FnOnce() -> T,
    {
        match self.prepare_insert(index) {
            Ok(grown) => Ok(self.emplace_prepared(index, grown, f)),
            Err(error) => Err(InsertionError::new(error, f)),
        }
    }

    /// Remove and drop the value at `index`, returning the position which
    /// now holds the value that followed it.
    pub fn erase(&mut self, index: usize) -> usize {
        match self.try_erase(index) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    pub fn try_erase(&mut self, index: usize) -> Result<usize, IndexError> {
        // the removed value is dropped once the length has been updated
        self.try_remove(index).map(|_| index)
    }

    pub fn remove(&mut self, index: usize) -> T {
        match self.try_remove(index) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexError> {
        let len = self.length;
        if index >= len {
            return Err(IndexError::new(index, len));
        }
        unsafe {
            let result = self.storage.element_at(index).assume_init_read();
            shift(self.storage.as_mut_ptr().add(index + 1), -1, len - index - 1);
            self.length = len - 1;
            Ok(result)
        }
    }

    /// Move all values of `other` onto the end of this vector.
    pub fn append(&mut self, other: &mut Self) {
        if self.is_empty() && other.capacity() >= self.capacity() {
            self.swap_with(other);
        } else if !other.is_empty() {
            let count = other.length;
            if let Err(error) = self.try_grow(count) {
                error.panic();
            }
            unsafe {
                transfer(
                    other.storage.as_ptr(),
                    self.storage.as_mut_ptr().add(self.length),
                    count,
                );
            }
            other.length = 0;
            self.length += count;
        }
    }

    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        match self.try_extend_from_slice(items) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), StorageError>
    where
        T: Clone,
    {
        self.try_grow(items.len())?;
        self.extend_cloned(items);
        Ok(())
    }
}

impl<T, G: Grow> AsRef<[T]> for Vector<T, G> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, G: Grow> AsMut<[T]> for Vector<T, G> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, G: Grow> Borrow<[T]> for Vector<T, G> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, G: Grow> BorrowMut<[T]> for Vector<T, G> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone, G: Grow> Clone for Vector<T, G> {
    fn clone(&self) -> Self {
        let mut inst = Self::with_capacity(self.length);
        inst.extend_cloned(self);
        inst
    }

    /// Assign a copy of `source`, reusing the current storage when it is
    /// large enough.
    ///
    /// When the storage must grow, a full copy is built first and then
    /// swapped in, so a panicking `clone` leaves `self` unchanged.
    fn clone_from(&mut self, source: &Self) {
        if source.length > self.capacity() {
            let mut copy = source.clone();
            self.swap_with(&mut copy);
            return;
        }
        let overlap = self.length.min(source.length);
        self.as_mut_slice()[..overlap].clone_from_slice(&source[..overlap]);
        if source.length > self.length {
            self.extend_cloned(&source[overlap..]);
        } else {
            self.truncate(source.length);
        }
    }
}

impl<T, G: Grow> ConstDefault for Vector<T, G> {
    const DEFAULT: Self = Self::new();
}

impl<T: fmt::Debug, G: Grow> fmt::Debug for Vector<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T, G: Grow> Default for Vector<T, G> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, G: Grow> Deref for Vector<T, G> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, G: Grow> DerefMut for Vector<T, G> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, G: Grow> Drop for Vector<T, G> {
    fn drop(&mut self) {
        let live = self.length;
        if live > 0 {
            self.length = 0;
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    self.storage.as_mut_ptr(),
                    live,
                ));
            }
        }
        // the storage releases its block once the values are gone
    }
}

impl<T, G: Grow> Extend<T> for Vector<T, G> {
    #[inline]
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        match self.try_extend(&mut iter.into_iter()) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }
}

impl<'a, T: Clone + 'a, G: Grow> Extend<&'a T> for Vector<T, G> {
    #[inline]
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        match self.try_extend(&mut iter.into_iter().cloned()) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }
}

impl<T, G: Grow> FromIterator<T> for Vector<T, G> {
    #[inline]
    fn from_iter<A: IntoIterator<Item = T>>(iter: A) -> Self {
        let iter = iter.into_iter();
        let (min_cap, _) = iter.size_hint();
        let mut vec = Self::with_capacity(min_cap);
        vec.extend(iter);
        vec
    }
}

impl<T: Hash, G: Grow> Hash for Vector<T, G> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, G: Grow> From<alloc::vec::Vec<T>> for Vector<T, G> {
    fn from(vec: alloc::vec::Vec<T>) -> Self {
        let mut vec = ManuallyDrop::new(vec);
        let capacity = vec.capacity();
        let length = vec.len();
        let data = unsafe { NonNull::new_unchecked(vec.as_mut_ptr()) };
        Self {
            storage: unsafe { RawStorage::from_raw_parts(data, capacity) },
            length,
            _grow: PhantomData,
        }
    }
}

impl<T, G: Grow> From<Vector<T, G>> for alloc::vec::Vec<T> {
    fn from(vec: Vector<T, G>) -> Self {
        let (storage, length) = vec.into_parts();
        let (data, capacity) = storage.into_raw_parts();
        unsafe { alloc::vec::Vec::from_raw_parts(data.as_ptr(), length, capacity) }
    }
}

impl<T: Clone, G: Grow> From<&[T]> for Vector<T, G> {
    #[inline]
    fn from(data: &[T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Clone, G: Grow, const N: usize> From<&[T; N]> for Vector<T, G> {
    #[inline]
    fn from(data: &[T; N]) -> Self {
        Self::from_slice(data)
    }
}

impl<T, G: Grow, const N: usize> From<[T; N]> for Vector<T, G> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_iter(data)
    }
}

impl<T, G: Grow> IntoIterator for Vector<T, G> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let (storage, length) = self.into_parts();
        IntoIter::new(storage, length)
    }
}

impl<'a, T, G: Grow> IntoIterator for &'a Vector<T, G> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, G: Grow> IntoIterator for &'a mut Vector<T, G> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T1, G1, T2, G2> PartialEq<Vector<T2, G2>> for Vector<T1, G1>
where
    G1: Grow,
    G2: Grow,
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &Vector<T2, G2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: Eq, G: Grow> Eq for Vector<T, G> {}

impl<T1, G1, T2> PartialEq<&[T2]> for Vector<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T1, G1, T2> PartialEq<[T2]> for Vector<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<T1, G1, T2, const N: usize> PartialEq<&[T2; N]> for Vector<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &&[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, G1, T2, const N: usize> PartialEq<[T2; N]> for Vector<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<A, B, G> PartialEq<alloc::vec::Vec<A>> for Vector<B, G>
where
    B: PartialEq<A>,
    G: Grow,
{
    #[inline]
    fn eq(&self, other: &alloc::vec::Vec<A>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

#[cfg(feature = "zeroize")]
impl<T: zeroize::Zeroize, G: Grow> zeroize::Zeroize for Vector<T, G> {
    /// Zeroize the live values, drop them, and then wipe the whole block.
    fn zeroize(&mut self) {
        for item in self.as_mut_slice() {
            zeroize::Zeroize::zeroize(item);
        }
        self.clear();
        zeroize::Zeroize::zeroize(self.storage.as_uninit_slice_mut());
    }
}
