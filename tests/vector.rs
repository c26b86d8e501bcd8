use core::cell::Cell;
use core::mem;
use std::panic::{catch_unwind, AssertUnwindSafe};

use rand::{rngs::StdRng, Rng, SeedableRng};
use rstest::rstest;

use advanced_vector::{vector, GrowExact, IndexError, InsertionErrorKind, StorageError, Vector};

const SLICE: &[usize] = &[1, 2, 3, 4, 5];

thread_local! {
    static LIVE: Cell<usize> = Cell::new(0);
    static PANIC_AFTER: Cell<usize> = Cell::new(usize::MAX);
}

fn live() -> usize {
    LIVE.with(Cell::get)
}

fn panic_after(count: usize) {
    PANIC_AFTER.with(|p| p.set(count));
}

fn tick() {
    let remain = PANIC_AFTER.with(Cell::get);
    if remain == 0 {
        panic!("construction failed");
    }
    PANIC_AFTER.with(|p| p.set(remain - 1));
}

/// Tracks the number of live instances, and fails construction on request.
#[derive(Debug, PartialEq, Eq)]
struct Counted(u32);

impl Counted {
    fn new(value: u32) -> Self {
        LIVE.with(|l| l.set(l.get() + 1));
        Self(value)
    }
}

impl Default for Counted {
    fn default() -> Self {
        tick();
        Self::new(0)
    }
}

impl Clone for Counted {
    fn clone(&self) -> Self {
        tick();
        Self::new(self.0)
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        LIVE.with(|l| l.set(l.get() - 1));
    }
}

fn counted(values: impl IntoIterator<Item = u32>) -> Vector<Counted> {
    values.into_iter().map(Counted::new).collect()
}

fn values(items: &[Counted]) -> Vec<u32> {
    items.iter().map(|c| c.0).collect()
}

#[test]
fn vec_new() {
    let v = Vector::<usize>::new();
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 0);
}

#[test]
fn vec_with_capacity() {
    let v = Vector::<usize>::with_capacity(10);
    assert_eq!(v.capacity(), 10);
    assert!(v.is_empty());
}

#[test]
fn vec_check_capacity_growth() {
    let mut res = [0usize; 10];
    let mut vec = Vector::<usize>::new();
    for cap in res.iter_mut() {
        vec.push(1);
        *cap = vec.capacity();
    }
    assert_eq!(res, [1, 2, 4, 4, 8, 8, 8, 8, 16, 16]);
}

#[test]
fn vec_check_capacity_exact() {
    let mut vec = Vector::<usize, GrowExact>::new();
    vec.extend_from_slice(SLICE);
    vec.push(6);
    assert_eq!(vec.capacity(), 6);
}

#[test]
fn vec_push_returns_element() {
    let mut v = Vector::<usize>::from_slice(SLICE);
    let old_len = v.len();
    *v.push(6) += 10;
    assert_eq!(v[old_len], 16);
    assert_eq!(v.len(), old_len + 1);
}

#[test]
fn vec_push_pop_inverse() {
    let mut v = Vector::<usize>::from_slice(SLICE);
    v.push(99);
    v.pop_back();
    assert_eq!(v, SLICE);
    assert_eq!(v.pop(), Some(5));
}

#[test]
#[should_panic]
fn vec_pop_back_empty() {
    let mut v = Vector::<usize>::new();
    v.pop_back();
}

#[test]
fn vec_emplace_back() {
    let mut v = Vector::<String>::new();
    v.emplace_back(|| "a".repeat(3));
    v.emplace_back(String::new);
    assert_eq!(v, ["aaa".to_string(), String::new()]);
}

#[test]
fn vec_extend_grow() {
    let mut v = Vector::<usize>::with_capacity(1);
    v.extend(SLICE.iter().cloned());
    assert!(v.capacity() >= SLICE.len());
    assert_eq!(v.as_slice(), SLICE);
}

#[test]
fn vec_extend_medium() {
    let mut v = Vector::<usize>::new();
    v.extend((0..100).filter(|i| i % 3 != 0));
    let expect: Vec<usize> = (0..100).filter(|i| i % 3 != 0).collect();
    assert_eq!(v, expect);
}

#[test]
fn vec_growth_keeps_sequence() {
    let mut v = Vector::<usize>::new();
    let mut reallocations = 0;
    for i in 0..1000 {
        let cap = v.capacity();
        v.push(i);
        if v.capacity() != cap {
            reallocations += 1;
        }
    }
    assert_eq!(reallocations, 11);
    assert!(v.iter().copied().eq(0..1000));
}

#[test]
fn vec_clone_independent() {
    let v = Vector::<usize>::from_slice(SLICE);
    let mut v2 = v.clone();
    assert_eq!(v, v2);
    assert_ne!(v.as_ptr(), v2.as_ptr());
    v2[0] = 100;
    v2.push(6);
    assert_eq!(v, SLICE);
}

#[test]
fn vec_move_leaves_empty() {
    let mut v = Vector::<usize>::from_slice(SLICE);
    let moved = mem::take(&mut v);
    assert_eq!(moved, SLICE);
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 0);
}

#[test]
fn vec_swap_with() {
    let mut a = Vector::<usize>::from_slice(SLICE);
    let mut b = Vector::<usize>::with_capacity(20);
    let a_ptr = a.as_ptr();
    a.swap_with(&mut b);
    assert!(a.is_empty());
    assert_eq!(a.capacity(), 20);
    assert_eq!(b, SLICE);
    assert_eq!(b.as_ptr(), a_ptr);
}

#[test]
fn vec_reserve_keeps_contents() {
    let mut v = Vector::<usize>::from_slice(SLICE);
    v.reserve(2);
    assert_eq!(v.capacity(), 5);
    v.reserve(32);
    assert_eq!(v.capacity(), 32);
    v.reserve(8);
    assert_eq!(v.capacity(), 32);
    assert_eq!(v, SLICE);
}

#[test]
fn vec_reserve_failure_unchanged() {
    let mut v = Vector::<u64>::from([1, 2, 3]);
    let res = v.try_reserve(usize::MAX);
    assert!(matches!(res, Err(StorageError::LayoutError(_))));
    assert_eq!(v, [1, 2, 3]);
    assert_eq!(v.capacity(), 3);
}

#[test]
fn vec_insert_alloc_failure_unchanged() {
    type Huge = [u8; 1 << 46];

    let mut v = Vector::<Huge>::new();
    let err = v
        .try_emplace(0, || -> Huge { unreachable!() })
        .map(|_| ())
        .unwrap_err();
    assert!(matches!(err.error(), InsertionErrorKind::Storage(_)));
    let _ctor = err.into_value();
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 0);
}

#[test]
fn vec_insert_capacity_limit_unchanged() {
    #[derive(Debug, PartialEq)]
    struct Marker;

    let mut full = Vec::<Marker>::new();
    unsafe { full.set_len(usize::MAX) };
    let mut v = Vector::<Marker>::from(full);
    assert_eq!(v.capacity(), usize::MAX);

    let err = v.try_push(Marker).map(|_| ()).unwrap_err();
    assert_eq!(
        err.error(),
        &InsertionErrorKind::Storage(StorageError::CapacityLimit)
    );
    assert_eq!(err.into_value(), Marker);

    let err = v.try_emplace(0, || Marker).map(|_| ()).unwrap_err();
    assert!(matches!(err.error(), InsertionErrorKind::Storage(_)));
    let ctor = err.into_value();
    assert_eq!(ctor(), Marker);

    assert_eq!(v.len(), usize::MAX);
    assert_eq!(v.capacity(), usize::MAX);
    assert_eq!(v.last(), Some(&Marker));
}

#[test]
fn vec_scenario() {
    let mut v = Vector::<u32>::new();
    v.push(1);
    v.push(2);
    v.push(3);
    assert_eq!(v.len(), 3);
    assert_eq!(v, [1, 2, 3]);
    v.insert(1, 99);
    assert_eq!(v, [1, 99, 2, 3]);
    assert_eq!(v.erase(0), 0);
    assert_eq!(v, [99, 2, 3]);
    v.resize(5);
    assert_eq!(v, [99, 2, 3, 0, 0]);
    v.resize(1);
    assert_eq!(v, [99]);
}

#[test]
fn vec_with_len() {
    let v = Vector::<u32>::with_len(4);
    assert_eq!(v, [0, 0, 0, 0]);
    assert!(v.capacity() >= 4);
}

#[rstest]
fn vec_insert_erase_inverse(
    #[values(0, 1, 2, 3, 4, 5)] pos: usize,
    #[values(5, 16)] capacity: usize,
) {
    let mut v = Vector::<usize>::with_capacity(capacity);
    v.extend_from_slice(SLICE);
    assert_eq!(*v.insert(pos, 42), 42);
    assert_eq!(v[pos], 42);
    assert_eq!(v.len(), SLICE.len() + 1);
    assert_eq!(v.erase(pos), pos);
    assert_eq!(v, SLICE);
}

#[rstest]
#[case::empty(0, &[])]
#[case::front(0, &[1])]
#[case::middle(1, &[1, 2])]
#[case::end(2, &[1, 2])]
fn vec_try_insert(#[case] pos: usize, #[case] data: &[u32]) {
    let mut v = Vector::<u32>::from_slice(data);
    assert!(v.try_insert(pos, 7).is_ok());
    assert_eq!(v[pos], 7);
    let err = v.try_insert(v.len() + 1, 8).unwrap_err();
    assert!(matches!(err.error(), InsertionErrorKind::Index(_)));
    assert_eq!(err.into_value(), 8);
}

#[test]
fn vec_try_access() {
    let mut v = Vector::<u32>::from([1, 2]);
    assert_eq!(v.try_get(1), Ok(&2));
    *v.try_get_mut(0).unwrap() = 5;
    let err = v.try_get(2).unwrap_err();
    assert_eq!((err.index(), err.length()), (2, 2));
    assert_eq!(v.try_remove(2), Err(err));
    assert_eq!(v.remove(0), 5);
    assert_eq!(v.try_erase(0), Ok(0));
    assert_eq!(v.try_pop_back().map_err(|e: IndexError| e.length()), Err(0));
}

#[test]
fn vec_random_ops() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut v = Vector::<u32>::new();
    let mut model = Vec::<u32>::new();
    for step in 0..5000u32 {
        match rng.gen_range(0..6) {
            0 | 1 => {
                v.push(step);
                model.push(step);
            }
            2 => {
                let pos = rng.gen_range(0..=model.len());
                v.insert(pos, step);
                model.insert(pos, step);
            }
            3 if !model.is_empty() => {
                let pos = rng.gen_range(0..model.len());
                assert_eq!(v.remove(pos), model.remove(pos));
            }
            4 => {
                assert_eq!(v.pop(), model.pop());
            }
            5 => {
                let len = rng.gen_range(0..64);
                v.resize(len);
                model.resize(len, 0);
            }
            _ => {}
        }
        assert_eq!(v, model);
    }
}

#[test]
fn vec_clone_from_shorter() {
    {
        let mut target = counted([1, 2, 3, 4]);
        let source = counted([7, 8]);
        let cap = target.capacity();
        assert_eq!(live(), 6);
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.capacity(), cap);
        assert_eq!(live(), 4);
    }
    assert_eq!(live(), 0);
}

#[test]
fn vec_clone_from_longer_in_place() {
    let mut target = Vector::<u32>::with_capacity(8);
    target.extend([1, 2]);
    let ptr = target.as_ptr();
    target.clone_from(&Vector::from([5, 6, 7]));
    assert_eq!(target, [5, 6, 7]);
    assert_eq!(target.as_ptr(), ptr);
}

#[test]
fn vec_with_len_panic_rolls_back() {
    panic_after(3);
    let res = catch_unwind(|| Vector::<Counted>::with_len(5));
    panic_after(usize::MAX);
    assert!(res.is_err());
    assert_eq!(live(), 0);
}

#[test]
fn vec_clone_panic_rolls_back() {
    let v = counted(0..5);
    panic_after(2);
    let res = catch_unwind(AssertUnwindSafe(|| v.clone()));
    panic_after(usize::MAX);
    assert!(res.is_err());
    assert_eq!(live(), 5);
    assert_eq!(values(&v), [0, 1, 2, 3, 4]);
}

#[test]
fn vec_clone_from_panic_unchanged() {
    let mut target = counted([9]);
    let source = counted(0..5);
    panic_after(2);
    let res = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    panic_after(usize::MAX);
    assert!(res.is_err());
    assert_eq!(values(&target), [9]);
    assert_eq!(target.capacity(), 1);
    assert_eq!(live(), 6);
}

#[test]
fn vec_emplace_panic_reallocating_unchanged() {
    let mut v = Vector::<u32>::with_capacity(2);
    v.extend([1, 2]);
    let res = catch_unwind(AssertUnwindSafe(|| {
        v.emplace(1, || -> u32 { panic!("construction failed") });
    }));
    assert!(res.is_err());
    assert_eq!(v, [1, 2]);
    assert_eq!(v.capacity(), 2);
}

#[test]
fn vec_emplace_panic_in_place_unchanged() {
    let mut v = Vector::<u32>::with_capacity(4);
    v.extend([1, 2]);
    let res = catch_unwind(AssertUnwindSafe(|| {
        v.emplace(0, || -> u32 { panic!("construction failed") });
    }));
    assert!(res.is_err());
    assert_eq!(v, [1, 2]);
}

#[test]
fn vec_resize_drops() {
    let mut v = counted(0..6);
    v.resize_with(2, || Counted::new(0));
    assert_eq!(live(), 2);
    v.resize_with(4, || Counted::new(9));
    assert_eq!(values(&v), [0, 1, 9, 9]);
    v.truncate(1);
    v.clear();
    assert_eq!(live(), 0);
}

#[test]
fn vec_append() {
    let mut v1 = Vector::<u32>::from([1, 2, 3]);
    let mut v2 = Vector::<u32>::from([4, 5, 6]);
    v1.append(&mut v2);
    assert_eq!(v1, [1, 2, 3, 4, 5, 6]);
    assert!(v2.is_empty());
}

#[test]
fn vec_into_iter() {
    let v = counted(0..4);
    let mut iter = v.into_iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next().map(|c| c.0), Some(0));
    assert_eq!(iter.next_back().map(|c| c.0), Some(3));
    assert_eq!(live(), 2);
    drop(iter);
    assert_eq!(live(), 0);
}

#[test]
fn vec_std_conversion() {
    let v: Vector<u32> = vec![1, 2, 3].into();
    assert_eq!(v.capacity(), 3);
    let back = Vec::from(v);
    assert_eq!(back, [1, 2, 3]);
}

#[test]
fn vec_macro() {
    let v = vector![1u32, 2, 3];
    assert_eq!(v, [1, 2, 3]);
    let v = vector!["x"; 3];
    assert_eq!(v, ["x", "x", "x"]);
    let v: Vector<u8> = vector![];
    assert!(v.is_empty());
}

#[test]
fn vec_shrink_to_fit() {
    let mut v = Vector::<u32>::with_capacity(10);
    v.extend([1, 2, 3]);
    v.shrink_to_fit();
    assert_eq!(v.capacity(), 3);
    v.clear();
    v.shrink_to_fit();
    assert_eq!(v.capacity(), 0);
}
