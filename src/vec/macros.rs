/// Construct a [`Vector`](crate::Vector) using the growth strategy
/// [`GrowDoubling`](crate::GrowDoubling).
///
/// ```
/// use advanced_vector::vector;
/// let v = vector![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
/// let z = vector![0u8; 4];
/// assert_eq!(z.len(), 4);
/// ```
#[macro_export]
macro_rules! vector {
    () => (
        $crate::vec::Vector::<_, $crate::grow::GrowDoubling>::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::vec::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::vec::Vector::<_, $crate::grow::GrowDoubling>::from([$($x),+])
    );
}
