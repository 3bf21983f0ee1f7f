//! The `dynarr!` literal macro.

/// Build a [`DynamicArray`](crate::DynamicArray) from a literal list.
///
/// ```
/// use dynarr_array::dynarr;
///
/// let empty: dynarr_array::DynamicArray<u8> = dynarr![];
/// assert!(empty.is_empty());
///
/// let listed = dynarr![1, 2, 3];
/// assert_eq!(listed, [1, 2, 3]);
/// assert_eq!(listed.capacity(), 3);
///
/// let repeated = dynarr!["x"; 2];
/// assert_eq!(repeated, ["x", "x"]);
/// ```
#[macro_export]
macro_rules! dynarr {
    () => {
        $crate::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynamicArray::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($x),+])
    };
}
