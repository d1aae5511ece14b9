//! Element count of fixed-size arrays.

/// Number of elements in `a`.
///
/// Counts elements rather than dividing byte sizes, so zero-length arrays
/// and zero-sized element types both work.
pub const fn array_size<T, const N: usize>(_a: &[T; N]) -> usize {
    N
}

/// `array_size!(a)` is `array_size(&a)`, usable in `const` items.
#[macro_export]
macro_rules! array_size {
    ($a:expr) => {
        $crate::array_size::array_size(&$a)
    };
}
