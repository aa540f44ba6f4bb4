//! Fixed-size lane scratch arrays.
//!
//! A backend names its scratch type as `[T; LANES]`, which gives the fallback
//! layers a stack-resident buffer sized at compile time without heap
//! allocation.

// ============================================================================
// Lane Array
// ============================================================================

/// A stack array holding one value per lane.
pub trait LaneArray<T: Copy>: Copy + AsRef<[T]> + AsMut<[T]> {
    /// Array with every lane set to `value`.
    fn splat(value: T) -> Self;

    /// Number of lanes held by the array.
    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }

    /// Returns `true` for a zero-lane array.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Copy, const N: usize> LaneArray<T> for [T; N] {
    #[inline]
    fn splat(value: T) -> Self {
        [value; N]
    }
}
