//! Reference-counted storage for heap values.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Shared, immutable heap allocation.
///
/// The constructor is crate-private: heap values are created through the
/// `Value::` factory methods only. Equality compares contents; use
/// [`Heap::ptr_eq`] for reference identity.
#[derive(Clone, PartialEq)]
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }

    /// Whether both handles point to the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Address of the allocation, stable while any handle is alive.
    #[inline]
    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
