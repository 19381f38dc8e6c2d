//! Reference sort backed by the standard library, used as the oracle for the other sorts.

use std::cmp::Ordering;

use crate::comparator::natural_order;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, natural_order);
}

/// Stable, inherits allocation and complexity from [`slice::sort_by`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.sort_by(compare);
}
