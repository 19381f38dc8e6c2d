//! Three-way comparison helpers shared by all sorts.
//!
//! A comparator is any `FnMut(&T, &T) -> Ordering`. It must describe a total order: for all `a`,
//! `b` and `c`, exactly one of `a < b`, `a == b` or `a > b` holds, and each relation is
//! transitive. Equal elements are allowed. If the order is not total, the resulting order of the
//! elements is unspecified, but the slice still holds exactly its original elements.

use std::cmp::Ordering;

/// Insertion sort cutoff. Quicksort hands a closed range `[lo, hi]` to insertion sort when
/// `hi - lo < INSERTION_SORT_THRESHOLD`, so ranges of up to this many elements. Merge sort skips
/// its merge passes only for whole inputs shorter than this.
pub const INSERTION_SORT_THRESHOLD: usize = 6;

/// The comparator used when the caller supplies none.
#[inline]
pub fn natural_order<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Turns an ascending comparator into a descending one.
///
/// ```
/// use fixed_sort::comparator::{natural_order, reversed};
///
/// let mut v = [2, 4, 6, 3, 8, 1];
/// fixed_sort::insertion_sort_by(&mut v, reversed(natural_order::<i32>));
/// assert_eq!(v, [8, 6, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn reversed<T: ?Sized, F>(mut compare: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a, b| compare(b, a)
}

/// Adapts a comparator that reports its result as a signed integer, negative for less, zero for
/// equal and positive for greater.
///
/// ```
/// use fixed_sort::comparator::three_way;
///
/// let mut v = ["ccc", "a", "bb"];
/// fixed_sort::merge_sort_by(&mut v, three_way(|a: &&str, b: &&str| a.len() as i32 - b.len() as i32));
/// assert_eq!(v, ["a", "bb", "ccc"]);
/// ```
#[inline]
pub fn three_way<T: ?Sized, F>(mut compare: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> i32,
{
    move |a, b| compare(a, b).cmp(&0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order_matches_ord() {
        assert_eq!(natural_order(&-3, &7), Ordering::Less);
        assert_eq!(natural_order(&7, &-3), Ordering::Greater);
        assert_eq!(natural_order(&7, &7), Ordering::Equal);
        assert_eq!(natural_order("abc", "abd"), Ordering::Less);
    }

    #[test]
    fn reversed_swaps_arguments() {
        let mut desc = reversed(natural_order::<i32>);
        assert_eq!(desc(&1, &2), Ordering::Greater);
        assert_eq!(desc(&2, &1), Ordering::Less);
        assert_eq!(desc(&2, &2), Ordering::Equal);
    }

    #[test]
    fn three_way_uses_sign_only() {
        let mut cmp = three_way(|a: &i32, b: &i32| (a - b) * 1000);
        assert_eq!(cmp(&1, &5), Ordering::Less);
        assert_eq!(cmp(&5, &1), Ordering::Greater);
        assert_eq!(cmp(&5, &5), Ordering::Equal);
    }
}
