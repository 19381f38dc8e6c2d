//! Stable in-place insertion sort, also the small-range fallback of quicksort and merge sort.

use std::cmp::Ordering;
use std::ops::{Bound, Range, RangeBounds};

use crate::comparator::natural_order;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, natural_order);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut compare);
}

/// Sorts only the elements of `v` inside `range`, leaving everything else untouched.
///
/// `2..=6` sorts the closed index range `[2, 6]`. A range that starts past its end, like `5..=2`,
/// or that covers fewer than two elements, does nothing.
///
/// # Panics
///
/// Panics if the range ends past `v.len()`.
///
/// ```
/// let mut v = [18, -64, 94, 72, -77, 11, 62, 38, -46, -8];
/// fixed_sort::insertion_sort_range(&mut v, 2..=6);
/// assert_eq!(v, [18, -64, -77, 11, 62, 72, 94, 38, -46, -8]);
/// ```
#[inline]
pub fn sort_range<T, R>(v: &mut [T], range: R)
where
    T: Ord,
    R: RangeBounds<usize>,
{
    sort_range_by(v, range, natural_order);
}

/// Like [`sort_range`], ordered by `compare`.
#[inline]
pub fn sort_range_by<T, R, F>(v: &mut [T], range: R, mut compare: F)
where
    R: RangeBounds<usize>,
    F: FnMut(&T, &T) -> Ordering,
{
    if let Some(range) = resolve_range(&range, v.len()) {
        insertion_sort(&mut v[range], &mut compare);
    }
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Sorts all of `v` by inserting each element into the sorted prefix before it.
///
/// The element being inserted stays at its position while the prefix is scanned, and only
/// predecessors that compare strictly greater are passed over, so equal elements keep their
/// order. Nothing is moved until the insertion point is known, which keeps the slice intact if
/// `compare` panics.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let mut hole = i;
        while hole > 0 && compare(&v[hole - 1], &v[i]) == Ordering::Greater {
            hole -= 1;
        }

        if hole != i {
            // Shift `v[hole..i]` one to the right and drop `v[i]` into the gap.
            v[hole..=i].rotate_right(1);
        }
    }
}

/// Turns `range` into a half-open index range of `v`, or `None` if it holds fewer than two
/// elements.
fn resolve_range<R: RangeBounds<usize>>(range: &R, len: usize) -> Option<Range<usize>> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1)?,
        Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1).unwrap_or_else(|| end_overflow(len)),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if end > len {
        end_out_of_range(end, len);
    }

    if end.saturating_sub(start) < 2 {
        return None;
    }

    Some(start..end)
}

#[inline(never)]
#[cold]
fn end_out_of_range(end: usize, len: usize) -> ! {
    panic!("range end index {end} out of range for slice of length {len}");
}

#[inline(never)]
#[cold]
fn end_overflow(len: usize) -> ! {
    end_out_of_range(usize::MAX, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE_INPUT: [i32; 10] = [18, -64, 94, 72, -77, 11, 62, 38, -46, -8];

    #[test]
    fn partial_range() {
        let mut v = RANGE_INPUT;
        sort_range(&mut v, 2..=6);
        assert_eq!(v, [18, -64, -77, 11, 62, 72, 94, 38, -46, -8]);
    }

    #[test]
    fn partial_range_half_open() {
        let mut v = RANGE_INPUT;
        sort_range(&mut v, 2..7);
        assert_eq!(v, [18, -64, -77, 11, 62, 72, 94, 38, -46, -8]);
    }

    #[test]
    fn full_range_matches_sort() {
        let mut a = RANGE_INPUT;
        let mut b = RANGE_INPUT;
        sort_range(&mut a, ..);
        sort(&mut b);
        assert_eq!(a, b);

        let mut expected = RANGE_INPUT;
        expected.sort();
        assert_eq!(a, expected);
    }

    #[test]
    fn degenerate_ranges_are_noops() {
        let mut v = RANGE_INPUT;

        sort_range(&mut v, 6..=2);
        sort_range(&mut v, 4..=4);
        sort_range(&mut v, 4..4);
        sort_range(&mut v, 10..);
        assert_eq!(v, RANGE_INPUT);

        let mut empty: [i32; 0] = [];
        sort_range(&mut empty, ..);
        sort(&mut empty);
    }

    #[test]
    fn two_element_range() {
        let mut v = [3, 2, 1];
        sort_range(&mut v, 1..=2);
        assert_eq!(v, [3, 1, 2]);
    }

    #[test]
    #[should_panic]
    fn range_past_end_panics() {
        let mut v = RANGE_INPUT;
        sort_range(&mut v, 5..=10);
    }

    #[test]
    fn range_with_comparator() {
        let mut v = RANGE_INPUT;
        sort_range_by(&mut v, 2..=6, |a, b| b.cmp(a));
        assert_eq!(v, [18, -64, 94, 72, 62, 11, -77, 38, -46, -8]);
    }

    #[test]
    fn keeps_equal_elements_in_order() {
        let mut v = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e'), (2, 'f')];
        sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert_eq!(
            v,
            [(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'f')]
        );
    }
}
