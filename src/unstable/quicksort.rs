//! Non-recursive quicksort with Hoare partitioning and insertion sort for small ranges.

use std::cmp::Ordering;

use crate::comparator::{natural_order, INSERTION_SORT_THRESHOLD};
use crate::panic_on_ord_violation;
use crate::stable::insertion_sort::insertion_sort;

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
    quicksort(v, &mut compare);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Sorts `v` by repeatedly partitioning ranges taken from an explicit stack of closed `(lo, hi)`
/// index pairs, so deep or adversarial inputs can't overflow the call stack.
fn quicksort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut stack: Vec<(usize, usize)> = vec![(0, len - 1)];

    while let Some((lo, hi)) = stack.pop() {
        if hi <= lo {
            // Zero or one element, nothing to do for this range but others may still be pending.
            continue;
        }

        if hi - lo < INSERTION_SORT_THRESHOLD {
            insertion_sort(&mut v[lo..=hi], compare);
            continue;
        }

        let split = lo + hoare_partition(&mut v[lo..=hi], compare);

        if split + 1 < hi {
            stack.push((split + 1, hi));
        }
        if split > lo {
            stack.push((lo, split));
        }
    }
}

/// Partitions `v` around its middle element and returns the index `p` such that everything in
/// `v[..=p]` is less than or equal to the pivot and everything in `v[p + 1..]` is greater than or
/// equal to it. `p` is always smaller than `v.len() - 1`, so both sides are non-empty.
///
/// The cursors start on the first and last element and step past each swapped pair.
///
/// The pivot is never copied out of the slice. Its index is followed through the swaps instead,
/// so `T` need not be `Clone` and comparisons are always made against the real element.
fn hoare_partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    debug_assert!(len >= 2);

    let mut pivot = (len - 1) / 2;

    let mut left = 0;
    let mut right = len - 1;

    loop {
        // With a valid order the pivot, or an element swapped past it, stops both scans before
        // they leave the slice. Running off either end is only possible if `compare` violates Ord.
        while compare(&v[left], &v[pivot]) == Ordering::Less {
            left += 1;
            if left == len {
                panic_on_ord_violation();
            }
        }

        while compare(&v[right], &v[pivot]) == Ordering::Greater {
            if right == 0 {
                panic_on_ord_violation();
            }
            right -= 1;
        }

        if left >= right {
            break;
        }

        v.swap(left, right);
        if pivot == left {
            pivot = right;
        } else if pivot == right {
            pivot = left;
        }

        left += 1;
        right -= 1;
    }

    if right >= len - 1 {
        // Would push the same range again and never finish.
        panic_on_ord_violation();
    }

    right
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_sort_covers_threshold_sized_ranges() {
        let count_comparisons = |len: usize| {
            let mut v = (0..len as i32).collect::<Vec<_>>();
            let mut comp_count = 0;
            sort_by(&mut v, |a, b| {
                comp_count += 1;
                a.cmp(b)
            });
            assert_eq!(v, (0..len as i32).collect::<Vec<_>>());
            comp_count
        };

        // Sorted input costs insertion sort exactly one comparison per element after the first.
        assert_eq!(count_comparisons(INSERTION_SORT_THRESHOLD), INSERTION_SORT_THRESHOLD - 1);
        assert!(count_comparisons(INSERTION_SORT_THRESHOLD + 1) > INSERTION_SORT_THRESHOLD);
    }

    #[test]
    fn partition_splits_around_pivot() {
        let mut v = [5, 3, 8, 6, 1, 0, 4, 9, 2, 7];
        let p = hoare_partition(&mut v, &mut natural_order);

        assert!(p < v.len() - 1);
        let max_left = v[..=p].iter().max().unwrap();
        let min_right = v[p + 1..].iter().min().unwrap();
        assert!(max_left <= min_right, "{v:?} split at {p}");
    }

    #[test]
    fn partition_all_equal_terminates() {
        let mut v = [7; 32];
        let p = hoare_partition(&mut v, &mut natural_order);
        assert!(p < v.len() - 1);
    }

    #[test]
    fn partition_two_elements() {
        let mut v = [2, 1];
        assert_eq!(hoare_partition(&mut v, &mut natural_order), 0);
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn hand_written_case_table() {
        let cases: [&[i32]; 13] = [
            &[],
            &[100],
            &[1, 0],
            &[1, 2, 3, 4, 5],
            &[1, 2, 1, 1, 1],
            &[2, 2, 1, 1, 2],
            &[2, 4, 6, 3, 8, 1],
            &[2, -4, -3, 6, -8, 1],
            &[
                2, -4, -3, -3, -3, 6, 1, 1, 1, 1, 1, 1, 1, 1, -5, -5, -3, -3, -3, -5, -5, -5, -5,
                -5, 1,
            ],
            &[5, 3, 8, 6, 1, 0, 4],
            &[-801, 922, -259, -479, 65, -575, -338, -18, -977, -464, -836],
            &[18, -64, 94, 72, -77, 11, 62, 38, -46, -8],
            &[
                -89, 44, 27, -28, -62, -90, 8, 29, -45, 95, 85, 6, 27, 24, 86, 78, -28, 27, 94,
                -61, -2, -89, -32, -86, -98, 35, 59, 41, -25, -12, -50, -69, 32, 20, -49, -77, 84,
                43, -83,
            ],
        ];

        for case in cases {
            let mut expected = case.to_vec();
            expected.sort();

            let mut v = case.to_vec();
            sort(&mut v);
            assert_eq!(v, expected);

            let mut expected_desc = case.to_vec();
            expected_desc.sort_by(|a, b| b.cmp(a));

            let mut v = case.to_vec();
            sort_by(&mut v, |a, b| b.cmp(a));
            assert_eq!(v, expected_desc);
        }
    }
}
