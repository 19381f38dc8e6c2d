//! Bottom-up iterative merge sort with a single scratch buffer.

use std::cmp::{self, Ordering};
use std::ptr;

use crate::comparator::{natural_order, INSERTION_SORT_THRESHOLD};
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
    merge_sort(v, &mut compare);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Merges runs of width 1, 2, 4, ... until a single run spans `v`.
///
/// Inputs shorter than [`INSERTION_SORT_THRESHOLD`] go to insertion sort and never allocate.
/// Otherwise one buffer of `v.len()` elements is allocated up front and reused by every pass.
pub(crate) fn merge_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    if len < INSERTION_SORT_THRESHOLD {
        insertion_sort(v, compare);
        return;
    }

    // The scratch buffer only ever holds bitwise copies, its len stays 0 so it never drops them.
    let mut scratch = Vec::<T>::with_capacity(len);
    let scratch_ptr = scratch.as_mut_ptr();

    let mut width = 1;
    while width < len {
        let mut left = 0;

        // A trailing run without a partner is already sorted, it joins a later pass.
        while left < len - width {
            let mid = left + width;
            let right = cmp::min(mid.saturating_add(width), len);

            // SAFETY: `scratch` has capacity for `len` elements and `right <= len`, so it is
            // valid for `right - left` writes starting at `left`. It is a distinct allocation
            // from `v`.
            unsafe {
                merge(&mut v[left..right], width, scratch_ptr.add(left), compare);
            }

            left = right;
        }

        width = width.saturating_mul(2);
    }
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` into `scratch`, then copies the result back
/// into `v`.
///
/// On equal heads the left run wins, which is what keeps the sort stable. Every element is read
/// for comparison at its place in `v` and copied out only once it is taken, so whatever the
/// comparison function observed is what ends up in `v`. If `compare` panics, `v` has not been
/// written to yet and `scratch` holds nothing that will be dropped.
///
/// SAFETY: The caller must ensure that `0 < mid < v.len()` and that `scratch` is valid for
/// `v.len()` writes and does not overlap `v`.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, scratch: *mut T, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let v_base = v.as_mut_ptr();

    let mut left = 0;
    let mut right = mid;
    let mut out = 0;

    // SAFETY: `left < mid` and `right < len` bound every read, `out < len` bounds every write.
    unsafe {
        while left < mid && right < len {
            let take_right = compare(&*v_base.add(right), &*v_base.add(left)) == Ordering::Less;
            let src = if take_right { right } else { left };

            ptr::copy_nonoverlapping(v_base.add(src), scratch.add(out), 1);

            right += take_right as usize;
            left += !take_right as usize;
            out += 1;
        }

        // At most one of the runs has elements left, they are already in order.
        let left_rem = mid - left;
        ptr::copy_nonoverlapping(v_base.add(left), scratch.add(out), left_rem);
        out += left_rem;

        let right_rem = len - right;
        ptr::copy_nonoverlapping(v_base.add(right), scratch.add(out), right_rem);
        out += right_rem;

        debug_assert_eq!(out, len);

        // `scratch[..len]` is now a permutation of `v`, overwrite without dropping.
        ptr::copy_nonoverlapping(scratch, v_base, len);
    }
}
