//! In-place and semi-in-place sorts over fixed-length slices with a pluggable three-way
//! comparison.
//!
//! Every algorithm comes as a `sort` / `sort_by` pair. `sort` orders by [`Ord`], `sort_by` takes
//! any `FnMut(&T, &T) -> Ordering`. The algorithms never change the length of the slice and never
//! require `Clone` or `Default` from the element type.
//!
//! ```
//! let mut v = [2, 4, 6, 3, 8, 1];
//!
//! fixed_sort::quick_sort(&mut v);
//! assert_eq!(v, [1, 2, 3, 4, 6, 8]);
//!
//! fixed_sort::merge_sort_by(&mut v, |a, b| b.cmp(a));
//! assert_eq!(v, [8, 6, 4, 3, 2, 1]);
//! ```

pub mod comparator;
pub mod stable;
pub mod unstable;

pub use comparator::INSERTION_SORT_THRESHOLD;

pub use stable::array_sort::{sort as array_sort, sort_by as array_sort_by};
pub use stable::insertion_sort::{
    sort as insertion_sort, sort_by as insertion_sort_by, sort_range as insertion_sort_range,
    sort_range_by as insertion_sort_range_by,
};
pub use stable::merge_sort::{sort as merge_sort, sort_by as merge_sort_by};
pub use unstable::quicksort::{sort as quick_sort, sort_by as quick_sort_by};

#[inline(never)]
#[cold]
pub(crate) fn panic_on_ord_violation() -> ! {
    panic!("Ord violation");
}
