#![no_main]

use libfuzzer_sys::fuzz_target;

use fixed_sort::stable::merge_sort as test_sort;

fuzz_target!(|data: &[u8]| {
    // Sort on the high nibble only, the low nibble catches reordering of equal keys.
    let mut v = data.to_vec();
    let mut expected = v.clone();
    expected.sort_by_key(|b| b >> 4);

    test_sort::sort_by(&mut v, |a, b| (a >> 4).cmp(&(b >> 4)));
    assert_eq!(v, expected);
});
