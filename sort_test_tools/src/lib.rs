pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;

    /// Quadratic sorts cap the input lengths they are tested with.
    fn max_test_len() -> usize {
        usize::MAX
    }
}

pub mod patterns;
