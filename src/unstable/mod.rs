pub mod quicksort;
