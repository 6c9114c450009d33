//! Sorting calendar dates with a strategy picked by input size.
//!
//! A [`Policy`] looks at how many dates a [`Context`] holds and installs either
//! [`BubbleSort`] or [`MergeSort`] into it. [`Context::sort`] then runs whatever
//! was installed over the dates, in place.

pub mod bubble;
pub mod merge;

mod context;
mod error;
mod policy;

pub use context::Context;
pub use error::ContextError;
pub use policy::{select_strategy, Policy};

/// Point-in-time value being sorted.
pub type Date = chrono::NaiveDate;

/// Above this many dates the policy picks merge sort, at or below it bubble sort.
pub const MERGE_SORT_THRESHOLD: usize = 10;

/// An interchangeable algorithm that sorts dates ascending, in place.
pub trait SortStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn perform_sort(&self, dates: &mut [Date]);
}

/// O(n²) adjacent-swap sort. Cheap to set up, stable.
#[derive(Copy, Clone, Debug, Default)]
pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble_sort"
    }

    #[inline(always)]
    fn perform_sort(&self, dates: &mut [Date]) {
        bubble::sort(dates);
    }
}

/// O(n log n) top-down merge sort, stable.
#[derive(Copy, Clone, Debug, Default)]
pub struct MergeSort;

impl SortStrategy for MergeSort {
    fn name(&self) -> &'static str {
        "merge_sort"
    }

    #[inline(always)]
    fn perform_sort(&self, dates: &mut [Date]) {
        merge::sort(dates);
    }
}
