use tracing::debug;

use crate::{BubbleSort, Context, MergeSort, SortStrategy, MERGE_SORT_THRESHOLD};

/// Picks the strategy for `len` dates. Small inputs go to bubble sort, which
/// has less overhead, larger ones to merge sort.
pub fn select_strategy(len: usize) -> Box<dyn SortStrategy> {
    if len > MERGE_SORT_THRESHOLD {
        Box::new(MergeSort)
    } else {
        Box::new(BubbleSort)
    }
}

/// Installs a size-appropriate strategy into the [`Context`] it is bound to.
pub struct Policy<'c> {
    context: &'c mut Context,
}

impl<'c> Policy<'c> {
    pub fn new(context: &'c mut Context) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &Context {
        &*self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut *self.context
    }

    /// Re-derives the strategy from the current number of dates and overwrites
    /// the one in the context. Unset dates count as zero.
    pub fn configure(&mut self) {
        let len = self.context.dates().map_or(0, <[_]>::len);
        let strategy = select_strategy(len);

        debug!(
            target: "datesort::policy",
            len,
            threshold = MERGE_SORT_THRESHOLD,
            strategy = strategy.name(),
            "Selected sort strategy"
        );
        self.context.set_sort_algorithm(strategy);
    }
}
