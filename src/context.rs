use core::fmt;

use tracing::trace;

use crate::{ContextError, Date, SortStrategy};

/// Holds the dates to sort and the strategy that will sort them.
#[derive(Default)]
pub struct Context {
    dates: Option<Vec<Date>>,
    sort_algorithm: Option<Box<dyn SortStrategy>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dates(&self) -> Option<&[Date]> {
        self.dates.as_deref()
    }

    pub fn set_dates(&mut self, dates: Vec<Date>) {
        self.dates = Some(dates);
    }

    pub fn into_dates(self) -> Option<Vec<Date>> {
        self.dates
    }

    pub fn sort_algorithm(&self) -> Option<&dyn SortStrategy> {
        self.sort_algorithm.as_deref()
    }

    pub fn set_sort_algorithm(&mut self, sort_algorithm: Box<dyn SortStrategy>) {
        self.sort_algorithm = Some(sort_algorithm);
    }

    /// Runs the installed strategy over the dates, in place.
    ///
    /// # Panics
    ///
    /// Panics if no strategy has been installed or no dates have been set.
    /// Both are caller bugs, see [`Context::try_sort`] to get them as a value.
    #[track_caller]
    pub fn sort(&mut self) {
        if let Err(err) = self.try_sort() {
            panic!("{err}");
        }
    }

    pub fn try_sort(&mut self) -> Result<(), ContextError> {
        let sort_algorithm = self
            .sort_algorithm
            .as_deref()
            .ok_or(ContextError::StrategyNotSet)?;
        let dates = self.dates.as_deref_mut().ok_or(ContextError::DatesNotSet)?;

        trace!(
            target: "datesort::context",
            strategy = sort_algorithm.name(),
            len = dates.len(),
            "Sorting dates"
        );
        sort_algorithm.perform_sort(dates);
        Ok(())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("dates", &self.dates.as_ref().map(Vec::len))
            .field("sort_algorithm", &self.sort_algorithm().map(|s| s.name()))
            .finish()
    }
}
