/// Configuration for a temporal store: history limit and recording predicate.
use temporal_store_config::HistorySettings;

/// Default maximum number of entries kept in the past stack.
pub const DEFAULT_LIMIT: usize = temporal_store_config::DEFAULT_LIMIT;

/// Decides whether moving from `prev` to `next` creates an undo checkpoint.
pub type HistoryPredicate<T> = Box<dyn Fn(&T, &T) -> bool>;

/// Options for a `TemporalStore`.
///
/// The default predicate records a change whenever `prev != next`. Types
/// without `PartialEq`, or callers who want identity semantics (for example
/// `Rc::ptr_eq`), supply their own via [`StoreOptions::with_predicate`].
pub struct StoreOptions<T> {
    limit: usize,
    should_add_to_history: HistoryPredicate<T>,
}

impl<T: PartialEq + 'static> Default for StoreOptions<T> {
    fn default() -> Self {
        Self::with_predicate(|prev: &T, next: &T| prev != next)
    }
}

impl<T> std::fmt::Debug for StoreOptions<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreOptions")
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

impl<T> StoreOptions<T> {
    /// Creates options with the default limit and a custom predicate.
    pub fn with_predicate<F>(predicate: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        Self {
            limit: DEFAULT_LIMIT,
            should_add_to_history: Box::new(predicate),
        }
    }

    /// Sets the history limit. A limit of 0 is clamped to 1.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = clamp_limit(limit);
        self
    }

    /// Replaces the recording predicate.
    pub fn should_add_to_history<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        self.should_add_to_history = Box::new(predicate);
        self
    }

    /// Effective history limit (always at least 1).
    pub fn history_limit(&self) -> usize {
        self.limit
    }

    /// Evaluates the recording predicate.
    pub fn records(&self, prev: &T, next: &T) -> bool {
        (self.should_add_to_history)(prev, next)
    }
}

impl<T: PartialEq + 'static> StoreOptions<T> {
    /// Builds options from a loaded settings file.
    ///
    /// `record_unchanged` swaps the default inequality check for a predicate
    /// that records every `set`.
    pub fn from_settings(settings: &HistorySettings) -> Self {
        let options = if settings.record_unchanged {
            Self::with_predicate(|_: &T, _: &T| true)
        } else {
            Self::default()
        };
        options.limit(settings.limit)
    }
}

fn clamp_limit(limit: usize) -> usize {
    if limit == 0 {
        tracing::warn!("History limit of 0 is not allowed, clamping to 1");
        return 1;
    }
    limit
}
