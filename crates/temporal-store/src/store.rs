/// Generic undo/redo store over an arbitrary value type.
///
/// `TemporalStore` owns a [`History`] and the options that govern it. Every
/// mutator funnels into [`History::apply`], and the derived reads
/// (`state`, `can_undo`, `can_redo`) are projections of that one value.
use crate::config::StoreOptions;
use crate::history::History;
use crate::operation::{Outcome, Transition, Update};

/// Tracks a present value with a bounded past and an unbounded future.
///
/// Undo and redo on an empty stack are no-ops; gate UI affordances on
/// [`can_undo`](Self::can_undo) and [`can_redo`](Self::can_redo).
pub struct TemporalStore<T> {
    history: History<T>,
    options: StoreOptions<T>,
    /// Whether `set` may create history entries (false while paused).
    recording: bool,
}

impl<T> std::fmt::Debug for TemporalStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemporalStore")
            .field("past_len", &self.history.past_len())
            .field("future_len", &self.history.future_len())
            .field("limit", &self.options.history_limit())
            .field("recording", &self.recording)
            .finish()
    }
}

impl<T: PartialEq + 'static> TemporalStore<T> {
    /// Creates a store with the default limit (50) that records a change
    /// whenever the new value differs from the present.
    pub fn new(initial: T) -> Self {
        Self::with_options(initial, StoreOptions::default())
    }
}

impl<T> TemporalStore<T> {
    pub fn with_options(initial: T, options: StoreOptions<T>) -> Self {
        Self {
            history: History::new(initial),
            options,
            recording: true,
        }
    }

    /// The current value.
    pub fn state(&self) -> &T {
        self.history.present()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replaces the present with a value or the result of an updater.
    ///
    /// The new value always becomes present. It is recorded as an undo step
    /// only when recording is active and the predicate accepts the change;
    /// a recorded step also discards any redo entries.
    pub fn set(&mut self, update: impl Into<Update<T>>) -> Outcome {
        self.apply(Transition::Set(update.into()))
    }

    /// Functional form of [`set`](Self::set).
    pub fn set_with<F>(&mut self, f: F) -> Outcome
    where
        F: FnOnce(&T) -> T + 'static,
    {
        self.apply(Transition::set_with(f))
    }

    /// Restores the most recent past value.
    pub fn undo(&mut self) -> Outcome {
        self.apply(Transition::Undo)
    }

    /// Restores the nearest future value.
    pub fn redo(&mut self) -> Outcome {
        self.apply(Transition::Redo)
    }

    /// Applies a single transition.
    pub fn apply(&mut self, transition: Transition<T>) -> Outcome {
        let outcome = self
            .history
            .apply(transition, &self.options, self.recording);
        tracing::trace!(
            ?outcome,
            past = self.history.past_len(),
            future = self.history.future_len(),
            "Applied history transition"
        );
        outcome
    }

    /// Applies queued transitions in order.
    ///
    /// Each updater sees the present left by the transition before it, and
    /// reads after the call reflect the whole batch.
    pub fn apply_batch<I>(&mut self, transitions: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = Transition<T>>,
    {
        transitions
            .into_iter()
            .map(|transition| self.apply(transition))
            .collect()
    }

    /// Stops `set` from creating history entries until resumed.
    pub fn pause_recording(&mut self) {
        self.recording = false;
    }

    pub fn resume_recording(&mut self) {
        self.recording = true;
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Drops all past and future entries. The present is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Past values, oldest first.
    pub fn past(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.history.past()
    }

    /// Future values in the order `redo` replays them.
    pub fn future(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.history.future()
    }

    pub fn past_len(&self) -> usize {
        self.history.past_len()
    }

    pub fn future_len(&self) -> usize {
        self.history.future_len()
    }

    /// Effective history limit.
    pub fn limit(&self) -> usize {
        self.options.history_limit()
    }

    pub fn history(&self) -> &History<T> {
        &self.history
    }

    /// Consumes the store, returning the present value.
    pub fn into_state(self) -> T {
        self.history.into_present()
    }
}
