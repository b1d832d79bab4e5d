/// The composite past/present/future state and its transition function.
///
/// All three sequences change together inside [`History::apply`], so the
/// cross-field rules (future cleared on a recorded set, past bounded by the
/// limit) hold after every transition.
use std::collections::VecDeque;

use crate::config::StoreOptions;
use crate::operation::{Outcome, Transition, Update};

/// Past, present and future values of a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    /// Superseded values, oldest first.
    past: VecDeque<T>,
    present: T,
    /// Undone values, nearest first.
    future: VecDeque<T>,
}

impl<T> History<T> {
    /// Creates a history with empty past and future.
    pub fn new(present: T) -> Self {
        Self {
            past: VecDeque::new(),
            present,
            future: VecDeque::new(),
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    /// Past values, oldest first.
    pub fn past(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.past.iter()
    }

    /// Future values in redo order (nearest first).
    pub fn future(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.future.iter()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn into_present(self) -> T {
        self.present
    }

    /// Drops past and future, keeping the present.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Applies one transition.
    ///
    /// `record` is the store-level recording switch; when false every `Set`
    /// is applied without creating a history entry.
    pub fn apply(
        &mut self,
        transition: Transition<T>,
        options: &StoreOptions<T>,
        record: bool,
    ) -> Outcome {
        match transition {
            Transition::Set(update) => self.set(update, options, record),
            Transition::Undo => self.undo(),
            Transition::Redo => self.redo(options.history_limit()),
        }
    }

    fn set(&mut self, update: Update<T>, options: &StoreOptions<T>, record: bool) -> Outcome {
        let next = update.resolve(&self.present);

        if !record || !options.records(&self.present, &next) {
            self.present = next;
            return Outcome::Replaced;
        }

        let prev = std::mem::replace(&mut self.present, next);
        self.push_past(prev, options.history_limit());
        if !self.future.is_empty() {
            tracing::debug!("Discarding {} redo entries", self.future.len());
            self.future.clear();
        }
        Outcome::Recorded
    }

    fn undo(&mut self) -> Outcome {
        let Some(prior) = self.past.pop_back() else {
            return Outcome::Unchanged;
        };
        let displaced = std::mem::replace(&mut self.present, prior);
        self.future.push_front(displaced);
        Outcome::Undone
    }

    fn redo(&mut self, limit: usize) -> Outcome {
        let Some(next) = self.future.pop_front() else {
            return Outcome::Unchanged;
        };
        let displaced = std::mem::replace(&mut self.present, next);
        self.push_past(displaced, limit);
        Outcome::Redone
    }

    /// Pushes onto past, evicting the oldest entries beyond `limit`.
    fn push_past(&mut self, value: T, limit: usize) {
        self.past.push_back(value);
        if self.past.len() > limit {
            let excess = self.past.len() - limit;
            self.past.drain(..excess);
            tracing::debug!("Evicted {excess} oldest history entries (limit {limit})");
        }
    }
}
