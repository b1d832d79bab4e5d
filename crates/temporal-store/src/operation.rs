// Transitions a store can apply and the outcomes they report.

/// Function form of an update: computes the next value from the present.
pub type Updater<T> = Box<dyn FnOnce(&T) -> T>;

/// The argument to `set`: either a replacement value or a function of the
/// present value.
///
/// An updater is resolved against the present at the moment the transition
/// is applied, so queued updaters always see the latest value.
pub enum Update<T> {
    Value(T),
    Updater(Updater<T>),
}

impl<T> Update<T> {
    /// Wraps a function of the present value.
    pub fn with<F>(f: F) -> Self
    where
        F: FnOnce(&T) -> T + 'static,
    {
        Self::Updater(Box::new(f))
    }

    /// Produces the candidate next value.
    pub fn resolve(self, present: &T) -> T {
        match self {
            Self::Value(value) => value,
            Self::Updater(f) => f(present),
        }
    }
}

impl<T> From<T> for Update<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Update<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Updater(_) => f.write_str("Updater(..)"),
        }
    }
}

/// A single event in the history state machine.
#[derive(Debug)]
pub enum Transition<T> {
    Set(Update<T>),
    Undo,
    Redo,
}

impl<T> Transition<T> {
    /// Shorthand for `Transition::Set(Update::Value(value))`.
    pub fn set(value: T) -> Self {
        Self::Set(Update::Value(value))
    }

    /// Shorthand for `Transition::Set(Update::with(f))`.
    pub fn set_with<F>(f: F) -> Self
    where
        F: FnOnce(&T) -> T + 'static,
    {
        Self::Set(Update::with(f))
    }
}

/// What applying a transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The new value became present and the old one was pushed onto past.
    Recorded,
    /// The new value became present without creating a history entry.
    Replaced,
    /// The previous value was restored; the displaced present moved to future.
    Undone,
    /// The next future value was restored; the displaced present moved to past.
    Redone,
    /// Undo or redo with an empty stack. Nothing changed.
    Unchanged,
}

impl Outcome {
    /// Whether past, present or future changed.
    pub fn is_change(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}
