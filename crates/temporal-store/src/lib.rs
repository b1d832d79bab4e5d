/// Generic in-memory undo/redo state management.
///
/// Provides a `TemporalStore` that keeps a present value together with a
/// bounded stack of past values and a stack of undone (future) values.
/// Whether a change becomes an undo step is decided by a pluggable predicate.
pub mod config;
pub mod history;
pub mod operation;
pub mod store;

pub use config::{HistoryPredicate, StoreOptions, DEFAULT_LIMIT};
pub use history::History;
pub use operation::{Outcome, Transition, Update, Updater};
pub use store::TemporalStore;
pub use temporal_store_config::HistorySettings;
