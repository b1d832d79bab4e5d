pub mod config;

pub use config::{HistorySettings, CONFIG_ENV_VAR, DEFAULT_LIMIT};
