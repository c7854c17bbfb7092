//! Herald Core - domain types, error handling, and cycle logic.

pub mod config;
pub mod cycle;
pub mod error;
pub mod models;

pub use config::HttpConfig;
pub use cycle::{choose_one, filter_new, CycleOutcome, CycleStats};
pub use error::AppError;
pub use models::{truncate_summary, FeedItem, DEFAULT_TITLE, SUMMARY_MAX_CHARS};
