//! Herald CLI - command-line interface for the Herald feed poster
//!
//! This crate ties the feed client, the posted-URL ledger, and the
//! Telegram publisher together into runnable cycles.

pub mod config;

pub use config::{Command, Settings};
