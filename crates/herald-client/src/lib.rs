//! Herald Client - HTTP clients for external services
//!
//! This crate provides HTTP clients for the two collaborators Herald
//! talks to:
//!
//! - [`feed`] - RSS/Atom feed endpoints
//! - [`telegram`] - the Telegram Bot API
//!
//! # Overview
//!
//! The clients handle request building, response parsing, and mapping
//! transport failures onto [`herald_core::AppError`]. Neither retries:
//! feed failures are isolated per endpoint by the orchestrator, and the
//! publish is a deliberate single attempt per cycle.

pub mod feed;
pub mod telegram;

// Re-export main client types
pub use feed::FeedClient;
pub use telegram::TelegramClient;
