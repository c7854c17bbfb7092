use thiserror::Error;

/// Application-wide error types.
///
/// Every fallible operation in Herald returns one of these. Ledger
/// I/O errors convert automatically from `std::io::Error` via the
/// `#[from]` attribute; the HTTP clients map transport failures onto
/// the network variants themselves so the caller can tell a dead
/// connection from a rejected request.
#[derive(Error, Debug)]
pub enum AppError {
    /// Mandatory settings missing or unusable at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A feed endpoint could not be retrieved.
    ///
    /// These are isolated per endpoint: the orchestrator logs the
    /// failure and continues with the remaining feeds.
    #[error("Feed error for {url}: {reason}")]
    Feed { url: String, reason: String },

    /// A retrieved document was not a parseable RSS/Atom feed.
    #[error("Feed parse error: {0}")]
    Parse(String),

    /// The Telegram Bot API rejected the message.
    #[error("Telegram API error: {0}")]
    Telegram(String),

    /// Network or connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Ledger file I/O failed.
    #[error("Ledger I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a user-friendly error message suitable for CLI output.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(msg) => {
                format!(
                    "Configuration problem: {}\n   Check your environment variables or .env file.",
                    msg
                )
            }
            AppError::Telegram(msg) => {
                if msg.contains("401") || msg.contains("Unauthorized") {
                    "Telegram rejected the bot credentials.\n   Check your TELEGRAM_BOT_TOKEN environment variable.".to_string()
                } else if msg.contains("chat not found") {
                    "Telegram could not find the destination chat.\n   Check your TELEGRAM_CHAT_ID environment variable.".to_string()
                } else {
                    format!("Telegram API error: {}", msg)
                }
            }
            AppError::NetworkError(msg) => {
                format!("Network error: {}\n   Check your internet connection.", msg)
            }
            AppError::Timeout(secs) => {
                format!(
                    "Request timed out after {} seconds.\n   The server may be slow or unreachable. Try again later.",
                    secs
                )
            }
            _ => self.to_string(),
        }
    }
}
