use herald_core::error::AppError;
use herald_core::{FeedItem, HttpConfig};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Base URL of the Telegram Bot API.
const API_BASE: &str = "https://api.telegram.org";

/// HTTP client for posting articles through the Telegram Bot API.
///
/// Wraps the `sendMessage` method with the fixed formatting Herald
/// uses: HTML parse mode, link preview enabled, and an optional forum
/// topic (message thread) target.
///
/// # Examples
///
/// ```no_run
/// use herald_client::TelegramClient;
/// use herald_core::{FeedItem, HttpConfig};
///
/// # async fn example() -> Result<(), herald_core::AppError> {
/// let client = TelegramClient::new(
///     &HttpConfig::default(),
///     "123456:bot-token",
///     "-1001234567890",
///     None,
/// )?;
/// let item = FeedItem::new(
///     Some("Title".to_string()),
///     "https://example.com/post".to_string(),
///     Some("Summary".to_string()),
/// );
/// client.send_article(&item).await?;
/// # Ok(())
/// # }
/// ```
pub struct TelegramClient {
    client: Client,
    base_url: String,
    chat_id: String,
    topic_id: Option<i64>,
    timeout_secs: u64,
}

/// Request body for the `sendMessage` method.
#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
    disable_web_page_preview: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_thread_id: Option<i64>,
}

/// Response envelope returned by every Bot API method.
///
/// The Bot API always answers with `{"ok": bool, ...}`; failures carry
/// a human-readable `description`.
#[derive(Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramClient {
    /// Creates a client for one bot posting into one chat.
    ///
    /// `topic_id` selects a forum topic (message thread) within the
    /// chat; `None` posts to the chat's main timeline.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NetworkError` if the HTTP client cannot be
    /// built.
    pub fn new(
        config: &HttpConfig,
        bot_token: &str,
        chat_id: &str,
        topic_id: Option<i64>,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: format!("{}/bot{}", API_BASE, bot_token),
            chat_id: chat_id.to_string(),
            topic_id,
            timeout_secs: config.timeout_secs(),
        })
    }

    /// Sends one article as an HTML-formatted message.
    ///
    /// A deliberate single attempt: no retry, no backoff, no special
    /// handling for rate limiting. Any non-2xx status or an `ok: false`
    /// envelope surfaces as [`AppError::Telegram`] so the orchestrator
    /// can end the cycle without recording the URL.
    pub async fn send_article(&self, item: &FeedItem) -> Result<(), AppError> {
        let text = format_message(item);
        let body = SendMessage {
            chat_id: &self.chat_id,
            text: &text,
            parse_mode: "HTML",
            disable_web_page_preview: false,
            message_thread_id: self.topic_id,
        };

        let url = format!("{}/sendMessage", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    AppError::NetworkError(format!("Connection failed: {}", e))
                } else {
                    AppError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // The Bot API sends its envelope on errors too
            if let Ok(api) = serde_json::from_str::<ApiResponse>(&error_text) {
                if let Some(description) = api.description {
                    return Err(AppError::Telegram(format!(
                        "HTTP {}: {}",
                        status.as_u16(),
                        description
                    )));
                }
            }

            return Err(AppError::Telegram(format!("HTTP {}", status.as_u16())));
        }

        let api: ApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::Telegram(format!("Unreadable API response: {}", e)))?;

        if !api.ok {
            return Err(AppError::Telegram(api.description.unwrap_or_else(|| {
                "sendMessage returned ok: false".to_string()
            })));
        }

        Ok(())
    }
}

/// Builds the message body: bold title, summary, and a "Read more"
/// anchor, separated by blank lines.
///
/// Title and summary are passed through verbatim. A summary whose
/// markup was cut mid-tag by the cap is rejected by the API and
/// surfaces as an ordinary publish failure.
pub fn format_message(item: &FeedItem) -> String {
    format!(
        "<b>{}</b>\n\n{}\n\n<a href=\"{}\">Read more</a>",
        item.title, item.summary, item.url
    )
}
