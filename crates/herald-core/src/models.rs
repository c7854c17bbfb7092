/// Placeholder title used when a feed entry carries none.
pub const DEFAULT_TITLE: &str = "No title";

/// Maximum number of characters of an entry summary that survive into a post.
pub const SUMMARY_MAX_CHARS: usize = 400;

/// One article pulled out of a feed document.
///
/// Items are transient: they live for a single cycle and are never
/// persisted. The `url` doubles as the item's identity for
/// deduplication against the posted-URL ledger.
///
/// # Examples
///
/// ```
/// use herald_core::FeedItem;
///
/// let item = FeedItem::new(
///     None,
///     "https://example.com/post".to_string(),
///     Some("A short summary".to_string()),
/// );
/// assert_eq!(item.title, "No title");
/// assert_eq!(item.summary, "A short summary");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub url: String,
    pub summary: String,
}

impl FeedItem {
    /// Builds an item from raw parsed fields, applying the title
    /// placeholder and the summary cap.
    pub fn new(title: Option<String>, url: String, summary: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            url,
            summary: truncate_summary(&summary.unwrap_or_default()),
        }
    }
}

/// Caps a summary at [`SUMMARY_MAX_CHARS`] characters.
///
/// The cut is a raw slice: not word-boundary aware, and it may split
/// embedded markup mid-tag. Counting characters rather than bytes
/// keeps the cut valid for multi-byte text.
pub fn truncate_summary(summary: &str) -> String {
    match summary.char_indices().nth(SUMMARY_MAX_CHARS) {
        Some((idx, _)) => summary[..idx].to_string(),
        None => summary.to_string(),
    }
}
