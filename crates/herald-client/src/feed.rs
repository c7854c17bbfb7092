use feed_rs::parser;
use herald_core::error::AppError;
use herald_core::{FeedItem, HttpConfig};
use reqwest::Client;

/// HTTP client that retrieves feed endpoints and parses them into
/// [`FeedItem`]s.
///
/// # Examples
///
/// ```no_run
/// use herald_client::FeedClient;
/// use herald_core::HttpConfig;
///
/// # async fn example() -> Result<(), herald_core::AppError> {
/// let client = FeedClient::new(&HttpConfig::default())?;
/// let items = client.fetch("https://example.com/feed.xml").await?;
/// println!("Found {} entries", items.len());
/// # Ok(())
/// # }
/// ```
pub struct FeedClient {
    client: Client,
    timeout_secs: u64,
}

impl FeedClient {
    /// Creates a feed client from the shared HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NetworkError` if the HTTP client cannot be
    /// built.
    pub fn new(config: &HttpConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs(),
        })
    }

    /// Retrieves one endpoint and parses the document into items.
    ///
    /// Document entry order is preserved. Retrieval and parse failures
    /// surface as errors so the caller can decide whether to skip the
    /// endpoint or abort.
    pub async fn fetch(&self, url: &str) -> Result<Vec<FeedItem>, AppError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout_secs)
            } else {
                AppError::Feed {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Feed {
                url: url.to_string(),
                reason: format!("HTTP {}", status.as_u16()),
            });
        }

        let body = response.bytes().await.map_err(|e| AppError::Feed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        parse_items(&body)
    }
}

/// Parses a syndication document (RSS or Atom) into feed items.
///
/// The first link of each entry becomes the item URL; entries without
/// any link are dropped silently, since the URL is the identity the
/// whole deduplication scheme keys on. Title placeholder and summary
/// cap are applied by [`FeedItem::new`].
pub fn parse_items(content: &[u8]) -> Result<Vec<FeedItem>, AppError> {
    let feed = parser::parse(content).map_err(|e| AppError::Parse(e.to_string()))?;

    let items = feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let url = entry.links.first()?.href.clone();
            let title = entry.title.map(|t| t.content);
            let summary = entry.summary.map(|s| s.content);
            Some(FeedItem::new(title, url, summary))
        })
        .collect();

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::{DEFAULT_TITLE, SUMMARY_MAX_CHARS};

    fn rss_doc(items: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Channel</title>
    <link>https://example.com</link>
    <description>fixture</description>
    {}
  </channel>
</rss>"#,
            items
        )
    }

    #[test]
    fn test_parse_rss_items() {
        let doc = rss_doc(
            r#"<item>
                 <title>First</title>
                 <link>https://example.com/1</link>
                 <description>first summary</description>
               </item>
               <item>
                 <title>Second</title>
                 <link>https://example.com/2</link>
                 <description>second summary</description>
               </item>"#,
        );

        let items = parse_items(doc.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "First");
        assert_eq!(items[0].url, "https://example.com/1");
        assert_eq!(items[0].summary, "first summary");
        assert_eq!(items[1].url, "https://example.com/2");
    }

    #[test]
    fn test_entry_without_link_is_dropped() {
        let doc = rss_doc(
            r#"<item>
                 <title>No link here</title>
                 <description>orphan</description>
               </item>
               <item>
                 <title>Linked</title>
                 <link>https://example.com/linked</link>
               </item>"#,
        );

        let items = parse_items(doc.as_bytes()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url, "https://example.com/linked");
    }

    #[test]
    fn test_entry_without_title_gets_placeholder() {
        let doc = rss_doc(
            r#"<item>
                 <link>https://example.com/untitled</link>
                 <description>still has a body</description>
               </item>"#,
        );

        let items = parse_items(doc.as_bytes()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, DEFAULT_TITLE);
    }

    #[test]
    fn test_long_description_is_capped() {
        let long = "s".repeat(SUMMARY_MAX_CHARS + 200);
        let doc = rss_doc(&format!(
            r#"<item>
                 <title>Long</title>
                 <link>https://example.com/long</link>
                 <description>{}</description>
               </item>"#,
            long
        ));

        let items = parse_items(doc.as_bytes()).unwrap();
        assert_eq!(items[0].summary.chars().count(), SUMMARY_MAX_CHARS);
    }

    #[test]
    fn test_parse_atom_entries() {
        let doc = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Fixture</title>
  <id>urn:uuid:fixture</id>
  <updated>2024-01-01T00:00:00Z</updated>
  <entry>
    <title>Atom Entry</title>
    <id>urn:uuid:entry-1</id>
    <updated>2024-01-01T00:00:00Z</updated>
    <link href="https://example.com/atom/1"/>
    <summary>atom summary</summary>
  </entry>
</feed>"#;

        let items = parse_items(doc.as_bytes()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Atom Entry");
        assert_eq!(items[0].url, "https://example.com/atom/1");
        assert_eq!(items[0].summary, "atom summary");
    }

    #[test]
    fn test_unparseable_document_is_an_error() {
        let result = parse_items(b"<html><body>not a feed</body></html>");
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn test_empty_channel_yields_no_items() {
        let doc = rss_doc("");
        let items = parse_items(doc.as_bytes()).unwrap();
        assert!(items.is_empty());
    }
}
