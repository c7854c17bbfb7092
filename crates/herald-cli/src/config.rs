use clap::{Parser, Subcommand};
use std::path::PathBuf;

use herald_core::error::AppError;

/// CLI settings parsed from command line arguments and environment variables
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(
    version,
    about = "Posts one fresh article from your RSS feeds to a Telegram chat"
)]
#[command(after_help = "Examples:
  herald run
  herald watch --interval 900
  RSS_FEEDS=https://example.com/feed.xml herald run")]
pub struct Settings {
    /// Telegram bot API token
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub bot_token: String,

    /// Destination chat identifier
    #[arg(long, env = "TELEGRAM_CHAT_ID", allow_hyphen_values = true)]
    pub chat_id: String,

    /// Forum topic (message thread) to post into, if any
    #[arg(long, env = "NEWS_TOPIC_ID")]
    pub topic_id: Option<i64>,

    /// Comma-separated list of feed endpoint URLs
    #[arg(long, env = "RSS_FEEDS", value_delimiter = ',')]
    pub feeds: Vec<String>,

    /// Path to the posted-URL ledger file
    #[arg(long, env = "POSTED_FILE", default_value = "posted_urls.txt")]
    pub posted_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a single fetch-and-post cycle, then exit
    Run,
    /// Run cycles forever, sleeping a fixed interval between them
    Watch {
        /// Seconds to sleep after each cycle
        #[arg(long, default_value = "1800")]
        interval: u64,
    },
}

impl Settings {
    /// The configured feed endpoints with blanks dropped and
    /// surrounding whitespace trimmed.
    pub fn feed_urls(&self) -> Vec<String> {
        self.feeds
            .iter()
            .map(|feed| feed.trim())
            .filter(|feed| !feed.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Rejects a configuration no cycle could do anything with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.feed_urls().is_empty() {
            return Err(AppError::Config(
                "RSS_FEEDS must list at least one feed URL".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(feeds: &str, tail: &[&str]) -> Settings {
        let mut args = vec![
            "herald",
            "--bot-token",
            "123456:test-token",
            "--chat-id",
            "-1001234567890",
            "--feeds",
            feeds,
        ];
        args.extend_from_slice(tail);
        Settings::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_feed_urls_split_and_trimmed() {
        let settings = parse(
            "https://a.example/feed.xml, https://b.example/rss ,",
            &["run"],
        );
        assert_eq!(
            settings.feed_urls(),
            vec![
                "https://a.example/feed.xml".to_string(),
                "https://b.example/rss".to_string(),
            ]
        );
    }

    #[test]
    fn test_validate_rejects_blank_feed_list() {
        let settings = parse(" , ,", &["run"]);
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_validate_accepts_one_feed() {
        let settings = parse("https://a.example/feed.xml", &["run"]);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let settings = parse("https://a.example/feed.xml", &["run"]);
        assert_eq!(settings.posted_file, PathBuf::from("posted_urls.txt"));
        assert!(settings.topic_id.is_none());
        assert!(matches!(settings.command, Command::Run));
    }

    #[test]
    fn test_watch_interval_default() {
        let settings = parse("https://a.example/feed.xml", &["watch"]);
        match settings.command {
            Command::Watch { interval } => assert_eq!(interval, 1800),
            Command::Run => panic!("expected watch subcommand"),
        }
    }

    #[test]
    fn test_watch_interval_override() {
        let settings = parse("https://a.example/feed.xml", &["watch", "--interval", "60"]);
        match settings.command {
            Command::Watch { interval } => assert_eq!(interval, 60),
            Command::Run => panic!("expected watch subcommand"),
        }
    }

    #[test]
    fn test_missing_command_is_an_error() {
        let result = Settings::try_parse_from([
            "herald",
            "--bot-token",
            "t",
            "--chat-id",
            "c",
            "--feeds",
            "https://a.example/feed.xml",
        ]);
        assert!(result.is_err());
    }
}
