//! Herald Store - the posted-URL ledger.
//!
//! A plain UTF-8 text file, one URL per line, append-only (never
//! rewritten or compacted). The full set is loaded into memory at
//! startup, so membership checks never touch disk.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use herald_core::error::AppError;

/// Persisted set of every URL Herald has successfully posted.
///
/// Construct one handle at startup with [`PostedUrlStore::load`] and
/// pass it to whatever needs membership checks; there is no
/// process-wide state. The store assumes a single writing process;
/// concurrent instances sharing one file would race on [`record`].
///
/// [`record`]: PostedUrlStore::record
///
/// # Examples
///
/// ```no_run
/// use herald_store::PostedUrlStore;
///
/// # fn example() -> Result<(), herald_core::AppError> {
/// let mut store = PostedUrlStore::load("posted_urls.txt")?;
/// if !store.contains("https://example.com/article") {
///     store.record("https://example.com/article")?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct PostedUrlStore {
    path: PathBuf,
    urls: HashSet<String>,
}

impl PostedUrlStore {
    /// Loads the ledger from `path`, creating an empty file first if
    /// none exists. Lines are trimmed; blank lines are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            File::create(&path)?;
        }

        let contents = std::fs::read_to_string(&path)?;
        let urls = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self { path, urls })
    }

    /// Pure in-memory membership check. Exact string match only.
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Adds `url` to the set and appends it to the backing file.
    ///
    /// A URL already present is a no-op, keeping the one line per
    /// published URL invariant. The set insert and the file append are
    /// not atomic with each other or with the publish that preceded
    /// them; a crash in between repeats one post on the next run
    /// (accepted at-least-once behavior).
    pub fn record(&mut self, url: &str) -> Result<(), AppError> {
        if !self.urls.insert(url.to_string()) {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", url)?;

        Ok(())
    }

    /// Number of URLs in the ledger.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// True when nothing has ever been posted.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
