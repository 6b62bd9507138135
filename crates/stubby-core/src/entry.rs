use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored shortened-URL record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntry {
    /// The original URL that was shortened.
    pub original_url: String,
    /// When the entry was created.
    pub created_at: Timestamp,
    /// How many times the alias has been resolved.
    pub clicks: u64,
}

impl UrlEntry {
    /// Creates a fresh entry with no clicks.
    pub fn new(original_url: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            original_url: original_url.into(),
            created_at,
            clicks: 0,
        }
    }

    /// Records one resolution of the entry.
    pub fn record_click(&mut self) {
        self.clicks = self.clicks.saturating_add(1);
    }
}
