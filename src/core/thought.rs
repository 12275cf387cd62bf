//! # Thoughts
//!
//! The one record type Zenith persists. A `Thought` is a journal entry:
//! a title, the lines the user typed, and two timestamps.
//!
//! ```text
//! Thought
//! ├── id: ThoughtId          // assigned by the store, never reused
//! ├── title: String          // user-supplied or DEFAULT_TITLE
//! ├── timestamp: String      // "[YYYY-MM-DD HH:MM:SS TZ]", set once
//! ├── content: Vec<String>   // one entry per submitted line
//! └── last_modified: String  // ISO-8601 UTC, refreshed on every save
//! ```
//!
//! Field names on disk follow the original record schema
//! (`lastModified`, not `last_modified`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Title used when the user presses Enter at the title prompt.
pub const DEFAULT_TITLE: &str = "Untitled Thought";

/// Store-assigned identifier of a thought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThoughtId(pub u64);

impl fmt::Display for ThoughtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strict: the trimmed text must be a whole `u64`. Signs, trailing
/// characters and decimals are rejected rather than truncated.
impl FromStr for ThoughtId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(ThoughtId)
    }
}

/// A thought that has not been stored yet (no id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewThought {
    pub title: String,
    pub timestamp: String,
    pub content: Vec<String>,
    pub last_modified: String,
}

impl NewThought {
    /// Attach the id the store handed out.
    pub fn with_id(self, id: ThoughtId) -> Thought {
        Thought {
            id,
            title: self.title,
            timestamp: self.timestamp,
            content: self.content,
            last_modified: self.last_modified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thought {
    pub id: ThoughtId,
    pub title: String,
    pub timestamp: String,
    pub content: Vec<String>,
    pub last_modified: String,
}

impl Thought {
    /// Returns the record rewritten by an edit: new title (or the old one when
    /// `title` is blank), new content, same id and creation timestamp.
    pub fn revised(&self, title: &str, content: Vec<String>, last_modified: String) -> Thought {
        let title = if title.is_empty() {
            self.title.clone()
        } else {
            title.to_string()
        };
        Thought {
            id: self.id,
            title,
            timestamp: self.timestamp.clone(),
            content,
            last_modified,
        }
    }
}

/// Falls back to [`DEFAULT_TITLE`] for blank input.
pub fn title_or_default(input: &str) -> String {
    if input.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        input.to_string()
    }
}
