//! Product review records.

use serde::{Deserialize, Serialize};

/// A customer review. Reviews have no identifier; storage order is
/// submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub text: String,
}

impl Review {
    /// Author shown when the reviewer leaves the name blank.
    pub const ANONYMOUS_AUTHOR: &'static str = "Anonymous Customer";

    /// Build a review from raw form input.
    ///
    /// Both fields are trimmed and a blank author becomes
    /// [`Self::ANONYMOUS_AUTHOR`]. Returns `None` when the text is blank.
    #[must_use]
    pub fn from_input(author: &str, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let author = match author.trim() {
            "" => Self::ANONYMOUS_AUTHOR,
            name => name,
        };
        Some(Self {
            author: author.to_string(),
            text: text.to_string(),
        })
    }
}
