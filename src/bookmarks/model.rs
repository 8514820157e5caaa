use serde::{Deserialize, Serialize};

/// A saved link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bookmark {
    /// Bookmark id, `id` on the wire.
    #[serde(rename = "id")]
    pub id: String,
    /// Target URL, `url` on the wire.
    #[serde(rename = "url")]
    pub url: String,
}

impl Bookmark {
    pub fn new(id: &str, url: &str) -> Self {
        Self {
            id: id.to_string(),
            url: url.to_string(),
        }
    }
}
