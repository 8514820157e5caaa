use async_trait::async_trait;

/// Authenticated REST client for the bookmark API.
pub mod client;
/// Bookmark record and its wire format.
pub mod model;

pub use client::{BookmarkClient, BookmarkEndpoints};
pub use model::Bookmark;

/// Bookmark operations exposed to UI code.
///
/// Implementations return empty values instead of errors.
#[async_trait]
pub trait BookmarkService: Send + Sync {
    /// Create a bookmark; returns the service's response text.
    async fn add_bookmark(&self, bookmark: &Bookmark) -> Option<String>;

    /// List all bookmarks.
    async fn get_bookmarks(&self) -> Vec<Bookmark>;

    /// Fetch one bookmark by id.
    async fn get_bookmark_by_id(&self, id: &str) -> Option<Bookmark>;
}
