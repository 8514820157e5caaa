use bookmark_service_client::bookmarks::Bookmark;
use bookmark_service_client::config::{load_settings, AppSettings};

/// Settings for the live backend, read from `appSettings.json`.
pub fn live_settings() -> Result<AppSettings, String> {
    load_settings().map_err(|e| e.to_string())
}

/// A bookmark with a fresh id, so repeated runs do not collide.
pub fn unique_bookmark() -> Bookmark {
    Bookmark::new(
        &format!("it-{}", uuid::Uuid::new_v4()),
        "https://example.com/integration",
    )
}
