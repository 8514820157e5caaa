pub mod bookmarks;
pub mod telemetry;
