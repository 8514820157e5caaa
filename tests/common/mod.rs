#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use bookmark_service_client::auth::ClientHandle;
use bookmark_service_client::bookmarks::{BookmarkClient, BookmarkEndpoints};
use bookmark_service_client::config::{parse_settings, AccessCodes, AppSettings};
use bookmark_service_client::logging::{ExceptionReporter, LogEntry, LogListener, Logger};

#[derive(Default)]
pub struct RecordingListener(Mutex<Vec<LogEntry>>);

impl RecordingListener {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.0.lock().unwrap().clone()
    }
}

impl LogListener for RecordingListener {
    fn log(&self, entry: &LogEntry) {
        self.0.lock().unwrap().push(entry.clone());
    }
}

pub fn reporter() -> (Arc<ExceptionReporter>, Arc<RecordingListener>) {
    let logger = Arc::new(Logger::default());
    let listener = Arc::new(RecordingListener::default());
    logger.subscribe(listener.clone());
    (Arc::new(ExceptionReporter::new(logger)), listener)
}

pub fn client(base_url: &str, codes: AccessCodes) -> (BookmarkClient, Arc<RecordingListener>) {
    let (reporter, listener) = reporter();
    let handle = ClientHandle::new(reqwest::Client::new(), "bookmarks-api", "test-token", None);
    let client = BookmarkClient::from_handle(handle, BookmarkEndpoints::new(base_url, codes), reporter);
    (client, listener)
}

pub fn settings(api_base_url: &str, authority_host: &str, telemetry_endpoint: &str) -> AppSettings {
    parse_settings(&format!(
        r#"{{
            "ApiBaseUrl": "{api_base_url}",
            "AzureAdAppClientId": "bookmarks-api",
            "ApplicationInsightsInstrumentationKey": "1111-2222",
            "ApplicationInsightsEndpoint": "{telemetry_endpoint}",
            "TenantName": "contoso",
            "AppName": "BookmarksWebPart",
            "AccessCodes": {{ "GetBookmarks": "list-code" }},
            "Identity": {{
                "TenantId": "contoso-tenant",
                "ClientId": "web-part",
                "ClientSecret": "shh",
                "AuthorityHost": "{authority_host}"
            }}
        }}"#
    ))
    .unwrap()
}
