use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::AppSettings;
use crate::error::ServiceError;
use crate::logging::telemetry::{CustomProperties, SeverityLevel, TelemetryClient};

const TRACK_PATH: &str = "/v2/track";

/// One Application Insights telemetry item.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub name: String,
    pub time: String,
    #[serde(rename = "iKey")]
    pub ikey: String,
    pub tags: Value,
    pub data: Value,
}

/// Settings for [`AppInsightsClient::start`].
#[derive(Debug, Clone)]
pub struct AppInsightsSettings {
    pub instrumentation_key: String,
    pub ingestion_endpoint: String,
    pub app_name: String,
    pub app_version: String,
    pub current_user: Option<String>,
}

impl AppInsightsSettings {
    pub fn from_app_settings(settings: &AppSettings, current_user: Option<&str>) -> Self {
        Self {
            instrumentation_key: settings.application_insights_instrumentation_key.clone(),
            ingestion_endpoint: settings.application_insights_endpoint.clone(),
            app_name: settings.app_name.clone(),
            app_version: settings.app_version.clone(),
            current_user: current_user.map(str::to_string),
        }
    }
}

/// Telemetry client posting envelopes to the Application Insights ingestion
/// endpoint.
///
/// Items are queued and sent one by one by a background task, which exits
/// once the client is dropped.
pub struct AppInsightsClient {
    ikey: String,
    tags: Value,
    sender: UnboundedSender<Envelope>,
}

impl AppInsightsClient {
    /// Start the sender task and track the initial page view.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(
        settings: AppInsightsSettings,
    ) -> Result<(Self, JoinHandle<()>), ServiceError> {
        if settings.instrumentation_key.trim().is_empty() {
            return Err(ServiceError::Generic(
                "Instrumentation key not provided".to_string(),
            ));
        }

        let (sender, receiver) = mpsc::unbounded_channel();
        let url = format!(
            "{}{}",
            settings.ingestion_endpoint.trim_end_matches('/'),
            TRACK_PATH
        );
        let worker = tokio::spawn(send_envelopes(Client::new(), url, receiver));

        let mut tags = json!({
            "ai.application.ver": settings.app_version,
            "ai.session.id": Uuid::new_v4().to_string(),
        });
        if let Some(user) = settings.current_user.as_deref() {
            tags["ai.user.authUserId"] = Value::String(hash_user(user));
        }

        let client = Self {
            ikey: settings.instrumentation_key,
            tags,
            sender,
        };
        client.track_page_view(&settings.app_name);

        Ok((client, worker))
    }

    pub fn track_page_view(&self, name: &str) {
        self.enqueue(
            "Pageview",
            json!({
                "baseType": "PageviewData",
                "baseData": { "ver": 2, "name": name },
            }),
        );
    }

    fn enqueue(&self, kind: &str, data: Value) {
        let envelope = Envelope {
            name: format!(
                "Microsoft.ApplicationInsights.{}.{}",
                self.ikey.replace('-', ""),
                kind
            ),
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            ikey: self.ikey.clone(),
            tags: self.tags.clone(),
            data,
        };

        if self.sender.send(envelope).is_err() {
            log::debug!("Telemetry sender stopped; dropping {} item", kind);
        }
    }
}

impl TelemetryClient for AppInsightsClient {
    fn track_trace(&self, message: &str, severity: SeverityLevel, properties: &CustomProperties) {
        self.enqueue(
            "Message",
            json!({
                "baseType": "MessageData",
                "baseData": {
                    "ver": 2,
                    "message": message,
                    "severityLevel": severity,
                    "properties": properties,
                },
            }),
        );
    }

    fn track_exception(
        &self,
        message: &str,
        severity: SeverityLevel,
        properties: &CustomProperties,
    ) {
        self.enqueue(
            "Exception",
            json!({
                "baseType": "ExceptionData",
                "baseData": {
                    "ver": 2,
                    "exceptions": [{
                        "typeName": "Error",
                        "message": message,
                        "hasFullStack": false,
                    }],
                    "severityLevel": severity,
                    "properties": properties,
                },
            }),
        );
    }

    fn track_event(&self, name: &str, properties: &CustomProperties) {
        self.enqueue(
            "Event",
            json!({
                "baseType": "EventData",
                "baseData": {
                    "ver": 2,
                    "name": name,
                    "properties": properties,
                },
            }),
        );
    }
}

async fn send_envelopes(client: Client, url: String, mut receiver: UnboundedReceiver<Envelope>) {
    while let Some(envelope) = receiver.recv().await {
        let result = client.post(&url).json(&[&envelope]).send().await;
        match result {
            Ok(resp) if resp.status().is_success() => {}
            Ok(resp) => {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                log::warn!("Telemetry rejected ({}): {}", status, body);
            }
            Err(e) => log::warn!("Telemetry send failed: {e}"),
        }
    }
}

/// SHA-256 of the user name, hex encoded.
pub fn hash_user(user: &str) -> String {
    format!("{:x}", Sha256::digest(user.as_bytes()))
}
