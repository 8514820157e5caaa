use serde_json::Value;
use thiserror::Error;

/// Errors raised while talking to the identity platform, the bookmark API or
/// the telemetry backend.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The remote service answered with a non-success status.
    ///
    /// `payload` is the parsed JSON body, or the raw body as a JSON string
    /// when it was not valid JSON.
    #[error("remote data error ({status}): {payload}")]
    RemoteData { status: u16, payload: Value },

    /// Any other failure: transport, parsing, configuration.
    #[error("{0}")]
    Generic(String),
}

impl ServiceError {
    /// Build a `RemoteData` error from a status code and raw response body.
    pub fn remote(status: u16, body: &str) -> Self {
        let payload =
            serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));
        ServiceError::RemoteData { status, payload }
    }

    /// The OData error message carried by a remote payload, if any.
    ///
    /// Looks for `odata.error.message.value`, the shape SharePoint and Azure
    /// Functions use for structured errors.
    pub fn odata_message(&self) -> Option<&str> {
        let ServiceError::RemoteData { payload, .. } = self else {
            return None;
        };
        payload
            .get("odata.error")
            .filter(|error| error.is_object())?
            .get("message")?
            .get("value")?
            .as_str()
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        ServiceError::Generic(format!("Request failed: {e}"))
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::Generic(format!("Failed to parse JSON: {e}"))
    }
}
