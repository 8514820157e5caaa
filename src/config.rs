use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ServiceError;

const SETTINGS_FILE: &str = "appSettings.json";
const SETTINGS_DIR: &str = "bookmark-service";

/// Deployment settings consumed by the bookmark client and telemetry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppSettings {
    /// Base URL of the bookmark API, without trailing `/api`.
    pub api_base_url: String,
    /// Azure AD application (client) id the bookmark API is registered under.
    pub azure_ad_app_client_id: String,
    pub application_insights_instrumentation_key: String,
    #[serde(default = "default_ingestion_endpoint")]
    pub application_insights_endpoint: String,
    /// Reported as `Tenant` on every telemetry item.
    pub tenant_name: String,
    /// Reported as `App_Name` on every telemetry item.
    pub app_name: String,
    #[serde(default = "default_app_version")]
    pub app_version: String,
    #[serde(default)]
    pub access_codes: AccessCodes,
    pub identity: IdentitySettings,
}

/// Per-endpoint `code` query parameters of the bookmark API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessCodes {
    pub get_bookmarks: Option<String>,
    pub get_bookmark_by_id: Option<String>,
    pub add_bookmark: Option<String>,
}

/// Confidential client used to obtain tokens for the bookmark API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdentitySettings {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_authority_host")]
    pub authority_host: String,
}

fn default_ingestion_endpoint() -> String {
    "https://dc.services.visualstudio.com".to_string()
}

fn default_app_version() -> String {
    "1.0.0.0".to_string()
}

fn default_authority_host() -> String {
    "https://login.microsoftonline.com".to_string()
}

/// Load settings from `./appSettings.json`, falling back to the user config
/// directory.
pub fn load_settings() -> Result<AppSettings, ServiceError> {
    let mut path = std::env::current_dir().map_err(|e| ServiceError::Generic(e.to_string()))?;
    path.push(SETTINGS_FILE);

    if !path.exists() {
        if let Some(fallback) = user_settings_path() {
            if fallback.exists() {
                log::debug!("Using settings from {}", fallback.display());
                return read_settings(&fallback);
            }
        }
    }

    read_settings(&path)
}

/// Read settings from an explicit file.
pub fn read_settings(path: &Path) -> Result<AppSettings, ServiceError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ServiceError::Generic(format!("Failed to read {}: {e}", path.display()))
    })?;
    parse_settings(&contents)
}

pub fn parse_settings(contents: &str) -> Result<AppSettings, ServiceError> {
    serde_json::from_str(contents)
        .map_err(|e| ServiceError::Generic(format!("Invalid {SETTINGS_FILE}: {e}")))
}

fn user_settings_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(SETTINGS_DIR);
    path.push(SETTINGS_FILE);
    Some(path)
}
