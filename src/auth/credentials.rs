use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::Client;
use serde_json::Value;

use crate::config::IdentitySettings;
use crate::error::ServiceError;

/// Access token returned by the client credentials grant.
#[derive(Debug, Clone)]
pub struct ClientCredentialsToken {
    pub access_token: String,
    pub expires_at: u64,
}

/// Scope requesting every permission granted to `application_id`.
pub fn default_scope(application_id: &str) -> String {
    format!("api://{}/.default", application_id)
}

/// Run the OAuth2 client credentials grant for `scope`.
pub async fn fetch_client_credentials_token(
    client: &Client,
    identity: &IdentitySettings,
    scope: &str,
) -> Result<ClientCredentialsToken, ServiceError> {
    let token_url = format!(
        "{}/{}/oauth2/v2.0/token",
        identity.authority_host.trim_end_matches('/'),
        identity.tenant_id
    );

    let mut params = HashMap::new();
    params.insert("client_id", identity.client_id.as_str());
    params.insert("client_secret", identity.client_secret.as_str());
    params.insert("scope", scope);
    params.insert("grant_type", "client_credentials");

    let resp = client.post(&token_url).form(&params).send().await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ServiceError::remote(status.as_u16(), &body));
    }

    let json: Value = resp.json().await?;

    let access_token = json
        .get("access_token")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ServiceError::Generic("No access_token in response".to_string()))?;
    let expires_in = json
        .get("expires_in")
        .and_then(|v| v.as_u64())
        .unwrap_or_default();

    if access_token.trim().is_empty() {
        return Err(ServiceError::Generic("Access token was empty".to_string()));
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| ServiceError::Generic(e.to_string()))?
        .as_secs();

    Ok(ClientCredentialsToken {
        access_token: access_token.to_string(),
        expires_at: now + expires_in,
    })
}
