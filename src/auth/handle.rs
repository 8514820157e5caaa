use reqwest::{Client, RequestBuilder};

/// Authenticated HTTP transport bound to one Azure AD application.
///
/// Requests built from the handle carry the bearer token obtained when the
/// handle was created. The token is never refreshed.
#[derive(Clone)]
pub struct ClientHandle {
    client: Client,
    application_id: String,
    access_token: String,
    expires_at: Option<u64>,
}

impl ClientHandle {
    pub fn new(
        client: Client,
        application_id: &str,
        access_token: &str,
        expires_at: Option<u64>,
    ) -> Self {
        Self {
            client,
            application_id: application_id.to_string(),
            access_token: access_token.to_string(),
            expires_at,
        }
    }

    /// Application id the token was issued for.
    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    /// Expiry of the bearer token in seconds since the Unix epoch, if known.
    pub fn expires_at(&self) -> Option<u64> {
        self.expires_at
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url).bearer_auth(&self.access_token)
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        self.client.post(url).bearer_auth(&self.access_token)
    }
}

impl std::fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientHandle")
            .field("application_id", &self.application_id)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}
