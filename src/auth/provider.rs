use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::auth::credentials::{default_scope, fetch_client_credentials_token};
use crate::auth::handle::ClientHandle;
use crate::config::IdentitySettings;
use crate::error::ServiceError;

/// Platform service that turns an application id into an authenticated
/// client handle.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    async fn get_client(&self, application_id: &str) -> Result<ClientHandle, ServiceError>;
}

/// `ClientFactory` backed by the Azure AD client credentials grant.
pub struct AadClientFactory {
    client: Client,
    identity: IdentitySettings,
}

impl AadClientFactory {
    pub fn new(identity: IdentitySettings) -> Self {
        Self {
            client: Client::new(),
            identity,
        }
    }
}

#[async_trait]
impl ClientFactory for AadClientFactory {
    async fn get_client(&self, application_id: &str) -> Result<ClientHandle, ServiceError> {
        let scope = default_scope(application_id);
        let token = fetch_client_credentials_token(&self.client, &self.identity, &scope).await?;

        Ok(ClientHandle::new(
            self.client.clone(),
            application_id,
            &token.access_token,
            Some(token.expires_at),
        ))
    }
}

/// Acquires client handles through a platform factory.
///
/// Every call is a fresh acquisition; errors from the factory are returned
/// unchanged.
#[derive(Clone)]
pub struct TokenClientProvider {
    factory: Arc<dyn ClientFactory>,
}

impl TokenClientProvider {
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self { factory }
    }

    pub async fn acquire(&self, application_id: &str) -> Result<ClientHandle, ServiceError> {
        log::debug!("Acquiring client handle for {}", application_id);
        self.factory.get_client(application_id).await
    }
}
