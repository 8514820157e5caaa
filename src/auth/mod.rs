/// OAuth2 client credentials grant against Azure AD.
pub mod credentials;
/// Authenticated transport handle.
pub mod handle;
/// Client factories and the token client provider.
pub mod provider;

pub use handle::ClientHandle;
pub use provider::{AadClientFactory, ClientFactory, TokenClientProvider};
