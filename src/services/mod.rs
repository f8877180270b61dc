pub mod api_client;
pub mod credential_store;
pub mod error;

pub use api_client::ApiClient;
pub use credential_store::{CredentialStore, LocalCredentialStore};
pub use error::ApiError;

#[cfg(test)]
pub use credential_store::MemoryCredentialStore;
