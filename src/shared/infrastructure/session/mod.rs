// Bearer token persistence, passed explicitly into the GraphQL client.
//
// Purpose
// - Hold the only piece of client-side state that outlives a view: the token
//   returned by the login mutation.
//
// Boundaries
// - Callers never see where the token lives. The client asks the session on
//   every request; the session asks its store.

pub mod file;
pub mod in_memory;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::infrastructure::session::in_memory::InMemoryTokenStore;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("token store error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>, SessionError>;
    async fn save(&self, token: &str) -> Result<(), SessionError>;
    async fn clear(&self) -> Result<(), SessionError>;
}

#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTokenStore::new()))
    }

    /// Current token, if any. An unreadable store counts as signed out.
    pub async fn bearer(&self) -> Option<String> {
        match self.store.load().await {
            Ok(token) => token.filter(|token| !token.is_empty()),
            Err(error) => {
                tracing::warn!(%error, "token store unreadable, sending unauthenticated");
                None
            }
        }
    }

    pub async fn sign_in(&self, token: &str) -> Result<(), SessionError> {
        self.store.save(token).await
    }

    pub async fn sign_out(&self) -> Result<(), SessionError> {
        self.store.clear().await
    }
}
