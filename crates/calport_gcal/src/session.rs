// --- File: crates/calport_gcal/src/session.rs ---
use std::collections::HashMap;

use calport_common::{AccessCredential, BoxFuture, BoxedError, SessionStore};
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::TokenExchanger;
use crate::error::ImportError;
use crate::logic::require_auth_code;

/// Process-local session store. Sessions live until the process exits.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, AccessCredential>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn create_session(&self, credential: AccessCredential) -> BoxFuture<'_, String, BoxedError> {
        Box::pin(async move {
            let session_id = Uuid::new_v4().to_string();
            self.sessions
                .write()
                .await
                .insert(session_id.clone(), credential);
            Ok(session_id)
        })
    }

    fn get_session(
        &self,
        session_id: &str,
    ) -> BoxFuture<'_, Option<AccessCredential>, BoxedError> {
        let session_id = session_id.to_string();
        Box::pin(async move { Ok(self.sessions.read().await.get(&session_id).cloned()) })
    }
}

/// Exchange `code` and store the resulting credential under a new session id.
///
/// A blank code fails with `InvalidInput`. Any exchange failure is wrapped in
/// `Unauthorized`. The credential never leaves the store.
pub async fn exchange_for_session(
    exchanger: &TokenExchanger,
    store: &dyn SessionStore,
    code: Option<&str>,
) -> Result<String, ImportError> {
    let code = require_auth_code(code)?;

    let credential = exchanger.exchange(code).await.map_err(|e| {
        warn!("Session exchange failed: {}", e);
        ImportError::Unauthorized(Box::new(e))
    })?;

    let session_id = store
        .create_session(credential)
        .await
        .map_err(|e| ImportError::Unknown(format!("Failed to store session: {e}")))?;

    info!("Created session for exchanged credential");
    Ok(session_id)
}
