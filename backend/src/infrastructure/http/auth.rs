use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, RwLock};

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use uuid::Uuid;

use super::state::AppState;
use crate::domain::Identity;

/// In-process session table mapping bearer tokens to resolved identities.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Identity>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Start a session for the identity and return its bearer token.
    pub fn issue(&self, identity: Identity) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .insert(token.clone(), identity);
        token
    }

    pub fn resolve(&self, token: &str) -> Option<Identity> {
        self.sessions
            .read()
            .expect("session store lock poisoned")
            .get(token)
            .cloned()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Auth guard: resolves the request's bearer token (if any) against the
/// session store and hands the handler an `Option<Identity>`. Handlers that
/// do not take this extractor stay unauthenticated, which is how every page
/// operation except reorder behaves.
pub struct MaybeIdentity(pub Option<Identity>);

impl FromRequestParts<Arc<AppState>> for MaybeIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let identity = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .and_then(|token| state.sessions.resolve(token));

        Ok(MaybeIdentity(identity))
    }
}
