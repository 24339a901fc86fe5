//! Session client and persisted client state.
//!
//! The session exchange is a single POST to the remote session service; the
//! resulting token and the identity it proves are persisted together in one
//! JSON document under the state directory. Reads never touch the network.

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::StatusCode;

use crate::client::remote_message;
use crate::errors::AppError;
use crate::models::{LoginRequest, LoginResponse, Session, User};

const SESSION_FILE: &str = "session.json";

/// Durable store for the current session.
///
/// Token and identity live in the same document, so they are always written
/// and cleared together; there is no authenticated-but-identity-less state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(SESSION_FILE),
        }
    }

    /// Read the persisted session, if any. A corrupt file is treated as
    /// absent; the user simply logs in again.
    pub fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!("Ignoring corrupt session file: {}", err);
                None
            }
        }
    }

    /// Persist a session, creating the state directory on demand.
    pub fn save(&self, session: &Session) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }

    /// Remove the persisted session unconditionally.
    pub fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Client for the remote session service.
#[derive(Debug, Clone)]
pub struct SessionClient {
    http: reqwest::Client,
    base_url: String,
    store: SessionStore,
}

impl SessionClient {
    pub fn new(base_url: impl Into<String>, store: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
        }
    }

    /// Exchange credentials for a token and persist the resulting session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(format!("{}/login", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = if status == StatusCode::UNAUTHORIZED {
                // Prefer the server-supplied reason, fall back to a generic one.
                let msg = remote_message(status, response).await;
                if msg.starts_with("Request failed") {
                    "Invalid credentials".to_string()
                } else {
                    msg
                }
            } else {
                remote_message(status, response).await
            };
            return Err(AppError::Auth(message));
        }

        let body: LoginResponse = response.json().await?;
        let session = Session {
            token: body.token,
            user: User {
                username: username.to_string(),
            },
        };
        self.store.save(&session)?;
        tracing::info!("Logged in as {}", username);
        Ok(session)
    }

    /// Clear the persisted session. No server round-trip is required.
    pub fn logout(&self) -> Result<(), AppError> {
        self.store.clear()?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// The persisted identity, read without network access.
    pub fn current_user(&self) -> Option<User> {
        self.store.load().map(|session| session.user)
    }

    /// Whether a session token is currently persisted.
    pub fn is_authenticated(&self) -> bool {
        self.store.load().is_some()
    }

    /// The persisted token, for constructing authenticated record clients.
    pub fn token(&self) -> Option<String> {
        self.store.load().map(|session| session.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, SessionStore) {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        (dir, store)
    }

    fn session() -> Session {
        Session {
            token: "tok-123".to_string(),
            user: User {
                username: "inspector".to_string(),
            },
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_dir, store) = store();
        assert!(store.load().is_none());

        store.save(&session()).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, session());
    }

    #[test]
    fn test_clear_removes_token_and_identity_together() {
        let (_dir, store) = store();
        store.save(&session()).unwrap();
        store.clear().unwrap();

        assert!(store.load().is_none());
        // Clearing an already-empty store is not an error.
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_reads_as_absent() {
        let (dir, store) = store();
        fs::write(dir.path().join(SESSION_FILE), "{not json").unwrap();
        assert!(store.load().is_none());
    }
}
