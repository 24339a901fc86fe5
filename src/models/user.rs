//! Session identity models matching the remote session service contract.

use serde::{Deserialize, Serialize};

/// Minimal identity of the logged-in user.
///
/// The session service exposes no `/me` endpoint, so this is everything the
/// client knows about who is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
}

/// Request body for the login exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body of a successful login exchange.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
}

/// Persisted session state: the token and the identity it proves.
///
/// The two always travel together in one document so the client can never
/// end up authenticated but identity-less.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user: User,
}
