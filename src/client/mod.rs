//! Record store client.
//!
//! A stateless conduit to the remote vehicle service: five CRUD operations,
//! no caching, no retries. Callers own any list cache and must invalidate it
//! after a mutation.

use reqwest::{Method, RequestBuilder, Response, StatusCode};

use crate::errors::AppError;
use crate::models::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle};

/// Client for the remote vehicle record service.
#[derive(Debug, Clone)]
pub struct VehicleClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl VehicleClient {
    /// Create a client against the given base endpoint. The session token,
    /// when present, is attached to every request as a bearer credential.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// List all records.
    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        let response = self.request(Method::GET, "/vehicles").send().await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Fetch one record by id.
    pub async fn get(&self, id: i64) -> Result<Vehicle, AppError> {
        let response = self
            .request(Method::GET, &format!("/vehicles/{}", id))
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Create a record from a payload excluding id and timestamps.
    pub async fn create(&self, request: &CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let response = self
            .request(Method::POST, "/vehicles")
            .json(request)
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Update a record by id with a partial or full payload.
    pub async fn update(
        &self,
        id: i64,
        request: &UpdateVehicleRequest,
    ) -> Result<Vehicle, AppError> {
        let response = self
            .request(Method::PUT, &format!("/vehicles/{}", id))
            .json(request)
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Delete a record by id. Irreversible from the client's perspective.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let response = self
            .request(Method::DELETE, &format!("/vehicles/{}", id))
            .send()
            .await?;
        checked(response).await?;
        Ok(())
    }
}

/// Normalize a non-success transport response into `AppError::Remote`.
async fn checked(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(AppError::Remote(remote_message(status, response).await))
}

/// Extract the server-supplied error message when the body carries one,
/// falling back to a generic message naming the status.
pub(crate) async fn remote_message(status: StatusCode, response: Response) -> String {
    let fallback = format!("Request failed with status {}", status.as_u16());
    let body = match response.text().await {
        Ok(body) => body,
        Err(_) => return fallback,
    };
    let value: serde_json::Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) => return fallback,
    };
    value["error"]["message"]
        .as_str()
        .or_else(|| value["message"].as_str())
        .map(str::to_string)
        .unwrap_or(fallback)
}
