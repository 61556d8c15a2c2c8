//! HTTP client for the remote users API
//!
//! One method per REST operation:
//! - `GET /users` and `GET /users/{id}` for reads
//! - `POST /users` and `PUT /users/{id}` with the draft as body
//! - `DELETE /users/{id}`

use gloo_net::http::{Request, Response};
use userdir_shared::{User, UserDraft, UserId};

use super::ApiError;

/// Base URL of the public demo API
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// Client for the remote users API
#[derive(Debug, Clone)]
pub struct UsersClient {
    /// API base URL, without a trailing slash
    base_url: String,
}

impl UsersClient {
    /// Create a new client for the given API base URL
    pub fn new(url: &str) -> Self {
        // Normalize URL (remove trailing slash)
        let base_url = url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Get the collection endpoint URL
    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// Get the single-record endpoint URL
    fn user_url(&self, id: UserId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    /// Fetch the full user collection
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let response = Request::get(&self.users_url())
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        json_body(ok(response)?).await
    }

    /// Fetch a single user by id
    pub async fn get(&self, id: UserId) -> Result<User, ApiError> {
        let response = Request::get(&self.user_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        json_body(ok(response)?).await
    }

    /// Create a user from a draft; the server assigns the id
    pub async fn create(&self, draft: &UserDraft) -> Result<User, ApiError> {
        let response = Request::post(&self.users_url())
            .header("Content-Type", "application/json")
            .json(draft)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        json_body(ok(response)?).await
    }

    /// Update an existing user with the full draft payload
    pub async fn update(&self, id: UserId, draft: &UserDraft) -> Result<User, ApiError> {
        let response = Request::put(&self.user_url(id))
            .header("Content-Type", "application/json")
            .json(draft)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        json_body(ok(response)?).await
    }

    /// Delete a user by id
    pub async fn delete(&self, id: UserId) -> Result<(), ApiError> {
        let response = Request::delete(&self.user_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        ok(response).map(|_| ())
    }
}

impl Default for UsersClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Map a non-2xx response to an error
fn ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

/// Deserialize a JSON response body
async fn json_body<T: for<'de> serde::Deserialize<'de>>(
    response: Response,
) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = UsersClient::new("https://jsonplaceholder.typicode.com/");
        assert_eq!(client.users_url(), "https://jsonplaceholder.typicode.com/users");
        assert_eq!(client.user_url(7), "https://jsonplaceholder.typicode.com/users/7");
    }

    #[test]
    fn default_client_targets_the_demo_api() {
        let client = UsersClient::default();
        assert_eq!(client.users_url(), format!("{}/users", DEFAULT_API_URL));
    }

    #[test]
    fn status_error_is_human_readable() {
        let err = ApiError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }
}
