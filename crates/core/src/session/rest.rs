//! Reqwest-based account gateway.
//!
//! The backend keeps sessions in a cookie, so this client enables the
//! cookie store and reuses one `Client` for every call.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use super::types::{Credentials, Registration, User};
use super::{AccountGateway, SessionError};
use crate::catalog::Movie;
use crate::config::ApiConfig;

/// Account API client holding the session cookie.
pub struct RestAccountGateway {
    client: Client,
    base_url: String,
}

impl RestAccountGateway {
    /// Create a new account gateway from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, SessionError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: Response) -> Result<Response, SessionError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(SessionError::NotAuthenticated);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SessionError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl AccountGateway for RestAccountGateway {
    async fn login(&self, credentials: &Credentials) -> Result<(), SessionError> {
        debug!("Login: email={}", credentials.email);
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(credentials)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn register(&self, registration: &Registration) -> Result<(), SessionError> {
        debug!("Register: email={}", registration.email);
        let response = self
            .client
            .post(self.url("/user"))
            .json(registration)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), SessionError> {
        debug!("Logout");
        let response = self.client.get(self.url("/auth/logout")).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<User>, SessionError> {
        debug!("Current user");
        let response = self.client.get(self.url("/profile")).send().await?;

        // No session is a normal signed-out state, not an error.
        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }

        let response = Self::check(response).await?;
        let user: User = response
            .json()
            .await
            .map_err(|e| SessionError::Parse(format!("Failed to parse profile: {}", e)))?;
        Ok(Some(user))
    }

    async fn add_favorite(&self, movie_id: u64) -> Result<(), SessionError> {
        debug!("Add favorite: id={}", movie_id);
        // The backend expects a form body, not JSON.
        let response = self
            .client
            .post(self.url("/favorites"))
            .form(&[("id", movie_id.to_string())])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn favorites(&self) -> Result<Vec<Movie>, SessionError> {
        debug!("List favorites");
        let response = self.client.get(self.url("/favorites")).send().await?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| SessionError::Parse(format!("Failed to parse favorites: {}", e)))
    }

    async fn remove_favorite(&self, movie_id: u64) -> Result<(), SessionError> {
        debug!("Remove favorite: id={}", movie_id);
        let response = self
            .client
            .delete(self.url(&format!("/favorites/{}", movie_id)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let gateway = RestAccountGateway::new(&ApiConfig {
            base_url: "https://example.com/".to_string(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(gateway.url("/profile"), "https://example.com/profile");
    }
}
