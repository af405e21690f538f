//! Account session and favorites.
//!
//! The backend uses cookie-based session auth. This module exposes the
//! account endpoints behind an `AccountGateway` trait and wraps them in
//! an explicitly passed `Session` object holding the signed-in user, so
//! consumers never rely on ambient mutable state.

mod rest;
mod types;

pub use rest::RestAccountGateway;
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::catalog::Movie;

/// Errors that can occur during account and favorites operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// No active session (401 from an endpoint that requires one).
    #[error("Not authenticated")]
    NotAuthenticated,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Trait for the account side of the backend: auth and favorites.
#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// Log in with email and password. Establishes the session cookie.
    async fn login(&self, credentials: &Credentials) -> Result<(), SessionError>;

    /// Create a new account. Does not log in.
    async fn register(&self, registration: &Registration) -> Result<(), SessionError>;

    /// End the current session.
    async fn logout(&self) -> Result<(), SessionError>;

    /// Fetch the currently signed-in user. `None` when there is no
    /// active session (the backend answers 401).
    async fn current_user(&self) -> Result<Option<User>, SessionError>;

    /// Add a movie to the user's favorites.
    async fn add_favorite(&self, movie_id: u64) -> Result<(), SessionError>;

    /// List the user's favorite movies.
    async fn favorites(&self) -> Result<Vec<Movie>, SessionError>;

    /// Remove a movie from the user's favorites.
    async fn remove_favorite(&self, movie_id: u64) -> Result<(), SessionError>;
}

/// Explicit session state over an account gateway.
///
/// Holds the cached user and delegates all network operations. State
/// changes happen only through these methods.
pub struct Session {
    gateway: Arc<dyn AccountGateway>,
    user: Option<User>,
}

impl Session {
    /// Create a signed-out session.
    pub fn new(gateway: Arc<dyn AccountGateway>) -> Self {
        Self {
            gateway,
            user: None,
        }
    }

    /// Currently signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Log in and refresh the cached user.
    pub async fn sign_in(&mut self, credentials: &Credentials) -> Result<(), SessionError> {
        self.gateway.login(credentials).await?;
        self.user = self.gateway.current_user().await?;
        Ok(())
    }

    /// Create an account. The user stays signed out; callers log in
    /// separately.
    pub async fn register(&self, registration: &Registration) -> Result<(), SessionError> {
        self.gateway.register(registration).await
    }

    /// End the session. On failure the cached user is kept, since the
    /// server-side session may still be alive.
    pub async fn sign_out(&mut self) -> Result<(), SessionError> {
        if let Err(e) = self.gateway.logout().await {
            warn!("Logout failed: {}", e);
            return Err(e);
        }
        self.user = None;
        Ok(())
    }

    /// Re-fetch the current user from the backend. On failure the cached
    /// user is cleared before the error is returned.
    pub async fn refresh(&mut self) -> Result<Option<User>, SessionError> {
        match self.gateway.current_user().await {
            Ok(user) => {
                self.user = user;
                Ok(self.user.clone())
            }
            Err(e) => {
                warn!("Failed to fetch current user: {}", e);
                self.user = None;
                Err(e)
            }
        }
    }

    /// Add a movie to favorites.
    pub async fn add_favorite(&self, movie_id: u64) -> Result<(), SessionError> {
        self.gateway.add_favorite(movie_id).await
    }

    /// List favorite movies.
    pub async fn favorites(&self) -> Result<Vec<Movie>, SessionError> {
        self.gateway.favorites().await
    }

    /// Remove a movie from favorites.
    pub async fn remove_favorite(&self, movie_id: u64) -> Result<(), SessionError> {
        self.gateway.remove_favorite(movie_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockAccountGateway;

    fn credentials() -> Credentials {
        Credentials {
            email: "user@example.com".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_in_caches_user() {
        let gateway = Arc::new(MockAccountGateway::new());
        gateway
            .set_account(credentials(), User::new(Some("Ada"), None, "user@example.com"))
            .await;

        let mut session = Session::new(gateway);
        assert!(!session.is_authenticated());

        session.sign_in(&credentials()).await.unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().email, "user@example.com");
    }

    #[tokio::test]
    async fn test_sign_in_bad_credentials() {
        let gateway = Arc::new(MockAccountGateway::new());
        gateway
            .set_account(credentials(), User::new(None, None, "user@example.com"))
            .await;

        let mut session = Session::new(gateway);
        let wrong = Credentials {
            email: "user@example.com".to_string(),
            password: "nope".to_string(),
        };
        let result = session.sign_in(&wrong).await;
        assert!(matches!(result, Err(SessionError::NotAuthenticated)));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_does_not_sign_in() {
        let gateway = Arc::new(MockAccountGateway::new());
        let session = Session::new(gateway.clone());

        session
            .register(&Registration {
                name: "Ada".to_string(),
                surname: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(gateway.recorded_registrations().await.len(), 1);
    }

    #[tokio::test]
    async fn test_sign_out_clears_user() {
        let gateway = Arc::new(MockAccountGateway::new());
        gateway
            .set_account(credentials(), User::new(None, None, "user@example.com"))
            .await;

        let mut session = Session::new(gateway);
        session.sign_in(&credentials()).await.unwrap();
        session.sign_out().await.unwrap();
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_out_failure_keeps_user() {
        let gateway = Arc::new(MockAccountGateway::new());
        gateway
            .set_account(credentials(), User::new(None, None, "user@example.com"))
            .await;

        let mut session = Session::new(gateway.clone());
        session.sign_in(&credentials()).await.unwrap();

        gateway
            .set_next_error(SessionError::Api {
                status: 500,
                message: "boom".to_string(),
            })
            .await;
        assert!(session.sign_out().await.is_err());
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_refresh_without_session_yields_none() {
        let gateway = Arc::new(MockAccountGateway::new());
        let mut session = Session::new(gateway);

        let user = session.refresh().await.unwrap();
        assert!(user.is_none());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_refresh_failure_clears_user() {
        let gateway = Arc::new(MockAccountGateway::new());
        gateway
            .set_account(credentials(), User::new(None, None, "user@example.com"))
            .await;

        let mut session = Session::new(gateway.clone());
        session.sign_in(&credentials()).await.unwrap();

        gateway
            .set_next_error(SessionError::Api {
                status: 500,
                message: "boom".to_string(),
            })
            .await;
        assert!(session.refresh().await.is_err());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_favorites_round_trip() {
        let gateway = Arc::new(MockAccountGateway::new());
        gateway
            .set_account(credentials(), User::new(None, None, "user@example.com"))
            .await;

        let mut session = Session::new(gateway);
        session.sign_in(&credentials()).await.unwrap();

        session.add_favorite(603).await.unwrap();
        session.add_favorite(27205).await.unwrap();
        let favorites = session.favorites().await.unwrap();
        assert_eq!(favorites.len(), 2);

        session.remove_favorite(603).await.unwrap();
        let favorites = session.favorites().await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, 27205);
    }

    #[tokio::test]
    async fn test_favorites_require_session() {
        let gateway = Arc::new(MockAccountGateway::new());
        let session = Session::new(gateway);

        let result = session.add_favorite(603).await;
        assert!(matches!(result, Err(SessionError::NotAuthenticated)));
    }
}
