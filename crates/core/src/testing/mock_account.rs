//! Mock account gateway for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog::Movie;
use crate::session::{AccountGateway, Credentials, Registration, SessionError, User};
use crate::testing::fixtures;

/// Mock implementation of the `AccountGateway` trait.
///
/// Keeps a single configured account, an in-memory favorites list and a
/// signed-in flag, mirroring the cookie session of the real backend.
/// Errors injected with `set_next_error` apply to the next call only.
pub struct MockAccountGateway {
    account: Arc<RwLock<Option<(Credentials, User)>>>,
    signed_in: Arc<RwLock<bool>>,
    favorites: Arc<RwLock<Vec<u64>>>,
    registrations: Arc<RwLock<Vec<Registration>>>,
    next_error: Arc<RwLock<Option<SessionError>>>,
}

impl Default for MockAccountGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAccountGateway {
    /// Create a mock gateway with no account configured.
    pub fn new() -> Self {
        Self {
            account: Arc::new(RwLock::new(None)),
            signed_in: Arc::new(RwLock::new(false)),
            favorites: Arc::new(RwLock::new(Vec::new())),
            registrations: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Configure the account that `login` accepts.
    pub async fn set_account(&self, credentials: Credentials, user: User) {
        *self.account.write().await = Some((credentials, user));
    }

    /// Fail the next call with the given error.
    pub async fn set_next_error(&self, error: SessionError) {
        *self.next_error.write().await = Some(error);
    }

    /// Registrations made so far.
    pub async fn recorded_registrations(&self) -> Vec<Registration> {
        self.registrations.read().await.clone()
    }

    /// Favorite movie IDs currently stored.
    pub async fn favorite_ids(&self) -> Vec<u64> {
        self.favorites.read().await.clone()
    }

    async fn take_next_error(&self) -> Option<SessionError> {
        self.next_error.write().await.take()
    }

    async fn require_session(&self) -> Result<(), SessionError> {
        if *self.signed_in.read().await {
            Ok(())
        } else {
            Err(SessionError::NotAuthenticated)
        }
    }
}

#[async_trait]
impl AccountGateway for MockAccountGateway {
    async fn login(&self, credentials: &Credentials) -> Result<(), SessionError> {
        if let Some(error) = self.take_next_error().await {
            return Err(error);
        }
        let account = self.account.read().await;
        match account.as_ref() {
            Some((expected, _)) if expected == credentials => {
                *self.signed_in.write().await = true;
                Ok(())
            }
            _ => Err(SessionError::NotAuthenticated),
        }
    }

    async fn register(&self, registration: &Registration) -> Result<(), SessionError> {
        if let Some(error) = self.take_next_error().await {
            return Err(error);
        }
        self.registrations.write().await.push(registration.clone());
        Ok(())
    }

    async fn logout(&self) -> Result<(), SessionError> {
        if let Some(error) = self.take_next_error().await {
            return Err(error);
        }
        *self.signed_in.write().await = false;
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<User>, SessionError> {
        if let Some(error) = self.take_next_error().await {
            return Err(error);
        }
        if !*self.signed_in.read().await {
            return Ok(None);
        }
        Ok(self.account.read().await.as_ref().map(|(_, user)| user.clone()))
    }

    async fn add_favorite(&self, movie_id: u64) -> Result<(), SessionError> {
        if let Some(error) = self.take_next_error().await {
            return Err(error);
        }
        self.require_session().await?;
        let mut favorites = self.favorites.write().await;
        if !favorites.contains(&movie_id) {
            favorites.push(movie_id);
        }
        Ok(())
    }

    async fn favorites(&self) -> Result<Vec<Movie>, SessionError> {
        if let Some(error) = self.take_next_error().await {
            return Err(error);
        }
        self.require_session().await?;
        Ok(self
            .favorites
            .read()
            .await
            .iter()
            .map(|&id| fixtures::movie(id, &format!("Movie {}", id), 2000))
            .collect())
    }

    async fn remove_favorite(&self, movie_id: u64) -> Result<(), SessionError> {
        if let Some(error) = self.take_next_error().await {
            return Err(error);
        }
        self.require_session().await?;
        self.favorites.write().await.retain(|&id| id != movie_id);
        Ok(())
    }
}
