//! Movie catalog client.
//!
//! This module provides a `MovieCatalog` trait for browsing the remote
//! movie backend (search by filter, detail lookup, top-10, genres) and a
//! reqwest-based implementation of it.

mod rest;
mod types;

pub use rest::RestCatalog;
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the movie backend.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found (404).
    #[error("Movie not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Trait for movie catalog backends.
///
/// Implemented by `RestCatalog` for the real backend and by
/// `testing::MockCatalog` for tests, so consumers (the search controller
/// in particular) never depend on the transport.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// List movies matching the given filter.
    async fn movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>, CatalogError>;

    /// Get a single movie by ID.
    async fn movie(&self, id: u64) -> Result<Movie, CatalogError>;

    /// Get a random movie (used by the banner surface).
    async fn random_movie(&self) -> Result<Movie, CatalogError>;

    /// Get the current top-10 list.
    async fn top10(&self) -> Result<Vec<Movie>, CatalogError>;

    /// Get all known genre names.
    async fn genres(&self) -> Result<Vec<String>, CatalogError>;
}
