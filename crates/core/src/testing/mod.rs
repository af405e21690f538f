//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the external service
//! traits, allowing search and session behavior to be tested without a
//! real backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use cinemaguide_core::testing::{fixtures, MockCatalog};
//!
//! let catalog = MockCatalog::new();
//! catalog.set_movies(vec![fixtures::movie(1, "The Matrix", 1999)]).await;
//!
//! let results = catalog.movies(&MovieFilter::by_title("Matrix")).await?;
//! assert_eq!(results.len(), 1);
//! ```

mod mock_account;
mod mock_catalog;

pub use mock_account::MockAccountGateway;
pub use mock_catalog::{MockCatalog, RecordedLookup};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::Movie;

    /// Create a test movie with reasonable defaults.
    pub fn movie(id: u64, title: &str, year: u32) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            original_title: Some(title.to_string()),
            language: Some("en".to_string()),
            release_year: Some(year),
            release_date: Some(format!("{}-06-15", year)),
            genres: vec!["Drama".to_string()],
            plot: Some(format!("A movie about {}.", title.to_lowercase())),
            runtime: Some(120),
            budget: None,
            revenue: None,
            homepage: None,
            status: Some("Released".to_string()),
            poster_url: Some("https://example.com/poster.jpg".to_string()),
            backdrop_url: None,
            trailer_url: None,
            trailer_you_tube_id: None,
            tmdb_rating: Some(7.5),
            search_l: Some(title.to_lowercase()),
            keywords: vec![],
            countries_of_origin: vec!["US".to_string()],
            languages: vec!["en".to_string()],
            cast: vec![],
            director: None,
            production: None,
            awards_summary: None,
        }
    }
}
