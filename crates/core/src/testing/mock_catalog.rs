//! Mock movie catalog for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{sleep, Duration};

use crate::catalog::{CatalogError, Movie, MovieCatalog, MovieFilter};

/// A recorded lookup for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedLookup {
    /// The filter that was used.
    pub filter: MovieFilter,
}

/// A handler that produces results dynamically based on the title filter.
type QueryHandler = Box<dyn Fn(&str) -> Option<Vec<Movie>> + Send + Sync>;

/// Mock implementation of the `MovieCatalog` trait.
///
/// Provides controllable behavior for testing:
/// - return configurable movie lists
/// - track lookups for assertions
/// - simulate failures and slow backends
///
/// Errors injected with `set_next_error` apply to the next call only.
/// The lookup delay uses `tokio::time::sleep`, so tests driving a paused
/// clock control exactly when a "network" call resolves.
pub struct MockCatalog {
    /// Configured movies to return.
    movies: Arc<RwLock<Vec<Movie>>>,
    /// Recorded lookups (in dispatch order).
    lookups: Arc<RwLock<Vec<RecordedLookup>>>,
    /// If set, the next operation fails with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
    /// Simulated backend latency for `movies` calls.
    lookup_delay: Arc<RwLock<Option<Duration>>>,
    /// Dynamic result generation keyed by the title filter.
    query_handler: Arc<RwLock<Option<QueryHandler>>>,
}

impl std::fmt::Debug for MockCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockCatalog")
            .field("movies", &"<movies>")
            .field("lookups", &"<lookups>")
            .field("next_error", &"<next_error>")
            .field("lookup_delay", &"<delay>")
            .field("query_handler", &"<handler>")
            .finish()
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    /// Create a new mock catalog with no movies.
    pub fn new() -> Self {
        Self {
            movies: Arc::new(RwLock::new(Vec::new())),
            lookups: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            lookup_delay: Arc::new(RwLock::new(None)),
            query_handler: Arc::new(RwLock::new(None)),
        }
    }

    /// Replace the configured movie list.
    pub async fn set_movies(&self, movies: Vec<Movie>) {
        *self.movies.write().await = movies;
    }

    /// Fail the next call with the given error.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Simulate backend latency on `movies` calls.
    pub async fn set_lookup_delay(&self, delay: Duration) {
        *self.lookup_delay.write().await = Some(delay);
    }

    /// Produce results dynamically from the title filter. Returning
    /// `None` falls back to the configured movie list.
    pub async fn set_query_handler<F>(&self, handler: F)
    where
        F: Fn(&str) -> Option<Vec<Movie>> + Send + Sync + 'static,
    {
        *self.query_handler.write().await = Some(Box::new(handler));
    }

    /// All lookups made so far, in dispatch order.
    pub async fn recorded_lookups(&self) -> Vec<RecordedLookup> {
        self.lookups.read().await.clone()
    }

    /// Clear recorded lookups.
    pub async fn clear_recorded(&self) {
        self.lookups.write().await.clear();
    }

    async fn take_next_error(&self) -> Option<CatalogError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl MovieCatalog for MockCatalog {
    async fn movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>, CatalogError> {
        self.lookups.write().await.push(RecordedLookup {
            filter: filter.clone(),
        });

        let delay = *self.lookup_delay.read().await;
        if let Some(delay) = delay {
            sleep(delay).await;
        }

        if let Some(error) = self.take_next_error().await {
            return Err(error);
        }

        if let Some(handler) = self.query_handler.read().await.as_ref() {
            if let Some(title) = filter.title.as_deref() {
                if let Some(movies) = handler(title) {
                    return Ok(movies);
                }
            }
        }

        Ok(self.movies.read().await.clone())
    }

    async fn movie(&self, id: u64) -> Result<Movie, CatalogError> {
        if let Some(error) = self.take_next_error().await {
            return Err(error);
        }
        self.movies
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("movie {}", id)))
    }

    async fn random_movie(&self) -> Result<Movie, CatalogError> {
        if let Some(error) = self.take_next_error().await {
            return Err(error);
        }
        self.movies
            .read()
            .await
            .first()
            .cloned()
            .ok_or_else(|| CatalogError::NotFound("no movies configured".to_string()))
    }

    async fn top10(&self) -> Result<Vec<Movie>, CatalogError> {
        if let Some(error) = self.take_next_error().await {
            return Err(error);
        }
        Ok(self.movies.read().await.iter().take(10).cloned().collect())
    }

    async fn genres(&self) -> Result<Vec<String>, CatalogError> {
        if let Some(error) = self.take_next_error().await {
            return Err(error);
        }
        let mut genres: Vec<String> = Vec::new();
        for movie in self.movies.read().await.iter() {
            for genre in &movie.genres {
                if !genres.contains(genre) {
                    genres.push(genre.clone());
                }
            }
        }
        Ok(genres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_mock_records_lookups() {
        let catalog = MockCatalog::new();
        catalog
            .movies(&MovieFilter::by_title("Inception"))
            .await
            .unwrap();

        let lookups = catalog.recorded_lookups().await;
        assert_eq!(lookups.len(), 1);
        assert_eq!(lookups[0].filter.title.as_deref(), Some("Inception"));
    }

    #[tokio::test]
    async fn test_mock_next_error_applies_once() {
        let catalog = MockCatalog::new();
        catalog
            .set_next_error(CatalogError::Api {
                status: 500,
                message: "boom".to_string(),
            })
            .await;

        assert!(catalog.movies(&MovieFilter::default()).await.is_err());
        assert!(catalog.movies(&MovieFilter::default()).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_query_handler_overrides_movies() {
        let catalog = MockCatalog::new();
        catalog
            .set_movies(vec![fixtures::movie(1, "Fallback", 2000)])
            .await;
        catalog
            .set_query_handler(|title| {
                (title == "Inception").then(|| vec![fixtures::movie(27205, "Inception", 2010)])
            })
            .await;

        let hits = catalog
            .movies(&MovieFilter::by_title("Inception"))
            .await
            .unwrap();
        assert_eq!(hits[0].id, 27205);

        let fallback = catalog
            .movies(&MovieFilter::by_title("Other"))
            .await
            .unwrap();
        assert_eq!(fallback[0].title, "Fallback");
    }

    #[tokio::test]
    async fn test_mock_movie_by_id() {
        let catalog = MockCatalog::new();
        catalog
            .set_movies(vec![fixtures::movie(603, "The Matrix", 1999)])
            .await;

        assert_eq!(catalog.movie(603).await.unwrap().title, "The Matrix");
        assert!(matches!(
            catalog.movie(999).await,
            Err(CatalogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_mock_genres_deduplicated() {
        let catalog = MockCatalog::new();
        let mut a = fixtures::movie(1, "A", 2000);
        a.genres = vec!["Drama".to_string(), "Action".to_string()];
        let mut b = fixtures::movie(2, "B", 2001);
        b.genres = vec!["Action".to_string()];
        catalog.set_movies(vec![a, b]).await;

        assert_eq!(catalog.genres().await.unwrap(), vec!["Drama", "Action"]);
    }
}
