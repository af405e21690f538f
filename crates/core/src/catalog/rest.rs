//! Reqwest-based movie catalog client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{Movie, MovieFilter};
use super::{CatalogError, MovieCatalog};
use crate::config::ApiConfig;

/// Movie backend API client.
pub struct RestCatalog {
    client: Client,
    base_url: String,
}

impl RestCatalog {
    /// Create a new catalog client from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client reusing an existing reqwest `Client`.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&MovieFilter>,
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.get(&url);
        if let Some(filter) = query {
            request = request.query(filter);
        }

        let response = request.send().await?;

        let status = response.status();
        if status == 404 {
            return Err(CatalogError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        response.json().await.map_err(|e| {
            CatalogError::Parse(format!("Failed to parse response from {}: {}", path, e))
        })
    }
}

#[async_trait]
impl MovieCatalog for RestCatalog {
    async fn movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>, CatalogError> {
        debug!("Movie listing: filter={:?}", filter);
        self.get_json("/movie", Some(filter)).await
    }

    async fn movie(&self, id: u64) -> Result<Movie, CatalogError> {
        debug!("Movie detail: id={}", id);
        match self.get_json(&format!("/movie/{}", id), None).await {
            Err(CatalogError::NotFound(_)) => Err(CatalogError::NotFound(format!("movie {}", id))),
            other => other,
        }
    }

    async fn random_movie(&self) -> Result<Movie, CatalogError> {
        debug!("Random movie");
        self.get_json("/movie/random", None).await
    }

    async fn top10(&self) -> Result<Vec<Movie>, CatalogError> {
        debug!("Top-10 movies");
        self.get_json("/movie/top10", None).await
    }

    async fn genres(&self) -> Result<Vec<String>, CatalogError> {
        debug!("Genre list");
        self.get_json("/movie/genres", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let catalog = RestCatalog::new(&ApiConfig {
            base_url: "https://example.com/".to_string(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(catalog.base_url, "https://example.com");
    }

    #[test]
    fn test_with_client_keeps_base_url() {
        let catalog = RestCatalog::with_client(Client::new(), "http://localhost:9000");
        assert_eq!(catalog.base_url, "http://localhost:9000");
    }
}
