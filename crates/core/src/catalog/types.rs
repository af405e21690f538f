//! Types for the movie backend API.

use serde::{Deserialize, Serialize};

/// A movie as returned by the backend.
///
/// The backend speaks camelCase JSON. Only the fields every listing
/// surface needs are required; everything else is optional with serde
/// defaults so partial payloads still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Backend movie ID.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Original title (in original language).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    /// Primary language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Release year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<u32>,
    /// Release date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Genre names.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    /// Runtime in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    /// Budget as reported by the backend (string, may be absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    /// Revenue as reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
    /// Official homepage URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Release status ("Released", etc.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Poster image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    /// Backdrop image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_url: Option<String>,
    /// Trailer URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    /// YouTube ID of the trailer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_you_tube_id: Option<String>,
    /// TMDB rating (0-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb_rating: Option<f32>,
    /// Lowercased title used by the backend for matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_l: Option<String>,
    /// Keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Production countries.
    #[serde(default)]
    pub countries_of_origin: Vec<String>,
    /// Spoken languages.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Cast member names.
    #[serde(default)]
    pub cast: Vec<String>,
    /// Director name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    /// Production company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<String>,
    /// Awards summary text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awards_summary: Option<String>,
}

impl Movie {
    /// Human-readable runtime, e.g. `"2h 16m"`, `"45m"`, or `"—"` when
    /// the runtime is unknown or zero.
    pub fn runtime_display(&self) -> String {
        match self.runtime {
            None | Some(0) => "—".to_string(),
            Some(minutes) if minutes < 60 => format!("{}m", minutes),
            Some(minutes) => format!("{}h {}m", minutes / 60, minutes % 60),
        }
    }
}

/// Sort direction for movie listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Query parameters for a movie listing request.
///
/// Serializes straight into the backend's query string; unset fields are
/// omitted entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieFilter {
    /// Free-text title filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Restrict to a single genre.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Field to sort by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Sort direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    /// Maximum results to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Pagination offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl MovieFilter {
    /// Filter by title only.
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set the result limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_movie_json() -> &'static str {
        r#"{"id": 1, "title": "The Matrix"}"#
    }

    #[test]
    fn test_movie_minimal_deserialization() {
        let movie: Movie = serde_json::from_str(minimal_movie_json()).unwrap();
        assert_eq!(movie.id, 1);
        assert_eq!(movie.title, "The Matrix");
        assert!(movie.genres.is_empty());
        assert!(movie.runtime.is_none());
    }

    #[test]
    fn test_movie_camel_case_fields() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "originalTitle": "The Matrix",
            "releaseYear": 1999,
            "releaseDate": "1999-03-31",
            "genres": ["Action", "Science Fiction"],
            "runtime": 136,
            "posterUrl": "https://example.com/poster.jpg",
            "trailerYouTubeId": "m8e-FF8MsqU",
            "tmdbRating": 8.2,
            "countriesOfOrigin": ["US"],
            "awardsSummary": null
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.release_year, Some(1999));
        assert_eq!(movie.runtime, Some(136));
        assert_eq!(movie.trailer_you_tube_id.as_deref(), Some("m8e-FF8MsqU"));
        assert_eq!(movie.countries_of_origin, vec!["US"]);
        assert!(movie.awards_summary.is_none());
    }

    #[test]
    fn test_runtime_display() {
        let mut movie: Movie = serde_json::from_str(minimal_movie_json()).unwrap();
        assert_eq!(movie.runtime_display(), "—");

        movie.runtime = Some(0);
        assert_eq!(movie.runtime_display(), "—");

        movie.runtime = Some(45);
        assert_eq!(movie.runtime_display(), "45m");

        movie.runtime = Some(136);
        assert_eq!(movie.runtime_display(), "2h 16m");

        movie.runtime = Some(60);
        assert_eq!(movie.runtime_display(), "1h 0m");
    }

    #[test]
    fn test_filter_query_string_omits_unset_fields() {
        let filter = MovieFilter::by_title("Inception");
        let qs = serde_json::to_value(&filter).unwrap();
        let obj = qs.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["title"], "Inception");
    }

    #[test]
    fn test_filter_sort_order_serialization() {
        let filter = MovieFilter {
            genre: Some("drama".to_string()),
            sort_by: Some("releaseYear".to_string()),
            sort_order: Some(SortOrder::Desc),
            ..MovieFilter::default()
        };
        let qs = serde_json::to_value(&filter).unwrap();
        assert_eq!(qs["sortBy"], "releaseYear");
        assert_eq!(qs["sortOrder"], "desc");
    }

    #[test]
    fn test_filter_with_limit() {
        let filter = MovieFilter::by_title("Matrix").with_limit(10);
        assert_eq!(filter.title.as_deref(), Some("Matrix"));
        assert_eq!(filter.limit, Some(10));
    }
}
