use serde::{Deserialize, Serialize};

/// A movie as returned by the backend's list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating_imdb: Option<f64>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Absent when the user has no recorded interaction with this movie.
    #[serde(default)]
    pub status: Option<MovieStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieStatus {
    pub value: String,
}

/// Interaction states the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionStatus {
    Watched,
    Liked,
    WantToWatch,
    Dropped,
    Watching,
}

impl InteractionStatus {
    pub const ALL: [InteractionStatus; 5] = [
        Self::Watched,
        Self::Liked,
        Self::WantToWatch,
        Self::Dropped,
        Self::Watching,
    ];

    /// Wire value sent to and returned by the backend.
    pub fn value(self) -> &'static str {
        match self {
            Self::Watched => "watched",
            Self::Liked => "liked",
            Self::WantToWatch => "want_to_watch",
            Self::Dropped => "dropped",
            Self::Watching => "watching",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Watched => "Watched",
            Self::Liked => "Liked",
            Self::WantToWatch => "Want to watch",
            Self::Dropped => "Dropped",
            Self::Watching => "Watching",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }
}

/// Write-only record posted when the user picks a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interaction {
    pub status: String,
    pub movie_id: i64,
}

/// Which page the list belongs to. Selects endpoint and empty-list wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContext {
    Listing,
    Recommendations,
}

impl PageContext {
    /// Read path on the backend for this page.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Listing => "/api/movies",
            Self::Recommendations => "/api/recommendations",
        }
    }

    /// Address-bar path for this page.
    pub fn path(self) -> &'static str {
        match self {
            Self::Listing => "/",
            Self::Recommendations => "/recommendations",
        }
    }

    pub fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/') == "/recommendations" {
            Self::Recommendations
        } else {
            Self::Listing
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Listing => "No movies found.",
            Self::Recommendations => "No recommendations yet. Rate a few movies to get some.",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Listing => "Movies",
            Self::Recommendations => "Recommendations",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserializes_with_missing_optionals() {
        let movie: Movie = serde_json::from_str(r#"{"id": 3, "title": "Heat"}"#).unwrap();
        assert_eq!(movie.id, 3);
        assert_eq!(movie.year, None);
        assert_eq!(movie.rating_imdb, None);
        assert!(movie.genres.is_empty());
        assert!(movie.status.is_none());
    }

    #[test]
    fn test_movie_deserializes_status() {
        let movie: Movie = serde_json::from_str(
            r#"{"id": 1, "title": "The Matrix", "year": 1999, "rating_imdb": 8.7,
                "genres": ["Action", "Sci-Fi"], "description": "Neo",
                "status": {"value": "watched"}}"#,
        )
        .unwrap();
        assert_eq!(movie.status.unwrap().value, "watched");
        assert_eq!(movie.genres, vec!["Action", "Sci-Fi"]);
    }

    #[test]
    fn test_interaction_body_shape() {
        let body = serde_json::to_value(Interaction {
            status: "liked".to_string(),
            movie_id: 42,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"status": "liked", "movie_id": 42}));
    }

    #[test]
    fn test_interaction_status_values_round_trip() {
        for status in InteractionStatus::ALL {
            assert_eq!(InteractionStatus::from_value(status.value()), Some(status));
        }
        assert_eq!(InteractionStatus::from_value("loved"), None);
    }

    #[test]
    fn test_page_context_paths() {
        assert_eq!(PageContext::from_path("/recommendations"), PageContext::Recommendations);
        assert_eq!(PageContext::from_path("/recommendations/"), PageContext::Recommendations);
        assert_eq!(PageContext::from_path("/"), PageContext::Listing);
        assert_eq!(PageContext::from_path("/search"), PageContext::Listing);
        assert_ne!(
            PageContext::Listing.empty_message(),
            PageContext::Recommendations.empty_message()
        );
    }
}
