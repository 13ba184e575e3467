use std::sync::LazyLock;

use regex::Regex;

use crate::model::Movie;

pub const UNSPECIFIED: &str = "unspecified";
pub const NO_DESCRIPTION: &str = "No description";

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Style qualifier for a status tag: `Want To Watch` -> `status-want-to-watch`.
pub fn status_class(status: &str) -> String {
    format!(
        "status-{}",
        WHITESPACE_RUN.replace_all(&status.to_lowercase(), "-")
    )
}

/// A status label with its derived style qualifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTag {
    text: String,
    class: String,
}

impl StatusTag {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            class: status_class(text),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn class(&self) -> &str {
        &self.class
    }
}

/// Rendered summary of one movie in the list.
///
/// The status tag slot sits right after the genre tags, so setting it on a
/// card that had none places it there.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub movie_id: i64,
    pub title: String,
    pub year: String,
    pub rating: String,
    pub genre_tags: Vec<String>,
    pub status_tag: Option<StatusTag>,
    pub description: String,
    /// Description is hidden until the card is expanded.
    pub expanded: bool,
}

impl Card {
    /// Set, replace or remove the status tag.
    pub fn set_status(&mut self, status: Option<&str>) {
        self.status_tag = status.map(StatusTag::new);
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status_tag.as_ref().map(StatusTag::text)
    }
}

/// Render one movie into a card. Pure: equal input gives equal output.
pub fn render_card(movie: &Movie) -> Card {
    Card {
        movie_id: movie.id,
        title: movie.title.clone(),
        year: movie
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| UNSPECIFIED.to_string()),
        rating: movie
            .rating_imdb
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| UNSPECIFIED.to_string()),
        genre_tags: movie.genres.clone(),
        status_tag: movie.status.as_ref().map(|s| StatusTag::new(&s.value)),
        description: movie
            .description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        expanded: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MovieStatus;
    use proptest::prelude::*;

    fn matrix() -> Movie {
        Movie {
            id: 1,
            title: "The Matrix".to_string(),
            year: Some(1999),
            rating_imdb: Some(8.7),
            genres: vec!["Action".to_string(), "Sci-Fi".to_string()],
            description: Some("A hacker learns the truth.".to_string()),
            status: Some(MovieStatus {
                value: "Want To Watch".to_string(),
            }),
        }
    }

    #[test]
    fn test_status_class_examples() {
        assert_eq!(status_class("Want To Watch"), "status-want-to-watch");
        assert_eq!(status_class("watched"), "status-watched");
        assert_eq!(status_class("want_to_watch"), "status-want_to_watch");
        assert_eq!(status_class("Want \t  To\nWatch"), "status-want-to-watch");
    }

    #[test]
    fn test_render_full_movie() {
        let card = render_card(&matrix());
        assert_eq!(card.movie_id, 1);
        assert_eq!(card.title, "The Matrix");
        assert_eq!(card.year, "1999");
        assert_eq!(card.rating, "8.7");
        assert_eq!(card.genre_tags, vec!["Action", "Sci-Fi"]);
        let tag = card.status_tag.as_ref().unwrap();
        assert_eq!(tag.text(), "Want To Watch");
        assert_eq!(tag.class(), "status-want-to-watch");
        assert!(!card.expanded);
    }

    #[test]
    fn test_render_missing_fields() {
        let movie = Movie {
            id: 2,
            title: "Untitled".to_string(),
            year: None,
            rating_imdb: None,
            genres: Vec::new(),
            description: None,
            status: None,
        };
        let card = render_card(&movie);
        assert_eq!(card.year, UNSPECIFIED);
        assert_eq!(card.rating, UNSPECIFIED);
        assert!(card.genre_tags.is_empty());
        assert!(card.status_tag.is_none());
        assert_eq!(card.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_card(&matrix()), render_card(&matrix()));
    }

    #[test]
    fn test_set_status_creates_and_removes_tag() {
        let mut movie = matrix();
        movie.status = None;
        let mut card = render_card(&movie);
        card.set_status(Some("liked"));
        assert_eq!(card.status_text(), Some("liked"));
        assert_eq!(card.status_tag.as_ref().unwrap().class(), "status-liked");
        card.set_status(None);
        assert!(card.status_tag.is_none());
    }

    proptest! {
        #[test]
        fn prop_status_class_is_lowercase_hyphenated(words in proptest::collection::vec("[A-Za-z_]{1,8}", 1..5), sep in "[ \t]{1,3}") {
            let text = words.join(&sep);
            let expected = format!("status-{}", words.join("-").to_lowercase());
            prop_assert_eq!(status_class(&text), expected.clone());

            let movie = Movie {
                id: 9,
                title: "x".to_string(),
                year: None,
                rating_imdb: None,
                genres: Vec::new(),
                description: None,
                status: Some(MovieStatus { value: text.clone() }),
            };
            let card = render_card(&movie);
            let tag = card.status_tag.unwrap();
            prop_assert_eq!(tag.class(), expected.as_str());
        }
    }
}
