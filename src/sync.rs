//! Fetching the movie list and rendering it into cards.
//!
//! Each refresh runs as its own task and reports back with
//! [`AppMessage::ListLoaded`]. Results are applied in arrival order, so when
//! two refreshes overlap the one that finishes last wins.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::api::MovieBackend;
use crate::card::{Card, render_card};
use crate::error::ClientError;
use crate::location::QueryState;
use crate::messages::AppMessage;
use crate::model::{Movie, PageContext};

pub const ERROR_MESSAGE: &str = "Error loading movies.";

/// Message shown in place of (or next to) the card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Empty(PageContext),
    Error,
}

impl Placeholder {
    pub fn text(self) -> &'static str {
        match self {
            Placeholder::Empty(context) => context.empty_message(),
            Placeholder::Error => ERROR_MESSAGE,
        }
    }
}

/// The rendered movie list.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    cards: Vec<Card>,
    placeholder: Option<Placeholder>,
}

impl ListView {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn placeholder(&self) -> Option<Placeholder> {
        self.placeholder
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card_mut(&mut self, movie_id: i64) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.movie_id == movie_id)
    }

    /// Replace the list with one card per movie, in the given order.
    pub fn render(&mut self, context: PageContext, movies: &[Movie]) {
        self.cards = movies.iter().map(render_card).collect();
        self.placeholder = if self.cards.is_empty() {
            Some(Placeholder::Empty(context))
        } else {
            None
        };
    }

    /// Apply the outcome of a fetch.
    ///
    /// On error the cards already on screen stay and the error placeholder
    /// is shown with them.
    pub fn apply(&mut self, context: PageContext, result: Result<Vec<Movie>, ClientError>) {
        match result {
            Ok(movies) => self.render(context, &movies),
            Err(e) => {
                warn!(error = %e, network = e.is_network(), "failed to load movies");
                self.placeholder = Some(Placeholder::Error);
            }
        }
    }

    /// Expand the card at `index`, collapsing every other one.
    /// Expanding an already expanded card collapses it.
    pub fn toggle_expand(&mut self, index: usize) {
        let was_expanded = match self.cards.get(index) {
            Some(card) => card.expanded,
            None => return,
        };
        for card in &mut self.cards {
            card.expanded = false;
        }
        self.cards[index].expanded = !was_expanded;
    }

    #[cfg(test)]
    pub fn expanded_index(&self) -> Option<usize> {
        self.cards.iter().position(|c| c.expanded)
    }
}

/// Fetch the list for `context`.
pub async fn load(
    backend: &dyn MovieBackend,
    context: PageContext,
    query: &QueryState,
) -> Result<Vec<Movie>, ClientError> {
    debug!(?context, query = %query.to_query_string(), "refreshing list");
    backend.list_movies(context, query).await
}

/// Start a refresh in the background.
pub fn spawn_refresh(
    backend: Arc<dyn MovieBackend>,
    tx: UnboundedSender<AppMessage>,
    context: PageContext,
    query: QueryState,
) {
    tokio::spawn(async move {
        let result = load(backend.as_ref(), context, &query).await;
        // Receiver gone means the UI has shut down.
        let _ = tx.send(AppMessage::ListLoaded {
            context,
            query,
            result,
        });
    });
}
