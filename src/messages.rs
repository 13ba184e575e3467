use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::error::ClientError;
use crate::location::QueryState;
use crate::model::{Movie, PageContext};

/// Messages sent from background network tasks to the UI loop
#[derive(Debug)]
pub enum AppMessage {
    /// A list fetch finished, successfully or not
    ListLoaded {
        context: PageContext,
        query: QueryState,
        result: Result<Vec<Movie>, ClientError>,
    },

    /// A status update reached the backend
    StatusSaved {
        movie_id: i64,
        status: Option<String>,
    },

    /// A status update failed; the optimistic UI change stays in place
    StatusFailed { movie_id: i64 },
}

/// Both ends of the task -> UI channel
pub struct AppChannels {
    pub tx: UnboundedSender<AppMessage>,
    pub rx: UnboundedReceiver<AppMessage>,
}

impl AppChannels {
    pub fn new() -> Self {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        Self { tx, rx }
    }
}

impl Default for AppChannels {
    fn default() -> Self {
        Self::new()
    }
}
