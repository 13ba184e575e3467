//! Status edits: optimistic tag updates plus a backend write.
//!
//! The UI change is applied before the request goes out and is not rolled
//! back when the request fails; failures only reach the log.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{error, info};

use crate::api::MovieBackend;
use crate::error::ClientError;
use crate::messages::AppMessage;
use crate::modal::Modal;
use crate::model::Interaction;
use crate::sync::ListView;

/// Show `status` on the open dialog (if it shows this movie) and on the card.
/// `None` removes the tag from both.
pub fn apply_status(list: &mut ListView, modal: &mut Modal, movie_id: i64, status: Option<&str>) {
    if let Some(body) = modal.body_for_mut(movie_id) {
        body.set_status(status);
    }
    if let Some(card) = list.card_mut(movie_id) {
        card.set_status(status);
    }
}

/// Write the status to the backend, logging any failure.
pub async fn save_status(
    backend: &dyn MovieBackend,
    user_id: i64,
    movie_id: i64,
    status: Option<&str>,
) -> Result<(), ClientError> {
    let result = match status {
        Some(status) => {
            let interaction = Interaction {
                status: status.to_string(),
                movie_id,
            };
            backend.record_interaction(user_id, &interaction).await
        }
        None => backend.clear_interaction(user_id, movie_id).await,
    };
    match &result {
        Ok(()) => info!(movie_id, status = ?status, "status saved"),
        Err(e) => error!(movie_id, status = ?status, error = %e, "failed to save status"),
    }
    result
}

/// Send the status write in the background.
pub fn spawn_save_status(
    backend: Arc<dyn MovieBackend>,
    tx: UnboundedSender<AppMessage>,
    user_id: i64,
    movie_id: i64,
    status: Option<String>,
) {
    tokio::spawn(async move {
        let result = save_status(backend.as_ref(), user_id, movie_id, status.as_deref()).await;
        let message = match result {
            Ok(()) => AppMessage::StatusSaved { movie_id, status },
            Err(_) => AppMessage::StatusFailed { movie_id },
        };
        let _ = tx.send(message);
    });
}
