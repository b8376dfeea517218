//! Notification drain endpoint.

use axum::Json;
use tower_sessions::Session;
use tracing::instrument;

use pulseira_core::Notification;

use crate::error::Result;
use crate::services;

/// Take every pending notification for this session.
///
/// Draining is destructive: a second call returns an empty list until new
/// cart activity queues more.
#[instrument(skip(session))]
pub async fn drain(session: Session) -> Result<Json<Vec<Notification>>> {
    let pending = services::notify::drain_notifications(&session).await?;
    Ok(Json(pending))
}
