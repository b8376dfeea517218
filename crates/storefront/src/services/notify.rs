//! Session-backed notification queue.
//!
//! The cart engine reports events through the [`pulseira_core::Notifier`]
//! trait; handlers collect them into a `Vec` during the request and flush
//! the batch here. The presentation layer drains the queue via
//! `GET /notifications` and renders toasts however it likes.

use tower_sessions::Session;

use pulseira_core::Notification;

use crate::models::session_keys;

/// Append notifications to the session's pending queue.
///
/// # Errors
///
/// Returns the session store error if the record cannot be read or written.
pub async fn queue_notifications(
    session: &Session,
    batch: Vec<Notification>,
) -> Result<(), tower_sessions::session::Error> {
    if batch.is_empty() {
        return Ok(());
    }

    let mut pending: Vec<Notification> = session
        .get(session_keys::NOTIFICATIONS)
        .await?
        .unwrap_or_default();
    pending.extend(batch);

    session.insert(session_keys::NOTIFICATIONS, pending).await
}

/// Take every pending notification, leaving the queue empty.
///
/// # Errors
///
/// Returns the session store error if the record cannot be read or written.
pub async fn drain_notifications(
    session: &Session,
) -> Result<Vec<Notification>, tower_sessions::session::Error> {
    Ok(session
        .remove::<Vec<Notification>>(session_keys::NOTIFICATIONS)
        .await?
        .unwrap_or_default())
}
