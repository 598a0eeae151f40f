//! Cookie-identified sessions carrying one-shot flash messages.

pub mod store;

pub use store::{SessionId, SessionStore};

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Name of the cookie holding the session id.
pub const SESSION_COOKIE: &str = "contact_book.sid";

/// Find the session id in the request's `Cookie` headers.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| SessionId::parse(value.trim()))
}

/// `Set-Cookie` value binding the client to `id` for `max_age`.
pub fn session_cookie(id: &SessionId, max_age: Duration) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        id,
        max_age.as_secs().max(1)
    )
}

/// Periodically drop expired sessions until `shutdown` flips to `true`.
pub fn spawn_sweeper(
    store: SessionStore,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let purged = store.purge_expired();
                    if purged > 0 {
                        debug!("Purged {} expired sessions", purged);
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
    })
}
