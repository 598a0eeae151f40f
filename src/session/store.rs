//! Per-user session storage with time-based expiration.
//!
//! Each session holds at most one pending flash message. Sessions expire
//! after the configured TTL measured from their last write.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use tracing::warn;
use uuid::Uuid;

/// Opaque session identifier carried in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh random session id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse a cookie value. Anything that is not a UUID is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(|u| Self(u.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default)]
struct SessionState {
    flash: Option<String>,
}

#[derive(Debug, Clone)]
struct SessionEntry {
    state: SessionState,
    touched_at: Instant,
}

/// A thread-safe session map with time-based expiration.
///
/// Cloning is cheap and clones share the same sessions.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    /// Create a new SessionStore with the specified TTL in seconds.
    pub fn new(ttl_seconds: u64) -> Self {
        Self::with_ttl(Duration::from_secs(ttl_seconds))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    fn is_live(&self, entry: &SessionEntry, now: Instant) -> bool {
        now.duration_since(entry.touched_at) < self.ttl
    }

    /// Set the pending flash message, replacing any previous one.
    ///
    /// Creates the session if needed and restarts its TTL.
    pub fn flash(&self, id: &SessionId, message: impl Into<String>) {
        let entry = SessionEntry {
            state: SessionState {
                flash: Some(message.into()),
            },
            touched_at: Instant::now(),
        };

        match self.sessions.write() {
            Ok(mut sessions) => {
                sessions.insert(id.clone(), entry);
            }
            Err(e) => warn!("Dropping flash for session {}: {}", id, e),
        }
    }

    /// Read and clear the pending flash message in one step.
    ///
    /// Returns `None` if there is no message, the session is unknown, or it
    /// has expired.
    pub fn take_flash(&self, id: &SessionId) -> Option<String> {
        let now = Instant::now();

        let mut sessions = match self.sessions.write() {
            Ok(sessions) => sessions,
            Err(e) => {
                warn!("Cannot read flash for session {}: {}", id, e);
                return None;
            }
        };

        if let Some(entry) = sessions.get_mut(id) {
            if self.is_live(entry, now) {
                return entry.state.flash.take();
            }
            sessions.remove(id);
        }

        None
    }

    /// Check whether a session exists and hasn't expired.
    pub fn contains(&self, id: &SessionId) -> bool {
        let now = Instant::now();

        if let Ok(sessions) = self.sessions.read() {
            if let Some(entry) = sessions.get(id) {
                return self.is_live(entry, now);
            }
        }

        false
    }

    /// Remove all expired sessions, returning how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();

        match self.sessions.write() {
            Ok(mut sessions) => {
                let before = sessions.len();
                sessions.retain(|_, entry| now.duration_since(entry.touched_at) < self.ttl);
                before - sessions.len()
            }
            Err(e) => {
                warn!("Skipping session purge: {}", e);
                0
            }
        }
    }

    /// Get the number of sessions (including expired ones).
    pub fn len(&self) -> usize {
        if let Ok(sessions) = self.sessions.read() {
            sessions.len()
        } else {
            0
        }
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the TTL duration for sessions.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("ttl", &self.ttl)
            .field("sessions", &self.len())
            .finish()
    }
}
