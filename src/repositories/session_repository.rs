use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::SessionState,
};

/// A session's state behind its own lock. Holding the lock for a whole
/// action keeps actions on one session from interleaving.
pub type SessionHandle = Arc<Mutex<SessionState>>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self) -> AppResult<Uuid>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<SessionHandle>>;
    async fn delete(&self, id: &Uuid) -> AppResult<bool>;
    /// Drops sessions not touched within `max_idle`, returning how many went.
    async fn evict_idle(&self, max_idle: Duration) -> AppResult<usize>;
    async fn count(&self) -> AppResult<usize>;
}

struct SessionEntry {
    state: SessionHandle,
    last_seen: DateTime<Utc>,
}

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        let entry = SessionEntry {
            state: Arc::new(Mutex::new(SessionState::default())),
            last_seen: Utc::now(),
        };
        self.sessions.write().await.insert(id, entry);
        Ok(id)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<SessionHandle>> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.get_mut(id).map(|entry| {
            entry.last_seen = Utc::now();
            Arc::clone(&entry.state)
        }))
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        Ok(self.sessions.write().await.remove(id).is_some())
    }

    async fn evict_idle(&self, max_idle: Duration) -> AppResult<usize> {
        // A ttl reaching past the earliest representable time evicts nothing.
        let Some(cutoff) = Utc::now().checked_sub_signed(max_idle) else {
            return Ok(0);
        };
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_seen >= cutoff);
        Ok(before - sessions.len())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.sessions.read().await.len())
    }
}

/// Looks a session up, turning an unknown id into `NotFound`.
pub async fn require_session(
    repository: &dyn SessionRepository,
    id: &Uuid,
) -> AppResult<SessionHandle> {
    repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", id)))
}
