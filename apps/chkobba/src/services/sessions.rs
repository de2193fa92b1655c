use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::info;

use crate::config::game::GameSettings;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::services::game_flow::{RoomId, Session, SessionConfig, SessionTiming};
use crate::services::scheduler::Scheduler;

/// Live sessions keyed by room.
pub struct SessionRegistry {
    sessions: DashMap<RoomId, Arc<Session>>,
    scheduler: Arc<dyn Scheduler>,
    settings: GameSettings,
}

impl SessionRegistry {
    pub fn new(scheduler: Arc<dyn Scheduler>, settings: GameSettings) -> Self {
        Self {
            sessions: DashMap::new(),
            scheduler,
            settings,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Start a session for `config.room_id`; the room must be free.
    pub fn create(&self, config: SessionConfig) -> Result<Arc<Session>, AppError> {
        match self.sessions.entry(config.room_id.clone()) {
            Entry::Occupied(entry) => Err(DomainError::conflict(
                ConflictKind::SessionExists,
                format!("Room {} already has a session", entry.key()),
            )
            .into()),
            Entry::Vacant(slot) => {
                let session = Session::start(config, Arc::clone(&self.scheduler))?;
                slot.insert(Arc::clone(&session));
                info!(room_id = %session.room_id(), live = self.sessions.len(), "Session registered");
                Ok(session)
            }
        }
    }

    /// Human-vs-computers session using the configured defaults.
    pub fn open(&self, room_id: impl Into<RoomId>, num_players: u8) -> Result<Arc<Session>, AppError> {
        let config = SessionConfig::new(room_id, num_players, self.settings.default_target_score)
            .with_timing(SessionTiming::from(&self.settings));
        self.create(config)
    }

    pub fn get(&self, room_id: &str) -> Result<Arc<Session>, AppError> {
        let session = self
            .sessions
            .get(room_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| missing_room(room_id))?;
        Ok(session)
    }

    /// Remove the room and close its session.
    pub fn close(&self, room_id: &str) -> Result<(), AppError> {
        let (_, session) = self
            .sessions
            .remove(room_id)
            .ok_or_else(|| missing_room(room_id))?;
        session.close();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sorted for stable output.
    pub fn room_ids(&self) -> Vec<RoomId> {
        let mut ids: Vec<RoomId> = self.sessions.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }
}

fn missing_room(room_id: &str) -> DomainError {
    DomainError::not_found(NotFoundKind::Session, format!("No session for room {room_id}"))
}
