use std::sync::Arc;

use actix::prelude::*;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::GameState;
use crate::errors::ErrorCode;

/// Outbound event delivered to a session actor.
#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub enum TableEvent {
    Snapshot(Arc<GameState>),
    Rejected { code: ErrorCode, detail: String },
}

/// Live sessions keyed by connection id.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<Uuid, Recipient<TableEvent>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn register(&self, conn_id: Uuid, recipient: Recipient<TableEvent>) {
        self.sessions.insert(conn_id, recipient);
    }

    /// Returns true if the connection was registered.
    pub fn unregister(&self, conn_id: Uuid) -> bool {
        self.sessions.remove(&conn_id).is_some()
    }

    pub fn broadcast(&self, event: TableEvent) {
        for entry in self.sessions.iter() {
            entry.value().do_send(event.clone());
        }
    }

    pub fn send_to(&self, conn_id: Uuid, event: TableEvent) {
        if let Some(recipient) = self.sessions.get(&conn_id) {
            recipient.do_send(event);
        }
    }

    pub fn active_connections_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
