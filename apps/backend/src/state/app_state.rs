use std::sync::Arc;

use actix::prelude::*;

use crate::config::server::ServerConfig;
use crate::ws::hub::SessionRegistry;
use crate::ws::table::GameTable;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// The single game table; its mailbox orders every intent.
    pub table: Addr<GameTable>,
    /// Live websocket sessions
    pub registry: Arc<SessionRegistry>,
}

impl AppState {
    /// Start the game table and build the state around it.
    /// Must be called from inside a running actix system.
    pub fn start(config: ServerConfig) -> Self {
        let registry = Arc::new(SessionRegistry::new());
        let table = GameTable::new(&config, registry.clone()).start();
        Self { table, registry }
    }

    pub fn active_connections(&self) -> usize {
        self.registry.active_connections_count()
    }
}
