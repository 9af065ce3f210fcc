use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::GameState;
use crate::state::app_state::AppState;
use crate::ws::hub::TableEvent;
use crate::ws::protocol::{parse_client_frame, ServerMsg};
use crate::ws::table::{Connect, Disconnect, GameTable, Submit};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

/// Lifecycle of one client connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Open,
    Closing,
}

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let conn_id = Uuid::new_v4();
    let session = WsSession::new(conn_id, app_state.table.clone());
    ws::start(session, &req, stream)
}

/// Connection lifecycle and the last snapshot seen. Nothing is sent or held
/// unless the channel is open.
#[derive(Debug)]
pub(crate) struct SessionLink {
    state: ConnectionState,
    /// Last snapshot received from the table; read-only.
    snapshot: Option<Arc<GameState>>,
}

impl SessionLink {
    pub(crate) fn new() -> Self {
        Self {
            state: ConnectionState::Connecting,
            snapshot: None,
        }
    }

    pub(crate) fn state(&self) -> ConnectionState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> Option<&GameState> {
        self.snapshot.as_deref()
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state == ConnectionState::Open
    }

    /// Handshake done. A fresh channel holds no game state.
    pub(crate) fn open(&mut self) {
        self.state = ConnectionState::Open;
        self.snapshot = None;
    }

    /// Returns true when a close frame should still go out.
    pub(crate) fn begin_close(&mut self) -> bool {
        if self.is_open() {
            self.state = ConnectionState::Closing;
            true
        } else {
            false
        }
    }

    pub(crate) fn closed(&mut self) {
        self.state = ConnectionState::Disconnected;
        self.snapshot = None;
    }

    /// Serialized frame for `msg`, or `None` when the channel is not open.
    pub(crate) fn outbound(&self, msg: &ServerMsg) -> Option<String> {
        if !self.is_open() {
            return None;
        }
        match serde_json::to_string(msg) {
            Ok(payload) => Some(payload),
            Err(err) => {
                warn!(error = %err, "[WS SESSION] failed to serialize outbound message");
                None
            }
        }
    }

    /// Frame for a new snapshot, which is then held. Skipped when not open.
    pub(crate) fn receive(&mut self, snapshot: Arc<GameState>) -> Option<String> {
        let payload = self.outbound(&ServerMsg::Snapshot(&snapshot))?;
        self.snapshot = Some(snapshot);
        Some(payload)
    }
}

pub struct WsSession {
    conn_id: Uuid,
    table: Addr<GameTable>,
    link: SessionLink,
    last_heartbeat: Instant,
}

impl WsSession {
    pub fn new(conn_id: Uuid, table: Addr<GameTable>) -> Self {
        Self {
            conn_id,
            table,
            link: SessionLink::new(),
            last_heartbeat: Instant::now(),
        }
    }

    /// Sending on a channel that is not open does nothing.
    fn send(&self, ctx: &mut ws::WebsocketContext<Self>, payload: Option<String>) {
        match payload {
            Some(payload) => ctx.text(payload),
            None => debug!(
                conn_id = %self.conn_id,
                state = ?self.link.state(),
                "[WS SESSION] send skipped"
            ),
        }
    }

    fn close(&mut self, ctx: &mut ws::WebsocketContext<Self>, reason: Option<ws::CloseReason>) {
        if self.link.begin_close() {
            ctx.close(reason);
        }
        ctx.stop();
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(conn_id = %actor.conn_id, "[WS SESSION] heartbeat timed out");
                actor.close(ctx, Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                return;
            }
            ctx.ping(b"keepalive");
        });
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.link.open();
        info!(conn_id = %self.conn_id, "[WS SESSION] started");

        self.table.do_send(Connect {
            conn_id: self.conn_id,
            recipient: ctx.address().recipient::<TableEvent>(),
        });
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.link.closed();
        self.table.do_send(Disconnect {
            conn_id: self.conn_id,
        });
        info!(conn_id = %self.conn_id, "[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();
                if !self.link.is_open() {
                    return;
                }
                // Unrecognized frames are dropped; the channel stays open.
                let Some(intent) = parse_client_frame(&text) else {
                    return;
                };
                self.table.do_send(Submit {
                    conn_id: self.conn_id,
                    intent,
                });
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                debug!(conn_id = %self.conn_id, "[WS SESSION] ignoring binary frame");
            }
            Ok(ws::Message::Close(reason)) => {
                self.close(ctx, reason);
            }
            Ok(ws::Message::Continuation(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(
                    conn_id = %self.conn_id,
                    error = %err,
                    "[WS SESSION] protocol error"
                );
                self.close(ctx, Some(ws::CloseReason::from(ws::CloseCode::Error)));
            }
        }
    }
}

impl Handler<TableEvent> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: TableEvent, ctx: &mut Self::Context) -> Self::Result {
        match msg {
            TableEvent::Snapshot(state) => {
                let payload = self.link.receive(state);
                self.send(ctx, payload);
            }
            TableEvent::Rejected { code, detail } => {
                let payload = self.link.outbound(&ServerMsg::rejected(code, detail));
                self.send(ctx, payload);
            }
        }
    }
}
