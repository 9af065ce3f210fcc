use serde::Serialize;
use tracing::debug;

use crate::domain::{GameState, Intent};
use crate::errors::ErrorCode;

/// Frames the server sends. A snapshot goes out bare so clients can render
/// the object they receive directly.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ServerMsg<'a> {
    Snapshot(&'a GameState),
    Rejected { error: &'static str, detail: String },
}

impl ServerMsg<'_> {
    pub fn rejected(code: ErrorCode, detail: impl Into<String>) -> Self {
        ServerMsg::Rejected {
            error: code.as_str(),
            detail: detail.into(),
        }
    }
}

/// Parse an inbound text frame. Anything that is not a recognized intent
/// yields `None` and is dropped by the caller.
pub fn parse_client_frame(text: &str) -> Option<Intent> {
    match serde_json::from_str::<Intent>(text) {
        Ok(intent) => Some(intent),
        Err(err) => {
            debug!(error = %err, "[WS PROTOCOL] ignoring unparsable frame");
            None
        }
    }
}
