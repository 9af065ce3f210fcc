// WebSocket client utilities for testing

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

/// WebSocket test client
pub struct WebSocketClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WebSocketClient {
    /// Connect to a WebSocket endpoint, retrying until success or timeout.
    pub async fn connect_retry(
        url: &str,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let start = tokio::time::Instant::now();
        loop {
            match connect_async(url).await {
                Ok((stream, _)) => return Ok(Self { stream }),
                Err(err) => {
                    if start.elapsed() >= timeout {
                        return Err(Box::new(err));
                    }
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
            }
        }
    }

    /// Receive the next message with a timeout
    pub async fn recv_timeout(
        &mut self,
        timeout: Duration,
    ) -> Result<Option<Message>, Box<dyn std::error::Error>> {
        tokio::time::timeout(timeout, self.stream.next())
            .await
            .map_err(|_| "Timeout waiting for message")?
            .transpose()
            .map_err(|e| e.into())
    }

    /// Send a text message
    pub async fn send(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.stream.send(Message::Text(text.into())).await?;
        Ok(())
    }

    /// Send a JSON value as a text frame
    pub async fn send_json(&mut self, value: &Value) -> Result<(), Box<dyn std::error::Error>> {
        self.send(&value.to_string()).await
    }

    /// Send a binary frame
    pub async fn send_binary(&mut self, bytes: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
        self.stream.send(Message::Binary(bytes.to_vec().into())).await?;
        Ok(())
    }

    /// Close the connection
    pub async fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.stream.close(None).await?;
        Ok(())
    }

    /// Next text frame parsed as JSON, skipping control frames.
    /// `Ok(None)` means the channel closed.
    pub async fn recv_json_timeout(
        &mut self,
        timeout: Duration,
    ) -> Result<Option<Value>, Box<dyn std::error::Error>> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let left = deadline.saturating_duration_since(tokio::time::Instant::now());
            match self.recv_timeout(left).await? {
                Some(Message::Text(text)) => {
                    let json: Value = serde_json::from_str(text.as_str())?;
                    return Ok(Some(json));
                }
                Some(Message::Ping(_)) | Some(Message::Pong(_)) => continue,
                Some(_) | None => return Ok(None),
            }
        }
    }

    /// Assert nothing arrives within `window`.
    pub async fn expect_silence(&mut self, window: Duration) -> Result<(), Box<dyn std::error::Error>> {
        match tokio::time::timeout(window, self.stream.next()).await {
            Err(_) => Ok(()),
            Ok(Some(Ok(Message::Ping(_)))) | Ok(Some(Ok(Message::Pong(_)))) => Ok(()),
            Ok(other) => Err(format!("expected silence, got {other:?}").into()),
        }
    }
}
