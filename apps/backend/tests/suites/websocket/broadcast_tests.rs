// Multi-client broadcast tests

use std::time::Duration;

use serde_json::json;

use crate::support::websocket::{start_test_server, test_config, wait_for_connections};
use crate::support::websocket_client::WebSocketClient;

const RECV: Duration = Duration::from_secs(5);

#[actix_web::test]
async fn every_applied_intent_reaches_all_clients() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server(test_config()).await?;

    let mut alice = WebSocketClient::connect_retry(&server.ws_url(), Duration::from_secs(1)).await?;
    let mut bob = WebSocketClient::connect_retry(&server.ws_url(), Duration::from_secs(1)).await?;
    wait_for_connections(&server.state, 2, Duration::from_secs(2)).await?;

    alice
        .send_json(&json!({
            "action": "start_game",
            "player_names": ["Alice", "Bob"],
            "ai_agent": "DQN"
        }))
        .await?;

    let seen_by_alice = alice.recv_json_timeout(RECV).await?.expect("snapshot for alice");
    let seen_by_bob = bob.recv_json_timeout(RECV).await?.expect("snapshot for bob");
    assert_eq!(seen_by_alice, seen_by_bob);
    assert_eq!(seen_by_alice["current_player_index"], 0);

    // Bob's connection plays Alice's seat; any session may submit.
    bob.send_json(&json!({
        "action": "make_move",
        "player_index": 0,
        "card_index": 0,
        "street": "FRONT"
    }))
    .await?;

    let a2 = alice.recv_json_timeout(RECV).await?.expect("move snapshot for alice");
    let b2 = bob.recv_json_timeout(RECV).await?.expect("move snapshot for bob");
    assert_eq!(a2, b2);
    assert_eq!(a2["current_player_index"], 1);
    assert_eq!(a2["players"][0]["board"]["front"].as_array().map(Vec::len), Some(1));

    // Exactly one snapshot per applied intent.
    alice.expect_silence(Duration::from_millis(150)).await?;
    bob.expect_silence(Duration::from_millis(150)).await?;

    alice.close().await?;
    bob.close().await?;
    wait_for_connections(&server.state, 0, Duration::from_secs(2)).await?;
    server.stop().await;
    Ok(())
}
