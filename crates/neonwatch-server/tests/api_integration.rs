#[allow(dead_code)]
mod common;

use common::{TestServer, game_result_body, post_game_result};

#[tokio::test]
async fn health_reports_memory_store() {
    let server = TestServer::new().await;
    let resp = reqwest::get(format!("{}/health", server.base_url()))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"], "memory");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn game_result_updates_both_players() {
    let server = TestServer::new().await;

    let resp = post_game_result(&server, &game_result_body(1, 2, 5, 2)).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Game result saved successfully");

    let resp = reqwest::get(format!("{}/api/leaderboard", server.base_url()))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["period"], "30d");

    let board = body["leaderboard"].as_array().unwrap();
    assert_eq!(board.len(), 2);

    let winner = &board[0];
    assert_eq!(winner["fid"], 1);
    assert_eq!(winner["username"], "player1");
    assert_eq!(winner["gamesPlayed"], 1);
    assert_eq!(winner["wins"], 1);
    assert_eq!(winner["losses"], 0);
    assert_eq!(winner["goalsScored"], 5);
    assert_eq!(winner["goalsConceded"], 2);
    assert_eq!(winner["points"], 3);

    let loser = &board[1];
    assert_eq!(loser["fid"], 2);
    assert_eq!(loser["wins"], 0);
    assert_eq!(loser["losses"], 1);
    assert_eq!(loser["goalsScored"], 2);
    assert_eq!(loser["goalsConceded"], 5);
    assert_eq!(loser["points"], 0);
}

#[tokio::test]
async fn game_result_accepted_without_content_type() {
    let server = TestServer::new().await;
    let resp = reqwest::Client::new()
        .post(format!("{}/api/game-result", server.base_url()))
        .body(game_result_body(1, 2, 5, 2).to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(server.store.len().await, 2);
}

#[tokio::test]
async fn missing_field_is_rejected_without_writes() {
    let server = TestServer::new().await;
    let mut body = game_result_body(1, 2, 5, 2);
    body.as_object_mut().unwrap().remove("loserScore");

    let resp = post_game_result(&server, &body).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Missing required field: loserScore");
    assert!(server.store.is_empty().await);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let server = TestServer::new().await;
    let resp = reqwest::Client::new()
        .post(format!("{}/api/game-result", server.base_url()))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
    assert!(server.store.is_empty().await);
}

#[tokio::test]
async fn invalid_period_is_rejected() {
    let server = TestServer::new().await;
    let resp = reqwest::get(format!("{}/api/leaderboard?period=90d", server.base_url()))
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid period. Must be 1d, 7d, or 30d");
}

#[tokio::test]
async fn explicit_period_is_echoed() {
    let server = TestServer::new().await;
    post_game_result(&server, &game_result_body(3, 4, 2, 1)).await;

    for period in ["1d", "7d", "30d"] {
        let resp = reqwest::get(format!(
            "{}/api/leaderboard?period={period}",
            server.base_url()
        ))
        .await
        .unwrap();
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["period"], period);
        // Just played, so both players are inside every window
        assert_eq!(body["leaderboard"].as_array().unwrap().len(), 2);
    }
}

#[tokio::test]
async fn empty_leaderboard() {
    let server = TestServer::new().await;
    let resp = reqwest::get(format!("{}/api/leaderboard?period=", server.base_url()))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["period"], "30d");
    assert!(body["leaderboard"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn repeated_results_accumulate() {
    let server = TestServer::new().await;
    post_game_result(&server, &game_result_body(1, 2, 5, 2)).await;
    post_game_result(&server, &game_result_body(2, 1, 4, 3)).await;
    post_game_result(&server, &game_result_body(2, 1, 1, 0)).await;

    let body: serde_json::Value = reqwest::get(format!("{}/api/leaderboard", server.base_url()))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let board = body["leaderboard"].as_array().unwrap();
    assert_eq!(board[0]["fid"], 2);
    assert_eq!(board[0]["points"], 6);
    assert_eq!(board[0]["gamesPlayed"], 3);
    assert_eq!(board[1]["fid"], 1);
    assert_eq!(board[1]["points"], 0);
    assert_eq!(board[1]["wins"], 1);
}

#[tokio::test]
async fn notification_details_lifecycle() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/notifications/77", server.base_url());

    let resp = client.get(&url).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    let details = serde_json::json!({ "url": "https://example.com/notify", "token": "abc" });
    let resp = client.put(&url).json(&details).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(body, details);

    let resp = client.delete(&url).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let resp = client.get(&url).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn cors_headers_present() {
    let server = TestServer::new().await;
    let resp = reqwest::Client::new()
        .get(format!("{}/health", server.base_url()))
        .header("origin", "https://client.example.com")
        .send()
        .await
        .unwrap();
    assert!(resp.headers().contains_key("access-control-allow-origin"));
}
