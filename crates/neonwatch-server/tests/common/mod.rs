use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use neonwatch_server::build_app_with_store;
use neonwatch_server::config::ServerConfig;
use neonwatch_server::store::{MemoryStore, SharedStore};

pub struct TestServer {
    pub addr: SocketAddr,
    pub store: Arc<MemoryStore>,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a test server backed by a fresh in-memory store.
    pub async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let shared: SharedStore = Arc::clone(&store) as SharedStore;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, _state) = build_app_with_store(ServerConfig::default(), shared);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            store,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// A complete game-result body.
pub fn game_result_body(
    winner: u64,
    loser: u64,
    winner_score: u32,
    loser_score: u32,
) -> serde_json::Value {
    serde_json::json!({
        "winnerFid": winner,
        "loserFid": loser,
        "winnerUsername": format!("player{winner}"),
        "loserUsername": format!("player{loser}"),
        "winnerScore": winner_score,
        "loserScore": loser_score,
        "winnerDisplayName": format!("Player {winner}"),
        "loserDisplayName": format!("Player {loser}"),
        "winnerPfpUrl": format!("https://example.com/pfp/{winner}.png"),
        "loserPfpUrl": format!("https://example.com/pfp/{loser}.png"),
    })
}

pub async fn post_game_result(server: &TestServer, body: &serde_json::Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/api/game-result", server.base_url()))
        .json(body)
        .send()
        .await
        .unwrap()
}
