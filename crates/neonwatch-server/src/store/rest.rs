use async_trait::async_trait;
use serde::Deserialize;

use super::{KvStore, StoreError};

/// Client for a Redis-compatible key-value service spoken over HTTPS
/// (Upstash REST command protocol).
///
/// Every command is a `POST` of a JSON array such as `["GET", "key"]` to the
/// service URL, authorized with a bearer token. Replies look like
/// `{"result": ...}` or `{"error": "..."}`.
pub struct RestKvStore {
    url: String,
    token: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct CommandReply {
    #[serde(default)]
    result: serde_json::Value,
    #[serde(default)]
    error: Option<String>,
}

impl RestKvStore {
    pub fn new(url: String, token: String) -> Self {
        Self {
            url,
            token,
            client: reqwest::Client::new(),
        }
    }

    async fn command(&self, args: &[&str]) -> Result<serde_json::Value, StoreError> {
        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(args)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = resp.status();
        let reply: CommandReply = resp
            .json()
            .await
            .map_err(|e| StoreError::Transport(format!("{status}: {e}")))?;

        if let Some(err) = reply.error {
            return Err(StoreError::Backend(err));
        }
        if !status.is_success() {
            return Err(StoreError::Backend(format!("service returned {status}")));
        }
        Ok(reply.result)
    }
}

/// Escape Redis glob metacharacters so a prefix matches literally.
fn escape_glob(prefix: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[async_trait]
impl KvStore for RestKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.command(&["GET", key]).await? {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::String(s) => Ok(Some(s)),
            other => Ok(Some(other.to_string())),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.command(&["SET", key, &value]).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.command(&["DEL", key]).await?;
        Ok(())
    }

    async fn list_keys_by_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let pattern = format!("{}*", escape_glob(prefix));
        let result = self.command(&["KEYS", &pattern]).await?;
        match result {
            serde_json::Value::Null => Ok(Vec::new()),
            value => serde_json::from_value(value)
                .map_err(|e| StoreError::Backend(format!("unexpected KEYS reply: {e}"))),
        }
    }

    fn backend_name(&self) -> &'static str {
        "rest"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use axum::Json;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use tokio::sync::Mutex;

    use super::*;

    type FakeData = Arc<Mutex<BTreeMap<String, String>>>;

    const TOKEN: &str = "test-token";

    /// Minimal stand-in for the REST service: GET, SET, DEL and prefix KEYS.
    async fn fake_service(
        State(data): State<FakeData>,
        headers: HeaderMap,
        Json(args): Json<Vec<String>>,
    ) -> (StatusCode, Json<serde_json::Value>) {
        let authorized = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == format!("Bearer {TOKEN}"));
        if !authorized {
            return (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "error": "Unauthorized" })),
            );
        }

        let mut data = data.lock().await;
        let reply = match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
            ["GET", key] => serde_json::json!({ "result": data.get(*key) }),
            ["SET", key, value] => {
                data.insert(key.to_string(), value.to_string());
                serde_json::json!({ "result": "OK" })
            },
            ["DEL", key] => {
                let removed = u8::from(data.remove(*key).is_some());
                serde_json::json!({ "result": removed })
            },
            ["KEYS", pattern] => {
                let prefix = pattern.trim_end_matches('*').replace('\\', "");
                let keys: Vec<&String> = data.keys().filter(|k| k.starts_with(&prefix)).collect();
                serde_json::json!({ "result": keys })
            },
            _ => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "error": "ERR unknown command" })),
                );
            },
        };
        (StatusCode::OK, Json(reply))
    }

    async fn spawn_fake() -> String {
        let data: FakeData = Arc::new(Mutex::new(BTreeMap::new()));
        let app = axum::Router::new()
            .route("/", axum::routing::post(fake_service))
            .with_state(data);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn roundtrip_against_fake_service() {
        let url = spawn_fake().await;
        let store = RestKvStore::new(url, TOKEN.to_string());

        assert!(store.get("app:stats:1").await.unwrap().is_none());
        store
            .set("app:stats:1", r#"{"fid":1}"#.to_string())
            .await
            .unwrap();
        store.set("app:user:1", "{}".to_string()).await.unwrap();
        assert_eq!(
            store.get("app:stats:1").await.unwrap().as_deref(),
            Some(r#"{"fid":1}"#)
        );

        let keys = store.list_keys_by_prefix("app:stats:").await.unwrap();
        assert_eq!(keys, vec!["app:stats:1"]);

        store.delete("app:stats:1").await.unwrap();
        assert!(store.get("app:stats:1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn bad_token_is_backend_error() {
        let url = spawn_fake().await;
        let store = RestKvStore::new(url, "wrong".to_string());
        let err = store.get("k").await.unwrap_err();
        assert!(matches!(err, StoreError::Backend(ref m) if m == "Unauthorized"));
    }

    #[tokio::test]
    async fn unreachable_service_is_transport_error() {
        // Bind and drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = RestKvStore::new(format!("http://{addr}/"), TOKEN.to_string());
        let err = store.get("k").await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
    }

    #[test]
    fn glob_metacharacters_are_escaped() {
        assert_eq!(escape_glob("app:stats:"), "app:stats:");
        assert_eq!(escape_glob("a*b?[c]"), "a\\*b\\?\\[c\\]");
    }
}
