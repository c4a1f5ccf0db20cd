use serde::Deserialize;

/// Top-level server configuration, loaded from `neonwatch.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub store: StoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            store: StoreConfig::default(),
        }
    }
}

/// Key-value store section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Prefix for every key, e.g. `neon-watch:stats:42`.
    pub namespace: String,
    /// REST endpoint of the key-value service. Without it (or without a
    /// token) records are kept in process memory.
    pub rest_url: Option<String>,
    pub rest_token: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            namespace: "neon-watch".to_string(),
            rest_url: None,
            rest_token: None,
        }
    }
}

impl ServerConfig {
    /// Validate configuration, logging warnings for issues.
    pub fn validate(&self) {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            tracing::error!(
                addr = %self.listen_addr,
                "listen_addr is not a valid socket address"
            );
            std::process::exit(1);
        }

        if self.store.namespace.trim().is_empty() {
            tracing::error!("store.namespace must not be empty");
            std::process::exit(1);
        }

        match (&self.store.rest_url, &self.store.rest_token) {
            (Some(_), None) => {
                tracing::warn!("store.rest_url is set without a token, falling back to memory store");
            },
            (None, Some(_)) => {
                tracing::warn!("store.rest_token is set without a URL, falling back to memory store");
            },
            _ => {},
        }
    }

    /// Load config from `neonwatch.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("neonwatch.toml") {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from neonwatch.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse neonwatch.toml: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No neonwatch.toml found, using defaults");
                ServerConfig::default()
            },
        };

        if config.store.rest_token.is_some() {
            tracing::warn!(
                "store.rest_token is set in config file, use KV_REST_API_TOKEN env var in production"
            );
        }

        config.apply_env(|name| std::env::var(name).ok());
        config
    }

    /// Apply environment overrides through `lookup`. Empty values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        if let Some(addr) = var("NEONWATCH_LISTEN_ADDR") {
            self.listen_addr = addr;
        }
        if let Some(ns) = var("NEONWATCH_NAMESPACE") {
            self.store.namespace = ns;
        }
        if let Some(url) = var("KV_REST_API_URL") {
            self.store.rest_url = Some(url);
        }
        if let Some(token) = var("KV_REST_API_TOKEN") {
            self.store.rest_token = Some(token);
        }
    }
}
