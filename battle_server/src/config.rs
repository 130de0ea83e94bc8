use std::net::SocketAddr;

use crate::strategy::SelectionStrategy;

/// Server settings, read from the environment (and `.env` via dotenvy in `main`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub strategy: SelectionStrategy,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
    pub shout: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            strategy: SelectionStrategy::Heuristic,
            author: String::new(),
            color: "#888888".to_string(),
            head: "default".to_string(),
            tail: "default".to_string(),
            shout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Bad values are logged and replaced by defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
                tracing::warn!("Invalid PORT '{}', falling back to {} | {}", raw, defaults.port, e);
                defaults.port
            }),
            None => defaults.port,
        };

        let strategy = match lookup("SELECTION_STRATEGY") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}; falling back to {}", e, defaults.strategy);
                defaults.strategy
            }),
            None => defaults.strategy,
        };

        Self {
            host: lookup("BIND_HOST").unwrap_or(defaults.host),
            port,
            strategy,
            author: lookup("SNAKE_AUTHOR").unwrap_or(defaults.author),
            color: lookup("SNAKE_COLOR").unwrap_or(defaults.color),
            head: lookup("SNAKE_HEAD").unwrap_or(defaults.head),
            tail: lookup("SNAKE_TAIL").unwrap_or(defaults.tail),
            shout: lookup("SNAKE_SHOUT").filter(|s| !s.is_empty()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.bind_addr().parse()?)
    }
}
