use std::env;
use std::time::Duration;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub env: String,
    pub storage: StorageConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub path: String,
    pub migrations_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub grpc_port: u16,
    pub grpc_timeout_ms: u64,
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub token_ttl_secs: u64,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SSO_STORAGE__PATH, SSO_AUTH__TOKEN_TTL_SECS, etc.)
    /// 2. File named by CONFIG_PATH, if set
    /// 3. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 4. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = ConfigBuilder::builder()
            .set_default("env", "local")?
            .set_default("storage.migrations_path", "./migrations")?
            .set_default("server.grpc_port", 44044)?
            .set_default("server.grpc_timeout_ms", 10_000)?
            .set_default("server.http_port", 8080)?
            .set_default("auth.token_ttl_secs", 3600)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        if let Ok(path) = env::var("CONFIG_PATH") {
            builder = builder.add_source(File::with_name(&path).required(true));
        }

        builder
            // Example: SSO_STORAGE__PATH=/var/lib/sso.db overrides storage.path
            .add_source(
                Environment::with_prefix("SSO")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Lifetime of issued session tokens.
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.auth.token_ttl_secs)
    }

    pub fn grpc_timeout(&self) -> Duration {
        Duration::from_millis(self.server.grpc_timeout_ms)
    }

    /// Structured JSON logs everywhere except on a developer machine.
    pub fn json_logs(&self) -> bool {
        self.env != "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_ttl(token_ttl_secs: u64) -> Config {
        Config {
            env: "local".to_string(),
            storage: StorageConfig {
                path: "./storage/sso.db".to_string(),
                migrations_path: "./migrations".to_string(),
            },
            server: ServerConfig {
                grpc_port: 44044,
                grpc_timeout_ms: 2500,
                http_port: 8080,
            },
            auth: AuthConfig { token_ttl_secs },
        }
    }

    #[test]
    fn test_durations() {
        let config = config_with_ttl(900);

        assert_eq!(config.token_ttl(), Duration::from_secs(900));
        assert_eq!(config.grpc_timeout(), Duration::from_millis(2500));
        assert!(!config.json_logs());
    }
}
