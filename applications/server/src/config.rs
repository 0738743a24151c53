/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_jwt_expiration_hours")]
    pub jwt_expiration_hours: u64,

    #[serde(default = "default_jwt_refresh_expiration_days")]
    pub jwt_refresh_expiration_days: u64,
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.toml"))
    }

    /// Load configuration from the given file (if present) and environment.
    ///
    /// Environment variables take precedence, e.g.
    /// `CONNECTLY_AUTH_JWT_SECRET` sets `auth.jwt_secret`.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut settings = config::Config::builder();

        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path.to_path_buf()));
        }

        // Override with environment variables (prefixed with CONNECTLY_)
        settings = settings.add_source(env_overrides());

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ServerError::Config(
                "JWT secret is required (set CONNECTLY_AUTH_JWT_SECRET)".to_string(),
            ));
        }

        if self.auth.jwt_expiration_hours == 0 {
            return Err(ServerError::Config(
                "auth.jwt_expiration_hours must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Directory that must exist before the `SQLite` file can be created
    pub fn database_dir(&self) -> Option<PathBuf> {
        let path = self
            .storage
            .database_url
            .strip_prefix("sqlite://")
            .filter(|p| !p.starts_with(':'))?;
        Path::new(path).parent().map(Path::to_path_buf)
    }
}

/// Maps `CONNECTLY_<SECTION>_<KEY>` variables onto `section.key`.
///
/// The section is the first word after the prefix and the rest is the key,
/// so multi-word keys like `jwt_secret` survive.
fn env_overrides() -> config::Environment {
    const SECTIONS: [&str; 3] = ["server", "storage", "auth"];

    let source: config::Map<String, String> = std::env::vars()
        .filter_map(|(name, value)| {
            let rest = name.strip_prefix("CONNECTLY_")?.to_lowercase();
            let (section, key) = rest.split_once('_')?;
            SECTIONS
                .contains(&section)
                .then(|| (format!("CONNECTLY_{section}__{key}").to_uppercase(), value))
        })
        .collect();

    config::Environment::with_prefix("CONNECTLY")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(Some(source))
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/connectly.db".to_string()
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: String::new(),
        jwt_expiration_hours: default_jwt_expiration_hours(),
        jwt_refresh_expiration_days: default_jwt_refresh_expiration_days(),
    }
}

fn default_jwt_expiration_hours() -> u64 {
    24
}

fn default_jwt_refresh_expiration_days() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.database_url, "sqlite://./data/connectly.db");
        assert_eq!(config.auth.jwt_expiration_hours, 24);
        assert_eq!(config.auth.jwt_refresh_expiration_days, 30);
    }

    #[test]
    fn test_validate_requires_secret() {
        let mut config = ServerConfig::default();
        assert!(config.validate().is_err());

        config.auth.jwt_secret = "s3cret".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 9999\n\n[auth]\njwt_secret = \"from-file\"\n"
        )
        .unwrap();

        let config = ServerConfig::load_from(&path).unwrap();
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.auth.jwt_secret, "from-file");
    }

    #[test]
    fn test_database_dir() {
        let config = ServerConfig::default();
        assert_eq!(config.database_dir(), Some(PathBuf::from("./data")));

        let mut memory = ServerConfig::default();
        memory.storage.database_url = "sqlite::memory:".to_string();
        assert_eq!(memory.database_dir(), None);
    }
}
