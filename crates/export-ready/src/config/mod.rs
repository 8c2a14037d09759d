use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::identity::UserIdentity;

const DEFAULT_LIST_LIMIT: usize = 50;
const MAX_LIST_LIMIT: usize = 500;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub reports: ReportsConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let list_limit = match env::var("REPORTS_LIST_LIMIT") {
            Ok(raw) => parse_list_limit(&raw)?,
            Err(_) => DEFAULT_LIST_LIMIT,
        };

        let tokens = match env::var("APP_AUTH_TOKENS") {
            Ok(raw) => parse_auth_tokens(&raw)?,
            Err(_) => Vec::new(),
        };

        let allowed_origins = env::var("APP_ALLOWED_ORIGINS")
            .map(|raw| split_list(&raw).map(str::to_string).collect())
            .unwrap_or_default();

        Ok(Self {
            environment,
            server: ServerConfig {
                host,
                port,
                allowed_origins,
            },
            telemetry: TelemetryConfig { log_level },
            reports: ReportsConfig { list_limit },
            auth: AuthConfig { tokens },
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|entry| !entry.is_empty())
}

fn parse_list_limit(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(limit) if (1..=MAX_LIST_LIMIT).contains(&limit) => Ok(limit),
        _ => Err(ConfigError::InvalidListLimit {
            value: raw.to_string(),
        }),
    }
}

/// Parses `token=user_id:email` entries.
fn parse_auth_tokens(raw: &str) -> Result<Vec<(String, UserIdentity)>, ConfigError> {
    split_list(raw)
        .map(|entry| {
            let invalid = || ConfigError::InvalidAuthToken {
                entry: entry.to_string(),
            };
            let (token, identity) = entry.split_once('=').ok_or_else(invalid)?;
            let (user_id, email) = identity.split_once(':').ok_or_else(invalid)?;
            if token.trim().is_empty() || user_id.trim().is_empty() {
                return Err(invalid());
            }
            Ok((
                token.trim().to_string(),
                UserIdentity {
                    user_id: user_id.trim().to_string(),
                    email: email.trim().to_string(),
                },
            ))
        })
        .collect()
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Extra CORS origins on top of the built-in allow list.
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct ReportsConfig {
    pub list_limit: usize,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// Bearer tokens accepted by the static identity verifier.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub tokens: Vec<(String, UserIdentity)>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidListLimit { value: String },
    InvalidAuthToken { entry: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidListLimit { value } => write!(
                f,
                "REPORTS_LIST_LIMIT must be between 1 and {MAX_LIST_LIMIT} (found '{value}')"
            ),
            ConfigError::InvalidAuthToken { entry } => write!(
                f,
                "APP_AUTH_TOKENS entries must look like token=user_id:email (found '{entry}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidListLimit { .. }
            | ConfigError::InvalidAuthToken { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("REPORTS_LIST_LIMIT");
        env::remove_var("APP_AUTH_TOKENS");
        env::remove_var("APP_ALLOWED_ORIGINS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.allowed_origins.is_empty());
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.reports.list_limit, 50);
        assert!(config.auth.tokens.is_empty());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_out_of_range_list_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("REPORTS_LIST_LIMIT", "0");
        let err = AppConfig::load().expect_err("zero limit rejected");
        assert!(matches!(err, ConfigError::InvalidListLimit { .. }));
        reset_env();
    }

    #[test]
    fn parses_auth_tokens_and_origins() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var(
            "APP_AUTH_TOKENS",
            "dev-token=user-1:ops@example.com, second=user-2:trade@example.com",
        );
        env::set_var("APP_ALLOWED_ORIGINS", "https://exports.example.com,");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.auth.tokens.len(), 2);
        assert_eq!(config.auth.tokens[0].0, "dev-token");
        assert_eq!(config.auth.tokens[1].1.email, "trade@example.com");
        assert_eq!(
            config.server.allowed_origins,
            ["https://exports.example.com"]
        );
        reset_env();
    }

    #[test]
    fn rejects_malformed_auth_tokens() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_AUTH_TOKENS", "just-a-token");
        let err = AppConfig::load().expect_err("malformed entry rejected");
        assert!(err.to_string().contains("just-a-token"));
        reset_env();
    }
}
