use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";
/// Open HTTP sessions allowed at once unless `MARKET_MAX_SESSIONS` says otherwise.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// Settings for the HTTP shell, read from `MARKET_*` variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub sessions: SessionConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load from the process environment after applying a `.env` file, if any.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: var_or("MARKET_HOST", DEFAULT_HOST),
            port: parse_var("MARKET_PORT", DEFAULT_PORT)?,
        };
        let sessions = SessionConfig::new(parse_var("MARKET_MAX_SESSIONS", DEFAULT_MAX_SESSIONS)?)?;
        let telemetry = TelemetryConfig {
            log_level: var_or("MARKET_LOG_LEVEL", DEFAULT_LOG_LEVEL),
        };

        Ok(Self {
            server,
            sessions,
            telemetry,
        })
    }
}

fn var_or(name: &'static str, default: &str) -> String {
    env::var(name)
        .map(|value| value.trim().to_string())
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: name,
                    value: raw,
                })
        }
        _ => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self.host.parse().map_err(|source| ConfigError::InvalidHost {
            host: self.host.clone(),
            source,
        })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Bounds on the in-memory session store of the HTTP shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    max_sessions: usize,
}

impl SessionConfig {
    pub fn new(max_sessions: usize) -> Result<Self, ConfigError> {
        if max_sessions == 0 {
            return Err(ConfigError::ZeroSessionLimit);
        }
        Ok(Self { max_sessions })
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber {
        var: &'static str,
        value: String,
    },
    ZeroSessionLimit,
    InvalidHost {
        host: String,
        source: std::net::AddrParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { var, value } => {
                write!(f, "{var} must be a non-negative integer in range, got '{value}'")
            }
            ConfigError::ZeroSessionLimit => {
                write!(f, "MARKET_MAX_SESSIONS must allow at least one session")
            }
            ConfigError::InvalidHost { host, .. } => {
                write!(f, "MARKET_HOST '{host}' is not an IPv4 or IPv6 address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source, .. } => Some(source),
            ConfigError::InvalidNumber { .. } | ConfigError::ZeroSessionLimit => None,
        }
    }
}
