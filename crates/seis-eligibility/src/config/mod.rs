use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use chrono::NaiveDate;

/// Deployment stage the service runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Colored log output is only useful on a developer terminal.
    pub fn ansi_logs(self) -> bool {
        self == Self::Development
    }
}

/// Top-level configuration for the eligibility service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub evaluation: EvaluationConfig,
}

impl AppConfig {
    /// Read `.env` (when present) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&var_or("APP_ENV", "development"));

        let port_raw = var_or("APP_PORT", "3000");
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: port_raw })?;

        Ok(Self {
            environment,
            server: ServerConfig {
                host: var_or("APP_HOST", "127.0.0.1"),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: var_or("APP_LOG_LEVEL", "info"),
                ansi: environment.ansi_logs(),
            },
            evaluation: EvaluationConfig::read()?,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_evaluation_date(raw: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|source| {
        ConfigError::InvalidEvaluationDate {
            value: raw.to_string(),
            source,
        }
    })
}

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost {
                    host: self.host.clone(),
                    source,
                })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filter and formatting.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// `today` pins the date used for company-age checks; `None` follows the
/// system clock.
#[derive(Debug, Clone, Default)]
pub struct EvaluationConfig {
    pub today: Option<NaiveDate>,
}

impl EvaluationConfig {
    /// Load only `ELIGIBILITY_TODAY`, for one-shot reports that never bind a
    /// listener.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::read()
    }

    fn read() -> Result<Self, ConfigError> {
        let today = env::var("ELIGIBILITY_TODAY")
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| parse_evaluation_date(&raw))
            .transpose()?;
        Ok(Self { today })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT '{value}' must be a valid u16")]
    InvalidPort { value: String },
    #[error("APP_HOST '{host}' must parse to an IPv4 or IPv6 address")]
    InvalidHost {
        host: String,
        source: std::net::AddrParseError,
    },
    #[error("ELIGIBILITY_TODAY '{value}' must be a YYYY-MM-DD date")]
    InvalidEvaluationDate {
        value: String,
        source: chrono::ParseError,
    },
}
