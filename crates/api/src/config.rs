//! Application configuration loaded from environment variables.

use chaos::FaultProfile;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `INVENTORY_URL` / `PAYMENT_URL` — saga step targets (default: this
///   process, so the bundled playground endpoints serve them)
/// - `LEGACY_URL` — base URL of the header-stripping legacy warehouse
/// - `REMOTE_TIMEOUT_MS` — per-call bound for remote calls (default: 3000)
/// - `CHAOS_FAIL_PERCENT` / `CHAOS_MIN_DELAY_MS` / `CHAOS_MAX_DELAY_MS` —
///   payment fault injection (defaults: 20 / 100 / 2000)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub inventory_url: String,
    pub payment_url: String,
    pub legacy_url: String,
    pub remote_timeout_ms: u64,
    pub chaos: FaultProfile,
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let port = env_or("PORT", defaults.port);
        let self_url = format!("http://127.0.0.1:{port}");
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port,
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            inventory_url: std::env::var("INVENTORY_URL").unwrap_or_else(|_| self_url.clone()),
            payment_url: std::env::var("PAYMENT_URL").unwrap_or(self_url),
            legacy_url: std::env::var("LEGACY_URL").unwrap_or(defaults.legacy_url),
            remote_timeout_ms: env_or("REMOTE_TIMEOUT_MS", defaults.remote_timeout_ms),
            chaos: FaultProfile {
                failure_percent: env_or("CHAOS_FAIL_PERCENT", defaults.chaos.failure_percent),
                min_delay_ms: env_or("CHAOS_MIN_DELAY_MS", defaults.chaos.min_delay_ms),
                max_delay_ms: env_or("CHAOS_MAX_DELAY_MS", defaults.chaos.max_delay_ms),
            },
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            inventory_url: "http://127.0.0.1:3000".to_string(),
            payment_url: "http://127.0.0.1:3000".to_string(),
            legacy_url: "http://127.0.0.1:8090".to_string(),
            remote_timeout_ms: 3000,
            chaos: FaultProfile::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.remote_timeout_ms, 3000);
        assert_eq!(config.chaos, FaultProfile::default());
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_saga_targets_default_to_self() {
        let config = Config::default();
        assert_eq!(config.inventory_url, "http://127.0.0.1:3000");
        assert_eq!(config.payment_url, "http://127.0.0.1:3000");
    }
}
