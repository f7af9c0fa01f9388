use std::env;
use std::time::Duration;

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Stored events and node samples older than this are swept.
    pub retention: Duration,
    pub sweep_interval: Duration,
    pub log_tail_lines: i64,
}

impl Config {
    pub fn from_env() -> Self {
        let retention_hours = env_or("KUBEMON_RETENTION_HOURS", 24u64);
        let sweep_secs = env_or("KUBEMON_SWEEP_INTERVAL_SECS", 300u64);

        Self {
            listen_addr: env::var("KUBEMON_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:9000".to_string()),
            retention: Duration::from_secs(retention_hours * 3600),
            sweep_interval: Duration::from_secs(sweep_secs),
            log_tail_lines: env_or("KUBEMON_LOG_TAIL_LINES", 30i64),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let cfg = Config::from_env();
        assert_eq!(cfg.log_tail_lines, 30);
        assert_eq!(cfg.sweep_interval, Duration::from_secs(300));
    }
}
