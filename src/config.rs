const DEFAULT_LOG_FILTER: &str = "workout_stats=info";

#[derive(Debug, Clone)]
pub struct Config {
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        let log_filter = std::env::var("RUST_LOG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self { log_filter }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
