/// Desk configuration
///
/// # Environment variables
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | QUICKPRINT_DATA_DIR | ./quickprint-data | Database location |
/// | QUICKPRINT_OUTPUT_DIR | ./quickprint-data/documents | Saved PDF documents |
/// | QUICKPRINT_LOG | info | Log level |
/// | GEMINI_API_KEY | (unset) | Insights advisory key; unset disables the feature |
/// | INSIGHTS_TIMEOUT_MS | 10000 | Insights request timeout (milliseconds) |
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the redb database file
    pub data_dir: String,
    /// Directory where saved invoices and tokens land
    pub output_dir: String,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// API key for the insights advisory, if configured
    pub gemini_api_key: Option<String>,
    /// Insights request timeout (milliseconds)
    pub insights_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, using defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("QUICKPRINT_DATA_DIR")
                .unwrap_or_else(|_| "./quickprint-data".into()),
            output_dir: std::env::var("QUICKPRINT_OUTPUT_DIR")
                .unwrap_or_else(|_| "./quickprint-data/documents".into()),
            log_level: std::env::var("QUICKPRINT_LOG").unwrap_or_else(|_| "info".into()),
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            insights_timeout_ms: std::env::var("INSIGHTS_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
        }
    }

    /// Path of the database file inside the data directory.
    pub fn db_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.data_dir).join("desk.redb")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: "./quickprint-data".into(),
            output_dir: "./quickprint-data/documents".into(),
            log_level: "info".into(),
            gemini_api_key: None,
            insights_timeout_ms: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_path_is_under_data_dir() {
        let config = Config {
            data_dir: "/tmp/qp".into(),
            ..Config::default()
        };
        assert_eq!(config.db_path(), std::path::PathBuf::from("/tmp/qp/desk.redb"));
    }
}
