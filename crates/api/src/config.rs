use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// SQLite connection URL.
    pub database_url: String,
    /// Database file path when the URL was derived from `DB_PATH`.
    /// `None` when `DATABASE_URL` was given explicitly.
    pub db_path: Option<PathBuf>,
    /// Exercise catalog CSV loaded at startup.
    pub catalog_csv_path: PathBuf,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Emit logs as JSON lines (`LOG_FORMAT=json`).
    pub log_json: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                         |
    /// |------------------------|---------------------------------|
    /// | `HOST`                 | `0.0.0.0`                       |
    /// | `PORT`                 | `8080`                          |
    /// | `DATABASE_URL`         | `sqlite://{DB_PATH}?mode=rwc`   |
    /// | `DB_PATH`              | `data/gymcoach.db`              |
    /// | `MEGAGYM_CSV_PATH`     | `data/megaGymDataset.csv`       |
    /// | `CORS_ORIGINS`         | `http://localhost:8080`         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                            |
    /// | `LOG_FORMAT`           | `text`                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let (database_url, db_path) = match std::env::var("DATABASE_URL") {
            Ok(url) => (url, None),
            Err(_) => {
                let path = std::env::var("DB_PATH").unwrap_or_else(|_| "data/gymcoach.db".into());
                (sqlite_url_for(&path), Some(PathBuf::from(path)))
            }
        };

        let catalog_csv_path = std::env::var("MEGAGYM_CSV_PATH")
            .unwrap_or_else(|_| "data/megaGymDataset.csv".into())
            .into();

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:8080".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let log_json = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            host,
            port,
            database_url,
            db_path,
            catalog_csv_path,
            cors_origins,
            request_timeout_secs,
            log_json,
        }
    }
}

/// SQLite URL that opens `path` read-write, creating it if needed.
pub fn sqlite_url_for(path: &str) -> String {
    format!("sqlite://{path}?mode=rwc")
}
