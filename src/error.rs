use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("RIOT_API_KEY is not configured")]
    MissingApiKey,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error for {url}: {message}")]
    Http { url: String, message: String },

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Rate limited by {url}")]
    RateLimited { url: String },

    #[error("JSON parsing error: {0}")]
    Json(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Champion not found: {0}")]
    ChampionNotFound(String),

    #[error("Unknown role: {0} (expected top, jungle, mid, adc or support)")]
    InvalidRole(String),

    #[error("Unknown region: {0}")]
    InvalidRegion(String),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Status { status: 404, .. })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
