use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} parameter is mandatory")]
    MissingParameter(&'static str),

    #[error("Region '{region}' is not a valid region. Please select one from the following list: {valid}")]
    InvalidRegion { region: String, valid: String },

    #[error("Summoner {0} does not exist.")]
    SummonerNotFound(String),

    #[error("Summoner does not have any matches recorded.")]
    NoMatches,

    /// Upstream answered with a 4xx outside of the statuses handled per endpoint.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// Upstream answered with a 5xx.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("{0}")]
    Internal(String),

    #[error("HTTP request error: {0}")]
    Http(reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Strips the request URL, which carries the API key.
impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url())
    }
}

impl AppError {
    /// HTTP status reported to callers of the service.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingParameter(_) => 400,
            Self::InvalidRegion { .. } | Self::SummonerNotFound(_) | Self::NoMatches => 404,
            Self::Request { .. }
            | Self::Upstream { .. }
            | Self::Internal(_)
            | Self::Http(_)
            | Self::Io(_)
            | Self::Config(_) => 500,
        }
    }
}
