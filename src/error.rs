use thiserror::Error;

/// Outcome of a single provider request.
pub type RequestOutcome<T> = Result<T, RequestError>;

/// Every way a fetch can fail. Nothing else escapes the transport.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// Network, DNS, TLS, refused connection or timeout.
    #[error("unable to complete the request")]
    UnableToComplete,

    /// The exchange succeeded but there was no body to read.
    #[error("the server returned no data")]
    InvalidData,

    /// The body was JSON but not in the shape we expect.
    #[error("the server response was invalid")]
    InvalidResponse,

    /// The body was not JSON at all.
    #[error("the server response was not valid JSON")]
    InvalidJson,
}

impl RequestError {
    pub fn kind(&self) -> &'static str {
        match self {
            RequestError::UnableToComplete => "unableToComplete",
            RequestError::InvalidData => "invalidData",
            RequestError::InvalidResponse => "invalidResponse",
            RequestError::InvalidJson => "invalidJson",
        }
    }
}

/// Why a JSON payload could not be mapped onto a domain model.
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("payload does not match the expected schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("`response` holds no entries")]
    EmptyResponse,

    #[error("`deaths.new` is not a signed count: {0:?}")]
    NewDeaths(String),

    #[error("entry {index} has an empty `country`")]
    EmptyCountry { index: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid timeout {0:?}, expected whole seconds")]
    InvalidTimeout(String),

    #[error("host identifier {0:?} is not a valid header value")]
    InvalidHost(String),

    #[error("api key is not a valid header value")]
    InvalidApiKey,
}
