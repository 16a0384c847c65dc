use reqwest::StatusCode;

/// Failure of a single backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} not found")]
    NotFound { url: String },

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Short, user-facing reason shown in the error state of a view.
    pub fn reason(&self) -> String {
        match self {
            ApiError::Transport { source, .. } if source.is_timeout() => {
                "The analytics service did not answer in time.".to_string()
            }
            ApiError::Transport { .. } => "The analytics service is unreachable.".to_string(),
            ApiError::NotFound { .. } => "The requested data does not exist.".to_string(),
            ApiError::Status { status, .. } => {
                format!("The analytics service answered with HTTP {}.", status.as_u16())
            }
            ApiError::Decode { .. } => {
                "The analytics service sent a response that could not be read.".to_string()
            }
        }
    }
}

/// Startup failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("template registration failed: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    #[error("http client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("invalid listen address {0}")]
    Address(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<handlebars::TemplateError> for AppError {
    fn from(e: handlebars::TemplateError) -> Self {
        AppError::Template(Box::new(e))
    }
}
