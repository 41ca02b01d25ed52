use thiserror::Error;

#[derive(Error, Debug)]
pub enum BringError {
    #[error("HTTP request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatusError { url: String, status: u16 },

    #[error("Response from {url} is not valid JSON: {source}")]
    DecodeError {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected payload shape: {message}")]
    ShapeError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BringError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl BringError {
    pub fn shape(message: impl Into<String>) -> Self {
        Self::ShapeError {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TransportError(_) | Self::HttpStatusError { .. } => ErrorCategory::Network,
            Self::DecodeError { .. } | Self::ShapeError { .. } | Self::SerializationError(_) => {
                ErrorCategory::Data
            }
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    /// 網路與資料錯誤只影響單一週期，下次輪詢會自動重試
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Data
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::TransportError(_) => "Check network connectivity; the next cycle will retry",
            Self::HttpStatusError { status, .. } if *status == 401 || *status == 403 => {
                "The service rejected the request; check the headers configured under [source.headers]"
            }
            Self::HttpStatusError { status, .. } if *status == 404 => {
                "Check the list id and locale in the configuration"
            }
            Self::HttpStatusError { .. } => "The service returned an error; the next cycle will retry",
            Self::DecodeError { .. } => "Check that source.api_base and source.web_base point at the list service",
            Self::ShapeError { .. } => "The service response format may have changed",
            Self::IoError(_) => "Check that the output directory exists and is writable",
            Self::SerializationError(_) => "Report this as a bug",
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => "Fix the configuration file and restart",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the shopping list service: {}", self),
            ErrorCategory::Data => format!("Shopping list data could not be read: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}
