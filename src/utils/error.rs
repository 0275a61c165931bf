use thiserror::Error;

#[derive(Error, Debug)]
pub enum TopicError {
    #[error("Network request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Failed to fetch topics data (HTTP {status})")]
    BadStatusError { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed topics document: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TopicError {
    /// 是否屬於載入失敗 (無法取得或解析主題資料)
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            TopicError::HttpError(_)
                | TopicError::BadStatusError { .. }
                | TopicError::IoError(_)
                | TopicError::ParseError(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TopicError::HttpError(e) if e.is_timeout() => {
                "The topics request timed out".to_string()
            }
            TopicError::HttpError(_) => "Could not reach the topics resource".to_string(),
            TopicError::BadStatusError { .. } => "Failed to fetch topics data".to_string(),
            TopicError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Topics file not found".to_string()
            }
            TopicError::IoError(e) => format!("Could not read topics file: {}", e),
            TopicError::ParseError(e) => format!("Topics document is malformed: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TopicError::HttpError(_) | TopicError::BadStatusError { .. } => {
                "Make sure the topics URL is reachable and serves topics.json"
            }
            TopicError::IoError(_) => {
                "Make sure your topics.json file exists at the configured source location"
            }
            TopicError::ParseError(_) => {
                "Make sure topics.json contains a `categories` array of { category, topics: [{ id, topic }] }"
            }
            TopicError::ConfigError { .. } | TopicError::InvalidConfigValueError { .. } => {
                "Check the command line flags and the TOML configuration file"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_load_failure() {
            1
        } else {
            2
        }
    }
}

pub type Result<T> = std::result::Result<T, TopicError>;
