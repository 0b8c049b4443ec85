use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiServiceError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog parse error: {0}")]
    CatalogError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Provider error ({provider}): {message}")]
    ProviderError { provider: String, message: String },
}

impl AiServiceError {
    pub fn provider(provider: &str, message: impl Into<String>) -> Self {
        AiServiceError::ProviderError {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AiServiceError>;
