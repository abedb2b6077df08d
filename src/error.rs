use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    /// Non-success HTTP status, shown with the status reason text only.
    #[error("Error: {reason}")]
    Status { code: u16, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_uses_reason() {
        let err = Error::Status {
            code: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Error: Not Found");
    }

    #[test]
    fn test_validation_error_message_is_bare() {
        let err = Error::Validation("Game name is required".to_string());
        assert_eq!(err.to_string(), "Game name is required");
    }
}
