//! Error Types
//!
//! Failures surfaced to the user as notifications. None of them are fatal.

use thiserror::Error;

/// Remote call failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS...)
    #[error("network error: {0}")]
    Transport(String),
    /// Non-2xx response
    #[error("server returned {status}{}", suffix(.message))]
    Server { status: u16, message: Option<String> },
    /// 2xx response with `status: false`
    #[error("request rejected{}", suffix(.0))]
    Rejected(Option<String>),
    /// Body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

fn suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ApiError {
    /// Server-provided message when there is one, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message: Some(message), .. } | ApiError::Rejected(Some(message)) => {
                message.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

/// Form input rejected before any request is made
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Name must be between 1 and 50 characters.")]
    NameLength,
    #[error("Unknown category \"{0}\".")]
    UnknownCategory(String),
    #[error("Price must be greater than zero.")]
    NonPositivePrice,
    #[error("Discount must be between 0 and 100.")]
    DiscountRange,
    #[error("Description must be at most 200 characters.")]
    DescriptionLength,
    #[error("Quantity must be at least 1.")]
    ZeroQuantity,
    #[error("Only {available} left in stock.")]
    InsufficientStock { available: u32 },
    #[error("\"{value}\" is not a valid {field}.")]
    NotANumber { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Server { status: 400, message: Some("Sweet with this name already exists".into()) };
        assert_eq!(err.user_message("Could not add sweet."), "Sweet with this name already exists");

        let err = ApiError::Rejected(Some("Invalid API-Key".into()));
        assert_eq!(err.user_message("fallback"), "Invalid API-Key");
    }

    #[test]
    fn test_user_message_falls_back() {
        assert_eq!(ApiError::Transport("offline".into()).user_message("Try again"), "Try again");
        assert_eq!(ApiError::Server { status: 502, message: None }.user_message("Try again"), "Try again");
        assert_eq!(ApiError::Decode("eof".into()).user_message("Try again"), "Try again");
    }

    #[test]
    fn test_display_includes_status_and_message() {
        let err = ApiError::Server { status: 404, message: Some("Sweet not found".into()) };
        assert_eq!(err.to_string(), "server returned 404: Sweet not found");
        assert_eq!(ApiError::Rejected(None).to_string(), "request rejected");
    }
}
