//! Platform-level error types
//!
//! The simulation itself never fails; everything it touches is clamped.
//! These errors cover the outer shell: browser setup, GPU initialization
//! and configuration parsing.

use std::fmt;

/// Errors raised while bringing the game up or loading configuration
#[derive(Debug)]
pub enum GameError {
    /// `window` or `document` unavailable (not running in a browser page)
    NoWindow,
    /// A required DOM element was not found
    MissingElement(&'static str),
    /// No compatible GPU adapter
    Adapter(String),
    /// Device request failed
    Device(String),
    /// Surface creation failed
    Surface(String),
    /// Tuning or settings document could not be parsed
    Config(serde_json::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoWindow => write!(f, "no browser window available"),
            GameError::MissingElement(id) => write!(f, "missing DOM element #{id}"),
            GameError::Adapter(msg) => write!(f, "failed to get GPU adapter: {msg}"),
            GameError::Device(msg) => write!(f, "failed to create GPU device: {msg}"),
            GameError::Surface(msg) => write!(f, "failed to create surface: {msg}"),
            GameError::Config(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_element() {
        let err = GameError::MissingElement("canvas");
        assert_eq!(err.to_string(), "missing DOM element #canvas");
    }

    #[test]
    fn test_config_error_has_source() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GameError = parse.into();
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
