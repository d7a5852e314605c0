//! Application error types.
//!
//! Only loading (config, deck files, terminal setup) can fail. Navigation,
//! translation and the prompt builder are infallible and degrade to no-ops.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Deck file parsing error
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<std::path::PathBuf>,
        /// Description of the parse failure.
        message: String,
    },

    /// Deck content is structurally unusable
    #[error("Deck error: {message}{}", .hint.map_or_else(String::new, |h| format!(". {h}")))]
    Deck {
        /// What is wrong with the deck.
        message: String,
        /// Actionable suggestion for fixing the deck file.
        hint: Option<&'static str>,
    },
}

impl Error {
    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }

    /// Create a deck error, attaching a hint for the common mistakes.
    pub fn deck(message: impl Into<String>) -> Self {
        let message = message.into();
        let hint = if message.contains("no slides") {
            Some("Add at least one entry to the \"slides\" array")
        } else if message.contains("empty block") {
            Some("Give every block either \"en\" text or a \"parts\" list")
        } else {
            None
        };
        Self::Deck { message, hint }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn deck_errors_provide_hints() {
        let err = Error::deck("deck has no slides");
        match err {
            Error::Deck { hint: Some(h), .. } => {
                assert!(h.contains("slides"));
            }
            _ => panic!("Expected Deck error with hint"),
        }
    }

    #[test]
    fn unknown_deck_errors_have_no_hint() {
        assert!(matches!(Error::deck("odd"), Error::Deck { hint: None, .. }));
    }

    #[test]
    fn deck_error_display_includes_hint() {
        assert_eq!(
            Error::deck("deck has no slides").to_string(),
            "Deck error: deck has no slides. Add at least one entry to the \"slides\" array"
        );
        assert_eq!(Error::deck("odd").to_string(), "Deck error: odd");
    }

    #[test]
    fn config_error_display_includes_hint() {
        let err = Error::config("no deck given", "Pass a deck path or set SLIDEVIEW_DECK");
        assert_eq!(
            err.to_string(),
            "Configuration error: no deck given. Pass a deck path or set SLIDEVIEW_DECK"
        );
    }
}
