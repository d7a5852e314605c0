//! Core type definitions shared by the navigator, translator and front end.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document-wide display language.
///
/// `English` is the primary language the markup is authored in, `Chinese`
/// the secondary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// Primary language.
    #[default]
    English,
    /// Secondary language.
    Chinese,
}

impl Language {
    /// The other language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::English => Self::Chinese,
            Self::Chinese => Self::English,
        }
    }

    /// Attribute holding a unit's text in this language.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::English => "data-en",
            Self::Chinese => "data-zh",
        }
    }

    /// Attribute holding a compound container's full text in this language.
    #[must_use]
    pub const fn full_attribute(self) -> &'static str {
        match self {
            Self::English => "data-en-full",
            Self::Chinese => "data-zh-full",
        }
    }

    /// Name of the language, written in that language.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Chinese => "中文",
        }
    }

    /// Parse a short language code such as `en` or `zh-CN`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        if code == "en" || code.starts_with("en-") || code == "english" {
            Some(Self::English)
        } else if code == "zh" || code.starts_with("zh-") || code == "chinese" {
            Some(Self::Chinese)
        } else {
            None
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A user intent produced by any input source (keys, buttons, gestures).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Show the next slide.
    Advance,
    /// Show the previous slide.
    Retreat,
    /// Switch the display language.
    ToggleLanguage,
}
