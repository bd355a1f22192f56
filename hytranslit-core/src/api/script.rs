//! Script type for the API

use std::fmt;
use std::str::FromStr;

use crate::api::Error;

/// Supported target scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Script {
    /// Latin alphabet
    #[default]
    Latin,
    /// Cyrillic alphabet
    Cyrillic,
}

impl Script {
    /// Get the script tag
    pub fn code(&self) -> &'static str {
        match self {
            Script::Latin => "en",
            Script::Cyrillic => "ru",
        }
    }

    /// Get the full script name
    pub fn name(&self) -> &'static str {
        match self {
            Script::Latin => "Latin",
            Script::Cyrillic => "Cyrillic",
        }
    }

    /// All supported scripts
    pub fn all() -> [Script; 2] {
        [Script::Latin, Script::Cyrillic]
    }
}

impl FromStr for Script {
    type Err = Error;

    /// Parse a script tag; only `"en"` and `"ru"` are recognized
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "en" => Ok(Script::Latin),
            "ru" => Ok(Script::Cyrillic),
            _ => Err(Error::InvalidScript(tag.to_string())),
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
