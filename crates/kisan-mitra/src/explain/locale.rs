use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Narrative languages supported by the explanation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Hindi];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Hindi => "hi",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Hindi => "Hindi",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language '{0}'; expected one of: en, hi")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::English),
            "hi" => Ok(Locale::Hindi),
            _ => Err(UnsupportedLocale(value.to_string())),
        }
    }
}
