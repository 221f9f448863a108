use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Report languages. Reports are always composed in English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Hindi,
    Chinese,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Hindi,
        Language::Chinese,
    ];

    /// Code sent to the online translation service.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Hindi => "hi",
            Language::Chinese => "zh-cn",
        }
    }

    /// Lenient lookup: unknown names fall back to English, which turns a
    /// translation request into a no-op.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Spanish => write!(f, "Spanish"),
            Language::French => write!(f, "French"),
            Language::German => write!(f, "German"),
            Language::Hindi => write!(f, "Hindi"),
            Language::Chinese => write!(f, "Chinese"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "spanish" | "es" | "español" => Ok(Language::Spanish),
            "french" | "fr" | "français" => Ok(Language::French),
            "german" | "de" | "deutsch" => Ok(Language::German),
            "hindi" | "hi" => Ok(Language::Hindi),
            "chinese" | "zh" | "zh-cn" => Ok(Language::Chinese),
            _ => Err(format!("Unknown language: {s}")),
        }
    }
}
