use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LanguageError;

/// Class added to `<body>` while a right-to-left language is active.
pub const RTL_MARKER_CLASS: &str = "lang-ar";

/// Toast used when the switcher sends a code we do not know.
pub const GENERIC_SWITCH_MESSAGE: &str = "Language updated";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    Ar,
    En,
}

impl Language {
    pub fn all() -> [Language; 3] {
        [Language::Fr, Language::Ar, Language::En]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn dir(&self) -> TextDirection {
        match self {
            Language::Ar => TextDirection::Rtl,
            Language::Fr | Language::En => TextDirection::Ltr,
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.dir() == TextDirection::Rtl
    }

    /// Toast shown after switching to this language.
    pub fn switch_message(&self) -> &'static str {
        match self {
            Language::Fr => "Langue changée en Français",
            Language::Ar => "تم تغيير اللغة إلى العربية",
            Language::En => "Language changed to English",
        }
    }

    /// Parses a BCP 47 tag such as `ar-DZ` by its primary subtag.
    pub fn from_tag(tag: &str) -> Result<Self, LanguageError> {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        primary
            .parse()
            .map_err(|_| LanguageError::Unknown(tag.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fr" => Ok(Language::Fr),
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            _ => Err(LanguageError::Unknown(s.to_string())),
        }
    }
}
