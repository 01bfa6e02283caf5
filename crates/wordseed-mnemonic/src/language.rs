//! Supported word list languages.

use std::fmt;
use std::str::FromStr;

use crate::MnemonicError;

/// One of the twelve languages a BIP39 word list can be written in.
///
/// The ordering is the alphabetical order of the identifiers, which is also
/// the order detection reports candidates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    ChineseSimplified,
    ChineseTraditional,
    Czech,
    English,
    French,
    Italian,
    Japanese,
    Korean,
    Portuguese,
    Russian,
    Spanish,
    Turkish,
}

const ALL: [Language; 12] = [
    Language::ChineseSimplified,
    Language::ChineseTraditional,
    Language::Czech,
    Language::English,
    Language::French,
    Language::Italian,
    Language::Japanese,
    Language::Korean,
    Language::Portuguese,
    Language::Russian,
    Language::Spanish,
    Language::Turkish,
];

impl Language {
    /// Return every supported language.
    pub fn all() -> &'static [Language; 12] {
        &ALL
    }

    /// Return the stable identifier, e.g. `"chinese_simplified"`.
    ///
    /// The identifier doubles as the file stem of the language's word list.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::ChineseSimplified => "chinese_simplified",
            Language::ChineseTraditional => "chinese_traditional",
            Language::Czech => "czech",
            Language::English => "english",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Portuguese => "portuguese",
            Language::Russian => "russian",
            Language::Spanish => "spanish",
            Language::Turkish => "turkish",
        }
    }

    /// Return the string placed between words of a phrase.
    ///
    /// Japanese phrases use U+3000 IDEOGRAPHIC SPACE; every other language
    /// uses an ASCII space.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Language::Japanese => "\u{3000}",
            _ => " ",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| MnemonicError::UnknownLanguage(s.to_string()))
    }
}

/// Return the identifiers of all supported languages.
pub fn list_languages() -> Vec<&'static str> {
    ALL.iter().map(Language::as_str).collect()
}
