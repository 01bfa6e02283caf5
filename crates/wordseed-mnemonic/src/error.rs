use std::path::PathBuf;

use wordseed_primitives::PrimitivesError;

use crate::language::Language;

/// Broad classification of a [`MnemonicError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad construction input, or a phrase whose language cannot be settled.
    Configuration,
    /// Wrong entropy length, word count or strength, or a failed checksum.
    Value,
    /// A word that is not in the bound word list.
    Lookup,
    /// The random source could not supply entropy.
    Rng,
}

/// Error types for mnemonic operations.
#[derive(Debug, thiserror::Error)]
pub enum MnemonicError {
    #[error("invalid wordlist: {0}")]
    InvalidWordlist(String),

    #[error("unknown language identifier: {0}")]
    UnknownLanguage(String),

    #[error("language unrecognized for {word:?}")]
    UnrecognizedLanguage { word: String },

    #[error("language ambiguous between [{}]", join_languages(.candidates))]
    AmbiguousLanguage { candidates: Vec<Language> },

    #[error("no wordlist loaded for {0}")]
    MissingWordlist(Language),

    #[error("wordlist registry is empty")]
    EmptyRegistry,

    #[error("failed to read wordlist {}: {source}", .path.display())]
    WordlistIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid entropy length: expected one of [16, 20, 24, 28, 32] bytes, got {0}")]
    InvalidEntropyLength(usize),

    #[error("invalid word count: expected one of [12, 15, 18, 21, 24], got {0}")]
    InvalidWordCount(usize),

    #[error("invalid strength: expected one of [128, 160, 192, 224, 256] bits, got {0}")]
    InvalidStrength(usize),

    #[error("failed checksum")]
    ChecksumMismatch,

    #[error("unable to find {0:?} in word list")]
    UnknownWord(String),

    #[error("random source failure: {0}")]
    Rng(String),

    #[error("primitives error: {0}")]
    Primitives(#[from] PrimitivesError),
}

impl MnemonicError {
    /// Return the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MnemonicError::InvalidWordlist(_)
            | MnemonicError::UnknownLanguage(_)
            | MnemonicError::UnrecognizedLanguage { .. }
            | MnemonicError::AmbiguousLanguage { .. }
            | MnemonicError::MissingWordlist(_)
            | MnemonicError::EmptyRegistry
            | MnemonicError::WordlistIo { .. }
            | MnemonicError::Primitives(_) => ErrorKind::Configuration,
            MnemonicError::InvalidEntropyLength(_)
            | MnemonicError::InvalidWordCount(_)
            | MnemonicError::InvalidStrength(_)
            | MnemonicError::ChecksumMismatch => ErrorKind::Value,
            MnemonicError::UnknownWord(_) => ErrorKind::Lookup,
            MnemonicError::Rng(_) => ErrorKind::Rng,
        }
    }
}

fn join_languages(languages: &[Language]) -> String {
    languages
        .iter()
        .map(Language::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_message_lists_candidates() {
        let err = MnemonicError::AmbiguousLanguage {
            candidates: vec![Language::English, Language::French],
        };
        assert_eq!(err.to_string(), "language ambiguous between [english, french]");
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(MnemonicError::ChecksumMismatch.kind(), ErrorKind::Value);
        assert_eq!(MnemonicError::InvalidWordCount(11).kind(), ErrorKind::Value);
        assert_eq!(MnemonicError::UnknownWord("xyz".into()).kind(), ErrorKind::Lookup);
        assert_eq!(MnemonicError::Rng("offline".into()).kind(), ErrorKind::Rng);
        assert_eq!(
            MnemonicError::from(PrimitivesError::InvalidBitWidth(0)).kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn test_unknown_word_names_the_word() {
        let err = MnemonicError::UnknownWord("bitcoin".into());
        assert_eq!(err.to_string(), "unable to find \"bitcoin\" in word list");
    }
}
