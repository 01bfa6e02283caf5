//! Language detection for a candidate phrase.
//!
//! Words may be prefixes, so more than one list can fit a phrase. The
//! candidate set is narrowed in two passes:
//!
//! 1. Keep only languages with at least one entry starting with every word.
//!    If a single language survives, it is the answer.
//! 2. Otherwise, collect each language that is the *only* surviving
//!    candidate to contain some word exactly. Exactly one such language is
//!    the answer; anything else is ambiguous.

use std::collections::{BTreeMap, BTreeSet};

use crate::normalize::normalize_string;
use crate::{Language, MnemonicError, Wordlist, WordlistRegistry};

/// Detect the language of `text` among the lists in `registry`.
///
/// The text is NFKD-normalized and split on ASCII spaces (which also splits
/// Japanese phrases, as normalization maps U+3000 to a space).
///
/// # Returns
/// The single matching language, `UnrecognizedLanguage` naming the first
/// word no remaining candidate has a prefix for, `AmbiguousLanguage` listing
/// the survivors of the first pass, or `EmptyRegistry`.
pub fn detect_language(registry: &WordlistRegistry, text: &str) -> Result<Language, MnemonicError> {
    if registry.is_empty() {
        return Err(MnemonicError::EmptyRegistry);
    }

    let normalized = normalize_string(text);
    let words: Vec<&str> = normalized.split(' ').collect();

    let mut possible: BTreeMap<Language, &Wordlist> = registry.iter().collect();
    for word in &words {
        possible.retain(|_, list| list.contains_prefix(word));
        if possible.is_empty() {
            tracing::debug!(words = words.len(), "no language has a matching prefix");
            return Err(MnemonicError::UnrecognizedLanguage {
                word: word.to_string(),
            });
        }
    }

    if possible.len() == 1 {
        if let Some(language) = possible.keys().next() {
            tracing::debug!(%language, "language settled by prefixes");
            return Ok(*language);
        }
    }

    let mut confirmed = BTreeSet::new();
    for word in &words {
        let exact: Vec<Language> = possible
            .iter()
            .filter(|(_, list)| list.contains(word))
            .map(|(language, _)| *language)
            .collect();
        if let [only] = exact.as_slice() {
            confirmed.insert(*only);
        }
    }

    if let (Some(language), 1) = (confirmed.first(), confirmed.len()) {
        tracing::debug!(%language, candidates = possible.len(), "language settled by exact match");
        return Ok(*language);
    }

    let candidates: Vec<Language> = possible.into_keys().collect();
    tracing::debug!(candidates = candidates.len(), confirmed = confirmed.len(), "language ambiguous");
    Err(MnemonicError::AmbiguousLanguage { candidates })
}
