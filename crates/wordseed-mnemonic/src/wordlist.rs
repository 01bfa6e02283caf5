//! Immutable 2048-word vocabulary for one language.
//!
//! A `Wordlist` maps 11-bit indices to words and back. Besides the words as
//! supplied it keeps their NFKD forms, so lookups, prefix checks and exact
//! checks succeed whether or not the input was run through
//! [`normalize_string`](crate::normalize_string). Words are always emitted in
//! the supplied form.

use std::collections::HashMap;

use crate::constants::WORDLIST_LEN;
use crate::normalize::normalize_string;
use crate::{Language, MnemonicError};

/// An ordered, bijective mapping between indices `0..2048` and words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    language: Language,
    words: Vec<String>,
    /// NFKD form of each entry in `words`, index-aligned.
    normalized: Vec<String>,
    /// Word (supplied or NFKD form) to index.
    indexes: HashMap<String, u16>,
}

impl Wordlist {
    /// Build a word list from an ordered sequence of words.
    ///
    /// # Arguments
    /// * `language` - The language the words belong to.
    /// * `words` - Exactly 2048 distinct words, in index order.
    ///
    /// # Returns
    /// `Ok(Wordlist)`, or `InvalidWordlist` if the count is wrong or two
    /// words are equal, either as supplied or after NFKD normalization.
    pub fn new<I, S>(language: Language, words: I) -> Result<Self, MnemonicError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != WORDLIST_LEN {
            return Err(MnemonicError::InvalidWordlist(format!(
                "{} wordlist must contain {} words, got {}",
                language,
                WORDLIST_LEN,
                words.len()
            )));
        }

        let mut indexes = HashMap::with_capacity(WORDLIST_LEN * 2);
        for (index, word) in words.iter().enumerate() {
            if indexes.insert(word.clone(), index as u16).is_some() {
                return Err(MnemonicError::InvalidWordlist(format!(
                    "{} wordlist repeats {:?}",
                    language, word
                )));
            }
        }

        let normalized: Vec<String> = words.iter().map(|w| normalize_string(w)).collect();
        for (index, form) in normalized.iter().enumerate() {
            let index = index as u16;
            match indexes.get(form) {
                Some(&other) if other != index => {
                    return Err(MnemonicError::InvalidWordlist(format!(
                        "{} wordlist entries {} and {} share the NFKD form {:?}",
                        language,
                        other.min(index),
                        other.max(index),
                        form
                    )));
                }
                Some(_) => {}
                None => {
                    indexes.insert(form.clone(), index);
                }
            }
        }

        Ok(Wordlist {
            language,
            words,
            normalized,
            indexes,
        })
    }

    /// Parse a newline-delimited word list resource.
    ///
    /// One word per line; a single trailing newline is expected and dropped,
    /// and carriage returns are stripped.
    pub fn from_text(language: Language, text: &str) -> Result<Self, MnemonicError> {
        let body = text.strip_suffix('\n').unwrap_or(text);
        Self::new(
            language,
            body.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)),
        )
    }

    /// Return the language of this list.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Return the phrase delimiter for this list's language.
    pub fn delimiter(&self) -> &'static str {
        self.language.delimiter()
    }

    /// Return the word at `index`.
    ///
    /// # Panics
    /// Panics if `index` is 2048 or greater.
    pub fn word(&self, index: u16) -> &str {
        &self.words[usize::from(index)]
    }

    /// Return the index of `word` in any normalization form.
    pub fn lookup(&self, word: &str) -> Option<u16> {
        self.indexes
            .get(word)
            .or_else(|| self.indexes.get(&normalize_string(word)))
            .copied()
    }

    /// Return true if `word` is an entry of this list.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Return true if any entry starts with `prefix` (an entry equal to
    /// `prefix` counts).
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.words_with_prefix(prefix).next().is_some()
    }

    /// Iterate over the entries starting with `prefix`, in index order.
    pub fn words_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let folded = normalize_string(prefix);
        self.words
            .iter()
            .zip(&self.normalized)
            .filter(move |(word, form)| word.starts_with(prefix) || form.starts_with(folded.as_str()))
            .map(|(word, _)| word.as_str())
    }

    /// Iterate over all entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
