//! Caller-owned collection of loaded word lists.
//!
//! A `WordlistRegistry` is built once at start-up and handed to
//! [`detect_language`](crate::detect_language) and to
//! [`Mnemonic::from_registry`](crate::Mnemonic::from_registry). Lists are
//! stored behind `Arc`, so codecs bound to the same language share one copy.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::{Language, MnemonicError, Wordlist};

/// Word lists keyed by language.
#[derive(Debug, Clone, Default)]
pub struct WordlistRegistry {
    lists: BTreeMap<Language, Arc<Wordlist>>,
}

impl WordlistRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `<identifier>.txt` file present in `dir`.
    ///
    /// Languages without a file are skipped. A file that cannot be read or
    /// does not hold a valid word list fails the whole load.
    ///
    /// # Arguments
    /// * `dir` - Directory holding files such as `english.txt`.
    ///
    /// # Returns
    /// The populated registry, or `EmptyRegistry` if no file was found.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, MnemonicError> {
        let mut registry = Self::new();
        if registry.load_dir(dir)? == 0 {
            return Err(MnemonicError::EmptyRegistry);
        }
        Ok(registry)
    }

    /// Add the `<identifier>.txt` files present in `dir` to this registry,
    /// replacing lists already loaded for the same language.
    ///
    /// This is how languages missing from [`embedded`](Self::embedded)
    /// (russian, turkish) are supplied next to the built-in lists.
    ///
    /// # Returns
    /// The number of lists loaded from `dir`, which may be zero.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, MnemonicError> {
        let dir = dir.as_ref();
        let mut loaded = 0;
        for language in Language::all() {
            let path = dir.join(format!("{}.txt", language));
            if !path.is_file() {
                tracing::debug!(%language, path = %path.display(), "no wordlist file, skipping");
                continue;
            }
            let text = fs::read_to_string(&path)
                .map_err(|source| MnemonicError::WordlistIo { path: path.clone(), source })?;
            self.insert(Wordlist::from_text(*language, &text)?);
            loaded += 1;
        }
        tracing::debug!(loaded, total = self.len(), dir = %dir.display(), "loaded wordlists");
        Ok(loaded)
    }

    #[cfg(feature = "embedded-wordlists")]
    pub fn embedded() -> Result<Self, MnemonicError> {
        const EMBEDDED: [(Language, bip39::Language); 10] = [
            (Language::ChineseSimplified, bip39::Language::SimplifiedChinese),
            (Language::ChineseTraditional, bip39::Language::TraditionalChinese),
            (Language::Czech, bip39::Language::Czech),
            (Language::English, bip39::Language::English),
            (Language::French, bip39::Language::French),
            (Language::Italian, bip39::Language::Italian),
            (Language::Japanese, bip39::Language::Japanese),
            (Language::Korean, bip39::Language::Korean),
            (Language::Portuguese, bip39::Language::Portuguese),
            (Language::Spanish, bip39::Language::Spanish),
        ];

        let mut registry = Self::new();
        for (language, source) in EMBEDDED {
            registry.insert(Wordlist::new(language, source.word_list().iter().copied())?);
        }
        tracing::debug!(count = registry.len(), "loaded embedded wordlists");
        Ok(registry)
    }

    /// Add a word list, replacing any list already held for its language.
    ///
    /// # Returns
    /// The replaced list, if there was one.
    pub fn insert(&mut self, wordlist: Wordlist) -> Option<Arc<Wordlist>> {
        self.lists.insert(wordlist.language(), Arc::new(wordlist))
    }

    /// Return the list for `language`, if loaded.
    pub fn get(&self, language: Language) -> Option<Arc<Wordlist>> {
        self.lists.get(&language).cloned()
    }

    /// Return the list for `language`, or `MissingWordlist`.
    pub fn require(&self, language: Language) -> Result<Arc<Wordlist>, MnemonicError> {
        self.get(language)
            .ok_or(MnemonicError::MissingWordlist(language))
    }

    /// Iterate over the loaded languages in identifier order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.lists.keys().copied()
    }

    /// Iterate over `(language, list)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &Wordlist)> {
        self.lists.iter().map(|(language, list)| (*language, list.as_ref()))
    }

    /// Return the number of loaded lists.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Return true if no list is loaded.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
