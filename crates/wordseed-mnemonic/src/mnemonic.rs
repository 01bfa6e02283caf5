//! Entropy to phrase encoding and back, bound to one word list.
//!
//! Encoding appends the checksum byte to the entropy and slices the result
//! into 11-bit groups, one word per group. Decoding re-packs the word
//! indices into bytes, splits off the trailing checksum byte and verifies it
//! against a fresh checksum of the remaining entropy.

use std::sync::Arc;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use wordseed_primitives::util::{BitGroupReader, BitGroupWriter};
use zeroize::{Zeroize, Zeroizing};

use crate::checksum::checksum_byte;
use crate::constants::{BITS_PER_WORD, VALID_ENTROPY_LENGTHS, VALID_STRENGTHS, VALID_WORD_COUNTS};
use crate::{Language, MnemonicError, Wordlist, WordlistRegistry};

/// A mnemonic codec bound to a single word list.
#[derive(Debug, Clone)]
pub struct Mnemonic {
    wordlist: Arc<Wordlist>,
}

impl Mnemonic {
    /// Create a codec over `wordlist`.
    pub fn new(wordlist: Arc<Wordlist>) -> Self {
        Mnemonic { wordlist }
    }

    /// Create a codec over the registry's list for `language`.
    ///
    /// # Returns
    /// The codec, or `MissingWordlist` if the language is not loaded.
    pub fn from_registry(
        registry: &WordlistRegistry,
        language: Language,
    ) -> Result<Self, MnemonicError> {
        Ok(Self::new(registry.require(language)?))
    }

    /// Return the language of the bound word list.
    pub fn language(&self) -> Language {
        self.wordlist.language()
    }

    /// Return the bound word list.
    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// Return the phrase delimiter for the bound language.
    pub fn delimiter(&self) -> &'static str {
        self.wordlist.delimiter()
    }

    /// Generate a new phrase from operating system randomness.
    ///
    /// # Arguments
    /// * `strength` - Entropy size in bits: 128, 160, 192, 224 or 256.
    ///
    /// # Returns
    /// A phrase of 12 to 24 words, `InvalidStrength`, or `Rng` if the OS
    /// random source fails.
    pub fn generate(&self, strength: usize) -> Result<String, MnemonicError> {
        self.generate_with_rng(&mut OsRng, strength)
    }

    /// Generate a new phrase from entropy drawn from `rng`.
    pub fn generate_with_rng<R>(&self, rng: &mut R, strength: usize) -> Result<String, MnemonicError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        if !VALID_STRENGTHS.contains(&strength) {
            return Err(MnemonicError::InvalidStrength(strength));
        }
        let mut entropy = Zeroizing::new(vec![0u8; strength / 8]);
        rng.try_fill_bytes(&mut entropy)
            .map_err(|e| MnemonicError::Rng(e.to_string()))?;
        self.to_mnemonic(&entropy)
    }

    /// Encode `entropy` as a phrase.
    ///
    /// # Arguments
    /// * `entropy` - 16, 20, 24, 28 or 32 bytes.
    ///
    /// # Returns
    /// The words joined by the language delimiter, or
    /// `InvalidEntropyLength`.
    pub fn to_mnemonic(&self, entropy: &[u8]) -> Result<String, MnemonicError> {
        if !VALID_ENTROPY_LENGTHS.contains(&entropy.len()) {
            return Err(MnemonicError::InvalidEntropyLength(entropy.len()));
        }

        let mut bytes = Zeroizing::new(Vec::with_capacity(entropy.len() + 1));
        bytes.extend_from_slice(entropy);
        bytes.push(checksum_byte(entropy)?);

        // The checksum padding is sized so the trailing partial group is
        // always zero bits, which the reader drops.
        let words: Vec<&str> = BitGroupReader::new(&bytes, BITS_PER_WORD)?
            .map(|index| self.wordlist.word(index))
            .collect();
        Ok(words.join(self.delimiter()))
    }

    /// Decode a phrase back to its entropy.
    ///
    /// The phrase is split on the language delimiter only.
    ///
    /// # Returns
    /// The entropy, or `InvalidWordCount`, `UnknownWord` or
    /// `ChecksumMismatch`.
    pub fn to_entropy(&self, phrase: &str) -> Result<Vec<u8>, MnemonicError> {
        let words: Vec<&str> = phrase.split(self.delimiter()).collect();
        self.to_entropy_words(&words)
    }

    /// Decode an already split phrase back to its entropy.
    pub fn to_entropy_words<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<u8>, MnemonicError> {
        if !VALID_WORD_COUNTS.contains(&words.len()) {
            return Err(MnemonicError::InvalidWordCount(words.len()));
        }

        let mut writer = BitGroupWriter::with_capacity(BITS_PER_WORD, words.len())?;
        for word in words {
            let word = word.as_ref();
            let index = self
                .wordlist
                .lookup(word)
                .ok_or_else(|| MnemonicError::UnknownWord(word.to_string()))?;
            writer.write_group(index)?;
        }

        let mut entropy = writer.into_bytes();
        let Some(checksum) = entropy.pop() else {
            return Err(MnemonicError::ChecksumMismatch);
        };
        if checksum != checksum_byte(&entropy)? {
            entropy.zeroize();
            tracing::trace!(language = %self.language(), words = words.len(), "phrase failed checksum");
            return Err(MnemonicError::ChecksumMismatch);
        }
        Ok(entropy)
    }

    /// Return true if `phrase` decodes cleanly.
    pub fn check(&self, phrase: &str) -> bool {
        match self.to_entropy(phrase) {
            Ok(mut entropy) => {
                entropy.zeroize();
                true
            }
            Err(_) => false,
        }
    }

    /// Complete a word prefix.
    ///
    /// Returns `prefix` itself if it is already a word, the single word it
    /// is a prefix of if there is exactly one, and `prefix` unchanged
    /// otherwise.
    pub fn expand_word(&self, prefix: &str) -> String {
        if self.wordlist.contains(prefix) {
            return prefix.to_string();
        }
        let mut matches = self.wordlist.words_with_prefix(prefix);
        match (matches.next(), matches.next()) {
            (Some(word), None) => word.to_string(),
            _ => prefix.to_string(),
        }
    }

    /// Complete every space-separated token of `phrase`.
    ///
    /// The result is joined with the language delimiter and always has as
    /// many words as the input.
    pub fn expand(&self, phrase: &str) -> String {
        phrase
            .split(' ')
            .map(|token| self.expand_word(token))
            .collect::<Vec<_>>()
            .join(self.delimiter())
    }
}
