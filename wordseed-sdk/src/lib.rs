#![deny(missing_docs)]

//! wordseed SDK - Complete SDK.
//!
//! Re-exports all wordseed components for convenient single-crate usage.

pub use wordseed_mnemonic as mnemonic;
pub use wordseed_primitives as primitives;

pub use wordseed_mnemonic::{
    detect_language, list_languages, normalize_string, to_seed, ErrorKind, Language, Mnemonic,
    MnemonicError, Seed, Wordlist, WordlistRegistry,
};
