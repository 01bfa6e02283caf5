//! BIP39 mnemonic codes.
//!
//! Converts between raw entropy and checksummed word phrases, detects the
//! language of a phrase, and derives a 64-byte seed from a phrase and an
//! optional passphrase.
//!
//! Word lists are supplied by the caller through a [`WordlistRegistry`],
//! built once and shared:
//!
//! ```no_run
//! use wordseed_mnemonic::constants::DEFAULT_STRENGTH;
//! use wordseed_mnemonic::{detect_language, to_seed, Language, Mnemonic, WordlistRegistry};
//!
//! let registry = WordlistRegistry::embedded()?;
//! let english = Mnemonic::from_registry(&registry, Language::English)?;
//!
//! let phrase = english.generate(DEFAULT_STRENGTH)?;
//! assert!(english.check(&phrase));
//! assert_eq!(detect_language(&registry, &phrase)?, Language::English);
//!
//! let seed = to_seed(&phrase, "optional passphrase");
//! assert_eq!(seed.as_bytes().len(), 64);
//! # Ok::<(), wordseed_mnemonic::MnemonicError>(())
//! ```

pub mod checksum;
pub mod constants;
mod detect;
mod error;
mod language;
mod mnemonic;
mod normalize;
mod registry;
mod seed;
mod wordlist;

#[cfg(test)]
mod testing;

pub use detect::detect_language;
pub use error::{ErrorKind, MnemonicError};
pub use language::{list_languages, Language};
pub use mnemonic::Mnemonic;
pub use normalize::normalize_string;
pub use registry::WordlistRegistry;
pub use seed::{to_seed, Seed};
pub use wordlist::Wordlist;
