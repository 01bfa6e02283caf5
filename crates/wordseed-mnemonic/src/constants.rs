//! BIP39 protocol constants.

use wordseed_primitives::hash::PBKDF2_SHA512_LEN;

/// Number of entries in every word list.
pub const WORDLIST_LEN: usize = 2048;

/// Bits encoded by a single word.
pub const BITS_PER_WORD: u32 = 11;

/// Accepted entropy lengths in bytes.
pub const VALID_ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// Accepted phrase lengths in words, index-aligned with `VALID_ENTROPY_LENGTHS`.
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Accepted generation strengths in bits.
pub const VALID_STRENGTHS: [usize; 5] = [128, 160, 192, 224, 256];

/// Strength used when the caller has no preference.
pub const DEFAULT_STRENGTH: usize = 128;

/// Longest entropy the checksum is defined for.
pub const MAX_ENTROPY_LEN: usize = 32;

/// PBKDF2 iteration count for seed derivation.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Length of a derived seed in bytes.
pub const SEED_LEN: usize = PBKDF2_SHA512_LEN;

/// Prefix prepended to the passphrase to form the PBKDF2 salt.
pub const SALT_PREFIX: &str = "mnemonic";
