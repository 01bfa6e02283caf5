//! Seed derivation from a mnemonic and passphrase.

use std::fmt;

use wordseed_primitives::hash::pbkdf2_sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::constants::{PBKDF2_ROUNDS, SALT_PREFIX, SEED_LEN};
use crate::normalize::normalize_string;

/// A 64-byte seed derived from a mnemonic and passphrase.
///
/// The buffer is wiped on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Return the raw 64 seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Encode the seed as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Derive the seed for `mnemonic` protected by `passphrase`.
///
/// Both inputs are NFKD-normalized first, so composed and decomposed
/// spellings of the same text give the same seed. The mnemonic is not
/// validated; any text is accepted. Pass `""` for no passphrase.
///
/// PBKDF2 with HMAC-SHA512, 2048 rounds, password = mnemonic,
/// salt = `"mnemonic" + passphrase`.
pub fn to_seed(mnemonic: &str, passphrase: &str) -> Seed {
    let password = Zeroizing::new(normalize_string(mnemonic));
    let salt_text = Zeroizing::new(format!("{SALT_PREFIX}{passphrase}"));
    let salt = Zeroizing::new(normalize_string(&salt_text));
    Seed(pbkdf2_sha512(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS))
}
