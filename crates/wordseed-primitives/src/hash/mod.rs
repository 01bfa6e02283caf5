//! Hash function primitives.
//!
//! Provides SHA-256 (used for mnemonic checksums) and PBKDF2 with
//! HMAC-SHA512 as the pseudorandom function (used for seed stretching).

use sha2::{Digest, Sha256, Sha512};

/// Output length of PBKDF2-HMAC-SHA512 when used for seed derivation.
pub const PBKDF2_SHA512_LEN: usize = 64;

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Derive a 64-byte key with PBKDF2, using HMAC-SHA512 as the PRF.
///
/// # Arguments
/// * `password` - The password bytes (the HMAC key).
/// * `salt` - The salt bytes.
/// * `rounds` - Iteration count.
///
/// # Returns
/// The first 64 bytes of the PBKDF2 output stream.
pub fn pbkdf2_sha512(password: &[u8], salt: &[u8], rounds: u32) -> [u8; PBKDF2_SHA512_LEN] {
    let mut output = [0u8; PBKDF2_SHA512_LEN];
    pbkdf2::pbkdf2_hmac::<Sha512>(password, salt, rounds, &mut output);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_DATA: &[u8] = b"this is the data I want to hash";

    // ---- SHA-256 ----

    #[test]
    fn test_sha256_empty_string() {
        let hash = sha256(b"");
        assert_eq!(
            hex::encode(hash),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_string() {
        let hash = sha256(TEST_DATA);
        assert_eq!(
            hex::encode(hash),
            "f88eec7ecabf88f9a64c4100cac1e0c0c4581100492137d1b656ea626cad63e3"
        );
    }

    #[test]
    fn test_sha256_zero_entropy() {
        // First byte 0x37 gives checksum nibble 0x3 for 128-bit zero entropy.
        let hash = sha256(&[0u8; 16]);
        assert_eq!(
            hex::encode(hash),
            "374708fff7719dd5979ec875d56cd2286f6d3cf7ec317a3b25632aab28ec37bb"
        );
    }

    // ---- PBKDF2-HMAC-SHA512 ----

    #[test]
    fn test_pbkdf2_sha512_one_round() {
        let key = pbkdf2_sha512(b"password", b"salt", 1);
        assert_eq!(
            hex::encode(key),
            "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252\
             c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce"
        );
    }

    #[test]
    fn test_pbkdf2_sha512_two_rounds() {
        let key = pbkdf2_sha512(b"password", b"salt", 2);
        assert_eq!(
            hex::encode(key),
            "e1d9c16aa681708a45f5c7c4e215ceb66e011a2e9f0040713f18aefdb866d53c\
             f76cab2868a39b9f7840edce4fef5a82be67335c77a6068e04112754f27ccf4e"
        );
    }

    #[test]
    fn test_pbkdf2_sha512_empty_password() {
        let key = pbkdf2_sha512(b"", b"mnemonic", 2048);
        assert_eq!(
            hex::encode(key),
            "4ed8d4b17698ddeaa1f1559f152f87b5d472f725ca86d341bd0276f1b61197e2\
             1dd5a391f9f5ed7340ff4d4513aab9cce44f9497a5e7ed85fd818876b6eb402e"
        );
    }
}
