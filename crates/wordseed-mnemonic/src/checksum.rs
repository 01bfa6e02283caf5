//! SHA-256 derived checksum bits appended to entropy.

use wordseed_primitives::hash::sha256;

use crate::constants::MAX_ENTROPY_LEN;
use crate::MnemonicError;

/// Compute the checksum of `entropy`.
///
/// The checksum is the `len(entropy) / 4` most significant bits of
/// SHA-256(entropy).
///
/// # Arguments
/// * `entropy` - Between 4 and 32 bytes, a multiple of 4.
///
/// # Returns
/// `(checksum, bit_count)` with the checksum right-aligned, or
/// `InvalidEntropyLength` for an unsupported length.
pub fn checksum_bits(entropy: &[u8]) -> Result<(u8, u32), MnemonicError> {
    let len = entropy.len();
    if len == 0 || len > MAX_ENTROPY_LEN || len % 4 != 0 {
        return Err(MnemonicError::InvalidEntropyLength(len));
    }
    let size = (len / 4) as u32;
    let hash = sha256(entropy);
    Ok((hash[0] >> (8 - size), size))
}

/// Compute the checksum of `entropy` left-aligned in a byte.
///
/// This is the byte appended to the entropy before it is split into words,
/// and the byte a decoded phrase ends with; the unused low bits are zero.
pub fn checksum_byte(entropy: &[u8]) -> Result<u8, MnemonicError> {
    let (checksum, bits) = checksum_bits(entropy)?;
    Ok(checksum << (8 - bits))
}
