/// wordseed - Cryptographic and bit-level primitives.
///
/// This crate provides the building blocks the mnemonic codec is layered on:
/// - Hash functions (SHA-256)
/// - PBKDF2 key stretching with HMAC-SHA512
/// - Rolling bit-group reader and writer for packing fixed-width groups
///   into bytes and back

pub mod hash;
pub mod util;

mod error;
pub use error::PrimitivesError;
