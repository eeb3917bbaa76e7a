//! SHA-256 hashing with hexadecimal output.

use sha2::{Digest, Sha256};

/// Hashes a sequence of byte strings with SHA-256 and returns the digest
/// as a lowercase hexadecimal string (64 characters).
///
/// The parts are fed to the hasher in order, so the result is the digest of
/// their concatenation.
pub fn sha256_hex<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}
