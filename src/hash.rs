// src/hash.rs

//! Content names for transformed style blocks
//!
//! A content name is the first 8 hex characters of the SHA-256 digest of the
//! final CSS text. It identifies identical style blocks within one build; it
//! is not a security boundary (32 bits leaves room for collisions).

use sha2::{Digest, Sha256};

/// Length of a content name in hex characters
pub const NAME_LEN: usize = 8;

/// Full lowercase hex SHA-256 digest of `data`
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Short content name for a block of CSS text
pub fn hash_name(css: &str) -> String {
    let mut digest = sha256_hex(css.as_bytes());
    digest.truncate(NAME_LEN);
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_value() {
        assert_eq!(
            sha256_hex(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_hash_name_is_prefix() {
        assert_eq!(hash_name("hello"), "2cf24dba");
        assert_eq!(hash_name(""), "e3b0c442");
    }

    #[test]
    fn test_hash_name_shape() {
        let name = hash_name("color: red;");
        assert_eq!(name.len(), NAME_LEN);
        assert!(name.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_hash_name_deterministic() {
        assert_eq!(hash_name("&[id] { cursor: pointer; }"), hash_name("&[id] { cursor: pointer; }"));
        assert_ne!(hash_name("&[id] { cursor: pointer; }"), hash_name("&[id] { cursor: pointer;}"));
    }
}
