//! Bearer token minting.

use argon2::password_hash::rand_core::{OsRng, RngCore};

/// Length of a minted token string: 32 random bytes, hex encoded.
pub const TOKEN_LENGTH: usize = 64;

/// Generates a cryptographically secure random token string.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_LENGTH / 2];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_have_fixed_length_hex() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn token_decodes_back_to_its_random_bytes() {
        let bytes = hex::decode(generate_token()).unwrap();
        assert_eq!(bytes.len(), TOKEN_LENGTH / 2);
    }

    #[test]
    fn tokens_differ() {
        assert_ne!(generate_token(), generate_token());
    }
}
