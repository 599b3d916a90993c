//! Token generation and digesting

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngExt;
use sha2::{Digest, Sha256};

/// 62^32 possible tokens, roughly 190 bits
pub const TOKEN_LENGTH: usize = 32;
pub const SAFE: [char; 62] = [
	'0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
	'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B',
	'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
	'V', 'W', 'X', 'Y', 'Z',
];

/// Generate a fresh plaintext bearer token
pub fn random_token() -> Box<str> {
	let mut rng = rand::rng();
	let mut result = String::with_capacity(TOKEN_LENGTH);

	for _ in 0..TOKEN_LENGTH {
		result.push(SAFE[rng.random_range(0..SAFE.len())]);
	}
	result.into()
}

/// One-way digest of a plaintext token. This is the only form ever stored.
pub fn digest_token(token: &str) -> Box<str> {
	let mut hasher = Sha256::new();
	hasher.update(token.as_bytes());
	URL_SAFE_NO_PAD.encode(hasher.finalize()).into()
}


// vim: ts=4
