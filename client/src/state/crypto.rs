//! Simulated key generation and signing for the cryptography view.
//!
//! DESIGN
//! ======
//! Keys are independent random tokens with fixed prefixes; there is no
//! mathematical link between them. Signatures are the mock encoding of the
//! payload concatenated with the private key. Nothing here is cryptography.

#[cfg(test)]
#[path = "crypto_test.rs"]
mod crypto_test;

use rand::Rng;

use crate::state::nodes::NetworkNode;
use crate::util::mock_encode::mock_encode_prefix;

pub const PUBLIC_KEY_PREFIX: &str = "pk_";
pub const PRIVATE_KEY_PREFIX: &str = "sk_";
pub const SIGNATURE_PREFIX: &str = "sig_";

/// Random characters following a key prefix.
pub const KEY_TOKEN_LEN: usize = 10;
/// Encoded characters following the signature prefix.
pub const SIGNATURE_BODY_LEN: usize = 20;

const TOKEN_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Stand-in for a public/private key pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    pub public_key: String,
    pub private_key: String,
}

impl KeyPair {
    /// Draw two independent tokens. The private token is redrawn on the
    /// (vanishingly rare) chance it matches the public one.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let public_token = random_token(rng);
        let mut private_token = random_token(rng);
        while private_token == public_token {
            private_token = random_token(rng);
        }
        Self {
            public_key: format!("{PUBLIC_KEY_PREFIX}{public_token}"),
            private_key: format!("{PRIVATE_KEY_PREFIX}{private_token}"),
        }
    }
}

fn random_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..KEY_TOKEN_LEN)
        .map(|_| char::from(TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())]))
        .collect()
}

/// Derive the mock signature for `payload` under `private_key`.
pub fn sign(payload: &str, private_key: &str) -> String {
    let body = mock_encode_prefix(&format!("{payload}{private_key}"), SIGNATURE_BODY_LEN);
    format!("{SIGNATURE_PREFIX}{body}")
}

/// Retained state of the cryptography view.
#[derive(Clone, Debug, Default)]
pub struct CryptoState {
    pub key_pair: Option<KeyPair>,
    pub signature: Option<String>,
    pub nodes: Vec<NetworkNode>,
}

impl CryptoState {
    /// Replace any existing key pair with a fresh one.
    pub fn generate_keys<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let pair = KeyPair::generate(rng);
        log::debug!("generated key pair public={}", pair.public_key);
        self.key_pair = Some(pair);
    }

    /// Whether the sign action is available.
    #[must_use]
    pub fn can_sign(&self) -> bool {
        self.key_pair.is_some()
    }

    /// Sign `payload` with the current private key, overwriting any previous
    /// signature. No-op without a key pair or with an empty payload.
    pub fn sign_data(&mut self, payload: &str) {
        let Some(pair) = &self.key_pair else {
            return;
        };
        if payload.is_empty() {
            return;
        }
        let signature = sign(payload, &pair.private_key);
        log::info!("signed payload signature={signature}");
        self.signature = Some(signature);
    }
}
