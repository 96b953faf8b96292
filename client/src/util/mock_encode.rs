//! Placeholder text encoder standing in for hashing and signing.
//!
//! DESIGN
//! ======
//! The demo needs something that *looks* like a digest without implying any
//! cryptographic guarantee. Output is plain Base64 (RFC 4648 alphabet with
//! `=` padding) of the UTF-8 bytes, so it is fully reversible and trivially
//! forgeable. Never swap in a real primitive here without renaming callers.

#[cfg(test)]
#[path = "mock_encode_test.rs"]
mod mock_encode_test;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const PAD: char = '=';

/// Encode `input` as Base64. Empty input yields an empty string.
pub fn mock_encode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);

    for chunk in bytes.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        out.push(sextet(b0 >> 2));
        out.push(sextet(((b0 & 0b0000_0011) << 4) | (b1 >> 4)));
        if chunk.len() > 1 {
            out.push(sextet(((b1 & 0b0000_1111) << 2) | (b2 >> 6)));
        } else {
            out.push(PAD);
        }
        if chunk.len() > 2 {
            out.push(sextet(b2 & 0b0011_1111));
        } else {
            out.push(PAD);
        }
    }

    out
}

/// Encode `input` and keep at most `max_chars` leading characters.
///
/// The encoded form is ASCII, so truncating by byte index is exact.
pub fn mock_encode_prefix(input: &str, max_chars: usize) -> String {
    let mut encoded = mock_encode(input);
    encoded.truncate(max_chars);
    encoded
}

fn sextet(value: u8) -> char {
    char::from(ALPHABET[usize::from(value & 0b0011_1111)])
}
