/// Digits followed by lowercase ASCII letters.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random characters after the prefix.
pub const NAME_LENGTH: usize = 10;

pub const PREFIX: &str = "splash-";

/// Bits of entropy in one generated name, `NAME_LENGTH * log2(36)`.
///
/// Informational only; roughly 51.7 bits.
pub fn name_bits() -> f64 {
    NAME_LENGTH as f64 * (ALPHABET.len() as f64).log2()
}
