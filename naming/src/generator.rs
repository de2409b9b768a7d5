use std::fmt;
use std::str::FromStr;

use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::constants::{name_bits, ALPHABET, NAME_LENGTH, PREFIX};
use crate::error::{Error, Result};

// Largest multiple of the alphabet size that fits in the u32 draw space.
// Draws at or above it are discarded so `value % 36` stays uniform.
const DRAW_LIMIT: u64 = (1u64 << 32) / ALPHABET.len() as u64 * ALPHABET.len() as u64;

fn index_for(value: u32) -> Option<usize> {
    let value = u64::from(value);
    (value < DRAW_LIMIT).then(|| (value % ALPHABET.len() as u64) as usize)
}

fn try_draw_char<R: RngCore + ?Sized>(rng: &mut R) -> Result<char> {
    loop {
        let mut buf = [0u8; 4];
        rng.try_fill_bytes(&mut buf)?;
        if let Some(index) = index_for(u32::from_le_bytes(buf)) {
            return Ok(char::from(ALPHABET[index]));
        }
    }
}

fn draw_char<R: RngCore + ?Sized>(rng: &mut R) -> char {
    loop {
        if let Some(index) = index_for(rng.next_u32()) {
            return char::from(ALPHABET[index]);
        }
    }
}

/// Generates `NAME_LENGTH` characters drawn uniformly, with replacement, from
/// [`ALPHABET`].
///
/// Panics if the random source fails, following the `RngCore::next_u32`
/// contract. Use [`try_generate_host`] to get the failure as an error.
pub fn generate_host<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> String {
    (0..NAME_LENGTH).map(|_| draw_char(rng)).collect()
}

/// Fallible form of [`generate_host`].
///
/// Either the whole name is produced or the source error is returned; no
/// partial name escapes.
pub fn try_generate_host<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<String> {
    let mut name = String::with_capacity(NAME_LENGTH);
    for _ in 0..NAME_LENGTH {
        name.push(try_draw_char(rng)?);
    }
    Ok(name)
}

/// Prepends [`PREFIX`] to a generated name.
pub fn host_line(name: &str) -> String {
    format!("{PREFIX}{name}")
}

/// A generated name. Displays with the `splash-` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostName(String);

impl HostName {
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let host = Self(generate_host(rng));
        debug!(host = %host, bits = name_bits(), "generated host name");
        host
    }

    pub fn try_generate<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        let host = Self(try_generate_host(rng)?);
        debug!(host = %host, bits = name_bits(), "generated host name");
        Ok(host)
    }

    /// The random part, without the prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}", self.0)
    }
}

impl FromStr for HostName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s
            .strip_prefix(PREFIX)
            .ok_or_else(|| Error::InvalidHostName(s.to_string()))?;
        let valid = name.len() == NAME_LENGTH && name.bytes().all(|b| ALPHABET.contains(&b));
        if !valid {
            return Err(Error::InvalidHostName(s.to_string()));
        }
        Ok(Self(name.to_string()))
    }
}
