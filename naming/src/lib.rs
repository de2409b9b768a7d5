//! Short random host names of the form `splash-xxxxxxxxxx`.
//!
//! Names are drawn from a cryptographically secure source handed in by the
//! caller. Nothing is remembered between calls, so uniqueness rests entirely
//! on the entropy of the alphabet and length (see [`name_bits`]).

/// Alphabet, length and prefix of generated names
pub mod constants;
/// Error type shared by the crate
pub mod error;
/// Name generation
pub mod generator;

pub use constants::{name_bits, ALPHABET, NAME_LENGTH, PREFIX};
pub use error::{Error, Result};
pub use generator::{generate_host, host_line, try_generate_host, HostName};
