use std::io::Write;

use anyhow::{Context, Result};
use rand::{CryptoRng, RngCore};
use splash_naming::HostName;

/// Writes one `splash-` line to `out`.
///
/// The name is fully generated before anything is written, so a random
/// source failure leaves `out` untouched.
pub fn run<R, W>(rng: &mut R, out: &mut W) -> Result<()>
where
    R: RngCore + CryptoRng + ?Sized,
    W: Write,
{
    let host = HostName::try_generate(rng).context("failed to generate host name")?;
    writeln!(out, "{host}").context("failed to write host name")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;
    use std::io;

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!()
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!()
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!()
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new(io::Error::new(
                io::ErrorKind::Other,
                "no entropy",
            )))
        }
    }

    impl CryptoRng for BrokenRng {}

    #[test]
    fn writes_single_prefixed_line() {
        let mut out = Vec::new();
        run(&mut OsRng, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("splash-"));
        assert!(text.ends_with('\n'));
        assert_eq!(text.len(), "splash-".len() + 10 + 1);
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn random_source_failure_writes_nothing() {
        let mut out = Vec::new();
        let err = run(&mut BrokenRng, &mut out).unwrap_err();
        assert!(out.is_empty());
        let chain = format!("{err:#}");
        assert!(chain.contains("failed to generate host name"), "{chain}");
        assert!(chain.contains("secure random source failed"), "{chain}");
    }
}
