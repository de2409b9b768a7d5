use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("secure random source failed: {0}")]
    RandomSource(#[from] rand::Error),
    #[error("invalid host name: {0}")]
    InvalidHostName(String),
}
