use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported masking mode: {0}")]
    UnsupportedMode(String),

    #[error("Detector error: {0}")]
    Detector(String),
}

pub type Result<T> = std::result::Result<T, Error>;
