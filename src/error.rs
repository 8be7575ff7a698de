//! Error types for carbon-share

use thiserror::Error;

/// Errors raised by the library
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Input rejected before anything was sent
    #[error("invalid input: {0}")]
    Validation(String),

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The optimize/sharing backend answered with an error
    #[error("backend error: {0}")]
    Backend(String),

    /// The identity provider could not answer the lookup
    #[error("identity lookup failed: {0}")]
    Identity(String),

    /// Interactive prompt could not be shown or read
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Reading input or the config file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured base URL is malformed
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The config file is not valid TOML
    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A background task failed
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
