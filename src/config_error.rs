//! Error handling for the rig definition loader

use std::io;

/// Reported when a rig definition file cannot be read or does not describe a
/// usable six axis mechanism.
#[derive(Debug)]
pub enum ConfigError {
    IoError(io::Error),
    ParseError(String),
    InvalidLength { expected: usize, found: usize },
    BadAngle(String),
    BadProfile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ConfigError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            ConfigError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            ConfigError::InvalidLength { expected, found } =>
                write!(f, "Invalid Length: expected {}, found {}", expected, found),
            ConfigError::BadAngle(ref msg) =>
                write!(f, "Bad angle: {}", msg),
            ConfigError::BadProfile(ref msg) =>
                write!(f, "Unknown easing profile: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::IoError(err)
    }
}
