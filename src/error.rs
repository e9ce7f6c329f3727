use std::fmt;
use std::path::PathBuf;

/// Errors raised while setting a game up. The per-frame loop itself has no
/// failure paths.
#[derive(Debug)]
pub enum GameError {
    /// No image or font registered under this name
    MissingAsset(String),

    /// Config file could not be parsed
    Config { path: PathBuf, reason: String },

    /// Underlying I/O failure (config file, terminal)
    Io(std::io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::MissingAsset(name) => {
                write!(f, "Missing asset: {}", name)
            }
            GameError::Config { path, reason } => {
                write!(f, "Invalid config {}: {}", path.display(), reason)
            }
            GameError::Io(err) => {
                write!(f, "I/O error: {}", err)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}
