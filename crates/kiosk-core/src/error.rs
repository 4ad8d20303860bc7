use thiserror::Error;

#[derive(Error, Debug)]
pub enum KioskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid navigation target: catalog entry {entry} requested, catalog has {len} entries")]
    InvalidNavigationTarget { entry: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KioskError>;
