//! Fehler-Typen für den Konsolen-Host.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
