//! Error types for window-grid operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid slot interval: {0} minutes (must be in 1..=1440)")]
    InvalidInterval(u32),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
