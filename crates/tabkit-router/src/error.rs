//! Router error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),
}
