// Lookup error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No medication name given")]
    MissingQuery,
}

pub type Result<T> = std::result::Result<T, LookupError>;
