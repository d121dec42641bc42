//! Errors raised by the shared guard.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GuardError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: {caller} is missing role {role}")]
    Unauthorized { caller: String, role: String },

    #[error("Contract is paused")]
    Paused,

    #[error("Invalid argument {field}: {reason}")]
    InvalidArgument { field: String, reason: String },
}

impl GuardError {
    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        GuardError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
