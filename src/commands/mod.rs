pub mod about;
pub mod account;
pub mod config;
pub mod create;
pub mod delete;
pub mod link;
pub mod reset;
pub mod update;

use thiserror::Error;

/// Argument problems caught before any request is sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("A destination URL is required")]
    EmptyDestination,

    #[error("At least one link id is required")]
    NoIds,

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("`link {action}` is not implemented yet. Use `shortlink {action}` instead.")]
    NotImplemented { action: &'static str },
}

fn require(value: &str, field: &'static str) -> Result<(), CommandError> {
    if value.trim().is_empty() {
        Err(CommandError::EmptyField(field))
    } else {
        Ok(())
    }
}
