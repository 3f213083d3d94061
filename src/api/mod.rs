pub mod about;
pub mod account;
pub mod client;
pub mod links;
pub mod outcome;

#[cfg(test)]
pub mod test_server;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API URL is not configured. Run `shortlink config --url <url>` first.")]
    NotConfigured,

    /// The server answered with a status that maps to a user-facing failure.
    #[error("{message}")]
    Rejected { message: String },
}
