//! Error types for the BFV API client

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BfvError>;

#[derive(Error, Debug)]
pub enum BfvError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Team ID not provided and {env_var} environment variable not set")]
    MissingTeamId { env_var: String },

    #[error("{kind} ID must not be empty")]
    EmptyId { kind: &'static str },

    #[error("Failed to parse match day: {0}")]
    InvalidMatchDay(#[from] std::num::ParseIntError),

    #[error("Invalid result string for {home} vs {guest}: {result}")]
    InvalidResult {
        home: String,
        guest: String,
        result: String,
    },

    #[error("Unknown match event type: {0}")]
    UnknownEventType(i8),

    #[error("No tiebreaker given for head-to-head sort")]
    MissingHeadToHeadTiebreakers,

    #[error("Standings contain an unresolved tie between: {teams:?}")]
    UnresolvedTie { teams: Vec<String> },
}
