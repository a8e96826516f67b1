//! BFV API CLI Library
//!
//! A Rust library for the public widget API of the Bavarian Football
//! Association (BFV), providing typed access to teams, clubs, competitions,
//! match reports and standings, plus a computed league table.
//!
//! ## Features
//!
//! - **Typed Endpoints**: One method per widget/rest endpoint with validated
//!   response models
//! - **Result Parsing**: Turns BFV result strings (including call-offs,
//!   no-shows and rulings) into numeric scores
//! - **League Tables**: Builds standings from played matches with a
//!   configurable tiebreaker chain, including head-to-head sub-tables
//! - **Response Caching**: Completed match days are cached on disk and only
//!   re-fetched on request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bfv_api::{BfvClient, TeamId};
//!
//! # async fn example() -> bfv_api::Result<()> {
//! let client = BfvClient::new();
//! let team_id = TeamId::new("016PE7FISS000000VV0AG811VTE5EA5R");
//!
//! // Fetch the team's fixtures and the competition they belong to
//! let matches = client.team_matches(&team_id).await?;
//! println!("{}: {} fixtures", matches.team.name, matches.matches.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your team ID to avoid passing it in every command:
//! ```bash
//! export BFV_API_TEAM_ID=016PE7FISS000000VV0AG811VTE5EA5R
//! ```

pub mod bfv;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod standings;

// Re-export commonly used types
pub use bfv::http::{BfvClient, BFV_BASE_URL};
pub use cli::types::{ClubId, CompetitionId, MatchId, TeamId};
pub use error::{BfvError, Result};
pub use standings::{PlayedMatch, TeamRecord, Tiebreaker};

pub const TEAM_ID_ENV_VAR: &str = "BFV_API_TEAM_ID";
