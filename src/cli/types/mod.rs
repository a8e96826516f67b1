//! Type-safe wrappers and selector enums for the BFV CLI.

pub mod ids;
pub mod scopes;

pub use ids::{ClubId, CompetitionId, MatchId, TeamId};
pub use scopes::{MatchTypeFilter, StandingsScope};
