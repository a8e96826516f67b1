//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{ClubId, CompetitionId, MatchId, MatchTypeFilter, StandingsScope, TeamId};

use crate::standings::Tiebreaker;

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Fetch a team's fixtures and results.
    TeamMatches {
        /// Team ID (or set `BFV_API_TEAM_ID` env var).
        #[clap(long, short)]
        team_id: Option<TeamId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Fetch a team's squad.
    TeamSquad {
        /// Team ID (or set `BFV_API_TEAM_ID` env var).
        #[clap(long, short)]
        team_id: Option<TeamId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Fetch a competition with its fixtures for one match day.
    Competition {
        /// Competition ID (the `compoundId`).
        #[clap(long, short)]
        competition_id: CompetitionId,

        /// Match day to show instead of the current one.
        #[clap(long, short)]
        match_day: Option<u32>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Fetch a competition's top scorers.
    TopScorer {
        /// Competition ID (the `compoundId`).
        #[clap(long, short)]
        competition_id: CompetitionId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Fetch a competition's official table.
    Standings {
        /// Competition ID (the `compoundId`).
        #[clap(long, short)]
        competition_id: CompetitionId,

        /// Table scope.
        #[clap(long, short, value_enum, default_value_t = StandingsScope::All)]
        scope: StandingsScope,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Fetch a club's fixtures.
    ClubMatches {
        /// Club ID.
        #[clap(long, short)]
        club_id: ClubId,

        /// Restrict to home or away fixtures.
        #[clap(long, short, value_enum, default_value_t = MatchTypeFilter::All)]
        match_type: MatchTypeFilter,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Fetch a club's information, addressed by club or by one of its teams.
    ClubInfo {
        /// Club ID.
        #[clap(long, short)]
        club_id: Option<ClubId>,

        /// Team ID (or set `BFV_API_TEAM_ID` env var).
        #[clap(long, short)]
        team_id: Option<TeamId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Fetch a match report.
    MatchReport {
        /// Match ID.
        #[clap(long, short)]
        match_id: MatchId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Compute the league table of a team's competition from its played
    /// matches.
    ///
    /// Resolves the competition from the team's fixtures, fetches every
    /// match day up to the current one (cached where possible) and ranks
    /// the played matches with the configured tiebreakers.
    Table {
        /// Team ID (or set `BFV_API_TEAM_ID` env var).
        #[clap(long, short)]
        team_id: Option<TeamId>,

        /// Force refresh from the API, overwriting cached match days.
        #[clap(long)]
        refresh: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Ranking criteria in order (repeatable): `-b points -b head-to-head`.
        #[clap(long = "tiebreaker", short = 'b', value_enum)]
        tiebreakers: Option<Vec<Tiebreaker>>,

        /// Print progress while fetching.
        #[clap(long)]
        verbose: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "bfv-api", about = "Bavarian Football Association (BFV) CLI")]
pub struct Bfv {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the BFV widget API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
