//! Selector enums that map onto API path segments.

use std::fmt;

/// Scope of an official table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StandingsScope {
    /// Overall table
    All,
    /// Home matches only
    Home,
    /// Away matches only
    Away,
    /// First half of the season
    FirstHalf,
    /// Second half of the season
    SecondHalf,
}

impl StandingsScope {
    /// Path segment of the table endpoint. The overall table is an empty
    /// segment on the wire.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            StandingsScope::All => "",
            StandingsScope::Home => "home",
            StandingsScope::Away => "away",
            StandingsScope::FirstHalf => "firsthalfseason",
            StandingsScope::SecondHalf => "secondhalfseason",
        }
    }
}

impl fmt::Display for StandingsScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StandingsScope::All => "all",
            StandingsScope::Home => "home",
            StandingsScope::Away => "away",
            StandingsScope::FirstHalf => "first-half",
            StandingsScope::SecondHalf => "second-half",
        };
        write!(f, "{}", s)
    }
}

/// Which of a club's fixtures to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MatchTypeFilter {
    /// All fixtures
    All,
    /// Home fixtures only
    Home,
    /// Away fixtures only
    Away,
}

impl MatchTypeFilter {
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            MatchTypeFilter::All => "all",
            MatchTypeFilter::Home => "home",
            MatchTypeFilter::Away => "away",
        }
    }
}

impl fmt::Display for MatchTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path_segment())
    }
}
