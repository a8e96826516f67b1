//! Computed league table command.
//!
//! Builds the table of a team's competition from its played matches: the
//! team's fixtures identify the competition, the competition names the
//! current match day, and every match day so far contributes its fixtures.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    bfv::{cache::load_or_fetch_match_day, http::BfvClient},
    cli::types::{CompetitionId, TeamId},
    standings::{rank, PlayedMatch, TeamRecord, Tiebreaker},
    Result,
};

use super::{print_json, resolve_team_id};

/// Configuration parameters for the table command.
#[derive(Debug)]
pub struct TableParams {
    pub team_id: Option<TeamId>,
    pub refresh: bool,
    pub as_json: bool,
    pub tiebreakers: Option<Vec<Tiebreaker>>,
    pub verbose: bool,
}

/// One row of the rendered table.
#[derive(Debug, Serialize)]
pub struct TableRow {
    pub rank: usize,
    pub team: String,
    pub games: u32,
    pub points: i32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub fairplay: u32,
}

impl TableRow {
    fn new(rank: usize, record: &TeamRecord) -> Self {
        Self {
            rank,
            team: record.name.clone(),
            games: record.games,
            points: record.points,
            wins: record.wins,
            draws: record.draws,
            losses: record.losses,
            goals_for: record.goals_for,
            goals_against: record.goals_against,
            fairplay: record.fairplay,
        }
    }
}

/// Handle the table command
pub async fn handle_table(params: TableParams) -> Result<()> {
    let team_id = resolve_team_id(params.team_id)?;
    let client = BfvClient::new();

    if params.verbose {
        println!("Resolving competition for team {}...", team_id);
    }
    let team_matches = client.team_matches(&team_id).await?;
    let competition_id = CompetitionId::new(team_matches.team.compound_id);

    let competition = client.competition(&competition_id).await?;
    let current_day: u32 = competition.actual_match_day.parse()?;
    if params.verbose {
        println!(
            "{} {}: match day {}",
            competition.division_name, competition.division_suffix, current_day
        );
    }

    // all matches played so far; the current day is still moving, so it
    // bypasses the cache
    let mut fixtures = Vec::new();
    for day in 1..=current_day {
        let day_refresh = params.refresh || day == current_day;
        let day_data = load_or_fetch_match_day(&client, &competition_id, day, day_refresh).await?;
        fixtures.extend(day_data.matches);
    }

    // keep matches with a score; deferred fixtures are listed under two
    // match days, so duplicates are dropped
    let mut seen = HashSet::new();
    let mut played = Vec::new();
    for fixture in fixtures {
        let Some((home_score, guest_score)) = fixture.parsed_result()? else {
            continue;
        };
        let m = PlayedMatch::new(
            fixture.home_team_name,
            fixture.guest_team_name,
            home_score,
            guest_score,
        );
        if seen.insert(m.clone()) {
            played.push(m);
        }
    }
    if params.verbose {
        println!("{} played matches", played.len());
    }

    let tiebreakers = params.tiebreakers.unwrap_or_else(Tiebreaker::default_order);
    let table = rank(
        played,
        &tiebreakers,
        Some(&Tiebreaker::default_head_to_head()),
    )?;

    let rows: Vec<TableRow> = table
        .iter()
        .enumerate()
        .map(|(ix, record)| TableRow::new(ix + 1, record))
        .collect();

    if params.as_json {
        return print_json(&rows);
    }

    println!("Rank\tTeam\t\t\t\t\tGames\tPoints\tWins\tDraws\tLosses\tGF\tGA\tFP");
    for row in &rows {
        println!(
            "{}\t{:<32}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.rank,
            row.team,
            row.games,
            row.points,
            row.wins,
            row.draws,
            row.losses,
            row.goals_for,
            row.goals_against,
            row.fairplay
        );
    }

    Ok(())
}
