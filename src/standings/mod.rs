//! Build and rank a league table from played matches.
//!
//! Records accumulate 3 points per win and 1 per draw. Ranking walks a
//! chain of tiebreakers: each criterion splits the table into groups of
//! equal value, and the next criterion is applied inside every group that
//! is still tied. Head-to-head ranks the tied teams by a sub-table built
//! only from their mutual matches.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;
use tracing::warn;

use crate::error::{BfvError, Result};

#[cfg(test)]
mod tests;

pub const POINTS_FOR_WIN: i32 = 3;
pub const POINTS_FOR_DRAW: i32 = 1;

/// A played match, reduced to what the table needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayedMatch {
    pub home: String,
    pub guest: String,
    pub home_score: u32,
    pub guest_score: u32,
    pub home_fairplay: u32,
    pub guest_fairplay: u32,
}

impl PlayedMatch {
    /// Match without fairplay points.
    pub fn new(
        home: impl Into<String>,
        guest: impl Into<String>,
        home_score: u32,
        guest_score: u32,
    ) -> Self {
        Self {
            home: home.into(),
            guest: guest.into(),
            home_score,
            guest_score,
            home_fairplay: 0,
            guest_fairplay: 0,
        }
    }
}

/// Accumulated record of one team.
#[derive(Debug, Clone, Serialize)]
pub struct TeamRecord {
    pub name: String,
    pub games: u32,
    pub points: i32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub away_goals_for: u32,
    pub goals_against: u32,
    pub fairplay: u32,
    #[serde(skip)]
    matches: Vec<PlayedMatch>,
    #[serde(skip)]
    random_key: u32,
}

impl TeamRecord {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            games: 0,
            points: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            away_goals_for: 0,
            goals_against: 0,
            fairplay: 0,
            matches: Vec::new(),
            random_key: rand::random(),
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    /// Matches this record was accumulated from.
    pub fn matches(&self) -> &[PlayedMatch] {
        &self.matches
    }
}

/// A criterion for ordering a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Tiebreaker {
    Points,
    HeadToHead,
    GoalDifference,
    GoalsFor,
    Wins,
    AwayGoalsFor,
    Random,
}

impl Tiebreaker {
    /// The full default chain. It ends in Random, so every tie resolves.
    pub fn default_order() -> Vec<Tiebreaker> {
        vec![
            Tiebreaker::Points,
            Tiebreaker::HeadToHead,
            Tiebreaker::GoalDifference,
            Tiebreaker::GoalsFor,
            Tiebreaker::Wins,
            Tiebreaker::AwayGoalsFor,
            Tiebreaker::Random,
        ]
    }

    /// Default criteria used inside head-to-head sub-tables.
    pub fn default_head_to_head() -> Vec<Tiebreaker> {
        vec![
            Tiebreaker::Points,
            Tiebreaker::GoalDifference,
            Tiebreaker::GoalsFor,
        ]
    }
}

/// Accumulate team records from played matches, in first-appearance order.
pub fn build_table<I>(matches: I) -> Vec<TeamRecord>
where
    I: IntoIterator<Item = PlayedMatch>,
{
    let mut records: Vec<TeamRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for m in matches {
        let home_ix = *index.entry(m.home.clone()).or_insert_with(|| {
            records.push(TeamRecord::new(&m.home));
            records.len() - 1
        });
        let guest_ix = *index.entry(m.guest.clone()).or_insert_with(|| {
            records.push(TeamRecord::new(&m.guest));
            records.len() - 1
        });

        if m.home_score > m.guest_score {
            records[home_ix].points += POINTS_FOR_WIN;
            records[home_ix].wins += 1;
            records[guest_ix].losses += 1;
        } else if m.home_score < m.guest_score {
            records[guest_ix].points += POINTS_FOR_WIN;
            records[guest_ix].wins += 1;
            records[home_ix].losses += 1;
        } else {
            records[home_ix].points += POINTS_FOR_DRAW;
            records[guest_ix].points += POINTS_FOR_DRAW;
            records[home_ix].draws += 1;
            records[guest_ix].draws += 1;
        }

        let home = &mut records[home_ix];
        home.games += 1;
        home.goals_for += m.home_score;
        home.goals_against += m.guest_score;
        home.fairplay += m.home_fairplay;
        home.matches.push(m.clone());

        let guest = &mut records[guest_ix];
        guest.games += 1;
        guest.goals_for += m.guest_score;
        guest.away_goals_for += m.guest_score;
        guest.goals_against += m.home_score;
        guest.fairplay += m.guest_fairplay;
        guest.matches.push(m);
    }

    records
}

fn scalar_value(team: &TeamRecord, tiebreaker: Tiebreaker) -> i64 {
    match tiebreaker {
        Tiebreaker::Points => i64::from(team.points),
        Tiebreaker::GoalDifference => team.goal_difference(),
        Tiebreaker::GoalsFor => i64::from(team.goals_for),
        Tiebreaker::Wins => i64::from(team.wins),
        Tiebreaker::AwayGoalsFor => i64::from(team.away_goals_for),
        Tiebreaker::Random => i64::from(team.random_key),
        Tiebreaker::HeadToHead => unreachable!("head-to-head is grouped, not scored"),
    }
}

/// Split teams into descending groups of equal value under one criterion.
fn sort_group(
    mut teams: Vec<TeamRecord>,
    tiebreaker: Tiebreaker,
    head_to_head: Option<&[Tiebreaker]>,
) -> Result<Vec<Vec<TeamRecord>>> {
    if tiebreaker == Tiebreaker::HeadToHead {
        return sort_head_to_head(teams, head_to_head);
    }

    teams.sort_by_key(|t| std::cmp::Reverse(scalar_value(t, tiebreaker)));

    let mut groups: Vec<Vec<TeamRecord>> = Vec::new();
    for team in teams {
        match groups.last_mut() {
            Some(group)
                if scalar_value(&group[0], tiebreaker) == scalar_value(&team, tiebreaker) =>
            {
                group.push(team)
            }
            _ => groups.push(vec![team]),
        }
    }
    Ok(groups)
}

/// Rank a tied group by a sub-table built from the teams' mutual matches.
fn sort_head_to_head(
    teams: Vec<TeamRecord>,
    criteria: Option<&[Tiebreaker]>,
) -> Result<Vec<Vec<TeamRecord>>> {
    let criteria = match criteria {
        Some(c) if !c.is_empty() => c,
        _ => return Err(BfvError::MissingHeadToHeadTiebreakers),
    };

    let names: HashSet<String> = teams.iter().map(|t| t.name.clone()).collect();

    // deferred fixtures appear in both teams' match lists; keep each once
    let mut seen: HashSet<PlayedMatch> = HashSet::new();
    let mut mutual: Vec<PlayedMatch> = Vec::new();
    for team in &teams {
        for m in &team.matches {
            if names.contains(&m.home) && names.contains(&m.guest) && seen.insert(m.clone()) {
                mutual.push(m.clone());
            }
        }
    }

    let sub_table = build_table(mutual);
    if sub_table.len() < teams.len() {
        // the mutual matches cannot rank every tied team; leave the group
        // to the remaining criteria of the outer chain
        warn!(teams = ?names, "no usable head-to-head matches; continuing with the whole group");
        return Ok(vec![teams]);
    }

    let sub_groups = sort_with_tiebreakers(sub_table, criteria.iter().copied().collect(), None)?;

    // map the sub-table ordering back onto the original records
    let mut by_name: HashMap<String, TeamRecord> =
        teams.into_iter().map(|t| (t.name.clone(), t)).collect();
    let mut groups = Vec::new();
    for sub_group in sub_groups {
        let group: Vec<TeamRecord> = sub_group
            .into_iter()
            .filter_map(|sub| by_name.remove(&sub.name))
            .collect();
        if !group.is_empty() {
            groups.push(group);
        }
    }
    Ok(groups)
}

/// Sort records through a chain of tiebreakers.
///
/// Returns groups in final order. A group longer than one is a tie the
/// chain could not resolve.
pub fn sort_with_tiebreakers(
    teams: Vec<TeamRecord>,
    mut tiebreakers: VecDeque<Tiebreaker>,
    head_to_head: Option<&[Tiebreaker]>,
) -> Result<Vec<Vec<TeamRecord>>> {
    let Some(current) = tiebreakers.pop_front() else {
        return Ok(vec![teams]);
    };

    let mut sorted = Vec::new();
    for group in sort_group(teams, current, head_to_head)? {
        if group.len() > 1 {
            sorted.extend(sort_with_tiebreakers(
                group,
                tiebreakers.clone(),
                head_to_head,
            )?);
        } else {
            sorted.push(group);
        }
    }
    Ok(sorted)
}

/// Build and fully rank a table.
///
/// `head_to_head` supplies the criteria used inside head-to-head
/// sub-tables. A tie that survives the whole chain is an error naming the
/// tied teams; the default chain ends in Random and always resolves.
pub fn rank(
    matches: impl IntoIterator<Item = PlayedMatch>,
    tiebreakers: &[Tiebreaker],
    head_to_head: Option<&[Tiebreaker]>,
) -> Result<Vec<TeamRecord>> {
    let table = build_table(matches);
    let groups = sort_with_tiebreakers(table, tiebreakers.iter().copied().collect(), head_to_head)?;

    let mut ranked = Vec::new();
    for group in groups {
        if group.len() > 1 {
            return Err(BfvError::UnresolvedTie {
                teams: group.into_iter().map(|t| t.name).collect(),
            });
        }
        ranked.extend(group);
    }
    Ok(ranked)
}
