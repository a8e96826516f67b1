//! Competition, official table and top scorer commands

use crate::{
    bfv::http::BfvClient,
    bfv::types::{Competition, StandingsTeam},
    cli::types::{CompetitionId, StandingsScope},
    Result,
};

use super::print_json;

/// Handle the competition command
pub async fn handle_competition(
    competition_id: CompetitionId,
    match_day: Option<u32>,
    as_json: bool,
) -> Result<()> {
    let client = BfvClient::new();
    let competition = match match_day {
        Some(day) => {
            client
                .competition_for_match_day(&competition_id, day)
                .await?
        }
        None => client.competition(&competition_id).await?,
    };

    if as_json {
        return print_json(&competition);
    }

    print_competition(&competition);
    Ok(())
}

fn print_competition(competition: &Competition) {
    println!(
        "{} {} ({}, {})",
        competition.division_name,
        competition.division_suffix,
        competition.season,
        competition.division_type
    );
    println!(
        "Match day {} of {}",
        competition.selected_match_day,
        competition.match_days.len()
    );
    for m in &competition.matches {
        let result = if m.result.is_empty() {
            "-:-"
        } else {
            m.result.as_str()
        };
        println!(
            "{} {}  {} vs {}  {}",
            m.kickoff_date,
            m.kickoff_time.as_deref().unwrap_or("--:--"),
            m.home_team_name,
            m.guest_team_name,
            result
        );
    }
    if let Some(table) = &competition.table {
        println!();
        print_official_table(table);
    }
}

/// Handle the standings command
pub async fn handle_standings(
    competition_id: CompetitionId,
    scope: StandingsScope,
    as_json: bool,
) -> Result<()> {
    let client = BfvClient::new();
    let standings = client
        .competition_standings(&competition_id, scope)
        .await?;

    if as_json {
        return print_json(&standings);
    }

    println!("Official table ({})", scope);
    print_official_table(&standings.table);
    Ok(())
}

fn print_official_table(table: &[StandingsTeam]) {
    println!("Rank\tTeam\t\t\t\t\tGames\tPoints\tW\tD\tL\tGoals\tDiff");
    for row in table {
        println!(
            "{}\t{:<32}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.rank,
            row.team_name,
            row.games,
            row.points,
            row.wins,
            row.draws,
            row.losses,
            row.goals,
            row.goal_difference
        );
    }
}

/// Handle the top scorer command
pub async fn handle_top_scorer(competition_id: CompetitionId, as_json: bool) -> Result<()> {
    let client = BfvClient::new();
    let top = client.competition_top_scorer(&competition_id).await?;

    if as_json {
        return print_json(&top);
    }

    match top {
        Some(top) => {
            println!("Top scorers of {}", top.competition_name);
            for scorer in &top.scorers {
                let team = scorer.team.name.as_deref().unwrap_or("-");
                println!(
                    "{}\t{:<24}\t{}\t{}",
                    scorer.rank, scorer.name, team, scorer.goals
                );
            }
        }
        None => println!("No top scorer data published for this competition"),
    }

    Ok(())
}
