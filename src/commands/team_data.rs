//! Team fixture and squad commands

use crate::{bfv::http::BfvClient, cli::types::TeamId, Result};

use super::{print_json, resolve_team_id};

/// Handle the team matches command
pub async fn handle_team_matches(team_id: Option<TeamId>, as_json: bool) -> Result<()> {
    let team_id = resolve_team_id(team_id)?;
    let client = BfvClient::new();
    let data = client.team_matches(&team_id).await?;

    if as_json {
        return print_json(&data);
    }

    println!(
        "{} ({}, {})",
        data.team.name, data.team.competition_name, data.team.type_name
    );
    for m in &data.matches {
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

    Ok(())
}

/// Handle the team squad command
pub async fn handle_team_squad(team_id: Option<TeamId>, as_json: bool) -> Result<()> {
    let team_id = resolve_team_id(team_id)?;
    let client = BfvClient::new();
    let squad = client.team_squad(&team_id).await?;

    if as_json {
        return print_json(&squad);
    }

    let team_name = squad.team.name.as_deref().unwrap_or("(unnamed team)");
    println!("Squad of {} in {}", team_name, squad.season.name);
    if !squad.public {
        println!("The squad is not public");
        return Ok(());
    }
    println!("{} players listed", squad.players.len());

    Ok(())
}
