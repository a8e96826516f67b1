//! Club fixture and info commands

use crate::{
    bfv::http::BfvClient,
    cli::types::{ClubId, MatchTypeFilter, TeamId},
    Result,
};

use super::{print_json, resolve_team_id};

/// Handle the club matches command
pub async fn handle_club_matches(
    club_id: ClubId,
    match_type: MatchTypeFilter,
    as_json: bool,
) -> Result<()> {
    let client = BfvClient::new();
    let data = client.club_matches(&club_id, match_type).await?;

    if as_json {
        return print_json(&data);
    }

    println!("{} fixtures ({})", data.matches.len(), match_type);
    for m in &data.matches {
        let result = if m.result.is_empty() {
            "-:-"
        } else {
            m.result.as_str()
        };
        println!(
            "{} {}  {} vs {}  {}  [{}]",
            m.kickoff_date,
            m.kickoff_time.as_deref().unwrap_or("--:--"),
            m.home_team_name,
            m.guest_team_name,
            result,
            m.competition_name
        );
    }

    Ok(())
}

/// Handle the club info command. The club is addressed either directly or
/// via one of its teams.
pub async fn handle_club_info(
    club_id: Option<ClubId>,
    team_id: Option<TeamId>,
    as_json: bool,
) -> Result<()> {
    let client = BfvClient::new();
    let info = match club_id {
        Some(club_id) => client.club_info(&club_id).await?,
        None => {
            let team_id = resolve_team_id(team_id)?;
            client.club_info_for_team(&team_id).await?
        }
    };

    if as_json {
        return print_json(&info);
    }

    println!("{} (club number {})", info.club.name, info.number);
    println!("Club ID: {}", info.club.id);
    if info.club.logo_public {
        println!("Logo: {}", info.club.logo_url);
    }

    Ok(())
}
