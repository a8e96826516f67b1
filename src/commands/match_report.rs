//! Match report command

use crate::{
    bfv::http::BfvClient,
    bfv::types::{MatchReport, MatchTeamInfo},
    cli::types::MatchId,
    Result,
};

use super::print_json;

/// Handle the match report command
pub async fn handle_match_report(match_id: MatchId, as_json: bool) -> Result<()> {
    let client = BfvClient::new();
    let report = client.match_report(&match_id).await?;

    if as_json {
        return print_json(&report);
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &MatchReport) {
    let guest = report.guest_team_name.as_deref().unwrap_or("(no opponent)");
    println!("{} vs {}  {}", report.home_team_name, guest, report.result);
    println!(
        "{} {} ({}), match {}",
        report.league_name, report.division_suffix, report.season, report.match_number
    );
    println!("Kickoff: {} {}", report.start_date, report.start_time);

    if let Some(name) = &report.venue.name {
        let surface = report
            .venue
            .type_name
            .map(|s| format!(" ({})", s))
            .unwrap_or_default();
        println!(
            "Venue: {}{}, {}",
            name,
            surface,
            report.venue.city.as_deref().unwrap_or("-")
        );
    }
    println!(
        "Referee: {} (assistants: {}, {})",
        report.referee, report.assistant1, report.assistant2
    );

    let Some(info) = &report.match_report_info else {
        println!("No match report published yet");
        return;
    };
    if let Some(spectators) = info.spectators {
        println!("Spectators: {}", spectators);
    }
    if let Some(home) = &info.home {
        print_team_sheet(&report.home_team_name, home);
    }
    if let Some(guest_info) = &info.guest {
        print_team_sheet(guest, guest_info);
    }
}

fn print_team_sheet(team: &str, info: &MatchTeamInfo) {
    println!();
    println!("{} (trainer: {})", team, info.trainer);
    for event in &info.match_events {
        let minute = if event.additional_time_minute > 0 {
            format!("{}+{}", event.minute, event.additional_time_minute)
        } else {
            event.minute.to_string()
        };
        let player = event
            .player
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("-");
        println!("{:>6}'  {}  {}", minute, event.event_type, player);
    }
}
