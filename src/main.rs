//! Entry point: parse CLI and dispatch to command handlers.

use bfv_api::{
    cli::{Bfv, Commands, GetCmd},
    commands::{
        club_data::{handle_club_info, handle_club_matches},
        competition_data::{handle_competition, handle_standings, handle_top_scorer},
        match_report::handle_match_report,
        table::{handle_table, TableParams},
        team_data::{handle_team_matches, handle_team_squad},
    },
    Result,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let app = Bfv::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::TeamMatches { team_id, json } => handle_team_matches(team_id, json).await?,

            GetCmd::TeamSquad { team_id, json } => handle_team_squad(team_id, json).await?,

            GetCmd::Competition {
                competition_id,
                match_day,
                json,
            } => handle_competition(competition_id, match_day, json).await?,

            GetCmd::TopScorer {
                competition_id,
                json,
            } => handle_top_scorer(competition_id, json).await?,

            GetCmd::Standings {
                competition_id,
                scope,
                json,
            } => handle_standings(competition_id, scope, json).await?,

            GetCmd::ClubMatches {
                club_id,
                match_type,
                json,
            } => handle_club_matches(club_id, match_type, json).await?,

            GetCmd::ClubInfo {
                club_id,
                team_id,
                json,
            } => {
                if club_id.is_some() && team_id.is_some() {
                    eprintln!("Error: Cannot specify both --club-id and --team-id at the same time");
                    std::process::exit(1);
                }
                handle_club_info(club_id, team_id, json).await?
            }

            GetCmd::MatchReport { match_id, json } => handle_match_report(match_id, json).await?,

            GetCmd::Table {
                team_id,
                refresh,
                json,
                tiebreakers,
                verbose,
            } => {
                handle_table(TableParams {
                    team_id,
                    refresh,
                    as_json: json,
                    tiebreakers,
                    verbose,
                })
                .await?
            }
        },
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
