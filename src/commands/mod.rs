//! Command implementations for the BFV CLI

pub mod club_data;
pub mod competition_data;
pub mod match_report;
pub mod table;
pub mod team_data;

use serde::Serialize;

use crate::{cli::types::TeamId, error::BfvError, Result, TEAM_ID_ENV_VAR};

/// Resolve the team ID from the CLI flag or the environment.
pub fn resolve_team_id(team_id: Option<TeamId>) -> Result<TeamId> {
    match team_id {
        Some(id) => Ok(id),
        None => match std::env::var(TEAM_ID_ENV_VAR) {
            Ok(raw) => raw.parse(),
            Err(_) => Err(BfvError::MissingTeamId {
                env_var: TEAM_ID_ENV_VAR.to_string(),
            }),
        },
    }
}

/// Print a payload as pretty JSON for `--json` output.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_team_id_explicit() {
        let id = resolve_team_id(Some(TeamId::new("016PE7FISS000000VV0AG811VTE5EA5R"))).unwrap();
        assert_eq!(id.as_str(), "016PE7FISS000000VV0AG811VTE5EA5R");
    }

    #[test]
    fn test_resolve_team_id_env_fallback() {
        // one test so the env var is not mutated concurrently
        std::env::set_var(TEAM_ID_ENV_VAR, "01BKG17M3S000000VV0AG811VTNTKEKF");
        let id = resolve_team_id(None).unwrap();
        assert_eq!(id.as_str(), "01BKG17M3S000000VV0AG811VTNTKEKF");

        std::env::remove_var(TEAM_ID_ENV_VAR);
        let err = resolve_team_id(None).unwrap_err();
        assert!(matches!(err, BfvError::MissingTeamId { .. }));
    }
}
