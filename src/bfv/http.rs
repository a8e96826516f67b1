//! HTTP client for the BFV widget service.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::bfv::types::{
    ApiResponse, ClubInfo, Competition, MatchReport, Matches, ShortMatches, Squad, Standings,
    TopScorer,
};
use crate::cli::types::{ClubId, CompetitionId, MatchId, MatchTypeFilter, StandingsScope, TeamId};
use crate::Result;

/// Base URL of the production widget service.
pub const BFV_BASE_URL: &str = "https://widget-prod.bfv.de";

/// Client for the BFV widget and rest endpoints.
///
/// Every call performs a single GET, fails on a non-success status and
/// unwraps the service's response envelope.
#[derive(Debug, Clone)]
pub struct BfvClient {
    http: Client,
    base_url: String,
}

impl BfvClient {
    pub fn new() -> Self {
        Self::with_base_url(BFV_BASE_URL)
    }

    /// Client against a different host. Tests point this at a local mock
    /// server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let res = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<ApiResponse<T>>()
            .await?;

        if let Some(message) = &res.message {
            debug!(state = res.state, message = %message, "service message");
        }

        Ok(res.data)
    }

    /// Retrieves the team's matches.
    pub async fn team_matches(&self, team_id: &TeamId) -> Result<Matches> {
        self.get_data(&format!("/api/service/widget/v1/team/{}/matches", team_id))
            .await
    }

    /// Retrieves the team's squad.
    pub async fn team_squad(&self, team_id: &TeamId) -> Result<Squad> {
        self.get_data(&format!("/api/service/widget/v1/team/{}/squad", team_id))
            .await
    }

    /// Retrieves the competition at its current match day.
    pub async fn competition(&self, competition_id: &CompetitionId) -> Result<Competition> {
        self.get_data(&format!(
            "/rest/competitioncontroller/competition/id/{}",
            competition_id
        ))
        .await
    }

    /// Retrieves the competition at the given match day.
    pub async fn competition_for_match_day(
        &self,
        competition_id: &CompetitionId,
        match_day: u32,
    ) -> Result<Competition> {
        self.get_data(&format!(
            "/rest/competitioncontroller/competition/id/{}/matchday/{}",
            competition_id, match_day
        ))
        .await
    }

    /// Retrieves the competition's top scorers. The service publishes no
    /// data for some competitions, in which case the payload is null.
    pub async fn competition_top_scorer(
        &self,
        competition_id: &CompetitionId,
    ) -> Result<Option<TopScorer>> {
        self.get_data(&format!(
            "/api/service/widget/v1/competition/{}/topscorer",
            competition_id
        ))
        .await
    }

    /// Retrieves the competition's official table for the given scope.
    pub async fn competition_standings(
        &self,
        competition_id: &CompetitionId,
        scope: StandingsScope,
    ) -> Result<Standings> {
        // the overall scope is an empty segment; the service accepts the
        // resulting "table//id/…" path
        self.get_data(&format!(
            "/rest/competitioncontroller/competition/table/{}/id/{}",
            scope.as_path_segment(),
            competition_id
        ))
        .await
    }

    /// Retrieves the club's fixtures, optionally restricted to home or away.
    pub async fn club_matches(
        &self,
        club_id: &ClubId,
        match_type: MatchTypeFilter,
    ) -> Result<ShortMatches> {
        self.get_data(&format!(
            "/rest/clubcontroller/fixtures/id/{}/matchtype/{}",
            club_id,
            match_type.as_path_segment()
        ))
        .await
    }

    /// Retrieves the club's information.
    pub async fn club_info(&self, club_id: &ClubId) -> Result<ClubInfo> {
        self.get_data(&format!("/api/service/widget/v1/club/{}/info", club_id))
            .await
    }

    /// Retrieves the club's information via one of its teams.
    pub async fn club_info_for_team(&self, team_id: &TeamId) -> Result<ClubInfo> {
        self.get_data(&format!(
            "/api/service/widget/v1/club/info?teamPermanentId={}",
            team_id
        ))
        .await
    }

    /// Retrieves the match report.
    pub async fn match_report(&self, match_id: &MatchId) -> Result<MatchReport> {
        self.get_data(&format!(
            "/rest/matchcontroller/matchreport/id/{}",
            match_id
        ))
        .await
    }
}

impl Default for BfvClient {
    fn default() -> Self {
        Self::new()
    }
}
