//! Response models for the BFV widget and rest endpoints.
//!
//! Field names follow the wire format via serde renames. The widget
//! endpoints use camelCase keys; the older rest endpoints use lowercase
//! German keys. Two wire typos (`leageName`, `forthOfficial`) are part of
//! the API surface and kept as renames.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bfv::result::parse_result;
use crate::error::{BfvError, Result};


/// Envelope every endpoint wraps its payload in.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub state: i32,
    pub message: Option<String>,
    pub data: T,
}

/// Team category. The API only serves these fixed labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamType {
    #[serde(rename = "Frauen")]
    Frauen,
    #[serde(rename = "B-Juniorinnen")]
    BJuniorinnen,
    #[serde(rename = "C-Juniorinnen")]
    CJuniorinnen,
    #[serde(rename = "Herren Ü50")]
    HerrenU50,
    #[serde(rename = "Herren Ü45")]
    HerrenU45,
    #[serde(rename = "Herren Ü40")]
    HerrenU40,
    #[serde(rename = "Herren Ü32")]
    HerrenU32,
    #[serde(rename = "Herren")]
    Herren,
    #[serde(rename = "A-Junioren")]
    AJunioren,
    #[serde(rename = "B-Junioren")]
    BJunioren,
    #[serde(rename = "C-Junioren")]
    CJunioren,
    #[serde(rename = "D-Junioren")]
    DJunioren,
    #[serde(rename = "E-Junioren")]
    EJunioren,
    #[serde(rename = "F-Junioren")]
    FJunioren,
}

impl fmt::Display for TeamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TeamType::Frauen => "Frauen",
            TeamType::BJuniorinnen => "B-Juniorinnen",
            TeamType::CJuniorinnen => "C-Juniorinnen",
            TeamType::HerrenU50 => "Herren Ü50",
            TeamType::HerrenU45 => "Herren Ü45",
            TeamType::HerrenU40 => "Herren Ü40",
            TeamType::HerrenU32 => "Herren Ü32",
            TeamType::Herren => "Herren",
            TeamType::AJunioren => "A-Junioren",
            TeamType::BJunioren => "B-Junioren",
            TeamType::CJunioren => "C-Junioren",
            TeamType::DJunioren => "D-Junioren",
            TeamType::EJunioren => "E-Junioren",
            TeamType::FJunioren => "F-Junioren",
        };
        write!(f, "{}", s)
    }
}

/// Match event kind, integer-coded on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum EventType {
    SubstituteIn,
    SubstituteOut,
    Yellow,
    Red,
    SecondYellow,
    Goal,
    OwnGoal,
    PenaltyGoal,
    TimePenalty,
}

impl TryFrom<i8> for EventType {
    type Error = BfvError;

    fn try_from(code: i8) -> Result<Self> {
        match code {
            -2 => Ok(EventType::SubstituteIn),
            -1 => Ok(EventType::SubstituteOut),
            2 => Ok(EventType::Yellow),
            3 => Ok(EventType::Red),
            4 => Ok(EventType::SecondYellow),
            7 => Ok(EventType::Goal),
            8 => Ok(EventType::OwnGoal),
            9 => Ok(EventType::PenaltyGoal),
            13 => Ok(EventType::TimePenalty),
            other => Err(BfvError::UnknownEventType(other)),
        }
    }
}

impl From<EventType> for i8 {
    fn from(event: EventType) -> i8 {
        match event {
            EventType::SubstituteIn => -2,
            EventType::SubstituteOut => -1,
            EventType::Yellow => 2,
            EventType::Red => 3,
            EventType::SecondYellow => 4,
            EventType::Goal => 7,
            EventType::OwnGoal => 8,
            EventType::PenaltyGoal => 9,
            EventType::TimePenalty => 13,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventType::SubstituteIn => "Substitute in",
            EventType::SubstituteOut => "Substitute out",
            EventType::Yellow => "Yellow card",
            EventType::Red => "Red card",
            EventType::SecondYellow => "Second yellow card",
            EventType::Goal => "Goal",
            EventType::OwnGoal => "Own goal",
            EventType::PenaltyGoal => "Penalty goal",
            EventType::TimePenalty => "Time penalty",
        };
        write!(f, "{}", s)
    }
}

/// A team as returned by the widget endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    #[serde(rename = "permanentId")]
    pub permanent_id: String,
    pub name: String,
    #[serde(rename = "typeName")]
    pub type_name: TeamType,
    #[serde(rename = "seasonId")]
    pub season_id: String,
    #[serde(rename = "clubId")]
    pub club_id: String,
    #[serde(rename = "clubName")]
    pub club_name: String,
    #[serde(rename = "compoundId")]
    pub compound_id: String,
    #[serde(rename = "competitionName")]
    pub competition_name: String,
    #[serde(rename = "competitionBreadcrumb")]
    pub competition_breadcrumb: String,
}

/// A fixture, played or not. `result` is the raw result string.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Match {
    #[serde(rename = "matchId")]
    pub match_id: String,
    #[serde(rename = "compoundId")]
    pub compound_id: String,
    #[serde(rename = "competitionName")]
    pub competition_name: String,
    #[serde(rename = "competitionType")]
    pub competition_type: String,
    #[serde(rename = "teamType")]
    pub team_type: TeamType,
    #[serde(rename = "kickoffDate")]
    pub kickoff_date: String,
    #[serde(rename = "kickoffTime")]
    pub kickoff_time: Option<String>,
    #[serde(rename = "homeTeamName")]
    pub home_team_name: String,
    #[serde(rename = "homeTeamPermanentId")]
    pub home_team_permanent_id: Option<String>,
    #[serde(rename = "homeClubId")]
    pub home_club_id: Option<String>,
    #[serde(rename = "homeLogoPrivate")]
    pub home_logo_private: bool,
    #[serde(rename = "guestTeamName")]
    pub guest_team_name: String,
    #[serde(rename = "guestTeamPermanentId")]
    pub guest_team_permanent_id: Option<String>,
    #[serde(rename = "guestClubId")]
    pub guest_club_id: Option<String>,
    #[serde(rename = "guestLogoPrivate")]
    pub guest_logo_private: bool,
    pub result: String,
    #[serde(rename = "tickerMatchId")]
    pub ticker_match_id: Option<String>,
    #[serde(rename = "prePublished", default)]
    pub pre_published: Option<bool>,
    #[serde(rename = "clubTeamNumber", default)]
    pub club_team_number: Option<i32>,
}

impl Match {
    /// Result string as a pair of scores, `None` while the match has none.
    pub fn parsed_result(&self) -> Result<Option<(u32, u32)>> {
        parse_result(
            &self.home_team_name,
            Some(&self.guest_team_name),
            &self.result,
        )
    }
}

/// Fixture list of a club.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShortMatches {
    pub matches: Vec<Match>,
    #[serde(rename = "actualMatchId")]
    pub actual_match_id: String,
}

/// Fixture list of a team, including the owning team.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Matches {
    pub matches: Vec<Match>,
    #[serde(rename = "actualMatchId")]
    pub actual_match_id: String,
    pub team: Team,
    #[serde(rename = "actualTickeredMatchId")]
    pub actual_tickered_match_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Club {
    pub id: String,
    pub name: String,
    #[serde(rename = "logoUrl")]
    pub logo_url: String,
    #[serde(rename = "logoPublic")]
    pub logo_public: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClubInfo {
    pub club: Club,
    pub number: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Season {
    pub id: String,
    pub name: String,
}

/// Team reference without club context.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShortTeam {
    #[serde(rename = "permanentId")]
    pub permanent_id: String,
    pub name: Option<String>,
}

/// A team's squad. The per-player payload shape varies between seasons and
/// is kept raw.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Squad {
    pub public: bool,
    pub season: Season,
    pub team: ShortTeam,
    pub players: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerInfo {
    #[serde(rename = "photoUrlThumb")]
    pub photo_url_thumb: String,
    #[serde(rename = "photoUrlStamp")]
    pub photo_url_stamp: String,
    #[serde(rename = "photoUrlImage")]
    pub photo_url_image: String,
}

/// A player on a match sheet.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchPlayer {
    pub name: String,
    pub number: u16,
    pub captain: bool,
    pub keeper: bool,
    pub substitute: bool,
    #[serde(rename = "playerInfo")]
    pub player_info: PlayerInfo,
}

/// Pitch surface label served with a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VenueSurface {
    #[serde(rename = "Rasenplatz")]
    Grass,
    #[serde(rename = "Kunstrasenplatz")]
    ArtificialTurf,
}

impl fmt::Display for VenueSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VenueSurface::Grass => "Rasenplatz",
            VenueSurface::ArtificialTurf => "Kunstrasenplatz",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Venue {
    /// Venue kind code (0, 1 or 3 on the wire).
    #[serde(rename = "type")]
    pub venue_type: u8,
    #[serde(rename = "typeName")]
    pub type_name: Option<VenueSurface>,
    pub name: Option<String>,
    pub street: Option<String>,
    #[serde(rename = "zipCode")]
    pub zip_code: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchEvent {
    pub minute: u16,
    #[serde(rename = "additionalTimeMinute")]
    pub additional_time_minute: u16,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(rename = "sortPos")]
    pub sort_pos: u32,
    pub player: Option<MatchPlayer>,
}

/// One side's sheet in a match report.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchTeamInfo {
    pub trainer: String,
    pub players: Vec<MatchPlayer>,
    #[serde(rename = "matchEvents")]
    pub match_events: Vec<MatchEvent>,
}

/// Published details of a finished match, absent until the report is filed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchReportInfo {
    pub home: Option<MatchTeamInfo>,
    pub guest: Option<MatchTeamInfo>,
    #[serde(rename = "endTime")]
    pub end_time: Option<String>,
    #[serde(rename = "extraTimeFirstHalf")]
    pub extra_time_first_half: Option<u16>,
    #[serde(rename = "extraTimeSecondHalf")]
    pub extra_time_second_half: Option<u16>,
    pub spectators: Option<u32>,
}

/// Full match report from the rest controller.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchReport {
    #[serde(rename = "staffelzusatz")]
    pub division_suffix: String,
    #[serde(rename = "matchId")]
    pub match_id: String,
    pub result: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    // "leageName" is how the API spells it
    #[serde(rename = "leageName")]
    pub league_name: String,
    pub season: String,
    #[serde(rename = "homeTeamName")]
    pub home_team_name: String,
    #[serde(rename = "guestTeamName")]
    pub guest_team_name: Option<String>,
    #[serde(rename = "homeTeamClubId")]
    pub home_team_club_id: Option<String>,
    #[serde(rename = "guestTeamClubId")]
    pub guest_team_club_id: Option<String>,
    #[serde(rename = "compoundId")]
    pub compound_id: String,
    #[serde(rename = "matchNr")]
    pub match_number: String,
    #[serde(rename = "prevMatchId")]
    pub prev_match_id: Option<String>,
    #[serde(rename = "nextMatchId")]
    pub next_match_id: Option<String>,
    pub venue: Venue,
    pub referee: String,
    pub assistant1: String,
    pub assistant2: String,
    // "forthOfficial" is how the API spells it
    #[serde(rename = "forthOfficial")]
    pub fourth_official: Option<String>,
    #[serde(rename = "spielTickerId")]
    pub ticker_id: Option<String>,
    #[serde(rename = "tickerMatchId")]
    pub ticker_match_id: Option<String>,
    #[serde(rename = "matchReportInfo")]
    pub match_report_info: Option<MatchReportInfo>,
    #[serde(rename = "adCode")]
    pub ad_code: String,
}

impl MatchReport {
    /// Result string as a pair of scores, `None` while the match has none.
    pub fn parsed_result(&self) -> Result<Option<(u32, u32)>> {
        parse_result(
            &self.home_team_name,
            self.guest_team_name.as_deref(),
            &self.result,
        )
    }
}

/// One row of an official table (legacy rest endpoint, German keys).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingsTeam {
    #[serde(rename = "seasonId")]
    pub season_id: Option<String>,
    #[serde(rename = "seasonName")]
    pub season_name: String,
    #[serde(rename = "permanentId")]
    pub permanent_id: Option<String>,
    #[serde(rename = "competitionId")]
    pub competition_id: String,
    #[serde(rename = "rang")]
    pub rank: String,
    #[serde(rename = "teamname")]
    pub team_name: String,
    #[serde(rename = "anzspiele")]
    pub games: u32,
    #[serde(rename = "punkte")]
    pub points: i32,
    #[serde(rename = "s")]
    pub wins: u32,
    #[serde(rename = "u")]
    pub draws: u32,
    #[serde(rename = "n")]
    pub losses: u32,
    /// Goals as "for:against".
    #[serde(rename = "tore")]
    pub goals: String,
    #[serde(rename = "tordiff")]
    pub goal_difference: String,
    #[serde(rename = "aufab")]
    pub promotion_mark: Option<i32>,
    #[serde(rename = "verzicht")]
    pub withdrawals: i32,
    #[serde(rename = "clubId")]
    pub club_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchDay {
    #[serde(rename = "spieltag")]
    pub number: String,
    #[serde(rename = "bezeichnung")]
    pub label: String,
}

/// Competition kind. The API only serves these fixed labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitionKind {
    #[serde(rename = "Meisterschaften")]
    Championship,
    #[serde(rename = "Freundschaftsspiele")]
    Friendlies,
    #[serde(rename = "Turniere")]
    Tournaments,
}

impl fmt::Display for CompetitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompetitionKind::Championship => "Meisterschaften",
            CompetitionKind::Friendlies => "Freundschaftsspiele",
            CompetitionKind::Tournaments => "Turniere",
        };
        write!(f, "{}", s)
    }
}

/// A competition with its fixtures for one selected match day.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Competition {
    #[serde(rename = "saison")]
    pub season: String,
    #[serde(rename = "compoundId")]
    pub compound_id: String,
    #[serde(rename = "staffelId")]
    pub division_id: String,
    #[serde(rename = "staffelname")]
    pub division_name: String,
    #[serde(rename = "staffelzusatz")]
    pub division_suffix: String,
    #[serde(rename = "staffelnr")]
    pub division_number: String,
    #[serde(rename = "staffelTypId")]
    pub division_type_id: u16,
    #[serde(rename = "staffelTypName")]
    pub division_type: CompetitionKind,
    #[serde(rename = "adCode")]
    pub ad_code: String,
    #[serde(rename = "anzAufsteiger")]
    pub promoted: u8,
    #[serde(rename = "anzAufsteigerq")]
    pub promoted_playoff: u8,
    #[serde(rename = "anzAbsteigerq")]
    pub relegated_playoff: u8,
    #[serde(rename = "anzAbsteiger")]
    pub relegated: u8,
    #[serde(rename = "stLiveticker")]
    pub live_ticker: bool,
    pub matches: Vec<Match>,
    #[serde(rename = "tabelle")]
    pub table: Option<Vec<StandingsTeam>>,
    #[serde(rename = "spieltage")]
    pub match_days: Vec<MatchDay>,
    #[serde(rename = "selSpieltag")]
    pub selected_match_day: String,
    #[serde(rename = "actualMatchDay")]
    pub actual_match_day: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TopScorerPlayer {
    #[serde(rename = "playerImage")]
    pub player_image: String,
    #[serde(rename = "playerImageStamp")]
    pub player_image_stamp: String,
    #[serde(rename = "playerImageCopyright")]
    pub player_image_copyright: Option<String>,
    pub name: String,
    pub team: ShortTeam,
    pub rank: u32,
    pub goals: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TopScorer {
    #[serde(rename = "compoundId")]
    pub compound_id: String,
    #[serde(rename = "competitionName")]
    pub competition_name: String,
    #[serde(rename = "adCode")]
    pub ad_code: String,
    pub scorers: Vec<TopScorerPlayer>,
}

/// Official table for a competition scope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Standings {
    #[serde(rename = "compoundId")]
    pub compound_id: String,
    /// Always null on the wire.
    #[serde(rename = "competitionName")]
    pub competition_name: Option<String>,
    #[serde(rename = "tabelle")]
    pub table: Vec<StandingsTeam>,
}
