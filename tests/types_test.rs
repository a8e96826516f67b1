//! Deserialization tests for the wire models

use bfv_api::bfv::types::*;
use serde_json::json;

fn match_value(result: &str) -> serde_json::Value {
    json!({
        "matchId": "02ICP0F81C000000VV0AG80NVSHUQCNB",
        "compoundId": "02ICOF9JDO000002VV0AG80NVV8PGV9T",
        "competitionName": "Kreisliga 2 Nürnberg/Frauen",
        "competitionType": "Meisterschaft",
        "teamType": "Herren",
        "kickoffDate": "2026-04-12",
        "kickoffTime": "15:00",
        "homeTeamName": "TSV Kornburg II",
        "homeTeamPermanentId": "016PE7FISS000000VV0AG811VTE5EA5R",
        "homeClubId": "00ES8GNBDO000033VV0AG08LVUPGND5I",
        "homeLogoPrivate": false,
        "guestTeamName": "SV Wacker Nürnberg",
        "guestTeamPermanentId": "016PE7FISS000000VV0AG811VTE5EA5S",
        "guestClubId": "00ES8GNBDO000033VV0AG08LVUPGND5J",
        "guestLogoPrivate": true,
        "result": result,
        "tickerMatchId": "12345",
        "prePublished": true,
        "clubTeamNumber": 2
    })
}

#[test]
fn test_matches_deserialization() {
    let value = json!({
        "matches": [match_value("2:1"), match_value("")],
        "actualMatchId": "02ICP0F81C000000VV0AG80NVSHUQCNB",
        "team": {
            "permanentId": "016PE7FISS000000VV0AG811VTE5EA5R",
            "name": "TSV Kornburg II",
            "typeName": "Herren",
            "seasonId": "223",
            "clubId": "00ES8GNBDO000033VV0AG08LVUPGND5I",
            "clubName": "TSV Kornburg",
            "compoundId": "02ICOF9JDO000002VV0AG80NVV8PGV9T",
            "competitionName": "Kreisliga 2",
            "competitionBreadcrumb": "Bezirk Mittelfranken / Kreis Nürnberg"
        },
        "actualTickeredMatchId": null
    });

    let matches: Matches = serde_json::from_value(value).unwrap();
    assert_eq!(matches.matches.len(), 2);
    assert_eq!(matches.team.club_name, "TSV Kornburg");
    assert_eq!(matches.team.type_name, TeamType::Herren);
    assert_eq!(matches.matches[0].club_team_number, Some(2));
    assert_eq!(matches.matches[0].parsed_result().unwrap(), Some((2, 1)));
    assert_eq!(matches.matches[1].parsed_result().unwrap(), None);
}

#[test]
fn test_standings_team_wire_keys() {
    let value = json!({
        "seasonId": "223",
        "seasonName": "2025/26",
        "permanentId": "016PE7FISS000000VV0AG811VTE5EA5R",
        "competitionId": "02ICOF9JDO000002VV0AG80NVV8PGV9T",
        "rang": "1",
        "teamname": "TSV Kornburg II",
        "anzspiele": 18,
        "punkte": 40,
        "s": 12,
        "u": 4,
        "n": 2,
        "tore": "38:15",
        "tordiff": "23",
        "aufab": 1,
        "verzicht": 0,
        "clubId": "00ES8GNBDO000033VV0AG08LVUPGND5I"
    });

    let row: StandingsTeam = serde_json::from_value(value).unwrap();
    assert_eq!(row.rank, "1");
    assert_eq!(row.team_name, "TSV Kornburg II");
    assert_eq!(row.games, 18);
    assert_eq!(row.points, 40);
    assert_eq!(row.wins, 12);
    assert_eq!(row.draws, 4);
    assert_eq!(row.losses, 2);
    assert_eq!(row.goals, "38:15");
    assert_eq!(row.goal_difference, "23");
    assert_eq!(row.promotion_mark, Some(1));
    assert_eq!(row.withdrawals, 0);
}

#[test]
fn test_competition_deserialization() {
    let value = json!({
        "saison": "2025/26",
        "compoundId": "02ICOF9JDO000002VV0AG80NVV8PGV9T",
        "staffelId": "02ICOF9JDO000002VV0AG80NVV8PGV9T",
        "staffelname": "Kreisliga 2",
        "staffelzusatz": "Nürnberg/Frauen",
        "staffelnr": "420",
        "staffelTypId": 1,
        "staffelTypName": "Meisterschaften",
        "adCode": "",
        "anzAufsteiger": 1,
        "anzAufsteigerq": 1,
        "anzAbsteigerq": 1,
        "anzAbsteiger": 2,
        "stLiveticker": true,
        "matches": [match_value("0:0")],
        "tabelle": null,
        "spieltage": [
            { "spieltag": "1", "bezeichnung": "1. Spieltag" },
            { "spieltag": "2", "bezeichnung": "2. Spieltag" }
        ],
        "selSpieltag": "2",
        "actualMatchDay": "2"
    });

    let competition: Competition = serde_json::from_value(value).unwrap();
    assert_eq!(competition.division_name, "Kreisliga 2");
    assert_eq!(competition.division_type, CompetitionKind::Championship);
    assert_eq!(competition.match_days.len(), 2);
    assert_eq!(competition.match_days[0].label, "1. Spieltag");
    assert_eq!(competition.actual_match_day, "2");
    assert!(competition.table.is_none());
    assert_eq!(competition.promoted, 1);
    assert_eq!(competition.relegated, 2);
}

#[test]
fn test_competition_serialization_round_trips_wire_keys() {
    // cached payloads are re-read with the same keys the API serves
    let value = json!({
        "saison": "2025/26",
        "compoundId": "02ICOF9JDO000002VV0AG80NVV8PGV9T",
        "staffelId": "02ICOF9JDO000002VV0AG80NVV8PGV9T",
        "staffelname": "Kreisliga 2",
        "staffelzusatz": "",
        "staffelnr": "420",
        "staffelTypId": 1,
        "staffelTypName": "Meisterschaften",
        "adCode": "",
        "anzAufsteiger": 1,
        "anzAufsteigerq": 0,
        "anzAbsteigerq": 0,
        "anzAbsteiger": 2,
        "stLiveticker": false,
        "matches": [],
        "tabelle": null,
        "spieltage": [],
        "selSpieltag": "1",
        "actualMatchDay": "1"
    });

    let competition: Competition = serde_json::from_value(value.clone()).unwrap();
    let serialized = serde_json::to_value(&competition).unwrap();
    assert_eq!(serialized["staffelname"], "Kreisliga 2");
    assert_eq!(serialized["staffelTypName"], "Meisterschaften");
    assert_eq!(serialized["anzAbsteiger"], 2);

    let reparsed: Competition = serde_json::from_value(serialized).unwrap();
    assert_eq!(reparsed.division_name, competition.division_name);
}

#[test]
fn test_match_report_deserialization() {
    let value = json!({
        "staffelzusatz": "Nürnberg/Frauen",
        "matchId": "02ICP0F81C000000VV0AG80NVSHUQCNB",
        "result": "2:1",
        "startDate": "12.04.2026",
        "startTime": "15:00",
        "leageName": "Kreisliga 2",
        "season": "2025/26",
        "homeTeamName": "TSV Kornburg II",
        "guestTeamName": "SV Wacker Nürnberg",
        "homeTeamClubId": "00ES8GNBDO000033VV0AG08LVUPGND5I",
        "guestTeamClubId": null,
        "compoundId": "02ICOF9JDO000002VV0AG80NVV8PGV9T",
        "matchNr": "420017",
        "prevMatchId": null,
        "nextMatchId": null,
        "venue": {
            "type": 1,
            "typeName": "Rasenplatz",
            "name": "Sportanlage Kornburg",
            "street": "Wettersbergstraße 22",
            "zipCode": "90455",
            "city": "Nürnberg"
        },
        "referee": "Max Mustermann",
        "assistant1": "A. Eins",
        "assistant2": "B. Zwei",
        "forthOfficial": null,
        "spielTickerId": null,
        "tickerMatchId": null,
        "matchReportInfo": {
            "home": {
                "trainer": "T. Heim",
                "players": [],
                "matchEvents": [
                    {
                        "minute": 43,
                        "additionalTimeMinute": 0,
                        "type": 7,
                        "sortPos": 1,
                        "player": null
                    },
                    {
                        "minute": 90,
                        "additionalTimeMinute": 3,
                        "type": 2,
                        "sortPos": 2,
                        "player": null
                    }
                ]
            },
            "guest": null,
            "endTime": "16:52",
            "extraTimeFirstHalf": 1,
            "extraTimeSecondHalf": 4,
            "spectators": 150
        },
        "adCode": ""
    });

    let report: MatchReport = serde_json::from_value(value).unwrap();
    assert_eq!(report.league_name, "Kreisliga 2");
    assert_eq!(report.fourth_official, None);
    assert_eq!(report.venue.type_name, Some(VenueSurface::Grass));
    assert_eq!(report.parsed_result().unwrap(), Some((2, 1)));

    let info = report.match_report_info.unwrap();
    assert_eq!(info.spectators, Some(150));
    let home = info.home.unwrap();
    assert_eq!(home.match_events.len(), 2);
    assert_eq!(home.match_events[0].event_type, EventType::Goal);
    assert_eq!(home.match_events[1].event_type, EventType::Yellow);
    assert_eq!(home.match_events[1].additional_time_minute, 3);
}

#[test]
fn test_top_scorer_deserialization() {
    let value = json!({
        "compoundId": "02ICOF9JDO000002VV0AG80NVV8PGV9T",
        "competitionName": "Kreisliga 2",
        "adCode": "",
        "scorers": [
            {
                "playerImage": "https://cdn.bfv.de/p1.jpg",
                "playerImageStamp": "https://cdn.bfv.de/p1s.jpg",
                "playerImageCopyright": null,
                "name": "M. Torjäger",
                "team": { "permanentId": "016PE7FISS000000VV0AG811VTE5EA5R", "name": "TSV Kornburg II" },
                "rank": 1,
                "goals": 17
            }
        ]
    });

    let top: TopScorer = serde_json::from_value(value).unwrap();
    assert_eq!(top.scorers.len(), 1);
    assert_eq!(top.scorers[0].goals, 17);
    assert_eq!(top.scorers[0].team.name.as_deref(), Some("TSV Kornburg II"));
}

#[test]
fn test_squad_keeps_raw_players() {
    let value = json!({
        "public": true,
        "season": { "id": "223", "name": "2025/26" },
        "team": { "permanentId": "016PE7FISS000000VV0AG811VTE5EA5R", "name": null },
        "players": [ { "anything": "goes" }, { "shape": ["varies"] } ]
    });

    let squad: Squad = serde_json::from_value(value).unwrap();
    assert!(squad.public);
    assert_eq!(squad.team.name, None);
    assert_eq!(squad.players.len(), 2);
}
