use super::*;

fn sample_matches() -> Vec<PlayedMatch> {
    vec![
        PlayedMatch::new("A", "B", 1, 1),
        PlayedMatch::new("B", "C", 1, 1),
        PlayedMatch::new("C", "A", 1, 0),
        PlayedMatch::new("A", "D", 2, 1),
        PlayedMatch::new("D", "B", 1, 1),
        PlayedMatch::new("C", "D", 0, 1),
    ]
}

fn record<'a>(table: &'a [TeamRecord], name: &str) -> &'a TeamRecord {
    table
        .iter()
        .find(|t| t.name == name)
        .unwrap_or_else(|| panic!("no record for {name}"))
}

#[test]
fn build_table_accumulates_records() {
    let table = build_table(sample_matches());
    assert_eq!(table.len(), 4);

    // first-appearance order
    let names: Vec<&str> = table.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C", "D"]);

    let a = record(&table, "A");
    assert_eq!(a.games, 3);
    assert_eq!(a.points, 4);
    assert_eq!(a.wins, 1);
    assert_eq!(a.draws, 1);
    assert_eq!(a.losses, 1);
    assert_eq!(a.goals_for, 3);
    assert_eq!(a.goals_against, 3);
    assert_eq!(a.away_goals_for, 0);

    let b = record(&table, "B");
    assert_eq!(b.points, 3);
    assert_eq!(b.draws, 3);
    assert_eq!(b.away_goals_for, 2);

    let d = record(&table, "D");
    assert_eq!(d.points, 4);
    assert_eq!(d.away_goals_for, 2);
    assert_eq!(d.matches().len(), 3);
}

#[test]
fn build_table_accumulates_fairplay() {
    let mut m = PlayedMatch::new("A", "B", 2, 0);
    m.home_fairplay = 3;
    m.guest_fairplay = 7;
    let table = build_table(vec![m]);

    assert_eq!(record(&table, "A").fairplay, 3);
    assert_eq!(record(&table, "B").fairplay, 7);
}

#[test]
fn points_alone_sorts_clear_tables() {
    let matches = vec![
        PlayedMatch::new("X", "Y", 2, 0),
        PlayedMatch::new("Y", "Z", 0, 1),
        PlayedMatch::new("Z", "X", 0, 3),
    ];
    let ranked = rank(matches, &[Tiebreaker::Points], None).unwrap();
    let names: Vec<&str> = ranked.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["X", "Z", "Y"]);
}

#[test]
fn head_to_head_then_away_goals_breaks_three_way_tie() {
    // A, C and D all finish on 4 points. Their mutual matches leave A and
    // D tied again on every head-to-head criterion but ahead of C on goals
    // scored; away goals finally separate D from A.
    let ranked = rank(
        sample_matches(),
        &Tiebreaker::default_order(),
        Some(&Tiebreaker::default_head_to_head()),
    )
    .unwrap();

    let names: Vec<&str> = ranked.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["D", "A", "C", "B"]);
}

#[test]
fn exhausted_chain_reports_the_tied_teams() {
    let err = rank(sample_matches(), &[Tiebreaker::Points], None).unwrap_err();
    match err {
        BfvError::UnresolvedTie { teams } => assert_eq!(teams, ["A", "C", "D"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn head_to_head_without_criteria_is_an_error() {
    let err = rank(
        sample_matches(),
        &[Tiebreaker::Points, Tiebreaker::HeadToHead],
        None,
    )
    .unwrap_err();
    assert!(matches!(err, BfvError::MissingHeadToHeadTiebreakers));
}

#[test]
fn head_to_head_without_mutual_matches_falls_through() {
    // A and B are tied on points but never met; the chain must fall
    // through to goal difference instead of dropping them.
    let matches = vec![
        PlayedMatch::new("A", "X", 3, 0),
        PlayedMatch::new("B", "Y", 2, 0),
    ];
    let ranked = rank(
        matches,
        &[
            Tiebreaker::Points,
            Tiebreaker::HeadToHead,
            Tiebreaker::GoalDifference,
        ],
        Some(&Tiebreaker::default_head_to_head()),
    )
    .unwrap();

    let names: Vec<&str> = ranked.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "Y", "X"]);
}

#[test]
fn unresolved_groups_are_returned_as_groups() {
    let groups = sort_with_tiebreakers(
        build_table(sample_matches()),
        [Tiebreaker::Points].into_iter().collect(),
        None,
    )
    .unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 3);
    assert_eq!(groups[1][0].name, "B");
}

#[test]
fn random_resolves_any_tie() {
    // two teams with identical records in every criterion
    let matches = vec![
        PlayedMatch::new("A", "B", 1, 1),
        PlayedMatch::new("B", "A", 1, 1),
    ];
    let ranked = rank(matches, &Tiebreaker::default_order(), Some(&[Tiebreaker::Points]))
        .unwrap();
    assert_eq!(ranked.len(), 2);
}

#[test]
fn duplicate_matches_hash_identically() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    assert!(seen.insert(PlayedMatch::new("A", "B", 2, 1)));
    assert!(!seen.insert(PlayedMatch::new("A", "B", 2, 1)));
    assert!(seen.insert(PlayedMatch::new("A", "B", 1, 1)));
}
