//! Integration tests for row validation, team identity and the bracket view.

use padel_bracket::{
    bracket_rounds, calculate_group_standings, matches_from_rows, BracketError, GameMatch,
    MatchRow, MatchStatus, QualificationOverrides, Side, Team,
};
use serde_json::json;
use uuid::Uuid;

fn row(overrides: serde_json::Value) -> MatchRow {
    let mut base = json!({
        "id": Uuid::new_v4(),
        "tournament_id": Uuid::new_v4(),
        "round_name": "Group 1",
        "status": "completed",
        "team1_player1_id": Uuid::new_v4(),
        "team1_player2_id": Uuid::new_v4(),
        "team2_player1_id": Uuid::new_v4(),
        "team2_player2_id": null,
        "team1_sets_won": 2,
        "team2_sets_won": 1,
        "team1_score": 21,
        "team2_score": 18,
        "winner_team": 1,
        "team1_player1": { "full_name": "Ana" },
        "team1_player2": { "full_name": "Bea" },
        "team2_player1": { "full_name": "Cris" },
        "team2_player2": null
    });
    if let (Some(base), Some(extra)) = (base.as_object_mut(), overrides.as_object()) {
        for (k, v) in extra {
            base.insert(k.clone(), v.clone());
        }
    }
    serde_json::from_value(base).unwrap()
}

#[test]
fn row_becomes_typed_match() {
    let r = row(json!({}));
    let (id, p1) = (r.id, r.team1_player1_id);
    let m = GameMatch::try_from(r).unwrap();
    assert_eq!(m.id, id);
    assert_eq!(m.status, MatchStatus::Completed);
    assert_eq!(m.winner, Some(Side::One));
    assert_eq!((m.team_1_sets_won, m.team_2_sets_won), (2, 1));
    assert_eq!(m.team_1.player_1_id, p1);
    assert_eq!(m.team_1.display_name(Side::One), "Ana & Bea");
    assert_eq!(m.team_2.display_name(Side::Two), "Cris");
    assert!(m.is_group_stage());
}

#[test]
fn nullable_columns_default_to_zero_and_scheduled() {
    let m = GameMatch::try_from(row(json!({
        "status": null,
        "team1_sets_won": null,
        "team2_score": null,
        "winner_team": null
    })))
    .unwrap();
    assert_eq!(m.status, MatchStatus::Scheduled);
    assert_eq!(m.team_1_sets_won, 0);
    assert_eq!(m.team_2_score, 0);
    assert_eq!(m.winner, None);
}

#[test]
fn invalid_rows_are_rejected_at_the_boundary() {
    let bad_winner = row(json!({ "winner_team": 3 }));
    let id = bad_winner.id;
    assert!(matches!(
        GameMatch::try_from(bad_winner),
        Err(BracketError::InvalidMatchRow { match_id, .. }) if match_id == id
    ));

    let negative = row(json!({ "team2_sets_won": -1 }));
    assert!(matches!(
        matches_from_rows(vec![row(json!({})), negative]),
        Err(BracketError::InvalidMatchRow { .. })
    ));
}

#[test]
fn team_identity_ignores_names() {
    let (p1, p2) = (Uuid::new_v4(), Uuid::new_v4());
    let named = Team::pair(p1, "Ana", p2, "Bea");
    let bare = Team::new(p1, Some(p2));
    assert_eq!(named.id(), bare.id());
    assert_eq!(named.id(), format!("{p1}-{p2}"));
    assert_eq!(Team::new(p1, None).id(), format!("{p1}-"));
    assert_ne!(Team::new(p1, None).id(), bare.id());
}

#[test]
fn display_name_falls_back_to_placeholders() {
    let (p1, p2) = (Uuid::new_v4(), Uuid::new_v4());
    assert_eq!(Team::new(p1, Some(p2)).display_name(Side::One), "Team 1");
    assert_eq!(Team::new(p1, None).display_name(Side::Two), "Team 2");

    let partner_only = Team {
        player_2_name: Some("Bea".to_owned()),
        ..Team::new(p1, Some(p2))
    };
    assert_eq!(partner_only.display_name(Side::One), "Player & Bea");

    let blank = GameMatch::try_from(row(json!({ "team2_player1": { "full_name": "  " } }))).unwrap();
    assert_eq!(blank.team_2.display_name(Side::Two), "Team 2");
}

#[test]
fn bracket_separates_group_and_knockout_rounds() {
    let t = Uuid::new_v4();
    let team = |name: &str| Team::solo(Uuid::new_v4(), name);
    let matches = vec![
        GameMatch::new(t, "Group 2", team("A"), team("B")),
        GameMatch::new(t, "Semi-Final", team("C"), team("D")),
        GameMatch::new(t, "Group 1", team("E"), team("F")),
        GameMatch::new(t, "Group 2", team("G"), team("H")),
        GameMatch::new(t, "Final", team("I"), team("J")),
    ];
    let bracket = bracket_rounds(&matches);

    let groups: Vec<_> = bracket.group_rounds.iter().map(|r| (r.name, r.matches.len())).collect();
    assert_eq!(groups, vec![("Group 2", 2), ("Group 1", 1)]);
    let knockout: Vec<_> = bracket.knockout_rounds.iter().map(|r| r.name).collect();
    assert_eq!(knockout, vec!["Semi-Final", "Final"]);
}

#[test]
fn large_valid_scores_accumulate_without_overflow() {
    let (t, a1, a2, b1) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let same_teams = || {
        row(json!({
            "tournament_id": t,
            "team1_player1_id": a1,
            "team1_player2_id": a2,
            "team2_player1_id": b1,
            "team1_sets_won": u32::MAX,
            "team1_score": 4_000_000_000u32,
        }))
    };
    let matches = matches_from_rows(vec![same_teams(), same_teams()]).unwrap();
    let standings = calculate_group_standings(&matches, &QualificationOverrides::new());

    let leader = &standings[0].teams[0];
    assert_eq!(leader.team_id, Team::new(a1, Some(a2)).id());
    assert_eq!(leader.points_scored, 8_000_000_000);
    assert_eq!(leader.sets_won, 2 * u64::from(u32::MAX));
    assert_eq!(leader.points, 6);
    let trailer = &standings[0].teams[1];
    assert_eq!(trailer.points_against, 8_000_000_000);
    assert_eq!(trailer.point_difference(), 36 - 8_000_000_000);
}
