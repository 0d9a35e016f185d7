//! Integration tests for the CSV standings table and the knockout draw output.

use padel_bracket::{
    calculate_group_standings, generate_knockout_stage, standing_rows, write_standings_csv,
    GameMatch, MatchResult, QualificationOverrides, QualificationStatus, Side, Team,
    TournamentId,
};
use serde_json::json;
use uuid::Uuid;

const HEADER: &str = "group,rank,team_id,team,played,wins,losses,sets_won,sets_lost,\
points_scored,points_against,points,status";

fn completed(
    tournament_id: TournamentId,
    team_1: &Team,
    team_2: &Team,
    sets: (u32, u32),
    score: (u32, u32),
) -> GameMatch {
    GameMatch::new(tournament_id, "Group A", team_1.clone(), team_2.clone()).with_result(
        MatchResult {
            team_1_sets_won: sets.0,
            team_2_sets_won: sets.1,
            team_1_score: score.0,
            team_2_score: score.1,
            winner: Some(Side::One),
        },
    )
}

/// A beats B 2-0, 21-15 and C 2-1, 21-18.
fn three_team_group() -> (TournamentId, Vec<GameMatch>, Team, Team, Team) {
    let t = Uuid::new_v4();
    let a = Team::pair(Uuid::new_v4(), "Ana", Uuid::new_v4(), "Bea");
    let b = Team::pair(Uuid::new_v4(), "Carla", Uuid::new_v4(), "Dani");
    let c = Team::solo(Uuid::new_v4(), "Eva");
    let matches = vec![
        completed(t, &a, &b, (2, 0), (21, 15)),
        completed(t, &a, &c, (2, 1), (21, 18)),
    ];
    (t, matches, a, b, c)
}

fn csv_lines(matches: &[GameMatch], overrides: &QualificationOverrides) -> Vec<String> {
    let standings = calculate_group_standings(matches, overrides);
    let mut out = Vec::new();
    write_standings_csv(&standings, &mut out).unwrap();
    String::from_utf8(out).unwrap().lines().map(str::to_owned).collect()
}

#[test]
fn csv_lists_every_team_in_rank_order_with_status() {
    let (_, matches, a, b, c) = three_team_group();
    let lines = csv_lines(&matches, &QualificationOverrides::new());
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], HEADER);
    assert_eq!(
        lines[1],
        format!("Group A,1,{},Ana & Bea,2,2,0,4,1,42,33,6,qualified", a.id())
    );
    assert_eq!(lines[2], format!("Group A,2,{},Eva,1,0,1,1,2,18,21,0,qualified", c.id()));
    assert_eq!(
        lines[3],
        format!("Group A,3,{},Carla & Dani,1,0,1,0,2,15,21,0,eliminated", b.id())
    );
}

#[test]
fn csv_status_is_blank_when_override_clears_both_flags() {
    let (_, matches, _, b, _) = three_team_group();
    let mut overrides = QualificationOverrides::new();
    overrides.set(b.id(), QualificationStatus::default());

    let standings = calculate_group_standings(&matches, &overrides);
    let rows = standing_rows(&standings);
    let last = rows.last().unwrap();
    assert_eq!(last.team_id, b.id());
    assert_eq!(last.rank, 3);
    assert_eq!(last.status, "");

    let lines = csv_lines(&matches, &overrides);
    assert!(lines[3].ends_with(",15,21,0,"));
}

#[test]
fn rows_rank_from_one_within_each_group() {
    let t = Uuid::new_v4();
    let team = |name: &str| Team::solo(Uuid::new_v4(), name);
    let (a, b, c, d) = (team("A"), team("B"), team("C"), team("D"));
    let mut second = completed(t, &c, &d, (2, 0), (21, 10));
    second.round_name = "Group B".to_owned();
    let matches = vec![completed(t, &a, &b, (2, 0), (21, 10)), second];
    let standings = calculate_group_standings(&matches, &QualificationOverrides::new());

    let ranks: Vec<_> = standing_rows(&standings).iter().map(|r| (r.group, r.rank)).collect();
    assert_eq!(
        ranks,
        vec![("Group A", 1), ("Group A", 2), ("Group B", 1), ("Group B", 2)]
    );
}

#[test]
fn no_standings_writes_nothing() {
    let mut out = Vec::new();
    write_standings_csv(&[], &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn knockout_draw_serializes_as_insertable_rows() {
    let (t, matches, a, _, c) = three_team_group();
    let standings = calculate_group_standings(&matches, &QualificationOverrides::new());
    let draw = generate_knockout_stage(t, &standings).unwrap();

    let value = serde_json::to_value(&draw).unwrap();
    assert_eq!(value["round_name"], "Final");
    assert_eq!(value["unpaired"], serde_json::Value::Null);
    assert_eq!(
        value["matches"],
        json!([{
            "tournament_id": t,
            "round_name": "Final",
            "team1_player1_id": a.player_1_id,
            "team1_player2_id": a.player_2_id,
            "team2_player1_id": c.player_1_id,
            "team2_player2_id": null,
            "status": "scheduled"
        }])
    );
}
