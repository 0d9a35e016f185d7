//! Padel tournament standings and knockout bracket calculator: models and pure business logic.

pub mod logic;
pub mod models;

pub use logic::{
    accumulate_group_stats, assign_qualification, bracket_rounds, calculate_group_standings,
    collect_qualified_teams, compare_standings, create_teams_from_participants,
    generate_group_stage, generate_knockout_matches, generate_knockout_stage,
    generate_single_elimination, generate_structure, positional_status, round_name,
    schedule_matches, sort_standings, standing_rows, write_standings_csv, Bracket, BracketRound,
    BulkSchedule, KnockoutDraw, ScheduleSlot, StandingRow, TournamentFormat,
};
pub use models::{
    is_group_round, matches_from_rows, BracketError, GameMatch, GroupStandings, MatchId,
    MatchResult, MatchRow, MatchStatus, NewMatch, Participant, PlayerId, ProfileRef,
    QualificationOverrides, QualificationStatus, QualificationToggle, Side, Team, TeamId,
    TeamStats, TournamentId,
};
