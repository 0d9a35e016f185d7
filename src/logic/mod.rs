//! Tournament business logic: setup, group standings, qualification, knockout, scheduling.

mod bracket;
mod final_selection;
mod finals;
mod group_play;
mod report;
mod schedule;
mod setup;

pub use bracket::{bracket_rounds, Bracket, BracketRound};
pub use final_selection::{
    assign_qualification, collect_qualified_teams, positional_status, QUALIFIERS_PER_GROUP,
};
pub use finals::{
    generate_knockout_matches, generate_knockout_stage, round_name, KnockoutDraw,
    MIN_KNOCKOUT_TEAMS,
};
pub use group_play::{
    accumulate_group_stats, calculate_group_standings, compare_standings, sort_standings,
};
pub use report::{standing_rows, write_standings_csv, StandingRow};
pub use schedule::{schedule_matches, BulkSchedule, ScheduleSlot};
pub use setup::{
    create_teams_from_participants, generate_group_stage, generate_single_elimination,
    generate_structure, TournamentFormat, DEFAULT_TEAMS_PER_GROUP,
};
