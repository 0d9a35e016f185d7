//! Match records: the raw datastore row, the validated match, and the insert descriptor.

use crate::models::player::{PlayerId, ProfileRef};
use crate::models::team::Team;
use crate::models::tournament::{BracketError, TournamentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which slot of a match a team occupies (and, for results, which team won).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    One,
    Two,
}

impl Side {
    /// Map the datastore's `winner_team` integer (1 or 2) to a side.
    pub fn from_slot(slot: i64) -> Option<Self> {
        match slot {
            1 => Some(Side::One),
            2 => Some(Side::Two),
            _ => None,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Name shown when a team's first player has no profile name.
    pub fn placeholder_name(self) -> &'static str {
        match self {
            Side::One => "Team 1",
            Side::Two => "Team 2",
        }
    }
}

/// Lifecycle of a match, mirroring the datastore's `match_status` enum.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

/// A match row as exported by the datastore, with the joined player profiles.
///
/// Every nullable column is optional here; [`GameMatch::try_from`] is the only way in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRow {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub round_name: String,
    #[serde(default)]
    pub status: Option<MatchStatus>,
    pub team1_player1_id: PlayerId,
    #[serde(default)]
    pub team1_player2_id: Option<PlayerId>,
    pub team2_player1_id: PlayerId,
    #[serde(default)]
    pub team2_player2_id: Option<PlayerId>,
    #[serde(default)]
    pub team1_sets_won: Option<i64>,
    #[serde(default)]
    pub team2_sets_won: Option<i64>,
    #[serde(default)]
    pub team1_score: Option<i64>,
    #[serde(default)]
    pub team2_score: Option<i64>,
    #[serde(default)]
    pub winner_team: Option<i64>,
    #[serde(default)]
    pub scheduled_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub court_number: Option<i64>,
    #[serde(default)]
    pub team1_player1: Option<ProfileRef>,
    #[serde(default)]
    pub team1_player2: Option<ProfileRef>,
    #[serde(default)]
    pub team2_player1: Option<ProfileRef>,
    #[serde(default)]
    pub team2_player2: Option<ProfileRef>,
}

/// Final score of a match as entered by an operator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub team_1_sets_won: u32,
    pub team_2_sets_won: u32,
    pub team_1_score: u32,
    pub team_2_score: u32,
    /// None when the result was recorded without a decided winner.
    pub winner: Option<Side>,
}

/// A validated match between two teams (one or two players each).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    /// Free-text round label, e.g. "Group 1" or "Semi-Final".
    pub round_name: String,
    pub status: MatchStatus,
    pub team_1: Team,
    pub team_2: Team,
    pub team_1_sets_won: u32,
    pub team_2_sets_won: u32,
    pub team_1_score: u32,
    pub team_2_score: u32,
    pub winner: Option<Side>,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub court_number: Option<u32>,
}

impl GameMatch {
    /// A scheduled match with no score yet.
    pub fn new(
        tournament_id: TournamentId,
        round_name: impl Into<String>,
        team_1: Team,
        team_2: Team,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            round_name: round_name.into(),
            status: MatchStatus::Scheduled,
            team_1,
            team_2,
            team_1_sets_won: 0,
            team_2_sets_won: 0,
            team_1_score: 0,
            team_2_score: 0,
            winner: None,
            scheduled_time: None,
            court_number: None,
        }
    }

    /// Store the final score and mark the match completed.
    pub fn record_result(&mut self, result: MatchResult) {
        self.team_1_sets_won = result.team_1_sets_won;
        self.team_2_sets_won = result.team_2_sets_won;
        self.team_1_score = result.team_1_score;
        self.team_2_score = result.team_2_score;
        self.winner = result.winner;
        self.status = MatchStatus::Completed;
    }

    /// Builder-style variant of [`GameMatch::record_result`].
    pub fn with_result(mut self, result: MatchResult) -> Self {
        self.record_result(result);
        self
    }

    /// Group-stage rounds are recognised by label only ("Group A", "group 2", ...).
    pub fn is_group_stage(&self) -> bool {
        is_group_round(&self.round_name)
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::One => &self.team_1,
            Side::Two => &self.team_2,
        }
    }

    pub fn sets_won(&self, side: Side) -> u32 {
        match side {
            Side::One => self.team_1_sets_won,
            Side::Two => self.team_2_sets_won,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::One => self.team_1_score,
            Side::Two => self.team_2_score,
        }
    }
}

/// Case-insensitive "group" substring test on a round label.
pub fn is_group_round(round_name: &str) -> bool {
    round_name.to_lowercase().contains("group")
}

fn counter(value: Option<i64>, column: &str, match_id: MatchId) -> Result<u32, BracketError> {
    let v = value.unwrap_or(0);
    u32::try_from(v).map_err(|_| BracketError::InvalidMatchRow {
        match_id,
        reason: format!("{column} must be a non-negative integer, got {v}"),
    })
}

impl TryFrom<MatchRow> for GameMatch {
    type Error = BracketError;

    fn try_from(row: MatchRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let winner = match row.winner_team {
            None => None,
            Some(slot) => Some(Side::from_slot(slot).ok_or_else(|| {
                BracketError::InvalidMatchRow {
                    match_id: id,
                    reason: format!("winner_team must be 1 or 2, got {slot}"),
                }
            })?),
        };
        let court_number = match row.court_number {
            None => None,
            Some(c) => Some(counter(Some(c), "court_number", id)?),
        };
        Ok(Self {
            id,
            tournament_id: row.tournament_id,
            round_name: row.round_name,
            status: row.status.unwrap_or_default(),
            team_1: Team::from_profiles(
                row.team1_player1_id,
                row.team1_player2_id,
                row.team1_player1.as_ref(),
                row.team1_player2.as_ref(),
            ),
            team_2: Team::from_profiles(
                row.team2_player1_id,
                row.team2_player2_id,
                row.team2_player1.as_ref(),
                row.team2_player2.as_ref(),
            ),
            team_1_sets_won: counter(row.team1_sets_won, "team1_sets_won", id)?,
            team_2_sets_won: counter(row.team2_sets_won, "team2_sets_won", id)?,
            team_1_score: counter(row.team1_score, "team1_score", id)?,
            team_2_score: counter(row.team2_score, "team2_score", id)?,
            winner,
            scheduled_time: row.scheduled_time,
            court_number,
        })
    }
}

/// Validate a batch of exported rows, stopping at the first bad one.
pub fn matches_from_rows(rows: Vec<MatchRow>) -> Result<Vec<GameMatch>, BracketError> {
    rows.into_iter().map(GameMatch::try_from).collect()
}

/// A match to be inserted by the datastore (column names match the `matches` table).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewMatch {
    pub tournament_id: TournamentId,
    pub round_name: String,
    pub team1_player1_id: PlayerId,
    pub team1_player2_id: Option<PlayerId>,
    pub team2_player1_id: PlayerId,
    pub team2_player2_id: Option<PlayerId>,
    pub status: MatchStatus,
}

impl NewMatch {
    pub fn new(
        tournament_id: TournamentId,
        round_name: impl Into<String>,
        team_1: &Team,
        team_2: &Team,
    ) -> Self {
        Self {
            tournament_id,
            round_name: round_name.into(),
            team1_player1_id: team_1.player_1_id,
            team1_player2_id: team_1.player_2_id,
            team2_player1_id: team_2.player_1_id,
            team2_player2_id: team_2.player_2_id,
            status: MatchStatus::Scheduled,
        }
    }

    pub fn team_1(&self) -> Team {
        Team::new(self.team1_player1_id, self.team1_player2_id)
    }

    pub fn team_2(&self) -> Team {
        Team::new(self.team2_player1_id, self.team2_player2_id)
    }
}
