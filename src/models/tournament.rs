//! Tournament-level types: errors, group standings and manual qualification overrides.

use crate::models::game::MatchId;
use crate::models::team::{TeamId, TeamStats};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Errors that can occur while computing standings or generating matches.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// Not enough teams to pair (need at least `required`).
    InsufficientTeams { required: usize, available: usize },
    /// A datastore row failed validation.
    InvalidMatchRow { match_id: MatchId, reason: String },
    /// Groups must hold at least two teams.
    InvalidGroupSize(usize),
    /// Bulk scheduling needs at least one court.
    NoCourts,
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::InsufficientTeams { required, available } => write!(
                f,
                "Need at least {} qualified teams to generate knockout stage (have {})",
                required, available
            ),
            BracketError::InvalidMatchRow { match_id, reason } => {
                write!(f, "Invalid match row {}: {}", match_id, reason)
            }
            BracketError::InvalidGroupSize(size) => {
                write!(f, "Groups need at least 2 teams (got {})", size)
            }
            BracketError::NoCourts => write!(f, "Need at least 1 court to schedule matches"),
        }
    }
}

impl std::error::Error for BracketError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Qualification flags of a team. Used both for computed standings and operator overrides.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct QualificationStatus {
    pub qualified: bool,
    pub eliminated: bool,
}

/// Which flag an operator toggles.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationToggle {
    Qualified,
    Eliminated,
}

/// Operator-set qualification flags, keyed by team identity.
///
/// An entry replaces both positional flags of that team; it is never merged with them.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualificationOverrides(HashMap<TeamId, QualificationStatus>);

impl QualificationOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, team_id: &str) -> Option<QualificationStatus> {
        self.0.get(team_id).copied()
    }

    pub fn set(&mut self, team_id: impl Into<TeamId>, status: QualificationStatus) {
        self.0.insert(team_id.into(), status);
    }

    pub fn remove(&mut self, team_id: &str) -> Option<QualificationStatus> {
        self.0.remove(team_id)
    }

    /// Flip one flag of the stored override and clear the other one.
    /// A team without an override starts from both flags unset.
    pub fn toggle(&mut self, team_id: impl Into<TeamId>, toggle: QualificationToggle) -> QualificationStatus {
        let entry = self.0.entry(team_id.into()).or_default();
        *entry = match toggle {
            QualificationToggle::Qualified => QualificationStatus {
                qualified: !entry.qualified,
                eliminated: false,
            },
            QualificationToggle::Eliminated => QualificationStatus {
                qualified: false,
                eliminated: !entry.eliminated,
            },
        };
        *entry
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ranked standings of one group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupStandings {
    pub group_name: String,
    /// Best first.
    pub teams: Vec<TeamStats>,
}

impl GroupStandings {
    pub fn qualified(&self) -> impl Iterator<Item = &TeamStats> {
        self.teams.iter().filter(|t| t.qualified)
    }

    pub fn eliminated(&self) -> impl Iterator<Item = &TeamStats> {
        self.teams.iter().filter(|t| t.eliminated)
    }

    pub fn team(&self, team_id: &str) -> Option<&TeamStats> {
        self.teams.iter().find(|t| t.team_id == team_id)
    }

    /// 1-based rank of a team in this group.
    pub fn rank_of(&self, team_id: &str) -> Option<usize> {
        self.teams.iter().position(|t| t.team_id == team_id).map(|i| i + 1)
    }
}
