//! Team (one or two players) and TeamStats (per-group standings row).

use crate::models::game::Side;
use crate::models::player::{PlayerId, ProfileRef};
use serde::{Deserialize, Serialize};

/// Identity key of a team: `"{player_1}-{player_2}"`, right side empty for a solo team.
pub type TeamId = String;

/// Points awarded for a win in group play.
pub const POINTS_PER_WIN: u32 = 3;

/// A team as it appears in a match slot. Not persisted on its own.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub player_1_id: PlayerId,
    pub player_2_id: Option<PlayerId>,
    /// Profile names, when the datastore joined them.
    pub player_1_name: Option<String>,
    pub player_2_name: Option<String>,
}

impl Team {
    pub fn new(player_1_id: PlayerId, player_2_id: Option<PlayerId>) -> Self {
        Self {
            player_1_id,
            player_2_id,
            player_1_name: None,
            player_2_name: None,
        }
    }

    pub fn solo(player_id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            player_1_name: Some(name.into()),
            ..Self::new(player_id, None)
        }
    }

    pub fn pair(
        player_1_id: PlayerId,
        player_1_name: impl Into<String>,
        player_2_id: PlayerId,
        player_2_name: impl Into<String>,
    ) -> Self {
        Self {
            player_1_id,
            player_2_id: Some(player_2_id),
            player_1_name: Some(player_1_name.into()),
            player_2_name: Some(player_2_name.into()),
        }
    }

    /// Build a team from a match row's id columns and joined profiles.
    pub fn from_profiles(
        player_1_id: PlayerId,
        player_2_id: Option<PlayerId>,
        player_1: Option<&ProfileRef>,
        player_2: Option<&ProfileRef>,
    ) -> Self {
        Self {
            player_1_id,
            player_2_id,
            player_1_name: player_1.and_then(ProfileRef::name).map(str::to_owned),
            player_2_name: player_2.and_then(ProfileRef::name).map(str::to_owned),
        }
    }

    /// Deterministic identity key. Names play no part, so the same pair of
    /// players always folds into the same standings row.
    pub fn id(&self) -> TeamId {
        match self.player_2_id {
            Some(p2) => format!("{}-{}", self.player_1_id, p2),
            None => format!("{}-", self.player_1_id),
        }
    }

    /// "A & B" when the partner's name is known, else "A"; falls back to the
    /// slot placeholder ("Team 1"/"Team 2") when there is no name for player 1.
    pub fn display_name(&self, side: Side) -> String {
        let p1 = self.player_1_name.as_deref().filter(|n| !n.is_empty());
        let p2 = self.player_2_name.as_deref().filter(|n| !n.is_empty());
        match (p1, p2) {
            (p1, Some(p2)) => format!("{} & {}", p1.unwrap_or("Player"), p2),
            (Some(p1), None) => p1.to_owned(),
            (None, None) => side.placeholder_name().to_owned(),
        }
    }
}

/// Accumulated group-stage record of one team in one group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team_id: TeamId,
    pub team_name: String,
    pub group_name: String,
    pub team: Team,
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
    /// Set and point totals are widened so that summing per-match `u32` counters cannot overflow.
    pub sets_won: u64,
    pub sets_lost: u64,
    pub points_scored: u64,
    pub points_against: u64,
    /// League points: [`POINTS_PER_WIN`] per win.
    pub points: u64,
    pub qualified: bool,
    pub eliminated: bool,
}

impl TeamStats {
    /// Empty row for a team first seen in `side` of a match in `group_name`.
    pub fn new(team: &Team, side: Side, group_name: impl Into<String>) -> Self {
        Self {
            team_id: team.id(),
            team_name: team.display_name(side),
            group_name: group_name.into(),
            team: team.clone(),
            matches: 0,
            wins: 0,
            losses: 0,
            sets_won: 0,
            sets_lost: 0,
            points_scored: 0,
            points_against: 0,
            points: 0,
            qualified: false,
            eliminated: false,
        }
    }

    /// Add one played match's sets and points (own first, opponent second).
    pub fn add_played(&mut self, sets_for: u32, sets_against: u32, score_for: u32, score_against: u32) {
        self.matches = self.matches.saturating_add(1);
        self.sets_won = self.sets_won.saturating_add(u64::from(sets_for));
        self.sets_lost = self.sets_lost.saturating_add(u64::from(sets_against));
        self.points_scored = self.points_scored.saturating_add(u64::from(score_for));
        self.points_against = self.points_against.saturating_add(u64::from(score_against));
    }

    pub fn add_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
        self.points = self.points.saturating_add(u64::from(POINTS_PER_WIN));
    }

    pub fn add_loss(&mut self) {
        self.losses = self.losses.saturating_add(1);
    }

    pub fn set_difference(&self) -> i128 {
        i128::from(self.sets_won) - i128::from(self.sets_lost)
    }

    pub fn point_difference(&self) -> i128 {
        i128::from(self.points_scored) - i128::from(self.points_against)
    }
}
