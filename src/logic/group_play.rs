//! Group stage: fold completed group matches into per-team stats and rank them.

use crate::logic::final_selection::assign_qualification;
use crate::models::{
    GameMatch, GroupStandings, QualificationOverrides, Side, Team, TeamId, TeamStats,
};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Rows of one group in first-seen order, indexed by team identity.
struct GroupAccumulator {
    group_name: String,
    teams: Vec<TeamStats>,
    index: HashMap<TeamId, usize>,
}

impl GroupAccumulator {
    fn new(group_name: &str) -> Self {
        Self {
            group_name: group_name.to_owned(),
            teams: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Row for `team`, created empty the first time the team is seen.
    fn row_mut(&mut self, team: &Team, side: Side) -> &mut TeamStats {
        let id = team.id();
        let idx = match self.index.get(&id) {
            Some(&idx) => idx,
            None => {
                self.teams.push(TeamStats::new(team, side, &self.group_name));
                self.index.insert(id, self.teams.len() - 1);
                self.teams.len() - 1
            }
        };
        &mut self.teams[idx]
    }

    fn into_standings(self) -> GroupStandings {
        GroupStandings {
            group_name: self.group_name,
            teams: self.teams,
        }
    }
}

/// Apply one completed match to both teams' rows.
///
/// A match without a winner still counts as played (sets and points included)
/// but adds neither a win nor a loss.
fn apply_match_result(group: &mut GroupAccumulator, m: &GameMatch) {
    for side in [Side::One, Side::Two] {
        let opponent = side.opponent();
        let row = group.row_mut(m.team(side), side);
        row.add_played(
            m.sets_won(side),
            m.sets_won(opponent),
            m.score(side),
            m.score(opponent),
        );
        match m.winner {
            Some(w) if w == side => row.add_win(),
            Some(_) => row.add_loss(),
            None => {}
        }
    }
}

/// Accumulate stats for every group that has at least one completed group-stage match.
///
/// Only matches whose round label contains "group" (any case) and whose status is
/// completed are folded. Groups and teams keep first-seen order; nothing is sorted
/// or flagged yet.
pub fn accumulate_group_stats(matches: &[GameMatch]) -> Vec<GroupStandings> {
    let mut groups: Vec<GroupAccumulator> = Vec::new();
    let mut group_index: HashMap<&str, usize> = HashMap::new();

    for m in matches.iter().filter(|m| m.is_group_stage() && m.is_completed()) {
        let idx = *group_index.entry(m.round_name.as_str()).or_insert_with(|| {
            groups.push(GroupAccumulator::new(&m.round_name));
            groups.len() - 1
        });
        apply_match_result(&mut groups[idx], m);
    }

    groups.into_iter().map(GroupAccumulator::into_standings).collect()
}

/// Ranking order: league points, then set difference, then point difference, all descending.
pub fn compare_standings(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.set_difference().cmp(&a.set_difference()))
        .then_with(|| b.point_difference().cmp(&a.point_difference()))
}

/// Stable sort by [`compare_standings`]; exact ties keep their current order.
pub fn sort_standings(teams: &mut [TeamStats]) {
    teams.sort_by(compare_standings);
}

/// Compute ranked standings with qualification flags for every group.
///
/// 1. Fold completed group matches ([`accumulate_group_stats`]).
/// 2. Sort each group ([`sort_standings`]).
/// 3. Flag qualified/eliminated by position, or from `overrides` when an entry exists.
///
/// Groups without completed matches do not appear in the result.
pub fn calculate_group_standings(
    matches: &[GameMatch],
    overrides: &QualificationOverrides,
) -> Vec<GroupStandings> {
    let mut standings = accumulate_group_stats(matches);
    for group in &mut standings {
        sort_standings(&mut group.teams);
        assign_qualification(&mut group.teams, overrides);
    }
    log::debug!(
        "Computed standings for {} group(s) from {} match(es)",
        standings.len(),
        matches.len()
    );
    standings
}
