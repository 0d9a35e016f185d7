//! Qualification: flag the top of each group as qualified and the bottom as eliminated.

use crate::models::{GroupStandings, QualificationOverrides, QualificationStatus, Team, TeamStats};

/// Number of teams per group that go through to the knockout stage.
pub const QUALIFIERS_PER_GROUP: usize = 2;

/// Default flags for the team ranked at `index` (0-based) in a group of `len` teams.
///
/// The top [`QUALIFIERS_PER_GROUP`] qualify. The last team is eliminated unless it
/// already qualified, so a two-team group has two qualifiers and nobody eliminated.
pub fn positional_status(index: usize, len: usize) -> QualificationStatus {
    if index < QUALIFIERS_PER_GROUP {
        QualificationStatus {
            qualified: true,
            eliminated: false,
        }
    } else {
        QualificationStatus {
            qualified: false,
            eliminated: index + 1 == len,
        }
    }
}

/// Set `qualified`/`eliminated` on an already ranked group.
///
/// An override for a team replaces both flags; otherwise the positional default applies.
pub fn assign_qualification(teams: &mut [TeamStats], overrides: &QualificationOverrides) {
    let len = teams.len();
    for (index, team) in teams.iter_mut().enumerate() {
        let status = overrides
            .get(&team.team_id)
            .unwrap_or_else(|| positional_status(index, len));
        team.qualified = status.qualified;
        team.eliminated = status.eliminated;
    }
}

/// All qualified teams, group by group and in rank order within each group.
pub fn collect_qualified_teams(standings: &[GroupStandings]) -> Vec<Team> {
    standings
        .iter()
        .flat_map(GroupStandings::qualified)
        .map(|t| t.team.clone())
        .collect()
}
