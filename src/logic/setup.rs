//! Setup: form teams from registrations and generate the initial match structure.

use crate::logic::finals::{generate_knockout_matches, MIN_KNOCKOUT_TEAMS};
use crate::models::{BracketError, NewMatch, Participant, PlayerId, Team, TournamentId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default number of teams per group.
pub const DEFAULT_TEAMS_PER_GROUP: usize = 4;

/// How the initial matches of a tournament are laid out.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "format")]
pub enum TournamentFormat {
    /// Round-robin groups, followed by knockout rounds generated from the standings.
    GroupsElimination { teams_per_group: usize },
    /// Knockout from the first match.
    SingleElimination,
    /// Everyone plays everyone in a single group.
    RoundRobin,
}

impl Default for TournamentFormat {
    fn default() -> Self {
        TournamentFormat::GroupsElimination {
            teams_per_group: DEFAULT_TEAMS_PER_GROUP,
        }
    }
}

fn team_from_participant(p: &Participant, partner_id: Option<PlayerId>) -> Team {
    Team {
        player_1_id: p.player_id,
        player_2_id: partner_id,
        player_1_name: p.player_name().map(str::to_owned),
        player_2_name: p.partner_name().map(str::to_owned),
    }
}

/// Turn registrations into teams.
///
/// Registered pairs come first, in registration order; a pair registered by both
/// partners is only counted once. Remaining solo players are then paired in order,
/// and an odd one out stays without a team.
pub fn create_teams_from_participants(participants: &[Participant]) -> Vec<Team> {
    let mut teams = Vec::new();
    let mut placed: HashSet<PlayerId> = HashSet::new();

    for p in participants {
        if let Some(partner_id) = p.partner_id {
            if placed.contains(&p.player_id) {
                continue;
            }
            teams.push(team_from_participant(p, Some(partner_id)));
            placed.insert(p.player_id);
            placed.insert(partner_id);
        }
    }

    let solos: Vec<&Participant> = participants
        .iter()
        .filter(|p| p.partner_id.is_none() && !placed.contains(&p.player_id))
        .collect();
    for pair in solos.chunks_exact(2) {
        teams.push(Team {
            player_1_id: pair[0].player_id,
            player_2_id: Some(pair[1].player_id),
            player_1_name: pair[0].player_name().map(str::to_owned),
            player_2_name: pair[1].player_name().map(str::to_owned),
        });
    }
    if let [left_out] = solos.chunks_exact(2).remainder() {
        log::warn!("Solo player {} has no partner and was not placed in a team", left_out.player_id);
    }

    teams
}

/// Round-robin group matches: teams are split into consecutive groups of
/// `teams_per_group` (the last group may be smaller) named "Group 1", "Group 2", ...
pub fn generate_group_stage(
    tournament_id: TournamentId,
    teams: &[Team],
    teams_per_group: usize,
) -> Result<Vec<NewMatch>, BracketError> {
    if teams_per_group < 2 {
        return Err(BracketError::InvalidGroupSize(teams_per_group));
    }
    if teams.len() < MIN_KNOCKOUT_TEAMS {
        return Err(BracketError::InsufficientTeams {
            required: MIN_KNOCKOUT_TEAMS,
            available: teams.len(),
        });
    }

    let mut matches = Vec::new();
    for (group_index, group) in teams.chunks(teams_per_group).enumerate() {
        let name = format!("Group {}", group_index + 1);
        for (i, team_1) in group.iter().enumerate() {
            for team_2 in &group[i + 1..] {
                matches.push(NewMatch::new(tournament_id, name.as_str(), team_1, team_2));
            }
        }
    }
    log::debug!(
        "Generated {} group match(es) for {} team(s)",
        matches.len(),
        teams.len()
    );
    Ok(matches)
}

/// First knockout round of a single-elimination bracket. Later rounds are paired
/// from results with [`generate_knockout_matches`].
pub fn generate_single_elimination(
    tournament_id: TournamentId,
    teams: &[Team],
) -> Result<Vec<NewMatch>, BracketError> {
    generate_knockout_matches(tournament_id, teams).map(|draw| draw.matches)
}

/// Build teams from registrations and lay out the initial matches for `format`.
pub fn generate_structure(
    tournament_id: TournamentId,
    participants: &[Participant],
    format: TournamentFormat,
) -> Result<Vec<NewMatch>, BracketError> {
    let teams = create_teams_from_participants(participants);
    match format {
        TournamentFormat::GroupsElimination { teams_per_group } => {
            generate_group_stage(tournament_id, &teams, teams_per_group)
        }
        TournamentFormat::SingleElimination => generate_single_elimination(tournament_id, &teams),
        TournamentFormat::RoundRobin => {
            let size = teams.len().max(2);
            generate_group_stage(tournament_id, &teams, size)
        }
    }
}
