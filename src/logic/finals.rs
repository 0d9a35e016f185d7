//! Knockout stage: round naming and pairing of qualified teams into new matches.

use crate::logic::final_selection::collect_qualified_teams;
use crate::models::{BracketError, GroupStandings, NewMatch, Team, TournamentId};
use serde::{Deserialize, Serialize};

/// Minimum number of teams for a knockout round.
pub const MIN_KNOCKOUT_TEAMS: usize = 2;

/// Canonical label of a knockout round entered by `team_count` teams.
pub fn round_name(team_count: usize) -> String {
    match team_count {
        2 => "Final".to_owned(),
        3..=4 => "Semi-Final".to_owned(),
        5..=8 => "Quarter-Final".to_owned(),
        9..=16 => "Round of 16".to_owned(),
        n => format!("Round of {}", n),
    }
}

/// Matches generated for one knockout round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutDraw {
    pub round_name: String,
    /// To be inserted by the datastore, in pairing order.
    pub matches: Vec<NewMatch>,
    /// Last team of an odd-sized field. It gets no match and no bye.
    pub unpaired: Option<Team>,
}

/// Pair `teams` by consecutive index (0 v 1, 2 v 3, ...) into scheduled matches.
///
/// The round is named from the total team count. With an odd count the last team is
/// left out and returned in [`KnockoutDraw::unpaired`].
pub fn generate_knockout_matches(
    tournament_id: TournamentId,
    teams: &[Team],
) -> Result<KnockoutDraw, BracketError> {
    if teams.len() < MIN_KNOCKOUT_TEAMS {
        return Err(BracketError::InsufficientTeams {
            required: MIN_KNOCKOUT_TEAMS,
            available: teams.len(),
        });
    }

    let name = round_name(teams.len());
    let matches: Vec<NewMatch> = teams
        .chunks_exact(2)
        .map(|pair| NewMatch::new(tournament_id, name.as_str(), &pair[0], &pair[1]))
        .collect();
    let unpaired = teams.chunks_exact(2).remainder().first().cloned();

    if let Some(team) = &unpaired {
        log::warn!(
            "Odd number of teams ({}) for {}: team {} left without a match",
            teams.len(),
            name,
            team.id()
        );
    }
    log::debug!("Generated {} {} match(es)", matches.len(), name);

    Ok(KnockoutDraw {
        round_name: name,
        matches,
        unpaired,
    })
}

/// Generate the first knockout round from group standings.
///
/// Qualified teams are taken group by group, in rank order, then paired.
pub fn generate_knockout_stage(
    tournament_id: TournamentId,
    standings: &[GroupStandings],
) -> Result<KnockoutDraw, BracketError> {
    let qualified = collect_qualified_teams(standings);
    log::debug!("{} qualified team(s) for knockout", qualified.len());
    generate_knockout_matches(tournament_id, &qualified)
}
