//! Tabular standings output.

use crate::models::{GroupStandings, TeamStats};
use serde::Serialize;
use std::io::Write;

/// One line of the CSV standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StandingRow<'a> {
    pub group: &'a str,
    pub rank: usize,
    pub team_id: &'a str,
    pub team: &'a str,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub sets_won: u64,
    pub sets_lost: u64,
    pub points_scored: u64,
    pub points_against: u64,
    pub points: u64,
    /// "qualified", "eliminated" or empty.
    pub status: &'static str,
}

impl<'a> StandingRow<'a> {
    pub fn new(group: &'a str, rank: usize, team: &'a TeamStats) -> Self {
        let status = if team.qualified {
            "qualified"
        } else if team.eliminated {
            "eliminated"
        } else {
            ""
        };
        Self {
            group,
            rank,
            team_id: &team.team_id,
            team: &team.team_name,
            played: team.matches,
            wins: team.wins,
            losses: team.losses,
            sets_won: team.sets_won,
            sets_lost: team.sets_lost,
            points_scored: team.points_scored,
            points_against: team.points_against,
            points: team.points,
            status,
        }
    }
}

/// Rows for every group, ranks 1-based within each group.
pub fn standing_rows(standings: &[GroupStandings]) -> Vec<StandingRow<'_>> {
    standings
        .iter()
        .flat_map(|group| {
            group
                .teams
                .iter()
                .enumerate()
                .map(|(index, team)| StandingRow::new(&group.group_name, index + 1, team))
        })
        .collect()
}

/// Write the standings as CSV with a header line.
pub fn write_standings_csv(standings: &[GroupStandings], out: impl Write) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    for row in standing_rows(standings) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
