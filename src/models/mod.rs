//! Data structures for padel tournaments: players, teams, matches and standings.

mod game;
mod player;
mod team;
mod tournament;

pub use game::{
    is_group_round, matches_from_rows, GameMatch, MatchId, MatchResult, MatchRow, MatchStatus,
    NewMatch, Side,
};
pub use player::{Participant, PlayerId, ProfileRef};
pub use team::{Team, TeamId, TeamStats, POINTS_PER_WIN};
pub use tournament::{
    BracketError, GroupStandings, QualificationOverrides, QualificationStatus,
    QualificationToggle, TournamentId,
};
