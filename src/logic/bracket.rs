//! Bracket view: matches grouped by round, group stage separate from knockout.

use crate::models::GameMatch;

/// All matches sharing one round label.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BracketRound<'a> {
    pub name: &'a str,
    pub matches: Vec<&'a GameMatch>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Bracket<'a> {
    pub group_rounds: Vec<BracketRound<'a>>,
    pub knockout_rounds: Vec<BracketRound<'a>>,
}

fn push_to_round<'a>(rounds: &mut Vec<BracketRound<'a>>, m: &'a GameMatch) {
    match rounds.iter_mut().find(|r| r.name == m.round_name) {
        Some(round) => round.matches.push(m),
        None => rounds.push(BracketRound {
            name: &m.round_name,
            matches: vec![m],
        }),
    }
}

/// Group matches by round label, in first-seen order, regardless of status.
pub fn bracket_rounds(matches: &[GameMatch]) -> Bracket<'_> {
    let mut bracket = Bracket::default();
    for m in matches {
        if m.is_group_stage() {
            push_to_round(&mut bracket.group_rounds, m);
        } else {
            push_to_round(&mut bracket.knockout_rounds, m);
        }
    }
    bracket
}
