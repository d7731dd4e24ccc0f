use crate::model::HistoryElement;
use ahash::RandomState;
use std::cmp::Reverse;
use std::collections::HashMap;

/// One turn of up to three throws.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnGroup {
    pub turn_number: i32,
    pub throws: Vec<HistoryElement>,
    pub ended: bool,
}

/// Groups a player's throw log by turn, newest turn first. Order within a
/// turn is kept as logged. `ended` marks turns the service closed, which
/// tells a two-throw bust turn apart from one still open.
#[must_use]
pub fn turn_groups(log: &[HistoryElement]) -> Vec<TurnGroup> {
    let mut by_turn: HashMap<i32, Vec<HistoryElement>, RandomState> = HashMap::default();
    for element in log {
        by_turn
            .entry(element.turn_number)
            .or_default()
            .push(element.clone());
    }
    let mut groups: Vec<TurnGroup> = by_turn
        .into_iter()
        .map(|(turn_number, throws)| {
            let ended = throws.last().is_some_and(|e| e.ended_turn);
            TurnGroup {
                turn_number,
                throws,
                ended,
            }
        })
        .collect();
    groups.sort_by_key(|g| Reverse(g.turn_number));
    groups
}
