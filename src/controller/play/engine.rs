use crate::controller::backend::DartsApi;
use crate::model::{HistoryElement, MatchSnapshot, ThrowCode, ThrowRequest};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Throws per turn.
pub const TURN_THROWS: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("load failed: {0}")]
    Load(String),
    #[error("throw failed: {0}")]
    Submit(String),
}

/// Client-side picture of one running match. The darts service stays
/// authoritative; nothing in here is guessed ahead of its answers.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayState {
    pub match_id: String,
    pub players: Vec<String>,
    pub names: HashMap<String, String>,
    pub scores: HashMap<String, i32>,
    pub current_player: Option<String>,
    pub turn_buffer: Vec<ThrowCode>,
    pub finishes: Vec<ThrowCode>,
    pub history: HashMap<String, Vec<HistoryElement>>,
    pub start_at: i32,
    pub won_by: Option<String>,
    pub last_bust: bool,
}

impl PlayState {
    /// Display name for a player id, falling back to the id itself.
    #[must_use]
    pub fn name_of<'a>(&'a self, pid: &'a str) -> &'a str {
        self.names.get(pid).map_or(pid, String::as_str)
    }
}

/// Play state per match id, shared across requests.
pub type PlayStates = Arc<RwLock<HashMap<String, PlayState>>>;

/// Fetches a match from the service and builds fresh play state for it.
///
/// # Errors
///
/// Will return `Err` if the service cannot be reached or answers badly.
pub async fn load_match(api: &dyn DartsApi, match_id: &str) -> Result<PlayState, PlayError> {
    let snapshot = api
        .get_match(match_id)
        .await
        .map_err(|e| PlayError::Load(e.to_string()))?;
    Ok(state_from_snapshot(snapshot))
}

fn state_from_snapshot(snapshot: MatchSnapshot) -> PlayState {
    let m = snapshot.match_info;
    let history = snapshot.history.history;
    let current_player = if m.current_player.is_empty() {
        None
    } else {
        Some(m.current_player)
    };
    let won_by = if m.won_by.is_empty() {
        None
    } else {
        Some(m.won_by)
    };
    let turn_buffer = match current_player {
        Some(ref pid) => seed_turn_buffer(history.get(pid).map_or(&[][..], Vec::as_slice)),
        None => Vec::new(),
    };
    PlayState {
        match_id: m.id,
        players: m.players,
        names: HashMap::new(),
        scores: m.scores,
        current_player,
        turn_buffer,
        finishes: Vec::new(),
        history,
        start_at: m.start_at,
        won_by,
        last_bust: false,
    }
}

/// Open-turn throws for the player about to throw, oldest first. A log
/// whose newest entry closed its turn seeds an empty buffer.
#[must_use]
pub fn seed_turn_buffer(log: &[HistoryElement]) -> Vec<ThrowCode> {
    let Some(last) = log.last() else {
        return Vec::new();
    };
    if last.ended_turn {
        return Vec::new();
    }
    let turn = last.turn_number;
    let mut throws: Vec<ThrowCode> = log
        .iter()
        .rev()
        .take_while(|e| e.turn_number == turn)
        .take(TURN_THROWS)
        .map(|e| e.throw_code)
        .collect();
    throws.reverse();
    throws
}

/// Sends one throw for the current player and applies the service's answer
/// wholesale. Returns whether the turn passed to another player.
///
/// A finished match or a match without a current player swallows the throw
/// without calling out. A transport failure leaves the state exactly as it
/// was.
///
/// # Errors
///
/// Will return `Err` if the service cannot be reached or answers badly.
pub async fn submit_throw(
    api: &dyn DartsApi,
    state: &mut PlayState,
    code: ThrowCode,
) -> Result<bool, PlayError> {
    if state.won_by.is_some() {
        return Ok(false);
    }
    let Some(thrower) = state.current_player.clone() else {
        return Ok(false);
    };
    let req = ThrowRequest {
        mid: state.match_id.clone(),
        pid: thrower.clone(),
        throw_code: code,
    };
    let outcome = api
        .player_throw(&req)
        .await
        .map_err(|e| PlayError::Submit(e.to_string()))?;

    if !outcome.scores.is_empty() {
        state.scores = outcome.scores;
    }
    state.finishes = outcome.possible_finish;
    let player_changed = outcome.next_throw_by != thrower;
    if player_changed {
        state.turn_buffer = Vec::new();
    } else {
        state.turn_buffer.push(code);
        if state.turn_buffer.len() > TURN_THROWS {
            let excess = state.turn_buffer.len() - TURN_THROWS;
            state.turn_buffer.drain(..excess);
        }
    }
    state.current_player = if outcome.next_throw_by.is_empty() {
        None
    } else {
        Some(outcome.next_throw_by)
    };
    if outcome.won {
        state.won_by = Some(thrower);
    }
    state.last_bust = outcome.not_valid;
    Ok(player_changed)
}

/// Re-fetches the match and swaps in its throw log; the rest of the state
/// keeps following throw responses.
///
/// # Errors
///
/// Will return `Err` if the service cannot be reached or answers badly.
pub async fn refresh_history(api: &dyn DartsApi, state: &mut PlayState) -> Result<(), PlayError> {
    let snapshot = api
        .get_match(&state.match_id)
        .await
        .map_err(|e| PlayError::Load(e.to_string()))?;
    state.history = snapshot.history.history;
    Ok(())
}

/// At most the first three finish suggestions, as board labels.
#[must_use]
pub fn finish_labels(finishes: &[ThrowCode]) -> Vec<&'static str> {
    finishes.iter().take(3).map(|c| c.label()).collect()
}
