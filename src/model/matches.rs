use crate::model::throws::ThrowCode;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Accepts `null` where the service omits a collection.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Match record as returned by the darts service. `current_player` and
/// `won_by` are empty strings until the service fills them in.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub players: Vec<String>,
    #[serde(default)]
    pub current_throw: u32,
    #[serde(default)]
    pub current_player: String,
    #[serde(default)]
    pub won_by: String,
    pub start_at: i32,
    pub start_mode: u8,
    pub end_mode: u8,
    #[serde(default, deserialize_with = "null_to_default")]
    pub scores: HashMap<String, i32>,
}

/// One recorded throw in a match log.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HistoryElement {
    #[serde(rename = "throw")]
    pub throw_code: ThrowCode,
    pub ended_turn: bool,
    pub turn_number: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MatchHistory {
    #[serde(default, deserialize_with = "null_to_default")]
    pub history: HashMap<String, Vec<HistoryElement>>,
}

/// Envelope from `GET /getMatch`: the match plus each player's throw log
/// in chronological order. The history block may be `null` for a match
/// with no throws yet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MatchSnapshot {
    #[serde(rename = "match")]
    pub match_info: Match,
    #[serde(default, deserialize_with = "null_to_default")]
    pub history: MatchHistory,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ThrowRequest {
    pub mid: String,
    pub pid: String,
    #[serde(rename = "Throw")]
    pub throw_code: ThrowCode,
}

/// Authoritative result of a throw. `not_valid` marks a bust: the turn is
/// over and the scores stand as sent here.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ThrowOutcome {
    pub won: bool,
    pub not_valid: bool,
    pub next_throw_by: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub scores: HashMap<String, i32>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub possible_finish: Vec<ThrowCode>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMatch {
    pub pids: Vec<String>,
    pub start_at: i32,
    pub start_mode: u8,
    pub end_mode: u8,
}

/// How a leg may be opened or closed: any segment, doubles only, or
/// doubles and the inner bull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IoMode {
    Straight,
    Double,
    Master,
}

impl IoMode {
    #[must_use]
    pub fn from_number(value: u8) -> Self {
        match value {
            0 => IoMode::Straight,
            1 => IoMode::Double,
            _ => IoMode::Master,
        }
    }

    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            IoMode::Straight => 0,
            IoMode::Double => 1,
            IoMode::Master => 2,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            IoMode::Straight => "Straight",
            IoMode::Double => "Double",
            IoMode::Master => "Master",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            IoMode::Straight => IoMode::Double,
            IoMode::Double => IoMode::Master,
            IoMode::Master => IoMode::Straight,
        }
    }
}

pub const START_AT_OPTIONS: [i32; 7] = [101, 201, 301, 401, 501, 701, 1001];

/// Next option after `current`, wrapping around. Unknown values restart
/// the cycle.
#[must_use]
pub fn next_start_at(current: i32) -> i32 {
    match START_AT_OPTIONS.iter().position(|&v| v == current) {
        Some(i) => START_AT_OPTIONS[(i + 1) % START_AT_OPTIONS.len()],
        None => START_AT_OPTIONS[0],
    }
}
