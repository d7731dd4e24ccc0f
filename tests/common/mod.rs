use async_trait::async_trait;
use rusty_darts::controller::backend::DartsApi;
use rusty_darts::controller::transport::TransportError;
use rusty_darts::model::{
    CreateMatch, HistoryElement, Match, MatchHistory, MatchSnapshot, Player, ThrowCode,
    ThrowOutcome, ThrowRequest,
};
use std::collections::HashMap;
use tokio::sync::Mutex;

pub const MATCH_ID: &str = "11111111-1111-4111-8111-111111111111";
pub const PID_A: &str = "22222222-2222-4222-8222-222222222222";
pub const PID_B: &str = "33333333-3333-4333-8333-333333333333";

/// Scripted darts service. Throw outcomes are served in the order queued
/// and every throw request is recorded for inspection.
#[derive(Default)]
pub struct MockApi {
    pub players: Mutex<Vec<Player>>,
    pub matches: Mutex<Vec<Match>>,
    pub snapshots: Mutex<HashMap<String, MatchSnapshot>>,
    pub outcomes: Mutex<Vec<Result<ThrowOutcome, TransportError>>>,
    pub throw_requests: Mutex<Vec<ThrowRequest>>,
}

impl MockApi {
    pub fn new() -> Self {
        MockApi::default()
    }

    pub async fn add_player(&self, id: &str, name: &str) {
        self.players.lock().await.push(player(id, name));
    }

    pub async fn set_snapshot(&self, snapshot: MatchSnapshot) {
        self.snapshots
            .lock()
            .await
            .insert(snapshot.match_info.id.clone(), snapshot);
    }

    pub async fn queue_outcome(&self, outcome: Result<ThrowOutcome, TransportError>) {
        self.outcomes.lock().await.push(outcome);
    }
}

#[async_trait]
impl DartsApi for MockApi {
    async fn list_players(&self) -> Result<Vec<Player>, TransportError> {
        Ok(self.players.lock().await.clone())
    }

    async fn create_player(&self, name: &str) -> Result<Player, TransportError> {
        let mut players = self.players.lock().await;
        let id = format!("44444444-4444-4444-8444-{:012}", players.len());
        let p = player(&id, name);
        players.push(p.clone());
        Ok(p)
    }

    async fn delete_player(&self, player_id: &str) -> Result<(), TransportError> {
        self.players.lock().await.retain(|p| p.id != player_id);
        Ok(())
    }

    async fn list_matches(&self) -> Result<Vec<Match>, TransportError> {
        Ok(self.matches.lock().await.clone())
    }

    async fn create_match(&self, req: &CreateMatch) -> Result<Match, TransportError> {
        let m = Match {
            id: MATCH_ID.to_string(),
            players: req.pids.clone(),
            current_throw: 1,
            current_player: req.pids.first().cloned().unwrap_or_default(),
            won_by: String::new(),
            start_at: req.start_at,
            start_mode: req.start_mode,
            end_mode: req.end_mode,
            scores: req
                .pids
                .iter()
                .map(|pid| (pid.clone(), req.start_at))
                .collect(),
        };
        self.matches.lock().await.push(m.clone());
        self.snapshots.lock().await.insert(
            m.id.clone(),
            MatchSnapshot {
                match_info: m.clone(),
                history: MatchHistory::default(),
            },
        );
        Ok(m)
    }

    async fn delete_match(&self, match_id: &str) -> Result<(), TransportError> {
        self.matches.lock().await.retain(|m| m.id != match_id);
        self.snapshots.lock().await.remove(match_id);
        Ok(())
    }

    async fn get_match(&self, match_id: &str) -> Result<MatchSnapshot, TransportError> {
        self.snapshots
            .lock()
            .await
            .get(match_id)
            .cloned()
            .ok_or_else(|| TransportError::Status {
                status: 404,
                body: "no such match".to_string(),
            })
    }

    async fn player_throw(&self, req: &ThrowRequest) -> Result<ThrowOutcome, TransportError> {
        self.throw_requests.lock().await.push(req.clone());
        let mut outcomes = self.outcomes.lock().await;
        if outcomes.is_empty() {
            return Err(TransportError::Request("no outcome queued".to_string()));
        }
        outcomes.remove(0)
    }
}

pub fn player(id: &str, name: &str) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        matches: 0,
        throws: 0,
        total_score: 0,
    }
}

pub fn code(value: u8) -> ThrowCode {
    ThrowCode::try_from(value).expect("valid throw code")
}

pub fn history_element(value: u8, turn_number: i32, ended_turn: bool) -> HistoryElement {
    HistoryElement {
        throw_code: code(value),
        ended_turn,
        turn_number,
    }
}

/// Fresh 301 match between [`PID_A`] and [`PID_B`], A to throw, with the
/// given throw logs.
pub fn snapshot_two_players(history: HashMap<String, Vec<HistoryElement>>) -> MatchSnapshot {
    MatchSnapshot {
        match_info: Match {
            id: MATCH_ID.to_string(),
            players: vec![PID_A.to_string(), PID_B.to_string()],
            current_throw: 1,
            current_player: PID_A.to_string(),
            won_by: String::new(),
            start_at: 301,
            start_mode: 2,
            end_mode: 2,
            scores: HashMap::from([(PID_A.to_string(), 301), (PID_B.to_string(), 301)]),
        },
        history: MatchHistory { history },
    }
}

/// Outcome that keeps the same player at the oche.
pub fn outcome_same_player(pid: &str, scores: &[(&str, i32)]) -> ThrowOutcome {
    ThrowOutcome {
        won: false,
        not_valid: false,
        next_throw_by: pid.to_string(),
        scores: scores
            .iter()
            .map(|(k, v)| ((*k).to_string(), *v))
            .collect(),
        possible_finish: Vec::new(),
    }
}
