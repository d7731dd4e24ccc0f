use crate::controller::transport::{ApiContext, TransportError};
use crate::model::{
    CreateMatch, CreatePlayer, Match, MatchSnapshot, Player, ThrowOutcome, ThrowRequest,
};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

/// Remote operations of the darts service. Handlers and the play engine go
/// through this trait so tests can swap in a scripted service.
#[async_trait]
pub trait DartsApi: Send + Sync {
    async fn list_players(&self) -> Result<Vec<Player>, TransportError>;
    async fn create_player(&self, name: &str) -> Result<Player, TransportError>;
    async fn delete_player(&self, player_id: &str) -> Result<(), TransportError>;
    async fn list_matches(&self) -> Result<Vec<Match>, TransportError>;
    async fn create_match(&self, req: &CreateMatch) -> Result<Match, TransportError>;
    async fn delete_match(&self, match_id: &str) -> Result<(), TransportError>;
    async fn get_match(&self, match_id: &str) -> Result<MatchSnapshot, TransportError>;
    async fn player_throw(&self, req: &ThrowRequest) -> Result<ThrowOutcome, TransportError>;
}

pub struct HttpDartsApi {
    ctx: ApiContext,
}

impl HttpDartsApi {
    #[must_use]
    pub fn new(ctx: ApiContext) -> Self {
        HttpDartsApi { ctx }
    }

    #[must_use]
    pub fn context(&self) -> &ApiContext {
        &self.ctx
    }
}

#[async_trait]
impl DartsApi for HttpDartsApi {
    async fn list_players(&self) -> Result<Vec<Player>, TransportError> {
        self.ctx
            .call("listPlayers", Method::GET, "/listPlayers", None)
            .await
    }

    async fn create_player(&self, name: &str) -> Result<Player, TransportError> {
        let body = serde_json::to_value(CreatePlayer {
            name: name.to_string(),
        })
        .map_err(|e| TransportError::Request(e.to_string()))?;
        self.ctx
            .call("createPlayer", Method::POST, "/createPlayer", Some(body))
            .await
    }

    async fn delete_player(&self, player_id: &str) -> Result<(), TransportError> {
        let _: Value = self
            .ctx
            .call(
                "deletePlayer",
                Method::DELETE,
                &format!("/deletePlayer?playerId={player_id}"),
                None,
            )
            .await?;
        Ok(())
    }

    async fn list_matches(&self) -> Result<Vec<Match>, TransportError> {
        self.ctx
            .call("listMatches", Method::GET, "/listMatches", None)
            .await
    }

    async fn create_match(&self, req: &CreateMatch) -> Result<Match, TransportError> {
        let body = serde_json::to_value(req).map_err(|e| TransportError::Request(e.to_string()))?;
        self.ctx
            .call("createMatch", Method::POST, "/createMatch", Some(body))
            .await
    }

    async fn delete_match(&self, match_id: &str) -> Result<(), TransportError> {
        let _: Value = self
            .ctx
            .call(
                "deleteMatch",
                Method::DELETE,
                &format!("/deleteMatch?matchId={match_id}"),
                None,
            )
            .await?;
        Ok(())
    }

    async fn get_match(&self, match_id: &str) -> Result<MatchSnapshot, TransportError> {
        self.ctx
            .call(
                "getMatch",
                Method::GET,
                &format!("/getMatch?matchId={match_id}"),
                None,
            )
            .await
    }

    async fn player_throw(&self, req: &ThrowRequest) -> Result<ThrowOutcome, TransportError> {
        let body = serde_json::to_value(req).map_err(|e| TransportError::Request(e.to_string()))?;
        self.ctx
            .call("playerThrow", Method::POST, "/playerThrow", Some(body))
            .await
    }
}
