use serde::{Deserialize, Serialize};

/// Player record as returned by the darts service, including the lifetime
/// tallies used on the stats screen.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub matches: i64,
    #[serde(default)]
    pub throws: i64,
    #[serde(default)]
    pub total_score: i64,
}

#[derive(Serialize, Debug)]
pub struct CreatePlayer {
    pub name: String,
}
