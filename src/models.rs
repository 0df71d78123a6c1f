use serde_derive::Deserialize;

/// Account-v1 by-riot-id response, trimmed to the join key the bot needs.
/// The puuid is treated as an opaque token.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub puuid: String,
}

/// Match-v5 details response, trimmed to what classification and outcome
/// detection read. Everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub game_mode: String,
    pub queue_id: i64,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Participant {
    pub puuid: String,
    pub win: bool,
}

/// Win/loss counts for one match classification.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModeTally {
    pub wins: u32,
    pub losses: u32,
}

/// Aggregated view of one day's matches: per-classification tallies in
/// first-seen order, plus whole-session totals.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub games: usize,
    pub wins: usize,
    pub tallies: Vec<(String, ModeTally)>,
}
