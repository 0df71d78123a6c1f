use futures::stream;
use futures_util::{StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::BotError;
use crate::models::{Account, MatchDto};

/// Match ids fetched per lookup; the bot only ever summarizes the most
/// recent page of the day's games.
pub const MATCH_PAGE_SIZE: u32 = 20;
const DETAIL_FETCH_CONCURRENCY: usize = 5;
const REGIONAL_HOST: &str = "https://americas.api.riotgames.com";

/// Thin wrapper over the three read-only Riot endpoints the bot calls. No
/// retries and no rate limiting; any non-2xx response is fatal for the call.
pub struct RiotClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl RiotClient {
    pub fn new(api_key: &str) -> Result<Self, BotError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|source| BotError::Lookup {
                endpoint: "client setup",
                source,
            })?;
        Ok(RiotClient {
            http,
            api_key: api_key.to_string(),
            base_url: REGIONAL_HOST.to_string(),
        })
    }

    // The api key rides along as a query parameter, so the full urls stay out
    // of the logs.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: String,
    ) -> Result<T, BotError> {
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| BotError::Lookup { endpoint, source })?;
        info!("{} responded with status {}", endpoint, response.status());
        response
            .error_for_status()
            .map_err(|source| BotError::Lookup { endpoint, source })?
            .json()
            .await
            .map_err(|source| BotError::Lookup { endpoint, source })
    }

    /// Resolves a Riot ID to the account's puuid.
    pub async fn account_by_riot_id(&self, name: &str, tag: &str) -> Result<Account, BotError> {
        let url = format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.base_url, name, tag
        );
        self.get_json("account-v1 by-riot-id", url).await
    }

    /// Ids of the matches the player finished inside the window, most recent
    /// first as the upstream returns them.
    pub async fn match_ids_in_window(
        &self,
        puuid: &str,
        window: (i64, i64),
    ) -> Result<Vec<String>, BotError> {
        let (start_time, end_time) = window;
        let url = format!(
            "{}/lol/match/v5/matches/by-puuid/{}/ids?startTime={}&endTime={}&start=0&count={}",
            self.base_url, puuid, start_time, end_time, MATCH_PAGE_SIZE
        );
        self.get_json("match-v5 id list", url).await
    }

    pub async fn match_details(&self, match_id: &str) -> Result<MatchDto, BotError> {
        let url = format!("{}/lol/match/v5/matches/{}", self.base_url, match_id);
        self.get_json("match-v5 details", url).await
    }

    /// Fetches details for every id with a few requests in flight at a time.
    /// Output order follows the input id order so the aggregation input stays
    /// deterministic, and the first failed fetch aborts the whole batch.
    pub async fn fetch_all_details(&self, match_ids: &[String]) -> Result<Vec<MatchDto>, BotError> {
        // Owned ids keep the closure free of higher-ranked argument
        // lifetimes, which otherwise makes the combined future fail Send
        // inference in async trait handlers (rust-lang/rust#102211).
        stream::iter(match_ids.to_vec())
            .map(|match_id| async move { self.match_details(&match_id).await })
            .buffered(DETAIL_FETCH_CONCURRENCY)
            .try_collect()
            .await
    }
}
