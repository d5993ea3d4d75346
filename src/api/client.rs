use crate::config::Config;
use crate::error::{AppError, Result};
use crate::rate_limit::{IntervalGate, RequestGate};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::endpoints::{self, LadderTier, Region};
use super::models::*;
use super::RiotSource;

const USER_AGENT: &str = concat!("league_builds/", env!("CARGO_PKG_VERSION"));

pub struct RiotApiClient<G = IntervalGate> {
    agent: ureq::Agent,
    api_key: Option<String>,
    gate: G,
}

impl RiotApiClient<IntervalGate> {
    pub fn new(config: &Config) -> Self {
        RiotApiClient::with_gate(config, IntervalGate::new(config.throttle))
    }

    /// Requests sent so far through this client.
    pub fn requests_made(&self) -> u64 {
        self.gate.admitted()
    }
}

impl<G: RequestGate> RiotApiClient<G> {
    pub fn with_gate(config: &Config, gate: G) -> Self {
        RiotApiClient {
            agent: build_agent(config.http_timeout),
            api_key: config.api_key.clone(),
            gate,
        }
    }

    fn execute_request(&self, url: &str) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;

        self.gate.wait();
        debug!(url, "GET");

        // Key goes in a header, never the URL.
        match self.agent.get(url).set("X-Riot-Token", api_key).call() {
            Ok(resp) => resp.into_string().map_err(|e| AppError::Http {
                url: url.to_string(),
                message: e.to_string(),
            }),
            Err(ureq::Error::Status(429, _)) => Err(AppError::RateLimited {
                url: url.to_string(),
            }),
            Err(ureq::Error::Status(status, _)) => Err(AppError::Status {
                url: url.to_string(),
                status,
            }),
            Err(e) => Err(AppError::Http {
                url: url.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.execute_request(url)?;
        serde_json::from_str(&body).map_err(|e| AppError::Json(format!("{}: {}", url, e)))
    }
}

impl<G: RequestGate> RiotSource for RiotApiClient<G> {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[instrument(skip(self), level = "debug")]
    fn tier_players(&self, region: &Region, tier: LadderTier, queue: &str) -> Result<Vec<LeagueItemDto>> {
        let league: LeagueListDto = self.get_json(&endpoints::ladder_url(region, tier, queue))?;
        Ok(league.entries)
    }

    #[instrument(skip(self), level = "debug")]
    fn resolve_puuid(&self, player: &LeagueItemDto, region: &Region) -> Result<Option<String>> {
        if let Some(puuid) = &player.puuid {
            return Ok(Some(puuid.clone()));
        }
        let Some(summoner_id) = &player.summoner_id else {
            warn!("ladder entry carries neither puuid nor summoner id");
            return Ok(None);
        };

        match self.get_json::<SummonerDto>(&endpoints::summoner_url(region, summoner_id)) {
            Ok(summoner) => Ok(Some(summoner.puuid)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn recent_match_ids(&self, puuid: &str, region: &Region, queue_id: u32, count: usize) -> Result<Vec<String>> {
        self.get_json(&endpoints::match_ids_url(region, puuid, queue_id, count))
    }

    #[instrument(skip(self), level = "debug")]
    fn match_details(&self, match_id: &str, region: &Region) -> Result<MatchDto> {
        self.get_json(&endpoints::match_url(region, match_id))
    }

    #[instrument(skip(self), level = "debug")]
    fn match_timeline(&self, match_id: &str, region: &Region) -> Result<TimelineDto> {
        self.get_json(&endpoints::timeline_url(region, match_id))
    }
}

pub(crate) fn build_agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}
