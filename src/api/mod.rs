pub mod client;
pub mod ddragon;
pub mod endpoints;
pub mod models;
pub mod tierlist;

use crate::error::Result;
use endpoints::{LadderTier, Region};
use models::{DataDragonChampions, DataDragonItems, LeagueItemDto, MatchDto, TierListDto, TimelineDto};

/// Ranked ladders, player lookup and match history.
pub trait RiotSource {
    /// False when no credential is available; every call would then fail.
    fn is_configured(&self) -> bool;

    fn tier_players(&self, region: &Region, tier: LadderTier, queue: &str) -> Result<Vec<LeagueItemDto>>;

    /// `Ok(None)` when the player no longer exists.
    fn resolve_puuid(&self, player: &LeagueItemDto, region: &Region) -> Result<Option<String>>;

    fn recent_match_ids(&self, puuid: &str, region: &Region, queue_id: u32, count: usize) -> Result<Vec<String>>;

    fn match_details(&self, match_id: &str, region: &Region) -> Result<MatchDto>;

    fn match_timeline(&self, match_id: &str, region: &Region) -> Result<TimelineDto>;
}

/// Static game data: patch versions, champions and items.
pub trait ReferenceSource {
    fn latest_version(&self) -> Result<String>;

    fn champions(&self, version: &str) -> Result<DataDragonChampions>;

    fn items(&self, version: &str) -> Result<DataDragonItems>;
}

/// Precomputed champion tier lists, optionally filtered to one role.
pub trait TierListSource {
    fn tier_list(&self, role: Option<&str>) -> Result<TierListDto>;
}
