use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

pub const DATA_DRAGON_BASE: &str = "https://ddragon.leagueoflegends.com";
/// Aggregation API serving Diamond+ tier lists.
pub const TIER_LIST_BASE: &str = "https://api.hommet.ch/api/v1";

/// Ranked solo queue, as named by the league endpoints.
pub const RANKED_SOLO_QUEUE: &str = "RANKED_SOLO_5x5";
/// Ranked solo queue, as numbered by the match endpoints.
pub const RANKED_SOLO_QUEUE_ID: u32 = 420;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LadderTier {
    Challenger,
    Grandmaster,
}

impl LadderTier {
    fn path(self) -> &'static str {
        match self {
            LadderTier::Challenger => "challengerleagues",
            LadderTier::Grandmaster => "grandmasterleagues",
        }
    }
}

impl fmt::Display for LadderTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LadderTier::Challenger => "challenger",
            LadderTier::Grandmaster => "grandmaster",
        };
        f.write_str(name)
    }
}

/// A platform shard (`euw1`, `na1`, ...) and the regional cluster serving its matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    platform: String,
}

impl Region {
    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn regional_routing(&self) -> &'static str {
        match self.platform.as_str() {
            "na1" | "br1" | "la1" | "la2" => "americas",
            "euw1" | "eun1" | "tr1" | "ru" => "europe",
            "kr" | "jp1" => "asia",
            "oc1" | "ph2" | "sg2" | "th2" | "tw2" | "vn2" => "sea",
            _ => "europe",
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Region {
            platform: "euw1".to_string(),
        }
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let platform = match lowered.as_str() {
            "euw" | "euw1" => "euw1",
            "eune" | "eun1" => "eun1",
            "na" | "na1" => "na1",
            "kr" => "kr",
            "jp" | "jp1" => "jp1",
            "br" | "br1" => "br1",
            "lan" | "la1" => "la1",
            "las" | "la2" => "la2",
            "oce" | "oc1" => "oc1",
            "tr" | "tr1" => "tr1",
            "ru" => "ru",
            "ph" | "ph2" => "ph2",
            "sg" | "sg2" => "sg2",
            "th" | "th2" => "th2",
            "tw" | "tw2" => "tw2",
            "vn" | "vn2" => "vn2",
            _ => return Err(AppError::InvalidRegion(s.to_string())),
        };
        Ok(Region {
            platform: platform.to_string(),
        })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.platform)
    }
}

pub fn ladder_url(region: &Region, tier: LadderTier, queue: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/league/v4/{}/by-queue/{}",
        region.platform(),
        tier.path(),
        queue
    )
}

pub fn summoner_url(region: &Region, summoner_id: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/summoner/v4/summoners/{}",
        region.platform(),
        summoner_id
    )
}

pub fn match_ids_url(region: &Region, puuid: &str, queue_id: u32, count: usize) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/by-puuid/{}/ids?queue={}&count={}",
        region.regional_routing(),
        puuid,
        queue_id,
        count
    )
}

pub fn match_url(region: &Region, match_id: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/{}",
        region.regional_routing(),
        match_id
    )
}

pub fn timeline_url(region: &Region, match_id: &str) -> String {
    format!("{}/timeline", match_url(region, match_id))
}

pub fn versions_url() -> String {
    format!("{}/api/versions.json", DATA_DRAGON_BASE)
}

pub fn champions_url(version: &str) -> String {
    format!("{}/cdn/{}/data/en_US/champion.json", DATA_DRAGON_BASE, version)
}

pub fn items_url(version: &str) -> String {
    format!("{}/cdn/{}/data/en_US/item.json", DATA_DRAGON_BASE, version)
}

pub fn tier_list_url(base: &str, role: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    match role {
        Some(role) => format!("{}/tierlist?role={}", base, role.to_lowercase()),
        None => format!("{}/tierlist", base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_region_names_map_to_platforms() {
        let euw: Region = "EUW".parse().unwrap();
        assert_eq!(euw.platform(), "euw1");
        assert_eq!(euw.regional_routing(), "europe");

        let kr: Region = "kr".parse().unwrap();
        assert_eq!(kr.regional_routing(), "asia");

        let na: Region = "na1".parse().unwrap();
        assert_eq!(na.regional_routing(), "americas");
    }

    #[test]
    fn unknown_region_is_rejected() {
        assert!(matches!(
            "atlantis".parse::<Region>(),
            Err(AppError::InvalidRegion(_))
        ));
    }

    #[test]
    fn match_urls_use_regional_routing() {
        let region: Region = "euw".parse().unwrap();
        assert_eq!(
            match_ids_url(&region, "abc", RANKED_SOLO_QUEUE_ID, 5),
            "https://europe.api.riotgames.com/lol/match/v5/matches/by-puuid/abc/ids?queue=420&count=5"
        );
        assert_eq!(
            timeline_url(&region, "EUW1_1"),
            "https://europe.api.riotgames.com/lol/match/v5/matches/EUW1_1/timeline"
        );
        assert_eq!(
            ladder_url(&region, LadderTier::Grandmaster, RANKED_SOLO_QUEUE),
            "https://euw1.api.riotgames.com/lol/league/v4/grandmasterleagues/by-queue/RANKED_SOLO_5x5"
        );
    }

    #[test]
    fn tier_list_url_adds_role_filter() {
        assert_eq!(tier_list_url(TIER_LIST_BASE, None), "https://api.hommet.ch/api/v1/tierlist");
        assert_eq!(
            tier_list_url("http://localhost:8000/api/v1/", Some("ADC")),
            "http://localhost:8000/api/v1/tierlist?role=adc"
        );
    }
}
