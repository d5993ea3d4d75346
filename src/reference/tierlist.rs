//! Tier list shaping: tiered champion entries plus a flat ranked list for tables.

use crate::analysis::build::Role;
use crate::api::models::{TierChampionDto, TierListDto};
use crate::api::TierListSource;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{error, info};

use super::catalog::champion_image_url;

/// Ladder bracket reported when the API does not name one.
pub const DEFAULT_RANK: &str = "MASTER";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
}

impl Tier {
    pub const ALL: [Tier; 5] = [Tier::S, Tier::A, Tier::B, Tier::C, Tier::D];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierEntry {
    pub champion: String,
    pub name: String,
    pub tier: Tier,
    pub win_rate: Option<f64>,
    pub pick_rate: Option<f64>,
    pub games_analyzed: u64,
    pub roles: Vec<String>,
    pub role_label: String,
    pub performance_score: f64,
    pub image: String,
}

/// One row of the flat list, numbered across all tiers from S down.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedChampion {
    pub rank: usize,
    pub name: String,
    pub role: String,
    pub tier: Tier,
    pub win_rate: String,
    pub pick_rate: String,
    pub games: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierList {
    /// False when the API could not be reached; every tier is then empty.
    pub available: bool,
    pub error: Option<String>,
    pub rank: String,
    pub tiers: BTreeMap<Tier, Vec<TierEntry>>,
    pub counts: BTreeMap<Tier, u32>,
    pub total_champions: u32,
    pub last_update: Option<String>,
    pub champions: Vec<RankedChampion>,
}

impl TierList {
    pub fn unavailable(error: impl Into<String>) -> Self {
        TierList {
            available: false,
            error: Some(error.into()),
            rank: DEFAULT_RANK.to_string(),
            tiers: Tier::ALL.into_iter().map(|tier| (tier, Vec::new())).collect(),
            counts: Tier::ALL.into_iter().map(|tier| (tier, 0)).collect(),
            total_champions: 0,
            last_update: None,
            champions: Vec::new(),
        }
    }
}

/// Fetch and shape a tier list. An unreachable API yields an empty, unavailable list.
pub fn fetch_tier_list(source: &impl TierListSource, role: Option<Role>, version: &str) -> TierList {
    match source.tier_list(role.map(Role::as_str)) {
        Ok(dto) => {
            let list = format_tier_list(dto, role, version);
            info!(champions = list.champions.len(), "tier list loaded");
            list
        }
        Err(e) => {
            error!(error = %e, "could not fetch tier list");
            TierList::unavailable(e.to_string())
        }
    }
}

pub fn format_tier_list(mut dto: TierListDto, role: Option<Role>, version: &str) -> TierList {
    let mut tiers = BTreeMap::new();
    let mut champions = Vec::new();

    for tier in Tier::ALL {
        let entries: Vec<TierEntry> = dto
            .tier_list
            .remove(tier.as_str())
            .unwrap_or_default()
            .into_iter()
            .map(|champ| tier_entry(champ, tier, role, version))
            .collect();

        for entry in &entries {
            champions.push(RankedChampion {
                rank: champions.len() + 1,
                name: entry.name.clone(),
                role: entry.role_label.clone(),
                tier,
                win_rate: percent(entry.win_rate),
                pick_rate: percent(entry.pick_rate),
                games: entry.games_analyzed,
            });
        }
        tiers.insert(tier, entries);
    }

    let counts = Tier::ALL
        .into_iter()
        .map(|tier| (tier, dto.counts.get(tier.as_str()).copied().unwrap_or(0)))
        .collect();

    TierList {
        available: true,
        error: None,
        rank: dto.rank.unwrap_or_else(|| DEFAULT_RANK.to_string()),
        tiers,
        counts,
        total_champions: dto.total_champions,
        last_update: dto.last_update,
        champions,
    }
}

fn tier_entry(champ: TierChampionDto, tier: Tier, filter: Option<Role>, version: &str) -> TierEntry {
    let champion = champ.champion.unwrap_or_else(|| "Unknown".to_string());
    let name = title_case(&champion);

    let role_label = match (filter, &champ.role) {
        (Some(role), _) => title_case(role.as_str()),
        (None, Some(role)) => title_case(role),
        (None, None) if !champ.roles.is_empty() => champ
            .roles
            .iter()
            .map(|role| title_case(role))
            .collect::<Vec<_>>()
            .join(", "),
        (None, None) => "Flex".to_string(),
    };

    let image_file: String = name.chars().filter(|c| c.is_alphanumeric()).collect();

    TierEntry {
        image: champion_image_url(version, &format!("{}.png", image_file)),
        champion,
        name,
        tier,
        win_rate: champ.winrate,
        pick_rate: champ.pickrate,
        games_analyzed: champ.games_analyzed,
        roles: champ.roles,
        role_label,
        performance_score: champ.performance_score,
    }
}

fn percent(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.1}%", value),
        None => "-".to_string(),
    }
}

/// Capitalise the first letter of every word: `lee sin` → `Lee Sin`, `kai'sa` → `Kai'Sa`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
