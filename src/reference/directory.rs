use crate::api::models::DataDragonChampions;
use crate::api::ReferenceSource;
use crate::error::Result;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{info, warn};

use super::catalog::champion_image_url;

/// Patch used when Data Dragon cannot tell us the current one.
pub const FALLBACK_VERSION: &str = "14.24.1";

/// Names players commonly type that Data Dragon does not list.
const ALIASES: &[(&str, u32)] = &[
    ("wukong", 62),
    ("monkeyking", 62),
    ("nunu", 20),
    ("nunu & willump", 20),
    ("renata", 888),
    ("renata glasc", 888),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionSummary {
    /// Data Dragon id, e.g. `MonkeyKing`.
    pub id: String,
    /// Numeric key used by match records.
    pub key: u32,
    pub name: String,
    pub image: String,
}

/// Champion name lookup, loaded from the reference source and refreshed on demand.
#[derive(Debug, Clone)]
pub struct ChampionDirectory {
    version: String,
    by_name: HashMap<String, u32>,
    champions: Vec<ChampionSummary>,
}

impl ChampionDirectory {
    pub fn empty() -> Self {
        ChampionDirectory {
            version: FALLBACK_VERSION.to_string(),
            by_name: HashMap::new(),
            champions: Vec::new(),
        }
    }

    pub fn load(source: &impl ReferenceSource) -> Result<Self> {
        let version = source.latest_version().unwrap_or_else(|e| {
            warn!(error = %e, fallback = FALLBACK_VERSION, "could not fetch latest patch version");
            FALLBACK_VERSION.to_string()
        });

        let champions = source.champions(&version)?;
        let directory = ChampionDirectory::from_champions(version, champions);
        info!(
            version = %directory.version,
            champions = directory.champions.len(),
            "champion directory loaded"
        );
        Ok(directory)
    }

    pub fn refresh(&mut self, source: &impl ReferenceSource) -> Result<()> {
        *self = ChampionDirectory::load(source)?;
        Ok(())
    }

    pub fn from_champions(version: String, data: DataDragonChampions) -> Self {
        let mut by_name = HashMap::new();
        let mut champions = Vec::with_capacity(data.data.len());

        for info in data.data.into_values() {
            let Ok(key) = info.key.parse::<u32>() else {
                warn!(champion = %info.id, key = %info.key, "skipping champion with non-numeric key");
                continue;
            };

            by_name.insert(info.id.to_lowercase(), key);
            by_name.insert(info.name.to_lowercase(), key);
            by_name.insert(normalize_name(&info.name), key);

            let image_file = info
                .image
                .as_ref()
                .map(|image| image.full.clone())
                .unwrap_or_else(|| format!("{}.png", info.id));

            champions.push(ChampionSummary {
                image: champion_image_url(&version, &image_file),
                id: info.id,
                key,
                name: info.name,
            });
        }

        for (alias, key) in ALIASES {
            by_name.insert(alias.to_string(), *key);
        }

        champions.sort_by(|a, b| a.name.cmp(&b.name));

        ChampionDirectory {
            version,
            by_name,
            champions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn champions(&self) -> &[ChampionSummary] {
        &self.champions
    }

    /// Numeric champion key for a display name, id, or loosely typed name.
    pub fn resolve(&self, name: &str) -> Option<u32> {
        let lowered = name.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }
        self.by_name
            .get(&lowered)
            .or_else(|| self.by_name.get(&normalize_name(&lowered)))
            .copied()
    }
}

impl Default for ChampionDirectory {
    fn default() -> Self {
        ChampionDirectory::empty()
    }
}

/// Lowercase with spaces, apostrophes and dots stripped: `Kai'Sa` → `kaisa`.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\'' | '.'))
        .collect()
}
