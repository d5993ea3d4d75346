use crate::analysis::build::{AggregatedBuild, Role};
use crate::config::default_data_dir;
use crate::error::AppError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Aggregated builds stay valid for six hours.
pub const BUILD_CACHE_TTL: Duration = Duration::from_secs(21_600);

/// On-disk record for one (champion, role) build.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CacheEntry {
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    pub champion_id: String,
    pub role: String,
    pub data: AggregatedBuild,
}

impl CacheEntry {
    pub fn is_fresh(&self, now: f64, ttl: Duration) -> bool {
        now - self.timestamp < ttl.as_secs_f64()
    }
}

#[derive(Debug, Clone)]
pub struct BuildCache {
    dir: PathBuf,
    ttl: Duration,
}

impl BuildCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        BuildCache {
            dir: dir.into(),
            ttl: BUILD_CACHE_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn get_cache_path(&self, champion: &str, role: Role) -> PathBuf {
        self.dir
            .join(format!("build_cache_{}_{}.json", cache_key(champion), role.as_str()))
    }

    /// A fresh cached build, or `None` when missing, expired, or unreadable.
    pub fn load(&self, champion: &str, role: Role) -> Option<AggregatedBuild> {
        self.load_at(champion, role, now_secs())
    }

    pub fn load_at(&self, champion: &str, role: Role, now: f64) -> Option<AggregatedBuild> {
        let path = self.get_cache_path(champion, role);
        let content = fs::read_to_string(&path).ok()?;

        let entry: CacheEntry = match serde_json::from_str(&content) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable build cache");
                return None;
            }
        };

        if entry.is_fresh(now, self.ttl) {
            debug!(champion, %role, "build cache hit");
            Some(entry.data)
        } else {
            debug!(champion, %role, "build cache expired");
            None
        }
    }

    pub fn save(&self, champion: &str, role: Role, build: &AggregatedBuild) -> Result<(), AppError> {
        self.save_at(champion, role, build, now_secs())
    }

    pub fn save_at(
        &self,
        champion: &str,
        role: Role,
        build: &AggregatedBuild,
        now: f64,
    ) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;

        let entry = CacheEntry {
            timestamp: now,
            champion_id: cache_key(champion),
            role: role.as_str().to_string(),
            data: build.clone(),
        };
        let json = serde_json::to_string_pretty(&entry)?;
        fs::write(self.get_cache_path(champion, role), json)?;

        Ok(())
    }

    pub fn invalidate(&self, champion: &str, role: Role) -> Result<(), AppError> {
        match fs::remove_file(self.get_cache_path(champion, role)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for BuildCache {
    fn default() -> Self {
        BuildCache::new(default_data_dir())
    }
}

/// Lowercased champion name with everything but letters and digits removed.
pub fn cache_key(champion: &str) -> String {
    champion
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

pub(crate) fn now_secs() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::build::{ItemRecommendation, Skill};
    use tempfile::TempDir;

    fn sample_build() -> AggregatedBuild {
        AggregatedBuild {
            items: ItemRecommendation {
                core: vec![3161, 6697, 3071],
                starting: vec![1054, 2003],
                boots: Some(3111),
            },
            skill_order: vec![Skill::Q, Skill::E, Skill::W],
            sample_size: 12,
            wins: 7,
            ..AggregatedBuild::default()
        }
    }

    #[test]
    fn round_trip_within_ttl() {
        let dir = TempDir::new().unwrap();
        let cache = BuildCache::new(dir.path());
        let build = sample_build();

        cache.save_at("aatrox", Role::Top, &build, 1_000.0).unwrap();

        assert_eq!(cache.load_at("aatrox", Role::Top, 1_000.0 + 3_600.0), Some(build));
    }

    #[test]
    fn expired_entry_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let cache = BuildCache::new(dir.path());

        cache.save_at("aatrox", Role::Top, &sample_build(), 1_000.0).unwrap();

        assert_eq!(cache.load_at("aatrox", Role::Top, 1_000.0 + 21_600.0), None);
        assert_eq!(cache.load_at("aatrox", Role::Top, 1_000.0 + 21_599.5).map(|b| b.sample_size), Some(12));
    }

    #[test]
    fn entries_are_keyed_by_champion_and_role() {
        let dir = TempDir::new().unwrap();
        let cache = BuildCache::new(dir.path());

        cache.save_at("aatrox", Role::Top, &sample_build(), 50.0).unwrap();

        assert_eq!(cache.load_at("aatrox", Role::Jungle, 60.0), None);
        assert_eq!(cache.load_at("darius", Role::Top, 60.0), None);
        assert!(cache.load_at("Aatrox", Role::Top, 60.0).is_some());
    }

    #[test]
    fn file_layout_matches_cache_format() {
        let dir = TempDir::new().unwrap();
        let cache = BuildCache::new(dir.path());

        cache.save_at("Kai'Sa", Role::Adc, &sample_build(), 42.5).unwrap();

        let path = dir.path().join("build_cache_kaisa_adc.json");
        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(raw["timestamp"], 42.5);
        assert_eq!(raw["champion_id"], "kaisa");
        assert_eq!(raw["role"], "adc");
        assert_eq!(raw["data"]["items"]["boots"], 3111);
        assert_eq!(raw["data"]["skill_order"][1], "E");
    }

    #[test]
    fn corrupt_or_missing_files_are_misses() {
        let dir = TempDir::new().unwrap();
        let cache = BuildCache::new(dir.path());

        assert_eq!(cache.load_at("aatrox", Role::Top, 0.0), None);

        fs::write(cache.get_cache_path("aatrox", Role::Top), "{not json").unwrap();
        assert_eq!(cache.load_at("aatrox", Role::Top, 0.0), None);
    }

    #[test]
    fn overwrite_replaces_previous_entry() {
        let dir = TempDir::new().unwrap();
        let cache = BuildCache::new(dir.path());
        let mut newer = sample_build();
        newer.sample_size = 20;

        cache.save_at("aatrox", Role::Top, &sample_build(), 10.0).unwrap();
        cache.save_at("aatrox", Role::Top, &newer, 20.0).unwrap();

        assert_eq!(cache.load_at("aatrox", Role::Top, 30.0), Some(newer));
    }

    #[test]
    fn invalidate_removes_entry_and_tolerates_absence() {
        let dir = TempDir::new().unwrap();
        let cache = BuildCache::new(dir.path());

        cache.save_at("aatrox", Role::Top, &sample_build(), 10.0).unwrap();
        cache.invalidate("aatrox", Role::Top).unwrap();
        cache.invalidate("aatrox", Role::Top).unwrap();

        assert_eq!(cache.load_at("aatrox", Role::Top, 11.0), None);
    }

    #[test]
    fn custom_ttl_is_honoured() {
        let dir = TempDir::new().unwrap();
        let cache = BuildCache::new(dir.path()).with_ttl(Duration::from_secs(60));

        cache.save_at("aatrox", Role::Top, &sample_build(), 0.0).unwrap();

        assert!(cache.load_at("aatrox", Role::Top, 59.0).is_some());
        assert!(cache.load_at("aatrox", Role::Top, 61.0).is_none());
    }
}
