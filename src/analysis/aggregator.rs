use super::build::{AggregatedBuild, ItemRecommendation, NormalizedBuild, RuneRecommendation, Skill};
use super::frequency::FrequencyCounter;

pub const CORE_ITEMS: usize = 6;
pub const STARTING_ITEMS: usize = 3;
pub const PRIMARY_RUNES: usize = 4;
pub const SECONDARY_RUNES: usize = 2;
pub const SHARDS: usize = 3;
pub const SUMMONER_SPELLS: usize = 2;
/// Skill openings are compared on their first three level-ups.
pub const SKILL_OPENING: usize = 3;

pub struct BuildAggregator;

impl BuildAggregator {
    /// Combine a sample of builds into the most representative one.
    ///
    /// Every field is ranked independently by frequency, ties going to the value
    /// seen first. Returns `None` for an empty sample.
    pub fn aggregate(builds: &[NormalizedBuild]) -> Option<AggregatedBuild> {
        if builds.is_empty() {
            return None;
        }

        let mut items = FrequencyCounter::new();
        let mut starting = FrequencyCounter::new();
        let mut boots = FrequencyCounter::new();
        let mut primary = FrequencyCounter::new();
        let mut secondary = FrequencyCounter::new();
        let mut shards = FrequencyCounter::new();
        let mut summoners = FrequencyCounter::new();
        let mut openings: FrequencyCounter<Vec<Skill>> = FrequencyCounter::new();

        for build in builds {
            items.extend(build.items.iter().copied());
            starting.extend(build.starting_items.iter().copied());
            boots.extend(build.boots);
            primary.extend(build.primary_runes.iter().copied());
            secondary.extend(build.secondary_runes.iter().copied());
            if let Some(stat_shards) = &build.shards {
                shards.extend(stat_shards.slots().into_iter().flatten());
            }
            summoners.extend(build.summoners.into_iter().flatten());

            // up to the first three level-ups, no padding for shorter orders
            if !build.skill_order.is_empty() {
                let opening = build.skill_order.iter().take(SKILL_OPENING).copied().collect();
                openings.add(opening);
            }
        }

        Some(AggregatedBuild {
            items: ItemRecommendation {
                core: items.top(CORE_ITEMS),
                starting: starting.top(STARTING_ITEMS),
                boots: boots.top(1).into_iter().next(),
            },
            runes: RuneRecommendation {
                primary: primary.top(PRIMARY_RUNES),
                secondary: secondary.top(SECONDARY_RUNES),
                shards: shards.top(SHARDS),
            },
            skill_order: openings.top(1).into_iter().next().unwrap_or_default(),
            summoners: summoners.top(SUMMONER_SPELLS),
            sample_size: builds.len(),
            wins: builds.iter().filter(|build| build.win).count(),
        })
    }
}
