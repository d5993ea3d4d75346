use crate::analysis::build::{AggregatedBuild, ItemRecommendation, Role, RuneRecommendation, Skill};
use crate::cache::cache_key;

/// Hand-picked builds served when no Riot API key is configured.
pub fn default_build(champion: &str, role: Role) -> Option<AggregatedBuild> {
    match (cache_key(champion).as_str(), role) {
        ("aatrox", Role::Top) => Some(AggregatedBuild {
            items: ItemRecommendation {
                core: vec![3161, 6697, 3071, 3053, 3156, 3026],
                starting: vec![1054, 2003],
                boots: Some(3111),
            },
            runes: RuneRecommendation {
                // Conqueror, Resolve secondary
                primary: vec![8010, 8009, 9105, 8299],
                secondary: vec![8444, 8451],
                shards: vec![5008, 5008, 5001],
            },
            skill_order: vec![Skill::Q, Skill::E, Skill::W],
            summoners: vec![4, 12],
            sample_size: 0,
            wins: 0,
        }),
        _ => None,
    }
}
