use crate::api::models::{DataDragonItems, ItemInfo};
use crate::error::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::catalog::item_image_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Basic,
    Epic,
    Legendary,
}

impl ItemCategory {
    pub fn from_gold(total: u32) -> Self {
        if total >= 2500 {
            ItemCategory::Legendary
        } else if total >= 1000 {
            ItemCategory::Epic
        } else {
            ItemCategory::Basic
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemCategory::Basic => "basic",
            ItemCategory::Epic => "epic",
            ItemCategory::Legendary => "legendary",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatTag {
    #[serde(rename = "ad")]
    AttackDamage,
    #[serde(rename = "ap")]
    AbilityPower,
    #[serde(rename = "health")]
    Health,
    #[serde(rename = "armor")]
    Armor,
    #[serde(rename = "mr")]
    MagicResist,
    #[serde(rename = "as")]
    AttackSpeed,
    #[serde(rename = "crit")]
    Crit,
}

impl StatTag {
    pub fn as_str(self) -> &'static str {
        match self {
            StatTag::AttackDamage => "ad",
            StatTag::AbilityPower => "ap",
            StatTag::Health => "health",
            StatTag::Armor => "armor",
            StatTag::MagicResist => "mr",
            StatTag::AttackSpeed => "as",
            StatTag::Crit => "crit",
        }
    }
}

impl FromStr for StatTag {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ad" => Ok(StatTag::AttackDamage),
            "ap" => Ok(StatTag::AbilityPower),
            "health" | "hp" => Ok(StatTag::Health),
            "armor" => Ok(StatTag::Armor),
            "mr" => Ok(StatTag::MagicResist),
            "as" => Ok(StatTag::AttackSpeed),
            "crit" => Ok(StatTag::Crit),
            other => Err(AppError::Config(format!(
                "unknown stat tag {:?} (expected ad, ap, health, armor, mr, as or crit)",
                other
            ))),
        }
    }
}

impl fmt::Display for StatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data Dragon stat keys, in detection order.
const STAT_KEYS: &[(&str, StatTag)] = &[
    ("FlatPhysicalDamageMod", StatTag::AttackDamage),
    ("FlatMagicDamageMod", StatTag::AbilityPower),
    ("FlatHPPoolMod", StatTag::Health),
    ("PercentHPPoolMod", StatTag::Health),
    ("FlatArmorMod", StatTag::Armor),
    ("FlatSpellBlockMod", StatTag::MagicResist),
    ("PercentAttackSpeedMod", StatTag::AttackSpeed),
    ("FlatCritChanceMod", StatTag::Crit),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSummary {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub gold: u32,
    pub image: String,
    pub category: ItemCategory,
    pub stat_tags: Vec<StatTag>,
}

fn stat_tags(info: &ItemInfo) -> Vec<StatTag> {
    let mut tags = Vec::new();
    for (key, tag) in STAT_KEYS {
        let present = info.stats.get(*key).is_some_and(|value| *value != 0.0);
        if present && !tags.contains(tag) {
            tags.push(*tag);
        }
    }
    tags
}

/// Purchasable items, sorted by id.
pub fn item_catalog(version: &str, items: &DataDragonItems) -> Vec<ItemSummary> {
    let mut catalog: Vec<ItemSummary> = items
        .data
        .iter()
        .filter(|(_, info)| info.gold.purchasable)
        .filter_map(|(id, info)| {
            let Ok(id) = id.parse::<u32>() else {
                debug!(id = %id, "skipping item with non-numeric id");
                return None;
            };
            Some(ItemSummary {
                id,
                name: info.name.clone(),
                description: info.plaintext.clone(),
                gold: info.gold.total,
                image: item_image_url(version, id),
                category: ItemCategory::from_gold(info.gold.total),
                stat_tags: stat_tags(info),
            })
        })
        .collect();

    catalog.sort_by_key(|item| item.id);
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ItemGold;
    use std::collections::HashMap;

    fn item(name: &str, total: u32, purchasable: bool, stats: &[(&str, f64)]) -> ItemInfo {
        ItemInfo {
            name: name.to_string(),
            plaintext: format!("{} text", name),
            gold: ItemGold { total, purchasable },
            stats: stats.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    fn items() -> DataDragonItems {
        let mut data = HashMap::new();
        data.insert("3071".to_string(), item("Black Cleaver", 3000, true, &[
            ("FlatPhysicalDamageMod", 40.0),
            ("FlatHPPoolMod", 400.0),
            ("PercentHPPoolMod", 0.1),
        ]));
        data.insert("1001".to_string(), item("Boots", 300, true, &[]));
        data.insert("3020".to_string(), item("Sorcerer's Shoes", 1100, true, &[("FlatMagicDamageMod", 0.0)]));
        data.insert("3400".to_string(), item("Your Cut", 0, false, &[]));
        data.insert("Ornn1".to_string(), item("Not an item", 0, true, &[]));
        DataDragonItems { data }
    }

    #[test]
    fn catalog_keeps_purchasable_numeric_items_sorted() {
        let catalog = item_catalog("14.24.1", &items());
        let ids: Vec<_> = catalog.iter().map(|i| i.id).collect();

        assert_eq!(ids, [1001, 3020, 3071]);
        assert_eq!(catalog[2].image, "https://ddragon.leagueoflegends.com/cdn/14.24.1/img/item/3071.png");
    }

    #[test]
    fn categories_follow_total_gold() {
        let catalog = item_catalog("14.24.1", &items());
        let categories: Vec<_> = catalog.iter().map(|i| i.category).collect();

        assert_eq!(categories, [ItemCategory::Basic, ItemCategory::Epic, ItemCategory::Legendary]);
    }

    #[test]
    fn stat_tags_skip_zero_stats_and_duplicates() {
        let catalog = item_catalog("14.24.1", &items());

        assert_eq!(catalog[2].stat_tags, [StatTag::AttackDamage, StatTag::Health]);
        assert!(catalog[1].stat_tags.is_empty());
    }

    #[test]
    fn stat_tags_parse_from_cli_names() {
        assert_eq!("AP".parse::<StatTag>().unwrap(), StatTag::AbilityPower);
        assert!("mana".parse::<StatTag>().is_err());
    }
}
