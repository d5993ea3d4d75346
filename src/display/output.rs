use colored::*;
use league_builds::analysis::build::{AggregatedBuild, Role, Skill};
use league_builds::collector::{CollectionReport, ScanOutcome};
use league_builds::reference::catalog::{item_image_url, rune_image_url, rune_name, spell_image_url, spell_name};
use league_builds::reference::directory::ChampionSummary;
use league_builds::reference::items::ItemSummary;
use league_builds::reference::tierlist::{Tier, TierList};
use serde::Serialize;
use std::collections::HashMap;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ItemRow {
    slot: String,
    item: String,
    id: String,
}

#[derive(Tabled)]
struct RuneRow {
    tree: String,
    runes: String,
}

#[derive(Tabled)]
struct ChampionRow {
    #[tabled(rename = "#")]
    key: String,
    name: String,
    id: String,
}

#[derive(Tabled)]
struct TierRow {
    #[tabled(rename = "#")]
    rank: String,
    champion: String,
    role: String,
    tier: String,
    win_rate: String,
    pick_rate: String,
    games: String,
}

#[derive(Tabled)]
struct CatalogRow {
    id: String,
    name: String,
    gold: String,
    category: String,
    stats: String,
}

fn item_label(id: u32, item_names: &HashMap<u32, String>) -> String {
    item_names
        .get(&id)
        .cloned()
        .unwrap_or_else(|| format!("Item {}", id))
}

fn rune_list(ids: &[u32]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter().map(|id| rune_name(*id)).collect::<Vec<_>>().join(", ")
}

fn skill_path(skills: &[Skill]) -> String {
    skills.iter().map(Skill::to_string).collect::<Vec<_>>().join(" > ")
}

pub fn display_build(
    champion: &str,
    role: Role,
    build: &AggregatedBuild,
    item_names: &HashMap<u32, String>,
) {
    println!(
        "\n{}",
        format!("🛡️  Build for {} ({})", champion, role).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    match build.win_rate() {
        Some(win_rate) => println!(
            "{} {} high-tier matches, {:.1}% win rate\n",
            "📈 Sample:".bold(),
            build.sample_size,
            win_rate * 100.0
        ),
        None => println!("{}\n", "Default build (no match data)".yellow()),
    }

    let mut rows = vec![];
    for (idx, id) in build.items.starting.iter().enumerate() {
        rows.push(ItemRow {
            slot: format!("Start {}", idx + 1),
            item: item_label(*id, item_names),
            id: id.to_string(),
        });
    }
    if let Some(boots) = build.items.boots {
        rows.push(ItemRow {
            slot: "Boots".to_string(),
            item: item_label(boots, item_names),
            id: boots.to_string(),
        });
    }
    for (idx, id) in build.items.core.iter().enumerate() {
        rows.push(ItemRow {
            slot: format!("Core {}", idx + 1),
            item: item_label(*id, item_names),
            id: id.to_string(),
        });
    }

    if rows.is_empty() {
        println!("{}", "No item data".yellow());
    } else {
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}\n", table);
    }

    let runes = vec![
        RuneRow {
            tree: "Primary".to_string(),
            runes: rune_list(&build.runes.primary),
        },
        RuneRow {
            tree: "Secondary".to_string(),
            runes: rune_list(&build.runes.secondary),
        },
        RuneRow {
            tree: "Shards".to_string(),
            runes: rune_list(&build.runes.shards),
        },
    ];
    let mut table = Table::new(runes);
    table.with(Style::rounded());
    println!("{}\n", table);

    if !build.skill_order.is_empty() {
        println!("{} {}", "Skills:".bold(), skill_path(&build.skill_order).green());
    }
    if !build.summoners.is_empty() {
        let spells: Vec<_> = build.summoners.iter().map(|id| spell_name(*id)).collect();
        println!("{} {}", "Summoners:".bold(), spells.join(" + "));
    }
    println!();
}

#[derive(Serialize)]
struct IconRef {
    id: u32,
    name: String,
    image: String,
}

#[derive(Serialize)]
struct BuildView<'a> {
    champion: &'a str,
    role: Role,
    version: &'a str,
    sample_size: usize,
    win_rate: Option<f64>,
    starting: Vec<IconRef>,
    boots: Option<IconRef>,
    core: Vec<IconRef>,
    primary_runes: Vec<IconRef>,
    secondary_runes: Vec<IconRef>,
    shards: Vec<IconRef>,
    summoners: Vec<IconRef>,
    skill_order: &'a [Skill],
}

/// Pretty JSON with names and icon URLs resolved, for callers that render their own UI.
pub fn build_json(
    champion: &str,
    role: Role,
    version: &str,
    build: &AggregatedBuild,
    item_names: &HashMap<u32, String>,
) -> serde_json::Result<String> {
    let item = |id: &u32| IconRef {
        id: *id,
        name: item_label(*id, item_names),
        image: item_image_url(version, *id),
    };
    let rune = |id: &u32| IconRef {
        id: *id,
        name: rune_name(*id),
        image: rune_image_url(*id),
    };

    let view = BuildView {
        champion,
        role,
        version,
        sample_size: build.sample_size,
        win_rate: build.win_rate(),
        starting: build.items.starting.iter().map(item).collect(),
        boots: build.items.boots.as_ref().map(item),
        core: build.items.core.iter().map(item).collect(),
        primary_runes: build.runes.primary.iter().map(rune).collect(),
        secondary_runes: build.runes.secondary.iter().map(rune).collect(),
        shards: build.runes.shards.iter().map(rune).collect(),
        summoners: build
            .summoners
            .iter()
            .map(|id| IconRef {
                id: *id,
                name: spell_name(*id),
                image: spell_image_url(version, *id),
            })
            .collect(),
        skill_order: &build.skill_order,
    };
    serde_json::to_string_pretty(&view)
}

pub fn display_collection_summary(report: &CollectionReport, requests: u64) {
    println!(
        "{} {} players scanned, {} builds collected, {} skipped ({} API requests)",
        "📊 Collection:".bold(),
        report.players_scanned,
        report.collected().to_string().green(),
        report.skipped().to_string().yellow(),
        requests
    );

    let without_timeline = report
        .steps
        .iter()
        .filter(|step| matches!(step, ScanOutcome::Collected { with_timeline: false, .. }))
        .count();
    if without_timeline > 0 {
        println!(
            "  {} {} builds have no skill order or starting items (timeline unavailable)",
            "⚠️".yellow(),
            without_timeline
        );
    }
}

pub fn display_champions(champions: &[ChampionSummary], version: &str) {
    println!(
        "\n{}",
        format!("🏆 Champions (patch {})", version).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<_> = champions
        .iter()
        .map(|champion| ChampionRow {
            key: champion.key.to_string(),
            name: champion.name.clone(),
            id: champion.id.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_items(items: &[ItemSummary]) {
    if items.is_empty() {
        println!("{}", "No items match".yellow());
        return;
    }

    let rows: Vec<_> = items
        .iter()
        .map(|item| CatalogRow {
            id: item.id.to_string(),
            name: item.name.clone(),
            gold: item.gold.to_string(),
            category: item.category.to_string(),
            stats: item
                .stat_tags
                .iter()
                .map(|tag| tag.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
    println!("{} items", items.len());
}

fn colored_tier(tier: Tier) -> ColoredString {
    match tier {
        Tier::S => tier.as_str().red().bold(),
        Tier::A => tier.as_str().yellow().bold(),
        Tier::B => tier.as_str().green(),
        Tier::C => tier.as_str().cyan(),
        Tier::D => tier.as_str().normal(),
    }
}

pub fn display_tier_list(list: &TierList, role: Option<Role>) {
    let scope = role.map_or_else(|| "all roles".to_string(), |role| role.to_string());
    println!(
        "\n{}",
        format!("📋 Tier List ({}, {}+)", scope, list.rank).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if !list.available {
        println!(
            "{} {}",
            "Tier list unavailable:".yellow(),
            list.error.as_deref().unwrap_or("unknown error")
        );
        return;
    }
    if list.champions.is_empty() {
        println!("{}", "No champions ranked yet".yellow());
        return;
    }

    let rows: Vec<_> = list
        .champions
        .iter()
        .map(|champion| TierRow {
            rank: champion.rank.to_string(),
            champion: champion.name.clone(),
            role: champion.role.clone(),
            tier: colored_tier(champion.tier).to_string(),
            win_rate: champion.win_rate.clone(),
            pick_rate: champion.pick_rate.clone(),
            games: champion.games.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);

    let counts: Vec<_> = list
        .counts
        .iter()
        .map(|(tier, count)| format!("{} {}", colored_tier(*tier), count))
        .collect();
    println!("{} {}", "Tiers:".bold(), counts.join("  "));
    if let Some(updated) = &list.last_update {
        println!("{} {}", "Updated:".bold(), updated);
    }
    println!();
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_builds::analysis::build::{ItemRecommendation, RuneRecommendation};

    #[test]
    fn json_view_resolves_names_and_icons() {
        let build = AggregatedBuild {
            items: ItemRecommendation {
                core: vec![3071],
                starting: vec![],
                boots: Some(3111),
            },
            runes: RuneRecommendation {
                primary: vec![8010],
                secondary: vec![],
                shards: vec![5008],
            },
            skill_order: vec![Skill::Q, Skill::E],
            summoners: vec![4],
            sample_size: 2,
            wins: 1,
        };
        let names = HashMap::from([(3071, "Black Cleaver".to_string())]);

        let json = build_json("Aatrox", Role::Top, "14.24.1", &build, &names).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["role"], "top");
        assert_eq!(value["win_rate"], 0.5);
        assert_eq!(value["core"][0]["name"], "Black Cleaver");
        assert_eq!(value["boots"]["name"], "Item 3111");
        assert_eq!(value["primary_runes"][0]["name"], "Conqueror");
        assert_eq!(value["summoners"][0]["name"], "Flash");
        assert_eq!(value["skill_order"][1], "E");
    }

    #[test]
    fn skill_path_joins_letters() {
        assert_eq!(skill_path(&[Skill::Q, Skill::E, Skill::W]), "Q > E > W");
        assert_eq!(rune_list(&[]), "-");
    }

    #[test]
    fn tier_letters_keep_their_text_when_coloured() {
        for tier in Tier::ALL {
            assert!(colored_tier(tier).to_string().contains(tier.as_str()));
        }
    }
}
