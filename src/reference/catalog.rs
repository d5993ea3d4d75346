//! Display names and icon URLs for runes, stat shards, summoner spells and items.

use crate::api::endpoints::DATA_DRAGON_BASE;

const WIKI_IMAGES: &str = "https://wiki.leagueoflegends.com/en-us/images/";

/// (id, display name, icon path under the Data Dragon `img/` root or an absolute URL)
const RUNES: &[(u32, &str, &str)] = &[
    // Precision
    (8000, "Precision", "perk-images/Styles/7201_Precision.png"),
    (8005, "Press the Attack", "perk-images/Styles/Precision/PressTheAttack/PressTheAttack.png"),
    (8008, "Lethal Tempo", "perk-images/Styles/Precision/LethalTempo/LethalTempoTemp.png"),
    (8021, "Fleet Footwork", "perk-images/Styles/Precision/FleetFootwork/FleetFootwork.png"),
    (8010, "Conqueror", "perk-images/Styles/Precision/Conqueror/Conqueror.png"),
    (9101, "Triumph", "perk-images/Styles/Precision/Triumph.png"),
    (9111, "Triumph", "perk-images/Styles/Precision/Triumph.png"),
    (8009, "Overheal", "perk-images/Styles/Precision/Overheal.png"),
    (8014, "Coup de Grace", "perk-images/Styles/Precision/CoupDeGrace/CoupDeGrace.png"),
    (9104, "Legend: Alacrity", "perk-images/Styles/Precision/LegendAlacrity/LegendAlacrity.png"),
    (9105, "Legend: Tenacity", "perk-images/Styles/Precision/LegendTenacity/LegendTenacity.png"),
    (9103, "Legend: Bloodline", "perk-images/Styles/Precision/LegendBloodline/LegendBloodline.png"),
    (8017, "Cut Down", "perk-images/Styles/Precision/CutDown/CutDown.png"),
    (8299, "Last Stand", "https://wiki.leagueoflegends.com/en-us/images/Last_Stand_rune.png"),
    // Domination
    (8100, "Domination", "perk-images/Styles/7200_Domination.png"),
    (8112, "Electrocute", "perk-images/Styles/Domination/Electrocute/Electrocute.png"),
    (8124, "Predator", "perk-images/Styles/Domination/Predator/Predator.png"),
    (8128, "Dark Harvest", "perk-images/Styles/Domination/DarkHarvest/DarkHarvest.png"),
    (9923, "Hail of Blades", "perk-images/Styles/Domination/HailOfBlades/HailOfBlades.png"),
    (8126, "Cheap Shot", "perk-images/Styles/Domination/CheapShot/CheapShot.png"),
    (8139, "Taste of Blood", "perk-images/Styles/Domination/TasteOfBlood/GreenTerror_TasteOfBlood.png"),
    (8143, "Sudden Impact", "perk-images/Styles/Domination/SuddenImpact/SuddenImpact.png"),
    (8136, "Zombie Ward", "perk-images/Styles/Domination/ZombieWard/ZombieWard.png"),
    (8120, "Ghost Poro", "perk-images/Styles/Domination/GhostPoro/GhostPoro.png"),
    (8138, "Eyeball Collection", "perk-images/Styles/Domination/EyeballCollection/EyeballCollection.png"),
    (8137, "Sixth Sense", "https://wiki.leagueoflegends.com/en-us/images/Sixth_Sense_rune.png"),
    (8140, "Grisly Mementos", "https://wiki.leagueoflegends.com/en-us/images/Grisly_Mementos_rune.png"),
    (8141, "Deep Ward", "https://wiki.leagueoflegends.com/en-us/images/Deep_Ward_rune.png"),
    (8135, "Treasure Hunter", "perk-images/Styles/Domination/TreasureHunter/TreasureHunter.png"),
    (8134, "Ingenious Hunter", "perk-images/Styles/Domination/IngeniousHunter/IngeniousHunter.png"),
    (8105, "Relentless Hunter", "perk-images/Styles/Domination/RelentlessHunter/RelentlessHunter.png"),
    (8106, "Ultimate Hunter", "perk-images/Styles/Domination/UltimateHunter/UltimateHunter.png"),
    // Sorcery
    (8200, "Sorcery", "perk-images/Styles/7202_Sorcery.png"),
    (8214, "Summon Aery", "perk-images/Styles/Sorcery/SummonAery/SummonAery.png"),
    (8229, "Arcane Comet", "perk-images/Styles/Sorcery/ArcaneComet/ArcaneComet.png"),
    (8230, "Phase Rush", "perk-images/Styles/Sorcery/PhaseRush/PhaseRush.png"),
    (8224, "Nullifying Orb", "perk-images/Styles/Sorcery/NullifyingOrb/Pokeshield.png"),
    (8226, "Manaflow Band", "perk-images/Styles/Sorcery/ManaflowBand/ManaflowBand.png"),
    (8275, "Nimbus Cloak", "perk-images/Styles/Sorcery/NimbusCloak/6361.png"),
    (8210, "Transcendence", "perk-images/Styles/Sorcery/Transcendence/Transcendence.png"),
    (8234, "Celerity", "perk-images/Styles/Sorcery/Celerity/CelerityTemp.png"),
    (8233, "Absolute Focus", "perk-images/Styles/Sorcery/AbsoluteFocus/AbsoluteFocus.png"),
    (8237, "Scorch", "perk-images/Styles/Sorcery/Scorch/Scorch.png"),
    (8232, "Waterwalking", "perk-images/Styles/Sorcery/Waterwalking/Waterwalking.png"),
    (8236, "Gathering Storm", "perk-images/Styles/Sorcery/GatheringStorm/GatheringStorm.png"),
    // Resolve
    (8400, "Resolve", "perk-images/Styles/7204_Resolve.png"),
    (8437, "Grasp of the Undying", "perk-images/Styles/Resolve/GraspOfTheUndying/GraspOfTheUndying.png"),
    (8439, "Aftershock", "perk-images/Styles/Resolve/VeteranAftershock/VeteranAftershock.png"),
    (8465, "Guardian", "perk-images/Styles/Resolve/Guardian/Guardian.png"),
    (8446, "Demolish", "perk-images/Styles/Resolve/Demolish/Demolish.png"),
    (8463, "Font of Life", "perk-images/Styles/Resolve/FontOfLife/FontOfLife.png"),
    (8401, "Shield Bash", "perk-images/Styles/Resolve/MirrorShell/MirrorShell.png"),
    (8429, "Conditioning", "perk-images/Styles/Resolve/Conditioning/Conditioning.png"),
    (8444, "Second Wind", "perk-images/Styles/Resolve/SecondWind/SecondWind.png"),
    (8473, "Bone Plating", "perk-images/Styles/Resolve/BonePlating/BonePlating.png"),
    (8451, "Overgrowth", "perk-images/Styles/Resolve/Overgrowth/Overgrowth.png"),
    (8453, "Revitalize", "perk-images/Styles/Resolve/Revitalize/Revitalize.png"),
    (8242, "Unflinching", "perk-images/Styles/Resolve/Unflinching/Unflinching.png"),
    // Inspiration
    (8300, "Inspiration", "perk-images/Styles/7203_Inspiration.png"),
    (8351, "Glacial Augment", "perk-images/Styles/Inspiration/GlacialAugment/GlacialAugment.png"),
    (8360, "Unsealed Spellbook", "perk-images/Styles/Inspiration/UnsealedSpellbook/UnsealedSpellbook.png"),
    (8369, "First Strike", "perk-images/Styles/Inspiration/FirstStrike/FirstStrike.png"),
    (8306, "Hextech Flashtraption", "perk-images/Styles/Inspiration/HextechFlashtraption/HextechFlashtraption.png"),
    (8304, "Magical Footwear", "perk-images/Styles/Inspiration/MagicalFootwear/MagicalFootwear.png"),
    (8313, "Perfect Timing", "perk-images/Styles/Inspiration/PerfectTiming/PerfectTiming.png"),
    (8321, "Future's Market", "perk-images/Styles/Inspiration/FuturesMarket/FuturesMarket.png"),
    (8316, "Minion Dematerializer", "perk-images/Styles/Inspiration/MinionDematerializer/MinionDematerializer.png"),
    (8345, "Biscuit Delivery", "perk-images/Styles/Inspiration/BiscuitDelivery/BiscuitDelivery.png"),
    (8347, "Cosmic Insight", "perk-images/Styles/Inspiration/CosmicInsight/CosmicInsight.png"),
    (8410, "Approach Velocity", "perk-images/Styles/Inspiration/ApproachVelocity/ApproachVelocity.png"),
    (8352, "Time Warp Tonic", "perk-images/Styles/Inspiration/TimeWarpTonic/TimeWarpTonic.png"),
    // Stat shards
    (5008, "Adaptive Force", "perk-images/StatMods/StatModsAdaptiveForceIcon.png"),
    (5005, "Attack Speed", "perk-images/StatMods/StatModsAttackSpeedIcon.png"),
    (5007, "Ability Haste", "perk-images/StatMods/StatModsCDRScalingIcon.png"),
    (5001, "Health Scaling", "perk-images/StatMods/StatModsHealthScalingIcon.png"),
    (5002, "Armor", "perk-images/StatMods/StatModsArmorIcon.png"),
    (5003, "Magic Resist", "perk-images/StatMods/StatModsMagicResIcon.png"),
    (5010, "Move Speed", "perk-images/StatMods/StatModsMovementSpeedIcon.png"),
    (5011, "Health", "perk-images/StatMods/StatModsHealthPlusIcon.png"),
];

const FALLBACK_RUNE_ICON: &str = "perk-images/Styles/Precision/Conqueror/Conqueror.png";

/// (id, display name, Data Dragon image file stem)
const SUMMONER_SPELLS: &[(u32, &str, &str)] = &[
    (1, "Cleanse", "SummonerBoost"),
    (3, "Exhaust", "SummonerExhaust"),
    (4, "Flash", "SummonerFlash"),
    (6, "Ghost", "SummonerHaste"),
    (7, "Heal", "SummonerHeal"),
    (11, "Smite", "SummonerSmite"),
    (12, "Teleport", "SummonerTeleport"),
    (13, "Clarity", "SummonerMana"),
    (14, "Ignite", "SummonerDot"),
    (21, "Barrier", "SummonerBarrier"),
    (32, "Mark", "SummonerSnowball"),
];

fn rune_entry(id: u32) -> Option<&'static (u32, &'static str, &'static str)> {
    RUNES.iter().find(|(rune_id, _, _)| *rune_id == id)
}

fn spell_entry(id: u32) -> Option<&'static (u32, &'static str, &'static str)> {
    SUMMONER_SPELLS.iter().find(|(spell_id, _, _)| *spell_id == id)
}

pub fn rune_name(id: u32) -> String {
    match rune_entry(id) {
        Some((_, name, _)) => name.to_string(),
        None => format!("Rune {}", id),
    }
}

pub fn rune_image_url(id: u32) -> String {
    let path = rune_entry(id).map(|(_, _, path)| *path).unwrap_or(FALLBACK_RUNE_ICON);
    if path.starts_with(WIKI_IMAGES) {
        path.to_string()
    } else {
        format!("{}/cdn/img/{}", DATA_DRAGON_BASE, path)
    }
}

pub fn spell_name(id: u32) -> String {
    match spell_entry(id) {
        Some((_, name, _)) => name.to_string(),
        None => format!("Spell {}", id),
    }
}

pub fn spell_image_url(version: &str, id: u32) -> String {
    let file = match spell_entry(id) {
        Some((_, _, file)) => file.to_string(),
        None => format!("Summoner{}", id),
    };
    format!("{}/cdn/{}/img/spell/{}.png", DATA_DRAGON_BASE, version, file)
}

pub fn item_image_url(version: &str, id: u32) -> String {
    format!("{}/cdn/{}/img/item/{}.png", DATA_DRAGON_BASE, version, id)
}

pub fn champion_image_url(version: &str, file: &str) -> String {
    format!("{}/cdn/{}/img/champion/{}", DATA_DRAGON_BASE, version, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_rune_names() {
        assert_eq!(rune_name(8010), "Conqueror");
        assert_eq!(rune_name(5008), "Adaptive Force");
        assert_eq!(rune_name(1), "Rune 1");
    }

    #[test]
    fn rune_icons_prefer_wiki_overrides() {
        assert_eq!(
            rune_image_url(8299),
            "https://wiki.leagueoflegends.com/en-us/images/Last_Stand_rune.png"
        );
        assert_eq!(
            rune_image_url(8112),
            "https://ddragon.leagueoflegends.com/cdn/img/perk-images/Styles/Domination/Electrocute/Electrocute.png"
        );
        assert!(rune_image_url(424242).ends_with("Conqueror/Conqueror.png"));
    }

    #[test]
    fn spells_have_names_and_files() {
        assert_eq!(spell_name(4), "Flash");
        assert_eq!(spell_name(99), "Spell 99");
        assert_eq!(
            spell_image_url("14.24.1", 14),
            "https://ddragon.leagueoflegends.com/cdn/14.24.1/img/spell/SummonerDot.png"
        );
        assert!(spell_image_url("14.24.1", 99).ends_with("/Summoner99.png"));
    }

    #[test]
    fn versioned_item_and_champion_urls() {
        assert_eq!(
            item_image_url("14.24.1", 3071),
            "https://ddragon.leagueoflegends.com/cdn/14.24.1/img/item/3071.png"
        );
        assert_eq!(
            champion_image_url("14.24.1", "Aatrox.png"),
            "https://ddragon.leagueoflegends.com/cdn/14.24.1/img/champion/Aatrox.png"
        );
    }
}
