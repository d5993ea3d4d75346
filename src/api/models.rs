use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

// League V4 ladder response (challenger/grandmaster leagues)
#[derive(Debug, Deserialize)]
pub struct LeagueListDto {
    #[serde(default)]
    pub entries: Vec<LeagueItemDto>,
}

/// A ladder entry. Older payloads only carry `summonerId`, newer ones carry `puuid` as well.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueItemDto {
    #[serde(default)]
    pub summoner_id: Option<String>,
    #[serde(default)]
    pub puuid: Option<String>,
}

// Summoner V4 response
#[derive(Debug, Deserialize)]
pub struct SummonerDto {
    pub puuid: String,
}

// Match V5 response
#[derive(Debug, Deserialize)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchInfo {
    #[serde(default)]
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    #[serde(default)]
    pub participant_id: Option<u32>,
    pub champion_id: u32,
    #[serde(default)]
    pub team_position: String, // TOP, JUNGLE, MIDDLE, BOTTOM, UTILITY
    #[serde(default)]
    pub win: bool,
    #[serde(default)]
    pub item0: Option<u32>,
    #[serde(default)]
    pub item1: Option<u32>,
    #[serde(default)]
    pub item2: Option<u32>,
    #[serde(default)]
    pub item3: Option<u32>,
    #[serde(default)]
    pub item4: Option<u32>,
    #[serde(default)]
    pub item5: Option<u32>,
    #[serde(default)]
    pub item6: Option<u32>,
    #[serde(default)]
    pub perks: PerksDto,
    #[serde(default)]
    pub summoner1_id: Option<u32>,
    #[serde(default)]
    pub summoner2_id: Option<u32>,
}

impl ParticipantDto {
    /// The seven final inventory slots, in slot order.
    pub fn item_slots(&self) -> [Option<u32>; 7] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PerksDto {
    #[serde(default)]
    pub stat_perks: Option<StatPerksDto>,
    #[serde(default)]
    pub styles: Vec<PerkStyleDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StatPerksDto {
    #[serde(default)]
    pub offense: Option<u32>,
    #[serde(default)]
    pub flex: Option<u32>,
    #[serde(default)]
    pub defense: Option<u32>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PerkStyleDto {
    #[serde(default)]
    pub style: Option<u32>,
    #[serde(default)]
    pub selections: Vec<PerkSelectionDto>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerkSelectionDto {
    pub perk: u32,
}

// Match V5 timeline response
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TimelineDto {
    #[serde(default)]
    pub info: TimelineInfo,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TimelineInfo {
    #[serde(default)]
    pub frames: Vec<FrameDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FrameDto {
    #[serde(default)]
    pub events: Vec<EventDto>,
}

/// Timeline events come in many shapes; only the fields read by the extractor are kept.
/// A field of the wrong type is read as absent so one bad event cannot sink the timeline.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub participant_id: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub skill_slot: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub item_id: Option<u32>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

pub const SKILL_LEVEL_UP: &str = "SKILL_LEVEL_UP";
pub const ITEM_PURCHASED: &str = "ITEM_PURCHASED";

// Data Dragon champion.json
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<ImageInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageInfo {
    pub full: String,
}

// Data Dragon item.json
#[derive(Debug, Deserialize)]
pub struct DataDragonItems {
    pub data: HashMap<String, ItemInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ItemInfo {
    pub name: String,
    #[serde(default)]
    pub plaintext: String,
    #[serde(default)]
    pub gold: ItemGold,
    #[serde(default)]
    pub stats: HashMap<String, f64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ItemGold {
    #[serde(default)]
    pub total: u32,
    #[serde(default = "default_purchasable")]
    pub purchasable: bool,
}

impl Default for ItemGold {
    fn default() -> Self {
        ItemGold {
            total: 0,
            purchasable: true,
        }
    }
}

fn default_purchasable() -> bool {
    true
}

// Tier list aggregation API
#[derive(Debug, Deserialize, Default)]
pub struct TierListDto {
    #[serde(default)]
    pub rank: Option<String>,
    /// Champions keyed by tier letter (`S` through `D`).
    #[serde(default)]
    pub tier_list: HashMap<String, Vec<TierChampionDto>>,
    #[serde(default)]
    pub counts: HashMap<String, u32>,
    #[serde(default)]
    pub total_champions: u32,
    #[serde(default)]
    pub last_update: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TierChampionDto {
    #[serde(default)]
    pub champion: Option<String>,
    /// Set on role-split entries of the global list.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub winrate: Option<f64>,
    #[serde(default)]
    pub pickrate: Option<f64>,
    #[serde(default)]
    pub games_analyzed: u64,
    #[serde(default)]
    pub performance_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_parses_sparse_payload() {
        let json = r#"{
            "participantId": 3,
            "championId": 266,
            "teamPosition": "TOP",
            "win": true,
            "item0": 3071,
            "item1": 0,
            "perks": {
                "statPerks": {"offense": 5008, "flex": 5008, "defense": 5011},
                "styles": [
                    {"style": 8000, "selections": [{"perk": 8010, "var1": 0}, {"perk": 9111}]},
                    {"style": 8400, "selections": [{"perk": 8444}]}
                ]
            },
            "summoner1Id": 4,
            "summoner2Id": 12
        }"#;

        let participant: ParticipantDto = serde_json::from_str(json).unwrap();
        assert_eq!(participant.participant_id, Some(3));
        assert_eq!(participant.item_slots()[0], Some(3071));
        assert_eq!(participant.item_slots()[1], Some(0));
        assert_eq!(participant.item_slots()[6], None);
        assert_eq!(participant.perks.styles.len(), 2);
        assert_eq!(participant.perks.stat_perks.unwrap().defense, Some(5011));
    }

    #[test]
    fn timeline_events_keep_only_known_fields() {
        let json = r#"{"info": {"frames": [{"timestamp": 0, "events": [
            {"type": "ITEM_PURCHASED", "timestamp": 1200, "participantId": 1, "itemId": 1054},
            {"type": "WARD_PLACED", "timestamp": 1500, "creatorId": 1, "wardType": "YELLOW_TRINKET"}
        ]}]}}"#;

        let timeline: TimelineDto = serde_json::from_str(json).unwrap();
        let events = &timeline.info.frames[0].events;
        assert_eq!(events[0].kind, ITEM_PURCHASED);
        assert_eq!(events[0].item_id, Some(1054));
        assert_eq!(events[1].participant_id, None);
    }

    #[test]
    fn tier_list_parses_with_missing_fields() {
        let json = r#"{
            "rank": "MASTER",
            "tier_list": {
                "S": [{"champion": "aatrox", "roles": ["top"], "winrate": 52.3, "pickrate": 8.1, "games_analyzed": 412}],
                "B": [{"champion": "teemo"}]
            },
            "total_champions": 2
        }"#;

        let dto: TierListDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.rank.as_deref(), Some("MASTER"));
        assert_eq!(dto.tier_list["S"][0].games_analyzed, 412);
        assert_eq!(dto.tier_list["B"][0].winrate, None);
        assert!(dto.counts.is_empty());
        assert_eq!(dto.last_update, None);
    }

    #[test]
    fn mistyped_event_fields_are_read_as_absent() {
        let json = r#"{"info": {"frames": [{"events": [
            {"type": "ITEM_PURCHASED", "timestamp": 900, "participantId": 2, "itemId": "1054"},
            {"type": "SKILL_LEVEL_UP", "timestamp": 61000, "participantId": 2, "skillSlot": 1},
            {"type": 7, "participantId": null}
        ]}]}}"#;

        let timeline: TimelineDto = serde_json::from_str(json).unwrap();
        let events = &timeline.info.frames[0].events;
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].item_id, None);
        assert_eq!(events[0].participant_id, Some(2));
        assert_eq!(events[1].skill_slot, Some(1));
        assert_eq!(events[2].kind, "");
    }
}
