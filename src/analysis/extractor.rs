use super::build::{NormalizedBuild, Skill, StatShards};
use crate::api::models::{ParticipantDto, TimelineDto, ITEM_PURCHASED, SKILL_LEVEL_UP};
use tracing::debug;

/// Item ids tracked as boots rather than as regular items.
pub const BOOTS_IDS: [u32; 7] = [3006, 3009, 3020, 3047, 3111, 3117, 3158];

/// Purchases before this point (ms) count as starting items.
pub const STARTING_ITEMS_CUTOFF_MS: i64 = 30_000;

pub fn is_boots(item_id: u32) -> bool {
    BOOTS_IDS.contains(&item_id)
}

/// Turn one participant record into a normalized build.
///
/// The skill order is only filled in when both a timeline and the participant's
/// in-match id are supplied. Starting items are read separately with
/// [`extract_starting_items`].
pub fn extract_build(
    participant: &ParticipantDto,
    timeline: Option<&TimelineDto>,
    participant_id: Option<u32>,
) -> NormalizedBuild {
    let mut build = NormalizedBuild {
        champion_id: participant.champion_id,
        role: participant.team_position.clone(),
        win: participant.win,
        summoners: [participant.summoner1_id, participant.summoner2_id],
        ..NormalizedBuild::default()
    };

    for item_id in participant.item_slots().into_iter().flatten() {
        if item_id == 0 {
            continue;
        }
        // Last boots seen wins when a slot layout somehow holds two pairs.
        if is_boots(item_id) {
            build.boots = Some(item_id);
        } else {
            build.items.push(item_id);
        }
    }

    let styles = &participant.perks.styles;
    if let Some(primary) = styles.first() {
        build.primary_runes = primary.selections.iter().map(|s| s.perk).collect();
    }
    if let Some(secondary) = styles.get(1) {
        build.secondary_runes = secondary.selections.iter().map(|s| s.perk).collect();
    }

    build.shards = participant.perks.stat_perks.as_ref().map(|stats| StatShards {
        offense: stats.offense,
        flex: stats.flex,
        defense: stats.defense,
    });

    if let (Some(timeline), Some(participant_id)) = (timeline, participant_id) {
        build.skill_order = extract_skill_order(timeline, participant_id);
    }

    debug!(
        champion_id = build.champion_id,
        items = build.items.len(),
        skills = build.skill_order.len(),
        "extracted build"
    );

    build
}

/// Skill level-ups for one participant across the whole timeline, in event order.
pub fn extract_skill_order(timeline: &TimelineDto, participant_id: u32) -> Vec<Skill> {
    timeline
        .info
        .frames
        .iter()
        .flat_map(|frame| frame.events.iter())
        .filter(|event| event.kind == SKILL_LEVEL_UP && event.participant_id == Some(participant_id))
        .filter_map(|event| event.skill_slot.and_then(Skill::from_slot))
        .collect()
}

/// Items bought in the first frame before the starting-items cutoff.
///
/// Events missing an item id are skipped; a timeline without frames yields nothing.
pub fn extract_starting_items(timeline: &TimelineDto, participant_id: u32) -> Vec<u32> {
    let Some(first_frame) = timeline.info.frames.first() else {
        return Vec::new();
    };

    first_frame
        .events
        .iter()
        .filter(|event| event.kind == ITEM_PURCHASED && event.participant_id == Some(participant_id))
        .filter(|event| event.timestamp.unwrap_or(0) < STARTING_ITEMS_CUTOFF_MS)
        .filter_map(|event| event.item_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{
        EventDto, FrameDto, PerkSelectionDto, PerkStyleDto, PerksDto, StatPerksDto, TimelineInfo,
    };

    fn participant(items: [Option<u32>; 7]) -> ParticipantDto {
        ParticipantDto {
            participant_id: Some(2),
            champion_id: 266,
            team_position: "TOP".to_string(),
            win: true,
            item0: items[0],
            item1: items[1],
            item2: items[2],
            item3: items[3],
            item4: items[4],
            item5: items[5],
            item6: items[6],
            perks: PerksDto {
                stat_perks: Some(StatPerksDto {
                    offense: Some(5008),
                    flex: None,
                    defense: Some(5011),
                }),
                styles: vec![
                    PerkStyleDto {
                        style: Some(8000),
                        selections: [8010, 9111, 9105, 8299]
                            .into_iter()
                            .map(|perk| PerkSelectionDto { perk })
                            .collect(),
                    },
                    PerkStyleDto {
                        style: Some(8400),
                        selections: [8444, 8451]
                            .into_iter()
                            .map(|perk| PerkSelectionDto { perk })
                            .collect(),
                    },
                ],
            },
            summoner1_id: Some(4),
            summoner2_id: Some(12),
        }
    }

    fn event(kind: &str, timestamp: i64, participant_id: u32) -> EventDto {
        EventDto {
            kind: kind.to_string(),
            timestamp: Some(timestamp),
            participant_id: Some(participant_id),
            ..EventDto::default()
        }
    }

    fn skill_up(timestamp: i64, participant_id: u32, slot: u32) -> EventDto {
        EventDto {
            skill_slot: Some(slot),
            ..event(SKILL_LEVEL_UP, timestamp, participant_id)
        }
    }

    fn purchase(timestamp: i64, participant_id: u32, item_id: u32) -> EventDto {
        EventDto {
            item_id: Some(item_id),
            ..event(ITEM_PURCHASED, timestamp, participant_id)
        }
    }

    fn timeline(frames: Vec<Vec<EventDto>>) -> TimelineDto {
        TimelineDto {
            info: TimelineInfo {
                frames: frames.into_iter().map(|events| FrameDto { events }).collect(),
            },
        }
    }

    #[test]
    fn splits_boots_from_items_and_skips_empty_slots() {
        let p = participant([Some(3071), Some(0), Some(3047), None, Some(6333), Some(3053), Some(3340)]);
        let build = extract_build(&p, None, None);

        assert_eq!(build.items, vec![3071, 6333, 3053, 3340]);
        assert_eq!(build.boots, Some(3047));
        assert_eq!(build.champion_id, 266);
        assert_eq!(build.role, "TOP");
        assert!(build.win);
        assert_eq!(build.summoners, [Some(4), Some(12)]);
    }

    #[test]
    fn populated_slot_count_matches_items_plus_boots() {
        let p = participant([Some(1055), Some(3006), None, Some(3031), Some(0), None, Some(3363)]);
        let build = extract_build(&p, None, None);

        let populated = p.item_slots().iter().flatten().filter(|&&id| id != 0).count();
        assert_eq!(build.items.len() + usize::from(build.boots.is_some()), populated);
    }

    #[test]
    fn last_boots_seen_wins() {
        let p = participant([Some(3006), Some(3111), None, None, None, None, None]);
        let build = extract_build(&p, None, None);

        assert_eq!(build.boots, Some(3111));
        assert!(build.items.is_empty());
    }

    #[test]
    fn reads_rune_trees_and_shards_positionally() {
        let build = extract_build(&participant([None; 7]), None, None);

        assert_eq!(build.primary_runes, vec![8010, 9111, 9105, 8299]);
        assert_eq!(build.secondary_runes, vec![8444, 8451]);
        let shards = build.shards.unwrap();
        assert_eq!(shards.slots(), [Some(5008), None, Some(5011)]);
    }

    #[test]
    fn missing_trees_and_stat_perks_yield_empty_fields() {
        let mut p = participant([None; 7]);
        p.perks = PerksDto::default();
        let build = extract_build(&p, None, None);

        assert!(build.primary_runes.is_empty());
        assert!(build.secondary_runes.is_empty());
        assert_eq!(build.shards, None);
    }

    #[test]
    fn skill_order_follows_events_for_the_participant_only() {
        let t = timeline(vec![
            vec![skill_up(1000, 2, 1), skill_up(1100, 3, 2)],
            vec![skill_up(70_000, 2, 3), skill_up(80_000, 2, 7), skill_up(90_000, 2, 2)],
            vec![skill_up(400_000, 2, 4)],
        ]);

        let build = extract_build(&participant([None; 7]), Some(&t), Some(2));
        assert_eq!(build.skill_order, vec![Skill::Q, Skill::E, Skill::W, Skill::R]);
    }

    #[test]
    fn skill_order_needs_both_timeline_and_participant_id() {
        let t = timeline(vec![vec![skill_up(1000, 2, 1)]]);
        let p = participant([None; 7]);

        assert!(extract_build(&p, Some(&t), None).skill_order.is_empty());
        assert!(extract_build(&p, None, Some(2)).skill_order.is_empty());
    }

    #[test]
    fn starting_items_only_come_from_the_first_frame_before_cutoff() {
        let t = timeline(vec![
            vec![
                purchase(500, 2, 1054),
                purchase(900, 1, 1055),
                purchase(1200, 2, 2003),
                purchase(30_000, 2, 2003),
                purchase(45_000, 2, 1036),
            ],
            vec![purchase(10_000, 2, 3340)],
        ]);

        assert_eq!(extract_starting_items(&t, 2), vec![1054, 2003]);
    }

    #[test]
    fn starting_items_from_empty_timeline_is_empty() {
        assert!(extract_starting_items(&TimelineDto::default(), 1).is_empty());
    }

    #[test]
    fn bad_purchase_event_keeps_skill_order_and_other_items() {
        let json = r#"{"info": {"frames": [{"events": [
            {"type": "ITEM_PURCHASED", "timestamp": 800, "participantId": 2, "itemId": "1054"},
            {"type": "ITEM_PURCHASED", "timestamp": 1100, "participantId": 2, "itemId": 2003},
            {"type": "SKILL_LEVEL_UP", "timestamp": 70000, "participantId": 2, "skillSlot": 1},
            {"type": "SKILL_LEVEL_UP", "timestamp": 150000, "participantId": 2, "skillSlot": 3}
        ]}]}}"#;
        let t: TimelineDto = serde_json::from_str(json).unwrap();

        assert_eq!(extract_skill_order(&t, 2), vec![Skill::Q, Skill::E]);
        assert_eq!(extract_starting_items(&t, 2), vec![2003]);
    }
}
