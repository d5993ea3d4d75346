use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Adc, Role::Support];

    /// The `teamPosition` label match records use for this role.
    pub fn team_position(self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Mid => "MIDDLE",
            Role::Adc => "BOTTOM",
            Role::Support => "UTILITY",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Adc => "adc",
            Role::Support => "support",
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(Role::Top),
            "jungle" | "jg" => Ok(Role::Jungle),
            "mid" | "middle" => Ok(Role::Mid),
            "adc" | "bot" | "bottom" => Ok(Role::Adc),
            "support" | "supp" | "utility" => Ok(Role::Support),
            _ => Err(AppError::InvalidRole(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Q,
    W,
    E,
    R,
}

impl Skill {
    /// Timeline skill slots are 1-based: 1=Q, 2=W, 3=E, 4=R.
    pub fn from_slot(slot: u32) -> Option<Skill> {
        match slot {
            1 => Some(Skill::Q),
            2 => Some(Skill::W),
            3 => Some(Skill::E),
            4 => Some(Skill::R),
            _ => None,
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Skill::Q => "Q",
            Skill::W => "W",
            Skill::E => "E",
            Skill::R => "R",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatShards {
    pub offense: Option<u32>,
    pub flex: Option<u32>,
    pub defense: Option<u32>,
}

impl StatShards {
    /// Slots in offense, flex, defense order.
    pub fn slots(&self) -> [Option<u32>; 3] {
        [self.offense, self.flex, self.defense]
    }
}

/// One participant's build, as read from a single match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedBuild {
    pub champion_id: u32,
    pub role: String,
    pub win: bool,
    /// Final non-boots items, in slot order.
    pub items: Vec<u32>,
    pub starting_items: Vec<u32>,
    pub boots: Option<u32>,
    pub primary_runes: Vec<u32>,
    pub secondary_runes: Vec<u32>,
    pub shards: Option<StatShards>,
    pub skill_order: Vec<Skill>,
    pub summoners: [Option<u32>; 2],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecommendation {
    pub core: Vec<u32>,
    pub starting: Vec<u32>,
    pub boots: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneRecommendation {
    pub primary: Vec<u32>,
    pub secondary: Vec<u32>,
    pub shards: Vec<u32>,
}

/// The representative build for a champion and role across a sample of matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedBuild {
    pub items: ItemRecommendation,
    pub runes: RuneRecommendation,
    pub skill_order: Vec<Skill>,
    #[serde(default)]
    pub summoners: Vec<u32>,
    pub sample_size: usize,
    #[serde(default)]
    pub wins: usize,
}

impl AggregatedBuild {
    pub fn win_rate(&self) -> Option<f64> {
        if self.sample_size == 0 {
            None
        } else {
            Some(self.wins as f64 / self.sample_size as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_aliases_parse() {
        assert_eq!("MIDDLE".parse::<Role>().unwrap(), Role::Mid);
        assert_eq!("bot".parse::<Role>().unwrap(), Role::Adc);
        assert_eq!("supp".parse::<Role>().unwrap(), Role::Support);
        assert!(matches!("feeder".parse::<Role>(), Err(AppError::InvalidRole(_))));
    }

    #[test]
    fn roles_map_to_team_positions() {
        let positions: Vec<_> = Role::ALL.iter().map(|r| r.team_position()).collect();
        assert_eq!(positions, ["TOP", "JUNGLE", "MIDDLE", "BOTTOM", "UTILITY"]);
    }

    #[test]
    fn skill_slots_outside_range_are_rejected() {
        assert_eq!(Skill::from_slot(1), Some(Skill::Q));
        assert_eq!(Skill::from_slot(4), Some(Skill::R));
        assert_eq!(Skill::from_slot(0), None);
        assert_eq!(Skill::from_slot(5), None);
    }

    #[test]
    fn skills_serialize_as_letters() {
        let json = serde_json::to_string(&vec![Skill::Q, Skill::E]).unwrap();
        assert_eq!(json, r#"["Q","E"]"#);
    }

    #[test]
    fn win_rate_needs_a_sample() {
        let mut build = AggregatedBuild::default();
        assert_eq!(build.win_rate(), None);
        build.sample_size = 4;
        build.wins = 3;
        assert_eq!(build.win_rate(), Some(0.75));
    }
}
