//! Static achievement definitions.

use super::types::{AchievementCategory, AchievementCondition, AchievementDef};
use crate::synergy::SynergyTag;

/// All achievements in display order.
pub const ACHIEVEMENTS: [AchievementDef; 15] = [
    AchievementDef {
        id: "first_clear",
        name: "Mark of the Primal",
        description: "Clear the game for the first time",
        category: AchievementCategory::Clears,
        condition: AchievementCondition::FirstClear,
    },
    AchievementDef {
        id: "clear_10",
        name: "Veteran Hunter",
        description: "Clear the game 10 times",
        category: AchievementCategory::Clears,
        condition: AchievementCondition::ClearCount(10),
    },
    AchievementDef {
        id: "clear_hard",
        name: "Ice Age Survivor",
        description: "Clear on Ice Age",
        category: AchievementCategory::Clears,
        condition: AchievementCondition::ClearDifficulty(1),
    },
    AchievementDef {
        id: "clear_nightmare",
        name: "Beyond the Cataclysm",
        description: "Clear on Cataclysm",
        category: AchievementCategory::Clears,
        condition: AchievementCondition::ClearDifficulty(2),
    },
    AchievementDef {
        id: "clear_myth",
        name: "Myth Bearer",
        description: "Clear on Mythic World",
        category: AchievementCategory::Clears,
        condition: AchievementCondition::ClearDifficulty(3),
    },
    AchievementDef {
        id: "all_difficulties",
        name: "Omnipotent",
        description: "Clear every difficulty",
        category: AchievementCategory::Clears,
        condition: AchievementCondition::AllDifficultiesCleared,
    },
    AchievementDef {
        id: "all_awakenings",
        name: "Peak of Awakening",
        description: "Reach every awakening",
        category: AchievementCategory::Collection,
        condition: AchievementCondition::AllAwakenings,
    },
    AchievementDef {
        id: "big_damage",
        name: "Primal Strike",
        description: "Deal 100 damage in a single hit",
        category: AchievementCategory::Combat,
        condition: AchievementCondition::MaxDamage(100),
    },
    AchievementDef {
        id: "mass_slayer",
        name: "King of Beasts",
        description: "Defeat 100 enemies in total",
        category: AchievementCategory::Combat,
        condition: AchievementCondition::TotalKills(100),
    },
    AchievementDef {
        id: "fire_master",
        name: "Flame Synergist",
        description: "Activate the fire synergy at tier 2",
        category: AchievementCategory::Collection,
        condition: AchievementCondition::SynergyTier2(SynergyTag::Fire),
    },
    AchievementDef {
        id: "all_synergies",
        name: "Synergy Collector",
        description: "Activate every synergy at tier 1",
        category: AchievementCategory::Collection,
        condition: AchievementCondition::AllSynergiesTier1,
    },
    AchievementDef {
        id: "event_explorer",
        name: "Curious Wanderer",
        description: "Encounter 10 events in total",
        category: AchievementCategory::Exploration,
        condition: AchievementCondition::EventCount(10),
    },
    AchievementDef {
        id: "speed_runner",
        name: "Like the Wind",
        description: "Clear within 5 minutes",
        category: AchievementCategory::Clears,
        condition: AchievementCondition::SpeedClear { max_secs: 300 },
    },
    AchievementDef {
        id: "bone_collector",
        name: "Bone Collector",
        description: "Earn 1000 bones in total",
        category: AchievementCategory::Exploration,
        condition: AchievementCondition::BoneHoarder(1000),
    },
    AchievementDef {
        id: "full_tree",
        name: "Civilization Complete",
        description: "Unlock the whole civilization tree",
        category: AchievementCategory::Collection,
        condition: AchievementCondition::FullTree,
    },
];

pub fn get_achievement_def(id: &str) -> Option<&'static AchievementDef> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

pub fn achievements_by_category(category: AchievementCategory) -> Vec<&'static AchievementDef> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<_> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ACHIEVEMENTS.len());
    }

    #[test]
    fn test_every_category_used() {
        for cat in AchievementCategory::ALL {
            assert!(!achievements_by_category(cat).is_empty(), "{}", cat.name());
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(get_achievement_def("big_damage").map(|a| a.name), Some("Primal Strike"));
        assert!(get_achievement_def("nope").is_none());
    }
}
