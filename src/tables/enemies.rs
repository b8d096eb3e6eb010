//! Enemy and boss templates per biome.

use crate::civ::BiomeId;
use crate::core::run_state::Enemy;
use serde::{Deserialize, Serialize};

/// Unscaled enemy stats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
    pub bone: u32,
}

impl EnemyTemplate {
    /// Build a live enemy. HP and attack scale with the difficulty
    /// multipliers and the stage scale; defense and bone reward do not.
    pub fn scaled(&self, hp_multiplier: f64, atk_multiplier: f64, scale: f64) -> Enemy {
        let hp = (self.hp as f64 * hp_multiplier * scale).floor() as i32;
        Enemy {
            name: self.name.to_string(),
            hp,
            max_hp: hp,
            atk: (self.atk as f64 * atk_multiplier * scale).floor() as i32,
            def: self.def,
            bone: self.bone,
        }
    }
}

const fn enemy(name: &'static str, hp: i32, atk: i32, def: i32, bone: u32) -> EnemyTemplate {
    EnemyTemplate {
        name,
        hp,
        atk,
        def,
        bone,
    }
}

pub const GRASSLAND_ENEMIES: [EnemyTemplate; 4] = [
    enemy("Hare", 14, 3, 0, 1),
    enemy("Boar", 28, 5, 1, 1),
    enemy("Wolf", 35, 7, 1, 2),
    enemy("Giant Serpent", 40, 6, 2, 2),
];

pub const GLACIER_ENEMIES: [EnemyTemplate; 4] = [
    enemy("Ice Rat", 22, 5, 1, 1),
    enemy("Snow Wolf", 38, 8, 2, 2),
    enemy("Ice Roc", 48, 10, 2, 2),
    enemy("Frost Bear", 58, 12, 3, 3),
];

pub const VOLCANO_ENEMIES: [EnemyTemplate; 4] = [
    enemy("Lava Lizard", 26, 6, 2, 1),
    enemy("Flame Serpent", 42, 9, 1, 2),
    enemy("Eruption Tortoise", 55, 8, 5, 2),
    enemy("Scorching Wyvern", 52, 13, 2, 3),
];

/// Regular enemies of a biome in wave order.
pub fn enemies_for(biome: BiomeId) -> &'static [EnemyTemplate] {
    match biome {
        BiomeId::Grassland => &GRASSLAND_ENEMIES,
        BiomeId::Glacier => &GLACIER_ENEMIES,
        BiomeId::Volcano => &VOLCANO_ENEMIES,
    }
}

/// Template for a 1-based wave. Waves past the table reuse the last entry.
pub fn wave_enemy(biome: BiomeId, wave: u32) -> &'static EnemyTemplate {
    let table = enemies_for(biome);
    let idx = (wave.saturating_sub(1) as usize).min(table.len() - 1);
    &table[idx]
}

pub fn boss_for(biome: BiomeId) -> &'static EnemyTemplate {
    match biome {
        BiomeId::Grassland => &SABERTOOTH,
        BiomeId::Glacier => &MAMMOTH,
        BiomeId::Volcano => &FIRE_DRAGON,
    }
}

const SABERTOOTH: EnemyTemplate = enemy("Sabertooth", 120, 14, 3, 5);
const MAMMOTH: EnemyTemplate = enemy("Mammoth", 160, 16, 6, 6);
const FIRE_DRAGON: EnemyTemplate = enemy("Fire Dragon", 140, 20, 3, 6);

/// The three final bosses, one per civilization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalBossKey {
    Tech,
    Life,
    Ritual,
}

impl FinalBossKey {
    pub const ALL: [FinalBossKey; 3] = [FinalBossKey::Tech, FinalBossKey::Life, FinalBossKey::Ritual];

    pub fn template(&self) -> &'static EnemyTemplate {
        match self {
            FinalBossKey::Tech => &ICE_BEAST_GOD,
            FinalBossKey::Life => &EARTH_GUARDIAN,
            FinalBossKey::Ritual => &BLOOD_DEMON,
        }
    }

    pub fn name(&self) -> &'static str {
        self.template().name
    }
}

const ICE_BEAST_GOD: EnemyTemplate = enemy("Ice Beast God", 320, 30, 7, 10);
const EARTH_GUARDIAN: EnemyTemplate = enemy("Earth Guardian", 400, 24, 10, 10);
const BLOOD_DEMON: EnemyTemplate = enemy("Blood Demon", 280, 40, 4, 12);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaling_floors_hp_and_atk_only() {
        let e = GRASSLAND_ENEMIES[1].scaled(1.7, 1.5, 1.25);
        assert_eq!(e.hp, 59); // 28 * 1.7 * 1.25 = 59.5
        assert_eq!(e.max_hp, 59);
        assert_eq!(e.atk, 9); // 5 * 1.5 * 1.25 = 9.375
        assert_eq!(e.def, 1);
        assert_eq!(e.bone, 1);
    }

    #[test]
    fn test_wave_enemy_clamps() {
        assert_eq!(wave_enemy(BiomeId::Glacier, 1).name, "Ice Rat");
        assert_eq!(wave_enemy(BiomeId::Glacier, 4).name, "Frost Bear");
        assert_eq!(wave_enemy(BiomeId::Glacier, 9).name, "Frost Bear");
    }

    #[test]
    fn test_bosses_outclass_wave_enemies() {
        for biome in BiomeId::ALL {
            let boss = boss_for(biome);
            assert!(enemies_for(biome).iter().all(|e| e.hp < boss.hp));
        }
        for key in FinalBossKey::ALL {
            assert!(key.template().hp > MAMMOTH.hp);
        }
    }
}
