//! Biome affinity, environmental damage and civilization helpers.

use super::types::{Arena, BiomeId, CivLevels, CivType, CivTypeExt};
use crate::tree::TreeBonus;

/// Resistance source that reduces a biome's environmental damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resistance {
    Ice,
    Fire,
}

/// Environmental hazard of a biome.
#[derive(Debug, Clone, Copy)]
pub struct EnvHazard {
    pub base: i32,
    pub resistance: Resistance,
    /// Final awakening that negates this hazard entirely.
    pub immune: Option<CivTypeExt>,
    pub label: &'static str,
}

/// Hazard for a biome, or `None` when the biome is safe.
pub fn env_hazard(biome: BiomeId) -> Option<EnvHazard> {
    match biome {
        BiomeId::Grassland => None,
        BiomeId::Glacier => Some(EnvHazard {
            base: 3,
            resistance: Resistance::Ice,
            immune: Some(CivTypeExt::Tech),
            label: "Bitter cold",
        }),
        BiomeId::Volcano => Some(EnvHazard {
            base: 2,
            resistance: Resistance::Fire,
            immune: None,
            label: "Searing heat",
        }),
    }
}

/// Preferred civilization and bonus multiplier of a biome.
pub fn biome_affinity(biome: BiomeId) -> (CivType, f64) {
    match biome {
        BiomeId::Grassland => (CivType::Life, 1.2),
        BiomeId::Glacier => (CivType::Tech, 1.3),
        BiomeId::Volcano => (CivType::Ritual, 1.3),
    }
}

/// Damage multiplier granted when the biome's preferred civilization is
/// strictly ahead of the other two. Ties and the final arena yield 1.0.
pub fn biome_affinity_multiplier(arena: Arena, levels: &CivLevels) -> f64 {
    let Some(biome) = arena.biome() else {
        return 1.0;
    };
    let (civ, mult) = biome_affinity(biome);
    if levels.strictly_leads(civ) {
        mult
    } else {
        1.0
    }
}

/// Environmental damage taken at the start of each tick.
///
/// # Arguments
/// * `arena` - Current fight location
/// * `env_scale` - Difficulty environment multiplier
/// * `tree` - Permanent tree bonuses (resistances)
/// * `final_awakening` - Active final awakening, if any
pub fn environmental_damage(
    arena: Arena,
    env_scale: f64,
    tree: &TreeBonus,
    final_awakening: Option<CivTypeExt>,
) -> i32 {
    let Some(hazard) = arena.biome().and_then(env_hazard) else {
        return 0;
    };
    let resist = match hazard.resistance {
        Resistance::Ice => tree.ice_resist,
        Resistance::Fire => tree.fire_resist,
    };
    let base = (hazard.base as f64 * env_scale).floor();
    let dmg = ((base * (1.0 - resist)).floor() as i32).max(0);
    match (hazard.immune, final_awakening) {
        (Some(immune), Some(active)) if immune == active => 0,
        _ => dmg,
    }
}

/// Highest civilization. Ties prefer tech, then life.
pub fn dominant_civ(levels: &CivLevels) -> CivType {
    if levels.tech >= levels.life && levels.tech >= levels.ritual {
        CivType::Tech
    } else if levels.life >= levels.ritual {
        CivType::Life
    } else {
        CivType::Ritual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(tech: u32, life: u32, ritual: u32) -> CivLevels {
        CivLevels { tech, life, ritual }
    }

    #[test]
    fn test_affinity_requires_strict_lead() {
        let glacier = Arena::Biome(BiomeId::Glacier);
        assert_eq!(biome_affinity_multiplier(glacier, &levels(3, 1, 1)), 1.3);
        assert_eq!(biome_affinity_multiplier(glacier, &levels(3, 3, 1)), 1.0);
        assert_eq!(biome_affinity_multiplier(glacier, &levels(1, 3, 1)), 1.0);
    }

    #[test]
    fn test_affinity_per_biome() {
        assert_eq!(
            biome_affinity_multiplier(Arena::Biome(BiomeId::Grassland), &levels(0, 2, 1)),
            1.2
        );
        assert_eq!(
            biome_affinity_multiplier(Arena::Biome(BiomeId::Volcano), &levels(0, 1, 2)),
            1.3
        );
        assert_eq!(biome_affinity_multiplier(Arena::Final, &levels(9, 0, 0)), 1.0);
    }

    #[test]
    fn test_env_damage_scaled_and_resisted() {
        let tree = TreeBonus::ZERO;
        let glacier = Arena::Biome(BiomeId::Glacier);
        assert_eq!(environmental_damage(glacier, 1.0, &tree, None), 3);
        assert_eq!(environmental_damage(glacier, 1.6, &tree, None), 4);

        let resisted = TreeBonus {
            ice_resist: 0.5,
            ..TreeBonus::ZERO
        };
        assert_eq!(environmental_damage(glacier, 1.6, &resisted, None), 2);

        let full = TreeBonus {
            ice_resist: 1.5,
            ..TreeBonus::ZERO
        };
        assert_eq!(environmental_damage(glacier, 3.0, &full, None), 0);
    }

    #[test]
    fn test_env_damage_immunity() {
        let tree = TreeBonus::ZERO;
        let glacier = Arena::Biome(BiomeId::Glacier);
        let volcano = Arena::Biome(BiomeId::Volcano);
        assert_eq!(environmental_damage(glacier, 1.0, &tree, Some(CivTypeExt::Tech)), 0);
        assert_eq!(environmental_damage(glacier, 1.0, &tree, Some(CivTypeExt::Life)), 3);
        assert_eq!(environmental_damage(volcano, 1.0, &tree, Some(CivTypeExt::Tech)), 2);
    }

    #[test]
    fn test_safe_arenas() {
        let tree = TreeBonus::ZERO;
        assert_eq!(environmental_damage(Arena::Biome(BiomeId::Grassland), 3.0, &tree, None), 0);
        assert_eq!(environmental_damage(Arena::Final, 3.0, &tree, None), 0);
    }

    #[test]
    fn test_dominant_civ_tie_breaks() {
        assert_eq!(dominant_civ(&levels(0, 0, 0)), CivType::Tech);
        assert_eq!(dominant_civ(&levels(1, 2, 2)), CivType::Life);
        assert_eq!(dominant_civ(&levels(1, 1, 2)), CivType::Ritual);
        assert_eq!(dominant_civ(&levels(3, 3, 1)), CivType::Tech);
    }
}
