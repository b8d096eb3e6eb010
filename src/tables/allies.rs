//! Ally recruitment templates.

use crate::civ::CivType;
use crate::core::run_state::{Ally, AllyRole};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllyTemplate {
    pub name: &'static str,
    pub hp: i32,
    pub atk: i32,
    pub civ: CivType,
    pub role: AllyRole,
}

impl AllyTemplate {
    /// A living ally with HP and attack scaled by `(1 + bonus)` and floored.
    pub fn recruit(&self, hp_bonus: f64, atk_bonus: f64) -> Ally {
        let hp = (self.hp as f64 * (1.0 + hp_bonus)).floor() as i32;
        Ally {
            name: self.name.to_string(),
            hp,
            max_hp: hp,
            atk: (self.atk as f64 * (1.0 + atk_bonus)).floor() as i32,
            civ: self.civ,
            alive: true,
            role: self.role,
        }
    }
}

const TECH_ALLIES: [AllyTemplate; 2] = [
    AllyTemplate {
        name: "Fire Hunter",
        hp: 28,
        atk: 5,
        civ: CivType::Tech,
        role: AllyRole::Striker,
    },
    AllyTemplate {
        name: "Slinger",
        hp: 22,
        atk: 6,
        civ: CivType::Tech,
        role: AllyRole::Striker,
    },
];

const LIFE_ALLIES: [AllyTemplate; 2] = [
    AllyTemplate {
        name: "Healer",
        hp: 32,
        atk: 2,
        civ: CivType::Life,
        role: AllyRole::Healer,
    },
    AllyTemplate {
        name: "Shieldbearer",
        hp: 45,
        atk: 1,
        civ: CivType::Life,
        role: AllyRole::Tank,
    },
];

const RITUAL_ALLIES: [AllyTemplate; 2] = [
    AllyTemplate {
        name: "Berserker",
        hp: 18,
        atk: 9,
        civ: CivType::Ritual,
        role: AllyRole::Striker,
    },
    AllyTemplate {
        name: "Sacrifice Shaman",
        hp: 22,
        atk: 7,
        civ: CivType::Ritual,
        role: AllyRole::Striker,
    },
];

pub fn ally_templates(civ: CivType) -> &'static [AllyTemplate] {
    match civ {
        CivType::Tech => &TECH_ALLIES,
        CivType::Life => &LIFE_ALLIES,
        CivType::Ritual => &RITUAL_ALLIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recruit_scales_and_floors() {
        let ally = LIFE_ALLIES[1].recruit(0.25, 0.0);
        assert_eq!(ally.hp, 56);
        assert_eq!(ally.max_hp, 56);
        assert_eq!(ally.atk, 1);
        assert!(ally.alive);
        assert!(ally.is_tank());
    }

    #[test]
    fn test_every_civ_has_templates() {
        for civ in CivType::ALL {
            let templates = ally_templates(civ);
            assert!(!templates.is_empty());
            assert!(templates.iter().all(|t| t.civ == civ));
        }
    }
}
