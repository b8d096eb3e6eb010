//! Tree bonus aggregation and node purchasing.

use super::data::{get_tree_node, TIER_UNLOCK_CLEARS, TREE_NODES};
use super::types::{TreeBonus, TreeNode};
use crate::save::SaveData;

/// Sum the bonuses of every owned node. Unknown ids are ignored.
pub fn tree_bonus(save: &SaveData) -> TreeBonus {
    let mut bonus = TreeBonus::ZERO;
    for id in &save.tree {
        if let Some(node) = get_tree_node(id) {
            bonus.absorb(&node.effect);
        }
    }
    bonus
}

/// Whether nodes of `tier` can be bought with this many total clears.
pub fn tier_unlocked(tier: u8, clears: u32) -> bool {
    TIER_UNLOCK_CLEARS
        .get(tier as usize)
        .map(|&need| clears >= need)
        .unwrap_or(false)
}

/// Why a node cannot be bought right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeBlock {
    Unknown,
    Owned,
    TierLocked,
    MissingPrerequisite,
    TooExpensive,
}

/// Check every purchase rule for a node.
pub fn node_block(save: &SaveData, id: &str) -> Option<NodeBlock> {
    let Some(node) = get_tree_node(id) else {
        return Some(NodeBlock::Unknown);
    };
    if save.tree.contains(id) {
        return Some(NodeBlock::Owned);
    }
    if !tier_unlocked(node.tier, save.clears) {
        return Some(NodeBlock::TierLocked);
    }
    if let Some(req) = node.requires {
        if !save.tree.contains(req) {
            return Some(NodeBlock::MissingPrerequisite);
        }
    }
    if save.bones < node.cost {
        return Some(NodeBlock::TooExpensive);
    }
    None
}

pub fn can_buy_node(save: &SaveData, id: &str) -> bool {
    node_block(save, id).is_none()
}

/// Buy a node, returning the updated save, or `None` if any rule blocks it.
pub fn try_buy_node(save: &SaveData, id: &str) -> Option<SaveData> {
    if !can_buy_node(save, id) {
        return None;
    }
    let node = get_tree_node(id)?;
    let mut next = save.clone();
    next.bones -= node.cost;
    next.tree.insert(node.id.to_string());
    Some(next)
}

/// Nodes currently purchasable, in tree order.
pub fn buyable_nodes(save: &SaveData) -> Vec<&'static TreeNode> {
    TREE_NODES
        .iter()
        .filter(|n| can_buy_node(save, n.id))
        .collect()
}

/// Fraction of the tree owned, in `[0, 1]`.
pub fn tree_completion_rate(save: &SaveData) -> f64 {
    if TREE_NODES.is_empty() {
        return 0.0;
    }
    let owned = TREE_NODES
        .iter()
        .filter(|n| save.tree.contains(n.id))
        .count();
    owned as f64 / TREE_NODES.len() as f64
}

fn pct(v: f64) -> String {
    format!("{:.0}%", v * 100.0)
}

/// Short labels for every non-zero bonus.
pub fn tree_bonus_summary(tb: &TreeBonus) -> Vec<String> {
    let mut parts = Vec::new();
    if tb.atk != 0 {
        parts.push(format!("ATK+{}", tb.atk));
    }
    if tb.hp != 0 {
        parts.push(format!("HP+{}", tb.hp));
    }
    if tb.def != 0 {
        parts.push(format!("DEF+{}", tb.def));
    }
    if tb.crit != 0.0 {
        parts.push(format!("Crit+{}", pct(tb.crit)));
    }
    if tb.bone_multiplier != 0.0 {
        parts.push(format!("Bones+{}", pct(tb.bone_multiplier)));
    }
    if tb.damage_multiplier != 0.0 {
        parts.push(format!("Damage+{}", pct(tb.damage_multiplier)));
    }
    if tb.regen != 0.0 {
        parts.push(format!("Regen+{}", pct(tb.regen)));
    }
    if tb.has_revive() {
        parts.push("Revive".to_string());
    }
    if tb.ice_resist != 0.0 {
        parts.push(format!("Cold resist {}", pct(tb.ice_resist)));
    }
    if tb.fire_resist != 0.0 {
        parts.push(format!("Heat resist {}", pct(tb.fire_resist)));
    }
    if tb.ally_slots != 0 {
        parts.push(format!("Ally slots+{}", tb.ally_slots));
    }
    if tb.ally_hp != 0.0 {
        parts.push(format!("Ally HP+{}", pct(tb.ally_hp)));
    }
    if tb.ally_atk != 0.0 {
        parts.push(format!("Ally ATK+{}", pct(tb.ally_atk)));
    }
    if tb.evolution_choices != 0 {
        parts.push(format!("Choices+{}", tb.evolution_choices));
    }
    if tb.start_civ_level != 0 {
        parts.push(format!("Start Lv+{}", tb.start_civ_level));
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn save_with(bones: u32, clears: u32, owned: &[&str]) -> SaveData {
        SaveData {
            bones,
            clears,
            tree: owned.iter().map(|s| s.to_string()).collect(),
            ..SaveData::default()
        }
    }

    #[test]
    fn test_empty_tree_gives_zero_bonus() {
        assert_eq!(tree_bonus(&SaveData::default()), TreeBonus::ZERO);
    }

    #[test]
    fn test_tree_bonus_sums_nodes() {
        let save = save_with(0, 0, &["atk1", "atk2", "ice1", "env1", "ghost"]);
        let tb = tree_bonus(&save);
        assert_eq!(tb.atk, 3);
        assert!((tb.ice_resist - 0.4).abs() < 1e-9);
        assert!((tb.fire_resist - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_buy_node_spends_bones() {
        let save = save_with(20, 0, &[]);
        let next = try_buy_node(&save, "atk1").expect("affordable tier 1 node");
        assert_eq!(next.bones, 5);
        assert!(next.tree.contains("atk1"));
        assert_eq!(save.bones, 20);
    }

    #[test]
    fn test_buy_node_rules() {
        assert_eq!(
            node_block(&save_with(10, 0, &[]), "atk1"),
            Some(NodeBlock::TooExpensive)
        );
        assert_eq!(
            node_block(&save_with(100, 0, &[]), "atk2"),
            Some(NodeBlock::MissingPrerequisite)
        );
        assert_eq!(
            node_block(&save_with(1000, 0, &[]), "rev1"),
            Some(NodeBlock::TierLocked)
        );
        assert_eq!(node_block(&save_with(1000, 1, &[]), "rev1"), None);
        assert_eq!(
            node_block(&save_with(100, 0, &["atk1"]), "atk1"),
            Some(NodeBlock::Owned)
        );
        assert_eq!(node_block(&save_with(100, 0, &[]), "x"), Some(NodeBlock::Unknown));
        assert!(try_buy_node(&save_with(10, 0, &[]), "atk1").is_none());
    }

    #[test]
    fn test_tier_unlock_table() {
        assert!(tier_unlocked(1, 0));
        assert!(tier_unlocked(3, 0));
        assert!(!tier_unlocked(4, 0));
        assert!(tier_unlocked(6, 3));
        assert!(!tier_unlocked(8, 9));
        assert!(tier_unlocked(8, 10));
        assert!(!tier_unlocked(9, 100));
    }

    #[test]
    fn test_completion_rate() {
        assert_eq!(tree_completion_rate(&SaveData::default()), 0.0);
        let all: Vec<&str> = TREE_NODES.iter().map(|n| n.id).collect();
        assert_eq!(tree_completion_rate(&save_with(0, 0, &all)), 1.0);
    }

    #[test]
    fn test_buyable_nodes_fresh_save() {
        let save = save_with(15, 0, &[]);
        let ids: Vec<&str> = buyable_nodes(&save).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["atk1", "hp1"]);
    }

    #[test]
    fn test_summary_lists_nonzero() {
        let tb = TreeBonus {
            atk: 3,
            revive: 1,
            crit: 0.05,
            ..TreeBonus::ZERO
        };
        assert_eq!(tree_bonus_summary(&tb), vec!["ATK+3", "Crit+5%", "Revive"]);
        assert!(tree_bonus_summary(&TreeBonus::ZERO).is_empty());
    }
}
