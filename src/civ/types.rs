//! Civilization and biome identifiers.

use serde::{Deserialize, Serialize};

/// One of the three civilization tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CivType {
    Tech,
    Life,
    Ritual,
}

impl CivType {
    /// Tracks in tie-break order.
    pub const ALL: [CivType; 3] = [CivType::Tech, CivType::Life, CivType::Ritual];

    pub fn name(&self) -> &'static str {
        match self {
            CivType::Tech => "Tech",
            CivType::Life => "Life",
            CivType::Ritual => "Ritual",
        }
    }

    /// Short key used in awakening ids.
    pub fn key(&self) -> &'static str {
        match self {
            CivType::Tech => "tech",
            CivType::Life => "life",
            CivType::Ritual => "rit",
        }
    }
}

/// A civilization track or the balanced pseudo-track used by skills and
/// awakenings that depend on the minimum of all three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CivTypeExt {
    Tech,
    Life,
    Ritual,
    Balanced,
}

impl CivTypeExt {
    pub const ALL: [CivTypeExt; 4] = [
        CivTypeExt::Tech,
        CivTypeExt::Life,
        CivTypeExt::Ritual,
        CivTypeExt::Balanced,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CivTypeExt::Tech => "Tech",
            CivTypeExt::Life => "Life",
            CivTypeExt::Ritual => "Ritual",
            CivTypeExt::Balanced => "Harmony",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            CivTypeExt::Tech => "tech",
            CivTypeExt::Life => "life",
            CivTypeExt::Ritual => "rit",
            CivTypeExt::Balanced => "bal",
        }
    }
}

impl From<CivType> for CivTypeExt {
    fn from(civ: CivType) -> Self {
        match civ {
            CivType::Tech => CivTypeExt::Tech,
            CivType::Life => CivTypeExt::Life,
            CivType::Ritual => CivTypeExt::Ritual,
        }
    }
}

/// Levels of the three civilization tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivLevels {
    pub tech: u32,
    pub life: u32,
    pub ritual: u32,
}

impl CivLevels {
    pub fn uniform(level: u32) -> Self {
        Self {
            tech: level,
            life: level,
            ritual: level,
        }
    }

    pub fn get(&self, civ: CivType) -> u32 {
        match civ {
            CivType::Tech => self.tech,
            CivType::Life => self.life,
            CivType::Ritual => self.ritual,
        }
    }

    /// Level of a track, with `Balanced` reading the minimum.
    pub fn get_ext(&self, civ: CivTypeExt) -> u32 {
        match civ {
            CivTypeExt::Tech => self.tech,
            CivTypeExt::Life => self.life,
            CivTypeExt::Ritual => self.ritual,
            CivTypeExt::Balanced => self.min(),
        }
    }

    pub fn increment(&mut self, civ: CivType) {
        match civ {
            CivType::Tech => self.tech += 1,
            CivType::Life => self.life += 1,
            CivType::Ritual => self.ritual += 1,
        }
    }

    pub fn min(&self) -> u32 {
        self.tech.min(self.life).min(self.ritual)
    }

    pub fn total(&self) -> u32 {
        self.tech + self.life + self.ritual
    }

    /// True when `civ` is strictly above both other tracks.
    pub fn strictly_leads(&self, civ: CivType) -> bool {
        CivType::ALL
            .iter()
            .filter(|&&other| other != civ)
            .all(|&other| self.get(civ) > self.get(other))
    }
}

/// One of the three regular biomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiomeId {
    Grassland,
    Glacier,
    Volcano,
}

impl BiomeId {
    pub const ALL: [BiomeId; 3] = [BiomeId::Grassland, BiomeId::Glacier, BiomeId::Volcano];

    pub fn name(&self) -> &'static str {
        match self {
            BiomeId::Grassland => "Grassland",
            BiomeId::Glacier => "Glacier",
            BiomeId::Volcano => "Volcano",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BiomeId::Grassland => "Balanced ground",
            BiomeId::Glacier => "Favors tech",
            BiomeId::Volcano => "Favors ritual",
        }
    }
}

/// Where the current fight takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arena {
    Biome(BiomeId),
    Final,
}

impl Arena {
    pub fn biome(&self) -> Option<BiomeId> {
        match self {
            Arena::Biome(b) => Some(*b),
            Arena::Final => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Arena::Biome(b) => b.name(),
            Arena::Final => "Final Arena",
        }
    }
}
