//! Static game data tables.
//!
//! Loaded once from JSON and immutable afterwards. Constructibles and units
//! are indexed by type; adjacencies are kept as an ordered table, the way the
//! game database exposes them, and looked up by id through a cache in the
//! engine.

use crate::adjacencies::AdjacencyDef;
use crate::constructibles::ConstructibleDef;
use crate::units::UnitDef;
use crate::DataError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// On-disk shape of the game data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameDataFile {
    #[serde(default)]
    pub constructibles: Vec<ConstructibleDef>,
    #[serde(default)]
    pub adjacencies: Vec<AdjacencyDef>,
    #[serde(default)]
    pub units: Vec<UnitDef>,
}

/// Indexed game data.
#[derive(Debug, Clone, Default)]
pub struct GameData {
    constructibles: HashMap<String, ConstructibleDef>,
    adjacencies: Vec<AdjacencyDef>,
    units: HashMap<String, UnitDef>,
}

impl GameData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_constructible(&mut self, def: ConstructibleDef) -> Result<(), DataError> {
        if self.constructibles.contains_key(&def.constructible_type) {
            return Err(DataError::Duplicate {
                table: "constructibles",
                id: def.constructible_type,
            });
        }
        self.constructibles
            .insert(def.constructible_type.clone(), def);
        Ok(())
    }

    pub fn add_adjacency(&mut self, def: AdjacencyDef) -> Result<(), DataError> {
        if self.adjacencies.iter().any(|a| a.id == def.id) {
            return Err(DataError::Duplicate {
                table: "adjacencies",
                id: def.id,
            });
        }
        if def.tiles_required == 0 {
            return Err(DataError::Invalid(format!(
                "adjacency {} has tiles_required = 0",
                def.id
            )));
        }
        self.adjacencies.push(def);
        Ok(())
    }

    pub fn add_unit(&mut self, def: UnitDef) -> Result<(), DataError> {
        if self.units.contains_key(&def.unit_type) {
            return Err(DataError::Duplicate {
                table: "units",
                id: def.unit_type,
            });
        }
        self.units.insert(def.unit_type.clone(), def);
        Ok(())
    }

    pub fn constructible(&self, constructible_type: &str) -> Option<&ConstructibleDef> {
        self.constructibles.get(constructible_type)
    }

    pub fn unit(&self, unit_type: &str) -> Option<&UnitDef> {
        self.units.get(unit_type)
    }

    /// The adjacency table in load order.
    pub fn adjacencies(&self) -> &[AdjacencyDef] {
        &self.adjacencies
    }

    /// Index a raw data file, rejecting duplicate keys.
    pub fn from_file(file: GameDataFile) -> Result<Self, DataError> {
        let mut data = Self::new();
        for def in file.constructibles {
            data.add_constructible(def)?;
        }
        for def in file.adjacencies {
            data.add_adjacency(def)?;
        }
        for def in file.units {
            data.add_unit(def)?;
        }
        Ok(data)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let file: GameDataFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    pub fn load(path: &Path) -> Result<Self, DataError> {
        let json = std::fs::read_to_string(path)?;
        let data = Self::from_json_str(&json)?;
        log::info!(
            "Loaded game data from {}: {} constructibles, {} adjacencies, {} units",
            path.display(),
            data.constructibles.len(),
            data.adjacencies.len(),
            data.units.len()
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yields::YieldType;

    #[test]
    fn test_from_json() {
        let json = r#"{
            "constructibles": [
                { "constructible_type": "BUILDING_LIBRARY", "adjacencies": ["QuarterScience"] }
            ],
            "adjacencies": [
                { "id": "QuarterScience", "yield_type": "YIELD_SCIENCE", "yield_change": 1.0 }
            ],
            "units": [
                { "unit_type": "UNIT_WARRIOR", "core_class": "CORE_CLASS_MILITARY", "maintenance": 1.0 }
            ]
        }"#;
        let data = GameData::from_json_str(json).unwrap();
        assert!(data.constructible("BUILDING_LIBRARY").is_some());
        assert_eq!(data.adjacencies().len(), 1);
        assert_eq!(data.adjacencies()[0].yield_type, YieldType::Science);
        assert_eq!(data.unit("UNIT_WARRIOR").map(|u| u.maintenance), Some(1.0));
    }

    #[test]
    fn test_duplicate_adjacency_rejected() {
        let mut data = GameData::new();
        data.add_adjacency(AdjacencyDef::new("A", YieldType::Gold, 1.0))
            .unwrap();
        let err = data
            .add_adjacency(AdjacencyDef::new("A", YieldType::Food, 2.0))
            .unwrap_err();
        assert!(matches!(err, DataError::Duplicate { table: "adjacencies", .. }));
    }

    #[test]
    fn test_zero_tiles_required_rejected() {
        let mut def = AdjacencyDef::new("Broken", YieldType::Gold, 1.0);
        def.tiles_required = 0;
        let err = GameData::new().add_adjacency(def).unwrap_err();
        assert!(matches!(err, DataError::Invalid(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameData::load(Path::new("/nonexistent/game_data.json")).unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }
}
