//! Modifier records as they appear in game data.
//!
//! A modifier is an effect tag plus a bag of string-typed arguments. Values
//! stay as strings here; numeric and boolean interpretation happens in the
//! engine, which owns the fixed-point number type.

use crate::DataError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

/// Registry key of a modifier (`"TRADITION_ASSEMBLY_LINE_MOD_1"`).
#[derive(Hash, Eq, PartialEq, Clone, Debug, Default, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ModifierId(pub String);

impl ModifierId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModifierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModifierId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single modifier argument.
///
/// Game data encodes most arguments as `{"Value": "2"}`. Repeated arguments
/// (adjacency lists, attached modifier ids) use `{"Values": [..]}` or a
/// comma-separated `Value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    #[serde(rename = "Value", default)]
    pub value: String,
    #[serde(rename = "Values", default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl Argument {
    pub fn single(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            values: Vec::new(),
        }
    }

    pub fn repeated<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: String::new(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// All items of the argument, whichever encoding was used.
    ///
    /// Empty items are dropped, so `"A,,B"` yields `["A", "B"]`.
    pub fn items(&self) -> Vec<&str> {
        if !self.values.is_empty() {
            return self
                .values
                .iter()
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .collect();
        }
        self.value
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect()
    }
}

/// Named arguments of a modifier. Ordered so that serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arguments(pub BTreeMap<String, Argument>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a single-valued argument.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.0.insert(name.to_string(), Argument::single(value));
        self
    }

    /// Builder-style insert of a repeated argument.
    pub fn with_list<I, S>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.insert(name.to_string(), Argument::repeated(values));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Raw `Value` string of an argument.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|a| a.value.as_str())
    }

    /// Items of a (possibly repeated) argument; empty when absent.
    pub fn items(&self, name: &str) -> Vec<&str> {
        self.0.get(name).map(Argument::items).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A resolved modifier: effect tag, arguments and the new-only flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Modifier {
    pub id: ModifierId,
    /// Effect tag, kept as the raw string so unknown tags survive loading.
    pub effect_type: String,
    #[serde(default)]
    pub arguments: Arguments,
    /// Applies only when its trigger fires, never during steady-state sweeps.
    #[serde(default)]
    pub new_only: bool,
}

impl Modifier {
    pub fn new(id: impl Into<String>, effect_type: impl Into<String>) -> Self {
        Self {
            id: ModifierId::new(id),
            effect_type: effect_type.into(),
            arguments: Arguments::new(),
            new_only: false,
        }
    }

    pub fn with_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_new_only(mut self, new_only: bool) -> Self {
        self.new_only = new_only;
        self
    }
}

/// Modifier lookup table keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ModifierRegistry {
    modifiers: HashMap<ModifierId, Modifier>,
}

impl ModifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a modifier. Fails if the id is already registered.
    pub fn add(&mut self, modifier: Modifier) -> Result<(), DataError> {
        if self.modifiers.contains_key(&modifier.id) {
            return Err(DataError::Duplicate {
                table: "modifiers",
                id: modifier.id.0,
            });
        }
        self.modifiers.insert(modifier.id.clone(), modifier);
        Ok(())
    }

    pub fn get(&self, id: &ModifierId) -> Option<&Modifier> {
        self.modifiers.get(id)
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.modifiers.values()
    }

    /// Build a registry from a list of modifiers, rejecting duplicate ids.
    pub fn from_modifiers(modifiers: Vec<Modifier>) -> Result<Self, DataError> {
        let mut registry = Self::new();
        for modifier in modifiers {
            registry.add(modifier)?;
        }
        Ok(registry)
    }

    /// Parse a JSON array of modifiers.
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let modifiers: Vec<Modifier> = serde_json::from_str(json)?;
        Self::from_modifiers(modifiers)
    }

    /// Load a JSON array of modifiers from disk.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let json = std::fs::read_to_string(path)?;
        let registry = Self::from_json_str(&json)?;
        log::info!(
            "Loaded {} modifiers from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }
}
