//! Subjects: the entities a modifier's effect is computed against.

use crate::state::{
    CityId, CityState, GameSnapshot, PlayerId, PlayerState, PlotId, PlotState, UnitId, UnitState,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An entity reference tagged by kind.
///
/// Handlers match on the kind they need; a subject of another kind, or one
/// missing from the snapshot, resolves to `None` and the handler falls back
/// to the neutral value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Subject {
    Player(PlayerId),
    City(CityId),
    Unit(UnitId),
    Plot(PlotId),
}

impl Subject {
    pub fn as_player<'a>(&self, state: &'a GameSnapshot) -> Option<&'a PlayerState> {
        match *self {
            Subject::Player(id) => state.player(id),
            _ => None,
        }
    }

    pub fn as_city<'a>(&self, state: &'a GameSnapshot) -> Option<&'a CityState> {
        match *self {
            Subject::City(id) => state.city(id),
            _ => None,
        }
    }

    pub fn as_unit<'a>(&self, state: &'a GameSnapshot) -> Option<&'a UnitState> {
        match *self {
            Subject::Unit(id) => state.unit(id),
            _ => None,
        }
    }

    pub fn as_plot<'a>(&self, state: &'a GameSnapshot) -> Option<&'a PlotState> {
        match *self {
            Subject::Plot(id) => state.plot(id),
            _ => None,
        }
    }

    /// Whether the snapshot holds the referenced entity.
    pub fn exists(&self, state: &GameSnapshot) -> bool {
        match self {
            Subject::Player(_) => self.as_player(state).is_some(),
            Subject::City(_) => self.as_city(state).is_some(),
            Subject::Unit(_) => self.as_unit(state).is_some(),
            Subject::Plot(_) => self.as_plot(state).is_some(),
        }
    }

    /// Player owning this subject, if the snapshot knows one.
    pub fn owner(&self, state: &GameSnapshot) -> Option<PlayerId> {
        match *self {
            Subject::Player(id) => state.player(id).map(|p| p.id),
            Subject::City(id) => state.city(id).map(|c| c.owner),
            Subject::Unit(id) => state.unit(id).map(|u| u.owner),
            Subject::Plot(id) => state.plot(id).and_then(|p| p.owner),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Player(id) => write!(f, "player#{}", id),
            Subject::City(id) => write!(f, "city#{}", id),
            Subject::Unit(id) => write!(f, "unit#{}", id),
            Subject::Plot(id) => write!(f, "plot#{}", id),
        }
    }
}
