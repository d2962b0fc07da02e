//! Evaluation context and the external collaborators it carries.
//!
//! The host game, the modifier registry and requirement resolution are not
//! owned by the engine. They are passed in explicitly instead of being read
//! from ambient globals.

use crate::state::{GameSnapshot, HashMap, PlayerId};
use crate::subject::Subject;
use serde::{Deserialize, Serialize};
use yieldsim_data::{GameData, Modifier, ModifierId, ModifierRegistry};

/// Modifier registry lookup.
pub trait ModifierLookup {
    /// `None` when the id is unknown.
    fn resolve_modifier_by_id(&self, id: &ModifierId) -> Option<&Modifier>;
}

impl ModifierLookup for ModifierRegistry {
    fn resolve_modifier_by_id(&self, id: &ModifierId) -> Option<&Modifier> {
        self.get(id)
    }
}

/// Requirement-based subject resolution.
pub trait SubjectResolver {
    /// Subjects `modifier` applies to when attached from `context`.
    fn resolve_subjects_with_requirements(
        &self,
        player: PlayerId,
        modifier: &Modifier,
        context: Subject,
        state: &GameSnapshot,
    ) -> Vec<Subject>;
}

/// Everything a handler may read.
#[derive(Clone, Copy)]
pub struct EvalContext<'a> {
    /// Player whose economy is being evaluated.
    pub player: PlayerId,
    pub state: &'a GameSnapshot,
    pub data: &'a GameData,
    pub modifiers: &'a dyn ModifierLookup,
    pub subjects: &'a dyn SubjectResolver,
}

impl<'a> EvalContext<'a> {
    /// Player whose economy `subject` feeds.
    ///
    /// `None` when the subject is missing from the snapshot. A subject that
    /// exists without an owner (an unclaimed plot) belongs to the evaluated
    /// player.
    pub fn player_for(&self, subject: Subject) -> Option<PlayerId> {
        if !subject.exists(self.state) {
            return None;
        }
        Some(subject.owner(self.state).unwrap_or(self.player))
    }
}

/// How a table entry derives subjects from the attaching context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", content = "subjects", rename_all = "snake_case")]
pub enum SubjectScope {
    /// The attaching subject itself.
    Context,
    /// The player owning the attaching subject.
    Owner,
    /// Every settlement of the owning player.
    OwnerCities,
    /// Every plot of the attaching city.
    CityPlots,
    /// A fixed list, independent of context.
    List(Vec<Subject>),
}

/// Table-driven [`SubjectResolver`]: one scope per modifier id.
///
/// Stands in for the host's requirement system in tests and the CLI.
/// Modifiers without an entry resolve to no subjects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectTable {
    scopes: HashMap<ModifierId, SubjectScope>,
}

impl SubjectTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, scope: SubjectScope) -> Self {
        self.scopes.insert(ModifierId::from(id), scope);
        self
    }

    pub fn insert(&mut self, id: ModifierId, scope: SubjectScope) {
        self.scopes.insert(id, scope);
    }
}

impl SubjectResolver for SubjectTable {
    fn resolve_subjects_with_requirements(
        &self,
        player: PlayerId,
        modifier: &Modifier,
        context: Subject,
        state: &GameSnapshot,
    ) -> Vec<Subject> {
        let Some(scope) = self.scopes.get(&modifier.id) else {
            return Vec::new();
        };
        let owner = context.owner(state).unwrap_or(player);
        match scope {
            SubjectScope::Context => vec![context],
            SubjectScope::Owner => vec![Subject::Player(owner)],
            SubjectScope::OwnerCities => state
                .player(owner)
                .map(|p| p.cities.iter().map(|c| Subject::City(*c)).collect())
                .unwrap_or_default(),
            SubjectScope::CityPlots => context
                .as_city(state)
                .map(|c| c.plots.iter().map(|p| Subject::Plot(*p)).collect())
                .unwrap_or_default(),
            SubjectScope::List(subjects) => subjects.clone(),
        }
    }
}
