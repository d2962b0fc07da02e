use crate::effects::EffectType;
use thiserror::Error;
use yieldsim_data::ModifierId;

/// Failure of a single (subject, modifier) resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Unknown modifier id: {0}")]
    UnknownModifier(ModifierId),
    #[error("Unknown adjacency id {adjacency} referenced by {modifier}")]
    UnknownAdjacency {
        modifier: ModifierId,
        adjacency: String,
    },
    #[error("Invalid divisor {divisor} in {modifier}: must be positive")]
    InvalidDivisor { modifier: ModifierId, divisor: String },
    #[error("Modifier cycle: {} -> {repeated}", chain.join(" -> "))]
    ModifierCycle {
        chain: Vec<String>,
        repeated: ModifierId,
    },
    #[error("Attach depth {depth} exceeded at {modifier}")]
    AttachDepthExceeded { modifier: ModifierId, depth: u32 },
    #[error("{modifier} ({effect}) is missing argument {argument}")]
    MissingArgument {
        modifier: ModifierId,
        effect: &'static str,
        argument: &'static str,
    },
    #[error("{modifier} has invalid {argument} value {value:?}")]
    InvalidArgument {
        modifier: ModifierId,
        argument: &'static str,
        value: String,
    },
}

/// Inconsistent effect handler table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Effect {0} registered twice")]
    Duplicate(EffectType),
    #[error("Effect {0} has no handler")]
    Missing(EffectType),
}
