//! # Yield Resolution Core
//!
//! Resolves data-driven modifiers into yield deltas for a player's economy.
//!
//! The engine is a pure function from (modifier, subjects) to a yield
//! contribution. It never decides which subjects a modifier targets and
//! never mutates the host game.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌────────────────────┐
//! │    caller    │────▶│  YieldResolver   │────▶│ EffectHandlerTable │
//! │ (subjects +  │     │ (subject sweep,  │     │ (EffectType →      │
//! │  modifier)   │     │  failure policy) │     │  handler)          │
//! └──────────────┘     └────────▲─────────┘     └───┬────────────┬───┘
//!                               │                   │            │
//!                     attach ───┘            ┌──────▼─────┐ ┌────▼───────┐
//!                     effects                │  queries   │ │ YieldsDelta│
//!                                            │ (read-only)│ │ (amount, %)│
//!                                            └────────────┘ └────────────┘
//! ```
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`YieldResolver`] | Subject iteration driver and dispatch |
//! | [`EvalContext`] | Snapshot, game data, modifier lookup and subject resolver |
//! | [`YieldsDelta`] | Flat and percent accumulator with multiplier stack |
//! | [`EffectType`] | Every effect tag the engine knows |
//! | [`Diagnostics`] | Unknown, unimplemented and skipped effects |

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod effects;
pub mod error;
pub mod fixed;
pub mod queries;
pub mod resolve;
pub mod state;
pub mod subject;
pub mod yields;

#[cfg(test)]
pub mod testing;

pub use config::ResolverConfig;
pub use context::{EvalContext, ModifierLookup, SubjectResolver, SubjectScope, SubjectTable};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use effects::{EffectHandler, EffectHandlerTable, EffectType, ModifierArgs};
pub use error::{RegistryError, ResolveError};
pub use fixed::Fixed;
pub use resolve::{AttachChain, Invocation, YieldResolver};
pub use state::GameSnapshot;
pub use subject::Subject;
pub use yields::{YieldEntry, YieldType, YieldsDelta};
