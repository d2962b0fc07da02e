//! Subject iteration driver and effect dispatch.
//!
//! A caller hands the resolver an accumulator, a subject list and a modifier.
//! Each (subject, modifier) pair is dispatched through the
//! [`EffectHandlerTable`] into a scratch delta that is merged only when the
//! handler succeeds. Attach effects recurse back into the driver with the
//! nested modifier, carrying an [`AttachChain`] of ancestors.

use crate::config::ResolverConfig;
use crate::context::EvalContext;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::effects::{EffectHandler, EffectHandlerTable, EffectType, ModifierArgs};
use crate::error::{RegistryError, ResolveError};
use crate::fixed::Fixed;
use crate::queries::AdjacencyCache;
use crate::state::{CityState, GameSnapshot, PlayerState, PlotState};
use crate::subject::Subject;
use crate::yields::YieldsDelta;
use tracing::instrument;
use yieldsim_data::{Modifier, ModifierId};

/// Ancestor attach modifiers of the current expansion, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachChain {
    ids: Vec<ModifierId>,
}

impl AttachChain {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> u32 {
        self.ids.len() as u32
    }

    pub fn contains(&self, id: &ModifierId) -> bool {
        self.ids.contains(id)
    }

    /// Chain with `id` appended.
    ///
    /// Errors when `id` is already an ancestor, or when the chain would
    /// exceed `max_depth`.
    pub fn extend(&self, id: &ModifierId, max_depth: u32) -> Result<AttachChain, ResolveError> {
        if self.contains(id) {
            return Err(ResolveError::ModifierCycle {
                chain: self.ids.iter().map(|i| i.to_string()).collect(),
                repeated: id.clone(),
            });
        }
        let depth = self.depth() + 1;
        if depth > max_depth {
            return Err(ResolveError::AttachDepthExceeded {
                modifier: id.clone(),
                depth,
            });
        }
        let mut ids = self.ids.clone();
        ids.push(id.clone());
        Ok(AttachChain { ids })
    }
}

/// One dispatch: what a handler sees.
pub struct Invocation<'r, 'a> {
    pub resolver: &'r YieldResolver<'a>,
    pub subject: Subject,
    pub modifier: &'r Modifier,
    pub effect: EffectType,
    pub chain: &'r AttachChain,
}

impl<'r, 'a> Invocation<'r, 'a> {
    pub fn ctx(&self) -> &EvalContext<'a> {
        &self.resolver.ctx
    }

    pub fn state(&self) -> &'a GameSnapshot {
        self.resolver.ctx.state
    }

    /// Owner of the subject, or the evaluated player when it has none.
    /// `None` for a subject missing from the snapshot.
    pub fn player(&self) -> Option<&'a PlayerState> {
        let ctx = &self.resolver.ctx;
        ctx.player_for(self.subject)
            .and_then(|id| ctx.state.player(id))
    }

    pub fn city(&self) -> Option<&'a CityState> {
        self.subject.as_city(self.state())
    }

    pub fn plot(&self) -> Option<&'a PlotState> {
        self.subject.as_plot(self.state())
    }

    pub fn effect_tag(&self) -> &'static str {
        self.effect.as_str()
    }

    /// Required `Amount` argument.
    pub fn amount(&self) -> Result<Fixed, ResolveError> {
        self.modifier.required_number(self.effect_tag(), "Amount")
    }

    pub fn diagnostics(&self) -> &'r Diagnostics {
        &self.resolver.diagnostics
    }
}

/// Resolves modifiers against subjects into a [`YieldsDelta`].
///
/// Holds the session state: the validated handler table, the adjacency
/// cache, and the diagnostics sink. One resolver is meant for one
/// evaluation pass over a fixed snapshot.
pub struct YieldResolver<'a> {
    ctx: EvalContext<'a>,
    config: ResolverConfig,
    table: EffectHandlerTable,
    adjacencies: AdjacencyCache<'a>,
    diagnostics: Diagnostics,
}

impl<'a> YieldResolver<'a> {
    /// Resolver with the built-in handler table.
    pub fn new(ctx: EvalContext<'a>, config: ResolverConfig) -> Result<Self, RegistryError> {
        Self::with_table(ctx, config, EffectHandlerTable::standard()?)
    }

    pub fn with_table(
        ctx: EvalContext<'a>,
        config: ResolverConfig,
        table: EffectHandlerTable,
    ) -> Result<Self, RegistryError> {
        table.validate()?;
        Ok(Self {
            adjacencies: AdjacencyCache::new(ctx.data),
            ctx,
            config,
            table,
            diagnostics: Diagnostics::new(),
        })
    }

    pub fn context(&self) -> &EvalContext<'a> {
        &self.ctx
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn adjacencies(&self) -> &AdjacencyCache<'a> {
        &self.adjacencies
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Apply `modifier` to every subject, in order.
    ///
    /// In lenient mode a failing pair is logged, recorded and skipped, and
    /// this only returns `Ok`. In strict mode the first failure is returned
    /// and the accumulator keeps the contributions of earlier pairs only.
    #[instrument(skip_all, name = "apply_yields", fields(modifier = %modifier.id))]
    pub fn apply_yields_for_subjects(
        &self,
        delta: &mut YieldsDelta,
        subjects: &[Subject],
        modifier: &Modifier,
    ) -> Result<(), ResolveError> {
        self.apply_for_subjects_in(delta, subjects, modifier, &AttachChain::root())
    }

    pub fn apply_yields_for_subject(
        &self,
        delta: &mut YieldsDelta,
        subject: Subject,
        modifier: &Modifier,
    ) -> Result<(), ResolveError> {
        self.apply_for_subject_in(delta, subject, modifier, &AttachChain::root())
    }

    pub(crate) fn apply_for_subjects_in(
        &self,
        delta: &mut YieldsDelta,
        subjects: &[Subject],
        modifier: &Modifier,
        chain: &AttachChain,
    ) -> Result<(), ResolveError> {
        for subject in subjects {
            self.apply_for_subject_in(delta, *subject, modifier, chain)?;
        }
        Ok(())
    }

    fn apply_for_subject_in(
        &self,
        delta: &mut YieldsDelta,
        subject: Subject,
        modifier: &Modifier,
        chain: &AttachChain,
    ) -> Result<(), ResolveError> {
        // Applied by the host only when their trigger fires
        if modifier.new_only {
            log::trace!("Skipping NewOnly modifier {}", modifier.id);
            return Ok(());
        }

        let Some(effect) = EffectType::from_tag(&modifier.effect_type) else {
            log::warn!(
                "Unhandled effect type {} in {}",
                modifier.effect_type,
                modifier.id
            );
            self.diagnostics.record(Diagnostic::UnknownEffect {
                tag: modifier.effect_type.clone(),
                modifier: modifier.id.clone(),
            });
            return Ok(());
        };

        let handler = self
            .table
            .get(effect)
            .unwrap_or(EffectHandler::Unimplemented("no handler registered"));
        let apply = match handler {
            EffectHandler::Apply(apply) => apply,
            EffectHandler::Ignored => return Ok(()),
            EffectHandler::Unimplemented(note) => {
                log::warn!("Effect {} in {} not modelled: {}", effect, modifier.id, note);
                self.diagnostics.record(Diagnostic::Unimplemented {
                    effect,
                    modifier: modifier.id.clone(),
                });
                return Ok(());
            }
        };

        let invocation = Invocation {
            resolver: self,
            subject,
            modifier,
            effect,
            chain,
        };
        let mut scratch = delta.scratch();
        match apply(&invocation, &mut scratch) {
            Ok(()) => {
                log::trace!("{} on {}: {:?}", modifier.id, subject, scratch);
                delta.merge(scratch);
                Ok(())
            }
            Err(error) if self.config.strict => Err(error),
            Err(error) => {
                log::warn!("Skipping {} on {}: {}", modifier.id, subject, error);
                self.diagnostics.record(Diagnostic::Failed { subject, error });
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
