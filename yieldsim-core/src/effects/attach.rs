//! `EFFECT_ATTACH_MODIFIERS`: the recursive effect.

use super::ModifierArgs;
use crate::error::ResolveError;
use crate::resolve::Invocation;
use crate::yields::YieldsDelta;
use yieldsim_data::ModifierId;

/// Expand every id in `ModifierId` against subjects resolved relative to the
/// current subject, re-entering the driver for each nested modifier.
///
/// Each expansion is independent: two siblings naming the same id expand it
/// twice. Only an id that is already an ancestor is a cycle.
pub(super) fn attach_modifiers(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let ids = inv.modifier.list("ModifierId");
    if ids.is_empty() {
        return Err(ResolveError::MissingArgument {
            modifier: inv.modifier.id.clone(),
            effect: inv.effect_tag(),
            argument: "ModifierId",
        });
    }

    let max_depth = inv.resolver.config().max_attach_depth;
    let chain = inv.chain.extend(&inv.modifier.id, max_depth)?;
    let ctx = inv.ctx();
    // Requirement resolution always needs a player, even for a dangling subject.
    let player = ctx.player_for(inv.subject).unwrap_or(ctx.player);

    for id in ids {
        let id = ModifierId::from(id);
        let nested = ctx
            .modifiers
            .resolve_modifier_by_id(&id)
            .ok_or_else(|| ResolveError::UnknownModifier(id.clone()))?;
        let subjects =
            ctx.subjects
                .resolve_subjects_with_requirements(player, nested, inv.subject, ctx.state);
        log::debug!(
            "{} on {} attaches {} to {} subjects (depth {})",
            inv.modifier.id,
            inv.subject,
            id,
            subjects.len(),
            chain.depth()
        );
        inv.resolver
            .apply_for_subjects_in(delta, &subjects, nested, &chain)?;
    }
    Ok(())
}
