//! Diagnostics collected during resolution.
//!
//! Every recoverable condition (unknown or unimplemented effect, malformed
//! arguments, a swallowed failure in lenient mode) is logged and also recorded
//! here, so callers and tests can inspect what was skipped. `report()` gives
//! a frequency-sorted roadmap of what the data uses but the engine lacks.

use crate::effects::EffectType;
use crate::error::ResolveError;
use crate::subject::Subject;
use std::cell::RefCell;
use std::collections::HashMap;
use yieldsim_data::ModifierId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Effect tag that does not parse to a known effect type.
    UnknownEffect { tag: String, modifier: ModifierId },
    /// Known effect type with no yield model yet.
    Unimplemented {
        effect: EffectType,
        modifier: ModifierId,
    },
    /// Arguments present but not in a shape the handler understands.
    MalformedArguments {
        effect: EffectType,
        modifier: ModifierId,
    },
    /// Resolution error swallowed by the lenient failure policy.
    Failed { subject: Subject, error: ResolveError },
}

impl Diagnostic {
    /// Grouping key for reference counts.
    pub fn key(&self) -> String {
        match self {
            Diagnostic::UnknownEffect { tag, .. } => tag.clone(),
            Diagnostic::Unimplemented { effect, .. } => effect.as_str().to_string(),
            Diagnostic::MalformedArguments { effect, .. } => {
                format!("{} (malformed arguments)", effect.as_str())
            }
            Diagnostic::Failed { error, .. } => match error {
                ResolveError::UnknownModifier(_) => "unknown modifier".to_string(),
                ResolveError::UnknownAdjacency { .. } => "unknown adjacency".to_string(),
                ResolveError::InvalidDivisor { .. } => "invalid divisor".to_string(),
                ResolveError::ModifierCycle { .. } => "modifier cycle".to_string(),
                ResolveError::AttachDepthExceeded { .. } => "attach depth exceeded".to_string(),
                ResolveError::MissingArgument { .. } => "missing argument".to_string(),
                ResolveError::InvalidArgument { .. } => "invalid argument".to_string(),
            },
        }
    }
}

/// Single-threaded diagnostic sink owned by one resolver.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: RefCell<Vec<Diagnostic>>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, diagnostic: Diagnostic) {
        self.entries.borrow_mut().push(diagnostic);
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Number of times each diagnostic key was recorded.
    pub fn reference_counts(&self) -> HashMap<String, u32> {
        let mut counts = HashMap::new();
        for entry in self.entries.borrow().iter() {
            *counts.entry(entry.key()).or_default() += 1;
        }
        counts
    }

    /// Report sorted by frequency, then key.
    pub fn report(&self) -> String {
        let counts = self.reference_counts();
        let mut sorted: Vec<_> = counts.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        let mut report = format!("Resolution diagnostics ({} unique):\n", sorted.len());
        for (key, count) in sorted.iter().take(50) {
            report.push_str(&format!("  {:60} {:4} references\n", key, count));
        }
        if sorted.len() > 50 {
            report.push_str(&format!("  ... and {} more\n", sorted.len() - 50));
        }
        report
    }
}
