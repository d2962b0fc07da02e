//! Yield accumulator written by effect handlers.
//!
//! Two channels per yield kind: a flat amount and a percent. They are never
//! combined here; the consumer composes them after the whole sweep, which
//! keeps the result independent of handler order.

use crate::fixed::Fixed;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
pub use yieldsim_data::YieldType;

/// Accumulated contribution for one yield kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldEntry {
    pub amount: Fixed,
    pub percent: Fixed,
}

impl YieldEntry {
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero() && self.percent.is_zero()
    }
}

/// Mutable yield aggregate threaded through a resolution run.
///
/// Contributions are strictly additive: no clamping, no rounding, no
/// deduplication. Negative values are reductions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldsDelta {
    entries: BTreeMap<YieldType, YieldEntry>,
    /// Per-yield multiplier stack applied by [`YieldsDelta::add_amount`].
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    multipliers: BTreeMap<YieldType, Vec<Fixed>>,
}

impl YieldsDelta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty delta sharing this delta's multiplier stack.
    pub fn scratch(&self) -> Self {
        Self {
            entries: BTreeMap::new(),
            multipliers: self.multipliers.clone(),
        }
    }

    /// Effective multiplier for a yield: product of the stack, 1 when empty.
    pub fn multiplier(&self, yield_type: YieldType) -> Fixed {
        self.multipliers
            .get(&yield_type)
            .map(|stack| stack.iter().fold(Fixed::ONE, |acc, m| acc * *m))
            .unwrap_or(Fixed::ONE)
    }

    pub fn push_multiplier(&mut self, yield_type: YieldType, factor: Fixed) {
        self.multipliers.entry(yield_type).or_default().push(factor);
    }

    pub fn pop_multiplier(&mut self, yield_type: YieldType) -> Option<Fixed> {
        let stack = self.multipliers.get_mut(&yield_type)?;
        let popped = stack.pop();
        if stack.is_empty() {
            self.multipliers.remove(&yield_type);
        }
        popped
    }

    /// Add a flat amount scaled by the yield's multiplier stack.
    pub fn add_amount(&mut self, yield_type: YieldType, value: Fixed) {
        let scaled = value * self.multiplier(yield_type);
        self.entries.entry(yield_type).or_default().amount += scaled;
    }

    /// Add a flat amount that must not compound with any multiplier.
    pub fn add_amount_no_multiplier(&mut self, yield_type: YieldType, value: Fixed) {
        self.entries.entry(yield_type).or_default().amount += value;
    }

    pub fn add_percent(&mut self, yield_type: YieldType, value: Fixed) {
        self.entries.entry(yield_type).or_default().percent += value;
    }

    /// Add every channel of `other` into `self`. Multipliers are not merged:
    /// `other`'s amounts were already scaled when they were written.
    pub fn merge(&mut self, other: YieldsDelta) {
        for (yield_type, entry) in other.entries {
            let mine = self.entries.entry(yield_type).or_default();
            mine.amount += entry.amount;
            mine.percent += entry.percent;
        }
    }

    pub fn amount(&self, yield_type: YieldType) -> Fixed {
        self.entries
            .get(&yield_type)
            .map(|e| e.amount)
            .unwrap_or(Fixed::ZERO)
    }

    pub fn percent(&self, yield_type: YieldType) -> Fixed {
        self.entries
            .get(&yield_type)
            .map(|e| e.percent)
            .unwrap_or(Fixed::ZERO)
    }

    pub fn entry(&self, yield_type: YieldType) -> YieldEntry {
        self.entries.get(&yield_type).copied().unwrap_or_default()
    }

    /// Entries in yield order, including ones that summed back to zero.
    pub fn iter(&self) -> impl Iterator<Item = (YieldType, &YieldEntry)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// True when no channel holds a non-zero value.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(YieldEntry::is_zero)
    }
}
