//! Typed access to modifier arguments.

use crate::error::ResolveError;
use crate::fixed::Fixed;
use crate::yields::YieldType;
use yieldsim_data::Modifier;

/// Typed argument accessors for [`Modifier`].
///
/// Absent optional arguments read as `None` / `false`; present but
/// unparseable ones are [`ResolveError::InvalidArgument`].
pub trait ModifierArgs {
    /// Optional numeric argument.
    fn number(&self, name: &'static str) -> Result<Option<Fixed>, ResolveError>;

    /// Required numeric argument.
    fn required_number(
        &self,
        effect: &'static str,
        name: &'static str,
    ) -> Result<Fixed, ResolveError>;

    /// Boolean argument, `false` when absent.
    fn flag(&self, name: &'static str) -> Result<bool, ResolveError>;

    /// Optional string argument; empty strings read as absent.
    fn text(&self, name: &str) -> Option<&str>;

    /// Items of a repeated argument; empty when absent.
    fn list(&self, name: &str) -> Vec<&str>;

    /// Yield kinds named by `YieldType` (comma-separated list allowed).
    fn yield_types(&self, effect: &'static str) -> Result<Vec<YieldType>, ResolveError>;
}

impl ModifierArgs for Modifier {
    fn number(&self, name: &'static str) -> Result<Option<Fixed>, ResolveError> {
        let Some(raw) = self.arguments.value(name) else {
            return Ok(None);
        };
        Fixed::parse(raw)
            .map(Some)
            .ok_or_else(|| ResolveError::InvalidArgument {
                modifier: self.id.clone(),
                argument: name,
                value: raw.to_string(),
            })
    }

    fn required_number(
        &self,
        effect: &'static str,
        name: &'static str,
    ) -> Result<Fixed, ResolveError> {
        self.number(name)?
            .ok_or_else(|| ResolveError::MissingArgument {
                modifier: self.id.clone(),
                effect,
                argument: name,
            })
    }

    fn flag(&self, name: &'static str) -> Result<bool, ResolveError> {
        let Some(raw) = self.arguments.value(name) else {
            return Ok(false);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            _ => Err(ResolveError::InvalidArgument {
                modifier: self.id.clone(),
                argument: name,
                value: raw.to_string(),
            }),
        }
    }

    fn text(&self, name: &str) -> Option<&str> {
        self.arguments
            .value(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    fn list(&self, name: &str) -> Vec<&str> {
        self.arguments.items(name)
    }

    fn yield_types(&self, effect: &'static str) -> Result<Vec<YieldType>, ResolveError> {
        let items = self.arguments.items("YieldType");
        if items.is_empty() {
            return Err(ResolveError::MissingArgument {
                modifier: self.id.clone(),
                effect,
                argument: "YieldType",
            });
        }
        items
            .into_iter()
            .map(|item| {
                YieldType::parse(item).ok_or_else(|| ResolveError::InvalidArgument {
                    modifier: self.id.clone(),
                    argument: "YieldType",
                    value: item.to_string(),
                })
            })
            .collect()
    }
}
