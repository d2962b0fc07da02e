use serde::{Deserialize, Serialize};

/// Resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum number of nested attach expansions below a root modifier.
    ///
    /// Guards against runaway modifier graphs; cycles are detected separately.
    pub max_attach_depth: u32,

    /// Failure policy for a single (subject, modifier) pair.
    ///
    /// - `false`: log, record a diagnostic and continue the sweep
    /// - `true`: abort the whole resolution with the first error
    pub strict: bool,
}

impl ResolverConfig {
    /// Strict configuration, used where bad data must fail loudly (tests, CI).
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_attach_depth: 16,
            strict: false,
        }
    }
}
