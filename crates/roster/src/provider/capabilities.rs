//! Provider capabilities.
//!
//! Describes how the chain should treat a provider: whether the rate
//! governor gates it, whether it is asked for career history at all, and
//! whether its answers are worth caching.

/// Where a provider's data comes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProviderTier {
    /// A live upstream service. Successful answers are cached.
    Remote,
    /// The built-in dataset. Never fails, never cached.
    Static,
}

/// Describes the capabilities of a roster provider.
#[derive(Clone, Debug)]
pub struct ProviderCapabilities {
    pub tier: ProviderTier,

    /// Whether each call must first be granted by the rate governor.
    pub rate_gated: bool,

    /// Whether the provider can answer career history lookups. The chain
    /// never calls a provider without it for a career query.
    pub supports_career: bool,
}

impl Default for ProviderCapabilities {
    fn default() -> Self {
        Self {
            tier: ProviderTier::Remote,
            rate_gated: false,
            supports_career: false,
        }
    }
}
