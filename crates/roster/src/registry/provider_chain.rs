//! Ordered provider chain.
//!
//! The chain tries its providers in the order they were given:
//! 1. Career queries pass over providers without career support
//! 2. Rate-gated providers ask the governor and are skipped on denial
//! 3. Each attempt runs under its own timeout
//! 4. The payload shape is checked against the query
//! 5. The first success ends the resolution; any failure moves to the next
//!
//! Reordering providers is a change to the `Vec`, not to this loop.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use super::{FetchDiagnostics, RateGovernor, SkipReason};
use crate::errors::{FailureReason, ProviderError, RosterError};
use crate::models::{ProviderId, ProviderResponse, RosterPayload, RosterQuery};
use crate::provider::{ProviderTier, RosterProvider};

/// Default per-attempt timeout for remote providers.
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(8);

/// A successful chain resolution.
#[derive(Clone, Debug)]
pub struct Resolution {
    pub payload: RosterPayload,
    pub provider_id: ProviderId,
    pub tier: ProviderTier,
    pub diagnostics: FetchDiagnostics,
}

/// Named, ordered list of providers sharing one rate governor.
pub struct ProviderChain {
    name: &'static str,
    providers: Vec<Arc<dyn RosterProvider>>,
    governor: Arc<RateGovernor>,
    attempt_timeout: Duration,
}

impl ProviderChain {
    pub fn new(
        name: &'static str,
        providers: Vec<Arc<dyn RosterProvider>>,
        governor: Arc<RateGovernor>,
    ) -> Self {
        Self {
            name,
            providers,
            governor,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    pub fn with_attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn providers(&self) -> &[Arc<dyn RosterProvider>] {
        &self.providers
    }

    /// Resolve `query` against the providers in order.
    ///
    /// Returns the first success. Fails only when every provider was
    /// skipped or failed, which cannot happen while the static provider is
    /// last in the chain.
    pub async fn resolve(&self, query: &RosterQuery) -> Result<Resolution, RosterError> {
        if self.providers.is_empty() {
            warn!("Chain '{}' has no providers", self.name);
            return Err(RosterError::NoProviders {
                chain: self.name.to_string(),
            });
        }

        let mut diagnostics = FetchDiagnostics::new();

        for provider in &self.providers {
            let provider_id: ProviderId = Cow::Borrowed(provider.id());
            let capabilities = provider.capabilities();

            // Checked before the governor so an unsupported query never spends a grant.
            if matches!(query, RosterQuery::CareerTeams(_)) && !capabilities.supports_career {
                debug!(
                    "Chain '{}': '{}' has no career support, passing over it",
                    self.name, provider_id
                );
                diagnostics.record_failure(provider_id, FailureReason::NotSupported);
                continue;
            }

            if capabilities.rate_gated && !self.governor.try_acquire() {
                info!(
                    "Rate governor denied '{}' for {}, trying next provider",
                    provider_id,
                    query.operation()
                );
                diagnostics.record_skip(provider_id, SkipReason::RateLimited);
                continue;
            }

            debug!(
                "Chain '{}': asking '{}' for {}",
                self.name,
                provider_id,
                query.operation()
            );

            match self.attempt(provider.as_ref(), query).await {
                ProviderResponse::Success(payload) => {
                    info!(
                        "Chain '{}': {} answered by '{}' with {} records",
                        self.name,
                        query.operation(),
                        provider_id,
                        payload.len()
                    );
                    diagnostics.record_success(provider_id.clone());
                    return Ok(Resolution {
                        payload,
                        provider_id,
                        tier: capabilities.tier,
                        diagnostics,
                    });
                }
                ProviderResponse::Failure(reason) => {
                    diagnostics.record_failure(provider_id, reason);
                }
            }
        }

        let summary = diagnostics.summary();
        warn!(
            "Chain '{}': every provider failed for {} ({})",
            self.name,
            query.operation(),
            summary
        );
        Err(RosterError::AllProvidersFailed {
            chain: self.name.to_string(),
            summary,
        })
    }

    /// One time-bounded attempt, tagged at the provider boundary.
    async fn attempt(
        &self,
        provider: &dyn RosterProvider,
        query: &RosterQuery,
    ) -> ProviderResponse<RosterPayload> {
        let result = match tokio::time::timeout(self.attempt_timeout, provider.fetch(query)).await
        {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout {
                provider: provider.id().to_string(),
            }),
        };

        match result {
            Ok(payload) if payload.matches(query) => ProviderResponse::Success(payload),
            Ok(_) => {
                warn!(
                    "Provider '{}' returned the wrong payload kind for {}",
                    provider.id(),
                    query.operation()
                );
                ProviderResponse::Failure(FailureReason::ParseError)
            }
            Err(e) => {
                warn!(
                    "Provider '{}' failed for {}: {}",
                    provider.id(),
                    query.operation(),
                    e
                );
                ProviderResponse::Failure(e.reason())
            }
        }
    }
}
