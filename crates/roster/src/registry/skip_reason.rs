//! Per-resolution record of what each provider did.

use crate::errors::FailureReason;
use crate::models::ProviderId;

/// Why a provider was skipped without being contacted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The rate governor denied the call.
    RateLimited,
}

/// Record of a single provider attempt during a resolution.
#[derive(Clone, Debug)]
pub struct ProviderAttempt {
    pub provider_id: ProviderId,
    pub skipped: Option<SkipReason>,
    pub failure: Option<FailureReason>,
    pub success: bool,
}

/// Ordered attempt log for one chain resolution.
#[derive(Clone, Debug, Default)]
pub struct FetchDiagnostics {
    pub attempts: Vec<ProviderAttempt>,
}

impl FetchDiagnostics {
    pub fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    pub fn record_skip(&mut self, provider_id: ProviderId, reason: SkipReason) {
        self.attempts.push(ProviderAttempt {
            provider_id,
            skipped: Some(reason),
            failure: None,
            success: false,
        });
    }

    pub fn record_failure(&mut self, provider_id: ProviderId, reason: FailureReason) {
        self.attempts.push(ProviderAttempt {
            provider_id,
            skipped: None,
            failure: Some(reason),
            success: false,
        });
    }

    pub fn record_success(&mut self, provider_id: ProviderId) {
        self.attempts.push(ProviderAttempt {
            provider_id,
            skipped: None,
            failure: None,
            success: true,
        });
    }

    /// Summary for logging/debugging.
    pub fn summary(&self) -> String {
        self.attempts
            .iter()
            .map(|a| {
                if a.success {
                    format!("{}: SUCCESS", a.provider_id)
                } else if let Some(skip) = &a.skipped {
                    format!("{}: SKIPPED ({:?})", a.provider_id, skip)
                } else if let Some(reason) = &a.failure {
                    format!("{}: FAILED ({})", a.provider_id, reason)
                } else {
                    format!("{}: UNKNOWN", a.provider_id)
                }
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    pub fn skip_reasons(&self) -> Vec<(&ProviderId, &SkipReason)> {
        self.attempts
            .iter()
            .filter_map(|a| a.skipped.as_ref().map(|s| (&a.provider_id, s)))
            .collect()
    }

    pub fn failures(&self) -> Vec<(&ProviderId, FailureReason)> {
        self.attempts
            .iter()
            .filter_map(|a| a.failure.map(|r| (&a.provider_id, r)))
            .collect()
    }
}
