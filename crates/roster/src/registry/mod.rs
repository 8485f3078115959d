//! Provider orchestration.
//!
//! This module provides:
//! - The process-wide rate governor for the quota-limited provider
//! - The ordered provider chain with per-attempt timeouts
//! - Attempt diagnostics for logs and error messages

mod provider_chain;
mod rate_governor;
mod skip_reason;

pub use provider_chain::{ProviderChain, Resolution, DEFAULT_ATTEMPT_TIMEOUT};
pub use rate_governor::{RateGovernor, MIN_API_INTERVAL};
pub use skip_reason::{FetchDiagnostics, ProviderAttempt, SkipReason};
