//! Roster provider abstractions and implementations.
//!
//! This module contains:
//! - The `RosterProvider` trait that all providers implement
//! - Provider capabilities (rate gating, tier)
//! - Concrete providers: Ball Don't Lie, the NBA-API sidecar, NBA Stats and
//!   the built-in static dataset
//!
//! Providers never fall back on their own. Ordering, gating and fallback
//! belong to the provider chain in the registry module.

mod capabilities;
mod traits;

pub mod balldontlie;
pub mod nba_api;
pub mod nba_stats;
pub mod static_roster;
pub mod team_ids;

pub use capabilities::{ProviderCapabilities, ProviderTier};
pub use traits::RosterProvider;
