//! NBA Grid Roster Crate
//!
//! Team listing, player search, career history and team-pair validation for
//! the NBA grid game, backed by an ordered chain of data providers.
//!
//! # Overview
//!
//! - Multiple providers: Ball Don't Lie, the NBA-API sidecar, NBA Stats
//! - A built-in static roster that always answers team and player lookups
//! - A process-wide rate governor for the quota-limited provider
//! - TTL caches for lookups and validation results
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  RosterService   |  (context object, one per process)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  ProviderChain   | --> |  RateGovernor    |  (skip on denial)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! |    Provider      |  (Ball Don't Lie, NBA-API, NBA Stats, static)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | PlayerValidator  |  (cache, current team, inference table)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Team`] / [`Player`] - Roster records with canonical team ids (1-30)
//! - [`CareerHistory`] - Distinct teams and season count for a player
//! - [`ValidationRequest`] / [`ValidationResult`] - Team-pair validation
//! - [`RosterQuery`] / [`RosterPayload`] - What a chain is asked and answers

pub mod cache;
pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;
pub mod service;
pub mod validator;

pub use models::{
    CareerHistory, Player, PlayerId, ProviderId, ProviderResponse, ResolutionMethod,
    RosterPayload, RosterQuery, Team, TeamId, ValidationRequest, ValidationResult,
};

pub use provider::balldontlie::BallDontLieProvider;
pub use provider::nba_api::NbaApiProvider;
pub use provider::nba_stats::NbaStatsProvider;
pub use provider::static_roster::StaticRosterProvider;
pub use provider::{ProviderCapabilities, ProviderTier, RosterProvider};

pub use cache::CacheStore;
pub use errors::{FailureReason, ProviderError, RosterError};
pub use registry::{FetchDiagnostics, ProviderChain, RateGovernor, Resolution, SkipReason};
pub use service::{ChainProviders, RosterConfig, RosterService};
pub use validator::{InferenceTable, PlayerLookup, PlayerValidator};
