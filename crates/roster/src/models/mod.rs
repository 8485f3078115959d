//! Roster data models
//!
//! This module contains the core data types for roster lookups:
//! - `types` - Type aliases for common identifiers (ProviderId, TeamId)
//! - `team` - Team identity
//! - `player` - Player records and career history
//! - `query` - Provider queries, payloads and the tagged provider response
//! - `validation` - Team-pair validation requests and results

mod player;
mod query;
mod team;
mod types;
mod validation;

pub use player::{CareerHistory, Player};
pub use query::{ProviderResponse, RosterPayload, RosterQuery};
pub use team::Team;
pub use types::{PlayerId, ProviderId, TeamId};
pub use validation::{ResolutionMethod, ValidationRequest, ValidationResult};
