//! In-process caching for roster lookups.
//!
//! One [`CacheStore`] per namespace (teams, players, career history,
//! validation results). Nothing is persisted across restarts.

mod store;

pub use store::{CacheStore, CAREER_TTL, ROSTER_TTL};
