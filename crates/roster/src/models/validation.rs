use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::types::TeamId;

/// How a validation result was produced.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionMethod {
    /// Current team from a provider, no inference entry applied.
    Provider,
    /// Served from the validation cache.
    Cache,
    /// Current team plus the known-exceptions inference table.
    Inference,
    /// Lookup failed; the safe default was returned and not cached.
    ErrorFallback,
}

/// "Has this player played for both teams?"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationRequest {
    pub first_name: String,
    pub last_name: String,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
}

impl ValidationRequest {
    pub fn new(first_name: &str, last_name: &str, team1_id: TeamId, team2_id: TeamId) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            team1_id,
            team2_id,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Deterministic key over all four inputs, lower-cased.
    pub fn cache_key(&self) -> String {
        format!(
            "validate_{}_{}_{}_{}",
            self.first_name, self.last_name, self.team1_id, self.team2_id
        )
        .to_lowercase()
    }
}

/// Answer to a [`ValidationRequest`].
///
/// `is_valid` is true iff both queried ids are in `historical_team_ids`;
/// the only constructors enforce that.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub player_name: String,
    pub current_team_id: Option<TeamId>,
    pub historical_team_ids: BTreeSet<TeamId>,
    pub queried_team_ids: (TeamId, TeamId),
    pub is_valid: bool,
    pub resolution_method: ResolutionMethod,
}

impl ValidationResult {
    pub fn evaluate(
        request: &ValidationRequest,
        current_team_id: Option<TeamId>,
        historical_team_ids: BTreeSet<TeamId>,
        resolution_method: ResolutionMethod,
    ) -> Self {
        let is_valid = historical_team_ids.contains(&request.team1_id)
            && historical_team_ids.contains(&request.team2_id);

        Self {
            player_name: request.full_name(),
            current_team_id,
            historical_team_ids,
            queried_team_ids: (request.team1_id, request.team2_id),
            is_valid,
            resolution_method,
        }
    }

    pub fn error_fallback(request: &ValidationRequest) -> Self {
        Self::evaluate(
            request,
            None,
            BTreeSet::new(),
            ResolutionMethod::ErrorFallback,
        )
    }

    /// Same result, re-tagged as served from cache.
    pub fn from_cache(mut self) -> Self {
        self.resolution_method = ResolutionMethod::Cache;
        self
    }
}
