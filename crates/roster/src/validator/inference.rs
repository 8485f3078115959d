//! Known-exceptions table of prior teams.
//!
//! Keyed by `(current team id, exact full name)`. Coverage is a handful of
//! well-known multi-team players; a missing entry means only the current
//! team is known. Ids are kept exactly as curated, including the team-4
//! bucket.

use crate::models::TeamId;

const ENTRIES: &[(TeamId, &str, &[TeamId])] = &[
    // Lakers
    (14, "LeBron James", &[6, 16]),
    (14, "Russell Westbrook", &[21, 11, 30]),
    (14, "Anthony Davis", &[19]),
    (14, "Dwight Howard", &[22, 11, 1, 4, 30, 23]),
    // Heat
    (16, "LeBron James", &[6, 14]),
    (16, "Jimmy Butler", &[4, 17, 23]),
    (16, "Kyle Lowry", &[15, 11, 28]),
    (16, "Andre Iguodala", &[23, 8, 10]),
    // Warriors
    (10, "Kevin Durant", &[21, 3, 24]),
    (10, "Andre Iguodala", &[23, 8, 16]),
    // Team 4 (curated as Bulls; canonical 4 is Charlotte)
    (4, "Jimmy Butler", &[17, 23, 16]),
    (4, "DeMar DeRozan", &[28, 26]),
    (4, "Derrick Rose", &[20, 6, 17, 9]),
];

/// Lookup over the curated prior-team entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct InferenceTable;

impl InferenceTable {
    pub fn new() -> Self {
        Self
    }

    /// Prior teams for a player on `current_team_id`.
    ///
    /// Name matching is exact: "Lebron James" finds nothing.
    pub fn prior_teams(&self, current_team_id: TeamId, full_name: &str) -> Option<&'static [TeamId]> {
        ENTRIES
            .iter()
            .find(|(team, name, _)| *team == current_team_id && *name == full_name)
            .map(|(_, _, prior)| *prior)
    }
}
