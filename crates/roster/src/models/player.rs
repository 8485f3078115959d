use serde::{Deserialize, Serialize};

use super::team::Team;
use super::types::{PlayerId, TeamId};

/// A player as returned by a name search.
///
/// `team` is the player's current team; `None` when the provider does not
/// know it (free agents, retired players, placeholder teams).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub team: Option<Team>,
    #[serde(default)]
    pub draft_year: Option<i32>,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn current_team_id(&self) -> Option<TeamId> {
        self.team.as_ref().map(|t| t.id)
    }

    /// Case-insensitive substring match on first, last or full name.
    pub fn matches_name(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.first_name.to_lowercase().contains(&query)
            || self.last_name.to_lowercase().contains(&query)
            || self.full_name().to_lowercase().contains(&query)
    }
}

/// Career team history of a single player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerHistory {
    pub player_id: PlayerId,
    /// Distinct team ids in first-seen order.
    pub teams: Vec<TeamId>,
    /// Number of regular-season rows (a traded player has several per year).
    pub seasons: u32,
}

impl CareerHistory {
    pub fn empty(player_id: PlayerId) -> Self {
        Self {
            player_id,
            teams: Vec::new(),
            seasons: 0,
        }
    }
}
