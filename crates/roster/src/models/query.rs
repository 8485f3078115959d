use crate::errors::FailureReason;

use super::player::{CareerHistory, Player};
use super::team::Team;
use super::types::PlayerId;

/// A lookup the provider chain can answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterQuery {
    /// The full team listing.
    Teams,
    /// Players whose name contains the given text.
    SearchPlayers(String),
    /// Career team history for a provider-specific player id.
    CareerTeams(PlayerId),
}

impl RosterQuery {
    /// Short label for logs and diagnostics.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Teams => "teams",
            Self::SearchPlayers(_) => "search_players",
            Self::CareerTeams(_) => "career_teams",
        }
    }
}

/// Payload returned by a successful provider attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterPayload {
    Teams(Vec<Team>),
    Players(Vec<Player>),
    Career(CareerHistory),
}

impl RosterPayload {
    /// Whether this payload is the right kind of answer for `query`.
    pub fn matches(&self, query: &RosterQuery) -> bool {
        matches!(
            (self, query),
            (Self::Teams(_), RosterQuery::Teams)
                | (Self::Players(_), RosterQuery::SearchPlayers(_))
                | (Self::Career(_), RosterQuery::CareerTeams(_))
        )
    }

    /// Number of records carried, for logging.
    pub fn len(&self) -> usize {
        match self {
            Self::Teams(teams) => teams.len(),
            Self::Players(players) => players.len(),
            Self::Career(history) => history.teams.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of one provider attempt, tagged at the provider boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderResponse<T> {
    Success(T),
    Failure(FailureReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape_check() {
        let teams = RosterPayload::Teams(vec![]);
        assert!(teams.matches(&RosterQuery::Teams));
        assert!(!teams.matches(&RosterQuery::SearchPlayers("curry".to_string())));

        let career = RosterPayload::Career(CareerHistory::empty(1));
        assert!(career.matches(&RosterQuery::CareerTeams(1)));
        assert!(!career.matches(&RosterQuery::Teams));
    }
}
