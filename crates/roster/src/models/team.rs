use serde::{Deserialize, Serialize};

use super::types::TeamId;

/// A franchise in the 30-team universe.
///
/// Identity is `id`. The abbreviation is unique but only used for display
/// and logging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub abbreviation: String,
    pub full_name: String,
}

impl Team {
    pub fn new(id: TeamId, abbreviation: &str, full_name: &str) -> Self {
        Self {
            id,
            abbreviation: abbreviation.to_string(),
            full_name: full_name.to_string(),
        }
    }
}
