//! NBA Stats franchise ids and their canonical (1..=30) counterparts.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::TeamId;

/// (NBA Stats id, canonical id, abbreviation)
const FRANCHISES: &[(i64, TeamId, &str)] = &[
    (1610612737, 1, "ATL"),
    (1610612738, 2, "BOS"),
    (1610612751, 3, "BKN"),
    (1610612766, 4, "CHA"),
    (1610612741, 5, "CHI"),
    (1610612739, 6, "CLE"),
    (1610612742, 7, "DAL"),
    (1610612743, 8, "DEN"),
    (1610612765, 9, "DET"),
    (1610612744, 10, "GSW"),
    (1610612745, 11, "HOU"),
    (1610612754, 12, "IND"),
    (1610612746, 13, "LAC"),
    (1610612747, 14, "LAL"),
    (1610612763, 15, "MEM"),
    (1610612748, 16, "MIA"),
    (1610612749, 17, "MIL"),
    (1610612750, 18, "MIN"),
    (1610612740, 19, "NOP"),
    (1610612752, 20, "NYK"),
    (1610612760, 21, "OKC"),
    (1610612753, 22, "ORL"),
    (1610612755, 23, "PHI"),
    (1610612756, 24, "PHX"),
    (1610612757, 25, "POR"),
    (1610612758, 26, "SAC"),
    (1610612759, 27, "SAS"),
    (1610612761, 28, "TOR"),
    (1610612762, 29, "UTA"),
    (1610612764, 30, "WAS"),
];

lazy_static! {
    static ref BY_STATS_ID: HashMap<i64, TeamId> = FRANCHISES
        .iter()
        .map(|(stats_id, id, _)| (*stats_id, *id))
        .collect();
}

/// Canonical id for an NBA Stats team id.
///
/// Ids already in canonical range pass through unchanged; anything else
/// (defunct franchises, placeholders) is `None`.
pub fn canonical_team_id(id: i64) -> Option<TeamId> {
    if (1..=30).contains(&id) {
        return Some(id);
    }
    BY_STATS_ID.get(&id).copied()
}
