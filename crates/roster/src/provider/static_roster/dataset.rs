//! Built-in teams and players used when every upstream is unavailable.

use lazy_static::lazy_static;

use crate::models::{Player, Team, TeamId};

const TEAMS: &[(TeamId, &str, &str)] = &[
    (1, "ATL", "Atlanta Hawks"),
    (2, "BOS", "Boston Celtics"),
    (3, "BKN", "Brooklyn Nets"),
    (4, "CHA", "Charlotte Hornets"),
    (5, "CHI", "Chicago Bulls"),
    (6, "CLE", "Cleveland Cavaliers"),
    (7, "DAL", "Dallas Mavericks"),
    (8, "DEN", "Denver Nuggets"),
    (9, "DET", "Detroit Pistons"),
    (10, "GSW", "Golden State Warriors"),
    (11, "HOU", "Houston Rockets"),
    (12, "IND", "Indiana Pacers"),
    (13, "LAC", "LA Clippers"),
    (14, "LAL", "Los Angeles Lakers"),
    (15, "MEM", "Memphis Grizzlies"),
    (16, "MIA", "Miami Heat"),
    (17, "MIL", "Milwaukee Bucks"),
    (18, "MIN", "Minnesota Timberwolves"),
    (19, "NOP", "New Orleans Pelicans"),
    (20, "NYK", "New York Knicks"),
    (21, "OKC", "Oklahoma City Thunder"),
    (22, "ORL", "Orlando Magic"),
    (23, "PHI", "Philadelphia 76ers"),
    (24, "PHX", "Phoenix Suns"),
    (25, "POR", "Portland Trail Blazers"),
    (26, "SAC", "Sacramento Kings"),
    (27, "SAS", "San Antonio Spurs"),
    (28, "TOR", "Toronto Raptors"),
    (29, "UTA", "Utah Jazz"),
    (30, "WAS", "Washington Wizards"),
];

/// (id, first name, last name, current team id, draft year)
const PLAYERS: &[(i64, &str, &str, TeamId, i32)] = &[
    (1001, "LeBron", "James", 14, 2003),
    (1002, "Anthony", "Davis", 14, 2012),
    (1003, "Russell", "Westbrook", 14, 2008),
    (1004, "Stephen", "Curry", 10, 2009),
    (1005, "Klay", "Thompson", 10, 2011),
    (1006, "Draymond", "Green", 10, 2012),
    (1007, "Jayson", "Tatum", 2, 2017),
    (1008, "Jaylen", "Brown", 2, 2016),
    (1009, "Kevin", "Durant", 3, 2007),
    (1010, "Kyrie", "Irving", 3, 2011),
    (1011, "Jimmy", "Butler", 16, 2011),
    (1012, "Bam", "Adebayo", 16, 2017),
    (1013, "Giannis", "Antetokounmpo", 17, 2013),
    (1014, "Khris", "Middleton", 17, 2012),
    (1015, "Joel", "Embiid", 23, 2014),
    (1016, "James", "Harden", 23, 2009),
    (1017, "Nikola", "Jokic", 8, 2015),
    (1018, "Jamal", "Murray", 8, 2016),
    (1019, "Luka", "Doncic", 7, 2018),
    (1020, "Kristaps", "Porzingis", 7, 2015),
    (1021, "Devin", "Booker", 24, 2015),
    (1022, "Chris", "Paul", 24, 2005),
];

lazy_static! {
    pub(crate) static ref STATIC_TEAMS: Vec<Team> = TEAMS
        .iter()
        .map(|(id, abbreviation, full_name)| Team::new(*id, abbreviation, full_name))
        .collect();
    pub(crate) static ref STATIC_PLAYERS: Vec<Player> = PLAYERS
        .iter()
        .map(|(id, first_name, last_name, team_id, draft_year)| Player {
            id: *id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            team: team_by_id(*team_id),
            draft_year: Some(*draft_year),
        })
        .collect();
}

fn team_by_id(id: TeamId) -> Option<Team> {
    TEAMS
        .iter()
        .find(|(team_id, _, _)| *team_id == id)
        .map(|(id, abbreviation, full_name)| Team::new(*id, abbreviation, full_name))
}
