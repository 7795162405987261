use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Display format for kickoff times, e.g. "2024-01-15 8:00 PM"
pub const KICKOFF_FORMAT: &str = "%Y-%m-%d %-I:%M %p";

/// One of the fixture teams. The declaration order is the dropdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    #[serde(rename = "Kansas City Chiefs")]
    KansasCityChiefs,
    #[serde(rename = "Buffalo Bills")]
    BuffaloBills,
    #[serde(rename = "San Francisco 49ers")]
    SanFrancisco49ers,
    #[serde(rename = "Dallas Cowboys")]
    DallasCowboys,
    #[serde(rename = "Philadelphia Eagles")]
    PhiladelphiaEagles,
    #[serde(rename = "Tampa Bay Buccaneers")]
    TampaBayBuccaneers,
}

impl Team {
    pub const ALL: [Team; 6] = [
        Team::KansasCityChiefs,
        Team::BuffaloBills,
        Team::SanFrancisco49ers,
        Team::DallasCowboys,
        Team::PhiladelphiaEagles,
        Team::TampaBayBuccaneers,
    ];

    /// Full display name
    pub fn name(self) -> &'static str {
        match self {
            Team::KansasCityChiefs => "Kansas City Chiefs",
            Team::BuffaloBills => "Buffalo Bills",
            Team::SanFrancisco49ers => "San Francisco 49ers",
            Team::DallasCowboys => "Dallas Cowboys",
            Team::PhiladelphiaEagles => "Philadelphia Eagles",
            Team::TampaBayBuccaneers => "Tampa Bay Buccaneers",
        }
    }

    /// Short name used for chart labels and legends ("Chiefs", "49ers").
    pub fn nickname(self) -> &'static str {
        last_token(self.name())
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name one of the fixture teams.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown team: {0:?}")]
pub struct UnknownTeam(pub String);

impl FromStr for Team {
    type Err = UnknownTeam;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Team::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownTeam(s.to_string()))
    }
}

/// Last whitespace-delimited token of a name; the whole input if it has none.
pub fn last_token(name: &str) -> &str {
    name.split_whitespace().next_back().unwrap_or(name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Upcoming,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictedScore {
    pub home: u32,
    pub away: u32,
}

/// A forecast for one game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub id: u32,
    pub home_team: Team,
    pub away_team: Team,
    /// Home win probability (0.0–1.0)
    pub home_win_prob: f64,
    /// Away win probability (0.0–1.0); authored so that home + away ≈ 1.0
    pub away_win_prob: f64,
    pub predicted_score: PredictedScore,
    /// Model confidence (0.0–1.0)
    pub confidence: f64,
    #[serde(serialize_with = "serialize_kickoff")]
    pub kickoff: NaiveDateTime,
    pub status: GameStatus,
}

impl Prediction {
    pub fn kickoff_display(&self) -> String {
        self.kickoff.format(KICKOFF_FORMAT).to_string()
    }
}

fn serialize_kickoff<S: Serializer>(kickoff: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&kickoff.format(KICKOFF_FORMAT))
}

/// Per-team performance ratings
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeamStats {
    /// Offensive rating (0–100)
    pub offense: f64,
    /// Defensive rating (0–100)
    pub defense: f64,
    /// Special-teams rating (0–100)
    pub special_teams: f64,
    /// Turnovers per game, authored in [-1, 1]
    pub turnover_margin: f64,
    /// Red-zone touchdown rate (0.0–1.0)
    pub red_zone: f64,
    /// Third-down conversion rate (0.0–1.0)
    pub third_down: f64,
    /// Average time of possession in minutes
    pub time_of_possession: f64,
}

/// One entry of a quarter's play log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameEvent {
    /// Game clock when the event happened, e.g. "12:34"
    pub time: &'static str,
    pub event: &'static str,
    /// "Home" | "Away" | "Final"
    pub team: &'static str,
    /// Running score after the event, when it changed it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<&'static str>,
}

/// Score, win-probability trace and play log for one simulated quarter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuarterRecord {
    pub quarter: u8,
    pub home_score: u32,
    pub away_score: u32,
    /// Home win probability sampled at even intervals through the quarter
    pub home_win_prob: &'static [f64],
    pub away_win_prob: &'static [f64],
    pub events: &'static [GameEvent],
}

/// The two teams of the simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Matchup {
    pub home: Team,
    pub away: Team,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_names_round_trip_through_from_str() {
        for team in Team::ALL {
            assert_eq!(team.name().parse::<Team>(), Ok(team));
        }
    }

    #[test]
    fn unknown_team_is_rejected() {
        let err = "Green Bay Packers".parse::<Team>().unwrap_err();
        assert_eq!(err, UnknownTeam("Green Bay Packers".into()));
        // Nicknames alone are not accepted
        assert!("Chiefs".parse::<Team>().is_err());
    }

    #[test]
    fn nickname_is_last_token() {
        assert_eq!(Team::KansasCityChiefs.nickname(), "Chiefs");
        assert_eq!(Team::SanFrancisco49ers.nickname(), "49ers");
        assert_eq!(Team::TampaBayBuccaneers.nickname(), "Buccaneers");
    }

    #[test]
    fn last_token_edge_cases() {
        assert_eq!(last_token("Bills"), "Bills");
        assert_eq!(last_token("  Buffalo   Bills  "), "Bills");
        assert_eq!(last_token(""), "");
    }

    #[test]
    fn team_serializes_as_display_name() {
        let json = serde_json::to_string(&Team::DallasCowboys).unwrap();
        assert_eq!(json, r#""Dallas Cowboys""#);
        let back: Team = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Team::DallasCowboys);
    }

    #[test]
    fn event_without_score_omits_field() {
        let ev = GameEvent {
            time: "3:45",
            event: "Punt",
            team: "Home",
            score: None,
        };
        let json = serde_json::to_value(ev).unwrap();
        assert!(json.get("score").is_none());
    }
}
