//! Static fixture tables behind every view.
//!
//! Nothing here is computed: predictions, team ratings and the simulated game
//! are authored values. Lookups are total over [`Team`] and the four quarters,
//! so callers never handle a miss.

use chrono::{NaiveDate, NaiveDateTime};
use std::sync::LazyLock;

pub mod models;
pub use models::*;

/// The game shown on the simulation view.
pub const SIMULATED_MATCHUP: Matchup = Matchup {
    home: Team::KansasCityChiefs,
    away: Team::BuffaloBills,
};

static PREDICTIONS: LazyLock<Vec<Prediction>> = LazyLock::new(|| {
    vec![
        Prediction {
            id: 1,
            home_team: Team::KansasCityChiefs,
            away_team: Team::BuffaloBills,
            home_win_prob: 0.65,
            away_win_prob: 0.35,
            predicted_score: PredictedScore { home: 28, away: 24 },
            confidence: 0.82,
            kickoff: kickoff(2024, 1, 15, 20, 0),
            status: GameStatus::Upcoming,
        },
        Prediction {
            id: 2,
            home_team: Team::SanFrancisco49ers,
            away_team: Team::DallasCowboys,
            home_win_prob: 0.58,
            away_win_prob: 0.42,
            predicted_score: PredictedScore { home: 31, away: 27 },
            confidence: 0.75,
            kickoff: kickoff(2024, 1, 15, 16, 30),
            status: GameStatus::Upcoming,
        },
        Prediction {
            id: 3,
            home_team: Team::PhiladelphiaEagles,
            away_team: Team::TampaBayBuccaneers,
            home_win_prob: 0.72,
            away_win_prob: 0.28,
            predicted_score: PredictedScore { home: 34, away: 21 },
            confidence: 0.88,
            kickoff: kickoff(2024, 1, 14, 13, 0),
            status: GameStatus::Completed,
        },
    ]
});

fn kickoff(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("fixture kickoff must be a valid calendar time")
}

/// All game predictions, in authored order.
pub fn predictions() -> &'static [Prediction] {
    &PREDICTIONS
}

/// Ratings for a team.
pub fn team_stats(team: Team) -> &'static TeamStats {
    match team {
        Team::KansasCityChiefs => &CHIEFS,
        Team::BuffaloBills => &BILLS,
        Team::SanFrancisco49ers => &NINERS,
        Team::DallasCowboys => &COWBOYS,
        Team::PhiladelphiaEagles => &EAGLES,
        Team::TampaBayBuccaneers => &BUCCANEERS,
    }
}

static CHIEFS: TeamStats = TeamStats {
    offense: 92.0,
    defense: 85.0,
    special_teams: 88.0,
    turnover_margin: 0.8,
    red_zone: 0.72,
    third_down: 0.45,
    time_of_possession: 31.2,
};

static BILLS: TeamStats = TeamStats {
    offense: 89.0,
    defense: 87.0,
    special_teams: 82.0,
    turnover_margin: 0.5,
    red_zone: 0.68,
    third_down: 0.42,
    time_of_possession: 29.8,
};

static NINERS: TeamStats = TeamStats {
    offense: 88.0,
    defense: 91.0,
    special_teams: 85.0,
    turnover_margin: 0.6,
    red_zone: 0.70,
    third_down: 0.44,
    time_of_possession: 30.5,
};

static COWBOYS: TeamStats = TeamStats {
    offense: 87.0,
    defense: 88.0,
    special_teams: 80.0,
    turnover_margin: 0.4,
    red_zone: 0.65,
    third_down: 0.40,
    time_of_possession: 28.9,
};

static EAGLES: TeamStats = TeamStats {
    offense: 90.0,
    defense: 86.0,
    special_teams: 83.0,
    turnover_margin: 0.7,
    red_zone: 0.71,
    third_down: 0.43,
    time_of_possession: 30.1,
};

static BUCCANEERS: TeamStats = TeamStats {
    offense: 85.0,
    defense: 89.0,
    special_teams: 81.0,
    turnover_margin: 0.3,
    red_zone: 0.63,
    third_down: 0.38,
    time_of_possession: 28.5,
};

// ── Simulated game ───────────────────────────────────────────────────────────

const fn event(time: &'static str, event: &'static str, team: &'static str) -> GameEvent {
    GameEvent {
        time,
        event,
        team,
        score: None,
    }
}

const fn scoring(
    time: &'static str,
    event: &'static str,
    team: &'static str,
    score: &'static str,
) -> GameEvent {
    GameEvent {
        time,
        event,
        team,
        score: Some(score),
    }
}

static QUARTERS: [QuarterRecord; 4] = [
    QuarterRecord {
        quarter: 1,
        home_score: 7,
        away_score: 3,
        home_win_prob: &[0.52, 0.55, 0.58, 0.60, 0.62, 0.65, 0.68, 0.70],
        away_win_prob: &[0.48, 0.45, 0.42, 0.40, 0.38, 0.35, 0.32, 0.30],
        events: &[
            event("15:00", "Kickoff", "Away"),
            scoring("12:34", "Touchdown", "Home", "7-0"),
            scoring("8:21", "Field Goal", "Away", "7-3"),
            event("3:45", "Punt", "Home"),
        ],
    },
    QuarterRecord {
        quarter: 2,
        home_score: 14,
        away_score: 10,
        home_win_prob: &[0.70, 0.72, 0.68, 0.65, 0.67, 0.70, 0.73, 0.75],
        away_win_prob: &[0.30, 0.28, 0.32, 0.35, 0.33, 0.30, 0.27, 0.25],
        events: &[
            scoring("15:00", "Touchdown", "Home", "14-3"),
            scoring("11:22", "Touchdown", "Away", "14-10"),
            event("6:15", "Interception", "Away"),
            event("2:30", "Field Goal Attempt - Missed", "Home"),
        ],
    },
    QuarterRecord {
        quarter: 3,
        home_score: 21,
        away_score: 17,
        home_win_prob: &[0.75, 0.77, 0.74, 0.72, 0.75, 0.78, 0.80, 0.82],
        away_win_prob: &[0.25, 0.23, 0.26, 0.28, 0.25, 0.22, 0.20, 0.18],
        events: &[
            scoring("15:00", "Touchdown", "Away", "14-17"),
            scoring("9:45", "Touchdown", "Home", "21-17"),
            event("5:12", "Fumble", "Away"),
            event("1:08", "Punt", "Home"),
        ],
    },
    QuarterRecord {
        quarter: 4,
        home_score: 28,
        away_score: 24,
        home_win_prob: &[0.82, 0.85, 0.83, 0.80, 0.78, 0.75, 0.72, 0.70, 0.68, 0.65],
        away_win_prob: &[0.18, 0.15, 0.17, 0.20, 0.22, 0.25, 0.28, 0.30, 0.32, 0.35],
        events: &[
            scoring("15:00", "Touchdown", "Home", "28-17"),
            scoring("10:33", "Touchdown", "Away", "28-24"),
            event("7:21", "Field Goal Attempt - Blocked", "Away"),
            event("3:45", "Punt", "Home"),
            scoring("0:32", "Game End", "Final", "28-24"),
        ],
    },
];

/// The four quarter records, in quarter order.
pub fn quarters() -> &'static [QuarterRecord; 4] {
    &QUARTERS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn win_probabilities_sum_to_one() {
        for p in predictions() {
            assert_abs_diff_eq!(p.home_win_prob + p.away_win_prob, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn quarter_traces_are_complementary() {
        for q in quarters() {
            assert_eq!(q.home_win_prob.len(), q.away_win_prob.len());
            for (h, a) in q.home_win_prob.iter().zip(q.away_win_prob) {
                assert_abs_diff_eq!(h + a, 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn quarters_are_in_order() {
        let numbers: Vec<u8> = quarters().iter().map(|q| q.quarter).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(quarters()[3].home_win_prob.len(), 10);
    }

    #[test]
    fn every_team_has_stats() {
        for team in Team::ALL {
            let s = team_stats(team);
            assert!((-1.0..=1.0).contains(&s.turnover_margin));
            assert!((0.0..=1.0).contains(&s.red_zone));
            assert!((0.0..=1.0).contains(&s.third_down));
        }
        assert_eq!(team_stats(Team::KansasCityChiefs).offense, 92.0);
    }

    #[test]
    fn kickoff_displays_twelve_hour_clock() {
        assert_eq!(predictions()[0].kickoff_display(), "2024-01-15 8:00 PM");
        assert_eq!(predictions()[1].kickoff_display(), "2024-01-15 4:30 PM");
        assert_eq!(predictions()[2].kickoff_display(), "2024-01-14 1:00 PM");
    }
}
