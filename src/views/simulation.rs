//! Quarter-by-quarter replay of the simulated game.
//!
//! The view is a small state machine over a fixed table: picking a quarter
//! re-reads that quarter's record, `start` only raises the simulating flag, and
//! `reset` returns to the initial state. Nothing advances over time.

use serde::Serialize;

use super::percent;
use crate::data::{quarters, GameEvent, Matchup, QuarterRecord, SIMULATED_MATCHUP};

/// Seconds on the game clock at the start of a quarter.
pub const QUARTER_SECS: u32 = 900;

/// Confidence shown in the summary panel, in percent.
pub const SUMMARY_CONFIDENCE_PCT: u32 = 85;

/// A quarter number, always in 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quarter(u8);

impl Quarter {
    pub const FIRST: Quarter = Quarter(1);
    pub const LAST: Quarter = Quarter(4);

    pub fn new(n: u8) -> Option<Self> {
        (1..=4).contains(&n).then_some(Quarter(n))
    }

    pub fn all() -> impl Iterator<Item = Quarter> {
        (1..=4).map(Quarter)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The fixture record for this quarter.
    pub fn record(self) -> &'static QuarterRecord {
        &quarters()[usize::from(self.get() - 1)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationState {
    pub current_quarter: Quarter,
    pub is_simulating: bool,
    /// Display-only clock seed; no timer ever decrements it.
    pub game_time_secs: u32,
}

impl Default for SimulationState {
    fn default() -> Self {
        SimulationState {
            current_quarter: Quarter::FIRST,
            is_simulating: false,
            game_time_secs: QUARTER_SECS,
        }
    }
}

/// A user interaction on the simulation view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectQuarter(Quarter),
    Start,
    Reset,
}

impl SimulationState {
    pub fn select_quarter(&mut self, q: Quarter) {
        self.current_quarter = q;
    }

    /// Raise the simulating flag. Quarter and clock are left alone.
    pub fn start(&mut self) {
        self.is_simulating = true;
    }

    pub fn reset(&mut self) {
        *self = SimulationState::default();
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectQuarter(q) => self.select_quarter(q),
            Action::Start => self.start(),
            Action::Reset => self.reset(),
        }
    }
}

/// Format seconds as a game clock, e.g. 900 → "15:00".
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinProbPoint {
    /// 1-based sample index within the quarter
    pub tick: usize,
    pub home_pct: f64,
    pub away_pct: f64,
}

/// Zip a quarter's home and away traces into chart points.
pub fn win_prob_series(record: &QuarterRecord) -> Vec<WinProbPoint> {
    record
        .home_win_prob
        .iter()
        .zip(record.away_win_prob)
        .enumerate()
        .map(|(i, (home, away))| WinProbPoint {
            tick: i + 1,
            home_pct: percent(*home),
            away_pct: percent(*away),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarterTab {
    pub quarter: Quarter,
    /// "7 - 3"
    pub score: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub home_team: &'static str,
    pub away_team: &'static str,
    pub home_score: u32,
    pub away_score: u32,
}

/// Always taken from the final quarter, whichever quarter is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub final_score: String,
    /// The fixture's pick, fixed to the home side
    pub predicted_winner: &'static str,
    /// Home win probability at the last sample of the game, in percent
    pub final_home_win_pct: f64,
    pub confidence_pct: u32,
}

impl SimulationSummary {
    pub fn build() -> Self {
        let last = Quarter::LAST.record();
        let final_prob = last.home_win_prob.last().copied().unwrap_or_default();
        SimulationSummary {
            final_score: score_line(last),
            predicted_winner: SIMULATED_MATCHUP.home.name(),
            final_home_win_pct: percent(final_prob),
            confidence_pct: SUMMARY_CONFIDENCE_PCT,
        }
    }
}

fn score_line(record: &QuarterRecord) -> String {
    format!("{} - {}", record.home_score, record.away_score)
}

/// Everything the simulation page renders for one state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationView {
    pub matchup: Matchup,
    pub clock: String,
    /// The start button is disabled while a simulation is flagged as running
    pub can_start: bool,
    pub quarter: Quarter,
    pub tabs: Vec<QuarterTab>,
    pub scoreboard: Scoreboard,
    pub chart: Vec<WinProbPoint>,
    pub events: &'static [GameEvent],
    pub summary: SimulationSummary,
}

impl SimulationView {
    pub fn build(state: &SimulationState) -> Self {
        let record = state.current_quarter.record();
        SimulationView {
            matchup: SIMULATED_MATCHUP,
            clock: format_clock(state.game_time_secs),
            can_start: !state.is_simulating,
            quarter: state.current_quarter,
            tabs: Quarter::all()
                .map(|q| QuarterTab {
                    quarter: q,
                    score: score_line(q.record()),
                    active: q == state.current_quarter,
                })
                .collect(),
            scoreboard: Scoreboard {
                home_team: SIMULATED_MATCHUP.home.name(),
                away_team: SIMULATED_MATCHUP.away.name(),
                home_score: record.home_score,
                away_score: record.away_score,
            },
            chart: win_prob_series(record),
            events: record.events,
            summary: SimulationSummary::build(),
        }
    }
}
