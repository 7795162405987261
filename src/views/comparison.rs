//! Side-by-side comparison of two teams' ratings.

use serde::Serialize;

use crate::data::{team_stats, Team, TeamStats};

/// The two teams currently selected in the comparison dropdowns.
///
/// Both slots may hold the same team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonState {
    pub team1: Team,
    pub team2: Team,
}

impl Default for ComparisonState {
    fn default() -> Self {
        ComparisonState {
            team1: Team::KansasCityChiefs,
            team2: Team::BuffaloBills,
        }
    }
}

impl ComparisonState {
    pub fn new(team1: Team, team2: Team) -> Self {
        ComparisonState { team1, team2 }
    }

    pub fn select_team1(&mut self, team: Team) {
        self.team1 = team;
    }

    pub fn select_team2(&mut self, team: Team) {
        self.team2 = team;
    }

    /// Bar-chart rows on a 0–100 scale.
    pub fn comparison_rows(&self) -> Vec<ComparisonRow> {
        let (a, b) = (team_stats(self.team1), team_stats(self.team2));
        BAR_METRICS
            .iter()
            .map(|&(metric, value)| ComparisonRow {
                metric,
                team1: value(a),
                team2: value(b),
            })
            .collect()
    }

    /// Radar rows: the bar metrics plus the normalised turnover margin.
    pub fn radar_rows(&self) -> Vec<RadarRow> {
        let (a, b) = (team_stats(self.team1), team_stats(self.team2));
        RADAR_CATEGORIES
            .iter()
            .map(|&(category, value)| RadarRow {
                category,
                team1: value(a),
                team2: value(b),
                full_mark: 100.0,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub metric: &'static str,
    pub team1: f64,
    pub team2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarRow {
    pub category: &'static str,
    pub team1: f64,
    pub team2: f64,
    pub full_mark: f64,
}

type Metric = (&'static str, fn(&TeamStats) -> f64);

const BAR_METRICS: [Metric; 5] = [
    ("Offense", |s| s.offense),
    ("Defense", |s| s.defense),
    ("Special Teams", |s| s.special_teams),
    ("Red Zone %", |s| s.red_zone * 100.0),
    ("3rd Down %", |s| s.third_down * 100.0),
];

const RADAR_CATEGORIES: [Metric; 6] = [
    ("Offense", |s| s.offense),
    ("Defense", |s| s.defense),
    ("Special Teams", |s| s.special_teams),
    ("Red Zone", |s| s.red_zone * 100.0),
    ("3rd Down", |s| s.third_down * 100.0),
    ("Turnover Margin", |s| turnover_to_scale(s.turnover_margin)),
];

/// Map a turnover margin in [-1, 1] onto the radar's 0–100 axis.
pub fn turnover_to_scale(margin: f64) -> f64 {
    (margin + 1.0) * 50.0
}

/// One label/value line of a team's profile panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileLine {
    pub label: &'static str,
    pub value: String,
    /// Rating lines carry an upward trend marker
    pub trending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamProfile {
    pub team: &'static str,
    pub lines: Vec<ProfileLine>,
}

pub fn team_profile(team: Team) -> TeamProfile {
    let s = team_stats(team);
    let line = |label, value, trending| ProfileLine {
        label,
        value,
        trending,
    };
    TeamProfile {
        team: team.name(),
        lines: vec![
            line("Offense Rating", format!("{}/100", s.offense), true),
            line("Defense Rating", format!("{}/100", s.defense), true),
            line("Turnover Margin", format!("{:+.1}", s.turnover_margin), false),
            line("Red Zone Efficiency", format!("{:.1}%", s.red_zone * 100.0), false),
            line("3rd Down Conversion", format!("{:.1}%", s.third_down * 100.0), false),
            line(
                "Avg Time of Possession",
                format!("{:.1} min", s.time_of_possession),
                false,
            ),
        ],
    }
}

/// Everything the comparison page renders for one selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub teams: Vec<&'static str>,
    pub team1: Team,
    pub team2: Team,
    /// Legend names for the two series
    pub series: [&'static str; 2],
    pub rows: Vec<ComparisonRow>,
    pub radar: Vec<RadarRow>,
    pub profiles: [TeamProfile; 2],
}

impl ComparisonView {
    pub fn build(state: &ComparisonState) -> Self {
        ComparisonView {
            teams: Team::ALL.iter().map(|t| t.name()).collect(),
            team1: state.team1,
            team2: state.team2,
            series: [state.team1.nickname(), state.team2.nickname()],
            rows: state.comparison_rows(),
            radar: state.radar_rows(),
            profiles: [team_profile(state.team1), team_profile(state.team2)],
        }
    }
}
