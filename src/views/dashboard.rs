//! Landing dashboard: upcoming-game cards plus the portfolio line chart and
//! the anchor-game donut.

use serde::Serialize;

use super::percent;
use crate::data::{GameStatus, Prediction};

/// A point of the portfolio chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// "{away nickname} @ {home nickname}"
    pub label: String,
    /// Home win probability as a percentage, one decimal
    pub home_prob: f64,
    pub away_prob: f64,
}

/// A slice of the anchor-game donut
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: &'static str,
    /// 0–100
    pub value: f64,
}

/// Card shown on the live board for one upcoming game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameCard {
    pub id: u32,
    pub kickoff: String,
    /// Confidence as a whole percentage
    pub confidence_pct: u32,
    pub away_team: &'static str,
    pub home_team: &'static str,
    pub away_score: u32,
    pub home_score: u32,
    /// Spread is not modelled; always rendered as a dash
    pub spread: &'static str,
    /// Bar widths in percent, clamped to [0, 100]
    pub away_bar_pct: f64,
    pub home_bar_pct: f64,
    pub away_label: String,
    pub home_label: String,
}

/// Fixed copy block shown under the football hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NarrativePanel {
    pub title: &'static str,
    pub body: &'static str,
}

pub const HERO_KICKER: &str = "Machine Learning Edge";
pub const HERO_CAPTION: &str = "Real-time NFL win probabilities, driven by play-by-play context.";

pub const NARRATIVE_PANELS: [NarrativePanel; 3] = [
    NarrativePanel {
        title: "Model",
        body: "CNN + similarity transformer builds team style embeddings.",
    },
    NarrativePanel {
        title: "Engine",
        body: "Markov chain decision tree simulates 4 quarters of state.",
    },
    NarrativePanel {
        title: "Edge",
        body: "Surfaces mispriced lines vs. market-implied probabilities.",
    },
];

/// Everything the dashboard page renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub hero_kicker: &'static str,
    pub hero_caption: &'static str,
    pub upcoming: Vec<GameCard>,
    pub chart: Vec<ChartPoint>,
    pub lead_slices: Vec<PieSlice>,
    pub panels: [NarrativePanel; 3],
}

impl DashboardView {
    pub fn build(predictions: &[Prediction]) -> Self {
        DashboardView {
            hero_kicker: HERO_KICKER,
            hero_caption: HERO_CAPTION,
            upcoming: list_upcoming(predictions).map(game_card).collect(),
            chart: chart_series(predictions),
            lead_slices: lead_pie_slices(predictions),
            panels: NARRATIVE_PANELS,
        }
    }
}

/// Predictions still to be played, in their original order.
pub fn list_upcoming(predictions: &[Prediction]) -> impl Iterator<Item = &Prediction> {
    predictions
        .iter()
        .filter(|p| p.status == GameStatus::Upcoming)
}

/// One chart point per prediction regardless of status.
pub fn chart_series(predictions: &[Prediction]) -> Vec<ChartPoint> {
    predictions
        .iter()
        .map(|p| ChartPoint {
            label: format!("{} @ {}", p.away_team.nickname(), p.home_team.nickname()),
            home_prob: percent(p.home_win_prob),
            away_prob: percent(p.away_win_prob),
        })
        .collect()
}

/// Home/away split of the first prediction, or nothing if there is none.
pub fn lead_pie_slices(predictions: &[Prediction]) -> Vec<PieSlice> {
    let Some(lead) = predictions.first() else {
        return Vec::new();
    };
    vec![
        PieSlice {
            name: lead.home_team.nickname(),
            value: lead.home_win_prob * 100.0,
        },
        PieSlice {
            name: lead.away_team.nickname(),
            value: lead.away_win_prob * 100.0,
        },
    ]
}

pub fn game_card(p: &Prediction) -> GameCard {
    GameCard {
        id: p.id,
        kickoff: p.kickoff_display(),
        confidence_pct: (p.confidence * 100.0).round() as u32,
        away_team: p.away_team.name(),
        home_team: p.home_team.name(),
        away_score: p.predicted_score.away,
        home_score: p.predicted_score.home,
        spread: "–",
        away_bar_pct: bar_width(p.away_win_prob),
        home_bar_pct: bar_width(p.home_win_prob),
        away_label: format!("Away win: {:.1}%", p.away_win_prob * 100.0),
        home_label: format!("Home win: {:.1}%", p.home_win_prob * 100.0),
    }
}

fn bar_width(prob: f64) -> f64 {
    (prob * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{predictions, PredictedScore, Team};
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn make_prediction(id: u32, home_win_prob: f64, status: GameStatus) -> Prediction {
        Prediction {
            id,
            home_team: Team::DallasCowboys,
            away_team: Team::SanFrancisco49ers,
            home_win_prob,
            away_win_prob: 1.0 - home_win_prob,
            predicted_score: PredictedScore { home: 20, away: 17 },
            confidence: 0.5,
            kickoff: NaiveDate::from_ymd_opt(2024, 9, 8)
                .unwrap()
                .and_hms_opt(13, 0, 0)
                .unwrap(),
            status,
        }
    }

    #[test]
    fn upcoming_excludes_completed_games() {
        let ids: Vec<u32> = list_upcoming(predictions()).map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn upcoming_preserves_order() {
        let list = vec![
            make_prediction(9, 0.5, GameStatus::Upcoming),
            make_prediction(4, 0.5, GameStatus::Completed),
            make_prediction(2, 0.5, GameStatus::Upcoming),
        ];
        let ids: Vec<u32> = list_upcoming(&list).map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 2]);
    }

    #[test]
    fn chart_series_covers_every_prediction_in_order() {
        let series = chart_series(predictions());
        assert_eq!(series.len(), predictions().len());
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Bills @ Chiefs", "Cowboys @ 49ers", "Buccaneers @ Eagles"]
        );
        assert_relative_eq!(series[0].home_prob, 65.0);
        assert_relative_eq!(series[0].away_prob, 35.0);
        assert_relative_eq!(series[2].away_prob, 28.0);
    }

    #[test]
    fn lead_slices_use_first_prediction() {
        let slices = lead_pie_slices(predictions());
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].name, "Chiefs");
        assert_eq!(slices[1].name, "Bills");
        assert_relative_eq!(slices[0].value, 65.0, epsilon = 1e-9);
        assert_relative_eq!(slices[1].value, 35.0, epsilon = 1e-9);
    }

    #[test]
    fn lead_slices_empty_without_predictions() {
        assert!(lead_pie_slices(&[]).is_empty());
    }

    #[test]
    fn card_formats_confidence_and_bars() {
        let card = game_card(&predictions()[0]);
        assert_eq!(card.confidence_pct, 82);
        assert_eq!(card.kickoff, "2024-01-15 8:00 PM");
        assert_eq!(card.away_team, "Buffalo Bills");
        assert_eq!((card.home_score, card.away_score), (28, 24));
        assert_relative_eq!(card.home_bar_pct, 65.0, epsilon = 1e-9);
        assert_eq!(card.home_label, "Home win: 65.0%");
        assert_eq!(card.away_label, "Away win: 35.0%");
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_relative_eq!(bar_width(1.2), 100.0);
        assert_relative_eq!(bar_width(-0.1), 0.0);
    }

    #[test]
    fn view_bundles_only_upcoming_cards() {
        let view = DashboardView::build(predictions());
        assert_eq!(view.upcoming.len(), 2);
        assert_eq!(view.chart.len(), 3);
        assert_eq!(view.panels[1].title, "Engine");
    }
}
