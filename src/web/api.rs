//! JSON endpoints under `/api`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use super::AppState;
use crate::data::{self, Prediction, QuarterRecord, Team, UnknownTeam};
use crate::views::{
    Action, ComparisonState, ComparisonView, DashboardView, Quarter, SimulationState,
    SimulationView,
};

/// Errors surfaced to API callers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    UnknownTeam(#[from] UnknownTeam),

    #[error("quarter must be between 1 and 4, got {0}")]
    InvalidQuarter(u8),

    #[error("failed to render view: {0}")]
    Render(#[from] serde_json::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownTeam(_) | ApiError::InvalidQuarter(_) => StatusCode::BAD_REQUEST,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("Request rejected ({}): {}", status, self);
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// GET /api/predictions
pub async fn predictions_handler() -> Json<&'static [Prediction]> {
    Json(data::predictions())
}

/// GET /api/dashboard
pub async fn dashboard_handler() -> Json<DashboardView> {
    Json(DashboardView::build(data::predictions()))
}

/// GET /api/teams
pub async fn teams_handler() -> Json<Vec<&'static str>> {
    Json(Team::ALL.iter().map(|t| t.name()).collect())
}

#[derive(Debug, Default, Deserialize)]
pub struct ComparisonQuery {
    pub team1: Option<String>,
    pub team2: Option<String>,
}

impl ComparisonQuery {
    /// Apply the requested teams over `base`; absent parameters keep its picks.
    pub fn resolve(&self, base: ComparisonState) -> Result<ComparisonState, UnknownTeam> {
        let mut selection = base;
        if let Some(name) = self.team1.as_deref() {
            selection.select_team1(name.parse()?);
        }
        if let Some(name) = self.team2.as_deref() {
            selection.select_team2(name.parse()?);
        }
        Ok(selection)
    }
}

/// GET /api/comparison?team1=..&team2=..
pub async fn comparison_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ComparisonQuery>,
) -> Result<Json<ComparisonView>, ApiError> {
    let selection = query.resolve(state.default_pair)?;
    debug!("Comparing {} vs {}", selection.team1, selection.team2);
    Ok(Json(ComparisonView::build(&selection)))
}

/// Current simulation state plus everything derived from it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationPayload {
    pub state: SimulationState,
    pub view: SimulationView,
}

impl SimulationPayload {
    pub fn new(state: SimulationState) -> Self {
        SimulationPayload {
            view: SimulationView::build(&state),
            state,
        }
    }
}

/// Simulation state as the browser sends it back
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StateRequest {
    pub current_quarter: u8,
    pub is_simulating: bool,
    pub game_time_secs: u32,
}

impl TryFrom<StateRequest> for SimulationState {
    type Error = ApiError;

    fn try_from(req: StateRequest) -> Result<Self, Self::Error> {
        Ok(SimulationState {
            current_quarter: quarter(req.current_quarter)?,
            is_simulating: req.is_simulating,
            game_time_secs: req.game_time_secs,
        })
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionRequest {
    SelectQuarter { quarter: u8 },
    Start,
    Reset,
}

impl TryFrom<ActionRequest> for Action {
    type Error = ApiError;

    fn try_from(req: ActionRequest) -> Result<Self, Self::Error> {
        Ok(match req {
            ActionRequest::SelectQuarter { quarter: q } => Action::SelectQuarter(quarter(q)?),
            ActionRequest::Start => Action::Start,
            ActionRequest::Reset => Action::Reset,
        })
    }
}

fn quarter(n: u8) -> Result<Quarter, ApiError> {
    Quarter::new(n).ok_or(ApiError::InvalidQuarter(n))
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TransitionRequest {
    /// Omitted on a fresh page; the initial state is assumed.
    #[serde(default)]
    pub state: Option<StateRequest>,
    pub action: ActionRequest,
}

/// GET /api/simulation
pub async fn simulation_handler() -> Json<SimulationPayload> {
    Json(SimulationPayload::new(SimulationState::default()))
}

/// POST /api/simulation
pub async fn transition_handler(
    Json(req): Json<TransitionRequest>,
) -> Result<Json<SimulationPayload>, ApiError> {
    let mut state = match req.state {
        Some(s) => SimulationState::try_from(s)?,
        None => SimulationState::default(),
    };
    let action = Action::try_from(req.action)?;
    state.apply(action);
    debug!("Simulation {:?} -> {:?}", action, state);
    Ok(Json(SimulationPayload::new(state)))
}

/// GET /api/simulation/quarters
pub async fn quarters_handler() -> Json<&'static [QuarterRecord; 4]> {
    Json(data::quarters())
}
