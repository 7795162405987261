use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod pages;
pub mod shell;

use crate::data;
use crate::views::{ComparisonState, ComparisonView, DashboardView, SimulationState};
use api::{ApiError, SimulationPayload};
use shell::{render_page, Route};

#[derive(Clone)]
pub struct AppState {
    /// Teams preselected on the comparison view
    pub default_pair: ComparisonState,
    /// Attach a permissive CORS layer to `/api`
    pub permissive_cors: bool,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            default_pair: ComparisonState::default(),
            permissive_cors: true,
        }
    }
}

/// Build the Axum router: the three views, the JSON API and a 404 fallback.
pub fn router(state: AppState) -> Router {
    let mut api: Router<Arc<AppState>> = Router::new()
        .route("/predictions", get(api::predictions_handler))
        .route("/dashboard", get(api::dashboard_handler))
        .route("/teams", get(api::teams_handler))
        .route("/comparison", get(api::comparison_handler))
        .route(
            "/simulation",
            get(api::simulation_handler).post(api::transition_handler),
        )
        .route("/simulation/quarters", get(api::quarters_handler));
    if state.permissive_cors {
        api = api.layer(CorsLayer::permissive());
    }

    Router::new()
        .route(Route::Dashboard.path(), get(dashboard_page))
        .route(Route::Comparison.path(), get(comparison_page))
        .route(Route::Simulation.path(), get(simulation_page))
        .nest("/api", api)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// GET /
async fn dashboard_page() -> Result<Html<String>, ApiError> {
    let view = DashboardView::build(data::predictions());
    Ok(Html(render_page(
        Some(Route::Dashboard),
        pages::DASHBOARD_BODY,
        &view,
    )?))
}

/// GET /comparison
async fn comparison_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let view = ComparisonView::build(&state.default_pair);
    Ok(Html(render_page(
        Some(Route::Comparison),
        pages::COMPARISON_BODY,
        &view,
    )?))
}

/// GET /simulation
async fn simulation_page() -> Result<Html<String>, ApiError> {
    let payload = SimulationPayload::new(SimulationState::default());
    Ok(Html(render_page(
        Some(Route::Simulation),
        pages::SIMULATION_BODY,
        &payload,
    )?))
}

/// Fallback: a trailing slash on a view path redirects to the view, anything
/// else is a 404 page.
async fn not_found(uri: Uri) -> Result<Response, ApiError> {
    let path = uri.path();
    if path.len() > 1 {
        if let Some(route) = Route::from_path(path.trim_end_matches('/')) {
            return Ok(Redirect::permanent(route.path()).into_response());
        }
    }
    let html = render_page(None, &shell::not_found_body(path), &())?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    /// Serve the router on an ephemeral port and return its base URL.
    async fn spawn_app(state: AppState) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn each_route_mounts_its_view() {
        let base = spawn_app(AppState::default()).await;
        for (path, marker) in [
            ("/", "Upcoming game projections"),
            ("/comparison", "Team Analysis &amp; Comparison"),
            ("/simulation", "Markov Chain Decision Tree - 4 Quarter Simulation"),
        ] {
            let resp = reqwest::get(format!("{}{}", base, path)).await.unwrap();
            assert_eq!(resp.status(), 200, "GET {}", path);
            let html = resp.text().await.unwrap();
            assert!(html.contains(marker), "GET {} missing {:?}", path, marker);
            assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        }
    }

    #[tokio::test]
    async fn simulation_page_renders_summary_and_error_slot() {
        let base = spawn_app(AppState::default()).await;
        let html = reqwest::get(format!("{}/simulation", base))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(html.contains("Predicted Winner"));
        assert!(html.contains(r#""predicted_winner":"Kansas City Chiefs""#));
        assert!(html.contains(r#"id="simulation-error""#));
        assert!(!html.contains("e.team"));
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let base = spawn_app(AppState::default()).await;
        let resp = reqwest::get(format!("{}/standings", base)).await.unwrap();
        assert_eq!(resp.status(), 404);
        let html = resp.text().await.unwrap();
        assert!(html.contains("Page not found"));
        assert!(!html.contains("aria-current"));
    }

    #[tokio::test]
    async fn trailing_slash_redirects_to_view() {
        let base = spawn_app(AppState::default()).await;
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();
        let resp = client
            .get(format!("{}/simulation/", base))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 308);
        assert_eq!(resp.headers()["location"], "/simulation");
    }

    #[tokio::test]
    async fn dashboard_api_lists_upcoming_games() {
        let base = spawn_app(AppState::default()).await;
        let view: Value = reqwest::get(format!("{}/api/dashboard", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let ids: Vec<u64> = view["upcoming"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(view["chart"][0]["label"], "Bills @ Chiefs");
        assert_eq!(view["lead_slices"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn predictions_api_serializes_fixture() {
        let base = spawn_app(AppState::default()).await;
        let list: Value = reqwest::get(format!("{}/api/predictions", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(list.as_array().unwrap().len(), 3);
        assert_eq!(list[0]["home_team"], "Kansas City Chiefs");
        assert_eq!(list[0]["kickoff"], "2024-01-15 8:00 PM");
        assert_eq!(list[2]["status"], "completed");
    }

    #[tokio::test]
    async fn comparison_api_uses_configured_defaults_and_query() {
        let base = spawn_app(AppState {
            default_pair: ComparisonState::new(
                data::Team::PhiladelphiaEagles,
                data::Team::DallasCowboys,
            ),
            permissive_cors: false,
        })
        .await;
        let client = reqwest::Client::new();

        let view: Value = client
            .get(format!("{}/api/comparison", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(view["team1"], "Philadelphia Eagles");
        assert_eq!(view["series"], json!(["Eagles", "Cowboys"]));

        let view: Value = client
            .get(format!("{}/api/comparison", base))
            .query(&[("team2", "Philadelphia Eagles")])
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(view["rows"][0]["team1"], view["rows"][0]["team2"]);
    }

    #[tokio::test]
    async fn comparison_api_rejects_unknown_team() {
        let base = spawn_app(AppState::default()).await;
        let resp = reqwest::Client::new()
            .get(format!("{}/api/comparison", base))
            .query(&[("team1", "Green Bay Packers")])
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("Green Bay Packers"));
    }

    #[tokio::test]
    async fn simulation_api_round_trips_state() {
        let base = spawn_app(AppState::default()).await;
        let client = reqwest::Client::new();
        let url = format!("{}/api/simulation", base);

        let initial: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
        assert_eq!(
            initial["state"],
            json!({ "current_quarter": 1, "is_simulating": false, "game_time_secs": 900 })
        );
        assert_eq!(initial["view"]["clock"], "15:00");

        let next: Value = client
            .post(&url)
            .json(&json!({
                "state": initial["state"],
                "action": { "type": "select_quarter", "quarter": 4 }
            }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(next["state"]["current_quarter"], 4);
        assert_eq!(next["view"]["scoreboard"]["home_score"], 28);
        assert_eq!(next["view"]["scoreboard"]["away_score"], 24);

        let started: Value = client
            .post(&url)
            .json(&json!({ "state": next["state"], "action": { "type": "start" } }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(started["state"]["is_simulating"], true);
        assert_eq!(started["view"]["can_start"], false);

        let reset: Value = client
            .post(&url)
            .json(&json!({ "state": started["state"], "action": { "type": "reset" } }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(reset["state"], initial["state"]);
    }

    #[tokio::test]
    async fn simulation_api_rejects_quarter_five() {
        let base = spawn_app(AppState::default()).await;
        let resp = reqwest::Client::new()
            .post(format!("{}/api/simulation", base))
            .json(&json!({ "action": { "type": "select_quarter", "quarter": 5 } }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
    }

    #[tokio::test]
    async fn quarters_api_returns_four_records() {
        let base = spawn_app(AppState::default()).await;
        let quarters: Value = reqwest::get(format!("{}/api/simulation/quarters", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(quarters.as_array().unwrap().len(), 4);
        assert_eq!(quarters[0]["events"][0]["event"], "Kickoff");
        assert!(quarters[0]["events"][0].get("score").is_none());
    }

    #[tokio::test]
    async fn teams_api_lists_dropdown_order() {
        let base = spawn_app(AppState::default()).await;
        let teams: Vec<String> = reqwest::get(format!("{}/api/teams", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(teams.len(), 6);
        assert_eq!(teams[0], "Kansas City Chiefs");
        assert_eq!(teams[5], "Tampa Bay Buccaneers");
    }
}
