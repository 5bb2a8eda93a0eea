//! HTTP surface: the dashboard page, the dropdown options and the chart
//! recomputation endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::dashboard::{ChartUpdate, Dashboard, DropdownOption};
use crate::error::DashError;
use crate::selection::Selection;
use crate::visualization::{self, PageConfig, CHARTS_ENDPOINT};

/// Shared state for the handlers. The page is rendered once, at startup,
/// since it only depends on the immutable dataset.
#[derive(Clone)]
pub struct AppState {
    dashboard: Dashboard,
    page: Arc<str>,
}

impl AppState {
    pub fn new(dashboard: Dashboard, page_config: &PageConfig) -> Result<Self, DashError> {
        let page = visualization::render_page(&dashboard, page_config)?;
        Ok(Self {
            dashboard,
            page: page.into(),
        })
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }
}

/// Selection-changed event as posted by the page.
#[derive(Debug, Deserialize)]
pub struct ChartsRequest {
    #[serde(default)]
    pub countries: Selection,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/countries", get(countries))
        .route(CHARTS_ENDPOINT, post(charts))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(st): State<AppState>) -> Html<String> {
    Html(st.page.to_string())
}

async fn health() -> impl IntoResponse {
    Json(json!({"ok": true}))
}

async fn countries(State(st): State<AppState>) -> Json<Vec<DropdownOption>> {
    Json(st.dashboard.dropdown_options())
}

async fn charts(
    State(st): State<AppState>,
    Json(req): Json<ChartsRequest>,
) -> Result<Json<ChartUpdate>, DashError> {
    let update = st.dashboard.on_selection_changed(req.countries)?;
    Ok(Json(update))
}
