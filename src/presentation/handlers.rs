// HTTP request handlers
use crate::application::streaming_service::stream_dashboard as stream_view;
use crate::domain::filter::FilterSelection;
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, csv_download, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Response, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../../static/index.html");

fn respond(result: Result<Response<Body>, StatusCode>) -> Response<Body> {
    match result {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Dashboard page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Option lists and current selection for the filter widgets
pub async fn filter_options(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let options = state.controller.lock().await.options();
    respond(json_response(&options, accepts_brotli(&headers)).await)
}

/// Current rendering without changing anything
pub async fn current_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let view = state.controller.lock().await.snapshot();
    respond(json_response(&view, accepts_brotli(&headers)).await)
}

/// Any filter control changed
pub async fn apply_filters(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(selection): Json<FilterSelection>,
) -> impl IntoResponse {
    let view = {
        let mut controller = state.controller.lock().await;
        controller.apply(selection);
        tracing::info!(
            "Filters applied (metric={}): {} records, chart revision {}",
            controller.selection().metric,
            controller.filtered().len(),
            controller.charts().revision
        );
        controller.snapshot()
    };
    respond(json_response(&view, accepts_brotli(&headers)).await)
}

pub async fn reset_filters(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let view = {
        let mut controller = state.controller.lock().await;
        controller.reset();
        controller.snapshot()
    };
    respond(json_response(&view, accepts_brotli(&headers)).await)
}

/// Stream the current rendering progressively
pub async fn stream_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let view = state.controller.lock().await.snapshot();
    stream_from_receiver(stream_view(view))
}

/// CSV download of the current filtered view
pub async fn export_csv(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let today = chrono::Utc::now().date_naive();
    let export = state
        .controller
        .lock()
        .await
        .export(&state.export_filename_template, today);

    tracing::info!("Exporting {} ({} bytes)", export.filename, export.body.len());
    respond(csv_download(export, accepts_brotli(&headers)).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_controller::DashboardController;
    use crate::application::loader::LoadOutcome;
    use crate::domain::filter::Metric;
    use crate::domain::sprint::{record, Dataset};
    use axum::http::header;

    fn state() -> Arc<AppState> {
        let controller = DashboardController::new(LoadOutcome {
            dataset: Dataset::new(vec![record("A", "S1", 90.0), record("B", "S1", 60.0)]),
            failure: None,
        });
        Arc::new(AppState::new(controller, "sprint-data-${date}.csv".to_string()))
    }

    async fn json_body(response: impl IntoResponse) -> serde_json::Value {
        let response = response.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_initial_dashboard() {
        let body = json_body(current_dashboard(HeaderMap::new(), State(state())).await).await;

        assert_eq!(body["totalRecords"], 2);
        assert_eq!(body["filteredRecords"], 2);
        assert_eq!(body["cards"]["avgCompletion"], "75.0%");
        assert_eq!(body["charts"]["panels"].as_array().unwrap().len(), 6);
        assert_eq!(body["rows"][0]["completionClass"], "completion-high");
        assert!(body["loadFailure"].is_null());
    }

    #[tokio::test]
    async fn test_filter_options() {
        let body = json_body(filter_options(HeaderMap::new(), State(state())).await).await;
        assert_eq!(body["teams"], serde_json::json!(["A", "B"]));
        assert_eq!(body["sprints"], serde_json::json!(["S1"]));
        assert_eq!(
            body["metrics"],
            serde_json::json!(["all", "storyPoints", "defects", "userStories"])
        );
    }

    #[tokio::test]
    async fn test_apply_then_reset() {
        let state = state();
        let selection = FilterSelection::new(vec!["B".to_string()], Vec::new(), Metric::Defects);

        let body = json_body(
            apply_filters(HeaderMap::new(), State(state.clone()), Json(selection)).await,
        )
        .await;
        assert_eq!(body["filteredRecords"], 1);
        assert_eq!(body["selection"]["metric"], "defects");
        assert_eq!(body["charts"]["panels"][3]["visible"], false);
        assert!(body["charts"]["panels"][3]["chart"].is_null());

        let body = json_body(reset_filters(HeaderMap::new(), State(state)).await).await;
        assert_eq!(body["filteredRecords"], 2);
        assert_eq!(body["selection"]["metric"], "all");
        assert_eq!(body["selection"]["teams"], serde_json::json!(["A", "B"]));
    }

    #[tokio::test]
    async fn test_page_load_discards_previous_filters() {
        let state = state();
        let selection = FilterSelection::new(vec!["B".to_string()], Vec::new(), Metric::Defects);
        let _ = apply_filters(HeaderMap::new(), State(state.clone()), Json(selection)).await;

        // What a freshly loaded page requests before drawing
        let view = json_body(reset_filters(HeaderMap::new(), State(state.clone())).await).await;
        let options = json_body(filter_options(HeaderMap::new(), State(state.clone())).await).await;

        assert_eq!(view["filteredRecords"], 2);
        assert_eq!(view["totalRecords"], 2);
        assert_eq!(view["cards"]["avgCompletion"], "75.0%");
        assert_eq!(view["selection"]["metric"], "all");
        assert_eq!(view["charts"]["panels"][4]["visible"], true);
        assert_eq!(options["selection"]["teams"], options["teams"]);

        let response = export_csv(HeaderMap::new(), State(state)).await.into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(String::from_utf8(body.to_vec()).unwrap().lines().count(), 3);
    }

    #[tokio::test]
    async fn test_export_download() {
        let state = state();
        let selection = FilterSelection::new(vec!["A".to_string()], Vec::new(), Metric::All);
        let _ = apply_filters(HeaderMap::new(), State(state.clone()), Json(selection)).await;

        let response = export_csv(HeaderMap::new(), State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"sprint-data-"));
        assert!(disposition.ends_with(".csv\""));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let csv = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(csv.lines().count(), 2);
    }

    #[tokio::test]
    async fn test_stream_emits_ndjson() {
        let response = stream_dashboard(State(state())).await.into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();

        let types: Vec<String> = text
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["type"].to_string())
            .collect();
        assert_eq!(types.first().map(String::as_str), Some("\"skeleton\""));
        assert_eq!(types.last().map(String::as_str), Some("\"complete\""));
        assert_eq!(types.len(), 10);
    }

    #[tokio::test]
    async fn test_index_page_has_mount_points() {
        let Html(page) = index().await;
        for id in ["teamFilter", "sprintFilter", "metricFilter", "tableBody", "avgCompletion"] {
            assert!(page.contains(&format!("id=\"{}\"", id)), "missing #{}", id);
        }
    }

    #[tokio::test]
    async fn test_index_page_resets_on_load_and_drops_stale_views() {
        let Html(page) = index().await;
        assert!(page.contains("const initial = await post('/api/reset');"));
        assert!(page.contains("render(initial);"));
        assert!(!page.contains("fetch('/api/dashboard')"));
        assert!(page.contains("const request = ++latestRequest;"));
        assert!(page.contains("if (request === latestRequest)"));
    }
}
