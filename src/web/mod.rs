use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::{
    alerts::generate::{AlertGenerator, RunSummary},
    config::Config,
    models::{alert::Alert, alert::AlertStatus, filter::Filter, profile::Profile},
    services,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<AlertGenerator>,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

#[derive(Deserialize)]
pub struct QueryUser {
    pub user_id: i32,
}

#[derive(Deserialize)]
pub struct CreateFilterRequest {
    pub user_id: i32,
    pub city: String,
    pub max_price: i32,
    pub min_rooms: i32,
}

#[derive(Deserialize)]
pub struct UpdateFilterRequest {
    pub user_id: i32,
    pub city: String,
    pub max_price: i32,
    pub min_rooms: i32,
}

#[derive(Deserialize)]
pub struct UpdateAlertStatusRequest {
    pub user_id: i32,
    pub status: AlertStatus,
}

#[derive(Deserialize)]
pub struct UpdateNotificationSettingsRequest {
    pub user_id: i32,
    pub email_notifications: bool,
}

#[derive(Serialize)]
pub struct FiltersResponse {
    pub filters: Vec<Filter>,
}

#[derive(Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
}

#[derive(Serialize)]
pub struct RunAlertsResponse {
    pub success: bool,
    pub summary: RunSummary,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/run-alerts", get(run_alerts))
        .route("/api/filters", get(list_filters).post(create_filter))
        .route(
            "/api/filters/:id",
            put(update_filter).delete(delete_filter),
        )
        .route("/api/filters/:id/toggle", post(toggle_filter))
        .route("/api/alerts", get(list_alerts))
        .route("/api/alerts/:id/status", put(update_alert_status))
        .route("/api/profile", get(get_profile))
        .route(
            "/api/profile/notifications",
            put(update_notification_settings),
        )
        .layer(middleware::from_fn(cors_layer))
        .with_state(state)
}

pub async fn start_http_server(
    state: AppState,
    mut shutdown_rx: tokio::sync::broadcast::Receiver<()>,
) {
    let bind_addr = state
        .config
        .http_bind_address
        .clone()
        .unwrap_or_else(|| "0.0.0.0:8080".to_string());

    let listener = TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|err| panic!("failed to bind http listener on {}: {}", bind_addr, err));
    let app = router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .expect("HTTP server crashed");
}

async fn cors_layer(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = Response::new(axum::body::Body::empty());
        apply_cors_headers(response.headers_mut());
        *response.status_mut() = StatusCode::NO_CONTENT;
        response
    } else {
        let mut response = next.run(req).await;
        apply_cors_headers(response.headers_mut());
        response
    }
}

fn apply_cors_headers(headers: &mut axum::http::HeaderMap) {
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
}

/// Manual trigger. Always 200: per-item failures inside the run live in
/// the summary counters, not the HTTP status.
async fn run_alerts(State(state): State<AppState>) -> Json<RunAlertsResponse> {
    let summary = state.generator.generate_alerts().await;
    Json(RunAlertsResponse {
        success: true,
        summary,
    })
}

async fn list_filters(
    State(state): State<AppState>,
    axum::extract::Query(QueryUser { user_id }): axum::extract::Query<QueryUser>,
) -> Result<Json<ApiResponse<FiltersResponse>>, StatusCode> {
    services::filters::list(&state.config, user_id)
        .map(|filters| {
            Json(ApiResponse {
                data: FiltersResponse { filters },
            })
        })
        .map_err(|_| StatusCode::BAD_REQUEST)
}

async fn create_filter(
    State(state): State<AppState>,
    Json(body): Json<CreateFilterRequest>,
) -> Result<Json<ApiResponse<Filter>>, StatusCode> {
    services::filters::create(
        &state.config,
        body.user_id,
        &body.city,
        body.max_price,
        body.min_rooms,
    )
    .map(|filter| Json(ApiResponse { data: filter }))
    .map_err(|_| StatusCode::BAD_REQUEST)
}

async fn update_filter(
    State(state): State<AppState>,
    axum::extract::Path(id): axum::extract::Path<i32>,
    Json(body): Json<UpdateFilterRequest>,
) -> Result<Json<ApiResponse<Filter>>, StatusCode> {
    // invalid payloads are the caller's fault; a missing/foreign filter is not
    if services::filters::validate(&body.city, body.max_price, body.min_rooms).is_err() {
        return Err(StatusCode::BAD_REQUEST);
    }

    services::filters::update(
        &state.config,
        body.user_id,
        id,
        &body.city,
        body.max_price,
        body.min_rooms,
    )
    .map(|filter| Json(ApiResponse { data: filter }))
    .map_err(|_| StatusCode::NOT_FOUND)
}

async fn toggle_filter(
    State(state): State<AppState>,
    axum::extract::Path(id): axum::extract::Path<i32>,
    axum::extract::Query(QueryUser { user_id }): axum::extract::Query<QueryUser>,
) -> Result<Json<ApiResponse<Filter>>, StatusCode> {
    services::filters::toggle(&state.config, user_id, id)
        .map(|filter| Json(ApiResponse { data: filter }))
        .map_err(|_| StatusCode::NOT_FOUND)
}

async fn delete_filter(
    State(state): State<AppState>,
    axum::extract::Path(id): axum::extract::Path<i32>,
    axum::extract::Query(QueryUser { user_id }): axum::extract::Query<QueryUser>,
) -> StatusCode {
    match services::filters::delete(&state.config, user_id, id) {
        Ok(_) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::NOT_FOUND,
    }
}

async fn list_alerts(
    State(state): State<AppState>,
    axum::extract::Query(QueryUser { user_id }): axum::extract::Query<QueryUser>,
) -> Result<Json<ApiResponse<AlertsResponse>>, StatusCode> {
    services::alerts::list(&state.config, user_id)
        .map(|alerts| {
            Json(ApiResponse {
                data: AlertsResponse { alerts },
            })
        })
        .map_err(|_| StatusCode::BAD_REQUEST)
}

async fn update_alert_status(
    State(state): State<AppState>,
    axum::extract::Path(id): axum::extract::Path<i32>,
    Json(body): Json<UpdateAlertStatusRequest>,
) -> StatusCode {
    let result = match body.status {
        AlertStatus::NotInterested => {
            services::alerts::mark_not_interested(&state.config, body.user_id, id)
        }
        AlertStatus::Active => services::alerts::restore(&state.config, body.user_id, id),
    };

    match result {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::NOT_FOUND,
    }
}

async fn get_profile(
    State(state): State<AppState>,
    axum::extract::Query(QueryUser { user_id }): axum::extract::Query<QueryUser>,
) -> Result<Json<ApiResponse<Profile>>, StatusCode> {
    services::profile::get(&state.config, user_id)
        .map(|profile| Json(ApiResponse { data: profile }))
        .map_err(|_| StatusCode::BAD_REQUEST)
}

async fn update_notification_settings(
    State(state): State<AppState>,
    Json(body): Json<UpdateNotificationSettingsRequest>,
) -> StatusCode {
    match services::profile::set_email_notifications(
        &state.config,
        body.user_id,
        body.email_notifications,
    ) {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::BAD_REQUEST,
    }
}
