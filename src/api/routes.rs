use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::TransactionId;
use crate::engine::DecisionEngine;
use crate::observability::MetricsRegistry;

use super::request::AuthorizeRequest;
use super::response::{AuthorizeResponse, ErrorResponse, HealthResponse, ReadyResponse};

/// Shared application state.
pub struct AppState {
    /// Current decision engine (updated via watch channel)
    pub engine_rx: watch::Receiver<Arc<DecisionEngine>>,

    /// Metrics registry
    pub metrics: Arc<MetricsRegistry>,

    /// Application start time
    pub start_time: Instant,

    /// Application version
    pub version: String,

    /// Latency budget in milliseconds
    pub latency_budget_ms: u64,
}

/// Create the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/authorize", post(handle_authorize))
        .route("/health", get(handle_health))
        .route("/ready", get(handle_ready))
        .route("/metrics", get(handle_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle transaction authorization requests.
async fn handle_authorize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AuthorizeRequest>,
) -> axum::response::Response {
    let start = Instant::now();

    // Boundary validation: serde enforced presence, this enforces values
    if let Err(msg) = req.validate() {
        state.metrics.record_validation_failure();
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(msg)),
        )
            .into_response();
    }

    // Assign a transaction id and build the snapshot
    let transaction_id = TransactionId::new();
    let txn = req.to_transaction(transaction_id.clone());

    // Snapshot the current engine; a concurrent reload does not affect
    // this call
    let engine = state.engine_rx.borrow().clone();

    let result = match engine.decide(&txn) {
        Ok(result) => result,
        Err(e) => {
            // The engine's own sanity check; reachable only if boundary
            // validation and the engine disagree
            state.metrics.record_validation_failure();
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response();
        }
    };

    state.metrics.record_decision(&result.decision);
    state
        .metrics
        .record_evaluation(engine.rule_count(), result.faults.len());
    state.metrics.record_latency(start);

    let elapsed = start.elapsed();
    if elapsed.as_millis() > state.latency_budget_ms as u128 {
        warn!(
            transaction_id = %transaction_id,
            latency_ms = elapsed.as_millis() as u64,
            budget_ms = state.latency_budget_ms,
            "Decision latency exceeded budget"
        );
    }

    info!(
        transaction_id = %transaction_id,
        decision = %result.decision,
        reasons = result.reasons.len(),
        latency_ms = elapsed.as_millis() as u64,
        "Decision completed"
    );

    (
        StatusCode::OK,
        Json(AuthorizeResponse::new(
            transaction_id,
            result,
            engine.policy_version().to_string(),
        )),
    )
        .into_response()
}

/// Health check endpoint.
async fn handle_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let engine = state.engine_rx.borrow().clone();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        policy_version: engine.policy_version().to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// Readiness check endpoint.
async fn handle_ready(State(state): State<Arc<AppState>>) -> axum::response::Response {
    let engine = state.engine_rx.borrow().clone();

    // Not ready until a policy with rules is loaded
    if engine.rule_count() == 0 {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::new("No rules loaded", "NOT_READY")),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        Json(ReadyResponse {
            ready: true,
            policy_version: engine.policy_version().to_string(),
            rules: engine.rule_count(),
        }),
    )
        .into_response()
}

/// Metrics endpoint (Prometheus format).
async fn handle_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let engine = state.engine_rx.borrow().clone();

    let mut body = format!(
        r#"# HELP fraudr_uptime_seconds Application uptime in seconds
# TYPE fraudr_uptime_seconds counter
fraudr_uptime_seconds {}

# HELP fraudr_rules Number of rules loaded
# TYPE fraudr_rules gauge
fraudr_rules {}

"#,
        state.start_time.elapsed().as_secs(),
        engine.rule_count(),
    );
    body.push_str(&state.metrics.to_prometheus());

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; charset=utf-8",
        )],
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Policy;

    fn test_app_state() -> Arc<AppState> {
        let yaml = r#"
policy_version: "test-v1"
params:
  max_amount: 100000
  high_value_floor: 50000
rules:
  - id: max_amount_limit
    type: max_amount
    action: DECLINE
    severity: 90
  - id: missing_location
    type: missing_location
    action: REVIEW
    severity: 20
"#;
        let policy: Policy = serde_yaml::from_str(yaml).unwrap();
        let engine = Arc::new(DecisionEngine::from_policy(&policy).unwrap());

        let (_tx, rx) = watch::channel(engine);

        Arc::new(AppState {
            engine_rx: rx,
            metrics: Arc::new(MetricsRegistry::new()),
            start_time: Instant::now(),
            version: "0.1.0-test".to_string(),
            latency_budget_ms: 100,
        })
    }

    fn empty_app_state() -> Arc<AppState> {
        let (_tx, rx) = watch::channel(Arc::new(DecisionEngine::empty()));

        Arc::new(AppState {
            engine_rx: rx,
            metrics: Arc::new(MetricsRegistry::new()),
            start_time: Instant::now(),
            version: "0.1.0-test".to_string(),
            latency_budget_ms: 100,
        })
    }

    fn post_json(uri: &str, body: &str) -> axum::http::Request<axum::body::Body> {
        axum::http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_router(test_app_state());

        let request = axum::http::Request::builder()
            .uri("/health")
            .body(axum::body::Body::empty())
            .unwrap();

        let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_requires_rules() {
        let app = create_router(empty_app_state());

        let request = axum::http::Request::builder()
            .uri("/ready")
            .body(axum::body::Body::empty())
            .unwrap();

        let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_authorize_decline_over_cap() {
        let app = create_router(test_app_state());

        let request = post_json(
            "/v1/authorize",
            r#"{
                "user_id": "user_123",
                "amount": 150000,
                "merchant_id": "merchant_456",
                "timestamp": "2026-02-12T10:00:00Z",
                "location": "IN",
                "device_id": "device_abc"
            }"#,
        );

        let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("\"DECLINE\""));
        assert!(body.contains("Amount exceeds maximum allowed limit"));
        assert!(body.contains("test-v1"));
    }

    #[tokio::test]
    async fn test_authorize_rejects_non_positive_amount() {
        let app = create_router(test_app_state());

        let request = post_json(
            "/v1/authorize",
            r#"{
                "user_id": "user_123",
                "amount": -5,
                "merchant_id": "merchant_456",
                "timestamp": "2026-02-12T10:00:00Z"
            }"#,
        );

        let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_string(response).await;
        assert!(body.contains("BAD_REQUEST"));
    }

    #[tokio::test]
    async fn test_metrics_endpoint_exposes_counters() {
        let app = create_router(test_app_state());

        let request = axum::http::Request::builder()
            .uri("/metrics")
            .body(axum::body::Body::empty())
            .unwrap();

        let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("fraudr_rules 2"));
        assert!(body.contains("fraudr_decisions_total"));
    }
}
