//! Reference scoring service
//!
//! Serves the endpoint the form client talks to: `POST /api/predict`
//! computes the BMI and returns the diet plan for its category,
//! `GET /api/health` and `GET /api/bmi-categories` are informational.

pub mod diet;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::Value;
use std::net::SocketAddr;
use tracing::{debug, info};

use crate::core::category::BmiCategory;
use crate::core::input::{HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};
use crate::core::payload::{CategoriesResponse, HealthStatus, ResultPayload};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: gender, height, weight";
pub const HEIGHT_RANGE_MESSAGE: &str = "Height must be between 100-250 cm";
pub const WEIGHT_RANGE_MESSAGE: &str = "Weight must be between 30-300 kg";
pub const INVALID_VALUES_MESSAGE: &str = "Invalid input values";

type ApiResult = Result<Json<ResultPayload>, (StatusCode, Json<ResultPayload>)>;

pub fn router() -> Router {
    Router::new()
        .route("/api/predict", post(predict))
        .route("/api/health", get(health))
        .route("/api/bmi-categories", get(categories))
}

pub async fn run(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "scoring service listening");
    axum::serve(listener, router()).await?;
    Ok(())
}

fn bad_request(message: &str) -> (StatusCode, Json<ResultPayload>) {
    (StatusCode::BAD_REQUEST, Json(ResultPayload::failure(message)))
}

/// Numbers are accepted as JSON numbers or numeric strings.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

async fn predict(body: Result<Json<Value>, JsonRejection>) -> ApiResult {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "unreadable predict body");
            return Err(bad_request(&rejection.body_text()));
        }
    };

    let (Some(gender), Some(height), Some(weight)) =
        (body.get("gender"), body.get("height"), body.get("weight"))
    else {
        return Err(bad_request(MISSING_FIELDS_MESSAGE));
    };

    let (Some(height), Some(weight)) = (as_number(height), as_number(weight)) else {
        return Err(bad_request(INVALID_VALUES_MESSAGE));
    };

    if !HEIGHT_RANGE_CM.contains(&height) {
        return Err(bad_request(HEIGHT_RANGE_MESSAGE));
    }

    if !WEIGHT_RANGE_KG.contains(&weight) {
        return Err(bad_request(WEIGHT_RANGE_MESSAGE));
    }

    let bmi = diet::calculate_bmi(height, weight);
    let category = BmiCategory::from_bmi(bmi);
    debug!(%gender, height, weight, bmi, category = category.label(), "scored submission");

    Ok(Json(ResultPayload::success(
        bmi,
        category.label().to_string(),
        diet::diet_plan(category),
    )))
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        model_loaded: false,
    })
}

async fn categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: diet::category_rows(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::json;
    use tower::ServiceExt;

    async fn post_predict(body: Value) -> (StatusCode, ResultPayload) {
        post_raw(body.to_string()).await
    }

    async fn post_raw(body: String) -> (StatusCode, ResultPayload) {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/predict")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .expect("request"),
            )
            .await
            .expect("response");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        (status, serde_json::from_slice(&bytes).expect("json"))
    }

    #[tokio::test]
    async fn predict_returns_plan_for_category() {
        let (status, payload) =
            post_predict(json!({"gender": "female", "height": 160, "weight": 45})).await;

        assert_eq!(status, StatusCode::OK);
        assert!(payload.success);
        assert_eq!(payload.bmi, Some(17.6));
        assert_eq!(payload.category.as_deref(), Some("Underweight"));
        let details = payload.diet_details.expect("details");
        assert_eq!(details.bmi_range, "Below 18.5");
        assert_eq!(details.foods_to_include.len(), 8);
    }

    #[tokio::test]
    async fn predict_accepts_numeric_strings() {
        let (status, payload) =
            post_predict(json!({"gender": "male", "height": "170", "weight": "100"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.category.as_deref(), Some("Obese"));
    }

    #[tokio::test]
    async fn predict_rejects_missing_fields() {
        let (status, payload) = post_predict(json!({"gender": "male", "height": 170})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!payload.success);
        assert_eq!(payload.error.as_deref(), Some(MISSING_FIELDS_MESSAGE));
    }

    #[tokio::test]
    async fn predict_rejects_non_numeric_values() {
        let (status, payload) =
            post_predict(json!({"gender": "male", "height": "tall", "weight": 70})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload.error.as_deref(), Some(INVALID_VALUES_MESSAGE));
    }

    #[tokio::test]
    async fn predict_checks_height_before_weight() {
        let (_, payload) =
            post_predict(json!({"gender": "male", "height": 99, "weight": 500})).await;
        assert_eq!(payload.error.as_deref(), Some(HEIGHT_RANGE_MESSAGE));

        let (_, payload) =
            post_predict(json!({"gender": "male", "height": 250, "weight": 301})).await;
        assert_eq!(payload.error.as_deref(), Some(WEIGHT_RANGE_MESSAGE));
    }

    #[tokio::test]
    async fn predict_answers_malformed_json_with_failure_payload() {
        let (status, payload) = post_raw("{\"gender\": \"male\", ".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!payload.success);
        assert!(payload.error.is_some_and(|error| !error.is_empty()));
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let health: HealthStatus = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(health.status, "healthy");
    }
}
