pub mod http;

use crate::core::payload::{CategoryRow, HealthStatus, PredictRequest, ResultPayload};
use crate::utils::error::AppResult;
use async_trait::async_trait;

pub use self::http::HttpScoringClient;

/// Remote side of a submission: computes the BMI and picks the diet plan.
#[async_trait]
pub trait ScoringService: Send + Sync {
    async fn predict(&self, request: &PredictRequest) -> AppResult<ResultPayload>;
    async fn health(&self) -> AppResult<HealthStatus>;
    async fn categories(&self) -> AppResult<Vec<CategoryRow>>;
}
