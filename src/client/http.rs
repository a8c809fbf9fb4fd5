use super::ScoringService;
use crate::config::ServiceConfig;
use crate::core::payload::{CategoriesResponse, CategoryRow, HealthStatus, PredictRequest, ResultPayload};
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

const PREDICT_PATH: &str = "/api/predict";
const HEALTH_PATH: &str = "/api/health";
const CATEGORIES_PATH: &str = "/api/bmi-categories";

pub struct HttpScoringClient {
    client: Client,
    config: ServiceConfig,
}

impl HttpScoringClient {
    pub fn new(config: ServiceConfig) -> AppResult<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent(config.user_agent.clone())
                .timeout(config.timeout())
                .build()
                .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?,
            config,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn transport_error(&self, err: reqwest::Error, action: &str) -> AppError {
        if err.is_timeout() {
            AppError::Timeout(self.config.timeout_secs)
        } else {
            AppError::Network(format!("Failed to {}: {}", action, err))
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response, action: &str) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            debug!(%status, body = %error_text, "scoring service returned an error status");
            return Err(AppError::Network(format!("Failed to {}: {}", action, status)));
        }

        response
            .json()
            .await
            .map_err(|e| self.transport_error(e, &format!("parse {} response", action)))
    }
}

#[async_trait]
impl ScoringService for HttpScoringClient {
    async fn predict(&self, request: &PredictRequest) -> AppResult<ResultPayload> {
        let url = self.config.endpoint(PREDICT_PATH);
        debug!(%url, gender = %request.gender, height = request.height, weight = request.weight, "posting prediction");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e, "reach scoring service"))?;

        self.read_json(response, "calculate BMI").await
    }

    async fn health(&self) -> AppResult<HealthStatus> {
        let url = self.config.endpoint(HEALTH_PATH);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e, "reach scoring service"))?;

        self.read_json(response, "check service health").await
    }

    async fn categories(&self) -> AppResult<Vec<CategoryRow>> {
        let url = self.config.endpoint(CATEGORIES_PATH);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e, "reach scoring service"))?;

        let body: CategoriesResponse = self.read_json(response, "list BMI categories").await?;
        Ok(body.categories)
    }
}
