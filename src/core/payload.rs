//! Wire types exchanged with the scoring service.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub gender: String,
    pub height: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietDetails {
    pub category: String,
    pub bmi_range: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub foods_to_include: Vec<String>,
    #[serde(default)]
    pub foods_to_avoid: Vec<String>,
}

/// Body of a `/api/predict` response, for both outcomes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultPayload {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_details: Option<DietDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultPayload {
    pub fn success(bmi: f64, category: String, diet_details: DietDetails) -> Self {
        Self {
            success: true,
            bmi: Some(bmi),
            category: Some(category),
            diet_details: Some(diet_details),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub range: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_payload() {
        let body = r#"{
            "success": true,
            "bmi": 22.9,
            "category": "Normal Weight",
            "diet_details": {
                "category": "Normal Weight",
                "bmi_range": "18.5 - 24.9",
                "recommendations": ["a", "b"],
                "foods_to_include": ["c"],
                "foods_to_avoid": []
            }
        }"#;

        let payload: ResultPayload = serde_json::from_str(body).unwrap();
        assert!(payload.success);
        assert_eq!(payload.bmi, Some(22.9));
        let details = payload.diet_details.unwrap();
        assert_eq!(details.recommendations, vec!["a", "b"]);
        assert!(details.foods_to_avoid.is_empty());
    }

    #[test]
    fn test_parse_failure_without_error_text() {
        let payload: ResultPayload = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!payload.success);
        assert!(payload.error.is_none());
        assert!(payload.diet_details.is_none());
    }

    #[test]
    fn test_failure_serializes_without_empty_fields() {
        let json = serde_json::to_value(ResultPayload::failure("nope")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "nope"}));
    }
}
