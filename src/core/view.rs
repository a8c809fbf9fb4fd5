//! Pure mapping from a service payload to what the presenters draw.

use serde::Serialize;

use crate::core::category::BmiCategory;
use crate::core::payload::ResultPayload;

pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to calculate BMI. Please try again.";
pub const SERVICE_FAILURE_MESSAGE: &str = "An error occurred";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub bmi: f64,
    pub bmi_text: String,
    pub category: BmiCategory,
    pub category_label: String,
    pub category_class: &'static str,
    pub bmi_range: String,
    pub recommendations: Vec<String>,
    pub foods_to_include: Vec<String>,
    pub foods_to_avoid: Vec<String>,
}

/// Why a submission produced no results.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitFailure {
    /// The request never produced a usable response.
    Transport,
    /// The service answered `success: false`.
    Rejected(Option<String>),
    /// The service claimed success but left out the result fields.
    Incomplete,
}

impl SubmitFailure {
    pub fn notice_text(&self) -> &str {
        match self {
            SubmitFailure::Transport => TRANSPORT_FAILURE_MESSAGE,
            SubmitFailure::Rejected(Some(message)) if !message.is_empty() => message.as_str(),
            SubmitFailure::Rejected(_) | SubmitFailure::Incomplete => SERVICE_FAILURE_MESSAGE,
        }
    }
}

pub fn build_view(payload: &ResultPayload) -> Result<ResultView, SubmitFailure> {
    if !payload.success {
        return Err(SubmitFailure::Rejected(payload.error.clone()));
    }

    let (Some(bmi), Some(details)) = (payload.bmi, payload.diet_details.as_ref()) else {
        return Err(SubmitFailure::Incomplete);
    };

    let category = BmiCategory::from_bmi(bmi);

    Ok(ResultView {
        bmi,
        bmi_text: format!("{:.1}", bmi),
        category,
        category_label: details.category.clone(),
        category_class: category.class_name(),
        bmi_range: details.bmi_range.clone(),
        recommendations: details.recommendations.clone(),
        foods_to_include: details.foods_to_include.clone(),
        foods_to_avoid: details.foods_to_avoid.clone(),
    })
}
