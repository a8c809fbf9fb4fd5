use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::core::payload::PredictRequest;

pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 100.0..=250.0;
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=300.0;

/// First field that failed local validation, in checking order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please select your gender.")]
    Gender,

    #[error("Please enter a valid height between 100-250 cm.")]
    Height,

    #[error("Please enter a valid weight between 30-300 kg.")]
    Weight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Unspecified,
    Male,
    Female,
}

impl Gender {
    /// Anything that is not a recognised gender is left unspecified so that
    /// validation reports it.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            _ => Gender::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Unspecified => "",
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Values read from the form for a single submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmissionInput {
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl SubmissionInput {
    pub fn new(gender: Gender, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            gender,
            height_cm,
            weight_kg,
        }
    }

    /// Build an input from raw text fields. Unparsable numbers become NaN and
    /// fail their range check.
    pub fn from_fields(gender: &str, height: &str, weight: &str) -> Self {
        Self::new(
            Gender::parse(gender),
            parse_number(height),
            parse_number(weight),
        )
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.gender == Gender::Unspecified {
            return Err(FieldError::Gender);
        }

        if !HEIGHT_RANGE_CM.contains(&self.height_cm) {
            return Err(FieldError::Height);
        }

        if !WEIGHT_RANGE_KG.contains(&self.weight_kg) {
            return Err(FieldError::Weight);
        }

        Ok(())
    }

    pub fn to_request(&self) -> PredictRequest {
        PredictRequest {
            gender: self.gender.as_str().to_string(),
            height: self.height_cm,
            weight: self.weight_kg,
        }
    }
}

fn parse_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(gender: Gender, height: f64, weight: f64) -> SubmissionInput {
        SubmissionInput::new(gender, height, weight)
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("Male"), Gender::Male);
        assert_eq!(Gender::parse(" f "), Gender::Female);
        assert_eq!(Gender::parse(""), Gender::Unspecified);
        assert_eq!(Gender::parse("other"), Gender::Unspecified);
    }

    #[test]
    fn test_height_bounds_are_inclusive() {
        assert!(input(Gender::Male, 100.0, 70.0).validate().is_ok());
        assert!(input(Gender::Male, 250.0, 70.0).validate().is_ok());

        for height in [99.9, 250.1, 0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                input(Gender::Male, height, 70.0).validate(),
                Err(FieldError::Height),
                "height {height} should be rejected"
            );
        }
    }

    #[test]
    fn test_weight_bounds_are_inclusive() {
        assert!(input(Gender::Female, 170.0, 30.0).validate().is_ok());
        assert!(input(Gender::Female, 170.0, 300.0).validate().is_ok());

        for weight in [29.9, 300.1, 0.0, f64::NAN] {
            assert_eq!(
                input(Gender::Female, 170.0, weight).validate(),
                Err(FieldError::Weight),
                "weight {weight} should be rejected"
            );
        }
    }

    #[test]
    fn test_validation_order() {
        // Every field is wrong: gender wins
        assert_eq!(
            input(Gender::Unspecified, 10.0, 1000.0).validate(),
            Err(FieldError::Gender)
        );
        // Height is checked before weight
        assert_eq!(
            input(Gender::Male, 10.0, 1000.0).validate(),
            Err(FieldError::Height)
        );
        assert_eq!(
            input(Gender::Male, 180.0, 1000.0).validate(),
            Err(FieldError::Weight)
        );
    }

    #[test]
    fn test_from_fields_with_garbage_numbers() {
        let parsed = SubmissionInput::from_fields("male", "tall", "80");
        assert!(parsed.height_cm.is_nan());
        assert_eq!(parsed.validate(), Err(FieldError::Height));
    }

    #[test]
    fn test_field_messages() {
        assert_eq!(FieldError::Gender.to_string(), "Please select your gender.");
        assert!(FieldError::Height.to_string().contains("height"));
        assert!(FieldError::Weight.to_string().contains("weight"));
    }

    #[test]
    fn test_to_request() {
        let request = input(Gender::Female, 165.5, 58.0).to_request();
        assert_eq!(request.gender, "female");
        assert_eq!(request.height, 165.5);
        assert_eq!(request.weight, 58.0);
    }
}
