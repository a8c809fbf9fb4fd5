use serde::{Deserialize, Serialize};

/// BMI bucket. Each lower bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Style class used by the renderers.
    pub fn class_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn range_text(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Below 18.5",
            BmiCategory::Normal => "18.5 - 24.9",
            BmiCategory::Overweight => "25.0 - 29.9",
            BmiCategory::Obese => "30.0 and above",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        let cases = [
            (17.9, BmiCategory::Underweight),
            (18.5, BmiCategory::Normal),
            (24.9, BmiCategory::Normal),
            (25.0, BmiCategory::Overweight),
            (29.9, BmiCategory::Overweight),
            (30.0, BmiCategory::Obese),
            (55.2, BmiCategory::Obese),
        ];

        for (bmi, expected) in cases {
            assert_eq!(BmiCategory::from_bmi(bmi), expected, "bmi {bmi}");
        }
    }

    #[test]
    fn test_class_names() {
        let names: Vec<_> = BmiCategory::ALL.iter().map(|c| c.class_name()).collect();
        assert_eq!(names, ["underweight", "normal", "overweight", "obese"]);
    }
}
