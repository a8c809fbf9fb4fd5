use crate::core::category::BmiCategory;
use crate::core::payload::{CategoryRow, DietDetails};

/// BMI from height in centimetres and weight in kilograms, rounded to one decimal.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi * 10.0).round() / 10.0
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn plan(
    category: BmiCategory,
    recommendations: &[&str],
    foods_to_include: &[&str],
    foods_to_avoid: &[&str],
) -> DietDetails {
    DietDetails {
        category: category.label().to_string(),
        bmi_range: category.range_text().to_string(),
        recommendations: owned(recommendations),
        foods_to_include: owned(foods_to_include),
        foods_to_avoid: owned(foods_to_avoid),
    }
}

pub fn diet_plan(category: BmiCategory) -> DietDetails {
    match category {
        BmiCategory::Underweight => plan(
            category,
            &[
                "Increase caloric intake with nutrient-dense foods",
                "Include healthy fats like nuts, avocados, and olive oil",
                "Eat frequent, smaller meals throughout the day",
                "Focus on protein-rich foods for muscle building",
                "Consider consulting a nutritionist for personalized guidance",
            ],
            &[
                "Nuts and nut butters",
                "Avocados",
                "Whole grains",
                "Lean proteins",
                "Healthy oils",
                "Dried fruits",
                "Protein shakes",
                "Full-fat dairy",
            ],
            &[
                "Empty calories from junk food",
                "Excessive caffeine",
                "Foods high in trans fats",
            ],
        ),
        BmiCategory::Normal => plan(
            category,
            &[
                "Maintain current weight with balanced nutrition",
                "Include variety from all food groups",
                "Practice portion control",
                "Stay hydrated with plenty of water",
                "Regular physical activity",
            ],
            &[
                "Fruits and vegetables",
                "Whole grains",
                "Lean proteins",
                "Low-fat dairy",
                "Healthy fats in moderation",
            ],
            &[
                "Processed foods",
                "Excessive sugar and salt",
                "Trans fats",
                "Excessive alcohol",
            ],
        ),
        BmiCategory::Overweight => plan(
            category,
            &[
                "Create a moderate caloric deficit for gradual weight loss",
                "Focus on nutrient-dense, low-calorie foods",
                "Increase fiber intake to promote satiety",
                "Practice mindful eating and portion control",
                "Incorporate regular physical activity",
            ],
            &[
                "Vegetables",
                "Fruits",
                "Lean proteins",
                "Whole grains",
                "Low-fat dairy",
                "Legumes",
                "Water-rich foods",
            ],
            &[
                "High-calorie processed foods",
                "Sugary drinks",
                "Refined carbohydrates",
                "Fried foods",
                "High-fat snacks",
            ],
        ),
        BmiCategory::Obese => plan(
            category,
            &[
                "Consult healthcare professionals for comprehensive weight management",
                "Create a structured meal plan with caloric deficit",
                "Focus on high-fiber, low-calorie foods",
                "Consider working with a registered dietitian",
                "Gradual lifestyle changes for sustainable results",
            ],
            &[
                "Non-starchy vegetables",
                "Lean proteins",
                "Whole grains in moderation",
                "Fruits in moderation",
                "Low-fat dairy",
                "Legumes",
            ],
            &[
                "High-calorie processed foods",
                "Sugary beverages",
                "Fast food",
                "Refined sugars",
                "High-fat foods",
                "Large portion sizes",
            ],
        ),
    }
}

pub fn category_rows() -> Vec<CategoryRow> {
    BmiCategory::ALL
        .iter()
        .map(|category| CategoryRow {
            range: category.range_text().to_string(),
            category: category.label().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_bmi_rounds_to_one_decimal() {
        assert_eq!(calculate_bmi(180.0, 75.0), 23.1);
        assert_eq!(calculate_bmi(160.0, 45.0), 17.6);
        assert_eq!(calculate_bmi(170.0, 100.0), 34.6);
    }

    #[test]
    fn test_every_plan_is_labelled_and_filled() {
        for category in BmiCategory::ALL {
            let plan = diet_plan(category);
            assert_eq!(plan.category, category.label());
            assert_eq!(plan.bmi_range, category.range_text());
            assert_eq!(plan.recommendations.len(), 5);
            assert!(!plan.foods_to_include.is_empty());
            assert!(!plan.foods_to_avoid.is_empty());
        }
    }

    #[test]
    fn test_category_rows() {
        let rows = category_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].range, "18.5 - 24.9");
        assert_eq!(rows[3].category, "Obese");
    }
}
