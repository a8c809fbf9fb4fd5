use colored::*;

use crate::core::category::BmiCategory;
use crate::core::payload::{CategoryRow, HealthStatus};
use crate::core::view::ResultView;

pub const DISCLAIMER: &str = "These recommendations are for informational purposes only. \
Please consult with a healthcare professional before making significant dietary changes.";

pub const RECOMMENDATION_BULLET: &str = "  ✓ ";
pub const INCLUDE_BULLET: &str = "  + ";
pub const AVOID_BULLET: &str = "  - ";

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_green().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn value(text: &str) -> ColoredString {
        text.bright_white().bold()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Color used for a BMI bucket.
    pub fn category(text: &str, category: BmiCategory) -> ColoredString {
        match category {
            BmiCategory::Underweight => text.bright_cyan().bold(),
            BmiCategory::Normal => text.green().bold(),
            BmiCategory::Overweight => text.yellow().bold(),
            BmiCategory::Obese => text.red().bold(),
        }
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    fn field(label: &str, value: ColoredString) -> String {
        format!("{:>12}: {}", Self::label(label), value)
    }

    /// Lines of the results region, top to bottom.
    pub fn result_lines(view: &ResultView) -> Vec<String> {
        let mut lines = vec![
            Self::title("📊 Your BMI Result").to_string(),
            Self::header_separator(),
            Self::field("BMI", Self::value(&view.bmi_text)),
            Self::field(
                "Category",
                Self::category(&view.category_label, view.category),
            ),
            Self::field("BMI range", Self::muted(&view.bmi_range)),
            String::new(),
            Self::header("💡 General Recommendations").to_string(),
        ];

        lines.extend(
            view.recommendations
                .iter()
                .map(|rec| format!("{}{}", RECOMMENDATION_BULLET, rec)),
        );

        lines.push(String::new());
        lines.push(Self::header("✅ Foods to Include").to_string());
        lines.extend(
            view.foods_to_include
                .iter()
                .map(|food| format!("{}{}", INCLUDE_BULLET, Self::success(food))),
        );

        lines.push(String::new());
        lines.push(Self::header("🚫 Foods to Avoid").to_string());
        lines.extend(
            view.foods_to_avoid
                .iter()
                .map(|food| format!("{}{}", AVOID_BULLET, Self::error(food))),
        );

        lines.push(Self::separator());
        lines.push(format!("{} {}", Self::warning("Disclaimer:"), Self::muted(DISCLAIMER)));
        lines
    }

    pub fn print_categories(rows: &[CategoryRow]) {
        println!("{}", Self::title("📏 BMI Categories"));
        println!("{}", Self::header_separator());
        for row in rows {
            println!("{:>16}  {}", Self::label(&row.range), row.category);
        }
    }

    pub fn print_health(base_url: &str, health: &HealthStatus) {
        let status = if health.status == "healthy" {
            Self::success(&health.status)
        } else {
            Self::warning(&health.status)
        };
        println!("{}", Self::field("Service", Self::muted(base_url)));
        println!("{}", Self::field("Status", status));
        println!(
            "{}",
            Self::field("Model", Self::muted(if health.model_loaded { "loaded" } else { "not loaded" }))
        );
    }
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}
