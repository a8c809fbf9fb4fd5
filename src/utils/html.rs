//! HTML fragment for the results region, for embedding in a page.

use crate::core::view::ResultView;
use crate::utils::output::DISCLAIMER;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

fn food_tags(items: &[String], kind: &str) -> String {
    items
        .iter()
        .map(|item| format!(r#"<span class="food-tag {}">{}</span>"#, kind, escape_html(item)))
        .collect()
}

pub fn render_html(view: &ResultView) -> String {
    format!(
        r#"<div class="bmi-result">
  <div class="bmi-value">{bmi}</div>
  <div class="bmi-category {class}">{label}</div>
</div>
<div class="diet-overview">
  <div class="info-card"><h6>Category</h6><p>{label}</p></div>
  <div class="info-card"><h6>BMI Range</h6><p>{range}</p></div>
</div>
<div class="recommendations-grid">
  <div class="recommendation-section">
    <h6>General Recommendations</h6>
    <ul class="recommendation-list">{recommendations}</ul>
  </div>
  <div class="recommendation-section">
    <h6>Foods to Include</h6>
    <div class="food-tags">{include}</div>
  </div>
  <div class="recommendation-section">
    <h6>Foods to Avoid</h6>
    <div class="food-tags">{avoid}</div>
  </div>
</div>
<div class="disclaimer"><strong>Disclaimer:</strong> {disclaimer}</div>
"#,
        bmi = escape_html(&view.bmi_text),
        class = view.category_class,
        label = escape_html(&view.category_label),
        range = escape_html(&view.bmi_range),
        recommendations = list_items(&view.recommendations),
        include = food_tags(&view.foods_to_include, "include"),
        avoid = food_tags(&view.foods_to_avoid, "avoid"),
        disclaimer = DISCLAIMER,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::BmiCategory;

    fn view() -> ResultView {
        ResultView {
            bmi: 17.2,
            bmi_text: "17.2".to_string(),
            category: BmiCategory::Underweight,
            category_label: "Underweight".to_string(),
            category_class: "underweight",
            bmi_range: "Below 18.5".to_string(),
            recommendations: vec!["eat more".into(), "snack".into(), "rest".into()],
            foods_to_include: vec!["nuts".into(), "avocado".into()],
            foods_to_avoid: vec!["junk".into(), "soda".into(), "caffeine".into(), "<script>".into()],
        }
    }

    #[test]
    fn test_list_counts() {
        let html = render_html(&view());
        assert_eq!(html.matches("<li>").count(), 3);
        assert_eq!(html.matches(r#"class="food-tag include""#).count(), 2);
        assert_eq!(html.matches(r#"class="food-tag avoid""#).count(), 4);
    }

    #[test]
    fn test_list_order() {
        let html = render_html(&view());
        let first = html.find("<li>eat more</li>").unwrap();
        let last = html.find("<li>rest</li>").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_markup_is_escaped() {
        let html = render_html(&view());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"class="bmi-category underweight""#));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a & "b" <c>"#), "a &amp; &quot;b&quot; &lt;c&gt;");
    }
}
