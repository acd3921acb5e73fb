//! Display formatting shared by the prediction, history, and alert views.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a backend probability (already a percentage) with two decimals.
pub fn format_probability(percentage: f64) -> String {
    format!("{percentage:.2}%")
}

/// Six-decimal form used by the coordinate panel.
pub fn format_coordinate_detail(value: f64) -> String {
    format!("{value:.6}")
}

/// Today's local date as `YYYY-MM-DD`, or an empty string off-browser.
pub fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
