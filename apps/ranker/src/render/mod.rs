// Server-rendered HTML for the single-page ranking tool, built from the
// minijinja templates under `templates/`.

pub mod chart;
pub mod handlers;
pub mod page;
pub mod results;
pub mod templates;

/// Formats a raw [0, 1] score as a percentage with two decimals, e.g. `66.34`.
pub fn format_percent(score: f64) -> String {
    format!("{:.2}", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.663447), "66.34");
        assert_eq!(format_percent(1.0), "100.00");
        assert_eq!(format_percent(0.0), "0.00");
    }
}
