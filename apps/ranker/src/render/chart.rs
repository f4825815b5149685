//! Geometry for the inline SVG bar chart of résumé scores. The markup lives
//! in `templates/chart.html`.

use serde::Serialize;

use crate::models::resume::RankedResult;

const CHART_HEIGHT: f64 = 320.0;
const PLOT_TOP: f64 = 20.0;
const PLOT_BOTTOM: f64 = 250.0;
const PLOT_LEFT: f64 = 60.0;
const BAR_SLOT: f64 = 90.0;
const BAR_WIDTH: f64 = 56.0;
const Y_TICKS: usize = 5;
const MAX_LABEL_CHARS: usize = 14;

#[derive(Debug, Serialize)]
pub struct Tick {
    x: String,
    y: String,
    label: String,
}

#[derive(Debug, Serialize)]
pub struct Bar {
    x: String,
    y: String,
    height: String,
    label_x: String,
    name: String,
    label: String,
    score: String,
}

/// Coordinates are pre-formatted so the template prints them verbatim.
#[derive(Debug, Serialize)]
pub struct ChartView {
    width: String,
    height: String,
    plot_left: String,
    plot_top: String,
    plot_bottom: String,
    plot_middle: String,
    x_axis_end: String,
    bar_width: String,
    label_y: String,
    axis_title_x: String,
    axis_title_y: String,
    ticks: Vec<Tick>,
    bars: Vec<Bar>,
}

/// Upper bound of the y axis: the top score rounded up to the next tenth.
fn axis_max(results: &[RankedResult]) -> f64 {
    let top = results.iter().map(|r| r.score).fold(0.0_f64, f64::max);
    ((top * 10.0).ceil() / 10.0).max(0.1)
}

fn short_label(name: &str) -> String {
    if name.chars().count() <= MAX_LABEL_CHARS {
        name.to_string()
    } else {
        let head: String = name.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{head}…")
    }
}

/// One bar per result, in ranking order. Bar height is proportional to score.
pub fn chart_view(results: &[RankedResult]) -> ChartView {
    let y_max = axis_max(results);
    let plot_height = PLOT_BOTTOM - PLOT_TOP;
    let width = PLOT_LEFT + BAR_SLOT * results.len().max(1) as f64 + 20.0;

    let ticks = (0..=Y_TICKS)
        .map(|i| {
            let value = y_max * i as f64 / Y_TICKS as f64;
            let y = PLOT_BOTTOM - plot_height * i as f64 / Y_TICKS as f64;
            Tick {
                x: format!("{:.1}", PLOT_LEFT - 6.0),
                y: format!("{:.1}", y + 4.0),
                label: format!("{value:.2}"),
            }
        })
        .collect();

    let bars = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let bar_height = plot_height * (r.score / y_max).clamp(0.0, 1.0);
            let x = PLOT_LEFT + BAR_SLOT * i as f64 + (BAR_SLOT - BAR_WIDTH) / 2.0;
            Bar {
                x: format!("{x:.1}"),
                y: format!("{:.1}", PLOT_BOTTOM - bar_height),
                height: format!("{bar_height:.1}"),
                label_x: format!("{:.1}", x + BAR_WIDTH / 2.0),
                name: r.name.clone(),
                label: short_label(&r.name),
                score: format!("{:.4}", r.score),
            }
        })
        .collect();

    ChartView {
        width: format!("{width:.1}"),
        height: format!("{CHART_HEIGHT:.1}"),
        plot_left: format!("{PLOT_LEFT:.1}"),
        plot_top: format!("{PLOT_TOP:.1}"),
        plot_bottom: format!("{PLOT_BOTTOM:.1}"),
        plot_middle: format!("{:.1}", (PLOT_TOP + PLOT_BOTTOM) / 2.0),
        x_axis_end: format!("{:.1}", width - 10.0),
        bar_width: format!("{BAR_WIDTH:.1}"),
        label_y: format!("{:.1}", PLOT_BOTTOM + 16.0),
        axis_title_x: format!("{:.1}", (PLOT_LEFT + width) / 2.0),
        axis_title_y: format!("{:.1}", CHART_HEIGHT - 20.0),
        ticks,
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::templates::render;
    use minijinja::context;

    fn result(rank: usize, name: &str, score: f64) -> RankedResult {
        RankedResult {
            rank,
            name: name.to_string(),
            score,
        }
    }

    fn svg(results: &[RankedResult]) -> String {
        render("chart.html", context! { chart => chart_view(results) }).unwrap()
    }

    #[test]
    fn test_one_bar_per_result() {
        let svg = svg(&[
            result(1, "a.pdf", 0.7),
            result(2, "b.pdf", 0.3),
            result(3, "c.pdf", 0.0),
        ]);
        assert_eq!(svg.matches(r#"class="bar""#).count(), 3);
        assert!(svg.trim().starts_with("<svg"));
        assert!(svg.trim().ends_with("</svg>"));
    }

    #[test]
    fn test_axis_max_rounds_up_to_tenth() {
        assert!((axis_max(&[result(1, "a", 0.63)]) - 0.7).abs() < 1e-9);
        assert!((axis_max(&[result(1, "a", 0.0)]) - 0.1).abs() < 1e-9);
        assert!((axis_max(&[]) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_top_bar_fills_plot_when_score_on_tick() {
        let view = chart_view(&[result(1, "a.pdf", 0.5)]);
        // plot height 230, score 0.5 of axis max 0.5
        assert_eq!(view.bars[0].height, "230.0");
        assert_eq!(view.bars[0].y, "20.0");
        assert_eq!(view.ticks.len(), Y_TICKS + 1);
        assert_eq!(view.ticks[Y_TICKS].label, "0.50");
    }

    #[test]
    fn test_labels_escaped_and_shortened() {
        let svg = svg(&[result(1, "<evil> very long resume name.pdf", 0.2)]);
        assert!(!svg.contains("<evil>"));
        assert!(svg.contains("&lt;evil&gt;"));
        assert!(svg.contains('…'));
    }

    #[test]
    fn test_empty_results_render_axes_only() {
        let svg = svg(&[]);
        assert_eq!(svg.matches(r#"class="bar""#).count(), 0);
        assert!(svg.contains("Resume"));
    }
}
