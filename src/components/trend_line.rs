//! SVG trend line for the dashboard readiness series.

use leptos::prelude::*;

use crate::util::metrics::polyline_points;

const VIEW_WIDTH: f64 = 240.0;
const VIEW_HEIGHT: f64 = 60.0;

/// Sparkline-style polyline over a 0..=100 value series.
#[component]
pub fn TrendLine(values: Vec<u8>) -> impl IntoView {
    let points = polyline_points(&values, VIEW_WIDTH, VIEW_HEIGHT);
    view! {
        <svg
            class="trend-line"
            viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
            preserveAspectRatio="none"
            aria-hidden="true"
        >
            <polyline class="trend-line__path" points=points></polyline>
        </svg>
    }
}
