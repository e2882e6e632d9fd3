//! 5x5 likelihood x impact risk heatmap.

use leptos::prelude::*;

use crate::net::types::RiskCell;
use crate::util::metrics::risk_band;

/// Count of risks in a given cell; absent cells count zero.
fn cell_count(cells: &[RiskCell], likelihood: u8, impact: u8) -> u32 {
    cells
        .iter()
        .find(|cell| cell.likelihood == likelihood && cell.impact == impact)
        .map_or(0, |cell| cell.count)
}

/// Heatmap grid; rows are impact 5 down to 1, columns likelihood 1 to 5,
/// each cell colored by its severity bucket.
#[component]
pub fn RiskHeatmap(cells: Vec<RiskCell>) -> impl IntoView {
    let rows = (1..=5u8).rev().map(|impact| {
        let row_cells = (1..=5u8)
            .map(|likelihood| {
                let band = risk_band(likelihood, impact);
                let count = cell_count(&cells, likelihood, impact);
                let class = format!(
                    "risk-heatmap__cell risk-heatmap__cell--{}",
                    band.css_class()
                );
                let tooltip =
                    format!("L{likelihood} x I{impact}: {count} ({})", band.label());
                view! {
                    <div class=class title=tooltip>
                        {if count > 0 { count.to_string() } else { String::new() }}
                    </div>
                }
            })
            .collect::<Vec<_>>();
        view! { <div class="risk-heatmap__row">{row_cells}</div> }
    });

    view! {
        <div class="risk-heatmap">
            <div class="risk-heatmap__grid">{rows.collect::<Vec<_>>()}</div>
            <div class="risk-heatmap__axis risk-heatmap__axis--x">"Likelihood"</div>
            <div class="risk-heatmap__axis risk-heatmap__axis--y">"Impact"</div>
        </div>
    }
}
