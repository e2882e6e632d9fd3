//! Admin dashboard: readiness score, status bars, risk heatmap, trend.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::guard::{self, RouteGuard};
use crate::components::loading_panel::LoadingPanel;
use crate::components::risk_heatmap::RiskHeatmap;
use crate::components::shell::AdminShell;
use crate::components::stat_card::StatCard;
use crate::components::trend_line::TrendLine;
use crate::net::types::DashboardSummary;
use crate::util::metrics;

/// Number of points in the synthetic readiness trend.
const TREND_POINTS: usize = 12;

/// Admin landing page.
#[component]
pub fn AdminHomePage() -> impl IntoView {
    view! {
        <RouteGuard allowed=guard::ADMIN_AREA>
            <AdminShell active="/admin">
                <DashboardContent/>
            </AdminShell>
        </RouteGuard>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let reload = RwSignal::new(0u32);
    let summary = LocalResource::new(move || {
        let _tick = reload.get();
        crate::net::api::fetch_dashboard_summary()
    });
    let retry = Callback::new(move |()| reload.update(|tick| *tick += 1));

    view! {
        <div class="dashboard">
            <h1 class="dashboard__title">"Compliance overview"</h1>
            <Suspense fallback=move || view! { <LoadingPanel/> }>
                {move || {
                    summary.get().map(|result| match result {
                        Ok(summary) => view! { <DashboardBody summary=summary/> }.into_any(),
                        Err(err) => {
                            view! { <ErrorBanner message=err.message on_retry=retry/> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn DashboardBody(summary: DashboardSummary) -> impl IntoView {
    let total = summary.compliant + summary.partial + summary.missing + summary.not_assessed;
    let score = metrics::readiness_score(&summary);
    let score_class = format!(
        "dashboard__score dashboard__score--{}",
        metrics::readiness_class(score)
    );
    let trend = metrics::trend_series(score, TREND_POINTS);

    view! {
        <section class="dashboard__hero">
            <div class=score_class>
                <span class="dashboard__score-value">{score.to_string()}</span>
                <span class="dashboard__score-label">"Readiness"</span>
            </div>
            <div class="dashboard__trend">
                <TrendLine values=trend/>
                <span class="dashboard__trend-label">"Trailing 12 periods"</span>
            </div>
        </section>

        <section class="dashboard__cards">
            <StatCard
                label="Compliant"
                value=summary.compliant.to_string()
                percent=metrics::percentage(summary.compliant, total)
            />
            <StatCard
                label="Partial"
                value=summary.partial.to_string()
                percent=metrics::percentage(summary.partial, total)
            />
            <StatCard
                label="Missing"
                value=summary.missing.to_string()
                percent=metrics::percentage(summary.missing, total)
            />
            <StatCard label="Open cases" value=summary.open_cases.to_string()/>
            <StatCard label="DPIAs in review" value=summary.dpia_in_review.to_string()/>
        </section>

        <section class="dashboard__risk">
            <h2>"Risk landscape"</h2>
            <RiskHeatmap cells=summary.risk_cells/>
        </section>
    }
}
