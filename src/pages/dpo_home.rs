//! DPO landing page: review queue for submitted DPIAs plus summary numbers.

#[cfg(test)]
#[path = "dpo_home_test.rs"]
mod dpo_home_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::guard::{self, RouteGuard};
use crate::components::loading_panel::LoadingPanel;
use crate::components::stat_card::StatCard;
use crate::components::topbar::TopBar;
use crate::net::types::{DpiaRecord, DpiaStatus};
use crate::util::metrics::{self, RiskBand};

/// Records waiting on the DPO, worst risk first.
fn review_queue(records: Vec<DpiaRecord>) -> Vec<DpiaRecord> {
    let mut queue: Vec<DpiaRecord> = records
        .into_iter()
        .filter(|record| record.status.awaiting_review())
        .collect();
    queue.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
    queue
}

/// DPO home page.
#[component]
pub fn DpoHomePage() -> impl IntoView {
    view! {
        <RouteGuard allowed=guard::DPO_AREA>
            <div class="shell shell--dpo">
                <TopBar/>
                <main class="shell__content">
                    <DpoContent/>
                </main>
            </div>
        </RouteGuard>
    }
}

#[component]
fn DpoContent() -> impl IntoView {
    let reload = RwSignal::new(0u32);
    let records = LocalResource::new(move || {
        let _tick = reload.get();
        crate::net::api::fetch_dpias()
    });
    let summary = LocalResource::new(move || {
        let _tick = reload.get();
        crate::net::api::fetch_dashboard_summary()
    });
    let retry = Callback::new(move |()| reload.update(|tick| *tick += 1));

    let decision_error = RwSignal::new(None::<String>);

    view! {
        <div class="dpo">
            <h1>"DPO review queue"</h1>

            <section class="dpo__summary">
                <Suspense fallback=move || view! { <LoadingPanel/> }>
                    {move || {
                        summary.get().map(|result| match result {
                            Ok(summary) => {
                                let score = metrics::readiness_score(&summary);
                                view! {
                                    <StatCard
                                        label="Readiness"
                                        value=score.to_string()
                                        percent=score
                                    />
                                    <StatCard
                                        label="Open cases"
                                        value=summary.open_cases.to_string()
                                    />
                                    <StatCard
                                        label="DPIAs in review"
                                        value=summary.dpia_in_review.to_string()
                                    />
                                }
                                    .into_any()
                            }
                            // The queue below is the page's purpose; summary
                            // failures stay quiet rather than doubling banners.
                            Err(_) => ().into_any(),
                        })
                    }}
                </Suspense>
            </section>

            <Show when=move || decision_error.get().is_some()>
                <p class="dpo__decision-error">
                    {move || decision_error.get().unwrap_or_default()}
                </p>
            </Show>

            <Suspense fallback=move || view! { <LoadingPanel/> }>
                {move || {
                    records.get().map(|result| match result {
                        Ok(list) => {
                            let queue = review_queue(list);
                            if queue.is_empty() {
                                view! {
                                    <p class="dpo__empty">"Nothing waiting for review."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="dpo__queue">
                                        {queue
                                            .into_iter()
                                            .map(|record| {
                                                view! {
                                                    <QueueRow
                                                        record=record
                                                        reload=reload
                                                        decision_error=decision_error
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        }
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
fn QueueRow(
    record: DpiaRecord,
    reload: RwSignal<u32>,
    decision_error: RwSignal<Option<String>>,
) -> impl IntoView {
    let record_id = record.id.clone();
    let band = RiskBand::from_score(record.risk_score);

    let decide = move |decision: DpiaStatus| {
        #[cfg(feature = "hydrate")]
        {
            let record_id = record_id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::review_dpia(&record_id, decision).await {
                    Ok(()) => {
                        decision_error.set(None);
                        reload.update(|tick| *tick += 1);
                    }
                    Err(err) => decision_error.set(Some(err.message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (decision, &record_id, reload, decision_error);
        }
    };

    let on_approve = {
        let decide = decide.clone();
        move |_| decide(DpiaStatus::Approved)
    };
    let on_reject = move |_| decide(DpiaStatus::Rejected);

    view! {
        <li class="dpo-queue-row">
            <span class="dpo-queue-row__name">{record.project_name.clone()}</span>
            <span class=format!("dpo-queue-row__risk dpo-queue-row__risk--{}", band.css_class())>
                {format!("{} ({})", record.risk_score, band.label())}
            </span>
            <span class="dpo-queue-row__status">{record.status.label()}</span>
            <span class="dpo-queue-row__actions">
                <button class="btn btn--primary" on:click=on_approve>
                    "Approve"
                </button>
                <button class="btn" on:click=on_reject>
                    "Reject"
                </button>
            </span>
        </li>
    }
}
