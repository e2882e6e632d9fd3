//! DPIA screen: record list plus the five-step assessment wizard.

#[cfg(test)]
#[path = "dpia_test.rs"]
mod dpia_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::guard::{self, RouteGuard};
use crate::components::loading_panel::LoadingPanel;
use crate::components::shell::AdminShell;
use crate::net::types::DpiaStatus;
use crate::state::dpia::{DRAFT_KEY, DpiaDraft, DraftRisk, WizardStep};
use crate::util::metrics::RiskBand;
use crate::util::prefs;

/// CSS modifier for a record's status chip.
fn status_class(status: DpiaStatus) -> &'static str {
    match status {
        DpiaStatus::Draft => "draft",
        DpiaStatus::Submitted => "submitted",
        DpiaStatus::InReview => "in-review",
        DpiaStatus::Approved => "approved",
        DpiaStatus::Rejected => "rejected",
    }
}

/// DPIA page.
#[component]
pub fn DpiaPage() -> impl IntoView {
    view! {
        <RouteGuard allowed=guard::ADMIN_AREA>
            <AdminShell active="/admin/dpia">
                <DpiaContent/>
            </AdminShell>
        </RouteGuard>
    }
}

#[component]
fn DpiaContent() -> impl IntoView {
    let reload = RwSignal::new(0u32);
    let records = LocalResource::new(move || {
        let _tick = reload.get();
        crate::net::api::fetch_dpias()
    });
    let retry = Callback::new(move |()| reload.update(|tick| *tick += 1));

    let wizard_open = RwSignal::new(false);

    view! {
        <div class="dpia">
            <header class="dpia__header">
                <h1>"Data privacy impact assessments"</h1>
                <button class="btn btn--primary" on:click=move |_| wizard_open.set(true)>
                    "Start assessment"
                </button>
            </header>

            <Show
                when=move || wizard_open.get()
                fallback=move || {
                    view! {
                        <Suspense fallback=move || view! { <LoadingPanel/> }>
                            {move || {
                                records.get().map(|result| match result {
                                    Ok(list) => view! {
                                        <ul class="dpia__list">
                                            {list
                                                .into_iter()
                                                .map(|record| {
                                                    let band = RiskBand::from_score(record.risk_score);
                                                    view! {
                                                        <li class="dpia-record">
                                                            <span class="dpia-record__name">
                                                                {record.project_name.clone()}
                                                            </span>
                                                            <span class=format!(
                                                                "dpia-record__status dpia-record__status--{}",
                                                                status_class(record.status),
                                                            )>
                                                                {record.status.label()}
                                                            </span>
                                                            <span class=format!(
                                                                "dpia-record__risk dpia-record__risk--{}",
                                                                band.css_class(),
                                                            )>
                                                                {format!("{} ({})", record.risk_score, band.label())}
                                                            </span>
                                                            <span class="dpia-record__date">
                                                                {record.submitted_at.clone().unwrap_or_default()}
                                                            </span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any(),
                                    Err(err) => view! {
                                        <ErrorBanner message=err.message on_retry=retry/>
                                    }
                                        .into_any(),
                                })
                            }}
                        </Suspense>
                    }
                }
            >
                <DpiaWizard
                    on_close=Callback::new(move |()| wizard_open.set(false))
                    reload=reload
                />
            </Show>
        </div>
    }
}

#[component]
fn DpiaWizard(on_close: Callback<()>, reload: RwSignal<u32>) -> impl IntoView {
    // Restore any draft abandoned by a previous reload.
    let draft = RwSignal::new(prefs::load_json::<DpiaDraft>(DRAFT_KEY).unwrap_or_default());
    let step = RwSignal::new(WizardStep::Project);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Persist the draft on every edit so a reload does not lose work.
    Effect::new(move || {
        prefs::save_json(DRAFT_KEY, &draft.get());
    });

    let can_advance = move || draft.get().step_complete(step.get());

    let on_back = move |_| step.update(|s| *s = s.prev());
    let on_next = move |_| {
        if can_advance() {
            step.update(|s| *s = s.next());
        }
    };

    let submit = move |_| {
        if busy.get() || !draft.get().step_complete(WizardStep::Review) {
            return;
        }
        busy.set(true);
        info.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let payload = draft.get_untracked().submission_payload();
                match crate::net::api::submit_dpia(&payload).await {
                    Ok(_) => {
                        prefs::remove(DRAFT_KEY);
                        draft.set(DpiaDraft::default());
                        reload.update(|tick| *tick += 1);
                        on_close.run(());
                    }
                    Err(err) => {
                        info.set(err.message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = reload;
        }
    };

    let steps = WizardStep::all()
        .into_iter()
        .map(|s| {
            view! {
                <span
                    class="wizard__step"
                    class:wizard__step--active=move || step.get() == s
                    class:wizard__step--done=move || { step.get().index() > s.index() }
                >
                    {s.title()}
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="wizard">
            <header class="wizard__steps">{steps}</header>

            {move || match step.get() {
                WizardStep::Project => view! { <ProjectStep draft=draft/> }.into_any(),
                WizardStep::DataMapping => view! { <DataMappingStep draft=draft/> }.into_any(),
                WizardStep::Risks => view! { <RisksStep draft=draft/> }.into_any(),
                WizardStep::Mitigations => view! { <MitigationsStep draft=draft/> }.into_any(),
                WizardStep::Review => view! { <ReviewStep draft=draft/> }.into_any(),
            }}

            <Show when=move || !info.get().is_empty()>
                <p class="wizard__message">{move || info.get()}</p>
            </Show>

            <footer class="wizard__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <span class="wizard__actions-spacer"></span>
                <Show when=move || step.get() != WizardStep::Project>
                    <button class="btn" on:click=on_back>
                        "Back"
                    </button>
                </Show>
                <Show
                    when=move || step.get() == WizardStep::Review
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn--primary"
                                disabled=move || !can_advance()
                                on:click=on_next
                            >
                                "Next"
                            </button>
                        }
                    }
                >
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=submit
                    >
                        "Submit for review"
                    </button>
                </Show>
            </footer>
        </div>
    }
}

#[component]
fn ProjectStep(draft: RwSignal<DpiaDraft>) -> impl IntoView {
    view! {
        <div class="wizard__fields">
            <label class="wizard__label">
                "Project name"
                <input
                    class="wizard__input"
                    type="text"
                    prop:value=move || draft.get().project_name
                    on:input=move |ev| draft.update(|d| d.project_name = event_target_value(&ev))
                />
            </label>
            <label class="wizard__label">
                "Description"
                <textarea
                    class="wizard__textarea"
                    prop:value=move || draft.get().description
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </label>
        </div>
    }
}

#[component]
fn DataMappingStep(draft: RwSignal<DpiaDraft>) -> impl IntoView {
    view! {
        <div class="wizard__fields">
            <label class="wizard__label">
                "Personal data categories (one per line)"
                <textarea
                    class="wizard__textarea"
                    prop:value=move || draft.get().data_categories
                    on:input=move |ev| draft.update(|d| d.data_categories = event_target_value(&ev))
                ></textarea>
            </label>
            <label class="wizard__label">
                "Processing purpose"
                <textarea
                    class="wizard__textarea"
                    prop:value=move || draft.get().processing_purpose
                    on:input=move |ev| {
                        draft.update(|d| d.processing_purpose = event_target_value(&ev));
                    }
                ></textarea>
            </label>
        </div>
    }
}

#[component]
fn RisksStep(draft: RwSignal<DpiaDraft>) -> impl IntoView {
    let on_add = move |_| {
        draft.update(|d| {
            d.risks.push(DraftRisk { description: String::new(), likelihood: 1, impact: 1 });
        });
    };

    let scale_options = |selected: u8| {
        (1..=5u8)
            .map(|value| {
                view! {
                    <option value=value.to_string() selected=value == selected>
                        {value.to_string()}
                    </option>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="wizard__fields">
            {move || {
                draft
                    .get()
                    .risks
                    .into_iter()
                    .enumerate()
                    .map(|(index, risk)| {
                        view! {
                            <div class="wizard__risk">
                                <input
                                    class="wizard__input wizard__risk-description"
                                    type="text"
                                    placeholder="Risk description"
                                    prop:value=risk.description.clone()
                                    on:input=move |ev| {
                                        draft.update(|d| {
                                            if let Some(entry) = d.risks.get_mut(index) {
                                                entry.description = event_target_value(&ev);
                                            }
                                        });
                                    }
                                />
                                <label class="wizard__risk-scale">
                                    "Likelihood"
                                    <select on:change=move |ev| {
                                        if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                                            draft.update(|d| {
                                                if let Some(entry) = d.risks.get_mut(index) {
                                                    entry.likelihood = value;
                                                }
                                            });
                                        }
                                    }>
                                        {scale_options(risk.likelihood)}
                                    </select>
                                </label>
                                <label class="wizard__risk-scale">
                                    "Impact"
                                    <select on:change=move |ev| {
                                        if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                                            draft.update(|d| {
                                                if let Some(entry) = d.risks.get_mut(index) {
                                                    entry.impact = value;
                                                }
                                            });
                                        }
                                    }>
                                        {scale_options(risk.impact)}
                                    </select>
                                </label>
                                <button
                                    class="btn wizard__risk-remove"
                                    on:click=move |_| {
                                        draft.update(|d| {
                                            if index < d.risks.len() {
                                                d.risks.remove(index);
                                            }
                                        });
                                    }
                                    title="Remove risk"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button class="btn" on:click=on_add>
                "+ Add risk"
            </button>
        </div>
    }
}

#[component]
fn MitigationsStep(draft: RwSignal<DpiaDraft>) -> impl IntoView {
    view! {
        <div class="wizard__fields">
            <label class="wizard__label">
                "Planned mitigations"
                <textarea
                    class="wizard__textarea"
                    prop:value=move || draft.get().mitigations
                    on:input=move |ev| draft.update(|d| d.mitigations = event_target_value(&ev))
                ></textarea>
            </label>
        </div>
    }
}

#[component]
fn ReviewStep(draft: RwSignal<DpiaDraft>) -> impl IntoView {
    let score = move || draft.get().risk_score();
    let band = move || RiskBand::from_score(score());
    view! {
        <div class="wizard__review">
            <dl class="wizard__summary">
                <dt>"Project"</dt>
                <dd>{move || draft.get().project_name}</dd>
                <dt>"Purpose"</dt>
                <dd>{move || draft.get().processing_purpose}</dd>
                <dt>"Risks"</dt>
                <dd>{move || draft.get().risks.len().to_string()}</dd>
                <dt>"Overall risk"</dt>
                <dd class=move || format!("wizard__risk-chip wizard__risk-chip--{}", band().css_class())>
                    {move || format!("{} ({})", score(), band().label())}
                </dd>
            </dl>
        </div>
    }
}
