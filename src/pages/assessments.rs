//! Gap assessment screen: domains of requirements reviewed against the law.

#[cfg(test)]
#[path = "assessments_test.rs"]
mod assessments_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::guard::{self, RouteGuard};
use crate::components::loading_panel::LoadingPanel;
use crate::components::shell::AdminShell;
use crate::net::types::{AssessmentDomain, ComplianceStatus, GapAssessment, Requirement};
use crate::util::metrics;

/// Case-insensitive substring match over a requirement's control text.
/// A blank query matches everything.
fn matches_query(control: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    control.to_lowercase().contains(&query.to_lowercase())
}

/// How many requirements have been reviewed (any status but not-assessed).
fn reviewed_count(requirements: &[Requirement]) -> u32 {
    u32::try_from(
        requirements
            .iter()
            .filter(|req| req.status != ComplianceStatus::NotAssessed)
            .count(),
    )
    .unwrap_or(u32::MAX)
}

/// Completion percentage of a domain: reviewed over total.
fn domain_progress(requirements: &[Requirement]) -> u8 {
    metrics::percentage(
        reviewed_count(requirements),
        u32::try_from(requirements.len()).unwrap_or(u32::MAX),
    )
}

/// Validate the create-assessment dialog input.
fn validate_assessment_title(title: &str) -> Result<String, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Enter an assessment title.");
    }
    Ok(title.to_owned())
}

/// Gap assessment page.
#[component]
pub fn AssessmentsPage() -> impl IntoView {
    view! {
        <RouteGuard allowed=guard::ADMIN_AREA>
            <AdminShell active="/admin/assessments">
                <AssessmentsContent/>
            </AdminShell>
        </RouteGuard>
    }
}

#[component]
fn AssessmentsContent() -> impl IntoView {
    let reload = RwSignal::new(0u32);
    let assessments = LocalResource::new(move || {
        let _tick = reload.get();
        crate::net::api::fetch_assessments()
    });
    let retry = Callback::new(move |()| reload.update(|tick| *tick += 1));

    let query = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);
    let patch_error = RwSignal::new(None::<String>);

    view! {
        <div class="assessments">
            <header class="assessments__header">
                <h1>"Gap assessments"</h1>
                <input
                    class="assessments__search"
                    type="search"
                    placeholder="Filter requirements"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New assessment"
                </button>
            </header>

            <Show when=move || patch_error.get().is_some()>
                <p class="assessments__patch-error">
                    {move || patch_error.get().unwrap_or_default()}
                </p>
            </Show>

            <Suspense fallback=move || view! { <LoadingPanel/> }>
                {move || {
                    assessments.get().map(|result| match result {
                        Ok(list) => view! {
                            <div class="assessments__list">
                                {list
                                    .into_iter()
                                    .map(|assessment| {
                                        view! {
                                            <AssessmentCard
                                                assessment=assessment
                                                query=query
                                                reload=reload
                                                patch_error=patch_error
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any(),
                        Err(err) => {
                            view! { <ErrorBanner message=err.message on_retry=retry/> }.into_any()
                        }
                    })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <CreateAssessmentDialog
                    on_close=Callback::new(move |()| show_create.set(false))
                    reload=reload
                />
            </Show>
        </div>
    }
}

#[component]
fn AssessmentCard(
    assessment: GapAssessment,
    query: RwSignal<String>,
    reload: RwSignal<u32>,
    patch_error: RwSignal<Option<String>>,
) -> impl IntoView {
    let assessment_id = assessment.id.clone();
    view! {
        <article class="assessment-card">
            <h2 class="assessment-card__title">{assessment.title.clone()}</h2>
            {assessment
                .domains
                .into_iter()
                .map(|domain| {
                    view! {
                        <DomainSection
                            assessment_id=assessment_id.clone()
                            domain=domain
                            query=query
                            reload=reload
                            patch_error=patch_error
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </article>
    }
}

#[component]
fn DomainSection(
    assessment_id: String,
    domain: AssessmentDomain,
    query: RwSignal<String>,
    reload: RwSignal<u32>,
    patch_error: RwSignal<Option<String>>,
) -> impl IntoView {
    let progress = domain_progress(&domain.requirements);
    view! {
        <section class="assessment-domain">
            <header class="assessment-domain__header">
                <h3>{domain.name.clone()}</h3>
                <div class="assessment-domain__progress">
                    <div
                        class="assessment-domain__progress-fill"
                        style:width=format!("{progress}%")
                    ></div>
                </div>
                <span class="assessment-domain__progress-label">
                    {format!("{progress}% reviewed")}
                </span>
            </header>
            <ul class="assessment-domain__requirements">
                {domain
                    .requirements
                    .into_iter()
                    .map(|requirement| {
                        let assessment_id = assessment_id.clone();
                        let control = requirement.control.clone();
                        let visible = move || matches_query(&control, &query.get());
                        view! {
                            <Show when=visible>
                                <RequirementRow
                                    assessment_id=assessment_id.clone()
                                    requirement=requirement.clone()
                                    reload=reload
                                    patch_error=patch_error
                                />
                            </Show>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

#[component]
fn RequirementRow(
    assessment_id: String,
    requirement: Requirement,
    reload: RwSignal<u32>,
    patch_error: RwSignal<Option<String>>,
) -> impl IntoView {
    let status_class = move |status: ComplianceStatus| {
        format!("requirement__status requirement__status--{}", match status {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Partial => "partial",
            ComplianceStatus::Missing => "missing",
            ComplianceStatus::NotAssessed => "not-assessed",
        })
    };

    let requirement_id = requirement.id.clone();
    let requirement_notes = requirement.notes.clone();
    let on_status_change = move |ev: leptos::ev::Event| {
        let Some(next) = ComplianceStatus::from_wire(&event_target_value(&ev)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let assessment_id = assessment_id.clone();
            let requirement_id = requirement_id.clone();
            let notes = requirement_notes.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_requirement(
                    &assessment_id,
                    &requirement_id,
                    next,
                    notes.as_deref(),
                )
                .await
                {
                    Ok(()) => {
                        patch_error.set(None);
                        reload.update(|tick| *tick += 1);
                    }
                    Err(err) => patch_error.set(Some(err.message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (next, &assessment_id, &requirement_id, &requirement_notes, reload, patch_error);
        }
    };

    view! {
        <li class="requirement">
            <span class="requirement__control">{requirement.control.clone()}</span>
            <span class=status_class(requirement.status)>{requirement.status.label()}</span>
            <select class="requirement__picker" on:change=on_status_change>
                {ComplianceStatus::all()
                    .into_iter()
                    .map(|status| {
                        view! {
                            <option
                                value=status.wire_name()
                                selected=status == requirement.status
                            >
                                {status.label()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
            {requirement
                .notes
                .clone()
                .map(|notes| view! { <p class="requirement__notes">{notes}</p> })}
        </li>
    }
}

#[component]
fn CreateAssessmentDialog(on_close: Callback<()>, reload: RwSignal<u32>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let value = match validate_assessment_title(&title.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::create_assessment(&value).await {
                    Ok(_) => {
                        reload.update(|tick| *tick += 1);
                        on_close.run(());
                    }
                    Err(err) => info.set(err.message),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (value, reload);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New assessment"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
