//! Self-service portal: the signed-in user's privacy cases.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::guard::{self, RouteGuard};
use crate::components::loading_panel::LoadingPanel;
use crate::components::missing_feature::MissingFeaturePanel;
use crate::components::shell::PortalShell;
use crate::net::types::{CaseCategory, CaseStatus, PrivacyCase};

/// Validate the case filing form.
fn validate_case_form(subject: &str, description: &str) -> Result<(String, String), &'static str> {
    let subject = subject.trim();
    if subject.is_empty() {
        return Err("Enter a subject for your request.");
    }
    let description = description.trim();
    if description.is_empty() {
        return Err("Describe your request.");
    }
    Ok((subject.to_owned(), description.to_owned()))
}

/// CSS modifier for a case status chip.
fn case_status_class(status: CaseStatus) -> &'static str {
    match status {
        CaseStatus::Open => "open",
        CaseStatus::InReview => "in-review",
        CaseStatus::Resolved => "resolved",
        CaseStatus::Rejected => "rejected",
    }
}

/// Portal landing page.
#[component]
pub fn PortalPage() -> impl IntoView {
    view! {
        <RouteGuard allowed=guard::PORTAL_AREA>
            <PortalShell>
                <PortalContent/>
            </PortalShell>
        </RouteGuard>
    }
}

#[component]
fn PortalContent() -> impl IntoView {
    let reload = RwSignal::new(0u32);
    let cases = LocalResource::new(move || {
        let _tick = reload.get();
        crate::net::api::portal_fetch_cases()
    });
    let retry = Callback::new(move |()| reload.update(|tick| *tick += 1));

    let show_file = RwSignal::new(false);

    view! {
        <div class="portal">
            <header class="portal__header">
                <h1>"My privacy requests"</h1>
                <button class="btn btn--primary" on:click=move |_| show_file.set(true)>
                    "File a request"
                </button>
            </header>

            <Suspense fallback=move || view! { <LoadingPanel/> }>
                {move || {
                    cases.get().map(|result| {
                        if result.missing {
                            return view! {
                                <MissingFeaturePanel title="Case tracking"/>
                            }
                                .into_any();
                        }
                        match result.data {
                            Some(list) if result.ok => view! {
                                <CaseList cases=list/>
                            }
                                .into_any(),
                            _ => {
                                let message = result
                                    .error
                                    .map_or_else(|| "Request failed".to_owned(), |err| err.message);
                                view! { <ErrorBanner message=message on_retry=retry/> }.into_any()
                            }
                        }
                    })
                }}
            </Suspense>

            <Show when=move || show_file.get()>
                <FileCaseDialog
                    on_close=Callback::new(move |()| show_file.set(false))
                    reload=reload
                />
            </Show>
        </div>
    }
}

#[component]
fn CaseList(cases: Vec<PrivacyCase>) -> impl IntoView {
    if cases.is_empty() {
        return view! {
            <p class="portal__empty">"You have not filed any requests yet."</p>
        }
        .into_any();
    }
    view! {
        <ul class="portal__cases">
            {cases
                .into_iter()
                .map(|case| {
                    let href = format!("/user/cases/{}", case.id);
                    view! {
                        <li class="case-row">
                            <a class="case-row__link" href=href>
                                <span class="case-row__subject">{case.subject.clone()}</span>
                                <span class="case-row__category">{case.category.label()}</span>
                                <span class=format!(
                                    "case-row__status case-row__status--{}",
                                    case_status_class(case.status),
                                )>
                                    {case.status.label()}
                                </span>
                                <span class="case-row__date">
                                    {case.created_at.clone().unwrap_or_default()}
                                </span>
                            </a>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

#[component]
fn FileCaseDialog(on_close: Callback<()>, reload: RwSignal<u32>) -> impl IntoView {
    let subject = RwSignal::new(String::new());
    let category = RwSignal::new(CaseCategory::Access);
    let description = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let (subject_value, description_value) =
            match validate_case_form(&subject.get(), &description.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::portal_file_case(
                    &subject_value,
                    category.get_untracked(),
                    &description_value,
                )
                .await;
                if result.ok {
                    reload.update(|tick| *tick += 1);
                    on_close.run(());
                } else if result.missing {
                    info.set("Case filing is not connected yet.".to_owned());
                    busy.set(false);
                } else {
                    let message = result
                        .error
                        .map_or_else(|| "Request failed".to_owned(), |err| err.message);
                    info.set(message);
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (subject_value, description_value, reload);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"File a privacy request"</h2>
                <label class="dialog__label">
                    "Subject"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Category"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            if let Some(value) = CaseCategory::from_wire(&event_target_value(&ev)) {
                                category.set(value);
                            }
                        }
                    >
                        {CaseCategory::all()
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option
                                        value=option.wire_name()
                                        selected=option == CaseCategory::Access
                                    >
                                        {option.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Submit"
                    </button>
                </div>
            </div>
        </div>
    }
}
