//! Portal case detail: handling timeline and evidence upload.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::error_banner::ErrorBanner;
use crate::components::guard::{self, RouteGuard};
use crate::components::loading_panel::LoadingPanel;
use crate::components::missing_feature::MissingFeaturePanel;
use crate::components::shell::PortalShell;
use crate::net::types::PrivacyCase;

/// Case detail page for `/user/cases/{id}`.
#[component]
pub fn CaseDetailPage() -> impl IntoView {
    view! {
        <RouteGuard allowed=guard::PORTAL_AREA>
            <PortalShell>
                <CaseDetailContent/>
            </PortalShell>
        </RouteGuard>
    }
}

#[component]
fn CaseDetailContent() -> impl IntoView {
    let params = use_params_map();
    let case_id = move || params.get().get("id").unwrap_or_default();

    let reload = RwSignal::new(0u32);
    let case = LocalResource::new(move || {
        let _tick = reload.get();
        let id = case_id();
        async move { crate::net::api::portal_fetch_case(&id).await }
    });
    let retry = Callback::new(move |()| reload.update(|tick| *tick += 1));

    view! {
        <div class="case-detail">
            <a class="case-detail__back" href="/user">
                "< Back to my requests"
            </a>
            <Suspense fallback=move || view! { <LoadingPanel/> }>
                {move || {
                    case.get().map(|result| {
                        if result.missing {
                            return view! {
                                <MissingFeaturePanel title="Case tracking"/>
                            }
                                .into_any();
                        }
                        match result.data {
                            Some(case) if result.ok => view! {
                                <CaseBody case=case reload=reload/>
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
        </div>
    }
}

#[component]
fn CaseBody(case: PrivacyCase, reload: RwSignal<u32>) -> impl IntoView {
    let upload_info = RwSignal::new(String::new());
    let file_input = NodeRef::<leptos::html::Input>::new();
    let case_id = case.id.clone();

    let on_upload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                upload_info.set("Choose a file first.".to_owned());
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            if form.append_with_blob("file", &file).is_err() {
                return;
            }
            let case_id = case_id.clone();
            upload_info.set("Uploading...".to_owned());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::portal_upload_evidence(&case_id, &form).await;
                if result.ok {
                    upload_info.set("Evidence uploaded.".to_owned());
                    reload.update(|tick| *tick += 1);
                } else if result.missing {
                    upload_info.set("Evidence upload is not connected yet.".to_owned());
                } else {
                    let message = result
                        .error
                        .map_or_else(|| "Request failed".to_owned(), |err| err.message);
                    upload_info.set(message);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&case_id, reload);
        }
    };

    let updates = case
        .updates
        .iter()
        .map(|update| {
            view! {
                <li class="case-timeline__entry">
                    <span class="case-timeline__at">{update.at.clone()}</span>
                    <span class="case-timeline__note">{update.note.clone()}</span>
                    {update
                        .author
                        .clone()
                        .map(|author| view! { <span class="case-timeline__author">{author}</span> })}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <article class="case-detail__body">
            <header class="case-detail__header">
                <h1>{case.subject.clone()}</h1>
                <span class="case-detail__category">{case.category.label()}</span>
                <span class="case-detail__status">{case.status.label()}</span>
            </header>
            <p class="case-detail__description">{case.description.clone()}</p>

            <section class="case-detail__timeline">
                <h2>"Handling timeline"</h2>
                {if case.updates.is_empty() {
                    view! { <p class="case-timeline__empty">"No updates yet."</p> }.into_any()
                } else {
                    view! { <ul class="case-timeline">{updates}</ul> }.into_any()
                }}
            </section>

            <section class="case-detail__evidence">
                <h2>"Attach evidence"</h2>
                <input class="case-detail__file" type="file" node_ref=file_input/>
                <button class="btn" on:click=on_upload>
                    "Upload"
                </button>
                <Show when=move || !upload_info.get().is_empty()>
                    <p class="case-detail__upload-info">{move || upload_info.get()}</p>
                </Show>
            </section>
        </article>
    }
}
