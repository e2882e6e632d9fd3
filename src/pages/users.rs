//! User management screen: list, create, role and status changes.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::guard::{self, RouteGuard};
use crate::components::loading_panel::LoadingPanel;
use crate::components::shell::AdminShell;
use crate::net::types::{AccountStatus, Role, User};

/// Roles offered by the account form, with display labels.
const ROLE_OPTIONS: &[(Role, &str)] =
    &[(Role::Admin, "ADMIN"), (Role::Dpo, "DPO"), (Role::User, "USER")];

/// Case-insensitive substring match over name and email.
fn matches_account(user: &User, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    user.full_name.to_lowercase().contains(&query) || user.email.to_lowercase().contains(&query)
}

/// Validate the create-account form.
fn validate_user_form(full_name: &str, email: &str) -> Result<(String, String), &'static str> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err("Enter a full name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((full_name.to_owned(), email.to_owned()))
}

/// Wire name of a role option; used as the select value.
fn role_from_option(value: &str) -> Option<Role> {
    ROLE_OPTIONS
        .iter()
        .find(|(_, name)| *name == value)
        .map(|(role, _)| *role)
}

/// User management page.
#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <RouteGuard allowed=guard::ADMIN_AREA>
            <AdminShell active="/admin/users">
                <UsersContent/>
            </AdminShell>
        </RouteGuard>
    }
}

#[component]
fn UsersContent() -> impl IntoView {
    let reload = RwSignal::new(0u32);
    let users = LocalResource::new(move || {
        let _tick = reload.get();
        crate::net::api::fetch_users()
    });
    let retry = Callback::new(move |()| reload.update(|tick| *tick += 1));

    let query = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);
    let patch_error = RwSignal::new(None::<String>);

    view! {
        <div class="users">
            <header class="users__header">
                <h1>"Users"</h1>
                <input
                    class="users__search"
                    type="search"
                    placeholder="Filter by name or email"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New user"
                </button>
            </header>

            <Show when=move || patch_error.get().is_some()>
                <p class="users__patch-error">{move || patch_error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <LoadingPanel/> }>
                {move || {
                    users.get().map(|result| match result {
                        Ok(list) => view! {
                            <table class="users__table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Email"</th>
                                        <th>"Role"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|user| {
                                            let visible = {
                                                let user = user.clone();
                                                move || matches_account(&user, &query.get())
                                            };
                                            view! {
                                                <Show when=visible>
                                                    <UserRow
                                                        user=user.clone()
                                                        reload=reload
                                                        patch_error=patch_error
                                                    />
                                                </Show>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                            .into_any(),
                        Err(err) => {
                            view! { <ErrorBanner message=err.message on_retry=retry/> }.into_any()
                        }
                    })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <CreateUserDialog
                    on_close=Callback::new(move |()| show_create.set(false))
                    reload=reload
                />
            </Show>
        </div>
    }
}

#[component]
fn UserRow(user: User, reload: RwSignal<u32>, patch_error: RwSignal<Option<String>>) -> impl IntoView {
    let user_id = user.id.clone();
    let is_active = user.status == AccountStatus::Active;

    let apply_patch = move |patch: serde_json::Value| {
        #[cfg(feature = "hydrate")]
        {
            let user_id = user_id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_user(&user_id, &patch).await {
                    Ok(_) => {
                        patch_error.set(None);
                        reload.update(|tick| *tick += 1);
                    }
                    Err(err) => patch_error.set(Some(err.message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (patch, &user_id, reload, patch_error);
        }
    };

    let on_role_change = {
        let apply_patch = apply_patch.clone();
        move |ev: leptos::ev::Event| {
            if let Some(role) = role_from_option(&event_target_value(&ev)) {
                apply_patch(serde_json::json!({ "role": role }));
            }
        }
    };

    let on_toggle_status = {
        let apply_patch = apply_patch.clone();
        move |_| {
            let next = if is_active { AccountStatus::Inactive } else { AccountStatus::Active };
            apply_patch(serde_json::json!({ "status": next }));
        }
    };

    view! {
        <tr class="user-row" class:user-row--inactive=!is_active>
            <td class="user-row__name">{user.full_name.clone()}</td>
            <td class="user-row__email">{user.email.clone()}</td>
            <td>
                <select class="user-row__role" on:change=on_role_change>
                    {ROLE_OPTIONS
                        .iter()
                        .map(|(role, name)| {
                            view! {
                                <option value=*name selected=*role == user.role>
                                    {*name}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </td>
            <td class="user-row__status">{user.status.label()}</td>
            <td>
                <button class="btn user-row__toggle" on:click=on_toggle_status>
                    {if is_active { "Deactivate" } else { "Activate" }}
                </button>
            </td>
        </tr>
    }
}

#[component]
fn CreateUserDialog(on_close: Callback<()>, reload: RwSignal<u32>) -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(Role::User);
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let (name_value, email_value) =
            match validate_user_form(&full_name.get(), &email.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::create_user(&name_value, &email_value, role.get_untracked())
                    .await
                {
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
            let _ = (name_value, email_value, reload);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New user"</h2>
                <label class="dialog__label">
                    "Full name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Role"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            if let Some(value) = role_from_option(&event_target_value(&ev)) {
                                role.set(value);
                            }
                        }
                    >
                        {ROLE_OPTIONS
                            .iter()
                            .map(|(option, name)| {
                                view! {
                                    <option value=*name selected=*option == Role::User>
                                        {*name}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
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
