//! Admin user moderation table

use gloo::timers::callback::Timeout;
use murmur_frontend_common::{use_session, ApiError, LoadingSpinner};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::Avatar;
use crate::services::admin::{AdminService, AdminUser};
use crate::utils::{confirm, short_date};

fn displayable(err: &ApiError, fallback: &str) -> String {
    err.server_message()
        .map_or_else(|| fallback.to_string(), str::to_string)
}

#[function_component(AdminUsers)]
pub fn admin_users() -> Html {
    let session = use_session();

    let users = use_state(Vec::<AdminUser>::new);
    let loading = use_state(|| true);
    let search = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let success = use_state(|| Option::<String>::None);

    let reload = {
        let session = session.clone();
        let users = users.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |()| {
            let service = AdminService::new(session.client());
            let users = users.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                match service.list_users().await {
                    Ok(list) => {
                        users.set(list);
                        error.set(None);
                    }
                    Err(err) => {
                        error.set(Some(displayable(&err, "Could not load users.")));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |()| {
            reload.emit(());
        });
    }

    // Transient success banner
    {
        let success = success.clone();
        use_effect_with((*success).clone(), move |message| {
            if message.is_some() {
                Timeout::new(3_000, move || {
                    success.set(None);
                })
                .forget();
            }
        });
    }

    let current_user_id = session
        .user()
        .map(|user| user.id.clone())
        .unwrap_or_default();

    let on_search = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_toggle_status = {
        let session = session.clone();
        let reload = reload.clone();
        let error = error.clone();
        let success = success.clone();
        let current_user_id = current_user_id.clone();
        Callback::from(move |user_id: String| {
            if user_id == current_user_id {
                error.set(Some("You cannot change your own status.".to_string()));
                return;
            }
            let service = AdminService::new(session.client());
            let reload = reload.clone();
            let error = error.clone();
            let success = success.clone();
            spawn_local(async move {
                match service.toggle_user_status(&user_id).await {
                    Ok(()) => {
                        success.set(Some("User status updated.".to_string()));
                        reload.emit(());
                    }
                    Err(err) => {
                        error.set(Some(displayable(&err, "Could not update the user.")));
                    }
                }
            });
        })
    };

    let on_delete = {
        let session = session.clone();
        let reload = reload.clone();
        let error = error.clone();
        let success = success.clone();
        let current_user_id = current_user_id.clone();
        Callback::from(move |(user_id, username): (String, String)| {
            if user_id == current_user_id {
                error.set(Some("You cannot delete your own account.".to_string()));
                return;
            }
            if !confirm(&format!(
                "Delete {username} and everything they posted? This cannot be undone."
            )) {
                return;
            }
            let service = AdminService::new(session.client());
            let reload = reload.clone();
            let error = error.clone();
            let success = success.clone();
            spawn_local(async move {
                match service.delete_user(&user_id).await {
                    Ok(()) => {
                        success.set(Some("User deleted.".to_string()));
                        reload.emit(());
                    }
                    Err(err) => {
                        error.set(Some(displayable(&err, "Could not delete the user.")));
                    }
                }
            });
        })
    };

    if *loading {
        return html! { <LoadingSpinner text="Loading users..." /> };
    }

    let needle = search.to_lowercase();
    let visible: Vec<AdminUser> = users
        .iter()
        .filter(|user| {
            needle.is_empty()
                || user.username.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    html! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Users"}</h1>

            if let Some(message) = (*error).clone() {
                <div class="bg-red-50 border border-red-200 text-red-700 rounded-lg px-4 py-3 mb-4">
                    {message}
                </div>
            }
            if let Some(message) = (*success).clone() {
                <div class="bg-green-50 border border-green-200 text-green-700 rounded-lg px-4 py-3 mb-4">
                    {message}
                </div>
            }

            <input
                type="text"
                value={(*search).clone()}
                oninput={on_search}
                placeholder="Search by username or email..."
                class="w-full max-w-md px-4 py-2 mb-4 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none bg-white"
            />

            <div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden">
                <table class="w-full text-sm">
                    <thead class="bg-gray-50 text-left text-gray-500">
                        <tr>
                            <th class="px-4 py-3">{"User"}</th>
                            <th class="px-4 py-3">{"Email"}</th>
                            <th class="px-4 py-3">{"Role"}</th>
                            <th class="px-4 py-3">{"Status"}</th>
                            <th class="px-4 py-3">{"Joined"}</th>
                            <th class="px-4 py-3"></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.iter().map(|user| {
                            let is_self = user.id == current_user_id;
                            let on_toggle = {
                                let on_toggle_status = on_toggle_status.clone();
                                let id = user.id.clone();
                                Callback::from(move |_| on_toggle_status.emit(id.clone()))
                            };
                            let on_delete = {
                                let on_delete = on_delete.clone();
                                let id = user.id.clone();
                                let username = user.username.clone();
                                Callback::from(move |_| on_delete.emit((id.clone(), username.clone())))
                            };
                            let role_class = if user.role == "admin" {
                                "px-3 py-1 rounded-full text-xs font-semibold bg-purple-100 text-purple-700"
                            } else {
                                "px-3 py-1 rounded-full text-xs font-semibold bg-gray-100 text-gray-700"
                            };
                            let status_class = if user.is_active {
                                "px-3 py-1 rounded-full text-xs font-semibold bg-green-100 text-green-700 disabled:opacity-50"
                            } else {
                                "px-3 py-1 rounded-full text-xs font-semibold bg-red-100 text-red-700 disabled:opacity-50"
                            };
                            html! {
                                <tr key={user.id.clone()} class="border-t border-gray-100 hover:bg-gray-50">
                                    <td class="px-4 py-3">
                                        <div class="flex items-center gap-2">
                                            <Avatar
                                                url={user.avatar_url.clone()}
                                                name={user.username.clone()}
                                                size={28}
                                            />
                                            <span class="font-medium text-gray-800">{&user.username}</span>
                                        </div>
                                    </td>
                                    <td class="px-4 py-3 text-gray-600">{&user.email}</td>
                                    <td class="px-4 py-3">
                                        <span class={role_class}>
                                            { if user.role == "admin" { "Admin" } else { "User" } }
                                        </span>
                                    </td>
                                    <td class="px-4 py-3">
                                        <button
                                            onclick={on_toggle}
                                            disabled={is_self}
                                            class={status_class}
                                        >
                                            { if user.is_active { "Active" } else { "Locked" } }
                                        </button>
                                    </td>
                                    <td class="px-4 py-3 text-gray-500">{short_date(&user.created_at)}</td>
                                    <td class="px-4 py-3 text-right">
                                        <button
                                            onclick={on_delete}
                                            disabled={is_self}
                                            class="text-red-600 hover:underline disabled:opacity-50 disabled:no-underline"
                                        >
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
                if visible.is_empty() {
                    <p class="text-center text-gray-500 py-8">{"No users match."}</p>
                }
            </div>
        </div>
    }
}
