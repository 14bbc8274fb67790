//! Admin dashboard: site totals and recent posts

use murmur_frontend_common::{use_session, LoadingSpinner};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::Avatar;
use crate::services::admin::{AdminService, AdminStats};
use crate::utils::time_ago;

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let session = use_session();

    let stats = use_state(|| Option::<AdminStats>::None);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    {
        let session = session.clone();
        let stats = stats.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |()| {
            let service = AdminService::new(session.client());
            spawn_local(async move {
                match service.stats().await {
                    Ok(found) => {
                        stats.set(Some(found));
                        error.set(None);
                    }
                    Err(err) => {
                        error.set(Some(format!("Could not load stats: {err}")));
                    }
                }
                loading.set(false);
            });
        });
    }

    if *loading {
        return html! { <LoadingSpinner text="Loading dashboard..." /> };
    }

    let stat_card = |label: &str, value: u64| {
        html! {
            <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                <p class="text-sm text-gray-500">{label}</p>
                <p class="text-3xl font-bold text-gray-900 mt-1">{value}</p>
            </div>
        }
    };

    html! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Dashboard"}</h1>

            if let Some(message) = (*error).clone() {
                <div class="bg-red-50 border border-red-200 text-red-700 rounded-lg px-4 py-3 mb-4">
                    {message}
                </div>
            }

            if let Some(stats) = &*stats {
                <>
                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 mb-8">
                        { stat_card("Users", stats.total_users) }
                        { stat_card("Posts", stats.total_posts) }
                        { stat_card("Comments", stats.total_comments) }
                    </div>

                    <h2 class="text-lg font-semibold text-gray-800 mb-3">{"Recent posts"}</h2>
                    if stats.recent_posts.is_empty() {
                        <p class="text-gray-500">{"Nothing published recently."}</p>
                    } else {
                        <div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden">
                            <table class="w-full text-sm">
                                <thead class="bg-gray-50 text-left text-gray-500">
                                    <tr>
                                        <th class="px-4 py-3">{"Author"}</th>
                                        <th class="px-4 py-3">{"Content"}</th>
                                        <th class="px-4 py-3">{"Published"}</th>
                                        <th class="px-4 py-3">{"Likes"}</th>
                                        <th class="px-4 py-3">{"Comments"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for stats.recent_posts.iter().map(|post| html! {
                                        <tr key={post.id} class="border-t border-gray-100 hover:bg-gray-50">
                                            <td class="px-4 py-3">
                                                <div class="flex items-center gap-2">
                                                    <Avatar
                                                        url={post.user.avatar_url.clone()}
                                                        name={post.user.username.clone()}
                                                        size={28}
                                                    />
                                                    <span class="font-medium text-gray-800">{&post.user.username}</span>
                                                </div>
                                            </td>
                                            <td class="px-4 py-3 text-gray-700 max-w-xs truncate">{&post.content}</td>
                                            <td class="px-4 py-3 text-gray-500">{time_ago(&post.created_at)}</td>
                                            <td class="px-4 py-3 text-gray-500">{post.like_count}</td>
                                            <td class="px-4 py-3 text-gray-500">{post.comment_count}</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    }
                </>
            }
        </div>
    }
}
