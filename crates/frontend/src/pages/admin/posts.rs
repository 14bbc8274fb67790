//! Admin post moderation table

use murmur_frontend_common::{use_session, ApiError, LoadingSpinner};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::Avatar;
use crate::services::admin::{AdminPost, AdminService};
use crate::utils::{confirm, time_ago};

fn displayable(err: &ApiError, fallback: &str) -> String {
    err.server_message()
        .map_or_else(|| fallback.to_string(), str::to_string)
}

#[function_component(AdminPosts)]
pub fn admin_posts() -> Html {
    let session = use_session();

    let posts = use_state(Vec::<AdminPost>::new);
    let loading = use_state(|| true);
    let search = use_state(String::new);
    let error = use_state(|| Option::<String>::None);

    let reload = {
        let session = session.clone();
        let posts = posts.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |()| {
            let service = AdminService::new(session.client());
            let posts = posts.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                match service.list_posts().await {
                    Ok(list) => {
                        posts.set(list);
                        error.set(None);
                    }
                    Err(err) => {
                        error.set(Some(displayable(&err, "Could not load posts.")));
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

    let on_search = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_delete = {
        let session = session.clone();
        let reload = reload.clone();
        let error = error.clone();
        Callback::from(move |post_id: i64| {
            if !confirm("Delete this post? This cannot be undone.") {
                return;
            }
            let service = AdminService::new(session.client());
            let reload = reload.clone();
            let error = error.clone();
            spawn_local(async move {
                match service.delete_post(post_id).await {
                    Ok(()) => reload.emit(()),
                    Err(err) => {
                        error.set(Some(displayable(&err, "Could not delete the post.")));
                    }
                }
            });
        })
    };

    if *loading {
        return html! { <LoadingSpinner text="Loading posts..." /> };
    }

    let needle = search.to_lowercase();
    let visible: Vec<AdminPost> = posts
        .iter()
        .filter(|post| {
            needle.is_empty()
                || post.content.to_lowercase().contains(&needle)
                || post
                    .title
                    .as_ref()
                    .is_some_and(|title| title.to_lowercase().contains(&needle))
                || post.user.username.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    html! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Posts"}</h1>

            if let Some(message) = (*error).clone() {
                <div class="bg-red-50 border border-red-200 text-red-700 rounded-lg px-4 py-3 mb-4">
                    {message}
                </div>
            }

            <input
                type="text"
                value={(*search).clone()}
                oninput={on_search}
                placeholder="Search by author, title, or content..."
                class="w-full max-w-md px-4 py-2 mb-4 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none bg-white"
            />

            <div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden">
                <table class="w-full text-sm">
                    <thead class="bg-gray-50 text-left text-gray-500">
                        <tr>
                            <th class="px-4 py-3">{"Author"}</th>
                            <th class="px-4 py-3">{"Content"}</th>
                            <th class="px-4 py-3">{"Published"}</th>
                            <th class="px-4 py-3">{"Likes"}</th>
                            <th class="px-4 py-3">{"Comments"}</th>
                            <th class="px-4 py-3"></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.iter().map(|post| {
                            let on_delete = {
                                let on_delete = on_delete.clone();
                                let id = post.id;
                                Callback::from(move |_| on_delete.emit(id))
                            };
                            html! {
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
                                    <td class="px-4 py-3 text-right space-x-3">
                                        <Link<Route>
                                            to={Route::PostDetail { id: post.id }}
                                            classes="text-blue-600 hover:underline"
                                        >
                                            {"View"}
                                        </Link<Route>>
                                        <button onclick={on_delete} class="text-red-600 hover:underline">
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
                if visible.is_empty() {
                    <p class="text-center text-gray-500 py-8">{"No posts match."}</p>
                }
            </div>
        </div>
    }
}
