//! Feed card for a single post

use murmur_frontend_common::use_session;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{Avatar, PostImages};
use crate::services::posts::{Post, PostService};
use crate::utils::{confirm, time_ago};

#[derive(Properties, Clone, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
    /// Fired after this card's post was deleted on the server
    #[prop_or_default]
    pub on_deleted: Option<Callback<i64>>,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("PostCard must be rendered under a router");

    let liked = use_state(|| false);
    let menu_open = use_state(|| false);
    let deleting = use_state(|| false);

    let post = &props.post;
    let is_owner = session
        .user()
        .is_some_and(|user| user.id == post.user.id);

    let on_toggle_like = {
        let liked = liked.clone();
        Callback::from(move |_| liked.set(!*liked))
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let on_edit = {
        let navigator = navigator.clone();
        let id = post.id;
        Callback::from(move |_| navigator.push(&Route::EditPost { id }))
    };

    let on_delete = {
        let session = session.clone();
        let menu_open = menu_open.clone();
        let deleting = deleting.clone();
        let on_deleted = props.on_deleted.clone();
        let id = post.id;
        Callback::from(move |_| {
            if !confirm("Delete this post? This cannot be undone.") {
                return;
            }
            menu_open.set(false);
            deleting.set(true);

            let service = PostService::new(session.client());
            let deleting = deleting.clone();
            let on_deleted = on_deleted.clone();
            spawn_local(async move {
                match service.delete(id).await {
                    Ok(()) => {
                        if let Some(on_deleted) = on_deleted {
                            on_deleted.emit(id);
                        }
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("failed to delete post: {err}").into());
                    }
                }
                deleting.set(false);
            });
        })
    };

    let like_class = if *liked {
        "flex items-center gap-2 px-4 py-2 rounded-lg text-blue-600 bg-blue-50"
    } else {
        "flex items-center gap-2 px-4 py-2 rounded-lg text-gray-600 hover:bg-gray-100"
    };

    html! {
        <article class="bg-white rounded-xl shadow-sm border border-gray-200 p-4 mb-4">
            <div class="flex items-start justify-between">
                <Link<Route>
                    to={Route::Profile { id: post.user.id.clone() }}
                    classes="flex items-center gap-3"
                >
                    <Avatar url={post.user.avatar_url.clone()} name={post.user.username.clone()} size={40} />
                    <div>
                        <p class="font-semibold text-gray-800">{&post.user.username}</p>
                        <p class="text-xs text-gray-500">{time_ago(&post.created_at)}</p>
                    </div>
                </Link<Route>>
                if is_owner {
                    <div class="relative">
                        <button
                            onclick={on_toggle_menu}
                            class="px-2 py-1 rounded-lg text-gray-500 hover:bg-gray-100"
                        >
                            {"⋯"}
                        </button>
                        if *menu_open {
                            <div class="absolute right-0 mt-1 w-36 bg-white border border-gray-200 rounded-lg shadow-lg z-10">
                                <button
                                    onclick={on_edit}
                                    class="block w-full text-left px-4 py-2 text-sm text-gray-700 hover:bg-gray-50"
                                >
                                    {"Edit"}
                                </button>
                                <button
                                    onclick={on_delete}
                                    disabled={*deleting}
                                    class="block w-full text-left px-4 py-2 text-sm text-red-600 hover:bg-red-50 disabled:opacity-50"
                                >
                                    { if *deleting { "Deleting..." } else { "Delete" } }
                                </button>
                            </div>
                        }
                    </div>
                }
            </div>

            <Link<Route> to={Route::PostDetail { id: post.id }} classes="block mt-3">
                if let Some(title) = &post.title {
                    if !title.is_empty() {
                        <h2 class="text-lg font-bold text-gray-900 mb-1">{title}</h2>
                    }
                }
                <p class="text-gray-700 whitespace-pre-line">{&post.content}</p>
            </Link<Route>>

            <PostImages images={post.images.clone()} />

            <div class="flex items-center justify-between mt-3 text-sm text-gray-500">
                <span>{format!("{} likes", post.like_count)}</span>
                <span>{format!("{} comments", post.comment_count)}</span>
            </div>

            <div class="flex border-t border-gray-100 mt-2 pt-2">
                <button onclick={on_toggle_like} class={like_class}>
                    { if *liked { "Liked" } else { "Like" } }
                </button>
                <Link<Route>
                    to={Route::PostDetail { id: post.id }}
                    classes="flex items-center gap-2 px-4 py-2 rounded-lg text-gray-600 hover:bg-gray-100"
                >
                    {"Comment"}
                </Link<Route>>
            </div>
        </article>
    }
}
