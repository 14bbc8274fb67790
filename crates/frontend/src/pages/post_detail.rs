//! Post detail page

use murmur_frontend_common::{use_session, LoadingSpinner};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{Avatar, CommentList, PostImages};
use crate::services::posts::{Post, PostService};
use crate::utils::time_ago;

#[derive(Properties, Clone, PartialEq)]
pub struct PostDetailProps {
    pub id: i64,
}

#[function_component(PostDetailPage)]
pub fn post_detail_page(props: &PostDetailProps) -> Html {
    let session = use_session();

    let post = use_state(|| Option::<Post>::None);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let liked = use_state(|| false);

    {
        let session = session.clone();
        let post = post.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            let service = PostService::new(session.client());
            spawn_local(async move {
                loading.set(true);
                match service.get(id).await {
                    Ok(found) => {
                        post.set(Some(found));
                        error.set(None);
                    }
                    Err(err) => {
                        error.set(Some(format!("Could not load this post: {err}")));
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_toggle_like = {
        let liked = liked.clone();
        Callback::from(move |_| liked.set(!*liked))
    };

    if *loading {
        return html! { <LoadingSpinner text="Loading post..." /> };
    }

    let Some(post) = (*post).clone() else {
        return html! {
            <div class="text-center py-12">
                <p class="text-gray-600 mb-4">
                    { (*error).clone().unwrap_or_else(|| "This post does not exist.".to_string()) }
                </p>
                <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                    {"Back to the feed"}
                </Link<Route>>
            </div>
        };
    };

    let is_owner = session
        .user()
        .is_some_and(|user| user.id == post.user.id);

    let like_class = if *liked {
        "px-4 py-2 rounded-lg text-blue-600 bg-blue-50"
    } else {
        "px-4 py-2 rounded-lg text-gray-600 hover:bg-gray-100"
    };

    html! {
        <article class="max-w-2xl mx-auto bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <div class="flex items-center justify-between">
                <Link<Route>
                    to={Route::Profile { id: post.user.id.clone() }}
                    classes="flex items-center gap-3"
                >
                    <Avatar
                        url={post.user.avatar_url.clone()}
                        name={post.user.username.clone()}
                        size={44}
                    />
                    <div>
                        <p class="font-semibold text-gray-800">{&post.user.username}</p>
                        <p class="text-xs text-gray-500">{time_ago(&post.created_at)}</p>
                    </div>
                </Link<Route>>
                if is_owner {
                    <Link<Route>
                        to={Route::EditPost { id: post.id }}
                        classes="text-sm text-blue-600 hover:underline"
                    >
                        {"Edit"}
                    </Link<Route>>
                }
            </div>

            if let Some(title) = &post.title {
                if !title.is_empty() {
                    <h1 class="text-2xl font-bold text-gray-900 mt-4">{title}</h1>
                }
            }
            <p class="text-gray-700 mt-3 whitespace-pre-line">{&post.content}</p>

            <PostImages images={post.images.clone()} />

            <div class="flex items-center gap-6 mt-4 text-sm text-gray-500">
                <span>{format!("{} likes", post.like_count)}</span>
                <span>{format!("{} comments", post.comment_count)}</span>
            </div>

            <div class="border-t border-gray-100 mt-3 pt-3">
                <button onclick={on_toggle_like} class={like_class}>
                    { if *liked { "Liked" } else { "Like" } }
                </button>
            </div>

            <CommentList post_id={post.id} />
        </article>
    }
}
