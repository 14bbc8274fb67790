//! Comment thread with inline create and delete

use murmur_frontend_common::use_session;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::Avatar;
use crate::services::comments::{Comment, CommentService};
use crate::utils::{confirm, time_ago};

#[derive(Properties, Clone, PartialEq)]
pub struct CommentListProps {
    pub post_id: i64,
}

#[function_component(CommentList)]
pub fn comment_list(props: &CommentListProps) -> Html {
    let session = use_session();

    let comments = use_state(Vec::<Comment>::new);
    let draft = use_state(String::new);
    let loading = use_state(|| true);
    let submitting = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    {
        let session = session.clone();
        let comments = comments.clone();
        let loading = loading.clone();
        use_effect_with(props.post_id, move |post_id| {
            let post_id = *post_id;
            let service = CommentService::new(session.client());
            spawn_local(async move {
                loading.set(true);
                match service.list_for_post(post_id).await {
                    Ok(list) => comments.set(list),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("failed to load comments: {err}").into(),
                        );
                    }
                }
                loading.set(false);
            });
        });
    }

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            draft.set(area.value());
        })
    };

    let onsubmit = {
        let session = session.clone();
        let comments = comments.clone();
        let draft = draft.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let post_id = props.post_id;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let content = draft.trim().to_string();
            if content.is_empty() || *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);

            let service = CommentService::new(session.client());
            let comments = comments.clone();
            let draft = draft.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            spawn_local(async move {
                match service.create(post_id, &content).await {
                    Ok(comment) => {
                        let mut next = (*comments).clone();
                        next.push(comment);
                        comments.set(next);
                        draft.set(String::new());
                    }
                    Err(err) => {
                        error.set(Some(format!("Could not post comment: {err}")));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_delete = {
        let session = session.clone();
        let comments = comments.clone();
        Callback::from(move |comment_id: i64| {
            if !confirm("Delete this comment?") {
                return;
            }
            let service = CommentService::new(session.client());
            let comments = comments.clone();
            spawn_local(async move {
                match service.delete(comment_id).await {
                    Ok(()) => {
                        comments.set(
                            comments
                                .iter()
                                .filter(|c| c.id != comment_id)
                                .cloned()
                                .collect(),
                        );
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("failed to delete comment: {err}").into(),
                        );
                    }
                }
            });
        })
    };

    let current_user_id = session.user().map(|user| user.id.clone());

    html! {
        <section class="mt-6">
            <h3 class="text-lg font-semibold text-gray-800 mb-3">
                {format!("Comments ({})", comments.len())}
            </h3>

            <form {onsubmit} class="mb-4">
                <textarea
                    value={(*draft).clone()}
                    {oninput}
                    rows="2"
                    placeholder="Write a comment..."
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none bg-white text-gray-800"
                />
                if let Some(message) = (*error).clone() {
                    <p class="text-sm text-red-600 mt-1">{message}</p>
                }
                <div class="flex justify-end mt-2">
                    <button
                        type="submit"
                        disabled={*submitting || draft.trim().is_empty()}
                        class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
                    >
                        { if *submitting { "Posting..." } else { "Post comment" } }
                    </button>
                </div>
            </form>

            if *loading {
                <p class="text-gray-500">{"Loading comments..."}</p>
            } else if comments.is_empty() {
                <p class="text-gray-500">{"No comments yet."}</p>
            } else {
                <ul class="space-y-3">
                    { for comments.iter().map(|comment| {
                        let own = current_user_id.as_deref() == Some(comment.user.id.as_str());
                        let on_delete = {
                            let on_delete = on_delete.clone();
                            let id = comment.id;
                            Callback::from(move |_| on_delete.emit(id))
                        };
                        html! {
                            <li key={comment.id} class="bg-gray-50 rounded-lg p-3">
                                <div class="flex items-start justify-between">
                                    <Link<Route>
                                        to={Route::Profile { id: comment.user.id.clone() }}
                                        classes="flex items-center gap-2"
                                    >
                                        <Avatar
                                            url={comment.user.avatar_url.clone()}
                                            name={comment.user.username.clone()}
                                            size={28}
                                        />
                                        <span class="font-medium text-gray-800">{&comment.user.username}</span>
                                        <span class="text-xs text-gray-500">{time_ago(&comment.created_at)}</span>
                                    </Link<Route>>
                                    if own {
                                        <button
                                            onclick={on_delete}
                                            class="text-xs text-red-600 hover:underline"
                                        >
                                            {"Delete"}
                                        </button>
                                    }
                                </div>
                                <p class="text-gray-700 mt-1 whitespace-pre-line">{&comment.content}</p>
                            </li>
                        }
                    }) }
                </ul>
            }
        </section>
    }
}
