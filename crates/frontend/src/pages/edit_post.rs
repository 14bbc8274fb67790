//! Post editing page
//!
//! Existing images can be marked for removal; removals are issued before the
//! multipart update so the server never sees a stale image list.

use std::collections::HashSet;

use murmur_frontend_common::{use_session, AppConfig, LoadingSpinner};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::posts::{ImageUpload, Post, PostImage, PostService};
use crate::utils::read_image_files;

#[derive(Properties, Clone, PartialEq)]
pub struct EditPostProps {
    pub id: i64,
}

#[function_component(EditPostPage)]
pub fn edit_post_page(props: &EditPostProps) -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("EditPostPage must be rendered under a router");

    let loading = use_state(|| true);
    let title = use_state(String::new);
    let content = use_state(String::new);
    let existing_images = use_state(Vec::<PostImage>::new);
    let removed_images = use_state(HashSet::<i64>::new);
    let new_images = use_state(Vec::<ImageUpload>::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    {
        let session = session.clone();
        let loading = loading.clone();
        let title = title.clone();
        let content = content.clone();
        let existing_images = existing_images.clone();
        let error = error.clone();
        let current_user_id = session.user().map(|user| user.id.clone());
        let navigator = navigator.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            let service = PostService::new(session.client());
            spawn_local(async move {
                match service.get(id).await {
                    Ok(post) => {
                        // Only the author may edit
                        if current_user_id.as_deref() != Some(post.user.id.as_str()) {
                            navigator.replace(&Route::PostDetail { id });
                            return;
                        }
                        let Post {
                            title: post_title,
                            content: post_content,
                            images,
                            ..
                        } = post;
                        title.set(post_title.unwrap_or_default());
                        content.set(post_content);
                        existing_images.set(images);
                        loading.set(false);
                    }
                    Err(err) => {
                        error.set(Some(format!("Could not load the post: {err}")));
                        loading.set(false);
                    }
                }
            });
        });
    }

    let on_title = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_content = {
        let content = content.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            content.set(area.value());
        })
    };

    let on_toggle_removed = {
        let removed_images = removed_images.clone();
        Callback::from(move |image_id: i64| {
            let mut next = (*removed_images).clone();
            if !next.remove(&image_id) {
                next.insert(image_id);
            }
            removed_images.set(next);
        })
    };

    let on_files = {
        let new_images = new_images.clone();
        let existing_images = existing_images.clone();
        let removed_images = removed_images.clone();
        let error = error.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let new_images = new_images.clone();
            let existing_images = existing_images.clone();
            let removed_images = removed_images.clone();
            let error = error.clone();
            spawn_local(async move {
                match read_image_files(&input).await {
                    Ok(mut uploads) => {
                        let kept = existing_images
                            .iter()
                            .filter(|image| !removed_images.contains(&image.id))
                            .count();
                        let mut next = (*new_images).clone();
                        next.append(&mut uploads);
                        if kept + next.len() > AppConfig::MAX_POST_IMAGES {
                            error.set(Some(format!(
                                "A post can have at most {} images.",
                                AppConfig::MAX_POST_IMAGES
                            )));
                            next.truncate(AppConfig::MAX_POST_IMAGES.saturating_sub(kept));
                        }
                        new_images.set(next);
                    }
                    Err(message) => error.set(Some(message)),
                }
                input.set_value("");
            });
        })
    };

    let on_remove_new = {
        let new_images = new_images.clone();
        Callback::from(move |index: usize| {
            let mut next = (*new_images).clone();
            if index < next.len() {
                next.remove(index);
            }
            new_images.set(next);
        })
    };

    let onsubmit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let title = title.clone();
        let content = content.clone();
        let removed_images = removed_images.clone();
        let new_images = new_images.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let id = props.id;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            if content.trim().is_empty() {
                error.set(Some("Post content cannot be empty.".to_string()));
                return;
            }
            submitting.set(true);
            error.set(None);

            let service = PostService::new(session.client());
            let navigator = navigator.clone();
            let title_value = (*title).clone();
            let content_value = (*content).clone();
            let to_remove: Vec<i64> = removed_images.iter().copied().collect();
            let uploads = (*new_images).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                for image_id in to_remove {
                    if let Err(err) = service.delete_image(image_id).await {
                        error.set(Some(format!("Could not remove an image: {err}")));
                        submitting.set(false);
                        return;
                    }
                }
                match service.update(id, &title_value, &content_value, uploads).await {
                    Ok(()) => navigator.push(&Route::PostDetail { id }),
                    Err(err) => {
                        error.set(Some(format!("Could not save the post: {err}")));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    if *loading {
        return html! { <LoadingSpinner text="Loading post..." /> };
    }

    html! {
        <div class="max-w-2xl mx-auto bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h1 class="text-2xl font-bold text-gray-900 mb-4">{"Edit post"}</h1>

            if let Some(message) = (*error).clone() {
                <div class="bg-red-50 border border-red-200 text-red-700 rounded-lg px-4 py-3 mb-4">
                    {message}
                </div>
            }

            <form {onsubmit} class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Title (optional)"}</label>
                    <input
                        type="text"
                        value={(*title).clone()}
                        oninput={on_title}
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Content"}</label>
                    <textarea
                        value={(*content).clone()}
                        oninput={on_content}
                        rows="6"
                        class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none"
                    />
                </div>

                if !existing_images.is_empty() {
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Current images"}</label>
                        <div class="grid grid-cols-3 gap-2">
                            { for existing_images.iter().map(|image| {
                                let marked = removed_images.contains(&image.id);
                                let on_toggle = {
                                    let on_toggle_removed = on_toggle_removed.clone();
                                    let image_id = image.id;
                                    Callback::from(move |_| on_toggle_removed.emit(image_id))
                                };
                                let overlay = if marked {
                                    "absolute inset-0 bg-black/60 text-white flex items-center justify-center rounded-lg text-sm"
                                } else {
                                    "hidden"
                                };
                                html! {
                                    <div key={image.id} class="relative cursor-pointer" onclick={on_toggle}>
                                        <img src={image.url.clone()} alt="" class="w-full h-24 object-cover rounded-lg" />
                                        <div class={overlay}>{"Will be removed"}</div>
                                    </div>
                                }
                            }) }
                        </div>
                        <p class="text-xs text-gray-500 mt-1">{"Click an image to mark it for removal."}</p>
                    </div>
                }

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Add images"}</label>
                    <input
                        type="file"
                        accept="image/*"
                        multiple={true}
                        onchange={on_files}
                        class="block w-full text-sm text-gray-500"
                    />
                    if !new_images.is_empty() {
                        <ul class="mt-2 space-y-1">
                            { for new_images.iter().enumerate().map(|(index, image)| {
                                let on_remove = {
                                    let on_remove_new = on_remove_new.clone();
                                    Callback::from(move |_| on_remove_new.emit(index))
                                };
                                html! {
                                    <li class="flex items-center justify-between text-sm bg-gray-50 rounded-lg px-3 py-2">
                                        <span class="truncate">{&image.file_name}</span>
                                        <button
                                            type="button"
                                            onclick={on_remove}
                                            class="text-red-600 hover:underline ml-3"
                                        >
                                            {"Remove"}
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                </div>

                <div class="flex justify-end gap-3">
                    <Link<Route>
                        to={Route::PostDetail { id: props.id }}
                        classes="px-4 py-2 rounded-lg border border-gray-300 text-gray-700 hover:bg-gray-50"
                    >
                        {"Cancel"}
                    </Link<Route>>
                    <button
                        type="submit"
                        disabled={*submitting}
                        class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
                    >
                        { if *submitting { "Saving..." } else { "Save changes" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
