//! Post authoring page

use murmur_frontend_common::{use_session, AppConfig};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::posts::{ImageUpload, PostService};
use crate::utils::read_image_files;

#[function_component(CreatePostPage)]
pub fn create_post_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("CreatePostPage must be rendered under a router");

    let title = use_state(String::new);
    let content = use_state(String::new);
    let images = use_state(Vec::<ImageUpload>::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

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

    let on_files = {
        let images = images.clone();
        let error = error.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let images = images.clone();
            let error = error.clone();
            spawn_local(async move {
                match read_image_files(&input).await {
                    Ok(mut uploads) => {
                        let mut next = (*images).clone();
                        next.append(&mut uploads);
                        if next.len() > AppConfig::MAX_POST_IMAGES {
                            error.set(Some(format!(
                                "A post can have at most {} images.",
                                AppConfig::MAX_POST_IMAGES
                            )));
                            next.truncate(AppConfig::MAX_POST_IMAGES);
                        }
                        images.set(next);
                    }
                    Err(message) => error.set(Some(message)),
                }
                // Allow re-selecting the same file
                input.set_value("");
            });
        })
    };

    let on_remove_image = {
        let images = images.clone();
        Callback::from(move |index: usize| {
            let mut next = (*images).clone();
            if index < next.len() {
                next.remove(index);
            }
            images.set(next);
        })
    };

    let onsubmit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let title = title.clone();
        let content = content.clone();
        let images = images.clone();
        let error = error.clone();
        let submitting = submitting.clone();
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
            let uploads = (*images).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match service.create(&title_value, &content_value, uploads).await {
                    Ok(()) => navigator.push(&Route::Home),
                    Err(err) => {
                        error.set(Some(format!("Could not publish the post: {err}")));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="max-w-2xl mx-auto bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h1 class="text-2xl font-bold text-gray-900 mb-4">{"New post"}</h1>

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
                        placeholder="What's on your mind?"
                        class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Images"}</label>
                    <input
                        type="file"
                        accept="image/*"
                        multiple={true}
                        onchange={on_files}
                        class="block w-full text-sm text-gray-500"
                    />
                    if !images.is_empty() {
                        <ul class="mt-2 space-y-1">
                            { for images.iter().enumerate().map(|(index, image)| {
                                let on_remove = {
                                    let on_remove_image = on_remove_image.clone();
                                    Callback::from(move |_| on_remove_image.emit(index))
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
                        to={Route::Home}
                        classes="px-4 py-2 rounded-lg border border-gray-300 text-gray-700 hover:bg-gray-50"
                    >
                        {"Cancel"}
                    </Link<Route>>
                    <button
                        type="submit"
                        disabled={*submitting}
                        class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
                    >
                        { if *submitting { "Publishing..." } else { "Publish" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
