//! Profile settings page

use murmur_frontend_common::use_session;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::posts::ImageUpload;
use crate::services::users::UserService;
use crate::utils::read_image_files;

#[function_component(EditProfilePage)]
pub fn edit_profile_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("EditProfilePage must be rendered under a router");

    let username = use_state(String::new);
    let bio = use_state(String::new);
    let avatar = use_state(|| Option::<ImageUpload>::None);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let user_id = session.user().map(|user| user.id.clone()).unwrap_or_default();

    // Prefill from the freshest profile record rather than the session copy
    {
        let session = session.clone();
        let username = username.clone();
        let bio = bio.clone();
        use_effect_with(user_id.clone(), move |id| {
            if id.is_empty() {
                return;
            }
            let id = id.clone();
            let service = UserService::new(session.client());
            spawn_local(async move {
                match service.get(&id).await {
                    Ok(profile) => {
                        username.set(profile.username);
                        bio.set(profile.bio.unwrap_or_default());
                    }
                    Err(err) => {
                        tracing::error!("failed to load own profile: {err}");
                    }
                }
            });
        });
    }

    let on_username = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_bio = {
        let bio = bio.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            bio.set(area.value());
        })
    };

    let on_avatar = {
        let avatar = avatar.clone();
        let error = error.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let avatar = avatar.clone();
            let error = error.clone();
            spawn_local(async move {
                match read_image_files(&input).await {
                    Ok(mut uploads) => {
                        if let Some(upload) = uploads.pop() {
                            avatar.set(Some(upload));
                        }
                    }
                    Err(message) => error.set(Some(message)),
                }
                input.set_value("");
            });
        })
    };

    let onsubmit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let username = username.clone();
        let bio = bio.clone();
        let avatar = avatar.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let user_id = user_id.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            if username.trim().is_empty() {
                error.set(Some("Username cannot be empty.".to_string()));
                return;
            }
            submitting.set(true);
            error.set(None);

            let service = UserService::new(session.client());
            let navigator = navigator.clone();
            let id = user_id.clone();
            let username_value = (*username).clone();
            let bio_value = (*bio).clone();
            let avatar_value = (*avatar).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match service
                    .update_profile(&id, &username_value, &bio_value, avatar_value)
                    .await
                {
                    Ok(()) => navigator.push(&Route::Profile { id }),
                    Err(err) => {
                        error.set(Some(format!("Could not update the profile: {err}")));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="max-w-2xl mx-auto bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h1 class="text-2xl font-bold text-gray-900 mb-4">{"Edit profile"}</h1>

            if let Some(message) = (*error).clone() {
                <div class="bg-red-50 border border-red-200 text-red-700 rounded-lg px-4 py-3 mb-4">
                    {message}
                </div>
            }

            <form {onsubmit} class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Username"}</label>
                    <input
                        type="text"
                        value={(*username).clone()}
                        oninput={on_username}
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Bio"}</label>
                    <textarea
                        value={(*bio).clone()}
                        oninput={on_bio}
                        rows="3"
                        class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Avatar"}</label>
                    <input
                        type="file"
                        accept="image/*"
                        onchange={on_avatar}
                        class="block w-full text-sm text-gray-500"
                    />
                    if let Some(upload) = &*avatar {
                        <p class="text-sm text-gray-500 mt-1">{format!("Selected: {}", upload.file_name)}</p>
                    }
                </div>
                <div class="flex justify-end gap-3">
                    <Link<Route>
                        to={Route::Profile { id: user_id.clone() }}
                        classes="px-4 py-2 rounded-lg border border-gray-300 text-gray-700 hover:bg-gray-50"
                    >
                        {"Cancel"}
                    </Link<Route>>
                    <button
                        type="submit"
                        disabled={*submitting}
                        class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
                    >
                        { if *submitting { "Saving..." } else { "Save" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
