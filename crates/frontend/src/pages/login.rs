//! Login page

use murmur_frontend_common::use_session;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            if email.trim().is_empty() || password.is_empty() {
                error.set(Some("Email and password are required.".to_string()));
                return;
            }
            submitting.set(true);
            error.set(None);

            let session = session.clone();
            let email_value = email.trim().to_string();
            let password_value = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                // On success the public-only gate redirects home.
                if let Err(err) = session.login(&email_value, &password_value).await {
                    error.set(Some(err.to_string()));
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-xl shadow-sm border border-gray-200 p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-1">{"Welcome back"}</h1>
                <p class="text-gray-500 mb-6">{"Sign in to murmur"}</p>

                if let Some(message) = (*error).clone() {
                    <div class="bg-red-50 border border-red-200 text-red-700 rounded-lg px-4 py-3 mb-4">
                        {message}
                    </div>
                }

                <form {onsubmit} class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Email"}</label>
                        <input
                            type="email"
                            value={(*email).clone()}
                            oninput={on_email}
                            class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                        <input
                            type="password"
                            value={(*password).clone()}
                            oninput={on_password}
                            class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={*submitting}
                        class="w-full py-2.5 rounded-lg bg-blue-600 text-white font-medium hover:bg-blue-700 disabled:opacity-50"
                    >
                        { if *submitting { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>

                <p class="text-sm text-gray-500 mt-6 text-center">
                    {"No account yet? "}
                    <Link<Route> to={Route::Register} classes="text-blue-600 hover:underline">
                        {"Register"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
