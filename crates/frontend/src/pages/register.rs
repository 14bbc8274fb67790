//! Registration page

use murmur_frontend_common::{use_session, AppConfig};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

fn validate(email: &str, username: &str, password: &str, confirm: &str) -> Result<(), String> {
    if email.trim().is_empty() || username.trim().is_empty() || password.is_empty() {
        return Err("All fields are required.".to_string());
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address.".to_string());
    }
    if password.len() < AppConfig::MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters.",
            AppConfig::MIN_PASSWORD_LEN
        ));
    }
    if password != confirm {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let session = use_session();

    let email = use_state(String::new);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_email = bind(&email);
    let on_username = bind(&username);
    let on_password = bind(&password);
    let on_confirm = bind(&confirm);

    let onsubmit = {
        let session = session.clone();
        let email = email.clone();
        let username = username.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            if let Err(message) = validate(&email, &username, &password, &confirm) {
                error.set(Some(message));
                return;
            }
            submitting.set(true);
            error.set(None);

            let session = session.clone();
            let email_value = email.trim().to_string();
            let username_value = username.trim().to_string();
            let password_value = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                // Registration implies login; the gate redirects home.
                if let Err(err) = session
                    .register(&email_value, &username_value, &password_value)
                    .await
                {
                    error.set(Some(err.to_string()));
                }
                submitting.set(false);
            });
        })
    };

    let field = |label: &str, kind: &'static str, value: String, oninput: Callback<InputEvent>| {
        html! {
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
                <input
                    type={kind}
                    {value}
                    {oninput}
                    class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none"
                />
            </div>
        }
    };

    html! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-xl shadow-sm border border-gray-200 p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-1">{"Create your account"}</h1>
                <p class="text-gray-500 mb-6">{"Join murmur"}</p>

                if let Some(message) = (*error).clone() {
                    <div class="bg-red-50 border border-red-200 text-red-700 rounded-lg px-4 py-3 mb-4">
                        {message}
                    </div>
                }

                <form {onsubmit} class="space-y-4">
                    { field("Email", "email", (*email).clone(), on_email) }
                    { field("Username", "text", (*username).clone(), on_username) }
                    { field("Password", "password", (*password).clone(), on_password) }
                    { field("Confirm password", "password", (*confirm).clone(), on_confirm) }
                    <button
                        type="submit"
                        disabled={*submitting}
                        class="w-full py-2.5 rounded-lg bg-blue-600 text-white font-medium hover:bg-blue-700 disabled:opacity-50"
                    >
                        { if *submitting { "Creating account..." } else { "Register" } }
                    </button>
                </form>

                <p class="text-sm text-gray-500 mt-6 text-center">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">
                        {"Sign in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
