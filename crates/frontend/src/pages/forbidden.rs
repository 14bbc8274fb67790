//! 403 page

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(ForbiddenPage)]
pub fn forbidden_page() -> Html {
    html! {
        <div class="min-h-screen bg-gray-100 flex flex-col items-center justify-center px-4">
            <h1 class="text-6xl font-bold text-gray-300 mb-2">{"403"}</h1>
            <p class="text-gray-600 mb-6">{"You do not have permission to view this page."}</p>
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                {"Back to the feed"}
            </Link<Route>>
        </div>
    }
}
