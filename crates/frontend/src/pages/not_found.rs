//! 404 page

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen bg-gray-100 flex flex-col items-center justify-center px-4">
            <h1 class="text-6xl font-bold text-gray-300 mb-2">{"404"}</h1>
            <p class="text-gray-600 mb-6">{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                {"Back to the feed"}
            </Link<Route>>
        </div>
    }
}
