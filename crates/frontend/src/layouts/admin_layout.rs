//! Moderation dashboard layout: sidebar navigation, content right

use murmur_frontend_common::use_session;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub children: Children,
}

#[function_component(AdminLayout)]
pub fn admin_layout(props: &AdminLayoutProps) -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("AdminLayout must be rendered under a router");
    let current = use_route::<Route>();

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session.logout();
            navigator.replace(&Route::Login);
        })
    };

    let nav_link = |route: Route, label: &str| {
        let active = current.as_ref() == Some(&route);
        let classes = if active {
            "block px-4 py-2 rounded-lg bg-blue-600 text-white"
        } else {
            "block px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100"
        };
        html! {
            <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
        }
    };

    html! {
        <div class="min-h-screen bg-gray-100 flex">
            <aside class="w-56 bg-white border-r border-gray-200 p-4 flex flex-col">
                <Link<Route> to={Route::Admin} classes="text-xl font-bold text-blue-600 mb-6 block">
                    {"murmur admin"}
                </Link<Route>>
                <nav class="space-y-1 flex-1">
                    { nav_link(Route::Admin, "Dashboard") }
                    { nav_link(Route::AdminUsers, "Users") }
                    { nav_link(Route::AdminPosts, "Posts") }
                </nav>
                <div class="space-y-1 border-t border-gray-200 pt-4">
                    <Link<Route> to={Route::Home} classes="block px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100">
                        {"Back to site"}
                    </Link<Route>>
                    <button
                        onclick={on_logout}
                        class="block w-full text-left px-4 py-2 rounded-lg text-red-600 hover:bg-red-50"
                    >
                        {"Log out"}
                    </button>
                </div>
            </aside>
            <main class="flex-1 p-6 overflow-x-auto">
                { props.children.clone() }
            </main>
        </div>
    }
}
