//! Main site layout: header with navigation, content below

use murmur_frontend_common::use_session;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::Avatar;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("MainLayout must be rendered under a router");

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session.logout();
            navigator.replace(&Route::Login);
        })
    };

    let user = session.user().cloned();
    let is_admin = session.is_admin();

    html! {
        <div class="min-h-screen bg-gray-100">
            <header class="bg-white border-b border-gray-200 sticky top-0 z-20">
                <div class="max-w-4xl mx-auto px-4 h-14 flex items-center justify-between">
                    <Link<Route> to={Route::Home} classes="text-xl font-bold text-blue-600">
                        {"murmur"}
                    </Link<Route>>
                    <nav class="flex items-center gap-4">
                        <Link<Route> to={Route::Home} classes="text-gray-700 hover:text-blue-600">
                            {"Home"}
                        </Link<Route>>
                        <Link<Route> to={Route::CreatePost} classes="text-gray-700 hover:text-blue-600">
                            {"New post"}
                        </Link<Route>>
                        { for user.map(|user| html! {
                            <div class="flex items-center gap-4">
                                <Link<Route>
                                    to={Route::Profile { id: user.id.clone() }}
                                    classes="flex items-center gap-2 text-gray-700 hover:text-blue-600"
                                >
                                    <Avatar
                                        url={user.avatar_url.clone()}
                                        name={user.username.clone()}
                                        size={28}
                                    />
                                    <span class="hidden sm:inline">{&user.username}</span>
                                </Link<Route>>
                                if is_admin {
                                    <Link<Route> to={Route::Admin} classes="text-gray-700 hover:text-blue-600">
                                        {"Admin"}
                                    </Link<Route>>
                                }
                                <button
                                    onclick={on_logout.clone()}
                                    class="px-3 py-1.5 text-sm rounded-lg bg-gray-100 text-gray-700 hover:bg-gray-200"
                                >
                                    {"Log out"}
                                </button>
                            </div>
                        }) }
                    </nav>
                </div>
            </header>
            <main class="max-w-4xl mx-auto px-4 py-4">
                { props.children.clone() }
            </main>
        </div>
    }
}
