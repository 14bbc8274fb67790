//! Application root: router, session provider, and route table

use murmur_frontend_common::{RoutePolicy, SessionProvider};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::guard::Gated;
use crate::layouts::{AdminLayout, MainLayout};
use crate::pages::admin::{AdminDashboard, AdminPosts, AdminUsers};
use crate::pages::{
    CreatePostPage, EditPostPage, EditProfilePage, ForbiddenPage, HomePage, LoginPage,
    NotFoundPage, PostDetailPage, ProfilePage, RegisterPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/create")]
    CreatePost,
    #[at("/posts/:id/edit")]
    EditPost { id: i64 },
    #[at("/posts/:id")]
    PostDetail { id: i64 },
    #[at("/profile/:id")]
    Profile { id: String },
    #[at("/settings")]
    Settings,
    #[at("/admin")]
    Admin,
    #[at("/admin/users")]
    AdminUsers,
    #[at("/admin/posts")]
    AdminPosts,
    #[at("/403")]
    Forbidden,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn authenticated(page: Html) -> Html {
    html! {
        <Gated policy={RoutePolicy::Authenticated}>
            <MainLayout>{page}</MainLayout>
        </Gated>
    }
}

fn admin_only(page: Html) -> Html {
    html! {
        <Gated policy={RoutePolicy::AdminOnly}>
            <AdminLayout>{page}</AdminLayout>
        </Gated>
    }
}

fn public_only(page: Html) -> Html {
    html! {
        <Gated policy={RoutePolicy::PublicOnly}>{page}</Gated>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => authenticated(html! { <HomePage /> }),
        Route::Login => public_only(html! { <LoginPage /> }),
        Route::Register => public_only(html! { <RegisterPage /> }),
        Route::CreatePost => authenticated(html! { <CreatePostPage /> }),
        Route::EditPost { id } => authenticated(html! { <EditPostPage {id} /> }),
        Route::PostDetail { id } => authenticated(html! { <PostDetailPage {id} /> }),
        Route::Profile { id } => authenticated(html! { <ProfilePage {id} /> }),
        Route::Settings => authenticated(html! { <EditProfilePage /> }),
        Route::Admin => admin_only(html! { <AdminDashboard /> }),
        Route::AdminUsers => admin_only(html! { <AdminUsers /> }),
        Route::AdminPosts => admin_only(html! { <AdminPosts /> }),
        Route::Forbidden => html! { <ForbiddenPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <Switch<Route> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}
