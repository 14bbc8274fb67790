//! Public profile page

use murmur_frontend_common::{use_session, LoadingSpinner};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{Avatar, PostCard};
use crate::services::posts::{Post, PostService};
use crate::services::users::{Profile, UserService};
use crate::utils::short_date;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Posts,
    About,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ProfileProps {
    pub id: String,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfileProps) -> Html {
    let session = use_session();

    let profile = use_state(|| Option::<Profile>::None);
    let posts = use_state(Vec::<Post>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let active_tab = use_state(|| Tab::Posts);

    {
        let session = session.clone();
        let profile = profile.clone();
        let posts = posts.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            let users = UserService::new(session.client());
            let post_service = PostService::new(session.client());
            spawn_local(async move {
                loading.set(true);
                match users.get(&id).await {
                    Ok(found) => {
                        profile.set(Some(found));
                        error.set(None);
                    }
                    Err(err) => {
                        error.set(Some(format!("Could not load this profile: {err}")));
                    }
                }
                match post_service.list_by_user(&id).await {
                    Ok(list) => posts.set(list),
                    Err(err) => {
                        tracing::error!("failed to load profile posts: {err}");
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_post_deleted = {
        let posts = posts.clone();
        Callback::from(move |post_id: i64| {
            posts.set(posts.iter().filter(|p| p.id != post_id).cloned().collect());
        })
    };

    if *loading {
        return html! { <LoadingSpinner text="Loading profile..." /> };
    }

    let Some(profile) = (*profile).clone() else {
        return html! {
            <div class="text-center py-12">
                <p class="text-gray-600 mb-4">
                    { (*error).clone().unwrap_or_else(|| "This user does not exist.".to_string()) }
                </p>
                <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                    {"Back to the feed"}
                </Link<Route>>
            </div>
        };
    };

    let is_own_profile = session
        .user()
        .is_some_and(|user| user.id == profile.id);

    let tab_button = |tab: Tab, label: &str| {
        let active_tab = active_tab.clone();
        let class = if *active_tab == tab {
            "px-4 py-2 text-blue-600 border-b-2 border-blue-600 font-medium"
        } else {
            "px-4 py-2 text-gray-600 hover:text-gray-900"
        };
        html! {
            <button {class} onclick={Callback::from(move |_| active_tab.set(tab))}>
                {label}
            </button>
        }
    };

    html! {
        <div class="max-w-2xl mx-auto">
            <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6 mb-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-4">
                        <Avatar
                            url={profile.avatar_url.clone()}
                            name={profile.username.clone()}
                            size={64}
                        />
                        <div>
                            <h1 class="text-xl font-bold text-gray-900">{&profile.username}</h1>
                            if let Some(bio) = &profile.bio {
                                if !bio.is_empty() {
                                    <p class="text-gray-600 text-sm mt-1">{bio}</p>
                                }
                            }
                        </div>
                    </div>
                    if is_own_profile {
                        <Link<Route>
                            to={Route::Settings}
                            classes="px-4 py-2 rounded-lg border border-gray-300 text-gray-700 hover:bg-gray-50 text-sm"
                        >
                            {"Edit profile"}
                        </Link<Route>>
                    }
                </div>
                <div class="flex border-b border-gray-200 mt-4 -mb-6 pt-2">
                    { tab_button(Tab::Posts, "Posts") }
                    { tab_button(Tab::About, "About") }
                </div>
            </div>

            { match *active_tab {
                Tab::Posts => {
                    if posts.is_empty() {
                        html! {
                            <div class="text-center text-gray-500 py-12">
                                {"No posts yet."}
                            </div>
                        }
                    } else {
                        html! {
                            <>
                                { for posts.iter().map(|post| html! {
                                    <PostCard
                                        key={post.id}
                                        post={post.clone()}
                                        on_deleted={on_post_deleted.clone()}
                                    />
                                }) }
                            </>
                        }
                    }
                }
                Tab::About => html! {
                    <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6 text-sm text-gray-700 space-y-2">
                        if let Some(email) = &profile.email {
                            <p>{format!("Email: {email}")}</p>
                        }
                        if let Some(joined) = &profile.created_at {
                            <p>{format!("Joined: {}", short_date(joined))}</p>
                        }
                        <p>{format!("Posts: {}", posts.len())}</p>
                    </div>
                },
            } }
        </div>
    }
}
