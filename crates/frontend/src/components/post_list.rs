//! Paginated, searchable post feed

use murmur_frontend_common::{use_session, LoadingSpinner};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{Pagination, PostCard, SearchBar};
use crate::services::posts::{Post, PostService};

const PAGE_SIZE: u32 = 10;

#[function_component(PostList)]
pub fn post_list() -> Html {
    let session = use_session();

    let posts = use_state(Vec::<Post>::new);
    let page = use_state(|| 1_u32);
    let total_pages = use_state(|| 1_u32);
    let total = use_state(|| 0_u64);
    let search = use_state(String::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    {
        let session = session.clone();
        let posts = posts.clone();
        let total_pages = total_pages.clone();
        let total = total.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(((*page), (*search).clone()), move |(page, search)| {
            let page = *page;
            let search = search.clone();
            let service = PostService::new(session.client());
            spawn_local(async move {
                loading.set(true);
                match service.list(page, PAGE_SIZE, &search).await {
                    Ok(result) => {
                        posts.set(result.data);
                        total_pages.set(result.pagination.total_pages.max(1));
                        total.set(result.pagination.total);
                        error.set(None);
                    }
                    Err(err) => {
                        error.set(Some(format!("Failed to load posts: {err}")));
                    }
                }
                loading.set(false);
            });

            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        });
    }

    let on_search = {
        let search = search.clone();
        let page = page.clone();
        Callback::from(move |query: String| {
            search.set(query);
            page.set(1);
        })
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let on_post_deleted = {
        let posts = posts.clone();
        Callback::from(move |post_id: i64| {
            posts.set(posts.iter().filter(|p| p.id != post_id).cloned().collect());
        })
    };

    html! {
        <div class="max-w-2xl mx-auto">
            <SearchBar on_search={on_search} />

            if let Some(message) = (*error).clone() {
                <div class="bg-red-50 border border-red-200 text-red-700 rounded-lg px-4 py-3 mb-4">
                    {message}
                </div>
            }

            if *loading {
                <LoadingSpinner text="Loading posts..." />
            } else if posts.is_empty() {
                <div class="text-center text-gray-500 py-12">
                    { if search.is_empty() { "No posts yet. Be the first to write one!" } else { "No posts match your search." } }
                </div>
            } else {
                <>
                    if !search.is_empty() {
                        <p class="text-sm text-gray-500 mb-2">
                            {format!("{} result(s) for \"{}\"", *total, *search)}
                        </p>
                    }
                    { for posts.iter().map(|post| html! {
                        <PostCard
                            key={post.id}
                            post={post.clone()}
                            on_deleted={on_post_deleted.clone()}
                        />
                    }) }
                    <Pagination
                        current_page={*page}
                        total_pages={*total_pages}
                        on_page_change={on_page_change}
                    />
                </>
            }
        </div>
    }
}
