//! Home page: the post feed

use yew::prelude::*;

use crate::components::PostList;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <PostList />
    }
}
