//! Image grid for a post

use yew::prelude::*;

use crate::services::posts::PostImage;

#[derive(Properties, Clone, PartialEq)]
pub struct PostImagesProps {
    pub images: Vec<PostImage>,
}

#[function_component(PostImages)]
pub fn post_images(props: &PostImagesProps) -> Html {
    if props.images.is_empty() {
        return Html::default();
    }

    let mut images = props.images.clone();
    images.sort_by_key(|image| image.order);

    let grid = if images.len() == 1 {
        "grid grid-cols-1 gap-1 mt-3"
    } else {
        "grid grid-cols-2 gap-1 mt-3"
    };

    html! {
        <div class={grid}>
            { for images.iter().map(|image| html! {
                <img
                    key={image.id}
                    src={image.url.clone()}
                    alt=""
                    class="w-full max-h-96 object-cover rounded-lg"
                />
            }) }
        </div>
    }
}
