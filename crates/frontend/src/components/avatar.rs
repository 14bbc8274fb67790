//! User avatar with initial fallback

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AvatarProps {
    #[prop_or_default]
    pub url: Option<String>,
    pub name: String,
    #[prop_or(32)]
    pub size: u32,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let style = format!("width:{0}px;height:{0}px", props.size);

    match &props.url {
        Some(url) if !url.is_empty() => html! {
            <img
                src={url.clone()}
                alt={props.name.clone()}
                style={style}
                class="rounded-full object-cover flex-shrink-0"
            />
        },
        _ => {
            let initial = props
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default();
            html! {
                <div
                    style={style}
                    class="rounded-full bg-blue-600 text-white flex items-center justify-center text-sm font-semibold flex-shrink-0"
                >
                    {initial}
                </div>
            }
        }
    }
}
