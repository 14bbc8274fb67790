//! Search input with submit-on-enter and clear

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SearchBarProps {
    pub on_search: Callback<String>,
    #[prop_or(AttrValue::Static("Search posts..."))]
    pub placeholder: AttrValue,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let query = use_state(String::new);

    let oninput = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            query.set(input.value());
        })
    };

    let onsubmit = {
        let query = query.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_search.emit(query.trim().to_string());
        })
    };

    let on_clear = {
        let query = query.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |_| {
            query.set(String::new());
            on_search.emit(String::new());
        })
    };

    html! {
        <form {onsubmit} class="relative mb-4">
            <input
                type="text"
                value={(*query).clone()}
                {oninput}
                placeholder={props.placeholder.clone()}
                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent outline-none bg-white text-gray-800"
            />
            if !query.is_empty() {
                <button
                    type="button"
                    onclick={on_clear}
                    class="absolute right-4 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-600"
                >
                    {"✕"}
                </button>
            }
        </form>
    }
}
