//! Page-window pagination control

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PaginationProps {
    pub current_page: u32,
    pub total_pages: u32,
    pub on_page_change: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let input_page = use_state(String::new);

    if props.total_pages <= 1 {
        return Html::default();
    }

    let current = props.current_page;
    let total = props.total_pages;

    // n-1, n, n+1 clamped to the valid range
    let window: Vec<u32> = [current.saturating_sub(1), current, current + 1]
        .into_iter()
        .filter(|page| (1..=total).contains(page))
        .collect();

    let oninput = {
        let input_page = input_page.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            input_page.set(input.value());
        })
    };

    let on_go = {
        let input_page = input_page.clone();
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_| {
            if let Ok(page) = input_page.parse::<u32>() {
                if (1..=total).contains(&page) {
                    on_page_change.emit(page);
                }
            }
            input_page.set(String::new());
        })
    };

    let page_button = |page: u32| {
        let on_page_change = props.on_page_change.clone();
        let class = if page == current {
            "px-4 py-2 rounded-lg border bg-blue-600 text-white border-blue-600"
        } else {
            "px-4 py-2 rounded-lg border border-gray-300 bg-white text-gray-700 hover:bg-gray-50"
        };
        html! {
            <button {class} onclick={Callback::from(move |_| on_page_change.emit(page))}>
                {page}
            </button>
        }
    };

    let first = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_| on_page_change.emit(1))
    };
    let last = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_| on_page_change.emit(total))
    };

    html! {
        <div class="flex flex-col items-center gap-4 py-6">
            <div class="flex items-center gap-2">
                <button
                    onclick={first}
                    disabled={current == 1}
                    class="px-3 py-2 rounded-lg border border-gray-300 bg-white text-gray-700 hover:bg-gray-50 disabled:opacity-50"
                >
                    {"First"}
                </button>
                { for window.into_iter().map(page_button) }
                <button
                    onclick={last}
                    disabled={current == total}
                    class="px-3 py-2 rounded-lg border border-gray-300 bg-white text-gray-700 hover:bg-gray-50 disabled:opacity-50"
                >
                    {"Last"}
                </button>
            </div>
            <div class="flex items-center gap-2">
                <input
                    type="number"
                    min="1"
                    max={total.to_string()}
                    value={(*input_page).clone()}
                    {oninput}
                    placeholder="Page"
                    class="w-20 px-3 py-2 border border-gray-300 rounded-lg bg-white text-gray-800"
                />
                <button
                    onclick={on_go}
                    class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700"
                >
                    {"Go"}
                </button>
            </div>
        </div>
    }
}
