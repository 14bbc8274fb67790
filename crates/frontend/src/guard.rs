//! Route authorization gate component

use murmur_frontend_common::{
    evaluate_route, use_session, LoadingSpinner, RouteDecision, RoutePolicy,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct GatedProps {
    pub policy: RoutePolicy,
    pub children: Children,
}

/// Renders its children, a loading placeholder, or a redirect, per the
/// route's declared policy and the current session. Re-evaluates whenever
/// the session changes (login, logout, cross-tab sync).
#[function_component(Gated)]
pub fn gated(props: &GatedProps) -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("Gated must be rendered under a router");

    let decision = evaluate_route(props.policy, session.snapshot());

    // Redirects replace the history entry so Back does not return to the
    // gated page.
    use_effect_with(decision, move |decision| {
        let target = match decision {
            RouteDecision::RedirectHome => Some(Route::Home),
            RouteDecision::RedirectLogin => Some(Route::Login),
            RouteDecision::RedirectForbidden => Some(Route::Forbidden),
            RouteDecision::Loading | RouteDecision::Render => None,
        };
        if let Some(target) = target {
            navigator.replace(&target);
        }
    });

    match decision {
        RouteDecision::Loading => html! { <LoadingSpinner text="Checking session..." /> },
        RouteDecision::Render => html! { <>{ props.children.clone() }</> },
        _ => Html::default(),
    }
}
