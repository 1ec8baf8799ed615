//! In-App Link Component
//!
//! Anchor that navigates through history instead of reloading the page.

use leptos::prelude::*;

use crate::route::Route;

/// Link to another page of the app
#[component]
pub fn Link(
    to: Route,
    #[prop(into)] navigate: Callback<Route>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let href = to.path();

    view! {
        <a
            href=href
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                navigate.run(to.clone());
            }
        >
            {children()}
        </a>
    }
}
