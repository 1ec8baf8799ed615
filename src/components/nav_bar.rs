//! Navigation Bar Component

use leptos::prelude::*;

use crate::components::Link;
use crate::route::Route;

/// Top-level page switcher
#[component]
pub fn NavBar(
    route: ReadSignal<Route>,
    #[prop(into)] navigate: Callback<Route>,
) -> impl IntoView {
    let entries = [
        (Route::Home, "Hooks"),
        (Route::Pagination, "Pagination"),
        (Route::Dynamic("123".to_string()), "Dynamic"),
    ];

    view! {
        <nav class="nav-bar">
            {entries.into_iter().map(|(target, label)| {
                let active_target = target.clone();
                let class = move || {
                    if route.get() == active_target { "nav-link active" } else { "nav-link" }
                };
                view! {
                    <span class=class>
                        <Link to=target navigate=navigate>{label}</Link>
                    </span>
                }
            }).collect_view()}
        </nav>
    }
}
