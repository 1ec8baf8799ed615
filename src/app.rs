//! Hooks Playground App
//!
//! Route shell: nav bar on top, one page below.

use leptos::prelude::*;

use crate::components::{DynamicPage, HomePage, NavBar, TodoPager};
use crate::route::{self, Route};

#[component]
pub fn App() -> impl IntoView {
    let (current_route, set_current_route) = signal(route::current_route());

    let navigate = Callback::new(move |target: Route| {
        route::navigate(current_route, set_current_route, target);
    });

    // Equal routes do not re-render the page
    let page = Memo::new(move |_| current_route.get());

    // Browser back/forward
    let _popstate = window_event_listener(leptos::ev::popstate, move |_| {
        set_current_route.set(route::current_route());
    });

    view! {
        <div class="app-layout">
            <NavBar route=current_route navigate=navigate />

            <main class="main-content">
                {move || match page.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Pagination => view! { <TodoPager /> }.into_any(),
                    Route::Dynamic(id) => view! { <DynamicPage id=id navigate=navigate /> }.into_any(),
                    Route::NotFound(path) => view! {
                        <div class="not-found">
                            <h1>"404"</h1>
                            <p>"No page at " {path}</p>
                        </div>
                    }.into_any(),
                }}
            </main>
        </div>
    }
}
