//! Todo Pager Component
//!
//! Loads the todos collection once on attach and pages through it client-side.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{PagerControls, TodoCard};
use crate::config::PagerConfig;
use crate::store::{
    store_next_page, store_paginator, store_previous_page, store_replace_todos, PagerState,
    PagerStateStoreFields,
};

/// Paginated todo list
#[component]
pub fn TodoPager(#[prop(optional)] config: Option<PagerConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let store = Store::new(PagerState::new(config.page_size));

    // On attach: reads no signals, so it runs once per instance
    let endpoint = config.endpoint;
    Effect::new(move |_| {
        let endpoint = endpoint.clone();
        log::debug!("[PAGER] Fetching {}", endpoint);
        spawn_local(async move {
            if let Some(todos) = api::settle_load(api::fetch_todos(&endpoint).await) {
                store_replace_todos(&store, todos);
            }
        });
    });

    let paginator = Memo::new(move |_| store_paginator(&store));
    let current_items = Memo::new(move |_| {
        let pager = paginator.get();
        store.todos().with(|todos| pager.slice(todos).to_vec())
    });
    let total = move || store.todos().with(|todos| todos.len());

    view! {
        <div class="pagination-container">
            <h1>"Todo Items (" {total} " total)"</h1>

            <div class="items-list">
                <For
                    each=move || current_items.get()
                    key=|todo| todo.id
                    children=move |todo| view! { <TodoCard todo=todo /> }
                />
            </div>

            <PagerControls
                paginator=paginator
                on_previous=Callback::new(move |_| store_previous_page(&store))
                on_next=Callback::new(move |_| store_next_page(&store))
            />
        </div>
    }
}
