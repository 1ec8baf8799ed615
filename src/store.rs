//! Pager View State
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;
use crate::pagination::{total_pages, Paginator};

/// State owned by one `TodoPager` instance
#[derive(Clone, Debug, Store)]
pub struct PagerState {
    /// Full result set, replaced wholesale on a successful load
    pub todos: Vec<Todo>,
    /// 1-indexed page number
    pub current_page: usize,
    pub page_size: usize,
}

impl PagerState {
    pub fn new(page_size: usize) -> Self {
        Self {
            todos: Vec::new(),
            current_page: 1,
            page_size,
        }
    }
}

/// Type alias for the store
pub type PagerStore = Store<PagerState>;

// ========================
// Store Helper Functions
// ========================

/// Paginator snapshot of the store (tracks todos, page and size)
pub fn store_paginator(store: &PagerStore) -> Paginator {
    let len = store.todos().with(|todos| todos.len());
    Paginator::new(len, store.page_size().get(), store.current_page().get())
}

/// Swap in a freshly loaded result set, pulling the page back in range if needed
pub fn store_replace_todos(store: &PagerStore, todos: Vec<Todo>) {
    // The pager may have unmounted while the request was in flight
    let Some(page_size) = store.page_size().try_get_untracked() else {
        log::debug!("[PAGER] View disposed, dropping {} todos", todos.len());
        return;
    };
    let last_page = total_pages(todos.len(), page_size).max(1);
    let current_page = store.current_page().get_untracked();

    store.todos().set(todos);
    if current_page > last_page {
        store.current_page().set(last_page);
    }
}

/// Go back one page if allowed
pub fn store_previous_page(store: &PagerStore) {
    let mut pager = untrack(|| store_paginator(store));
    if pager.previous() {
        store.current_page().set(pager.current_page());
    }
}

/// Go forward one page if allowed
pub fn store_next_page(store: &PagerStore) {
    let mut pager = untrack(|| store_paginator(store));
    if pager.next() {
        store.current_page().set(pager.current_page());
    }
}
