//! Pager Controls Component
//!
//! Previous / "Page X of Y" / Next bar.

use leptos::prelude::*;

use crate::pagination::Paginator;

#[component]
pub fn PagerControls(
    paginator: Memo<Paginator>,
    #[prop(into)] on_previous: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                disabled=move || !paginator.get().can_go_previous()
                on:click=move |_| on_previous.run(())
            >
                "← Previous"
            </button>

            <span class="page-info">{move || paginator.get().label()}</span>

            <button
                class="pagination-btn"
                disabled=move || !paginator.get().can_go_next()
                on:click=move |_| on_next.run(())
            >
                "Next →"
            </button>
        </div>
    }
}
