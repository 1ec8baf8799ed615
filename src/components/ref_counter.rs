//! Ref Counter Component
//!
//! Contrasts a reactive counter with a plain mutable cell.

use leptos::prelude::*;

#[component]
pub fn RefCounter() -> impl IntoView {
    let (count, set_count) = signal(0u32);
    // Not reactive: writing it never re-renders anything
    let count_ref = StoredValue::new(0u32);

    let handle_click = move |_| {
        let seen = count.get_untracked();
        set_count.set(seen + 1);
        count_ref.update_value(|v| *v += 1);
        // `seen` is the value this handler observed, one behind the new state
        log::debug!("[REF] state {}", seen);
        log::debug!("[REF] ref {}", count_ref.get_value());
    };

    view! {
        <div class="demo-card ref-card">
            <h1>{move || count.get()}</h1>
            // Re-read only when `count` changes
            <h1>{move || {
                count.track();
                count_ref.get_value()
            }}</h1>
            <button on:click=handle_click>"click"</button>
        </div>
    }
}
