//! Memo Counter Component
//!
//! A memo derived from `count` that ignores changes to `name`.

use leptos::prelude::*;

#[component]
pub fn MemoCounter() -> impl IntoView {
    let (count, set_count) = signal(0u32);
    let (name, set_name) = signal(String::from("John"));

    let memorized_count = Memo::new(move |_| {
        let value = count.get();
        log::debug!("[MEMO] Recomputed for count={}", value);
        value
    });

    view! {
        <div class="demo-card memo-card">
            <p>"Count: " {move || count.get()}</p>
            <button on:click=move |_| set_count.update(|c| *c += 1)>"Increment"</button>
            <p>"Memorized Count: " {move || memorized_count.get()}</p>
            <p>"Name: " {move || name.get()}</p>
            <button on:click=move |_| set_name.set("Jane".to_string())>"Change Name"</button>
        </div>
    }
}
