//! User Card Component
//!
//! Reads and writes the shared `UserState` handed down by its parent.

use leptos::prelude::*;

use crate::user_state::UserState;

#[component]
pub fn UserCard(user_state: UserState) -> impl IntoView {
    let (name, set_name) = signal(String::new());

    view! {
        <div class="demo-card user-card">
            <h1>"User"</h1>
            <p>{move || user_state.user.get()}</p>
            <input
                type="text"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <button on:click=move |_| user_state.set_user(name.get())>"Set User"</button>
        </div>
    }
}
