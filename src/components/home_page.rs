//! Home Page
//!
//! The three state demos, stacked.

use leptos::prelude::*;

use crate::components::{MemoCounter, RefCounter, UserCard};
use crate::config::DEFAULT_USER;
use crate::user_state::UserState;

#[component]
pub fn HomePage() -> impl IntoView {
    // Owned here, the nearest ancestor of every reader and writer
    let user_state = UserState::new(DEFAULT_USER);

    view! {
        <div class="p-10">
            <UserCard user_state=user_state />
            <MemoCounter />
            <RefCounter />
        </div>
    }
}
