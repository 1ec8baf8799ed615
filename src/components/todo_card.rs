//! Todo Card Component

use leptos::prelude::*;

use crate::models::Todo;

/// One todo: "{id}. {title}" plus a status badge.
///
/// The leading number is the record's own `id`, not its position in the list.
#[component]
pub fn TodoCard(todo: Todo) -> impl IntoView {
    let status_class = todo.status_class();
    let status_label = todo.status_label();

    view! {
        <div class="item-card">
            <h3 class="item-title">{todo.id} ". " {todo.title}</h3>
            <div class=status_class>{status_label}</div>
        </div>
    }
}
