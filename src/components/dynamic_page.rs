//! Dynamic Page
//!
//! Echoes the path segment it was opened with.

use leptos::prelude::*;

use crate::components::Link;
use crate::route::Route;

#[component]
pub fn DynamicPage(
    id: String,
    #[prop(into)] navigate: Callback<Route>,
) -> impl IntoView {
    let to_string = Route::from_path(&format!("/{}/string", id));
    let to_number = Route::from_path(&format!("/{}/number", id));

    view! {
        <Link to=to_string navigate=navigate>"new"</Link>
        <div>"Dynamic Page ID: " {id}</div>
        <Link to=to_number navigate=navigate>"Go to Number 123"</Link>
    }
}
