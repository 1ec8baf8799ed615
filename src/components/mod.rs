//! UI Components
//!
//! Leptos components for every page of the app.

mod dynamic_page;
mod home_page;
mod link;
mod memo_counter;
mod nav_bar;
mod pager_controls;
mod ref_counter;
mod todo_card;
mod todo_pager;
mod user_card;

pub use dynamic_page::DynamicPage;
pub use home_page::HomePage;
pub use link::Link;
pub use memo_counter::MemoCounter;
pub use nav_bar::NavBar;
pub use pager_controls::PagerControls;
pub use ref_counter::RefCounter;
pub use todo_card::TodoCard;
pub use todo_pager::TodoPager;
pub use user_card::UserCard;
