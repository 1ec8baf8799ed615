//! Shared User State
//!
//! Owned by the page that hosts its readers and writers, handed down as a prop.

use leptos::prelude::*;

/// Current user name, readable by anyone holding the handle
#[derive(Clone, Copy)]
pub struct UserState {
    /// Current user name - read
    pub user: ReadSignal<String>,
    /// Current user name - write
    set_user: WriteSignal<String>,
}

impl UserState {
    pub fn new(initial: &str) -> Self {
        let (user, set_user) = signal(initial.to_string());
        Self { user, set_user }
    }

    /// Replace the current user name
    pub fn set_user(&self, name: String) {
        log::debug!("[USER] set_user({:?})", name);
        self.set_user.set(name);
    }
}
