//! Routes
//!
//! Path <-> page mapping plus thin `history` helpers.

use leptos::prelude::*;

/// Pages of the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Pagination,
    /// Single-segment dynamic path, e.g. `/42`
    Dynamic(String),
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Route::Home;
        }
        if trimmed == "pagination" {
            return Route::Pagination;
        }
        if trimmed.contains('/') {
            return Route::NotFound(path.to_string());
        }
        Route::Dynamic(trimmed.to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Pagination => "/pagination".to_string(),
            Route::Dynamic(id) => format!("/{}", id),
            Route::NotFound(path) => path.clone(),
        }
    }
}

/// Route for the current `window.location`
pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    Route::from_path(&path)
}

/// Push `path` onto the session history without reloading
pub fn push_path(path: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        log::warn!("[ROUTE] history unavailable, not pushing {}", path);
        return;
    };
    if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)) {
        log::warn!("[ROUTE] pushState({}) failed: {:?}", path, e);
    }
}

/// Move to `target`, recording it in history. Returns false when already there.
pub fn navigate(
    current: ReadSignal<Route>,
    set_current: WriteSignal<Route>,
    target: Route,
) -> bool {
    if current.get_untracked() == target {
        return false;
    }
    log::debug!("[ROUTE] Navigate to {}", target.path());
    push_path(&target.path());
    set_current.set(target);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/pagination"), Route::Pagination);
        assert_eq!(Route::from_path("/pagination/"), Route::Pagination);
        assert_eq!(Route::from_path("/42"), Route::Dynamic("42".to_string()));
        assert_eq!(Route::from_path("/abc"), Route::Dynamic("abc".to_string()));
        assert_eq!(Route::from_path("/42/string"), Route::NotFound("/42/string".to_string()));
    }

    #[test]
    fn test_path_round_trips_known_pages() {
        for route in [Route::Home, Route::Pagination, Route::Dynamic("7".to_string())] {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }

    #[test]
    fn test_navigate_to_current_route_is_noop() {
        let owner = Owner::new();
        owner.with(|| {
            let (current, set_current) = signal(Route::Pagination);

            // Returns before touching `history`, which only exists in a browser
            assert!(!navigate(current, set_current, Route::Pagination));
            assert_eq!(current.get_untracked(), Route::Pagination);
        });
    }
}
