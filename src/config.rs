//! App Configuration
//!
//! Fixed endpoints and sizes. Nothing here changes at runtime.

/// Remote collection the pager reads on mount
pub const TODOS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";

/// Items shown per page
pub const PAGE_SIZE: usize = 10;

/// Initial value of the shared user name
pub const DEFAULT_USER: &str = "john";

/// Pager settings, passed to `TodoPager` as a prop
#[derive(Debug, Clone, PartialEq)]
pub struct PagerConfig {
    pub endpoint: String,
    pub page_size: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            endpoint: TODOS_ENDPOINT.to_string(),
            page_size: PAGE_SIZE,
        }
    }
}
