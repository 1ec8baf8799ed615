//! Remote API Bindings
//!
//! Reads the demo todos collection over `fetch` and parses it.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::LoadError;
use crate::models::Todo;

/// GET the whole collection at `url`
pub async fn fetch_todos(url: &str) -> Result<Vec<Todo>, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;

    let network_error = |e: wasm_bindgen::JsValue| LoadError::Network {
        url: url.to_string(),
        message: LoadError::js_message(&e),
    };

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(network_error)?;
    let response: Response = response.dyn_into().map_err(network_error)?;

    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let text = response.text().map_err(|e| LoadError::Body(LoadError::js_message(&e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| LoadError::Body(LoadError::js_message(&e)))?;
    let body = body
        .as_string()
        .ok_or_else(|| LoadError::Body("response body is not text".to_string()))?;

    parse_todos(&body)
}

/// Parse a JSON array of todos
pub fn parse_todos(body: &str) -> Result<Vec<Todo>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Malformed(e.to_string()))
}

/// Loader boundary: successes pass through, failures are logged and dropped.
///
/// `None` means the caller keeps whatever it already has.
pub fn settle_load(outcome: Result<Vec<Todo>, LoadError>) -> Option<Vec<Todo>> {
    match outcome {
        Ok(todos) => {
            log::info!("[PAGER] Loaded {} todos", todos.len());
            Some(todos)
        }
        Err(err) => {
            log::error!("[PAGER] Error fetching data: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"[
            {"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false},
            {"userId": 1, "id": 4, "title": "et porro tempora", "completed": true}
        ]"#;
        let todos = parse_todos(body).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(
            todos[0],
            Todo {
                id: 1,
                title: "delectus aut autem".to_string(),
                completed: false,
            }
        );
        assert_eq!(todos[1].id, 4);
        assert!(todos[1].completed);
    }

    #[test]
    fn test_parse_keeps_server_order() {
        let body = r#"[{"id": 3, "title": "c", "completed": false},
                       {"id": 1, "title": "a", "completed": false},
                       {"id": 2, "title": "b", "completed": false}]"#;
        let ids: Vec<u32> = parse_todos(body).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert_eq!(parse_todos("[]").unwrap(), Vec::<Todo>::new());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(parse_todos("{}"), Err(LoadError::Malformed(_))));
        assert!(matches!(parse_todos("not json"), Err(LoadError::Malformed(_))));
        assert!(matches!(
            parse_todos(r#"[{"id": "one", "title": "x", "completed": false}]"#),
            Err(LoadError::Malformed(_))
        ));
        assert!(matches!(
            parse_todos(r#"[{"id": 1, "title": "missing completed"}]"#),
            Err(LoadError::Malformed(_))
        ));
    }

    #[test]
    fn test_settle_success_replaces() {
        let todos = vec![Todo {
            id: 7,
            title: "x".to_string(),
            completed: true,
        }];
        assert_eq!(settle_load(Ok(todos.clone())), Some(todos));
    }

    #[test]
    fn test_settle_failure_keeps_previous() {
        let network = LoadError::Network {
            url: "https://example.invalid/todos".to_string(),
            message: "TypeError: Failed to fetch".to_string(),
        };
        assert_eq!(settle_load(Err(network)), None);

        let status = LoadError::Status {
            url: "https://example.invalid/todos".to_string(),
            status: 500,
        };
        assert_eq!(settle_load(Err(status)), None);

        assert_eq!(settle_load(parse_todos("<html>")), None);
    }

    #[test]
    fn test_error_messages() {
        let err = LoadError::Status {
            url: "u".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "u answered with HTTP 404");
        assert_eq!(LoadError::Malformed("eof".to_string()).to_string(), "malformed payload: eof");
    }
}
