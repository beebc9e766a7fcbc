use crate::params::user::LookupCommand;
use crate::Error;
use axum::body::Bytes;
use axum::response::IntoResponse;

use log::*;

/// GET a User by display name
///
/// The `{id}` path segment is part of the route but is not read; the display
/// name comes from the JSON request body instead. No lookup is performed yet:
/// the decoded command is logged and an empty response is returned.
///
/// The body is fully buffered by the `Bytes` extractor and dropped on every
/// return path, whether decoding succeeds or not.
pub async fn find_by_display_name(body: Bytes) -> Result<impl IntoResponse, Error> {
    let command = LookupCommand::decode(&body).map_err(|e| {
        error!("Failed to decode LookupCommand: {e}");
        Error::from(e)
    })?;

    info!("{command:?}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::router::define_routes;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;

    async fn send(method: Method, uri: &str, body: &'static str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(body))
            .unwrap();
        define_routes().oneshot(request).await.unwrap()
    }

    fn content_type(response: &Response) -> Option<&str> {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    async fn body_len(response: Response) -> usize {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().len()
    }

    #[tokio::test]
    async fn test_find_by_display_name_returns_empty_ok_response() {
        let response = send(Method::GET, "/v1/users/42", r#"{"DisplayName": "alice"}"#).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), Some("application/json"));
        assert_eq!(body_len(response).await, 0);
    }

    #[tokio::test]
    async fn test_find_by_display_name_accepts_empty_and_missing_names() {
        for body in [r#"{"DisplayName": ""}"#, "{}"] {
            let response = send(Method::GET, "/v1/users/42", body).await;
            assert_eq!(response.status(), StatusCode::OK, "body {body:?}");
        }
    }

    #[tokio::test]
    async fn test_find_by_display_name_ignores_path_id() {
        let response = send(
            Method::GET,
            "/v1/users/not-a-number",
            r#"{"DisplayName": "alice"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_find_by_display_name_rejects_malformed_json() {
        for body in ["", "{", r#"{"DisplayName": 42}"#] {
            let response = send(Method::GET, "/v1/users/42", body).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body:?}");
            assert_eq!(content_type(&response), Some("application/json"));
        }
    }

    #[tokio::test]
    async fn test_other_methods_still_get_json_content_type() {
        let response = send(Method::POST, "/v1/users/42", r#"{"DisplayName": "alice"}"#).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(content_type(&response), Some("application/json"));
    }

    #[tokio::test]
    async fn test_unknown_paths_are_not_found() {
        let response = send(Method::GET, "/users/42", r#"{"DisplayName": "alice"}"#).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
