//! Axum middleware entry points.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
    Router,
};

use super::error::MapperError;
use super::mapping::QueryHeaderMapper;

impl QueryHeaderMapper {
    /// Install the mapped header, then run the rest of the pipeline once.
    ///
    /// The response from `next` is returned untouched.
    pub async fn handle(&self, request: Request<Body>, next: Next) -> Result<Response, MapperError> {
        let request = self.apply(request)?;
        Ok(next.run(request).await)
    }
}

/// Middleware function for `axum::middleware::from_fn_with_state`.
pub async fn query_header_middleware(
    State(mapper): State<QueryHeaderMapper>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, MapperError> {
    mapper.handle(request, next).await
}

/// Layer every mapper onto `router`; the first mapper sees the request first.
pub fn apply_mappings<S>(router: Router<S>, mappers: &[QueryHeaderMapper]) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // Layers wrap outward, so the last one added runs first.
    mappers.iter().rev().fold(router, |router, mapper| {
        router.layer(middleware::from_fn_with_state(
            mapper.clone(),
            query_header_middleware,
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::{query_header_mapper, Transform};
    use axum::{http::StatusCode, routing::get};
    use tower::ServiceExt;

    async fn echo_auth(request: Request<Body>) -> String {
        request
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("none")
            .to_string()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn app() -> Router {
        let mapper = query_header_mapper("token", "Authorization", Some(Transform::prefix("Bearer ")));
        Router::new()
            .route("/", get(echo_auth))
            .layer(middleware::from_fn_with_state(mapper, query_header_middleware))
    }

    #[tokio::test]
    async fn test_sets_header_for_handler() {
        let response = app()
            .oneshot(Request::builder().uri("/?token=abc123").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Bearer abc123");
    }

    #[tokio::test]
    async fn test_passes_through_without_param() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(body_string(response).await, "none");
    }

    #[tokio::test]
    async fn test_invalid_value_is_bad_request() {
        let response = app()
            .oneshot(Request::builder().uri("/?token=a%00b").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_apply_mappings_runs_in_order() {
        // Both rules target the same header; the later one wins.
        let mappers = vec![
            QueryHeaderMapper::new("a", "Authorization"),
            QueryHeaderMapper::new("b", "Authorization"),
        ];
        let router = apply_mappings(Router::new().route("/", get(echo_auth)), &mappers);

        let response = router
            .oneshot(Request::builder().uri("/?a=first&b=second").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(body_string(response).await, "second");
    }
}
