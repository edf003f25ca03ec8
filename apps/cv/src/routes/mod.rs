pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers::handle_contact;
use crate::cv::handlers::{handle_cv, handle_default_cv};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generated CVs
        .route("/cv.pdf", get(handle_default_cv))
        .route("/cv/:n", get(handle_cv))
        // Contact form
        .route("/api/contact", post(handle_contact))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::contact::rate_limit::RateLimiter;
    use crate::contact::ContactService;
    use crate::models::cv_data;

    fn app() -> Router {
        let state = AppState {
            resume: Arc::new(cv_data::resume().clone()),
            contact: Arc::new(ContactService::new(
                RateLimiter::new(Duration::from_secs(60)),
                None,
            )),
        };
        build_router(state)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn contact_request(body: &str) -> Request<Body> {
        Request::post("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "portfolio-cv");
    }

    #[tokio::test]
    async fn test_default_cv_is_pdf() {
        let response = app()
            .oneshot(Request::get("/cv.pdf").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_numbered_cv_routes() {
        for n in 1..=5 {
            let response = app()
                .oneshot(Request::get(format!("/cv/{n}")).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "template {n}");
        }
    }

    #[tokio::test]
    async fn test_unknown_template_is_404() {
        for path in ["/cv/0", "/cv/6", "/cv/abc"] {
            let response = app()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
            let body = json_body(response).await;
            assert_eq!(body["error"]["code"], "NOT_FOUND");
        }
    }

    #[tokio::test]
    async fn test_contact_validation_error_envelope() {
        let response = app()
            .oneshot(contact_request(r#"{"email":"bad","category":"x","subject":"y","message":"z"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Invalid email address.");
    }

    #[tokio::test]
    async fn test_contact_without_smtp_is_503() {
        let response = app()
            .oneshot(contact_request(
                r#"{"email":"dev@example.com","category":"Web","subject":"Hi","message":"Hello"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = json_body(response).await;
        assert_eq!(
            body["error"]["message"],
            "Email service is not configured. Please try again later."
        );
    }
}
