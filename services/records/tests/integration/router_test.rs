use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use tower::ServiceExt;

use casework_records::infra::db::DbDocumentStore;
use casework_records::router::build_router;
use casework_records::state::AppState;

async fn send(method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let router = build_router(AppState {
        store: DbDocumentStore::disabled(),
    });
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    router.oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn should_report_live_even_when_store_disabled() {
    let response = send(Method::GET, "/healthz", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_report_not_ready_when_store_disabled() {
    let response = send(Method::GET, "/readyz", None).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_tag_responses_with_request_id() {
    let response = send(Method::GET, "/healthz", None).await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn should_report_disabled_store_from_reset() {
    let response = send(Method::POST, "/admin/reset", None).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = json_body(response).await;
    assert_eq!(json["success"], false);
    assert!(
        json["message"].as_str().unwrap().contains("disabled"),
        "unexpected message {}",
        json["message"]
    );
}

#[tokio::test]
async fn should_return_store_disabled_for_record_reads() {
    for uri in [
        "/students",
        "/students?status=inactive",
        "/students/12345678",
        "/families",
        "/interventions/individual?subject=12345678&category=academica",
        "/interventions/family",
        "/interventions/institutional",
    ] {
        let response = send(Method::GET, uri, None).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE, "{uri}");
        let json = json_body(response).await;
        assert_eq!(json["kind"], "STORE_DISABLED", "{uri}");
    }
}

#[tokio::test]
async fn should_reject_content_filters_on_families() {
    for uri in ["/families?subject=12345678", "/families?category=academica"] {
        let response = send(Method::GET, uri, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let json = json_body(response).await;
        assert_eq!(json["kind"], "INVALID_QUERY", "{uri}");
    }
}

#[tokio::test]
async fn should_return_store_disabled_for_status_change() {
    let response = send(
        Method::PUT,
        "/students/12345678/status",
        Some(serde_json::json!({"status": "inactive"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_reject_unknown_student_status_filter() {
    let response = send(Method::GET, "/students?status=archived", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_not_route_misspelled_collection() {
    let response = send(Method::GET, "/interventions/intervenciones_instituciones", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
