//! Router tests: drive the full application (method override included)
//! through `tower::ServiceExt::oneshot`.

mod mocks;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use contact_book::web::App;
use contact_book::{
    build_app, AppState, ContactInput, ContactService, ContactServiceImpl, SessionStore,
};
use http_body_util::BodyExt;
use mocks::MockContactRepository;
use std::sync::Arc;
use tower::ServiceExt;

struct TestApp {
    app: App,
    repo: MockContactRepository,
    service: Arc<dyn ContactService>,
}

impl TestApp {
    fn new() -> Self {
        let repo = MockContactRepository::new();
        let service =
            Arc::new(ContactServiceImpl::new(Arc::new(repo.clone()))) as Arc<dyn ContactService>;
        let state = AppState::new(service.clone(), SessionStore::new(60));
        Self {
            app: build_app(state),
            repo,
            service,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.app.clone().oneshot(request).await.expect("infallible")
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).expect("get request"))
            .await
    }

    async fn submit(&self, uri: &str, form: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(form.to_string())).expect("form request"))
            .await
    }

    async fn seed(&self, name: &str, email: &str) -> contact_book::Contact {
        self.service
            .create_contact(ContactInput::new(name, email, "08123456789"))
            .await
            .expect("seed contact")
    }
}

async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// The `name=value` part of the response's Set-Cookie header.
fn session_cookie(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("set-cookie header")
        .to_str()
        .expect("ascii cookie");
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .expect("ascii location")
}

#[tokio::test]
async fn test_home_and_about_pages() {
    let app = TestApp::new();

    let response = app.get("/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Satria"));
    assert!(html.contains("Aji"));
    assert!(html.contains("Rama"));

    let response = app.get("/about", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("About"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = TestApp::new();

    let response = app.get("/nowhere", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Page not found"));
}

#[tokio::test]
async fn test_unsupported_method_is_404() {
    let app = TestApp::new();

    let response = app.submit("/about", "", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_redirects_and_flashes_once() {
    let app = TestApp::new();

    let response = app
        .submit(
            "/contact",
            "name=Ali&email=ali%40x.com&phone=08123456789",
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/contact");
    let cookie = session_cookie(&response);

    let html = body_text(app.get("/contact", Some(&cookie)).await).await;
    assert!(html.contains("Data contact successfully added"));
    assert!(html.contains("ali@x.com"));

    let html = body_text(app.get("/contact", Some(&cookie)).await).await;
    assert!(!html.contains("Data contact successfully added"));
    assert!(html.contains("ali@x.com"));
}

#[tokio::test]
async fn test_flash_is_scoped_to_session() {
    let app = TestApp::new();

    app.submit(
        "/contact",
        "name=Ali&email=ali%40x.com&phone=08123456789",
        None,
    )
    .await;

    let html = body_text(app.get("/contact", None).await).await;
    assert!(!html.contains("Data contact successfully added"));
}

#[tokio::test]
async fn test_create_invalid_rerenders_form_with_errors() {
    let app = TestApp::new();

    let response = app
        .submit("/contact", "name=Al&email=bad-email&phone=08123456789", None)
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let html = body_text(response).await;
    assert!(html.contains("Invalid email format"));
    assert!(html.contains("Invalid name, min 3 characters"));
    assert!(html.contains("value=\"Al\""));
    assert!(html.contains("value=\"bad-email\""));
    assert!(app.repo.contacts().is_empty());
}

#[tokio::test]
async fn test_create_duplicate_email_rerenders_form() {
    let app = TestApp::new();
    app.seed("Ali", "ali@x.com").await;

    let response = app
        .submit(
            "/contact",
            "name=Alia&email=ali%40x.com&phone=08123456789",
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("Email already registered"));
    assert_eq!(app.repo.contacts().len(), 1);
}

#[tokio::test]
async fn test_create_form_page() {
    let app = TestApp::new();

    let response = app.get("/contact/create", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("action=\"/contact\""));
}

#[tokio::test]
async fn test_detail_and_edit_pages() {
    let app = TestApp::new();
    let contact = app.seed("Ali", "ali@x.com").await;

    let response = app.get(&format!("/contact/{}", contact.id), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Ali"));
    assert!(html.contains("08123456789"));

    let response = app.get(&format!("/contact/{}/edit", contact.id), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(&format!("name=\"_id\" value=\"{}\"", contact.id)));
    assert!(html.contains("name=\"oldEmail\" value=\"ali@x.com\""));
}

#[tokio::test]
async fn test_missing_contact_pages_are_404() {
    let app = TestApp::new();

    assert_eq!(
        app.get("/contact/missing", None).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.get("/contact/missing/edit", None).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_update_via_method_override() {
    let app = TestApp::new();
    let contact = app.seed("Ali", "ali@x.com").await;

    let form = format!(
        "_id={}&oldEmail=ali%40x.com&name=Ali+Akbar&email=ali%40x.com&phone=08123456789",
        contact.id
    );
    let response = app.submit("/contact?_method=PUT", &form, None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&response);

    let html = body_text(app.get("/contact", Some(&cookie)).await).await;
    assert!(html.contains("Data contact successfully updated"));
    assert!(html.contains("Ali Akbar"));
}

#[tokio::test]
async fn test_update_invalid_keeps_hidden_fields() {
    let app = TestApp::new();
    let contact = app.seed("Ali", "ali@x.com").await;

    let form = format!(
        "_id={}&oldEmail=ali%40x.com&name=Al&email=ali%40x.com&phone=08123456789",
        contact.id
    );
    let response = app.submit("/contact?_method=PUT", &form, None).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains("Invalid name, min 3 characters"));
    assert!(html.contains(&format!("name=\"_id\" value=\"{}\"", contact.id)));
    assert!(html.contains("name=\"oldEmail\" value=\"ali@x.com\""));
    assert_eq!(app.repo.contacts()[0].name, "Ali");
}

#[tokio::test]
async fn test_delete_via_method_override() {
    let app = TestApp::new();
    let contact = app.seed("Ali", "ali@x.com").await;

    let response = app
        .submit(
            "/contact?_method=DELETE",
            &format!("id={}", contact.id),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&response);
    assert!(app.repo.contacts().is_empty());

    let html = body_text(app.get("/contact", Some(&cookie)).await).await;
    assert!(html.contains("Data contact successfully deleted"));
}

#[tokio::test]
async fn test_delete_missing_still_redirects() {
    let app = TestApp::new();

    let response = app
        .submit("/contact?_method=DELETE", "id=missing", None)
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/contact");
}

#[tokio::test]
async fn test_existing_session_cookie_is_reused() {
    let app = TestApp::new();

    let first = app
        .submit(
            "/contact",
            "name=Ali&email=ali%40x.com&phone=08123456789",
            None,
        )
        .await;
    let cookie = session_cookie(&first);

    let second = app
        .submit(
            "/contact",
            "name=Rama&email=rama%40x.com&phone=08123456789",
            Some(&cookie),
        )
        .await;
    assert_eq!(session_cookie(&second), cookie);
}

#[tokio::test]
async fn test_store_failure_renders_500() {
    let app = TestApp::new();
    app.repo.set_failing(true);

    let response = app.get("/contact", None).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("Something went wrong"));
}
