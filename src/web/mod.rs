//! HTTP surface of the contact book.
//!
//! Routes map onto [`ContactService`] operations and render pages from
//! [`views`]. Browsers can only submit GET and POST forms, so a POST whose
//! query string carries `_method=PUT|PATCH|DELETE` is rewritten before
//! routing (see [`method_override`]).

pub mod error;
pub mod handlers;
pub mod views;

use crate::services::ContactService;
use crate::session::SessionStore;
use axum::extract::Request;
use axum::http::Method;
use axum::routing::{get, MethodRouter};
use axum::Router;
use std::sync::Arc;
use tower::util::MapRequest;
use tower_http::trace::TraceLayer;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactService>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactService>, sessions: SessionStore) -> Self {
        Self { contacts, sessions }
    }
}

/// The router wrapped in method override, ready to serve.
pub type App = MapRequest<Router, fn(Request) -> Request>;

/// Build the routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", only(get(handlers::home)))
        .route("/about", only(get(handlers::about)))
        .route(
            "/contact",
            only(
                get(handlers::list_contacts)
                    .post(handlers::create_contact)
                    .put(handlers::update_contact)
                    .delete(handlers::delete_contact),
            ),
        )
        .route("/contact/create", only(get(handlers::create_form)))
        .route("/contact/:id/edit", only(get(handlers::edit_form)))
        .route("/contact/:id", only(get(handlers::contact_detail)))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unsupported methods on a known path get the same 404 as unknown paths.
fn only(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(handlers::not_found)
}

/// Build the full application: routes plus method override.
pub fn app(state: AppState) -> App {
    MapRequest::new(router(state), method_override as fn(Request) -> Request)
}

/// Rewrite `POST ...?_method=X` into method `X` for PUT, PATCH, and DELETE.
pub fn method_override(mut req: Request) -> Request {
    if req.method() != Method::POST {
        return req;
    }

    let overridden = req.uri().query().and_then(|query| {
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "_method")
            .and_then(|(_, value)| urlencoding::decode(value).ok())
            .and_then(|value| match value.trim().to_ascii_uppercase().as_str() {
                "PUT" => Some(Method::PUT),
                "PATCH" => Some(Method::PATCH),
                "DELETE" => Some(Method::DELETE),
                _ => None,
            })
    });

    if let Some(method) = overridden {
        tracing::debug!("Method override POST -> {} for {}", method, req.uri().path());
        *req.method_mut() = method;
    }

    req
}
