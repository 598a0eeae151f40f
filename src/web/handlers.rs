//! Request handlers for the contact book pages.

use crate::error::ContactError;
use crate::models::{ContactInput, DeleteContactInput, UpdateContactInput};
use crate::services::Notice;
use crate::session::{session_cookie, session_id_from_headers, SessionId};
use crate::web::error::PageResult;
use crate::web::views;
use crate::web::AppState;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

pub async fn home() -> Html<String> {
    Html(views::home_page("Satria", views::STUDENTS))
}

pub async fn about() -> Html<String> {
    Html(views::about_page())
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(views::not_found_page()))
}

/// GET /contact: list contacts and consume the pending notification.
pub async fn list_contacts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> PageResult<Html<String>> {
    let contacts = state.contacts.list_contacts().await?;
    let flash = session_id_from_headers(&headers).and_then(|id| state.sessions.take_flash(&id));
    Ok(Html(views::contact_index_page(&contacts, flash.as_deref())))
}

pub async fn create_form() -> Html<String> {
    Html(views::create_contact_page(&ContactInput::default(), &[]))
}

/// POST /contact
pub async fn create_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<ContactInput>,
) -> PageResult<Response> {
    match state.contacts.create_contact(input).await {
        Ok(_) => Ok(redirect_with_notice(&state, &headers, Notice::Added)),
        Err(ContactError::Validation(failure)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::create_contact_page(&failure.input, &failure.errors)),
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// GET /contact/:id/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult<Html<String>> {
    let contact = state.contacts.get_contact(&id).await?;
    let form = UpdateContactInput::from_contact(&contact);
    Ok(Html(views::edit_contact_page(&form, &[])))
}

/// PUT /contact
pub async fn update_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<UpdateContactInput>,
) -> PageResult<Response> {
    match state.contacts.update_contact(input.clone()).await {
        Ok(_) => Ok(redirect_with_notice(&state, &headers, Notice::Updated)),
        Err(ContactError::Validation(failure)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::edit_contact_page(&input, &failure.errors)),
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// DELETE /contact
pub async fn delete_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<DeleteContactInput>,
) -> PageResult<Response> {
    state.contacts.delete_contact(&input.id).await?;
    Ok(redirect_with_notice(&state, &headers, Notice::Deleted))
}

/// GET /contact/:id
pub async fn contact_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult<Html<String>> {
    let contact = state.contacts.get_contact(&id).await?;
    Ok(Html(views::contact_detail_page(&contact)))
}

/// Store `notice` in the caller's session and send them back to the list.
fn redirect_with_notice(state: &AppState, headers: &HeaderMap, notice: Notice) -> Response {
    let id = session_id_from_headers(headers).unwrap_or_else(SessionId::generate);
    state.sessions.flash(&id, notice.message());

    let cookie = session_cookie(&id, state.sessions.ttl());
    (
        [(header::SET_COOKIE, cookie)],
        Redirect::to("/contact"),
    )
        .into_response()
}
