//! Contact CRUD handlers.
//!
//! Each handler makes exactly one repository call and maps its result onto a
//! status code.

use axum::{
    extract::{Json, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::contacts::{Contact, ContactId, NewContact};
use crate::http::response::ApiError;
use crate::http::server::AppState;

/// Body returned from a successful create.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedContact {
    pub id: ContactId,
}

pub async fn list_contacts(State(state): State<AppState>) -> Json<Vec<Contact>> {
    Json(state.contacts.get_all())
}

pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<ContactId>,
) -> Result<Json<Contact>, ApiError> {
    state
        .contacts
        .get(id)
        .map(Json)
        .ok_or(ApiError::ContactNotFound(id))
}

pub async fn create_contact(
    State(state): State<AppState>,
    Json(contact): Json<NewContact>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.contacts.add(contact).ok_or(ApiError::IdsExhausted)?;
    tracing::info!(id = created.id, "Contact created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/contacts/{}", created.id))],
        Json(CreatedContact { id: created.id }),
    ))
}

pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<ContactId>,
    Json(changes): Json<NewContact>,
) -> Result<Json<Contact>, ApiError> {
    state
        .contacts
        .update(changes.with_id(id))
        .map(Json)
        .ok_or(ApiError::ContactNotFound(id))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<ContactId>,
) -> Result<StatusCode, ApiError> {
    if state.contacts.delete(id) {
        tracing::info!(id, "Contact deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::ContactNotFound(id))
    }
}
