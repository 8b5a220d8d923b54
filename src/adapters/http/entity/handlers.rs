//! HTTP handlers shared by every entity group.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{decode, ApiJson};
use crate::domain::foundation::{IdGenerator, Record};
use crate::ports::RecordStore;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Dependencies of one entity group: its store and the shared id generator.
pub struct EntityState<T: Record> {
    pub store: Arc<dyn RecordStore<T>>,
    pub ids: Arc<IdGenerator>,
}

impl<T: Record> EntityState<T> {
    pub fn new(store: Arc<dyn RecordStore<T>>, ids: Arc<IdGenerator>) -> Self {
        Self { store, ids }
    }
}

impl<T: Record> Clone for EntityState<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            ids: Arc::clone(&self.ids),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /{prefix} - Create a record
pub async fn create_record<T: Record>(
    State(state): State<EntityState<T>>,
    ApiJson(mut record): ApiJson<T>,
) -> Result<impl IntoResponse, ApiError> {
    if record.id().is_empty() {
        record.set_id(state.ids.next_id());
    }

    let created = state.store.create(record).await?;
    tracing::info!(kind = T::KIND, id = %created.id(), "record created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /{prefix} - List every record
pub async fn list_records<T: Record>(
    State(state): State<EntityState<T>>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state.store.list().await?;
    Ok(Json(records))
}

/// GET /{prefix}/:id - Fetch one record
pub async fn get_record<T: Record>(
    State(state): State<EntityState<T>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state.store.find_by_id(&id).await?;
    Ok(Json(record))
}

/// PUT /{prefix}/:id - Replace an existing record
///
/// Existence is checked before the body is decoded, so an unknown id is a
/// 404 even when the body is malformed. The body replaces the stored record
/// wholesale; the identifier always comes from the path, and secrets the
/// body leaves empty keep their stored value.
pub async fn update_record<T: Record>(
    State(state): State<EntityState<T>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let existing = state.store.find_by_id(&id).await?;

    let mut record: T = decode(&body)?;
    record.set_id(id);
    record.retain_secrets_from(&existing);

    let updated = state.store.update(record).await?;
    tracing::info!(kind = T::KIND, id = %updated.id(), "record updated");

    Ok(Json(updated))
}

/// DELETE /{prefix}/:id - Delete a record; absent ids are not an error
pub async fn delete_record<T: Record>(
    State(state): State<EntityState<T>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.delete_by_id(&id).await?;
    tracing::info!(kind = T::KIND, id = %id, "record deleted");
    Ok(StatusCode::NO_CONTENT)
}
