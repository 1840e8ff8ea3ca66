//! Generic admin CRUD resource generator
//!
//! Each entity registers here with a collection name and its DTO/payload
//! types; the routes, handlers, and error mapping are identical for all of
//! them. Registration takes no per-entity options.

use crate::contract::InventoryError;
use crate::domain::Service;
use super::error::{map_domain_error, Problem};
use async_trait::async_trait;
use axum::{extract::Path, http::StatusCode, routing::get, Extension, Json, Router};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Uniform list envelope
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// One admin-managed entity: a collection name plus delegating CRUD calls
/// into the domain service.
#[async_trait]
pub trait AdminResource: Send + Sync + 'static {
    /// URL path segment, e.g. "sections"
    const COLLECTION: &'static str;
    type Dto: Serialize + Send + Sync + 'static;
    type Payload: DeserializeOwned + Send + Sync + 'static;

    async fn list(service: &Service) -> Result<Vec<Self::Dto>, InventoryError>;
    async fn get(service: &Service, id: i64) -> Result<Self::Dto, InventoryError>;
    async fn create(service: &Service, payload: Self::Payload)
        -> Result<Self::Dto, InventoryError>;
    async fn update(
        service: &Service,
        id: i64,
        payload: Self::Payload,
    ) -> Result<Self::Dto, InventoryError>;
    async fn delete(service: &Service, id: i64) -> Result<(), InventoryError>;
}

/// Mount the uniform CRUD routes for one resource.
pub fn resource<R: AdminResource>() -> Router {
    Router::new()
        .route(
            &format!("/{}", R::COLLECTION),
            get(list::<R>).post(create::<R>),
        )
        .route(
            &format!("/{}/{{id}}", R::COLLECTION),
            get(fetch::<R>).put(update::<R>).delete(remove::<R>),
        )
}

async fn list<R: AdminResource>(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<ListResponse<R::Dto>>, Problem> {
    let items = R::list(&service).await.map_err(map_domain_error)?;
    let total = items.len();
    Ok(Json(ListResponse { items, total }))
}

async fn fetch<R: AdminResource>(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<Json<R::Dto>, Problem> {
    let dto = R::get(&service, id).await.map_err(map_domain_error)?;
    Ok(Json(dto))
}

async fn create<R: AdminResource>(
    Extension(service): Extension<Arc<Service>>,
    Json(payload): Json<R::Payload>,
) -> Result<(StatusCode, Json<R::Dto>), Problem> {
    let dto = R::create(&service, payload).await.map_err(map_domain_error)?;
    Ok((StatusCode::CREATED, Json(dto)))
}

async fn update<R: AdminResource>(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    Json(payload): Json<R::Payload>,
) -> Result<Json<R::Dto>, Problem> {
    let dto = R::update(&service, id, payload)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(dto))
}

async fn remove<R: AdminResource>(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    R::delete(&service, id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}
