//! Route registration for the admin CRUD API
//!
//! Every entity type gets the same option-less registration.

use crate::domain::Service;
use super::admin::resource;
use super::openapi::ApiDoc;
use super::resources::{
    IngredientAdmin, ItemAdmin, RecipeAdmin, SectionAdmin, SourceAdmin, SupplyAdmin, TripAdmin,
    UnitAdmin, UsageAdmin,
};
use axum::{routing::get, Extension, Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

/// Build the admin router with all nine entities registered.
pub fn register_routes(service: Arc<Service>) -> Router {
    Router::new()
        .merge(resource::<SectionAdmin>())
        .merge(resource::<ItemAdmin>())
        .merge(resource::<UnitAdmin>())
        .merge(resource::<RecipeAdmin>())
        .merge(resource::<IngredientAdmin>())
        .merge(resource::<SourceAdmin>())
        .merge(resource::<TripAdmin>())
        .merge(resource::<SupplyAdmin>())
        .merge(resource::<UsageAdmin>())
        .route("/openapi.json", get(openapi_document))
        .layer(Extension(service))
}

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
