//! OpenAPI document for the admin CRUD API

use utoipa::OpenApi;

use super::dto::{
    IngredientDto, IngredientPayload, ItemDto, ItemPayload, RecipeDto, RecipePayload, SectionDto,
    SectionPayload, SourceDto, SourcePayload, SupplyDto, SupplyPayload, TripDto, TripPayload,
    UnitDto, UnitPayload, UsageDto, UsageMethodDto, UsagePayload,
};

/// Document assembled from the DTO schemas, served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "larder admin API",
        description = "Uniform CRUD over the grocery and recipe inventory schema"
    ),
    components(schemas(
        SectionDto,
        SectionPayload,
        ItemDto,
        ItemPayload,
        UnitDto,
        UnitPayload,
        RecipeDto,
        RecipePayload,
        IngredientDto,
        IngredientPayload,
        SourceDto,
        SourcePayload,
        TripDto,
        TripPayload,
        SupplyDto,
        SupplyPayload,
        UsageDto,
        UsagePayload,
        UsageMethodDto,
    ))
)]
pub struct ApiDoc;
