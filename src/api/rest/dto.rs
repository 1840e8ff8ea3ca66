//! REST DTOs with serde derives for the admin CRUD API
//!
//! Every response DTO carries the entity's textual representation in `label`,
//! which is what the admin list screens display.

use crate::contract::{
    Ingredient, IngredientDraft, Item, ItemDraft, Recipe, RecipeDraft, Section, SectionDraft,
    Source, SourceDraft, Supply, SupplyDraft, Trip, TripDraft, Unit, UnitDraft, Usage, UsageDraft,
    UsageMethod,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Section =====

/// Section response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SectionDto {
    pub id: i64,
    pub name: String,
    /// Textual representation
    pub label: String,
}

impl From<Section> for SectionDto {
    fn from(model: Section) -> Self {
        let label = model.to_string();
        Self {
            id: model.id,
            name: model.name,
            label,
        }
    }
}

/// Section create/update payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SectionPayload {
    pub name: String,
}

impl From<SectionPayload> for SectionDraft {
    fn from(payload: SectionPayload) -> Self {
        Self { name: payload.name }
    }
}

// ===== Item =====

/// Item response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ItemDto {
    pub id: i64,
    #[schema(example = "MLK1")]
    pub code: String,
    pub section_id: Option<i64>,
    pub name: String,
    /// Textual representation, e.g. "Milk (MLK1)"
    pub label: String,
}

impl From<Item> for ItemDto {
    fn from(model: Item) -> Self {
        let label = model.to_string();
        Self {
            id: model.id,
            code: model.code,
            section_id: model.section_id,
            name: model.name,
            label,
        }
    }
}

/// Item create/update payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ItemPayload {
    pub code: String,
    #[serde(default)]
    pub section_id: Option<i64>,
    pub name: String,
}

impl From<ItemPayload> for ItemDraft {
    fn from(payload: ItemPayload) -> Self {
        Self {
            code: payload.code,
            section_id: payload.section_id,
            name: payload.name,
        }
    }
}

// ===== Unit =====

/// Unit response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UnitDto {
    pub id: i64,
    #[schema(example = "cups")]
    pub code: String,
    pub description: String,
    /// Textual representation (the code)
    pub label: String,
}

impl From<Unit> for UnitDto {
    fn from(model: Unit) -> Self {
        let label = model.to_string();
        Self {
            id: model.id,
            code: model.code,
            description: model.description,
            label,
        }
    }
}

/// Unit create/update payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UnitPayload {
    pub code: String,
    pub description: String,
}

impl From<UnitPayload> for UnitDraft {
    fn from(payload: UnitPayload) -> Self {
        Self {
            code: payload.code,
            description: payload.description,
        }
    }
}

// ===== Recipe =====

/// Recipe response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeDto {
    pub id: i64,
    #[schema(example = "CHL")]
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Textual representation, e.g. "Chili Spicy (CHL)"
    pub label: String,
}

impl From<Recipe> for RecipeDto {
    fn from(model: Recipe) -> Self {
        let label = model.to_string();
        Self {
            id: model.id,
            code: model.code,
            name: model.name,
            extended: model.extended,
            source: model.source,
            label,
        }
    }
}

/// Recipe create/update payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecipePayload {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub extended: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl From<RecipePayload> for RecipeDraft {
    fn from(payload: RecipePayload) -> Self {
        Self {
            code: payload.code,
            name: payload.name,
            extended: payload.extended,
            source: payload.source,
        }
    }
}

// ===== Ingredient =====

/// Ingredient response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientDto {
    pub id: i64,
    pub recipe_id: i64,
    pub item_id: i64,
    pub amount: f64,
    pub unit_id: i64,
    /// Textual representation, e.g. "2.5 cups - Flour"
    pub label: String,
}

impl IngredientDto {
    pub fn new(model: Ingredient, label: String) -> Self {
        Self {
            id: model.id,
            recipe_id: model.recipe_id,
            item_id: model.item_id,
            amount: model.amount,
            unit_id: model.unit_id,
            label,
        }
    }
}

/// Ingredient create/update payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IngredientPayload {
    pub recipe_id: i64,
    pub item_id: i64,
    pub amount: f64,
    pub unit_id: i64,
}

impl From<IngredientPayload> for IngredientDraft {
    fn from(payload: IngredientPayload) -> Self {
        Self {
            recipe_id: payload.recipe_id,
            item_id: payload.item_id,
            amount: payload.amount,
            unit_id: payload.unit_id,
        }
    }
}

// ===== Source =====

/// Source response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SourceDto {
    pub id: i64,
    pub name: String,
    /// Textual representation
    pub label: String,
}

impl From<Source> for SourceDto {
    fn from(model: Source) -> Self {
        let label = model.to_string();
        Self {
            id: model.id,
            name: model.name,
            label,
        }
    }
}

/// Source create/update payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SourcePayload {
    pub name: String,
}

impl From<SourcePayload> for SourceDraft {
    fn from(payload: SourcePayload) -> Self {
        Self { name: payload.name }
    }
}

// ===== Trip =====

/// Trip response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TripDto {
    pub id: i64,
    pub source_id: i64,
    pub when: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Textual representation, e.g. "Costco on Mar 04"
    pub label: String,
}

impl TripDto {
    pub fn new(model: Trip, label: String) -> Self {
        Self {
            id: model.id,
            source_id: model.source_id,
            when: model.when,
            comments: model.comments,
            label,
        }
    }
}

/// Trip create/update payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TripPayload {
    pub source_id: i64,
    pub when: DateTime<Utc>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl From<TripPayload> for TripDraft {
    fn from(payload: TripPayload) -> Self {
        Self {
            source_id: payload.source_id,
            when: payload.when,
            comments: payload.comments,
        }
    }
}

// ===== Supply =====

/// Supply response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SupplyDto {
    pub id: i64,
    pub trip_id: i64,
    pub item_id: i64,
    pub amount: f64,
    pub unit_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<NaiveDate>,
    /// Purchase price, scale 2
    pub price: Decimal,
    /// Textual representation, e.g. "2.5 kg Flour bought 03/04/26"
    pub label: String,
}

impl SupplyDto {
    pub fn new(model: Supply, label: String) -> Self {
        Self {
            id: model.id,
            trip_id: model.trip_id,
            item_id: model.item_id,
            amount: model.amount,
            unit_id: model.unit_id,
            expires: model.expires,
            price: model.price,
            label,
        }
    }
}

/// Supply create/update payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SupplyPayload {
    pub trip_id: i64,
    pub item_id: i64,
    pub amount: f64,
    pub unit_id: i64,
    #[serde(default)]
    pub expires: Option<NaiveDate>,
    /// Defaults to 0.00 when omitted
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl From<SupplyPayload> for SupplyDraft {
    fn from(payload: SupplyPayload) -> Self {
        Self {
            trip_id: payload.trip_id,
            item_id: payload.item_id,
            amount: payload.amount,
            unit_id: payload.unit_id,
            expires: payload.expires,
            price: payload.price,
        }
    }
}

// ===== Usage =====

/// Usage method wire representation (one-character code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum UsageMethodDto {
    #[serde(rename = "E")]
    Expired,
    #[default]
    #[serde(rename = "U")]
    UsedInCooking,
}

impl From<UsageMethod> for UsageMethodDto {
    fn from(method: UsageMethod) -> Self {
        match method {
            UsageMethod::Expired => UsageMethodDto::Expired,
            UsageMethod::UsedInCooking => UsageMethodDto::UsedInCooking,
        }
    }
}

impl From<UsageMethodDto> for UsageMethod {
    fn from(dto: UsageMethodDto) -> Self {
        match dto {
            UsageMethodDto::Expired => UsageMethod::Expired,
            UsageMethodDto::UsedInCooking => UsageMethod::UsedInCooking,
        }
    }
}

/// Usage response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsageDto {
    pub id: i64,
    pub supply_id: i64,
    /// Set at creation, never editable
    pub when: DateTime<Utc>,
    pub amount: f64,
    #[schema(example = "U")]
    pub method: UsageMethodDto,
    /// Textual representation, e.g. "1.5 of 2.5 kg Flour bought 03/04/26"
    pub label: String,
}

impl UsageDto {
    pub fn new(model: Usage, label: String) -> Self {
        Self {
            id: model.id,
            supply_id: model.supply_id,
            when: model.when,
            amount: model.amount,
            method: model.method.into(),
            label,
        }
    }
}

/// Usage create/update payload; note there is no `when` field
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UsagePayload {
    pub supply_id: i64,
    pub amount: f64,
    /// Defaults to "U" (used in cooking) when omitted
    #[serde(default)]
    pub method: Option<UsageMethodDto>,
}

impl From<UsagePayload> for UsageDraft {
    fn from(payload: UsagePayload) -> Self {
        Self {
            supply_id: payload.supply_id,
            amount: payload.amount,
            method: payload.method.map(Into::into),
        }
    }
}
