//! Contract layer - public API of the inventory schema
//!
//! This layer contains transport-agnostic models and errors.
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::InventoryError;
pub use model::{
    Ingredient, IngredientDraft, Item, ItemDraft, Recipe, RecipeDraft, Section, SectionDraft,
    Source, SourceDraft, Supply, SupplyDraft, Trip, TripDraft, Unit, UnitDraft, Usage, UsageDraft,
    UsageMethod,
};
