//! Larder
//!
//! A household grocery and recipe inventory tracker: recipes composed of
//! ingredients, grocery trips that bring supplies into the larder, and usage
//! events that deplete or expire those supplies. The entity schema is the
//! substance; persistence is SeaORM and the admin surface is a uniform
//! generated CRUD API.

// Public exports
pub mod contract;
pub use contract::{
    error::InventoryError, Ingredient, IngredientDraft, Item, ItemDraft, Recipe, RecipeDraft,
    Section, SectionDraft, Source, SourceDraft, Supply, SupplyDraft, Trip, TripDraft, Unit,
    UnitDraft, Usage, UsageDraft, UsageMethod,
};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
