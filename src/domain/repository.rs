//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{
    Ingredient, IngredientDraft, Item, ItemDraft, Recipe, RecipeDraft, Section, SectionDraft,
    Source, SourceDraft, Supply, SupplyDraft, Trip, TripDraft, Unit, UnitDraft, Usage, UsageDraft,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Repository for store sections
#[async_trait]
pub trait SectionRepository: Send + Sync {
    async fn insert(&self, draft: &SectionDraft) -> Result<Section>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Section>>;
    async fn list(&self) -> Result<Vec<Section>>;
    async fn update(&self, id: i64, draft: &SectionDraft) -> Result<Section>;
    /// Returns the number of deleted rows (0 when the id does not exist).
    async fn delete(&self, id: i64) -> Result<u64>;
}

/// Repository for food items
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn insert(&self, draft: &ItemDraft) -> Result<Item>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>>;
    async fn list(&self) -> Result<Vec<Item>>;
    async fn update(&self, id: i64, draft: &ItemDraft) -> Result<Item>;
    async fn delete(&self, id: i64) -> Result<u64>;
}

/// Repository for measurement units
#[async_trait]
pub trait UnitRepository: Send + Sync {
    async fn insert(&self, draft: &UnitDraft) -> Result<Unit>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Unit>>;
    async fn list(&self) -> Result<Vec<Unit>>;
    async fn update(&self, id: i64, draft: &UnitDraft) -> Result<Unit>;
    async fn delete(&self, id: i64) -> Result<u64>;
}

/// Repository for recipes
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn insert(&self, draft: &RecipeDraft) -> Result<Recipe>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>>;
    async fn list(&self) -> Result<Vec<Recipe>>;
    async fn update(&self, id: i64, draft: &RecipeDraft) -> Result<Recipe>;
    async fn delete(&self, id: i64) -> Result<u64>;
}

/// Repository for recipe ingredients
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn insert(&self, draft: &IngredientDraft) -> Result<Ingredient>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>>;
    async fn list(&self) -> Result<Vec<Ingredient>>;
    async fn update(&self, id: i64, draft: &IngredientDraft) -> Result<Ingredient>;
    async fn delete(&self, id: i64) -> Result<u64>;
}

/// Repository for grocery sources (stores/markets)
#[async_trait]
pub trait SourceRepository: Send + Sync {
    async fn insert(&self, draft: &SourceDraft) -> Result<Source>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Source>>;
    async fn list(&self) -> Result<Vec<Source>>;
    async fn update(&self, id: i64, draft: &SourceDraft) -> Result<Source>;
    async fn delete(&self, id: i64) -> Result<u64>;
}

/// Repository for grocery trips
#[async_trait]
pub trait TripRepository: Send + Sync {
    async fn insert(&self, draft: &TripDraft) -> Result<Trip>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Trip>>;
    async fn list(&self) -> Result<Vec<Trip>>;
    async fn update(&self, id: i64, draft: &TripDraft) -> Result<Trip>;
    async fn delete(&self, id: i64) -> Result<u64>;
}

/// Repository for supplies brought in by trips
#[async_trait]
pub trait SupplyRepository: Send + Sync {
    async fn insert(&self, draft: &SupplyDraft) -> Result<Supply>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Supply>>;
    async fn list(&self) -> Result<Vec<Supply>>;
    async fn update(&self, id: i64, draft: &SupplyDraft) -> Result<Supply>;
    async fn delete(&self, id: i64) -> Result<u64>;
}

/// Repository for usage events against supplies
#[async_trait]
pub trait UsageRepository: Send + Sync {
    /// The `when` timestamp is set by the implementation at insert time.
    async fn insert(&self, draft: &UsageDraft) -> Result<Usage>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Usage>>;
    async fn list(&self) -> Result<Vec<Usage>>;
    /// Must leave the stored `when` untouched.
    async fn update(&self, id: i64, draft: &UsageDraft) -> Result<Usage>;
    async fn delete(&self, id: i64) -> Result<u64>;
}

/// The full set of repositories the domain service runs on.
#[derive(Clone)]
pub struct Repositories {
    pub sections: Arc<dyn SectionRepository>,
    pub items: Arc<dyn ItemRepository>,
    pub units: Arc<dyn UnitRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
    pub ingredients: Arc<dyn IngredientRepository>,
    pub sources: Arc<dyn SourceRepository>,
    pub trips: Arc<dyn TripRepository>,
    pub supplies: Arc<dyn SupplyRepository>,
    pub usages: Arc<dyn UsageRepository>,
}
