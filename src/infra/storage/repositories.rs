//! SeaORM repository implementations

use crate::contract::{
    Ingredient, IngredientDraft, Item, ItemDraft, Recipe, RecipeDraft, Section, SectionDraft,
    Source, SourceDraft, Supply, SupplyDraft, Trip, TripDraft, Unit, UnitDraft, Usage, UsageDraft,
};
use crate::domain::repository::{
    IngredientRepository, ItemRepository, RecipeRepository, Repositories, SectionRepository,
    SourceRepository, SupplyRepository, TripRepository, UnitRepository, UsageRepository,
};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};
use std::sync::Arc;

use super::entity;

/// Wire the full repository set onto one database connection.
pub fn sea_orm_repositories(db: Arc<DatabaseConnection>) -> Repositories {
    Repositories {
        sections: Arc::new(SeaOrmSectionRepository::new(db.clone())),
        items: Arc::new(SeaOrmItemRepository::new(db.clone())),
        units: Arc::new(SeaOrmUnitRepository::new(db.clone())),
        recipes: Arc::new(SeaOrmRecipeRepository::new(db.clone())),
        ingredients: Arc::new(SeaOrmIngredientRepository::new(db.clone())),
        sources: Arc::new(SeaOrmSourceRepository::new(db.clone())),
        trips: Arc::new(SeaOrmTripRepository::new(db.clone())),
        supplies: Arc::new(SeaOrmSupplyRepository::new(db.clone())),
        usages: Arc::new(SeaOrmUsageRepository::new(db)),
    }
}

// ===== Sections =====

pub struct SeaOrmSectionRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSectionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SectionRepository for SeaOrmSectionRepository {
    async fn insert(&self, draft: &SectionDraft) -> Result<Section> {
        let active: entity::section::ActiveModel = draft.into();
        let model = entity::section::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Section>> {
        let model = entity::section::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Section>> {
        let models = entity::section::Entity::find().all(&*self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, draft: &SectionDraft) -> Result<Section> {
        let mut active: entity::section::ActiveModel = draft.into();
        active.id = ActiveValue::Set(id);
        let model = entity::section::Entity::update(active).exec(&*self.db).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = entity::section::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}

// ===== Items =====

pub struct SeaOrmItemRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmItemRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for SeaOrmItemRepository {
    async fn insert(&self, draft: &ItemDraft) -> Result<Item> {
        let active: entity::item::ActiveModel = draft.into();
        let model = entity::item::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>> {
        let model = entity::item::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Item>> {
        let models = entity::item::Entity::find().all(&*self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, draft: &ItemDraft) -> Result<Item> {
        let mut active: entity::item::ActiveModel = draft.into();
        active.id = ActiveValue::Set(id);
        let model = entity::item::Entity::update(active).exec(&*self.db).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = entity::item::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}

// ===== Units =====

pub struct SeaOrmUnitRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUnitRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitRepository for SeaOrmUnitRepository {
    async fn insert(&self, draft: &UnitDraft) -> Result<Unit> {
        let active: entity::unit::ActiveModel = draft.into();
        let model = entity::unit::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Unit>> {
        let model = entity::unit::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Unit>> {
        let models = entity::unit::Entity::find().all(&*self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, draft: &UnitDraft) -> Result<Unit> {
        let mut active: entity::unit::ActiveModel = draft.into();
        active.id = ActiveValue::Set(id);
        let model = entity::unit::Entity::update(active).exec(&*self.db).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = entity::unit::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}

// ===== Recipes =====

pub struct SeaOrmRecipeRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmRecipeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecipeRepository for SeaOrmRecipeRepository {
    async fn insert(&self, draft: &RecipeDraft) -> Result<Recipe> {
        let active: entity::recipe::ActiveModel = draft.into();
        let model = entity::recipe::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>> {
        let model = entity::recipe::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Recipe>> {
        let models = entity::recipe::Entity::find().all(&*self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, draft: &RecipeDraft) -> Result<Recipe> {
        let mut active: entity::recipe::ActiveModel = draft.into();
        active.id = ActiveValue::Set(id);
        let model = entity::recipe::Entity::update(active).exec(&*self.db).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = entity::recipe::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}

// ===== Ingredients =====

pub struct SeaOrmIngredientRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmIngredientRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IngredientRepository for SeaOrmIngredientRepository {
    async fn insert(&self, draft: &IngredientDraft) -> Result<Ingredient> {
        let active: entity::ingredient::ActiveModel = draft.into();
        let model = entity::ingredient::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>> {
        let model = entity::ingredient::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Ingredient>> {
        let models = entity::ingredient::Entity::find().all(&*self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, draft: &IngredientDraft) -> Result<Ingredient> {
        let mut active: entity::ingredient::ActiveModel = draft.into();
        active.id = ActiveValue::Set(id);
        let model = entity::ingredient::Entity::update(active).exec(&*self.db).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = entity::ingredient::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}

// ===== Sources =====

pub struct SeaOrmSourceRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSourceRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SourceRepository for SeaOrmSourceRepository {
    async fn insert(&self, draft: &SourceDraft) -> Result<Source> {
        let active: entity::source::ActiveModel = draft.into();
        let model = entity::source::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Source>> {
        let model = entity::source::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Source>> {
        let models = entity::source::Entity::find().all(&*self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, draft: &SourceDraft) -> Result<Source> {
        let mut active: entity::source::ActiveModel = draft.into();
        active.id = ActiveValue::Set(id);
        let model = entity::source::Entity::update(active).exec(&*self.db).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = entity::source::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}

// ===== Trips =====

pub struct SeaOrmTripRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTripRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TripRepository for SeaOrmTripRepository {
    async fn insert(&self, draft: &TripDraft) -> Result<Trip> {
        let active: entity::trip::ActiveModel = draft.into();
        let model = entity::trip::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Trip>> {
        let model = entity::trip::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Trip>> {
        let models = entity::trip::Entity::find().all(&*self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, draft: &TripDraft) -> Result<Trip> {
        let mut active: entity::trip::ActiveModel = draft.into();
        active.id = ActiveValue::Set(id);
        let model = entity::trip::Entity::update(active).exec(&*self.db).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = entity::trip::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}

// ===== Supplies =====

pub struct SeaOrmSupplyRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSupplyRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SupplyRepository for SeaOrmSupplyRepository {
    async fn insert(&self, draft: &SupplyDraft) -> Result<Supply> {
        let active: entity::supply::ActiveModel = draft.into();
        let model = entity::supply::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Supply>> {
        let model = entity::supply::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Supply>> {
        let models = entity::supply::Entity::find().all(&*self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, draft: &SupplyDraft) -> Result<Supply> {
        let mut active: entity::supply::ActiveModel = draft.into();
        active.id = ActiveValue::Set(id);
        let model = entity::supply::Entity::update(active).exec(&*self.db).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = entity::supply::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}

// ===== Usages =====

pub struct SeaOrmUsageRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUsageRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsageRepository for SeaOrmUsageRepository {
    async fn insert(&self, draft: &UsageDraft) -> Result<Usage> {
        // The draft-to-active conversion stamps `when` with the current time.
        let active: entity::usage::ActiveModel = draft.into();
        let model = entity::usage::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Usage>> {
        let model = entity::usage::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Usage>> {
        let models = entity::usage::Entity::find().all(&*self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, draft: &UsageDraft) -> Result<Usage> {
        let mut active: entity::usage::ActiveModel = draft.into();
        active.id = ActiveValue::Set(id);
        // `when` is fixed at creation; never write it back.
        active.when = ActiveValue::NotSet;
        let model = entity::usage::Entity::update(active).exec(&*self.db).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = entity::usage::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}
