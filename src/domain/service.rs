//! Domain service - CRUD orchestration over the repositories
//!
//! The service validates drafts, delegates to the repositories, and is the
//! single place where storage errors are classified into the contract error
//! taxonomy.

use crate::contract::{
    Ingredient, IngredientDraft, InventoryError, Item, ItemDraft, Recipe, RecipeDraft, Section,
    SectionDraft, Source, SourceDraft, Supply, SupplyDraft, Trip, TripDraft, Unit, UnitDraft,
    Usage, UsageDraft,
};
use super::repository::Repositories;
use super::validation;
use sea_orm::error::{DbErr, SqlErr};

/// Domain service for the inventory schema
pub struct Service {
    repos: Repositories,
}

impl Service {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    // ===== Sections =====

    pub async fn create_section(&self, draft: SectionDraft) -> Result<Section, InventoryError> {
        validation::validate_section(&draft)?;
        self.repos
            .sections
            .insert(&draft)
            .await
            .map_err(|e| insert_error("section", None, e))
    }

    pub async fn get_section(&self, id: i64) -> Result<Section, InventoryError> {
        self.repos
            .sections
            .find_by_id(id)
            .await
            .map_err(internal_error)?
            .ok_or(InventoryError::NotFound {
                resource: "section",
                id,
            })
    }

    pub async fn list_sections(&self) -> Result<Vec<Section>, InventoryError> {
        self.repos.sections.list().await.map_err(internal_error)
    }

    pub async fn update_section(
        &self,
        id: i64,
        draft: SectionDraft,
    ) -> Result<Section, InventoryError> {
        validation::validate_section(&draft)?;
        self.repos
            .sections
            .update(id, &draft)
            .await
            .map_err(|e| update_error("section", id, None, e))
    }

    pub async fn delete_section(&self, id: i64) -> Result<(), InventoryError> {
        let deleted = self
            .repos
            .sections
            .delete(id)
            .await
            .map_err(|e| delete_error("section", id, e))?;
        ensure_deleted("section", id, deleted)
    }

    // ===== Items =====

    pub async fn create_item(&self, draft: ItemDraft) -> Result<Item, InventoryError> {
        validation::validate_item(&draft)?;
        self.repos
            .items
            .insert(&draft)
            .await
            .map_err(|e| insert_error("item", Some(&draft.code), e))
    }

    pub async fn get_item(&self, id: i64) -> Result<Item, InventoryError> {
        self.repos
            .items
            .find_by_id(id)
            .await
            .map_err(internal_error)?
            .ok_or(InventoryError::NotFound {
                resource: "item",
                id,
            })
    }

    pub async fn list_items(&self) -> Result<Vec<Item>, InventoryError> {
        self.repos.items.list().await.map_err(internal_error)
    }

    pub async fn update_item(&self, id: i64, draft: ItemDraft) -> Result<Item, InventoryError> {
        validation::validate_item(&draft)?;
        self.repos
            .items
            .update(id, &draft)
            .await
            .map_err(|e| update_error("item", id, Some(&draft.code), e))
    }

    pub async fn delete_item(&self, id: i64) -> Result<(), InventoryError> {
        let deleted = self
            .repos
            .items
            .delete(id)
            .await
            .map_err(|e| delete_error("item", id, e))?;
        ensure_deleted("item", id, deleted)
    }

    // ===== Units =====

    pub async fn create_unit(&self, draft: UnitDraft) -> Result<Unit, InventoryError> {
        validation::validate_unit(&draft)?;
        self.repos
            .units
            .insert(&draft)
            .await
            .map_err(|e| insert_error("unit", Some(&draft.code), e))
    }

    pub async fn get_unit(&self, id: i64) -> Result<Unit, InventoryError> {
        self.repos
            .units
            .find_by_id(id)
            .await
            .map_err(internal_error)?
            .ok_or(InventoryError::NotFound {
                resource: "unit",
                id,
            })
    }

    pub async fn list_units(&self) -> Result<Vec<Unit>, InventoryError> {
        self.repos.units.list().await.map_err(internal_error)
    }

    pub async fn update_unit(&self, id: i64, draft: UnitDraft) -> Result<Unit, InventoryError> {
        validation::validate_unit(&draft)?;
        self.repos
            .units
            .update(id, &draft)
            .await
            .map_err(|e| update_error("unit", id, Some(&draft.code), e))
    }

    pub async fn delete_unit(&self, id: i64) -> Result<(), InventoryError> {
        let deleted = self
            .repos
            .units
            .delete(id)
            .await
            .map_err(|e| delete_error("unit", id, e))?;
        ensure_deleted("unit", id, deleted)
    }

    // ===== Recipes =====

    pub async fn create_recipe(&self, draft: RecipeDraft) -> Result<Recipe, InventoryError> {
        validation::validate_recipe(&draft)?;
        self.repos
            .recipes
            .insert(&draft)
            .await
            .map_err(|e| insert_error("recipe", Some(&draft.code), e))
    }

    pub async fn get_recipe(&self, id: i64) -> Result<Recipe, InventoryError> {
        self.repos
            .recipes
            .find_by_id(id)
            .await
            .map_err(internal_error)?
            .ok_or(InventoryError::NotFound {
                resource: "recipe",
                id,
            })
    }

    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, InventoryError> {
        self.repos.recipes.list().await.map_err(internal_error)
    }

    pub async fn update_recipe(
        &self,
        id: i64,
        draft: RecipeDraft,
    ) -> Result<Recipe, InventoryError> {
        validation::validate_recipe(&draft)?;
        self.repos
            .recipes
            .update(id, &draft)
            .await
            .map_err(|e| update_error("recipe", id, Some(&draft.code), e))
    }

    pub async fn delete_recipe(&self, id: i64) -> Result<(), InventoryError> {
        // Cascades to the recipe's ingredients at the storage layer.
        let deleted = self
            .repos
            .recipes
            .delete(id)
            .await
            .map_err(|e| delete_error("recipe", id, e))?;
        ensure_deleted("recipe", id, deleted)
    }

    // ===== Ingredients =====

    pub async fn create_ingredient(
        &self,
        draft: IngredientDraft,
    ) -> Result<Ingredient, InventoryError> {
        validation::validate_ingredient(&draft)?;
        self.repos
            .ingredients
            .insert(&draft)
            .await
            .map_err(|e| insert_error("ingredient", None, e))
    }

    pub async fn get_ingredient(&self, id: i64) -> Result<Ingredient, InventoryError> {
        self.repos
            .ingredients
            .find_by_id(id)
            .await
            .map_err(internal_error)?
            .ok_or(InventoryError::NotFound {
                resource: "ingredient",
                id,
            })
    }

    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>, InventoryError> {
        self.repos.ingredients.list().await.map_err(internal_error)
    }

    pub async fn update_ingredient(
        &self,
        id: i64,
        draft: IngredientDraft,
    ) -> Result<Ingredient, InventoryError> {
        validation::validate_ingredient(&draft)?;
        self.repos
            .ingredients
            .update(id, &draft)
            .await
            .map_err(|e| update_error("ingredient", id, None, e))
    }

    pub async fn delete_ingredient(&self, id: i64) -> Result<(), InventoryError> {
        let deleted = self
            .repos
            .ingredients
            .delete(id)
            .await
            .map_err(|e| delete_error("ingredient", id, e))?;
        ensure_deleted("ingredient", id, deleted)
    }

    // ===== Sources =====

    pub async fn create_source(&self, draft: SourceDraft) -> Result<Source, InventoryError> {
        validation::validate_source(&draft)?;
        self.repos
            .sources
            .insert(&draft)
            .await
            .map_err(|e| insert_error("source", None, e))
    }

    pub async fn get_source(&self, id: i64) -> Result<Source, InventoryError> {
        self.repos
            .sources
            .find_by_id(id)
            .await
            .map_err(internal_error)?
            .ok_or(InventoryError::NotFound {
                resource: "source",
                id,
            })
    }

    pub async fn list_sources(&self) -> Result<Vec<Source>, InventoryError> {
        self.repos.sources.list().await.map_err(internal_error)
    }

    pub async fn update_source(
        &self,
        id: i64,
        draft: SourceDraft,
    ) -> Result<Source, InventoryError> {
        validation::validate_source(&draft)?;
        self.repos
            .sources
            .update(id, &draft)
            .await
            .map_err(|e| update_error("source", id, None, e))
    }

    pub async fn delete_source(&self, id: i64) -> Result<(), InventoryError> {
        let deleted = self
            .repos
            .sources
            .delete(id)
            .await
            .map_err(|e| delete_error("source", id, e))?;
        ensure_deleted("source", id, deleted)
    }

    // ===== Trips =====

    pub async fn create_trip(&self, draft: TripDraft) -> Result<Trip, InventoryError> {
        self.repos
            .trips
            .insert(&draft)
            .await
            .map_err(|e| insert_error("trip", None, e))
    }

    pub async fn get_trip(&self, id: i64) -> Result<Trip, InventoryError> {
        self.repos
            .trips
            .find_by_id(id)
            .await
            .map_err(internal_error)?
            .ok_or(InventoryError::NotFound {
                resource: "trip",
                id,
            })
    }

    pub async fn list_trips(&self) -> Result<Vec<Trip>, InventoryError> {
        self.repos.trips.list().await.map_err(internal_error)
    }

    pub async fn update_trip(&self, id: i64, draft: TripDraft) -> Result<Trip, InventoryError> {
        self.repos
            .trips
            .update(id, &draft)
            .await
            .map_err(|e| update_error("trip", id, None, e))
    }

    pub async fn delete_trip(&self, id: i64) -> Result<(), InventoryError> {
        // Cascades to the trip's supplies (and their usages) at the storage layer.
        let deleted = self
            .repos
            .trips
            .delete(id)
            .await
            .map_err(|e| delete_error("trip", id, e))?;
        ensure_deleted("trip", id, deleted)
    }

    // ===== Supplies =====

    pub async fn create_supply(&self, draft: SupplyDraft) -> Result<Supply, InventoryError> {
        validation::validate_supply(&draft)?;
        self.repos
            .supplies
            .insert(&draft)
            .await
            .map_err(|e| insert_error("supply", None, e))
    }

    pub async fn get_supply(&self, id: i64) -> Result<Supply, InventoryError> {
        self.repos
            .supplies
            .find_by_id(id)
            .await
            .map_err(internal_error)?
            .ok_or(InventoryError::NotFound {
                resource: "supply",
                id,
            })
    }

    pub async fn list_supplies(&self) -> Result<Vec<Supply>, InventoryError> {
        self.repos.supplies.list().await.map_err(internal_error)
    }

    pub async fn update_supply(
        &self,
        id: i64,
        draft: SupplyDraft,
    ) -> Result<Supply, InventoryError> {
        validation::validate_supply(&draft)?;
        self.repos
            .supplies
            .update(id, &draft)
            .await
            .map_err(|e| update_error("supply", id, None, e))
    }

    pub async fn delete_supply(&self, id: i64) -> Result<(), InventoryError> {
        // Cascades to the supply's usages at the storage layer.
        let deleted = self
            .repos
            .supplies
            .delete(id)
            .await
            .map_err(|e| delete_error("supply", id, e))?;
        ensure_deleted("supply", id, deleted)
    }

    // ===== Usages =====

    pub async fn create_usage(&self, draft: UsageDraft) -> Result<Usage, InventoryError> {
        validation::validate_usage(&draft)?;
        self.repos
            .usages
            .insert(&draft)
            .await
            .map_err(|e| insert_error("usage", None, e))
    }

    pub async fn get_usage(&self, id: i64) -> Result<Usage, InventoryError> {
        self.repos
            .usages
            .find_by_id(id)
            .await
            .map_err(internal_error)?
            .ok_or(InventoryError::NotFound {
                resource: "usage",
                id,
            })
    }

    pub async fn list_usages(&self) -> Result<Vec<Usage>, InventoryError> {
        self.repos.usages.list().await.map_err(internal_error)
    }

    pub async fn update_usage(&self, id: i64, draft: UsageDraft) -> Result<Usage, InventoryError> {
        validation::validate_usage(&draft)?;
        self.repos
            .usages
            .update(id, &draft)
            .await
            .map_err(|e| update_error("usage", id, None, e))
    }

    pub async fn delete_usage(&self, id: i64) -> Result<(), InventoryError> {
        let deleted = self
            .repos
            .usages
            .delete(id)
            .await
            .map_err(|e| delete_error("usage", id, e))?;
        ensure_deleted("usage", id, deleted)
    }

    // ===== Textual representations =====
    //
    // Labels that need related records resolve them here; the admin layer
    // attaches the result to list/detail DTOs.

    pub async fn describe_ingredient(
        &self,
        ingredient: &Ingredient,
    ) -> Result<String, InventoryError> {
        let unit = self.get_unit(ingredient.unit_id).await?;
        let item = self.get_item(ingredient.item_id).await?;
        Ok(ingredient.label(&unit, &item))
    }

    pub async fn describe_trip(&self, trip: &Trip) -> Result<String, InventoryError> {
        let source = self.get_source(trip.source_id).await?;
        Ok(trip.label(&source))
    }

    pub async fn describe_supply(&self, supply: &Supply) -> Result<String, InventoryError> {
        let unit = self.get_unit(supply.unit_id).await?;
        let item = self.get_item(supply.item_id).await?;
        let trip = self.get_trip(supply.trip_id).await?;
        Ok(supply.label(&unit, &item, &trip))
    }

    pub async fn describe_usage(&self, usage: &Usage) -> Result<String, InventoryError> {
        let supply = self.get_supply(usage.supply_id).await?;
        let supply_label = self.describe_supply(&supply).await?;
        Ok(usage.label(&supply_label))
    }
}

// ===== Storage error classification =====

fn sql_violation(
    resource: &'static str,
    code: Option<&str>,
    err: &anyhow::Error,
) -> Option<InventoryError> {
    let db_err = err.downcast_ref::<DbErr>()?;
    match db_err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => Some(InventoryError::DuplicateCode {
            resource,
            code: code.unwrap_or_default().to_string(),
        }),
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            Some(InventoryError::MissingRelated { detail })
        }
        _ => None,
    }
}

fn insert_error(resource: &'static str, code: Option<&str>, err: anyhow::Error) -> InventoryError {
    if let Some(violation) = sql_violation(resource, code, &err) {
        return violation;
    }
    internal_error(err)
}

fn update_error(
    resource: &'static str,
    id: i64,
    code: Option<&str>,
    err: anyhow::Error,
) -> InventoryError {
    if matches!(err.downcast_ref::<DbErr>(), Some(DbErr::RecordNotUpdated)) {
        return InventoryError::NotFound { resource, id };
    }
    if let Some(violation) = sql_violation(resource, code, &err) {
        return violation;
    }
    internal_error(err)
}

fn delete_error(resource: &'static str, id: i64, err: anyhow::Error) -> InventoryError {
    // The only foreign-key failure a delete can hit is a RESTRICT referrer.
    // SQLite enforces RESTRICT through an internal trigger and reports
    // SQLITE_CONSTRAINT_TRIGGER (1811) rather than a foreign-key error code,
    // which `sql_err()` does not classify, so the message is checked as well.
    if let Some(db_err) = err.downcast_ref::<DbErr>() {
        let foreign_key = matches!(
            db_err.sql_err(),
            Some(SqlErr::ForeignKeyConstraintViolation(_))
        ) || db_err.to_string().contains("FOREIGN KEY constraint failed");
        if foreign_key {
            return InventoryError::StillReferenced { resource, id };
        }
    }
    internal_error(err)
}

fn internal_error(err: anyhow::Error) -> InventoryError {
    tracing::error!(error = %err, "storage error");
    InventoryError::Internal
}

fn ensure_deleted(resource: &'static str, id: i64, deleted: u64) -> Result<(), InventoryError> {
    if deleted == 0 {
        return Err(InventoryError::NotFound { resource, id });
    }
    Ok(())
}
