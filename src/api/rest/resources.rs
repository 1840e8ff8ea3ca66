//! The nine admin resources, each delegating to the domain service
//!
//! All registrations are uniform; the only per-entity work is converting
//! between contract models and DTOs (and resolving the label for entities
//! whose textual representation spans related records).

use crate::contract::InventoryError;
use crate::domain::Service;
use super::admin::AdminResource;
use super::dto::*;
use async_trait::async_trait;

pub struct SectionAdmin;

#[async_trait]
impl AdminResource for SectionAdmin {
    const COLLECTION: &'static str = "sections";
    type Dto = SectionDto;
    type Payload = SectionPayload;

    async fn list(service: &Service) -> Result<Vec<SectionDto>, InventoryError> {
        Ok(service
            .list_sections()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn get(service: &Service, id: i64) -> Result<SectionDto, InventoryError> {
        Ok(service.get_section(id).await?.into())
    }

    async fn create(service: &Service, payload: SectionPayload) -> Result<SectionDto, InventoryError> {
        Ok(service.create_section(payload.into()).await?.into())
    }

    async fn update(
        service: &Service,
        id: i64,
        payload: SectionPayload,
    ) -> Result<SectionDto, InventoryError> {
        Ok(service.update_section(id, payload.into()).await?.into())
    }

    async fn delete(service: &Service, id: i64) -> Result<(), InventoryError> {
        service.delete_section(id).await
    }
}

pub struct ItemAdmin;

#[async_trait]
impl AdminResource for ItemAdmin {
    const COLLECTION: &'static str = "items";
    type Dto = ItemDto;
    type Payload = ItemPayload;

    async fn list(service: &Service) -> Result<Vec<ItemDto>, InventoryError> {
        Ok(service
            .list_items()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn get(service: &Service, id: i64) -> Result<ItemDto, InventoryError> {
        Ok(service.get_item(id).await?.into())
    }

    async fn create(service: &Service, payload: ItemPayload) -> Result<ItemDto, InventoryError> {
        Ok(service.create_item(payload.into()).await?.into())
    }

    async fn update(
        service: &Service,
        id: i64,
        payload: ItemPayload,
    ) -> Result<ItemDto, InventoryError> {
        Ok(service.update_item(id, payload.into()).await?.into())
    }

    async fn delete(service: &Service, id: i64) -> Result<(), InventoryError> {
        service.delete_item(id).await
    }
}

pub struct UnitAdmin;

#[async_trait]
impl AdminResource for UnitAdmin {
    const COLLECTION: &'static str = "units";
    type Dto = UnitDto;
    type Payload = UnitPayload;

    async fn list(service: &Service) -> Result<Vec<UnitDto>, InventoryError> {
        Ok(service
            .list_units()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn get(service: &Service, id: i64) -> Result<UnitDto, InventoryError> {
        Ok(service.get_unit(id).await?.into())
    }

    async fn create(service: &Service, payload: UnitPayload) -> Result<UnitDto, InventoryError> {
        Ok(service.create_unit(payload.into()).await?.into())
    }

    async fn update(
        service: &Service,
        id: i64,
        payload: UnitPayload,
    ) -> Result<UnitDto, InventoryError> {
        Ok(service.update_unit(id, payload.into()).await?.into())
    }

    async fn delete(service: &Service, id: i64) -> Result<(), InventoryError> {
        service.delete_unit(id).await
    }
}

pub struct RecipeAdmin;

#[async_trait]
impl AdminResource for RecipeAdmin {
    const COLLECTION: &'static str = "recipes";
    type Dto = RecipeDto;
    type Payload = RecipePayload;

    async fn list(service: &Service) -> Result<Vec<RecipeDto>, InventoryError> {
        Ok(service
            .list_recipes()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn get(service: &Service, id: i64) -> Result<RecipeDto, InventoryError> {
        Ok(service.get_recipe(id).await?.into())
    }

    async fn create(service: &Service, payload: RecipePayload) -> Result<RecipeDto, InventoryError> {
        Ok(service.create_recipe(payload.into()).await?.into())
    }

    async fn update(
        service: &Service,
        id: i64,
        payload: RecipePayload,
    ) -> Result<RecipeDto, InventoryError> {
        Ok(service.update_recipe(id, payload.into()).await?.into())
    }

    async fn delete(service: &Service, id: i64) -> Result<(), InventoryError> {
        service.delete_recipe(id).await
    }
}

pub struct IngredientAdmin;

#[async_trait]
impl AdminResource for IngredientAdmin {
    const COLLECTION: &'static str = "ingredients";
    type Dto = IngredientDto;
    type Payload = IngredientPayload;

    async fn list(service: &Service) -> Result<Vec<IngredientDto>, InventoryError> {
        let mut dtos = Vec::new();
        for ingredient in service.list_ingredients().await? {
            let label = service.describe_ingredient(&ingredient).await?;
            dtos.push(IngredientDto::new(ingredient, label));
        }
        Ok(dtos)
    }

    async fn get(service: &Service, id: i64) -> Result<IngredientDto, InventoryError> {
        let ingredient = service.get_ingredient(id).await?;
        let label = service.describe_ingredient(&ingredient).await?;
        Ok(IngredientDto::new(ingredient, label))
    }

    async fn create(
        service: &Service,
        payload: IngredientPayload,
    ) -> Result<IngredientDto, InventoryError> {
        let ingredient = service.create_ingredient(payload.into()).await?;
        let label = service.describe_ingredient(&ingredient).await?;
        Ok(IngredientDto::new(ingredient, label))
    }

    async fn update(
        service: &Service,
        id: i64,
        payload: IngredientPayload,
    ) -> Result<IngredientDto, InventoryError> {
        let ingredient = service.update_ingredient(id, payload.into()).await?;
        let label = service.describe_ingredient(&ingredient).await?;
        Ok(IngredientDto::new(ingredient, label))
    }

    async fn delete(service: &Service, id: i64) -> Result<(), InventoryError> {
        service.delete_ingredient(id).await
    }
}

pub struct SourceAdmin;

#[async_trait]
impl AdminResource for SourceAdmin {
    const COLLECTION: &'static str = "sources";
    type Dto = SourceDto;
    type Payload = SourcePayload;

    async fn list(service: &Service) -> Result<Vec<SourceDto>, InventoryError> {
        Ok(service
            .list_sources()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn get(service: &Service, id: i64) -> Result<SourceDto, InventoryError> {
        Ok(service.get_source(id).await?.into())
    }

    async fn create(service: &Service, payload: SourcePayload) -> Result<SourceDto, InventoryError> {
        Ok(service.create_source(payload.into()).await?.into())
    }

    async fn update(
        service: &Service,
        id: i64,
        payload: SourcePayload,
    ) -> Result<SourceDto, InventoryError> {
        Ok(service.update_source(id, payload.into()).await?.into())
    }

    async fn delete(service: &Service, id: i64) -> Result<(), InventoryError> {
        service.delete_source(id).await
    }
}

pub struct TripAdmin;

#[async_trait]
impl AdminResource for TripAdmin {
    const COLLECTION: &'static str = "trips";
    type Dto = TripDto;
    type Payload = TripPayload;

    async fn list(service: &Service) -> Result<Vec<TripDto>, InventoryError> {
        let mut dtos = Vec::new();
        for trip in service.list_trips().await? {
            let label = service.describe_trip(&trip).await?;
            dtos.push(TripDto::new(trip, label));
        }
        Ok(dtos)
    }

    async fn get(service: &Service, id: i64) -> Result<TripDto, InventoryError> {
        let trip = service.get_trip(id).await?;
        let label = service.describe_trip(&trip).await?;
        Ok(TripDto::new(trip, label))
    }

    async fn create(service: &Service, payload: TripPayload) -> Result<TripDto, InventoryError> {
        let trip = service.create_trip(payload.into()).await?;
        let label = service.describe_trip(&trip).await?;
        Ok(TripDto::new(trip, label))
    }

    async fn update(
        service: &Service,
        id: i64,
        payload: TripPayload,
    ) -> Result<TripDto, InventoryError> {
        let trip = service.update_trip(id, payload.into()).await?;
        let label = service.describe_trip(&trip).await?;
        Ok(TripDto::new(trip, label))
    }

    async fn delete(service: &Service, id: i64) -> Result<(), InventoryError> {
        service.delete_trip(id).await
    }
}

pub struct SupplyAdmin;

#[async_trait]
impl AdminResource for SupplyAdmin {
    const COLLECTION: &'static str = "supplies";
    type Dto = SupplyDto;
    type Payload = SupplyPayload;

    async fn list(service: &Service) -> Result<Vec<SupplyDto>, InventoryError> {
        let mut dtos = Vec::new();
        for supply in service.list_supplies().await? {
            let label = service.describe_supply(&supply).await?;
            dtos.push(SupplyDto::new(supply, label));
        }
        Ok(dtos)
    }

    async fn get(service: &Service, id: i64) -> Result<SupplyDto, InventoryError> {
        let supply = service.get_supply(id).await?;
        let label = service.describe_supply(&supply).await?;
        Ok(SupplyDto::new(supply, label))
    }

    async fn create(service: &Service, payload: SupplyPayload) -> Result<SupplyDto, InventoryError> {
        let supply = service.create_supply(payload.into()).await?;
        let label = service.describe_supply(&supply).await?;
        Ok(SupplyDto::new(supply, label))
    }

    async fn update(
        service: &Service,
        id: i64,
        payload: SupplyPayload,
    ) -> Result<SupplyDto, InventoryError> {
        let supply = service.update_supply(id, payload.into()).await?;
        let label = service.describe_supply(&supply).await?;
        Ok(SupplyDto::new(supply, label))
    }

    async fn delete(service: &Service, id: i64) -> Result<(), InventoryError> {
        service.delete_supply(id).await
    }
}

pub struct UsageAdmin;

#[async_trait]
impl AdminResource for UsageAdmin {
    const COLLECTION: &'static str = "usages";
    type Dto = UsageDto;
    type Payload = UsagePayload;

    async fn list(service: &Service) -> Result<Vec<UsageDto>, InventoryError> {
        let mut dtos = Vec::new();
        for usage in service.list_usages().await? {
            let label = service.describe_usage(&usage).await?;
            dtos.push(UsageDto::new(usage, label));
        }
        Ok(dtos)
    }

    async fn get(service: &Service, id: i64) -> Result<UsageDto, InventoryError> {
        let usage = service.get_usage(id).await?;
        let label = service.describe_usage(&usage).await?;
        Ok(UsageDto::new(usage, label))
    }

    async fn create(service: &Service, payload: UsagePayload) -> Result<UsageDto, InventoryError> {
        let usage = service.create_usage(payload.into()).await?;
        let label = service.describe_usage(&usage).await?;
        Ok(UsageDto::new(usage, label))
    }

    async fn update(
        service: &Service,
        id: i64,
        payload: UsagePayload,
    ) -> Result<UsageDto, InventoryError> {
        let usage = service.update_usage(id, payload.into()).await?;
        let label = service.describe_usage(&usage).await?;
        Ok(UsageDto::new(usage, label))
    }

    async fn delete(service: &Service, id: i64) -> Result<(), InventoryError> {
        service.delete_usage(id).await
    }
}
