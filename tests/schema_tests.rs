//! Integration tests for the inventory schema: constraint enforcement,
//! persistence defaults, and the auto-set usage timestamp.

mod common;

use larder::contract::{
    IngredientDraft, InventoryError, ItemDraft, RecipeDraft, SectionDraft, SupplyDraft, UnitDraft,
    UsageDraft, UsageMethod,
};
use rust_decimal::Decimal;

// ===== Unique codes =====

#[tokio::test]
async fn duplicate_item_code_is_rejected() {
    let service = common::service().await;
    common::seed_item(&service, "MLK1", "Milk").await;

    let err = service
        .create_item(ItemDraft {
            code: "MLK1".to_string(),
            section_id: None,
            name: "Milk 2%".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        InventoryError::DuplicateCode { resource: "item", ref code } if code == "MLK1"
    ));
}

#[tokio::test]
async fn duplicate_unit_code_is_rejected() {
    let service = common::service().await;
    common::seed_unit(&service, "cups", "Measuring cups").await;

    let err = service
        .create_unit(UnitDraft {
            code: "cups".to_string(),
            description: "another cups".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, InventoryError::DuplicateCode { resource: "unit", .. }));
}

#[tokio::test]
async fn duplicate_recipe_code_is_rejected_on_update_too() {
    let service = common::service().await;
    common::seed_recipe(&service, "CHL", "Chili").await;
    let other = common::seed_recipe(&service, "SOU", "Soup").await;

    let err = service
        .update_recipe(
            other.id,
            RecipeDraft {
                code: "CHL".to_string(),
                name: "Soup".to_string(),
                extended: None,
                source: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, InventoryError::DuplicateCode { resource: "recipe", .. }));
}

// ===== Restrict on referenced lookup rows =====

#[tokio::test]
async fn section_delete_is_blocked_by_referring_item() {
    let service = common::service().await;
    let section = common::seed_section(&service, "Dairy").await;
    let item = service
        .create_item(ItemDraft {
            code: "MLK1".to_string(),
            section_id: Some(section.id),
            name: "Milk".to_string(),
        })
        .await
        .unwrap();

    let err = service.delete_section(section.id).await.unwrap_err();
    assert!(matches!(
        err,
        InventoryError::StillReferenced { resource: "section", id } if id == section.id
    ));

    // Removing the referrer unblocks the delete.
    service.delete_item(item.id).await.unwrap();
    service.delete_section(section.id).await.unwrap();
}

#[tokio::test]
async fn item_delete_is_blocked_by_referring_ingredient() {
    let service = common::service().await;
    let item = common::seed_item(&service, "FLR", "Flour").await;
    let unit = common::seed_unit(&service, "cups", "Measuring cups").await;
    let recipe = common::seed_recipe(&service, "CHL", "Chili").await;
    service
        .create_ingredient(IngredientDraft {
            recipe_id: recipe.id,
            item_id: item.id,
            amount: 2.5,
            unit_id: unit.id,
        })
        .await
        .unwrap();

    let err = service.delete_item(item.id).await.unwrap_err();
    assert!(matches!(err, InventoryError::StillReferenced { resource: "item", .. }));

    let err = service.delete_unit(unit.id).await.unwrap_err();
    assert!(matches!(err, InventoryError::StillReferenced { resource: "unit", .. }));
}

#[tokio::test]
async fn source_delete_is_blocked_by_referring_trip() {
    let service = common::service().await;
    let source = common::seed_source(&service, "Costco").await;
    common::seed_trip(&service, source.id).await;

    let err = service.delete_source(source.id).await.unwrap_err();
    assert!(matches!(err, InventoryError::StillReferenced { resource: "source", .. }));
}

// ===== Cascades =====

#[tokio::test]
async fn recipe_delete_cascades_to_ingredients() {
    let service = common::service().await;
    let item = common::seed_item(&service, "FLR", "Flour").await;
    let unit = common::seed_unit(&service, "cups", "Measuring cups").await;
    let recipe = common::seed_recipe(&service, "CHL", "Chili").await;
    let ingredient = service
        .create_ingredient(IngredientDraft {
            recipe_id: recipe.id,
            item_id: item.id,
            amount: 2.5,
            unit_id: unit.id,
        })
        .await
        .unwrap();

    service.delete_recipe(recipe.id).await.unwrap();

    let err = service.get_ingredient(ingredient.id).await.unwrap_err();
    assert!(matches!(err, InventoryError::NotFound { resource: "ingredient", .. }));
}

#[tokio::test]
async fn trip_delete_cascades_through_supplies_to_usages() {
    let service = common::service().await;
    let source = common::seed_source(&service, "Costco").await;
    let trip = common::seed_trip(&service, source.id).await;
    let item = common::seed_item(&service, "FLR", "Flour").await;
    let unit = common::seed_unit(&service, "kg", "Kilograms").await;
    let supply = common::seed_supply(&service, trip.id, item.id, unit.id, 2.5).await;
    let usage = service
        .create_usage(UsageDraft {
            supply_id: supply.id,
            amount: 1.0,
            method: None,
        })
        .await
        .unwrap();

    service.delete_trip(trip.id).await.unwrap();

    assert!(matches!(
        service.get_supply(supply.id).await.unwrap_err(),
        InventoryError::NotFound { resource: "supply", .. }
    ));
    assert!(matches!(
        service.get_usage(usage.id).await.unwrap_err(),
        InventoryError::NotFound { resource: "usage", .. }
    ));
}

// ===== Missing related rows =====

#[tokio::test]
async fn supply_with_unknown_trip_is_rejected() {
    let service = common::service().await;
    let item = common::seed_item(&service, "FLR", "Flour").await;
    let unit = common::seed_unit(&service, "kg", "Kilograms").await;

    let err = service
        .create_supply(SupplyDraft {
            trip_id: 9999,
            item_id: item.id,
            amount: 1.0,
            unit_id: unit.id,
            expires: None,
            price: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, InventoryError::MissingRelated { .. }));
}

#[tokio::test]
async fn usage_with_unknown_supply_is_rejected() {
    let service = common::service().await;

    let err = service
        .create_usage(UsageDraft {
            supply_id: 9999,
            amount: 1.0,
            method: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, InventoryError::MissingRelated { .. }));
}

// ===== Persistence defaults =====

#[tokio::test]
async fn supply_price_defaults_to_zero() {
    let service = common::service().await;
    let source = common::seed_source(&service, "Costco").await;
    let trip = common::seed_trip(&service, source.id).await;
    let item = common::seed_item(&service, "FLR", "Flour").await;
    let unit = common::seed_unit(&service, "kg", "Kilograms").await;

    let supply = common::seed_supply(&service, trip.id, item.id, unit.id, 2.5).await;
    assert_eq!(supply.price, Decimal::new(0, 2));
    assert_eq!(supply.price.to_string(), "0.00");
}

#[tokio::test]
async fn supply_price_keeps_two_decimal_places() {
    let service = common::service().await;
    let source = common::seed_source(&service, "Costco").await;
    let trip = common::seed_trip(&service, source.id).await;
    let item = common::seed_item(&service, "FLR", "Flour").await;
    let unit = common::seed_unit(&service, "kg", "Kilograms").await;

    let created = service
        .create_supply(SupplyDraft {
            trip_id: trip.id,
            item_id: item.id,
            amount: 2.5,
            unit_id: unit.id,
            expires: None,
            price: Some(Decimal::new(1250, 2)),
        })
        .await
        .unwrap();
    assert_eq!(created.price.to_string(), "12.50");

    // The stored row reads back at the same scale.
    let fetched = service.get_supply(created.id).await.unwrap();
    assert_eq!(fetched.price.to_string(), "12.50");
}

#[tokio::test]
async fn usage_method_defaults_to_cooking() {
    let service = common::service().await;
    let source = common::seed_source(&service, "Costco").await;
    let trip = common::seed_trip(&service, source.id).await;
    let item = common::seed_item(&service, "FLR", "Flour").await;
    let unit = common::seed_unit(&service, "kg", "Kilograms").await;
    let supply = common::seed_supply(&service, trip.id, item.id, unit.id, 2.5).await;

    let usage = service
        .create_usage(UsageDraft {
            supply_id: supply.id,
            amount: 1.0,
            method: None,
        })
        .await
        .unwrap();
    assert_eq!(usage.method, UsageMethod::UsedInCooking);
}

#[tokio::test]
async fn usage_timestamp_is_set_at_creation_and_survives_update() {
    let service = common::service().await;
    let source = common::seed_source(&service, "Costco").await;
    let trip = common::seed_trip(&service, source.id).await;
    let item = common::seed_item(&service, "FLR", "Flour").await;
    let unit = common::seed_unit(&service, "kg", "Kilograms").await;
    let supply = common::seed_supply(&service, trip.id, item.id, unit.id, 2.5).await;

    let before = chrono::Utc::now();
    let usage = service
        .create_usage(UsageDraft {
            supply_id: supply.id,
            amount: 1.0,
            method: None,
        })
        .await
        .unwrap();
    let after = chrono::Utc::now();
    assert!(usage.when >= before && usage.when <= after);

    let second = service
        .create_usage(UsageDraft {
            supply_id: supply.id,
            amount: 0.5,
            method: None,
        })
        .await
        .unwrap();
    assert!(second.when >= usage.when);

    // Updates change the mutable fields only; the timestamp stays put.
    let updated = service
        .update_usage(
            usage.id,
            UsageDraft {
                supply_id: supply.id,
                amount: 2.0,
                method: Some(UsageMethod::Expired),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.amount, 2.0);
    assert_eq!(updated.method, UsageMethod::Expired);
    assert_eq!(updated.when, usage.when);
}

// ===== Not found and validation =====

#[tokio::test]
async fn missing_rows_surface_not_found() {
    let service = common::service().await;

    assert!(matches!(
        service.get_section(42).await.unwrap_err(),
        InventoryError::NotFound { resource: "section", id: 42 }
    ));
    assert!(matches!(
        service.delete_recipe(42).await.unwrap_err(),
        InventoryError::NotFound { resource: "recipe", id: 42 }
    ));
    assert!(matches!(
        service
            .update_section(42, SectionDraft { name: "Dairy".to_string() })
            .await
            .unwrap_err(),
        InventoryError::NotFound { resource: "section", id: 42 }
    ));
}

#[tokio::test]
async fn blank_required_fields_are_rejected() {
    let service = common::service().await;

    let err = service
        .create_section(SectionDraft {
            name: "  ".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::Validation { .. }));

    let err = service
        .create_item(ItemDraft {
            code: String::new(),
            section_id: None,
            name: "Milk".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::Validation { .. }));
}

#[tokio::test]
async fn non_finite_amounts_are_rejected() {
    let service = common::service().await;
    let item = common::seed_item(&service, "FLR", "Flour").await;
    let unit = common::seed_unit(&service, "kg", "Kilograms").await;
    let recipe = common::seed_recipe(&service, "CHL", "Chili").await;

    let err = service
        .create_ingredient(IngredientDraft {
            recipe_id: recipe.id,
            item_id: item.id,
            amount: f64::NAN,
            unit_id: unit.id,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::Validation { .. }));
}

// ===== Labels over live data =====

#[tokio::test]
async fn labels_resolve_related_records() {
    let service = common::service().await;
    let source = common::seed_source(&service, "Costco").await;
    let trip = common::seed_trip(&service, source.id).await;
    let item = common::seed_item(&service, "FLR", "Flour").await;
    let unit = common::seed_unit(&service, "kg", "Kilograms").await;
    let supply = common::seed_supply(&service, trip.id, item.id, unit.id, 2.5).await;

    let trip_label = service.describe_trip(&trip).await.unwrap();
    assert!(trip_label.starts_with("Costco on "));

    let supply_label = service.describe_supply(&supply).await.unwrap();
    assert!(supply_label.starts_with("2.5 kg Flour bought "));

    let usage = service
        .create_usage(UsageDraft {
            supply_id: supply.id,
            amount: 1.5,
            method: None,
        })
        .await
        .unwrap();
    let usage_label = service.describe_usage(&usage).await.unwrap();
    assert_eq!(usage_label, format!("1.5 of {supply_label}"));
}
