//! Common test utilities: in-memory database setup and seeding helpers

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;

use larder::contract::{
    Item, ItemDraft, Recipe, RecipeDraft, Section, SectionDraft, Source, SourceDraft, Supply,
    SupplyDraft, Trip, TripDraft, Unit, UnitDraft,
};
use larder::domain::Service;
use larder::infra::storage::migrations::Migrator;
use larder::infra::storage::sea_orm_repositories;

/// Fresh service over a migrated in-memory SQLite database.
///
/// The pool is capped at one connection so every statement sees the same
/// in-memory database.
pub async fn service() -> Arc<Service> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("connect sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    Arc::new(Service::new(sea_orm_repositories(Arc::new(db))))
}

pub async fn seed_section(service: &Service, name: &str) -> Section {
    service
        .create_section(SectionDraft {
            name: name.to_string(),
        })
        .await
        .expect("seed section")
}

pub async fn seed_item(service: &Service, code: &str, name: &str) -> Item {
    service
        .create_item(ItemDraft {
            code: code.to_string(),
            section_id: None,
            name: name.to_string(),
        })
        .await
        .expect("seed item")
}

pub async fn seed_unit(service: &Service, code: &str, description: &str) -> Unit {
    service
        .create_unit(UnitDraft {
            code: code.to_string(),
            description: description.to_string(),
        })
        .await
        .expect("seed unit")
}

pub async fn seed_recipe(service: &Service, code: &str, name: &str) -> Recipe {
    service
        .create_recipe(RecipeDraft {
            code: code.to_string(),
            name: name.to_string(),
            extended: None,
            source: None,
        })
        .await
        .expect("seed recipe")
}

pub async fn seed_source(service: &Service, name: &str) -> Source {
    service
        .create_source(SourceDraft {
            name: name.to_string(),
        })
        .await
        .expect("seed source")
}

pub async fn seed_trip(service: &Service, source_id: i64) -> Trip {
    service
        .create_trip(TripDraft {
            source_id,
            when: chrono::Utc::now(),
            comments: None,
        })
        .await
        .expect("seed trip")
}

pub async fn seed_supply(
    service: &Service,
    trip_id: i64,
    item_id: i64,
    unit_id: i64,
    amount: f64,
) -> Supply {
    service
        .create_supply(SupplyDraft {
            trip_id,
            item_id,
            amount,
            unit_id,
            expires: None,
            price: None,
        })
        .await
        .expect("seed supply")
}
