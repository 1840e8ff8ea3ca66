//! Database migrations for the inventory schema
//!
//! One table per migration, ordered so every foreign key target exists before
//! its referrers. RESTRICT protects catalog data (sections, items, units,
//! sources); CASCADE removes owned children (ingredients, supplies, usages).

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250112_000001_create_sections::Migration),
            Box::new(m20250112_000002_create_units::Migration),
            Box::new(m20250112_000003_create_items::Migration),
            Box::new(m20250112_000004_create_recipes::Migration),
            Box::new(m20250112_000005_create_ingredients::Migration),
            Box::new(m20250112_000006_create_sources::Migration),
            Box::new(m20250112_000007_create_trips::Migration),
            Box::new(m20250112_000008_create_supplies::Migration),
            Box::new(m20250112_000009_create_usages::Migration),
        ]
    }
}

#[derive(DeriveIden)]
enum Sections {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Units {
    Table,
    Id,
    Code,
    Description,
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Code,
    SectionId,
    Name,
}

#[derive(DeriveIden)]
enum Recipes {
    Table,
    Id,
    Code,
    Name,
    Extended,
    Source,
}

#[derive(DeriveIden)]
enum Ingredients {
    Table,
    Id,
    RecipeId,
    ItemId,
    Amount,
    UnitId,
}

#[derive(DeriveIden)]
enum Sources {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Trips {
    Table,
    Id,
    SourceId,
    When,
    Comments,
}

#[derive(DeriveIden)]
enum Supplies {
    Table,
    Id,
    TripId,
    ItemId,
    Amount,
    UnitId,
    Expires,
    Price,
}

#[derive(DeriveIden)]
enum Usages {
    Table,
    Id,
    SupplyId,
    When,
    Amount,
    Method,
}

fn surrogate_key<T: IntoIden + 'static>(column: T) -> ColumnDef {
    let mut def = ColumnDef::new(column);
    def.big_integer().not_null().auto_increment().primary_key();
    def
}

// All nine migrations share this file, so `DeriveMigrationName` (which names
// a migration after the file stem) cannot be used; names are spelled out.

mod m20250112_000001_create_sections {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250112_000001_create_sections"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Sections::Table)
                        .if_not_exists()
                        .col(surrogate_key(Sections::Id))
                        .col(ColumnDef::new(Sections::Name).string_len(50).not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Sections::Table).to_owned())
                .await
        }
    }
}

mod m20250112_000002_create_units {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250112_000002_create_units"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Units::Table)
                        .if_not_exists()
                        .col(surrogate_key(Units::Id))
                        .col(
                            ColumnDef::new(Units::Code)
                                .string_len(10)
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Units::Description)
                                .string_len(100)
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Units::Table).to_owned())
                .await
        }
    }
}

mod m20250112_000003_create_items {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250112_000003_create_items"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Items::Table)
                        .if_not_exists()
                        .col(surrogate_key(Items::Id))
                        .col(
                            ColumnDef::new(Items::Code)
                                .string_len(20)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Items::SectionId).big_integer())
                        .col(ColumnDef::new(Items::Name).string_len(100).not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_items_section")
                                .from(Items::Table, Items::SectionId)
                                .to(Sections::Table, Sections::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Items::Table).to_owned())
                .await
        }
    }
}

mod m20250112_000004_create_recipes {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250112_000004_create_recipes"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Recipes::Table)
                        .if_not_exists()
                        .col(surrogate_key(Recipes::Id))
                        .col(
                            ColumnDef::new(Recipes::Code)
                                .string_len(40)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Recipes::Name).string_len(100).not_null())
                        .col(ColumnDef::new(Recipes::Extended).string_len(100))
                        .col(ColumnDef::new(Recipes::Source).string_len(1000))
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Recipes::Table).to_owned())
                .await
        }
    }
}

mod m20250112_000005_create_ingredients {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250112_000005_create_ingredients"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Ingredients::Table)
                        .if_not_exists()
                        .col(surrogate_key(Ingredients::Id))
                        .col(ColumnDef::new(Ingredients::RecipeId).big_integer().not_null())
                        .col(ColumnDef::new(Ingredients::ItemId).big_integer().not_null())
                        .col(ColumnDef::new(Ingredients::Amount).double().not_null())
                        .col(ColumnDef::new(Ingredients::UnitId).big_integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_ingredients_recipe")
                                .from(Ingredients::Table, Ingredients::RecipeId)
                                .to(Recipes::Table, Recipes::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_ingredients_item")
                                .from(Ingredients::Table, Ingredients::ItemId)
                                .to(Items::Table, Items::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_ingredients_unit")
                                .from(Ingredients::Table, Ingredients::UnitId)
                                .to(Units::Table, Units::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Ingredients::Table).to_owned())
                .await
        }
    }
}

mod m20250112_000006_create_sources {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250112_000006_create_sources"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Sources::Table)
                        .if_not_exists()
                        .col(surrogate_key(Sources::Id))
                        .col(ColumnDef::new(Sources::Name).string_len(50).not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Sources::Table).to_owned())
                .await
        }
    }
}

mod m20250112_000007_create_trips {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250112_000007_create_trips"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Trips::Table)
                        .if_not_exists()
                        .col(surrogate_key(Trips::Id))
                        .col(ColumnDef::new(Trips::SourceId).big_integer().not_null())
                        .col(
                            ColumnDef::new(Trips::When)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Trips::Comments).string_len(500))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_trips_source")
                                .from(Trips::Table, Trips::SourceId)
                                .to(Sources::Table, Sources::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Trips::Table).to_owned())
                .await
        }
    }
}

mod m20250112_000008_create_supplies {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250112_000008_create_supplies"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Supplies::Table)
                        .if_not_exists()
                        .col(surrogate_key(Supplies::Id))
                        .col(ColumnDef::new(Supplies::TripId).big_integer().not_null())
                        .col(ColumnDef::new(Supplies::ItemId).big_integer().not_null())
                        .col(ColumnDef::new(Supplies::Amount).double().not_null())
                        .col(ColumnDef::new(Supplies::UnitId).big_integer().not_null())
                        .col(ColumnDef::new(Supplies::Expires).date())
                        .col(
                            ColumnDef::new(Supplies::Price)
                                .decimal_len(5, 2)
                                .not_null()
                                .default(0),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_supplies_trip")
                                .from(Supplies::Table, Supplies::TripId)
                                .to(Trips::Table, Trips::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_supplies_item")
                                .from(Supplies::Table, Supplies::ItemId)
                                .to(Items::Table, Items::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_supplies_unit")
                                .from(Supplies::Table, Supplies::UnitId)
                                .to(Units::Table, Units::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Supplies::Table).to_owned())
                .await
        }
    }
}

mod m20250112_000009_create_usages {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250112_000009_create_usages"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Usages::Table)
                        .if_not_exists()
                        .col(surrogate_key(Usages::Id))
                        .col(ColumnDef::new(Usages::SupplyId).big_integer().not_null())
                        .col(
                            ColumnDef::new(Usages::When)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Usages::Amount).double().not_null())
                        .col(
                            ColumnDef::new(Usages::Method)
                                .string_len(1)
                                .not_null()
                                .default("U"),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_usages_supply")
                                .from(Usages::Table, Usages::SupplyId)
                                .to(Supplies::Table, Supplies::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Usages::Table).to_owned())
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // The version ledger keys on the migration name; duplicates would make
    // the second `up` step fail its unique-key insert.
    #[test]
    fn migration_names_are_distinct_and_versioned() {
        let migrations = Migrator::migrations();
        let names: Vec<&str> = migrations.iter().map(|m| m.name()).collect();

        let unique: HashSet<&&str> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "duplicate migration names: {names:?}");
        for name in names {
            assert!(name.starts_with("m20"), "unversioned migration name: {name}");
        }
    }
}
