//! SeaORM entities for the inventory tables

/// Store sections
pub mod section {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "sections")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::item::Entity")]
        Items,
    }

    impl Related<super::item::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Items.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Food items
pub mod item {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "items")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        /// Globally unique item code
        #[sea_orm(unique)]
        pub code: String,
        pub section_id: Option<i64>,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Restrict: sections cannot be deleted while an item points at them
        #[sea_orm(
            belongs_to = "super::section::Entity",
            from = "Column::SectionId",
            to = "super::section::Column::Id"
        )]
        Section,
        #[sea_orm(has_many = "super::ingredient::Entity")]
        Ingredients,
        #[sea_orm(has_many = "super::supply::Entity")]
        Supplies,
    }

    impl Related<super::section::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Section.def()
        }
    }

    impl Related<super::ingredient::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Ingredients.def()
        }
    }

    impl Related<super::supply::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Supplies.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Measurement units
pub mod unit {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "units")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        /// Globally unique unit code
        #[sea_orm(unique)]
        pub code: String,
        pub description: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::ingredient::Entity")]
        Ingredients,
        #[sea_orm(has_many = "super::supply::Entity")]
        Supplies,
    }

    impl Related<super::ingredient::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Ingredients.def()
        }
    }

    impl Related<super::supply::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Supplies.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Recipes
pub mod recipe {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "recipes")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        /// Globally unique recipe code
        #[sea_orm(unique)]
        pub code: String,
        pub name: String,
        pub extended: Option<String>,
        pub source: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::ingredient::Entity")]
        Ingredients,
    }

    impl Related<super::ingredient::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Ingredients.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Recipe ingredients
pub mod ingredient {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "ingredients")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub recipe_id: i64,
        pub item_id: i64,
        pub amount: f64,
        pub unit_id: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Cascade: ingredients go away with their recipe
        #[sea_orm(
            belongs_to = "super::recipe::Entity",
            from = "Column::RecipeId",
            to = "super::recipe::Column::Id"
        )]
        Recipe,
        #[sea_orm(
            belongs_to = "super::item::Entity",
            from = "Column::ItemId",
            to = "super::item::Column::Id"
        )]
        Item,
        #[sea_orm(
            belongs_to = "super::unit::Entity",
            from = "Column::UnitId",
            to = "super::unit::Column::Id"
        )]
        Unit,
    }

    impl Related<super::recipe::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Recipe.def()
        }
    }

    impl Related<super::item::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Item.def()
        }
    }

    impl Related<super::unit::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Unit.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Grocery stores and markets
pub mod source {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "sources")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::trip::Entity")]
        Trips,
    }

    impl Related<super::trip::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Trips.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Trips to a store/market
pub mod trip {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "trips")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub source_id: i64,
        pub when: DateTimeUtc,
        pub comments: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::source::Entity",
            from = "Column::SourceId",
            to = "super::source::Column::Id"
        )]
        Source,
        #[sea_orm(has_many = "super::supply::Entity")]
        Supplies,
    }

    impl Related<super::source::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Source.def()
        }
    }

    impl Related<super::supply::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Supplies.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Inventory supplies brought in by trips
pub mod supply {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "supplies")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub trip_id: i64,
        pub item_id: i64,
        pub amount: f64,
        pub unit_id: i64,
        pub expires: Option<Date>,
        /// Purchase price, decimal(5,2)
        #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
        pub price: Decimal,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Cascade: supplies go away with their trip
        #[sea_orm(
            belongs_to = "super::trip::Entity",
            from = "Column::TripId",
            to = "super::trip::Column::Id"
        )]
        Trip,
        #[sea_orm(
            belongs_to = "super::item::Entity",
            from = "Column::ItemId",
            to = "super::item::Column::Id"
        )]
        Item,
        #[sea_orm(
            belongs_to = "super::unit::Entity",
            from = "Column::UnitId",
            to = "super::unit::Column::Id"
        )]
        Unit,
        #[sea_orm(has_many = "super::usage::Entity")]
        Usages,
    }

    impl Related<super::trip::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Trip.def()
        }
    }

    impl Related<super::item::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Item.def()
        }
    }

    impl Related<super::unit::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Unit.def()
        }
    }

    impl Related<super::usage::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Usages.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Depletion events against supplies
pub mod usage {
    use sea_orm::entity::prelude::*;

    /// Stored one-character usage method code
    #[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
    #[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
    pub enum Method {
        #[sea_orm(string_value = "E")]
        Expired,
        #[sea_orm(string_value = "U")]
        UsedInCooking,
    }

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "usages")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub supply_id: i64,
        /// Auto-set at insert; never updated
        pub when: DateTimeUtc,
        pub amount: f64,
        pub method: Method,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Cascade: usages go away with their supply
        #[sea_orm(
            belongs_to = "super::supply::Entity",
            from = "Column::SupplyId",
            to = "super::supply::Column::Id"
        )]
        Supply,
    }

    impl Related<super::supply::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Supply.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
