//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Draft conversions
//! apply the persistence-level defaults (usage timestamp and method, supply
//! price).

use crate::contract::{
    Ingredient, IngredientDraft, Item, ItemDraft, Recipe, RecipeDraft, Section, SectionDraft,
    Source, SourceDraft, Supply, SupplyDraft, Trip, TripDraft, Unit, UnitDraft, Usage, UsageDraft,
    UsageMethod,
};
use rust_decimal::Decimal;
use sea_orm::ActiveValue::{NotSet, Set};

use super::entity;

// ===== Section =====

impl From<entity::section::Model> for Section {
    fn from(entity: entity::section::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

impl From<&SectionDraft> for entity::section::ActiveModel {
    fn from(draft: &SectionDraft) -> Self {
        Self {
            id: NotSet,
            name: Set(draft.name.clone()),
        }
    }
}

// ===== Item =====

impl From<entity::item::Model> for Item {
    fn from(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            section_id: entity.section_id,
            name: entity.name,
        }
    }
}

impl From<&ItemDraft> for entity::item::ActiveModel {
    fn from(draft: &ItemDraft) -> Self {
        Self {
            id: NotSet,
            code: Set(draft.code.clone()),
            section_id: Set(draft.section_id),
            name: Set(draft.name.clone()),
        }
    }
}

// ===== Unit =====

impl From<entity::unit::Model> for Unit {
    fn from(entity: entity::unit::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            description: entity.description,
        }
    }
}

impl From<&UnitDraft> for entity::unit::ActiveModel {
    fn from(draft: &UnitDraft) -> Self {
        Self {
            id: NotSet,
            code: Set(draft.code.clone()),
            description: Set(draft.description.clone()),
        }
    }
}

// ===== Recipe =====

impl From<entity::recipe::Model> for Recipe {
    fn from(entity: entity::recipe::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            extended: entity.extended,
            source: entity.source,
        }
    }
}

impl From<&RecipeDraft> for entity::recipe::ActiveModel {
    fn from(draft: &RecipeDraft) -> Self {
        Self {
            id: NotSet,
            code: Set(draft.code.clone()),
            name: Set(draft.name.clone()),
            extended: Set(draft.extended.clone()),
            source: Set(draft.source.clone()),
        }
    }
}

// ===== Ingredient =====

impl From<entity::ingredient::Model> for Ingredient {
    fn from(entity: entity::ingredient::Model) -> Self {
        Self {
            id: entity.id,
            recipe_id: entity.recipe_id,
            item_id: entity.item_id,
            amount: entity.amount,
            unit_id: entity.unit_id,
        }
    }
}

impl From<&IngredientDraft> for entity::ingredient::ActiveModel {
    fn from(draft: &IngredientDraft) -> Self {
        Self {
            id: NotSet,
            recipe_id: Set(draft.recipe_id),
            item_id: Set(draft.item_id),
            amount: Set(draft.amount),
            unit_id: Set(draft.unit_id),
        }
    }
}

// ===== Source =====

impl From<entity::source::Model> for Source {
    fn from(entity: entity::source::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

impl From<&SourceDraft> for entity::source::ActiveModel {
    fn from(draft: &SourceDraft) -> Self {
        Self {
            id: NotSet,
            name: Set(draft.name.clone()),
        }
    }
}

// ===== Trip =====

impl From<entity::trip::Model> for Trip {
    fn from(entity: entity::trip::Model) -> Self {
        Self {
            id: entity.id,
            source_id: entity.source_id,
            when: entity.when,
            comments: entity.comments,
        }
    }
}

impl From<&TripDraft> for entity::trip::ActiveModel {
    fn from(draft: &TripDraft) -> Self {
        Self {
            id: NotSet,
            source_id: Set(draft.source_id),
            when: Set(draft.when),
            comments: Set(draft.comments.clone()),
        }
    }
}

// ===== Supply =====

impl From<entity::supply::Model> for Supply {
    fn from(entity: entity::supply::Model) -> Self {
        // SQLite round-trips decimals through REAL, dropping the scale;
        // prices are always two decimal places.
        let mut price = entity.price;
        price.rescale(2);
        Self {
            id: entity.id,
            trip_id: entity.trip_id,
            item_id: entity.item_id,
            amount: entity.amount,
            unit_id: entity.unit_id,
            expires: entity.expires,
            price,
        }
    }
}

impl From<&SupplyDraft> for entity::supply::ActiveModel {
    fn from(draft: &SupplyDraft) -> Self {
        Self {
            id: NotSet,
            trip_id: Set(draft.trip_id),
            item_id: Set(draft.item_id),
            amount: Set(draft.amount),
            unit_id: Set(draft.unit_id),
            expires: Set(draft.expires),
            price: Set(draft.price.unwrap_or_else(|| Decimal::new(0, 2))),
        }
    }
}

// ===== Usage =====

impl From<entity::usage::Method> for UsageMethod {
    fn from(method: entity::usage::Method) -> Self {
        match method {
            entity::usage::Method::Expired => UsageMethod::Expired,
            entity::usage::Method::UsedInCooking => UsageMethod::UsedInCooking,
        }
    }
}

impl From<UsageMethod> for entity::usage::Method {
    fn from(method: UsageMethod) -> Self {
        match method {
            UsageMethod::Expired => entity::usage::Method::Expired,
            UsageMethod::UsedInCooking => entity::usage::Method::UsedInCooking,
        }
    }
}

impl From<entity::usage::Model> for Usage {
    fn from(entity: entity::usage::Model) -> Self {
        Self {
            id: entity.id,
            supply_id: entity.supply_id,
            when: entity.when,
            amount: entity.amount,
            method: entity.method.into(),
        }
    }
}

impl From<&UsageDraft> for entity::usage::ActiveModel {
    fn from(draft: &UsageDraft) -> Self {
        Self {
            id: NotSet,
            supply_id: Set(draft.supply_id),
            // auto-set at creation; the update path unsets this again
            when: Set(chrono::Utc::now()),
            amount: Set(draft.amount),
            method: Set(draft.method.unwrap_or_default().into()),
        }
    }
}
