//! Contract models for the inventory schema
//!
//! These models are transport-agnostic and carry the entity definitions the
//! persistence and admin layers consume. NO serde derives - these are pure
//! domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// A named area of a grocery store where items are found.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: i64,
    pub name: String,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A purchasable food good.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    /// Globally unique item code
    pub code: String,
    /// Store section where the item is found, if known
    pub section_id: Option<i64>,
    pub name: String,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// A measurement unit (g, ml, cups, tbsp, tsp).
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: i64,
    /// Globally unique unit code
    pub code: String,
    pub description: String,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// A recipe; its composition lives in [`Ingredient`] rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: i64,
    /// Globally unique recipe code
    pub code: String,
    pub name: String,
    /// Extended qualifier, e.g. a variant name
    pub extended: Option<String>,
    /// Free-text provenance (cookbook, URL, family lore)
    pub source: Option<String>,
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extended {
            Some(extended) => write!(f, "{} {} ({})", self.name, extended, self.code),
            None => write!(f, "{} ({})", self.name, self.code),
        }
    }
}

/// Links a recipe to an item with a quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: i64,
    pub recipe_id: i64,
    pub item_id: i64,
    pub amount: f64,
    pub unit_id: i64,
}

impl Ingredient {
    /// Textual representation; needs the related unit and item.
    pub fn label(&self, unit: &Unit, item: &Item) -> String {
        format!("{} {} - {}", self.amount, unit.code, item.name)
    }
}

/// A grocery store or market.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub id: i64,
    pub name: String,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A trip to a store/market. All incoming supplies link to a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: i64,
    pub source_id: i64,
    pub when: DateTime<Utc>,
    pub comments: Option<String>,
}

impl Trip {
    /// Textual representation, e.g. "Costco on Mar 04".
    pub fn label(&self, source: &Source) -> String {
        format!("{} on {}", source.name, self.when.format("%b %d"))
    }
}

/// An amount of an item added to the inventory, with expiry date and price.
#[derive(Debug, Clone, PartialEq)]
pub struct Supply {
    pub id: i64,
    pub trip_id: i64,
    pub item_id: i64,
    pub amount: f64,
    pub unit_id: i64,
    pub expires: Option<NaiveDate>,
    /// Purchase price, scale 2
    pub price: Decimal,
}

impl Supply {
    /// Textual representation, e.g. "2 kg Flour bought 03/04/26".
    pub fn label(&self, unit: &Unit, item: &Item, trip: &Trip) -> String {
        format!(
            "{} {} {} bought {}",
            self.amount,
            unit.code,
            item.name,
            trip.when.format("%m/%d/%y")
        )
    }
}

/// How a supply was depleted: consumed in cooking or thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsageMethod {
    Expired,
    #[default]
    UsedInCooking,
}

impl UsageMethod {
    /// One-character storage code.
    pub const fn code(self) -> char {
        match self {
            UsageMethod::Expired => 'E',
            UsageMethod::UsedInCooking => 'U',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'E' => Some(UsageMethod::Expired),
            'U' => Some(UsageMethod::UsedInCooking),
            _ => None,
        }
    }
}

/// A reduction in an on-hand supply, through usage or expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct Usage {
    pub id: i64,
    pub supply_id: i64,
    /// Set by the persistence layer at creation; never editable afterwards
    pub when: DateTime<Utc>,
    pub amount: f64,
    pub method: UsageMethod,
}

impl Usage {
    /// Textual representation; prefixes the parent supply's label.
    pub fn label(&self, supply_label: &str) -> String {
        format!("{} of {}", self.amount, supply_label)
    }
}

// ===== Draft types =====
//
// A draft is the caller-supplied shape of an entity for create and update;
// the surrogate id and any auto-set fields are owned by the persistence layer.

#[derive(Debug, Clone, PartialEq)]
pub struct SectionDraft {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub code: String,
    pub section_id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitDraft {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub code: String,
    pub name: String,
    pub extended: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientDraft {
    pub recipe_id: i64,
    pub item_id: i64,
    pub amount: f64,
    pub unit_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceDraft {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripDraft {
    pub source_id: i64,
    pub when: DateTime<Utc>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplyDraft {
    pub trip_id: i64,
    pub item_id: i64,
    pub amount: f64,
    pub unit_id: i64,
    pub expires: Option<NaiveDate>,
    /// Defaults to 0.00 when unset
    pub price: Option<Decimal>,
}

/// Note the absence of `when`: the creation timestamp is not caller-settable.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageDraft {
    pub supply_id: i64,
    pub amount: f64,
    /// Defaults to [`UsageMethod::UsedInCooking`] when unset
    pub method: Option<UsageMethod>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn unit(code: &str) -> Unit {
        Unit {
            id: 1,
            code: code.to_string(),
            description: String::new(),
        }
    }

    fn item(name: &str, code: &str) -> Item {
        Item {
            id: 1,
            code: code.to_string(),
            section_id: None,
            name: name.to_string(),
        }
    }

    #[test]
    fn section_label_is_name() {
        let section = Section {
            id: 1,
            name: "Dairy".to_string(),
        };
        assert_eq!(section.to_string(), "Dairy");
    }

    #[test]
    fn item_label_is_name_and_code() {
        assert_eq!(item("Milk", "MLK1").to_string(), "Milk (MLK1)");
    }

    #[test]
    fn unit_label_is_code() {
        assert_eq!(unit("cups").to_string(), "cups");
    }

    #[test]
    fn recipe_label_without_extended() {
        let recipe = Recipe {
            id: 1,
            code: "CHL".to_string(),
            name: "Chili".to_string(),
            extended: None,
            source: None,
        };
        assert_eq!(recipe.to_string(), "Chili (CHL)");
    }

    #[test]
    fn recipe_label_with_extended() {
        let recipe = Recipe {
            id: 1,
            code: "CHL".to_string(),
            name: "Chili".to_string(),
            extended: Some("Spicy".to_string()),
            source: None,
        };
        assert_eq!(recipe.to_string(), "Chili Spicy (CHL)");
    }

    #[test]
    fn ingredient_label_uses_unit_code_and_item_name() {
        let ingredient = Ingredient {
            id: 1,
            recipe_id: 1,
            item_id: 1,
            amount: 2.5,
            unit_id: 1,
        };
        assert_eq!(
            ingredient.label(&unit("cups"), &item("Flour", "FLR")),
            "2.5 cups - Flour"
        );
    }

    #[test]
    fn trip_label_abbreviates_month() {
        let source = Source {
            id: 1,
            name: "Costco".to_string(),
        };
        let trip = Trip {
            id: 1,
            source_id: 1,
            when: Utc.with_ymd_and_hms(2026, 3, 4, 10, 30, 0).unwrap(),
            comments: None,
        };
        assert_eq!(trip.label(&source), "Costco on Mar 04");
    }

    #[test]
    fn supply_label_mentions_purchase_date() {
        let trip = Trip {
            id: 1,
            source_id: 1,
            when: Utc.with_ymd_and_hms(2026, 3, 4, 10, 30, 0).unwrap(),
            comments: None,
        };
        let supply = Supply {
            id: 1,
            trip_id: 1,
            item_id: 1,
            amount: 2.5,
            unit_id: 1,
            expires: None,
            price: Decimal::new(0, 2),
        };
        assert_eq!(
            supply.label(&unit("kg"), &item("Flour", "FLR"), &trip),
            "2.5 kg Flour bought 03/04/26"
        );
    }

    #[test]
    fn usage_label_prefixes_supply_label() {
        let usage = Usage {
            id: 1,
            supply_id: 1,
            when: Utc::now(),
            amount: 1.5,
            method: UsageMethod::UsedInCooking,
        };
        assert_eq!(
            usage.label("2.5 kg Flour bought 03/04/26"),
            "1.5 of 2.5 kg Flour bought 03/04/26"
        );
    }

    #[test]
    fn usage_method_codes_round_trip() {
        assert_eq!(UsageMethod::Expired.code(), 'E');
        assert_eq!(UsageMethod::UsedInCooking.code(), 'U');
        assert_eq!(UsageMethod::from_code('E'), Some(UsageMethod::Expired));
        assert_eq!(UsageMethod::from_code('U'), Some(UsageMethod::UsedInCooking));
        assert_eq!(UsageMethod::from_code('X'), None);
    }

    #[test]
    fn usage_method_defaults_to_cooking() {
        assert_eq!(UsageMethod::default(), UsageMethod::UsedInCooking);
    }
}
