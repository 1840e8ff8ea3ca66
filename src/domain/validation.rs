//! Draft validation applied before drafts reach storage
//!
//! Only required-field checks live here; uniqueness and referential integrity
//! are the persistence layer's job.

use crate::contract::{
    IngredientDraft, InventoryError, ItemDraft, RecipeDraft, SectionDraft, SourceDraft,
    SupplyDraft, UnitDraft, UsageDraft,
};

fn required(field: &'static str, value: &str) -> Result<(), InventoryError> {
    if value.trim().is_empty() {
        return Err(InventoryError::Validation {
            message: format!("{} must not be empty", field),
        });
    }
    Ok(())
}

fn finite(field: &'static str, value: f64) -> Result<(), InventoryError> {
    if !value.is_finite() {
        return Err(InventoryError::Validation {
            message: format!("{} must be a finite number", field),
        });
    }
    Ok(())
}

pub fn validate_section(draft: &SectionDraft) -> Result<(), InventoryError> {
    required("name", &draft.name)
}

pub fn validate_item(draft: &ItemDraft) -> Result<(), InventoryError> {
    required("code", &draft.code)?;
    required("name", &draft.name)
}

pub fn validate_unit(draft: &UnitDraft) -> Result<(), InventoryError> {
    required("code", &draft.code)?;
    required("description", &draft.description)
}

pub fn validate_recipe(draft: &RecipeDraft) -> Result<(), InventoryError> {
    required("code", &draft.code)?;
    required("name", &draft.name)
}

pub fn validate_ingredient(draft: &IngredientDraft) -> Result<(), InventoryError> {
    finite("amount", draft.amount)
}

pub fn validate_source(draft: &SourceDraft) -> Result<(), InventoryError> {
    required("name", &draft.name)
}

pub fn validate_supply(draft: &SupplyDraft) -> Result<(), InventoryError> {
    finite("amount", draft.amount)
}

pub fn validate_usage(draft: &UsageDraft) -> Result<(), InventoryError> {
    finite("amount", draft.amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let err = validate_section(&SectionDraft {
            name: "   ".to_string(),
        })
        .unwrap_err();
        assert!(matches!(err, InventoryError::Validation { .. }));
    }

    #[test]
    fn nan_amount_is_rejected() {
        let err = validate_usage(&UsageDraft {
            supply_id: 1,
            amount: f64::NAN,
            method: None,
        })
        .unwrap_err();
        assert!(matches!(err, InventoryError::Validation { .. }));
    }

    #[test]
    fn populated_item_draft_passes() {
        validate_item(&ItemDraft {
            code: "MLK1".to_string(),
            section_id: None,
            name: "Milk".to_string(),
        })
        .unwrap();
    }
}
