use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ItemId};

/// Quantities strictly below this value are shown as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Field values for a record, without identity.
///
/// Produced by [`crate::ItemForm::submit`] and consumed by the store. A draft
/// that reaches the store has already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
            price,
        }
    }

    /// Check the field-level rules a submitted draft must satisfy.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation("category is required"));
        }
        if self.price < Decimal::ZERO {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(())
    }
}

/// One inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    category: String,
    quantity: u32,
    price: Decimal,
}

impl InventoryItem {
    /// Attach an identity to a draft.
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        let ItemDraft {
            name,
            category,
            quantity,
            price,
        } = draft;
        Self {
            id,
            name,
            category,
            quantity,
            price,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Derived from the current quantity on every call.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }

    /// Current field values, e.g. to preload an edit form.
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }

    /// Same record with every field but the id replaced.
    pub(crate) fn replaced_with(&self, draft: ItemDraft) -> Self {
        Self::from_draft(self.id, draft)
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
