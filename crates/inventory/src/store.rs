//! Ordered, in-memory record store.
//!
//! Every mutation takes `&self` and returns the next store, so a caller that
//! holds the previous value keeps an unchanged snapshot.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ItemId};

use crate::item::{InventoryItem, ItemDraft};

/// Serialized as a plain list of records; deserializing rejects lists that
/// repeat an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<InventoryItem>", into = "Vec<InventoryItem>")]
pub struct InventoryStore {
    items: Vec<InventoryItem>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in insertion order.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.has_id(&id))
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Append a record with a freshly generated id.
    pub fn create(&self, draft: ItemDraft) -> (Self, ItemId) {
        let mut id = ItemId::new();
        while self.contains(id) {
            id = ItemId::new();
        }
        let mut items = self.items.clone();
        items.push(InventoryItem::from_draft(id, draft));
        (Self { items }, id)
    }

    /// Append a record under a caller-chosen id.
    ///
    /// Fails with `Conflict` when the id is already present.
    pub fn create_with_id(&self, id: ItemId, draft: ItemDraft) -> DomainResult<Self> {
        if self.contains(id) {
            return Err(DomainError::conflict(format!("item {id} already exists")));
        }
        let mut items = self.items.clone();
        items.push(InventoryItem::from_draft(id, draft));
        Ok(Self { items })
    }

    /// Replace every field of the record `id` except the id itself.
    ///
    /// The record keeps its position. Fails with `NotFound` when no record has
    /// that id; `self` is untouched either way.
    pub fn update(&self, id: ItemId, draft: ItemDraft) -> DomainResult<Self> {
        let pos = self
            .items
            .iter()
            .position(|item| item.has_id(&id))
            .ok_or_else(|| DomainError::not_found(id))?;

        let mut items = self.items.clone();
        items[pos] = items[pos].replaced_with(draft);
        Ok(Self { items })
    }

    /// Remove the record `id` if present.
    ///
    /// Returns the next store and whether a record was removed. A missing id is
    /// a no-op.
    pub fn delete(&self, id: ItemId) -> (Self, bool) {
        let items: Vec<InventoryItem> = self
            .items
            .iter()
            .filter(|item| !item.has_id(&id))
            .cloned()
            .collect();
        let removed = items.len() != self.items.len();
        (Self { items }, removed)
    }
}

impl TryFrom<Vec<InventoryItem>> for InventoryStore {
    type Error = DomainError;

    fn try_from(items: Vec<InventoryItem>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(items.len());
        if let Some(dup) = items.iter().find(|item| !seen.insert(*item.id())) {
            return Err(DomainError::conflict(format!("item {} appears more than once", dup.id())));
        }
        Ok(Self { items })
    }
}

impl From<InventoryStore> for Vec<InventoryItem> {
    fn from(store: InventoryStore) -> Self {
        store.items
    }
}

impl FromIterator<(ItemId, ItemDraft)> for InventoryStore {
    /// Later duplicates of an id are dropped.
    fn from_iter<I: IntoIterator<Item = (ItemId, ItemDraft)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (id, draft) in iter {
            if let Ok(next) = store.create_with_id(id, draft) {
                store = next;
            }
        }
        store
    }
}
