//! Intents reported upward by the view collaborators, and their outcomes.

use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;
use stockroom_inventory::{CategoryFilter, FormField, SortDirection};

/// Reported by the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableIntent {
    Edit(ItemId),
    Delete(ItemId),
    ToggleSort,
}

/// Reported by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormEvent {
    SetField { field: FormField, value: String },
    Submit,
    Cancel,
}

/// Any user action the orchestrator reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// "Add new item" button.
    AddNew,
    Table(TableIntent),
    Form(FormEvent),
    /// Category selector change.
    SelectCategory(CategoryFilter),
}

impl From<TableIntent> for Intent {
    fn from(value: TableIntent) -> Self {
        Intent::Table(value)
    }
}

impl From<FormEvent> for Intent {
    fn from(value: FormEvent) -> Self {
        Intent::Form(value)
    }
}

/// What an intent changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Created(ItemId),
    Updated(ItemId),
    Deleted(ItemId),
    /// Delete of an id that was not in the store.
    NothingDeleted(ItemId),
    FormOpened,
    FormEdited,
    FormClosed,
    Sorted(SortDirection),
    Filtered(CategoryFilter),
}

impl Outcome {
    /// True when the record store changed.
    pub fn mutated_store(&self) -> bool {
        matches!(self, Outcome::Created(_) | Outcome::Updated(_) | Outcome::Deleted(_))
    }
}
