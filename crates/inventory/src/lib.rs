//! Inventory domain module.
//!
//! This crate contains the record model, the create/update/delete store, the
//! filter+sort derivation and the edit-session state machine, implemented as
//! deterministic domain logic (no IO, no rendering, no storage).

pub mod form;
pub mod item;
pub mod session;
pub mod store;
pub mod view;

pub use form::{FormField, ItemForm};
pub use item::{InventoryItem, ItemDraft, LOW_STOCK_THRESHOLD};
pub use session::{EditSession, SessionTarget};
pub use store::InventoryStore;
pub use view::{CategoryFilter, SortDirection, categories, derive_view, filter_items, sort_by_quantity};
