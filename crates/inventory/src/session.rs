//! Edit-session state machine.
//!
//! ```text
//! Idle ──add──▶ Creating ──submit/cancel──▶ Idle
//!   │              │
//!   └────edit──────┴──edit──▶ Editing(id) ──submit/cancel──▶ Idle
//! ```
//!
//! The session only tracks the form and its target. Committing a submitted
//! draft to the store is the caller's job.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ItemId};

use crate::form::{FormField, ItemForm};
use crate::item::{InventoryItem, ItemDraft};

/// What a successful submit should do with its draft.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionTarget {
    Create,
    Update(ItemId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditSession {
    #[default]
    Idle,
    Creating {
        form: ItemForm,
    },
    Editing {
        target: ItemId,
        form: ItemForm,
    },
}

impl EditSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditSession::Idle)
    }

    pub fn form(&self) -> Option<&ItemForm> {
        match self {
            EditSession::Idle => None,
            EditSession::Creating { form } | EditSession::Editing { form, .. } => Some(form),
        }
    }

    /// Record being edited, if any.
    pub fn target(&self) -> Option<ItemId> {
        match self {
            EditSession::Editing { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// Open an empty form for a new record.
    pub fn start_create(&mut self) {
        *self = EditSession::Creating {
            form: ItemForm::default(),
        };
    }

    /// Target `item` and preload its values, discarding any prior draft.
    pub fn start_edit(&mut self, item: &InventoryItem) {
        *self = EditSession::Editing {
            target: item.id_typed(),
            form: ItemForm::from_item(item),
        };
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> DomainResult<()> {
        match self {
            EditSession::Idle => Err(DomainError::invariant("no form is open")),
            EditSession::Creating { form } | EditSession::Editing { form, .. } => {
                form.set(field, value);
                Ok(())
            }
        }
    }

    /// Validate the open form.
    ///
    /// On success the session returns to `Idle` and the draft is handed back
    /// with its target. On a validation failure the session and draft are kept.
    pub fn submit(&mut self) -> DomainResult<(SessionTarget, ItemDraft)> {
        let (target, draft) = match self {
            EditSession::Idle => return Err(DomainError::invariant("no form is open")),
            EditSession::Creating { form } => (SessionTarget::Create, form.submit()?),
            EditSession::Editing { target, form } => (SessionTarget::Update(*target), form.submit()?),
        };
        *self = EditSession::Idle;
        Ok((target, draft))
    }

    /// Drop the draft and target without touching the store.
    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }
}
