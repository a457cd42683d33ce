//! Orchestrator: the single owner of inventory UI state.

use tracing::{debug, info, warn};

use stockroom_core::{DomainError, DomainResult, ItemId};
use stockroom_inventory::{
    CategoryFilter, EditSession, FormField, InventoryItem, InventoryStore, SessionTarget,
    SortDirection, categories, derive_view,
};

use crate::config::AppConfig;
use crate::intent::{FormEvent, Intent, Outcome, TableIntent};
use crate::render::{CategoryOptions, FormView, TableView};

/// Application state shared with the view collaborators by reference.
///
/// Only this type mutates the record store. Views read the derived sequences
/// it exposes and report intents back through [`AppState::dispatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    store: InventoryStore,
    filter: CategoryFilter,
    sort: SortDirection,
    session: EditSession,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            filter: config.filter.clone(),
            sort: config.sort,
            ..Self::default()
        }
    }

    /// Start from an existing store, e.g. a snapshot kept by the caller.
    pub fn with_store(mut self, store: InventoryStore) -> Self {
        self.store = store;
        self
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Filtered and sorted records, recomputed on every call.
    pub fn view(&self) -> Vec<&InventoryItem> {
        derive_view(self.store.items(), &self.filter, self.sort)
    }

    /// Distinct categories across the whole store.
    pub fn categories(&self) -> Vec<&str> {
        categories(self.store.items())
    }

    /// Id of the record shown at 1-based `row` of the current view.
    pub fn row_id(&self, row: usize) -> Option<ItemId> {
        row.checked_sub(1)
            .and_then(|index| self.view().get(index).map(|item| item.id_typed()))
    }

    pub fn table_view(&self) -> TableView {
        TableView::build(self)
    }

    pub fn form_view(&self) -> Option<FormView> {
        FormView::build(&self.session)
    }

    pub fn category_options(&self) -> CategoryOptions {
        CategoryOptions::build(self)
    }

    /// Route one intent to the matching operation.
    pub fn dispatch(&mut self, intent: Intent) -> DomainResult<Outcome> {
        match intent {
            Intent::AddNew => Ok(self.open_create_form()),
            Intent::SelectCategory(filter) => Ok(self.set_filter(filter)),
            Intent::Table(TableIntent::Edit(id)) => self.edit(id),
            Intent::Table(TableIntent::Delete(id)) => Ok(self.delete(id)),
            Intent::Table(TableIntent::ToggleSort) => Ok(self.toggle_sort()),
            Intent::Form(FormEvent::SetField { field, value }) => self.set_field(field, value),
            Intent::Form(FormEvent::Submit) => self.submit(),
            Intent::Form(FormEvent::Cancel) => Ok(self.cancel()),
        }
    }

    pub fn open_create_form(&mut self) -> Outcome {
        self.session.start_create();
        debug!("opened form for a new item");
        Outcome::FormOpened
    }

    /// Open the form on an existing record, discarding any current draft.
    pub fn edit(&mut self, id: ItemId) -> DomainResult<Outcome> {
        let item = self.store.get(id).ok_or_else(|| DomainError::not_found(id))?;
        self.session.start_edit(item);
        debug!(item_id = %id, "opened form for editing");
        Ok(Outcome::FormOpened)
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> DomainResult<Outcome> {
        self.session.set_field(field, value)?;
        Ok(Outcome::FormEdited)
    }

    /// Commit the open form.
    ///
    /// A validation failure leaves the form open. If the edited record no
    /// longer exists the store is left as is, the form closes, and `NotFound`
    /// is returned.
    pub fn submit(&mut self) -> DomainResult<Outcome> {
        let (target, draft) = self.session.submit().inspect_err(|err| {
            debug!(error = %err, "submit blocked");
        })?;

        match target {
            SessionTarget::Create => {
                let (store, id) = self.store.create(draft);
                self.store = store;
                info!(item_id = %id, total = self.store.len(), "item created");
                Ok(Outcome::Created(id))
            }
            SessionTarget::Update(id) => match self.store.update(id, draft) {
                Ok(store) => {
                    self.store = store;
                    info!(item_id = %id, "item updated");
                    Ok(Outcome::Updated(id))
                }
                Err(err) => {
                    warn!(item_id = %id, error = %err, "update target vanished; edit discarded");
                    Err(err)
                }
            },
        }
    }

    pub fn cancel(&mut self) -> Outcome {
        self.session.cancel();
        debug!("form cancelled");
        Outcome::FormClosed
    }

    /// Remove a record immediately. The edit session is left alone.
    pub fn delete(&mut self, id: ItemId) -> Outcome {
        let (store, removed) = self.store.delete(id);
        self.store = store;
        if removed {
            info!(item_id = %id, total = self.store.len(), "item deleted");
            Outcome::Deleted(id)
        } else {
            debug!(item_id = %id, "delete of unknown item ignored");
            Outcome::NothingDeleted(id)
        }
    }

    pub fn toggle_sort(&mut self) -> Outcome {
        self.sort = self.sort.toggled();
        debug!(direction = %self.sort, "sort toggled");
        Outcome::Sorted(self.sort)
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) -> Outcome {
        debug!(category = filter.category().unwrap_or(""), "filter changed");
        self.filter = filter.clone();
        Outcome::Filtered(filter)
    }
}
