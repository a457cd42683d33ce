//! View models for the table, form and category selector, plus a plain-text
//! rendering used by the shell.

use core::fmt::Write as _;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use stockroom_core::ItemId;
use stockroom_inventory::{EditSession, FormField, InventoryItem, SortDirection};

use crate::state::AppState;

pub const EMPTY_STORE_MESSAGE: &str = "No items in inventory. Add some items to get started!";
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// `$` plus two decimals, for display only.
pub fn format_price(price: Decimal) -> String {
    let mut rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("${rounded}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// 1-based position in the current view.
    pub row: usize,
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: String,
    pub low_stock: bool,
}

impl TableRow {
    fn from_item(row: usize, item: &InventoryItem) -> Self {
        Self {
            row,
            id: item.id_typed(),
            name: item.name().to_string(),
            category: item.category().to_string(),
            quantity: item.quantity(),
            price: format_price(item.price()),
            low_stock: item.is_low_stock(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub sort: SortDirection,
    /// Set when the store itself holds no records; the table is replaced by a
    /// message in that case.
    pub empty_store: bool,
}

impl TableView {
    pub(crate) fn build(state: &AppState) -> Self {
        let rows = state
            .view()
            .into_iter()
            .enumerate()
            .map(|(i, item)| TableRow::from_item(i + 1, item))
            .collect();
        Self {
            rows,
            sort: state.sort_direction(),
            empty_store: state.store().is_empty(),
        }
    }

    pub fn quantity_header(&self) -> String {
        format!("Quantity {}", self.sort.arrow())
    }

    pub fn render_text(&self) -> String {
        if self.empty_store {
            return EMPTY_STORE_MESSAGE.to_string();
        }

        let headers = [
            "#".to_string(),
            "Name".to_string(),
            "Category".to_string(),
            self.quantity_header(),
            "Price".to_string(),
        ];
        let cells: Vec<[String; 5]> = self
            .rows
            .iter()
            .map(|r| {
                let quantity = if r.low_stock {
                    format!("{} (low)", r.quantity)
                } else {
                    r.quantity.to_string()
                };
                [r.row.to_string(), r.name.clone(), r.category.clone(), quantity, r.price.clone()]
            })
            .collect();

        let mut widths = headers.each_ref().map(|h| h.chars().count());
        for line in &cells {
            for (w, cell) in widths.iter_mut().zip(line) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_line(&mut out, &headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for line in &cells {
            push_line(&mut out, line, &widths);
        }
        if self.rows.is_empty() {
            out.push_str("(no items match the current filter)\n");
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width.saturating_sub(cell.chars().count());
        let _ = write!(line, "{cell}{}  ", " ".repeat(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub editing: Option<ItemId>,
    pub fields: Vec<(FormField, String)>,
    pub submit_label: &'static str,
}

impl FormView {
    /// `None` while no form is shown.
    pub(crate) fn build(session: &EditSession) -> Option<Self> {
        let form = session.form()?;
        let editing = session.target();
        Some(Self {
            editing,
            fields: FormField::ALL
                .iter()
                .map(|field| (*field, form.get(*field).to_string()))
                .collect(),
            submit_label: if editing.is_some() { "Update Item" } else { "Add Item" },
        })
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (field, value) in &self.fields {
            let _ = writeln!(out, "{:<9} {value}", format!("{}:", field.label()));
        }
        let _ = writeln!(out, "[{}] [Cancel]", self.submit_label);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    /// Empty for "all categories".
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOptions {
    pub options: Vec<CategoryOption>,
}

impl CategoryOptions {
    pub(crate) fn build(state: &AppState) -> Self {
        let active = state.filter().category();
        let mut options = vec![CategoryOption {
            value: String::new(),
            label: ALL_CATEGORIES_LABEL.to_string(),
            selected: active.is_none(),
        }];
        options.extend(state.categories().into_iter().map(|category| CategoryOption {
            value: category.to_string(),
            label: category.to_string(),
            selected: active == Some(category),
        }));
        Self { options }
    }

    pub fn render_text(&self) -> String {
        self.options
            .iter()
            .map(|o| format!("{} {}\n", if o.selected { "*" } else { " " }, o.label))
            .collect()
    }
}
