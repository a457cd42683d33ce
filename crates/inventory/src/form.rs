//! Draft form: raw text fields, parsed and validated on submit.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

use crate::item::{InventoryItem, ItemDraft};

/// Editable fields of the form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Category,
    Quantity,
    Price,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Category,
        FormField::Quantity,
        FormField::Price,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Category => "Category",
            FormField::Quantity => "Quantity",
            FormField::Price => "Price",
        }
    }

    /// HTML `type` of the field's input.
    pub fn input_type(self) -> &'static str {
        match self {
            FormField::Name | FormField::Category => "text",
            FormField::Quantity | FormField::Price => "number",
        }
    }

    /// Lower bound hint for numeric inputs.
    pub fn min(self) -> Option<&'static str> {
        match self {
            FormField::Name | FormField::Category => None,
            FormField::Quantity | FormField::Price => Some("0"),
        }
    }

    /// Increment hint; only price takes cents.
    pub fn step(self) -> Option<&'static str> {
        match self {
            FormField::Price => Some("0.01"),
            _ => None,
        }
    }
}

impl FromStr for FormField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(FormField::Name),
            "category" => Ok(FormField::Category),
            "quantity" | "qty" => Ok(FormField::Quantity),
            "price" => Ok(FormField::Price),
            other => Err(DomainError::validation(format!("unknown field: {other}"))),
        }
    }
}

/// Field values as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemForm {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            quantity: "0".to_string(),
            price: "0".to_string(),
        }
    }
}

impl ItemForm {
    /// Preload a form with a record's current values.
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            name: item.name().to_string(),
            category: item.category().to_string(),
            quantity: item.quantity().to_string(),
            price: item.price().to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Quantity => &self.quantity,
            FormField::Price => &self.price,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Category => self.category = value,
            FormField::Quantity => self.quantity = value,
            FormField::Price => self.price = value,
        }
    }

    /// Parse and validate the fields into a draft.
    ///
    /// Unparsable numbers become 0. Empty name/category and negative numbers
    /// are rejected.
    pub fn submit(&self) -> DomainResult<ItemDraft> {
        let quantity = parse_quantity(&self.quantity)?;
        let price = parse_price(&self.price)?;
        let draft = ItemDraft::new(self.name.clone(), self.category.clone(), quantity, price);
        draft.validate()?;
        Ok(draft)
    }
}

/// Longest leading `[+-]?digits` prefix after whitespace. With
/// `allow_fraction`, a `.digits` part and an `[eE][+-]?digits` exponent are
/// taken as well.
fn numeric_prefix(raw: &str, allow_fraction: bool) -> &str {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if allow_fraction && bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            end = frac_end;
            has_digits = true;
        }
    }

    if !has_digits {
        return "";
    }

    if allow_fraction && matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let mut exp_end = exp_start;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    &s[..end]
}

fn parse_quantity(raw: &str) -> DomainResult<u32> {
    let prefix = numeric_prefix(raw, false);
    if prefix.is_empty() {
        return Ok(0);
    }
    let value: i128 = prefix
        .parse()
        .map_err(|_| DomainError::validation("quantity is too large"))?;
    if value < 0 {
        return Err(DomainError::validation("quantity cannot be negative"));
    }
    u32::try_from(value).map_err(|_| DomainError::validation("quantity is too large"))
}

fn parse_price(raw: &str) -> DomainResult<Decimal> {
    let prefix = numeric_prefix(raw, true);
    if prefix.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let (sign, digits) = match prefix.as_bytes()[0] {
        b'-' => ("-", &prefix[1..]),
        b'+' => ("", &prefix[1..]),
        _ => ("", prefix),
    };
    let normalized = if digits.starts_with('.') {
        format!("{sign}0{digits}")
    } else {
        format!("{sign}{digits}")
    };
    let parsed = if normalized.contains(|c| c == 'e' || c == 'E') {
        Decimal::from_scientific(&normalized.replace("e+", "e").replace("E+", "E"))
    } else {
        Decimal::from_str(&normalized)
    };
    let price = parsed.map_err(|_| DomainError::validation("price is out of range"))?;
    if price < Decimal::ZERO {
        return Err(DomainError::validation("price cannot be negative"));
    }
    Ok(price)
}
