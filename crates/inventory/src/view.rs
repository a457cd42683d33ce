//! Derived view: category filter + quantity sort.
//!
//! All functions here are pure: they borrow the store's records and return a
//! fresh ordering without touching the source slice.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::item::InventoryItem;

/// Quantity sort direction.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Column header indicator.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl core::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// Active category filter.
///
/// Matching is exact and case-sensitive. An empty string means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub struct CategoryFilter(Option<String>);

impl CategoryFilter {
    pub fn all() -> Self {
        Self(None)
    }

    pub fn only(category: impl Into<String>) -> Self {
        let category = category.into();
        if category.is_empty() {
            Self(None)
        } else {
            Self(Some(category))
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_all(&self) -> bool {
        self.0.is_none()
    }

    pub fn matches(&self, item: &InventoryItem) -> bool {
        match &self.0 {
            None => true,
            Some(category) => item.category() == category,
        }
    }
}

impl From<Option<String>> for CategoryFilter {
    fn from(value: Option<String>) -> Self {
        value.map(Self::only).unwrap_or_default()
    }
}

impl From<CategoryFilter> for Option<String> {
    fn from(value: CategoryFilter) -> Self {
        value.0
    }
}

pub fn filter_items<'a>(items: &'a [InventoryItem], filter: &CategoryFilter) -> Vec<&'a InventoryItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Stable sort by quantity; equal quantities keep their relative order in
/// both directions.
pub fn sort_by_quantity(items: &mut [&InventoryItem], direction: SortDirection) {
    match direction {
        SortDirection::Asc => items.sort_by_key(|item| item.quantity()),
        SortDirection::Desc => items.sort_by_key(|item| core::cmp::Reverse(item.quantity())),
    }
}

/// Filter then sort, producing the sequence the table displays.
pub fn derive_view<'a>(
    items: &'a [InventoryItem],
    filter: &CategoryFilter,
    direction: SortDirection,
) -> Vec<&'a InventoryItem> {
    let mut view = filter_items(items, filter);
    sort_by_quantity(&mut view, direction);
    view
}

/// Distinct categories in order of first appearance.
pub fn categories(items: &[InventoryItem]) -> Vec<&str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(InventoryItem::category)
        .filter(|category| seen.insert(*category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemDraft;
    use crate::store::InventoryStore;
    use core::str::FromStr;
    use rust_decimal::Decimal;
    use stockroom_core::ItemId;

    fn store_of(rows: &[(&str, &str, u32)]) -> InventoryStore {
        rows.iter()
            .map(|(name, category, quantity)| {
                (ItemId::new(), ItemDraft::new(*name, *category, *quantity, Decimal::ONE))
            })
            .collect()
    }

    fn names(view: &[&InventoryItem]) -> Vec<String> {
        view.iter().map(|i| i.name().to_string()).collect()
    }

    #[test]
    fn widget_and_bolt_sort_descending() {
        let mut store = InventoryStore::new();
        for (name, qty, price) in [("Widget", 5, "9.99"), ("Bolt", 50, "0.10")] {
            let draft = ItemDraft::new(name, "Tools", qty, Decimal::from_str(price).unwrap());
            store = store.create(draft).0;
        }

        let view = derive_view(store.items(), &CategoryFilter::all(), SortDirection::Desc);
        assert_eq!(names(&view), vec!["Bolt", "Widget"]);
        assert!(!view[0].is_low_stock());
        assert!(view[1].is_low_stock());
    }

    #[test]
    fn filter_is_exact_and_case_sensitive() {
        let store = store_of(&[("a", "Tools", 1), ("b", "tools", 2), ("c", "Tools ", 3)]);
        let view = filter_items(store.items(), &CategoryFilter::only("Tools"));
        assert_eq!(names(&view), vec!["a"]);
    }

    #[test]
    fn empty_filter_string_means_all() {
        assert!(CategoryFilter::only("").is_all());
        assert_eq!(CategoryFilter::from(Some(String::new())), CategoryFilter::all());
        assert_eq!(CategoryFilter::from(None), CategoryFilter::all());
    }

    #[test]
    fn derivation_does_not_reorder_source() {
        let store = store_of(&[("a", "X", 3), ("b", "X", 1), ("c", "X", 2)]);
        let before = store.clone();
        let _ = derive_view(store.items(), &CategoryFilter::all(), SortDirection::Asc);
        assert_eq!(store, before);
    }

    #[test]
    fn ties_keep_insertion_order_both_ways() {
        let store = store_of(&[("a", "X", 5), ("b", "X", 1), ("c", "X", 5), ("d", "X", 1)]);
        let asc = derive_view(store.items(), &CategoryFilter::all(), SortDirection::Asc);
        let desc = derive_view(store.items(), &CategoryFilter::all(), SortDirection::Desc);
        assert_eq!(names(&asc), vec!["b", "d", "a", "c"]);
        assert_eq!(names(&desc), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn categories_in_first_appearance_order() {
        let store = store_of(&[("x", "A", 1), ("y", "B", 1), ("z", "A", 1)]);
        assert_eq!(categories(store.items()), vec!["A", "B"]);
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn sort_direction_helpers() {
        assert_eq!(SortDirection::default(), SortDirection::Desc);
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
        assert_eq!(SortDirection::Asc.arrow(), "↑");
        assert_eq!(SortDirection::Desc.arrow(), "↓");
        assert_eq!("ASC".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert!("up".parse::<SortDirection>().is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_rows() -> impl Strategy<Value = Vec<(String, u32)>> {
            prop::collection::vec(("[ABC]", 0u32..20), 0..30)
        }

        fn build(rows: &[(String, u32)]) -> InventoryStore {
            rows.iter()
                .enumerate()
                .map(|(i, (category, quantity))| {
                    (
                        ItemId::new(),
                        ItemDraft::new(format!("item-{i}"), category.clone(), *quantity, Decimal::ZERO),
                    )
                })
                .collect()
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: the empty filter is the identity.
            #[test]
            fn empty_filter_is_identity(rows in arb_rows()) {
                let store = build(&rows);
                let view = filter_items(store.items(), &CategoryFilter::only(""));
                let all: Vec<&InventoryItem> = store.items().iter().collect();
                prop_assert_eq!(view, all);
            }

            /// Property: filter keeps exactly the matching records, in order.
            #[test]
            fn filter_is_sound_and_complete(rows in arb_rows(), category in "[ABCD]") {
                let store = build(&rows);
                let view = filter_items(store.items(), &CategoryFilter::only(category.clone()));
                let expected: Vec<&InventoryItem> = store
                    .items()
                    .iter()
                    .filter(|item| item.category() == category)
                    .collect();
                prop_assert!(view.iter().all(|item| item.category() == category));
                prop_assert_eq!(view, expected);
            }

            /// Property: with distinct quantities, desc is asc reversed.
            #[test]
            fn desc_is_reversed_asc_for_distinct_keys(
                quantities in prop::collection::hash_set(0u32..10_000, 0..30)
            ) {
                let rows: Vec<(String, u32)> =
                    quantities.into_iter().map(|q| ("A".to_string(), q)).collect();
                let store = build(&rows);
                let asc = derive_view(store.items(), &CategoryFilter::all(), SortDirection::Asc);
                let mut desc = derive_view(store.items(), &CategoryFilter::all(), SortDirection::Desc);
                desc.reverse();
                prop_assert_eq!(asc, desc);
            }

            /// Property: sorting is stable in both directions.
            #[test]
            fn sort_is_stable(rows in arb_rows(), asc in any::<bool>()) {
                let store = build(&rows);
                let direction = if asc { SortDirection::Asc } else { SortDirection::Desc };
                let view = derive_view(store.items(), &CategoryFilter::all(), direction);
                let position = |item: &InventoryItem| {
                    store.items().iter().position(|i| i.id_typed() == item.id_typed()).unwrap()
                };
                for pair in view.windows(2) {
                    if pair[0].quantity() == pair[1].quantity() {
                        prop_assert!(position(pair[0]) < position(pair[1]));
                    }
                }
            }

            /// Property: derivation is idempotent.
            #[test]
            fn derivation_is_idempotent(rows in arb_rows(), category in "[AB]?") {
                let store = build(&rows);
                let filter = CategoryFilter::only(category);
                let first = derive_view(store.items(), &filter, SortDirection::Desc);
                let second = derive_view(store.items(), &filter, SortDirection::Desc);
                prop_assert_eq!(first, second);
            }

            /// Property: categories are distinct and cover every record.
            #[test]
            fn categories_are_distinct_and_complete(rows in arb_rows()) {
                let store = build(&rows);
                let cats = categories(store.items());
                let unique: HashSet<&str> = cats.iter().copied().collect();
                prop_assert_eq!(unique.len(), cats.len());
                prop_assert!(store.items().iter().all(|i| unique.contains(i.category())));
            }
        }
    }
}
