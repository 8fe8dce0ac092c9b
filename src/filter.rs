// src/filter.rs
//
// Filter criteria + the predicate that maps (catalog, criteria) to the
// visible subset. Pure functions, no GTK types.

use crate::model::{Element, ElementCatalog};

/// The four independent filter criteria. An empty string means "no
/// constraint". Group and period are kept as strings because they come
/// straight from dropdown rows and compare against the stringified
/// element fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub group: String,
    pub period: String,
    pub category: String,
    pub search_query: String,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub group: Option<String>,
    pub period: Option<String>,
    pub category: Option<String>,
    pub search_query: Option<String>,
}

impl FilterPatch {
    pub fn search(query: &str) -> Self {
        Self {
            search_query: Some(query.to_string()),
            ..Self::default()
        }
    }
}

impl FilterOptions {
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(g) = patch.group {
            self.group = g;
        }
        if let Some(p) = patch.period {
            self.period = p;
        }
        if let Some(c) = patch.category {
            self.category = c;
        }
        if let Some(q) = patch.search_query {
            self.search_query = q;
        }
    }

    /// Clears the three dropdown criteria. The search text is owned by
    /// the header search box, not the panel, and survives a reset.
    pub fn reset(&mut self) {
        self.group.clear();
        self.period.clear();
        self.category.clear();
    }

    /// True iff any of the four criteria is non-empty. Callers use this
    /// to tell an empty match set apart from "no filter applied".
    pub fn is_filtering(&self) -> bool {
        !self.group.is_empty()
            || !self.period.is_empty()
            || !self.category.is_empty()
            || !self.search_query.is_empty()
    }
}

/// Accepts or rejects a single element.
///
/// The dropdown criteria reject in order: group, period, category. A
/// non-empty search query then becomes the sole acceptance condition
/// for elements that survived those checks; it does not resurrect ones
/// they already rejected.
pub fn matches(element: &Element, opts: &FilterOptions) -> bool {
    if !opts.group.is_empty() {
        let group_matches = element
            .group
            .map(|g| g.to_string() == opts.group)
            .unwrap_or(false);
        if !group_matches {
            return false;
        }
    }

    if !opts.period.is_empty() && element.period.to_string() != opts.period {
        return false;
    }

    if !opts.category.is_empty() && element.category.tag() != opts.category {
        return false;
    }

    if !opts.search_query.is_empty() {
        let query = opts.search_query.to_lowercase();
        return element.name.to_lowercase().contains(&query)
            || element.symbol.to_lowercase().contains(&query)
            || element.atomic_number.to_string().contains(&query);
    }

    true
}

/// Maps the catalog to the currently visible subset, preserving catalog
/// order. Deterministic and side-effect free; an empty result is valid.
pub fn filter_elements<'a>(
    catalog: &'a ElementCatalog,
    opts: &FilterOptions,
) -> Vec<&'a Element> {
    catalog
        .elements()
        .iter()
        .filter(|e| matches(e, opts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementCatalog;

    fn catalog() -> ElementCatalog {
        ElementCatalog::load_embedded().unwrap()
    }

    fn opts(group: &str, period: &str, category: &str, query: &str) -> FilterOptions {
        FilterOptions {
            group: group.to_string(),
            period: period.to_string(),
            category: category.to_string(),
            search_query: query.to_string(),
        }
    }

    #[test]
    fn empty_criteria_return_full_catalog_in_order() {
        let cat = catalog();
        let all = filter_elements(&cat, &FilterOptions::default());
        assert_eq!(all.len(), cat.len());
        let numbers: Vec<u32> = all.iter().map(|e| e.atomic_number).collect();
        let expected: Vec<u32> = cat.elements().iter().map(|e| e.atomic_number).collect();
        assert_eq!(numbers, expected, "order must be preserved");
    }

    #[test]
    fn category_filter_is_exact_and_complete() {
        let cat = catalog();
        let result = filter_elements(&cat, &opts("", "", "noble gas", ""));
        assert!(!result.is_empty());
        for e in &result {
            assert_eq!(e.category.tag(), "noble gas", "{} leaked through", e.name);
        }
        let expected = cat
            .elements()
            .iter()
            .filter(|e| e.category.tag() == "noble gas")
            .count();
        assert_eq!(result.len(), expected, "every noble gas must be present");
    }

    #[test]
    fn group_one_returns_hydrogen_and_the_alkali_column() {
        let cat = catalog();
        let result = filter_elements(&cat, &opts("1", "", "", ""));
        let symbols: Vec<&str> = result.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, ["H", "Li", "Na", "K", "Rb", "Cs", "Fr"]);
    }

    #[test]
    fn group_filter_rejects_elements_without_a_group() {
        let cat = catalog();
        let result = filter_elements(&cat, &opts("3", "", "", ""));
        // Sc, Y, La, Ac carry group 3; the detached-row elements have no
        // group at all and must not appear.
        let symbols: Vec<&str> = result.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, ["Sc", "Y", "La", "Ac"]);
    }

    #[test]
    fn search_matches_name_symbol_and_atomic_number() {
        let cat = catalog();

        let by_number = filter_elements(&cat, &opts("", "", "", "42"));
        assert!(by_number.iter().any(|e| e.atomic_number == 42));
        for e in &by_number {
            assert!(e.atomic_number.to_string().contains("42"), "{}", e.name);
        }

        let by_symbol = filter_elements(&cat, &opts("", "", "", "fe"));
        assert!(by_symbol.iter().any(|e| e.symbol == "Fe"));

        let by_name = filter_elements(&cat, &opts("", "", "", "OXYG"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].symbol, "O");
    }

    #[test]
    fn search_overrides_other_criteria_for_surviving_elements() {
        // With both category and search set, an element that passes the
        // category check is accepted purely on the search outcome. Neon
        // is a noble gas but does not contain "xen", so it is rejected
        // even though the category matched.
        let cat = catalog();
        let result = filter_elements(&cat, &opts("", "", "noble gas", "xen"));
        let symbols: Vec<&str> = result.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, ["Xe"]);
    }

    #[test]
    fn search_applies_after_group_reject() {
        // The group check still rejects first: molybdenum (group 6)
        // never reaches the search step when group is constrained to 1,
        // even though its atomic number contains "42".
        let cat = catalog();
        let result = filter_elements(&cat, &opts("1", "", "", "42"));
        assert!(result.is_empty());
    }

    #[test]
    fn no_match_is_a_valid_empty_set() {
        let cat = catalog();
        let result = filter_elements(&cat, &opts("", "", "", "zzzz"));
        assert!(result.is_empty());
        let o = opts("", "", "", "zzzz");
        assert!(o.is_filtering(), "an active filter with zero matches");
    }

    #[test]
    fn merge_is_partial() {
        let mut o = opts("1", "2", "nonmetal", "h");
        o.merge(FilterPatch {
            period: Some(String::new()),
            ..FilterPatch::default()
        });
        assert_eq!(o.group, "1");
        assert_eq!(o.period, "");
        assert_eq!(o.category, "nonmetal");
        assert_eq!(o.search_query, "h");
    }

    #[test]
    fn reset_clears_dropdowns_and_preserves_search_query() {
        let mut o = opts("1", "2", "nonmetal", "iron");
        o.reset();
        assert_eq!(o.group, "");
        assert_eq!(o.period, "");
        assert_eq!(o.category, "");
        assert_eq!(o.search_query, "iron");
        assert!(o.is_filtering(), "search text keeps the filter active");
    }

    #[test]
    fn reset_is_idempotent() {
        let mut once = opts("17", "4", "halogen", "br");
        once.reset();
        let mut twice = once.clone();
        twice.reset();
        assert_eq!(once, twice);
    }
}
