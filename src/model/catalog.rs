// src/model/catalog.rs
//
// The element catalog is compiled into the binary. It is parsed and
// validated exactly once at startup; a catalog that fails validation
// aborts the launch instead of rendering inconsistent tiles.

use super::element::Element;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

const CATALOG_JSON: &str = include_str!("../../assets/elements.json");

#[derive(Deserialize)]
struct CatalogFile {
    version: u32,
    elements: Vec<Element>,
}

/// Read-only, ordered collection of element records, addressable by
/// atomic number.
pub struct ElementCatalog {
    elements: Vec<Element>,
    by_number: HashMap<u32, usize>,
    version: u32,
}

impl ElementCatalog {
    /// Parses and validates the bundled catalog resource.
    pub fn load_embedded() -> Result<Self, String> {
        let file: CatalogFile = serde_json::from_str(CATALOG_JSON)
            .map_err(|e| format!("Element catalog is not valid JSON: {}", e))?;
        Self::from_records(file.version, file.elements)
    }

    fn from_records(version: u32, elements: Vec<Element>) -> Result<Self, String> {
        if elements.is_empty() {
            return Err("Element catalog is empty".to_string());
        }

        let mut by_number = HashMap::with_capacity(elements.len());
        let mut symbols = HashSet::new();
        let mut names = HashSet::new();

        for (idx, e) in elements.iter().enumerate() {
            if e.atomic_number < 1 {
                return Err(format!("'{}' has atomic number 0", e.name));
            }
            if by_number.insert(e.atomic_number, idx).is_some() {
                return Err(format!(
                    "Duplicate atomic number {} ('{}')",
                    e.atomic_number, e.name
                ));
            }
            if !symbols.insert(e.symbol.clone()) {
                return Err(format!("Duplicate symbol '{}'", e.symbol));
            }
            if !names.insert(e.name.clone()) {
                return Err(format!("Duplicate name '{}'", e.name));
            }
            if e.period < 1 || e.period > 7 {
                return Err(format!(
                    "'{}': period {} outside 1..=7",
                    e.name, e.period
                ));
            }
            if let Some(g) = e.group {
                if g < 1 || g > 18 {
                    return Err(format!("'{}': group {} outside 1..=18", e.name, g));
                }
            }
            if !(e.atomic_mass > 0.0) {
                return Err(format!("'{}': non-positive atomic mass", e.name));
            }
        }

        Ok(Self {
            elements,
            by_number,
            version,
        })
    }

    /// All records in catalog order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn by_number(&self, atomic_number: u32) -> Option<&Element> {
        self.by_number
            .get(&atomic_number)
            .map(|&idx| &self.elements[idx])
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element::Category;

    fn catalog() -> ElementCatalog {
        ElementCatalog::load_embedded().expect("bundled catalog must validate")
    }

    #[test]
    fn embedded_catalog_loads_all_118_elements() {
        let cat = catalog();
        assert_eq!(cat.len(), 118);
        assert_eq!(cat.version(), 1);
    }

    #[test]
    fn atomic_numbers_are_unique_and_positive() {
        let cat = catalog();
        let mut seen = HashSet::new();
        for e in cat.elements() {
            assert!(e.atomic_number >= 1);
            assert!(
                seen.insert(e.atomic_number),
                "atomic number {} appears twice",
                e.atomic_number
            );
        }
    }

    #[test]
    fn lookup_by_number_matches_record() {
        let cat = catalog();
        let fe = cat.by_number(26).expect("iron exists");
        assert_eq!(fe.symbol, "Fe");
        assert!(cat.by_number(0).is_none());
        assert!(cat.by_number(119).is_none());
    }

    #[test]
    fn fblock_rows_and_their_markers_are_consistent() {
        // Ce..Lu and Th..Lr carry the detached-row categories; La and Ac
        // keep group 3 so they render inside the main grid.
        let cat = catalog();
        for e in cat.elements() {
            match e.category {
                Category::Lanthanide => {
                    assert!((58..=71).contains(&e.atomic_number), "{}", e.name)
                }
                Category::Actinide => {
                    assert!((90..=103).contains(&e.atomic_number), "{}", e.name)
                }
                _ => {}
            }
        }
        assert_eq!(cat.by_number(57).unwrap().group, Some(3));
        assert_eq!(cat.by_number(89).unwrap().group, Some(3));
    }

    #[test]
    fn duplicate_atomic_number_is_rejected() {
        let cat = catalog();
        let mut records: Vec<Element> = cat.elements()[..2].to_vec();
        records[1].atomic_number = records[0].atomic_number;
        records[1].symbol = "Xx".to_string();
        records[1].name = "Duplicatium".to_string();
        let err = ElementCatalog::from_records(1, records).unwrap_err();
        assert!(err.contains("Duplicate atomic number"), "got: {}", err);
    }

    #[test]
    fn out_of_range_period_is_rejected() {
        let cat = catalog();
        let mut records: Vec<Element> = cat.elements()[..1].to_vec();
        records[0].period = 8;
        assert!(ElementCatalog::from_records(1, records).is_err());
    }

    #[test]
    fn out_of_range_group_is_rejected() {
        let cat = catalog();
        let mut records: Vec<Element> = cat.elements()[..1].to_vec();
        records[0].group = Some(19);
        assert!(ElementCatalog::from_records(1, records).is_err());
    }

    #[test]
    fn missing_measurements_stay_absent() {
        // Oganesson has no measured bulk properties; they must load as
        // None, not as zero.
        let cat = catalog();
        let og = cat.by_number(118).unwrap();
        assert!(og.density.is_none());
        assert!(og.melting_point.is_none());
        assert!(og.boiling_point.is_none());
    }
}
