// src/state.rs

use crate::config::Config;
use crate::filter::FilterOptions;
use crate::model::ElementCatalog;
use std::rc::Rc;

/// The element currently opened in the detail view: at most one, by
/// atomic number, or none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<u32>,
}

impl Selection {
    pub fn select(&mut self, atomic_number: u32) {
        self.current = Some(atomic_number);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<u32> {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

/// View state for the decorative atom model tab.
#[derive(Debug, Clone, Copy)]
pub struct AtomView {
    pub rot_x: f64,
    pub rot_y: f64,
    pub zoom: f64,
    /// Animation clock, advanced by the tick callback.
    pub phase: f64,
}

impl Default for AtomView {
    fn default() -> Self {
        Self {
            rot_x: 22.0,
            rot_y: 0.0,
            zoom: 1.0,
            phase: 0.0,
        }
    }
}

pub struct AppState {
    pub catalog: Rc<ElementCatalog>,
    pub filters: FilterOptions,
    pub selection: Selection,
    pub atom_view: AtomView,
    pub config: Config,
}

impl AppState {
    pub fn new(catalog: Rc<ElementCatalog>) -> Self {
        Self {
            catalog,
            filters: FilterOptions::default(),
            selection: Selection::default(),
            atom_view: AtomView::default(),
            config: Config::default(),
        }
    }

    pub fn load_config(&mut self) {
        let (config, message) = Config::load();
        self.config = config;
        log::info!("{}", message);
    }

    pub fn save_config(&self) {
        log::info!("{}", self.config.save());
    }

    /// Record currently opened in the detail view, if any.
    pub fn selected_element(&self) -> Option<&crate::model::Element> {
        self.selection
            .current()
            .and_then(|z| self.catalog.by_number(z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_round_trips_to_initial_state() {
        let initial = Selection::default();
        let mut sel = initial;
        sel.select(79);
        assert_eq!(sel.current(), Some(79));
        assert!(sel.is_open());
        sel.clear();
        assert_eq!(sel, initial, "clear must restore the initial state");
    }

    #[test]
    fn reselect_replaces_previous_selection() {
        let mut sel = Selection::default();
        sel.select(1);
        sel.select(2);
        assert_eq!(sel.current(), Some(2));
    }

    #[test]
    fn selected_element_resolves_through_catalog() {
        let catalog = Rc::new(ElementCatalog::load_embedded().unwrap());
        let mut state = AppState::new(catalog);
        assert!(state.selected_element().is_none());
        state.selection.select(47);
        assert_eq!(state.selected_element().unwrap().symbol, "Ag");
    }
}
