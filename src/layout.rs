// src/layout.rs
//
// Maps an element to its cell in the 18-column table. Pure function;
// the painter and hit-testing both derive screen geometry from it.

use crate::model::{Category, Element};

/// Rows 1..=7 are the periods. Row 8 stays empty as a visual separator;
/// the detached f-block rows sit below it.
pub const LANTHANIDE_ROW: u8 = 9;
pub const ACTINIDE_ROW: u8 = 10;

/// Columns 1-2 of the detached rows are reserved for their labels.
pub const FBLOCK_START_COL: u8 = 3;

pub const GRID_COLS: u8 = 18;
pub const GRID_ROWS: u8 = ACTINIDE_ROW;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    pub row: u8,
    pub col: u8,
}

/// Resolves the grid cell for an element, or `None` for records the
/// grid cannot place (rendered in flow layout by the caller).
pub fn grid_position(element: &Element) -> Option<GridPos> {
    if element.category == Category::Lanthanide {
        return Some(GridPos {
            row: LANTHANIDE_ROW,
            col: (element.atomic_number - 57) as u8 + FBLOCK_START_COL,
        });
    }

    if element.category == Category::Actinide {
        return Some(GridPos {
            row: ACTINIDE_ROW,
            col: (element.atomic_number - 89) as u8 + FBLOCK_START_COL,
        });
    }

    // La and Ac mark the f-block break inside the main grid; they carry
    // a group like any other d-block element and fall through here.
    if element.atomic_number == 57 || element.atomic_number == 89 {
        return element.group.map(|g| GridPos {
            row: element.period,
            col: g,
        });
    }

    element.group.map(|g| GridPos {
        row: element.period,
        col: g,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementCatalog;

    fn catalog() -> ElementCatalog {
        ElementCatalog::load_embedded().unwrap()
    }

    #[test]
    fn detached_rows_sit_below_all_periods() {
        assert!(LANTHANIDE_ROW > 7);
        assert!(ACTINIDE_ROW > LANTHANIDE_ROW);
    }

    #[test]
    fn cerium_opens_the_lanthanide_row_at_column_four() {
        let cat = catalog();
        let ce = cat.by_number(58).unwrap();
        assert_eq!(
            grid_position(ce),
            Some(GridPos {
                row: LANTHANIDE_ROW,
                col: 4
            })
        );
    }

    #[test]
    fn lanthanum_stays_in_the_main_grid() {
        let cat = catalog();
        let la = cat.by_number(57).unwrap();
        assert_eq!(grid_position(la), Some(GridPos { row: 6, col: 3 }));
    }

    #[test]
    fn actinium_stays_in_the_main_grid() {
        let cat = catalog();
        let ac = cat.by_number(89).unwrap();
        assert_eq!(grid_position(ac), Some(GridPos { row: 7, col: 3 }));
    }

    #[test]
    fn thorium_opens_the_actinide_row_at_column_four() {
        let cat = catalog();
        let th = cat.by_number(90).unwrap();
        assert_eq!(
            grid_position(th),
            Some(GridPos {
                row: ACTINIDE_ROW,
                col: 4
            })
        );
    }

    #[test]
    fn lutetium_closes_the_lanthanide_row() {
        let cat = catalog();
        let lu = cat.by_number(71).unwrap();
        assert_eq!(
            grid_position(lu),
            Some(GridPos {
                row: LANTHANIDE_ROW,
                col: 17
            })
        );
    }

    #[test]
    fn corner_elements_land_where_expected() {
        let cat = catalog();
        let h = cat.by_number(1).unwrap();
        assert_eq!(grid_position(h), Some(GridPos { row: 1, col: 1 }));
        let he = cat.by_number(2).unwrap();
        assert_eq!(grid_position(he), Some(GridPos { row: 1, col: 18 }));
        let og = cat.by_number(118).unwrap();
        assert_eq!(grid_position(og), Some(GridPos { row: 7, col: 18 }));
    }

    #[test]
    fn every_catalog_element_is_positioned_without_collisions() {
        let cat = catalog();
        let mut seen = std::collections::HashSet::new();
        for e in cat.elements() {
            let pos = grid_position(e)
                .unwrap_or_else(|| panic!("{} has no grid position", e.name));
            assert!(pos.row >= 1 && pos.row <= GRID_ROWS);
            assert!(pos.col >= 1 && pos.col <= GRID_COLS);
            assert!(
                seen.insert((pos.row, pos.col)),
                "{} collides at ({}, {})",
                e.name,
                pos.row,
                pos.col
            );
        }
    }
}
