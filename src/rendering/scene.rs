// src/rendering/scene.rs

use crate::filter::{self, FilterOptions};
use crate::layout::{self, GRID_COLS, GRID_ROWS};
use crate::model::ElementCatalog;

const MARGIN: f64 = 16.0;
const BANNER_HEIGHT: f64 = 44.0;

// This struct is used by interactions.rs for hit-testing
// and by painter.rs for drawing.
#[derive(Debug, Clone, Copy)]
pub struct TileSprite {
    pub atomic_number: u32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

#[derive(Debug, Clone)]
pub struct RowLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

pub struct TableScene {
    pub tiles: Vec<TileSprite>,
    pub labels: Vec<RowLabel>,
    /// Present iff any filter is active.
    pub banner: Option<String>,
    pub tile_size: f64,
}

/// Derives tile geometry from the current filters and the widget size.
/// Pure; the draw func, click hit-testing and file export all call this
/// so they can never disagree about what is on screen.
pub fn calculate_scene(
    catalog: &ElementCatalog,
    filters: &FilterOptions,
    win_w: f64,
    win_h: f64,
) -> TableScene {
    if filters.is_filtering() {
        flow_scene(catalog, filters, win_w)
    } else {
        grid_scene(catalog, win_w, win_h)
    }
}

/// The classic 18-column table, detached f-block rows below.
fn grid_scene(catalog: &ElementCatalog, win_w: f64, win_h: f64) -> TableScene {
    let cols = GRID_COLS as f64;
    // Half a cell of extra height gives the separator row its gap.
    let rows = GRID_ROWS as f64 + 0.5;

    let cell = ((win_w - 2.0 * MARGIN) / cols)
        .min((win_h - 2.0 * MARGIN) / rows)
        .max(12.0);
    let gap = cell * 0.08;
    let tile = cell - gap;

    let origin_x = (win_w - cell * cols).max(0.0) / 2.0;
    let origin_y = MARGIN;

    let row_y = |row: u8| -> f64 {
        let mut y = origin_y + (row as f64 - 1.0) * cell;
        if row >= layout::LANTHANIDE_ROW {
            // Push the detached rows half a cell further down; row 8
            // itself is never populated.
            y += cell * 0.5;
        }
        y
    };

    let mut tiles = Vec::with_capacity(catalog.len());
    let mut overflow = 0u32;
    for element in catalog.elements() {
        match layout::grid_position(element) {
            Some(pos) => tiles.push(TileSprite {
                atomic_number: element.atomic_number,
                x: origin_x + (pos.col as f64 - 1.0) * cell,
                y: row_y(pos.row),
                size: tile,
            }),
            None => {
                // Anomalous record with no cell: flow it below the grid.
                tiles.push(TileSprite {
                    atomic_number: element.atomic_number,
                    x: origin_x + (layout::FBLOCK_START_COL as f64 - 1.0 + overflow as f64)
                        * cell,
                    y: row_y(layout::ACTINIDE_ROW) + cell,
                    size: tile,
                });
                overflow += 1;
            }
        }
    }

    let labels = vec![
        RowLabel {
            text: "* Lanthanides (57\u{2013}71)".to_string(),
            x: origin_x,
            y: row_y(layout::LANTHANIDE_ROW) + tile * 0.6,
        },
        RowLabel {
            text: "** Actinides (89\u{2013}103)".to_string(),
            x: origin_x,
            y: row_y(layout::ACTINIDE_ROW) + tile * 0.6,
        },
    ];

    TableScene {
        tiles,
        labels,
        banner: None,
        tile_size: tile,
    }
}

/// Simple wrap layout for the filtered subset, banner on top.
fn flow_scene(catalog: &ElementCatalog, filters: &FilterOptions, win_w: f64) -> TableScene {
    let matches = filter::filter_elements(catalog, filters);

    let banner = if matches.is_empty() {
        "No elements match your filters. Try adjusting your criteria.".to_string()
    } else {
        format!("Showing {} elements matching your filters.", matches.len())
    };

    let cols = (((win_w - 2.0 * MARGIN) / 96.0).floor() as usize).clamp(2, 10);
    let cell = (win_w - 2.0 * MARGIN) / cols as f64;
    let gap = cell * 0.06;
    let tile = cell - gap;

    let tiles = matches
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let col = i % cols;
            let row = i / cols;
            TileSprite {
                atomic_number: element.atomic_number,
                x: MARGIN + col as f64 * cell,
                y: MARGIN + BANNER_HEIGHT + row as f64 * cell,
                size: tile,
            }
        })
        .collect();

    TableScene {
        tiles,
        labels: Vec::new(),
        banner: Some(banner),
        tile_size: tile,
    }
}

/// Tile under a point, if any. Used by click selection.
pub fn hit_test(scene: &TableScene, x: f64, y: f64) -> Option<u32> {
    scene
        .tiles
        .iter()
        .find(|t| x >= t.x && x <= t.x + t.size && y >= t.y && y <= t.y + t.size)
        .map(|t| t.atomic_number)
}

/// Total height the scene occupies; export sizes its surface from this.
pub fn content_height(scene: &TableScene) -> f64 {
    scene
        .tiles
        .iter()
        .map(|t| t.y + t.size)
        .fold(0.0, f64::max)
        + MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementCatalog;

    fn catalog() -> ElementCatalog {
        ElementCatalog::load_embedded().unwrap()
    }

    #[test]
    fn unfiltered_scene_places_every_element_once() {
        let cat = catalog();
        let scene = calculate_scene(&cat, &FilterOptions::default(), 1280.0, 800.0);
        assert_eq!(scene.tiles.len(), cat.len());
        assert!(scene.banner.is_none());
        assert_eq!(scene.labels.len(), 2);
    }

    #[test]
    fn tiles_do_not_overlap_in_grid_mode() {
        let cat = catalog();
        let scene = calculate_scene(&cat, &FilterOptions::default(), 1280.0, 800.0);
        for (i, a) in scene.tiles.iter().enumerate() {
            for b in &scene.tiles[i + 1..] {
                let separated = a.x + a.size <= b.x
                    || b.x + b.size <= a.x
                    || a.y + a.size <= b.y
                    || b.y + b.size <= a.y;
                assert!(
                    separated,
                    "tiles {} and {} overlap",
                    a.atomic_number, b.atomic_number
                );
            }
        }
    }

    #[test]
    fn filtering_switches_to_flow_with_banner() {
        let cat = catalog();
        let mut filters = FilterOptions::default();
        filters.category = "halogen".to_string();
        let scene = calculate_scene(&cat, &filters, 1280.0, 800.0);
        assert_eq!(scene.tiles.len(), 6);
        assert_eq!(
            scene.banner.as_deref(),
            Some("Showing 6 elements matching your filters.")
        );
    }

    #[test]
    fn empty_match_still_produces_a_scene() {
        let cat = catalog();
        let mut filters = FilterOptions::default();
        filters.search_query = "qqq".to_string();
        let scene = calculate_scene(&cat, &filters, 800.0, 600.0);
        assert!(scene.tiles.is_empty());
        assert!(scene
            .banner
            .as_deref()
            .unwrap()
            .starts_with("No elements match"));
    }

    #[test]
    fn hit_test_resolves_the_tile_under_the_pointer() {
        let cat = catalog();
        let scene = calculate_scene(&cat, &FilterOptions::default(), 1280.0, 800.0);
        let gold = scene
            .tiles
            .iter()
            .find(|t| t.atomic_number == 79)
            .copied()
            .unwrap();
        let hit = hit_test(&scene, gold.x + gold.size / 2.0, gold.y + gold.size / 2.0);
        assert_eq!(hit, Some(79));
        assert_eq!(hit_test(&scene, -5.0, -5.0), None);
    }

    #[test]
    fn scene_survives_tiny_windows() {
        let cat = catalog();
        let scene = calculate_scene(&cat, &FilterOptions::default(), 40.0, 30.0);
        assert_eq!(scene.tiles.len(), cat.len());
        assert!(scene.tile_size > 0.0);
    }
}
