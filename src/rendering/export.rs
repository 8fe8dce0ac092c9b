// src/rendering/export.rs

use super::{painter, scene, theme};
use crate::state::AppState;

// --- File Export Entry Point ---
// Renders the current table view (filters applied) through the same
// scene/painter path as the screen.
pub fn export_table(state: &AppState, path: &str, format_pdf: bool) -> Result<(), String> {
    let width = 1600.0;
    let table = scene::calculate_scene(&state.catalog, &state.filters, width, 1000.0);
    let height = scene::content_height(&table).max(200.0);

    if format_pdf {
        let surface = cairo::PdfSurface::new(width, height, path).map_err(|e| e.to_string())?;
        let cr = cairo::Context::new(&surface).map_err(|e| e.to_string())?;

        paint_background(&cr, width, height);
        painter::draw_table(&cr, &table, &state.catalog, &state.config);

        surface.finish();
    } else {
        let surface =
            cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)
                .map_err(|e| e.to_string())?;
        let cr = cairo::Context::new(&surface).map_err(|e| e.to_string())?;

        paint_background(&cr, width, height);
        painter::draw_table(&cr, &table, &state.catalog, &state.config);
        drop(cr);

        let mut file = std::fs::File::create(path).map_err(|e| e.to_string())?;
        surface.write_to_png(&mut file).map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn paint_background(cr: &cairo::Context, width: f64, height: f64) {
    let (r, g, b) = theme::BACKGROUND;
    cr.set_source_rgb(r, g, b);
    cr.rectangle(0.0, 0.0, width, height);
    cr.fill().ok();
}
