// src/rendering/painter.rs

use super::scene::TableScene;
use super::theme;
use crate::config::Config;
use crate::model::ElementCatalog;
use gtk4::cairo;
use std::f64::consts::PI;

/// Rounded rectangle path.
fn rounded_rect(cr: &cairo::Context, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let r = r.min(w / 2.0).min(h / 2.0);
    cr.new_sub_path();
    cr.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
    cr.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
    cr.arc(x + r, y + h - r, r, PI / 2.0, PI);
    cr.arc(x + r, y + r, r, PI, 1.5 * PI);
    cr.close_path();
}

fn show_centered(cr: &cairo::Context, text: &str, cx: f64, baseline: f64) {
    if let Ok(ext) = cr.text_extents(text) {
        cr.move_to(cx - ext.width() / 2.0 - ext.x_bearing(), baseline);
        cr.show_text(text).ok();
    }
}

/// Paints the whole table view: banner, tiles, row labels.
/// Geometry comes from the scene; this function never re-derives it.
pub fn draw_table(cr: &cairo::Context, scene: &TableScene, catalog: &ElementCatalog, config: &Config) {
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);

    if let Some(banner) = &scene.banner {
        draw_banner(cr, banner);
    }

    for tile in &scene.tiles {
        let element = match catalog.by_number(tile.atomic_number) {
            Some(e) => e,
            None => continue,
        };
        let s = tile.size;
        let (r, g, b) = theme::category_color(element.category);

        rounded_rect(cr, tile.x, tile.y, s, s, s * 0.1);
        cr.set_source_rgb(r, g, b);
        cr.fill_preserve().ok();
        cr.set_source_rgba(1.0, 1.0, 1.0, 0.25);
        cr.set_line_width((s * 0.02).max(0.5));
        cr.stroke().ok();

        // Atomic number, top-left corner
        cr.set_source_rgba(1.0, 1.0, 1.0, 0.7);
        cr.set_font_size(s * 0.16);
        cr.move_to(tile.x + s * 0.08, tile.y + s * 0.22);
        cr.show_text(&element.atomic_number.to_string()).ok();

        // Symbol, centered
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_source_rgb(1.0, 1.0, 1.0);
        cr.set_font_size(s * 0.34);
        show_centered(cr, &element.symbol, tile.x + s / 2.0, tile.y + s * 0.55);

        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_source_rgba(1.0, 1.0, 1.0, 0.8);
        cr.set_font_size(s * 0.12);
        show_centered(cr, &element.name, tile.x + s / 2.0, tile.y + s * 0.74);

        if config.show_tile_mass {
            cr.set_source_rgba(1.0, 1.0, 1.0, 0.55);
            cr.set_font_size(s * 0.11);
            show_centered(
                cr,
                &format!("{:.2}", element.atomic_mass),
                tile.x + s / 2.0,
                tile.y + s * 0.9,
            );
        }
    }

    // Footnote labels for the detached rows
    let (lr, lg, lb) = theme::category_accent(crate::model::Category::Lanthanide);
    cr.set_source_rgb(lr, lg, lb);
    cr.set_font_size((scene.tile_size * 0.22).clamp(9.0, 14.0));
    for label in &scene.labels {
        cr.move_to(label.x, label.y);
        cr.show_text(&label.text).ok();
    }
}

fn draw_banner(cr: &cairo::Context, text: &str) {
    cr.set_font_size(13.0);
    let ext = cr.text_extents(text).ok();
    let width = ext.map(|e| e.width()).unwrap_or(300.0) + 48.0;

    let (r, g, b) = theme::BANNER_FILL;
    cr.set_source_rgba(r, g, b, 0.8);
    rounded_rect(cr, 16.0, 10.0, width, 32.0, 8.0);
    cr.fill().ok();

    cr.set_source_rgba(0.75, 0.83, 1.0, 1.0);
    cr.move_to(40.0, 31.0);
    cr.show_text(text).ok();
}
