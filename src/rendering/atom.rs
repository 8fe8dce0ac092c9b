// src/rendering/atom.rs
//
// Decorative Bohr-style shell model for the detail view. Purely
// presentational: a nucleus, one orbit ring per occupied shell, and
// electrons riding the rings. Must stay well-defined for every valid
// electron count.

use super::theme;
use crate::model::Element;
use crate::state::AtomView;
use gtk4::cairo;
use std::f64::consts::PI;

/// Electrons per shell in the simplified filling order. Capped at the
/// seven shells a period-7 element can occupy.
const SHELL_CAPACITY: [u32; 7] = [2, 8, 18, 32, 32, 18, 8];

/// Greedy shell filling for a neutral atom of the given atomic number.
pub fn shell_occupancy(atomic_number: u32) -> Vec<u32> {
    let mut remaining = atomic_number;
    let mut shells = Vec::new();
    for cap in SHELL_CAPACITY {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(cap);
        shells.push(take);
        remaining -= take;
    }
    // Anything beyond the table's range spills into the last shell so
    // the model never loses electrons.
    if remaining > 0 {
        if let Some(last) = shells.last_mut() {
            *last += remaining;
        } else {
            shells.push(remaining);
        }
    }
    shells
}

#[derive(Debug, Clone, Copy)]
pub struct ElectronSprite {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    pub radius: f64,
}

pub struct AtomScene {
    /// Projected ring outlines, one polyline per shell.
    pub rings: Vec<Vec<(f64, f64)>>,
    pub electrons: Vec<ElectronSprite>,
    pub center: (f64, f64),
    pub nucleus_radius: f64,
}

/// Projects the shell model into screen space. Pure; the draw function
/// only rasterizes what this returns.
pub fn calculate_atom(element: &Element, view: &AtomView, w: f64, h: f64) -> AtomScene {
    let shells = shell_occupancy(element.atomic_number);
    let cx = w / 2.0;
    let cy = h / 2.0;

    let max_r = 0.44 * w.min(h) * view.zoom.clamp(0.3, 3.0);
    let base_r = max_r * 0.32;
    let step = if shells.len() > 1 {
        (max_r - base_r) / (shells.len() - 1) as f64
    } else {
        0.0
    };

    let (sin_tilt, cos_tilt) = view.rot_x.to_radians().sin_cos();
    let (sin_yaw, cos_yaw) = view.rot_y.to_radians().sin_cos();

    // Ring i lies in a plane tilted a little further than ring i-1 so
    // the shells do not visually collapse onto one another.
    let project = |ring: usize, radius: f64, t: f64| -> (f64, f64, f64) {
        let extra = ring as f64 * 0.35;
        let (sin_e, cos_e) = extra.sin_cos();

        let x0 = radius * t.cos();
        let y0 = radius * t.sin();

        // Per-ring tilt about x, then the shared view tilt and yaw.
        let y1 = y0 * cos_e;
        let z1 = y0 * sin_e;

        let y2 = y1 * cos_tilt - z1 * sin_tilt;
        let z2 = y1 * sin_tilt + z1 * cos_tilt;

        let x3 = x0 * cos_yaw + z2 * sin_yaw;
        let z3 = -x0 * sin_yaw + z2 * cos_yaw;

        (cx + x3, cy - y2, z3)
    };

    let mut rings = Vec::with_capacity(shells.len());
    let mut electrons = Vec::new();

    for (i, &count) in shells.iter().enumerate() {
        let radius = base_r + step * i as f64;

        let samples = 72;
        let outline = (0..=samples)
            .map(|s| {
                let t = s as f64 / samples as f64 * 2.0 * PI;
                let (x, y, _) = project(i, radius, t);
                (x, y)
            })
            .collect();
        rings.push(outline);

        // Outer shells orbit slower, like the real thing.
        let speed = 1.2 / (1.0 + i as f64 * 0.6);
        for j in 0..count {
            let t = view.phase * speed + j as f64 / count as f64 * 2.0 * PI;
            let (x, y, depth) = project(i, radius, t);
            electrons.push(ElectronSprite {
                x,
                y,
                depth,
                radius: (max_r * 0.035).clamp(1.5, 5.0),
            });
        }
    }

    AtomScene {
        rings,
        electrons,
        center: (cx, cy),
        nucleus_radius: max_r * 0.2,
    }
}

/// Rasterizes the scene: back electrons, rings, nucleus, front
/// electrons, in that order.
pub fn draw_atom(cr: &cairo::Context, element: &Element, view: &AtomView, w: f64, h: f64) {
    let scene = calculate_atom(element, view, w, h);
    let (cx, cy) = scene.center;

    let mut back: Vec<&ElectronSprite> = scene.electrons.iter().filter(|e| e.depth < 0.0).collect();
    let mut front: Vec<&ElectronSprite> =
        scene.electrons.iter().filter(|e| e.depth >= 0.0).collect();
    back.sort_by(|a, b| a.depth.partial_cmp(&b.depth).unwrap_or(std::cmp::Ordering::Equal));
    front.sort_by(|a, b| a.depth.partial_cmp(&b.depth).unwrap_or(std::cmp::Ordering::Equal));

    for e in back {
        draw_electron(cr, e);
    }

    cr.set_source_rgba(0.10, 0.46, 0.82, 0.45);
    cr.set_line_width(1.0);
    for ring in &scene.rings {
        let mut points = ring.iter();
        if let Some(&(x, y)) = points.next() {
            cr.move_to(x, y);
            for &(x, y) in points {
                cr.line_to(x, y);
            }
            cr.stroke().ok();
        }
    }

    // Nucleus, shaded with the category accent
    let (ar, ag, ab) = theme::category_accent(element.category);
    let r = scene.nucleus_radius;
    let grad = cairo::RadialGradient::new(cx - r * 0.3, cy - r * 0.3, r * 0.1, cx, cy, r);
    grad.add_color_stop_rgb(0.0, 1.0, 1.0, 1.0);
    grad.add_color_stop_rgb(0.35, ar, ag, ab);
    grad.add_color_stop_rgb(1.0, ar * 0.35, ag * 0.35, ab * 0.35);
    cr.set_source(&grad).ok();
    cr.arc(cx, cy, r, 0.0, 2.0 * PI);
    cr.fill().ok();

    // Symbol on the nucleus
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(r * 0.7);
    cr.set_source_rgba(0.05, 0.05, 0.1, 0.85);
    if let Ok(ext) = cr.text_extents(&element.symbol) {
        cr.move_to(cx - ext.width() / 2.0 - ext.x_bearing(), cy + ext.height() / 2.0);
        cr.show_text(&element.symbol).ok();
    }

    for e in front {
        draw_electron(cr, e);
    }
}

fn draw_electron(cr: &cairo::Context, e: &ElectronSprite) {
    let (r, g, b) = theme::ELECTRON;

    // Soft glow halo, then the core dot
    let glow = cairo::RadialGradient::new(e.x, e.y, 0.0, e.x, e.y, e.radius * 2.5);
    glow.add_color_stop_rgba(0.0, r, g, b, 0.9);
    glow.add_color_stop_rgba(1.0, r, g, b, 0.0);
    cr.set_source(&glow).ok();
    cr.arc(e.x, e.y, e.radius * 2.5, 0.0, 2.0 * PI);
    cr.fill().ok();

    cr.set_source_rgb(r, g, b);
    cr.arc(e.x, e.y, e.radius, 0.0, 2.0 * PI);
    cr.fill().ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementCatalog;

    #[test]
    fn shells_account_for_every_electron() {
        for z in 1..=118u32 {
            let shells = shell_occupancy(z);
            let total: u32 = shells.iter().sum();
            assert_eq!(total, z, "Z={} lost electrons", z);
            assert!(shells.len() <= 7, "Z={} has {} shells", z, shells.len());
            assert!(shells[0] <= 2);
        }
    }

    #[test]
    fn known_shell_structures() {
        assert_eq!(shell_occupancy(1), vec![1]);
        assert_eq!(shell_occupancy(2), vec![2]);
        assert_eq!(shell_occupancy(10), vec![2, 8]);
        assert_eq!(shell_occupancy(18), vec![2, 8, 8]);
    }

    #[test]
    fn projection_is_finite_for_every_element() {
        let catalog = ElementCatalog::load_embedded().unwrap();
        let view = AtomView {
            rot_x: 37.0,
            rot_y: 112.0,
            zoom: 1.3,
            phase: 4.2,
        };
        for element in catalog.elements() {
            let scene = calculate_atom(element, &view, 640.0, 420.0);
            assert_eq!(
                scene.electrons.len() as u32,
                element.atomic_number,
                "{} electron count",
                element.name
            );
            for e in &scene.electrons {
                assert!(e.x.is_finite() && e.y.is_finite() && e.depth.is_finite());
            }
            assert!(scene.nucleus_radius > 0.0);
        }
    }

    #[test]
    fn degenerate_viewport_does_not_panic() {
        let catalog = ElementCatalog::load_embedded().unwrap();
        let element = catalog.by_number(92).unwrap();
        let scene = calculate_atom(element, &AtomView::default(), 0.0, 0.0);
        assert_eq!(scene.electrons.len(), 92);
    }
}
