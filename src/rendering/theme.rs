// src/rendering/theme.rs
//
// Category -> display color tables. Pure lookups; the core never reads
// these, only the painter and the legend do.

use crate::model::Category;

/// Window background, a near-black indigo.
pub const BACKGROUND: (f64, f64, f64) = (0.04, 0.04, 0.12);

/// Banner strip behind the filter summary text.
pub const BANNER_FILL: (f64, f64, f64) = (0.12, 0.16, 0.35);

/// Electron glow in the atom model.
pub const ELECTRON: (f64, f64, f64) = (0.31, 0.76, 0.97);

/// Tile fill per category.
pub fn category_color(category: Category) -> (f64, f64, f64) {
    match category {
        Category::NobleGas => (0.49, 0.13, 0.81),            // Purple
        Category::AlkaliMetal => (0.73, 0.11, 0.11),         // Red
        Category::AlkalineEarthMetal => (0.76, 0.25, 0.05),  // Orange
        Category::TransitionMetal => (0.63, 0.38, 0.03),     // Dark Yellow
        Category::PostTransitionMetal => (0.02, 0.47, 0.34), // Emerald
        Category::Metalloid => (0.06, 0.46, 0.43),           // Teal
        Category::Nonmetal => (0.08, 0.50, 0.24),            // Green
        Category::Halogen => (0.05, 0.45, 0.56),             // Cyan
        Category::Lanthanide => (0.11, 0.31, 0.85),          // Blue
        Category::Actinide => (0.43, 0.16, 0.85),            // Violet
    }
}

/// Lighter tint of the same hue, used for the big symbol in the detail
/// header and for the nucleus gradient.
pub fn category_accent(category: Category) -> (f64, f64, f64) {
    match category {
        Category::NobleGas => (0.85, 0.71, 1.00),
        Category::AlkaliMetal => (0.99, 0.65, 0.65),
        Category::AlkalineEarthMetal => (0.99, 0.73, 0.45),
        Category::TransitionMetal => (0.99, 0.88, 0.28),
        Category::PostTransitionMetal => (0.43, 0.91, 0.72),
        Category::Metalloid => (0.37, 0.92, 0.83),
        Category::Nonmetal => (0.53, 0.94, 0.67),
        Category::Halogen => (0.40, 0.91, 0.98),
        Category::Lanthanide => (0.58, 0.77, 0.99),
        Category::Actinide => (0.77, 0.71, 0.99),
    }
}

/// CSS hex form of the accent, for labels styled with markup.
pub fn category_accent_hex(category: Category) -> &'static str {
    match category {
        Category::NobleGas => "#d8b4fe",
        Category::AlkaliMetal => "#fca5a5",
        Category::AlkalineEarthMetal => "#fdba74",
        Category::TransitionMetal => "#fde047",
        Category::PostTransitionMetal => "#6ee7b7",
        Category::Metalloid => "#5eead4",
        Category::Nonmetal => "#86efac",
        Category::Halogen => "#67e8f9",
        Category::Lanthanide => "#93c5fd",
        Category::Actinide => "#c4b5fd",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_distinct_fill() {
        let mut seen = std::collections::HashSet::new();
        for cat in Category::ALL {
            let (r, g, b) = category_color(cat);
            let key = format!("{:.2}-{:.2}-{:.2}", r, g, b);
            assert!(seen.insert(key), "{} shares a fill color", cat.tag());
        }
    }

    #[test]
    fn colors_stay_in_unit_range() {
        for cat in Category::ALL {
            for (r, g, b) in [category_color(cat), category_accent(cat)] {
                for c in [r, g, b] {
                    assert!((0.0..=1.0).contains(&c));
                }
            }
        }
    }
}
