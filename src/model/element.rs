// src/model/element.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten classification tags used by the catalog. The set is closed:
/// grid placement and the legend both key off these variants, so a tag
/// outside this list is a catalog error, not a display concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "noble gas")]
    NobleGas,
    #[serde(rename = "alkali metal")]
    AlkaliMetal,
    #[serde(rename = "alkaline earth metal")]
    AlkalineEarthMetal,
    #[serde(rename = "transition metal")]
    TransitionMetal,
    #[serde(rename = "post-transition metal")]
    PostTransitionMetal,
    #[serde(rename = "metalloid")]
    Metalloid,
    #[serde(rename = "nonmetal")]
    Nonmetal,
    #[serde(rename = "halogen")]
    Halogen,
    #[serde(rename = "lanthanide")]
    Lanthanide,
    #[serde(rename = "actinide")]
    Actinide,
}

impl Category {
    /// In legend order.
    pub const ALL: [Category; 10] = [
        Category::NobleGas,
        Category::AlkaliMetal,
        Category::AlkalineEarthMetal,
        Category::TransitionMetal,
        Category::PostTransitionMetal,
        Category::Metalloid,
        Category::Nonmetal,
        Category::Halogen,
        Category::Lanthanide,
        Category::Actinide,
    ];

    /// Canonical lowercase tag, identical to the JSON spelling.
    /// Filter criteria compare against this string.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::NobleGas => "noble gas",
            Category::AlkaliMetal => "alkali metal",
            Category::AlkalineEarthMetal => "alkaline earth metal",
            Category::TransitionMetal => "transition metal",
            Category::PostTransitionMetal => "post-transition metal",
            Category::Metalloid => "metalloid",
            Category::Nonmetal => "nonmetal",
            Category::Halogen => "halogen",
            Category::Lanthanide => "lanthanide",
            Category::Actinide => "actinide",
        }
    }

    /// Plural label for dropdowns and the legend.
    pub fn label(&self) -> &'static str {
        match self {
            Category::NobleGas => "Noble Gases",
            Category::AlkaliMetal => "Alkali Metals",
            Category::AlkalineEarthMetal => "Alkaline Earth Metals",
            Category::TransitionMetal => "Transition Metals",
            Category::PostTransitionMetal => "Post-Transition Metals",
            Category::Metalloid => "Metalloids",
            Category::Nonmetal => "Nonmetals",
            Category::Halogen => "Halogens",
            Category::Lanthanide => "Lanthanides",
            Category::Actinide => "Actinides",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Discovery year: a calendar year, or an era string ("Ancient") for
/// elements known long before recorded attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearDiscovered {
    Year(i32),
    Era(String),
}

impl fmt::Display for YearDiscovered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearDiscovered::Year(y) => write!(f, "{}", y),
            YearDiscovered::Era(s) => f.write_str(s),
        }
    }
}

/// One row of the catalog. Immutable after load.
///
/// Measured physical properties are `Option`: several elements simply
/// have no reliable value, and `None` must surface as "Unknown" in the
/// UI rather than as a silent zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: f64,
    pub category: Category,
    #[serde(default)]
    pub group: Option<u8>,
    pub period: u8,
    pub block: String,
    pub electron_configuration: String,
    pub electronegativity: Option<f64>,
    /// Picometers.
    pub atomic_radius: Option<f64>,
    /// Electronvolts.
    pub ionization_energy: Option<f64>,
    /// g/cm3.
    pub density: Option<f64>,
    /// Kelvin.
    pub melting_point: Option<f64>,
    /// Kelvin.
    pub boiling_point: Option<f64>,
    pub discovered_by: String,
    pub year_discovered: YearDiscovered,
    pub description: String,
}

impl Element {
    pub fn discoverer(&self) -> &str {
        if self.discovered_by.is_empty() {
            "Unknown"
        } else {
            &self.discovered_by
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tags_round_trip_through_serde() {
        for cat in Category::ALL {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.tag()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cat);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let res: Result<Category, _> = serde_json::from_str("\"unobtainium\"");
        assert!(res.is_err(), "categories outside the closed set must fail");
    }

    #[test]
    fn year_discovered_accepts_both_forms() {
        let y: YearDiscovered = serde_json::from_str("1898").unwrap();
        assert_eq!(y, YearDiscovered::Year(1898));
        let e: YearDiscovered = serde_json::from_str("\"Ancient\"").unwrap();
        assert_eq!(e.to_string(), "Ancient");
    }
}
