// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
}

impl Default for TemperatureUnit {
    fn default() -> Self {
        TemperatureUnit::Kelvin
    }
}

impl TemperatureUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "\u{00b0}C",
        }
    }

    /// The catalog stores Kelvin; Celsius is display-only.
    pub fn from_kelvin(&self, kelvin: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin => kelvin,
            TemperatureUnit::Celsius => kelvin - 273.15,
        }
    }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,

    #[serde(default = "default_true")]
    pub show_tile_mass: bool,

    #[serde(default = "default_true")]
    pub show_legend: bool,

    #[serde(default)]
    pub filters_open_at_start: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::default(),
            show_tile_mass: true,
            show_legend: true,
            filters_open_at_start: false,
        }
    }
}

impl Config {
    /// Loads config from standard OS location (e.g., ~/.config/ptview/settings.json)
    pub fn load() -> (Self, String) {
        let path = Self::get_path();
        if path.exists() {
            match File::open(&path) {
                Ok(file) => {
                    let reader = BufReader::new(file);
                    match serde_json::from_reader(reader) {
                        Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
                        Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
                    }
                }
                Err(e) => (Self::default(), format!("Error opening config: {}", e)),
            }
        } else {
            (
                Self::default(),
                "No config found. Using defaults.".to_string(),
            )
        }
    }

    /// Saves config to standard OS location
    pub fn save(&self) -> String {
        let path = Self::get_path();
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        match File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                match serde_json::to_writer_pretty(writer, self) {
                    Ok(_) => format!("Config saved to {:?}", path),
                    Err(e) => format!("Failed to save config: {}", e),
                }
            }
            Err(e) => format!("Could not create config file: {}", e),
        }
    }

    fn get_path() -> PathBuf {
        // "com.example.ptview" should match the Application ID in main.rs
        if let Some(proj) = ProjectDirs::from("com", "example", "ptview") {
            proj.config_dir().join("settings.json")
        } else {
            PathBuf::from("settings.json")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_conversion_only_changes_display() {
        let c = TemperatureUnit::Celsius;
        assert!((c.from_kelvin(273.15)).abs() < 1e-9);
        let k = TemperatureUnit::Kelvin;
        assert_eq!(k.from_kelvin(300.0), 300.0);
    }

    #[test]
    fn default_config_shows_mass_and_legend() {
        let cfg = Config::default();
        assert!(cfg.show_tile_mass);
        assert!(cfg.show_legend);
        assert!(!cfg.filters_open_at_start);
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut cfg = Config::default();
        cfg.temperature_unit = TemperatureUnit::Celsius;
        cfg.filters_open_at_start = true;
        let json = serde_json::to_string(&cfg).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.temperature_unit, TemperatureUnit::Celsius);
        assert!(back.filters_open_at_start);
    }
}
