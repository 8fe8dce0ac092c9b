// src/rendering/mod.rs
pub mod atom;
pub mod export;
pub mod painter;
pub mod scene;
pub mod theme;
