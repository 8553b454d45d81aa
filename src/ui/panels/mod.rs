// Clippy Analyzer - ui/panels/mod.rs

pub mod about;
pub mod results;
