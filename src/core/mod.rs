// Clippy Analyzer - core/mod.rs
//
// Core business logic layer: sanitize, classify, parse, aggregate, rank,
// serialise.
// Must NOT depend on: ui, platform, app, or the filesystem.

pub mod aggregate;
pub mod analysis;
pub mod export;
pub mod model;
pub mod parser;
pub mod rank;
pub mod sanitize;

pub use analysis::process;
pub use export::serialize;
pub use rank::sort_by;
