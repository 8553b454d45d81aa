// Clippy Analyzer - app/mod.rs
//
// Application layer: report load/export orchestration and state management.
// Dependencies: core, platform.
// Must NOT depend on: ui.

pub mod report;
pub mod state;
