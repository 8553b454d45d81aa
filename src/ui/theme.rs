// Clippy Analyzer - ui/theme.rs
//
// Severity colour mapping and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Colour for a severity marker: the more stars, the hotter.
pub fn severity_colour(severity: u64) -> Color32 {
    match severity {
        0 | 1 => Color32::from_rgb(209, 213, 219), // Gray 300
        2 => Color32::from_rgb(217, 119, 6),       // Amber 600
        _ => Color32::from_rgb(220, 38, 38),       // Red 600
    }
}

/// Status bar text colour for failures.
pub const STATUS_ERROR: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Minimum column widths, in table order (Translation .. Score).
pub const COLUMN_WIDTHS: [f32; 5] = [200.0, 300.0, 80.0, 80.0, 80.0];

/// Layout constants.
pub const ROW_HEIGHT: f32 = 20.0;
pub const COLUMN_SPACING: f32 = 16.0;
pub const ROW_SPACING: f32 = 4.0;
pub const TITLE_SIZE: f32 = 28.0;
