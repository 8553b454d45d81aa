// Clippy Analyzer - ui/panels/about.rs
//
// About dialog, opened from Help > About.
// Rendered as a centred, non-resizable, non-collapsible window.

use crate::app::state::AppState;
use crate::util::constants;

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {}", constants::APP_NAME))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(constants::APP_NAME).size(24.0).strong());
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("v{}", constants::APP_VERSION))
                        .size(14.0)
                        .weak(),
                );
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("Ranks the translations in a Plover clippy report");
                ui.label("by how often, and how inefficiently, they were stroked.");
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new("Score = severity \u{00d7} count")
                        .monospace()
                        .weak(),
                );
            });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("MIT License").small().weak());
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
            });

            ui.add_space(8.0);
        });

    if !open {
        state.show_about = false;
    }
}
