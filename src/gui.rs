// Clippy Analyzer - gui.rs
//
// Top-level eframe::App implementation.
// Wires the menu bar, status bar, results table, and file dialogs to
// AppState. All parsing and scoring happens behind AppState.

use crate::app::state::AppState;
use crate::ui;
use crate::util::constants;

/// The Clippy Analyzer application.
pub struct AnalyzerApp {
    pub state: AppState,
}

impl AnalyzerApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn open_report(&mut self, path: std::path::PathBuf) {
        if let Err(e) = self.state.open_report(path) {
            tracing::warn!(error = %e, "Report could not be loaded");
        }
    }

    /// Ask for a report file and process it.
    fn pick_report(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Select Clippy output file")
            .set_directory(self.state.config.open_dialog_directory())
            .add_filter("Org files", constants::ORG_EXTENSIONS)
            .add_filter("Text files", constants::TEXT_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file();

        if let Some(path) = picked {
            self.open_report(path);
        }
    }

    /// Ask for an export destination and write the results there.
    fn pick_export(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Save CSV file")
            .set_directory(self.state.config.export_dialog_directory())
            .set_file_name(self.state.config.export_file_name.as_str())
            .add_filter("CSV files", &["csv"])
            .add_filter("JSON files", &[constants::JSON_EXTENSION])
            .add_filter("All files", &["*"])
            .save_file();

        // Cancelled dialog: nothing to do.
        let Some(dest) = picked else {
            return;
        };

        if let Err(e) = self.state.export_to(&dest) {
            tracing::warn!(error = %e, "Export failed");
        }
    }
}

impl eframe::App for AnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Report given on the command line.
        if let Some(path) = self.state.pending_open.take() {
            self.open_report(path);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Report\u{2026}").clicked() {
                        ui.close_menu();
                        self.pick_report();
                    }
                    ui.separator();
                    // Enabled only when there is something to export.
                    let has_records = !self.state.records.is_empty();
                    if ui
                        .add_enabled(has_records, egui::Button::new("Export CSV\u{2026}"))
                        .clicked()
                    {
                        ui.close_menu();
                        self.pick_export();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.status_is_error {
                    ui.colored_label(ui::theme::STATUS_ERROR, self.state.status_message.as_str());
                } else {
                    ui.label(self.state.status_message.as_str());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.state.results_loaded {
                        ui.label(format!("{} translations", self.state.records.len()));
                    }
                });
            });
        });

        // Central panel (results table)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::results::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
