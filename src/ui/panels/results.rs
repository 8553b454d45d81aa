// Clippy Analyzer - ui/panels/results.rs
//
// Results table (central area).
//
// Five columns: Translation, Suggestions, Severity, Count, Score. Header
// buttons re-sort via AppState::toggle_sort; the click is collected during
// rendering and applied afterwards so `state.view` is not mutated while
// it is borrowed by the row loop.

use crate::app::state::AppState;
use crate::core::model::{ResultRecord, SortColumn};
use crate::ui::theme;
use crate::util::constants;

/// Numeric columns are right-aligned, text columns left-aligned.
fn cell_layout(column: SortColumn) -> egui::Layout {
    if column.is_numeric() {
        egui::Layout::right_to_left(egui::Align::Center)
    } else {
        egui::Layout::left_to_right(egui::Align::Center)
    }
}

fn cell_text(record: &ResultRecord, column: SortColumn) -> egui::RichText {
    match column {
        SortColumn::Translation => egui::RichText::new(record.key.as_str()),
        SortColumn::Suggestions => egui::RichText::new(record.suggestions_joined.as_str()),
        SortColumn::Severity => egui::RichText::new(record.severity_marker.as_str())
            .monospace()
            .color(theme::severity_colour(record.severity)),
        SortColumn::Count => egui::RichText::new(record.count.to_string()),
        SortColumn::Score => egui::RichText::new(record.score.to_string()),
    }
}

/// Render the results panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(constants::APP_NAME)
                .size(theme::TITLE_SIZE)
                .strong(),
        );
    });
    ui.add_space(12.0);

    if !state.results_loaded {
        ui.centered_and_justified(|ui| {
            ui.label("No report loaded.\nOpen a clippy report via File \u{2192} Open Report\u{2026}");
        });
        return;
    }

    if state.view.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("The selected report contains no translation entries.");
        });
        return;
    }

    let mut clicked: Option<SortColumn> = None;

    egui::ScrollArea::both()
        .id_salt("results_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("results_table")
                .num_columns(SortColumn::all().len())
                .striped(true)
                .spacing([theme::COLUMN_SPACING, theme::ROW_SPACING])
                .show(ui, |ui| {
                    for (column, width) in SortColumn::all().iter().zip(theme::COLUMN_WIDTHS) {
                        let text = egui::RichText::new(state.header_label(*column)).strong();
                        let response = ui
                            .add_sized([width, theme::ROW_HEIGHT], egui::Button::new(text).frame(false))
                            .on_hover_text(format!("Sort by {column}"));
                        if response.clicked() {
                            clicked = Some(*column);
                        }
                    }
                    ui.end_row();

                    for record in &state.view {
                        for column in SortColumn::all() {
                            ui.with_layout(cell_layout(*column), |ui| {
                                ui.label(cell_text(record, *column));
                            });
                        }
                        ui.end_row();
                    }
                });
        });

    if let Some(column) = clicked {
        state.toggle_sort(column);
    }
}
