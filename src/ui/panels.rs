use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, FilterField, Page};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

const FILTERS: [(FilterField, &str); 3] = [
    (FilterField::Crop, "Select Crop(s)"),
    (FilterField::Status, "Health Status"),
    (FilterField::Region, "Select Region(s)"),
];

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🔍 Filters");
    ui.separator();

    if state.table.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (field, title) in FILTERS {
                filter_section(ui, state, field, title);
            }
        });
}

/// One collapsible multi-select list.
fn filter_section(ui: &mut Ui, state: &mut AppState, field: FilterField, title: &str) {
    let options = state.options(field);
    let header_text = format!(
        "{title}  ({}/{})",
        state.selected_count(field),
        options.len()
    );

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all(field);
                }
                if ui.small_button("None").clicked() {
                    state.select_none(field);
                }
            });

            for value in &options {
                let mut checked = state.is_selected(field, value);
                if ui.checkbox(&mut checked, value.as_str()).changed() {
                    state.toggle_value(field, value);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top navigation bar. `source` names where the table came from.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, source: &str) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.selectable_value(&mut state.page, Page::Home, "🏠 Home");
        ui.selectable_value(&mut state.page, Page::Dashboard, "📊 Dashboard");

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{source}: {} observations loaded, {} visible",
                table.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
