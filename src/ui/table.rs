use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Scrollable table of the visible observations.
pub fn filtered_table(ui: &mut Ui, state: &AppState) {
    let rows = state.table_rows();
    if rows.is_empty() {
        ui.label("No data available for selected filters");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(300.0)
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for title in ["crop_name", "status", "region", "disease_name"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let obs = rows[row.index()];
                row.col(|ui| {
                    ui.label(obs.crop_name.as_str());
                });
                row.col(|ui| {
                    ui.label(obs.status.as_str());
                });
                row.col(|ui| {
                    ui.label(obs.region.as_str());
                });
                row.col(|ui| {
                    ui.label(obs.disease_name.as_str());
                });
            });
        });
}
