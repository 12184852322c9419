use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::config::{APP_SUBTITLE, APP_TITLE};
use crate::data::loader::LoadError;
use crate::data::model::{FilterField, NatalityDataset};
use crate::data::view::DataView;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(store) = &state.store else {
        ui.label("No dataset loaded.");
        return;
    };

    // Options come from the unfiltered data; collect them so the state can
    // be mutated while iterating.
    let options: Vec<(FilterField, Vec<String>)> = FilterField::ALL
        .iter()
        .map(|&field| {
            let values = store.dataset().options(field).map(str::to_string).collect();
            (field, values)
        })
        .collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }
            ui.separator();

            for (field, values) in &options {
                let selection = state.selection.get(*field);
                let summary = if selection.is_all() {
                    "All".to_string()
                } else {
                    let picked = values.iter().filter(|v| selection.is_picked(v)).count();
                    format!("{picked}/{}", values.len())
                };
                let header_text = format!("{}  ({summary})", field.label());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(field.column())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        let mut all = state.selection.get(*field).is_all();
                        if ui.checkbox(&mut all, "All").changed() {
                            state.set_all(*field, all);
                        }

                        for value in values {
                            let mut checked = state.selection.get(*field).is_picked(value);
                            let mut text = RichText::new(value);
                            if *field == FilterField::Sex {
                                text = text.color(state.color_map.color_for(value));
                            }
                            if ui.checkbox(&mut checked, text).changed() {
                                state.toggle_filter_value(*field, value);
                            }
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the status bar: record counts and data source.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        match &state.store {
            Some(store) => {
                ui.label(format!(
                    "{} records loaded, {} visible",
                    state.total_records(),
                    state.view.visible_records()
                ));
                if let DataView::Populated { filtered, .. } = &state.view {
                    ui.separator();
                    ui.label(format!("{} births in selection", filtered.total_births()));
                }
                ui.separator();
                ui.label(RichText::new(store.path().display().to_string()).weak());
            }
            None => {
                ui.label(RichText::new("Dataset unavailable").color(Color32::RED));
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel pieces
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui) {
    ui.heading(APP_TITLE);
    ui.label(RichText::new(APP_SUBTITLE).size(16.0));
    ui.add_space(6.0);
}

/// Fatal load failure in place of chart and table.
pub fn load_error(ui: &mut Ui, error: &LoadError) {
    ui.label(RichText::new(error.to_string()).color(Color32::RED).strong());
    if let LoadError::Schema { found, .. } = error {
        ui.add_space(4.0);
        ui.label(format!("Actual column names found: {found:?}"));
    }
}

pub fn no_data(ui: &mut Ui) {
    ui.label(
        RichText::new("No data available for the selected filters.")
            .color(Color32::from_rgb(0xd9, 0x8c, 0x00)),
    );
}

/// Row-level table of the filtered records.
pub fn detail_table(ui: &mut Ui, filtered: &NatalityDataset) {
    ui.heading("Filtered Data Details");

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["State", "Month", "Gender", "Births"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, filtered.len(), |mut row| {
                let record = &filtered.records[row.index()];
                row.col(|ui| {
                    ui.label(&record.state_of_residence);
                });
                row.col(|ui| {
                    ui.label(&record.month);
                });
                row.col(|ui| {
                    ui.label(&record.sex_of_infant);
                });
                row.col(|ui| {
                    ui.label(record.births.to_string());
                });
            });
        });
}
