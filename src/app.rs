use eframe::egui;

use crate::data::view::DataView;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct NatalityApp {
    pub state: AppState,
}

impl NatalityApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for NatalityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: record counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart + detail table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::header(ui);

            if let Some(err) = &self.state.load_error {
                panels::load_error(ui, err);
                return;
            }

            match &self.state.view {
                DataView::NoData => panels::no_data(ui),
                DataView::Populated {
                    filtered,
                    aggregates,
                } => {
                    plot::births_chart(ui, aggregates, &self.state.color_map);
                    ui.add_space(8.0);
                    panels::detail_table(ui, filtered);
                }
            }
        });
    }
}
