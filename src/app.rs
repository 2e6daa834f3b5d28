use eframe::egui;

use crate::config::AppConfig;
use crate::data::cache::{FileSource, TableCache, TableSource};
use crate::state::{AppState, Page};
use crate::ui::home::{resolve_gallery, GalleryImage};
use crate::ui::{dashboard, home, panels};

// ---------------------------------------------------------------------------
// Process-wide context
// ---------------------------------------------------------------------------

/// Long-lived resources shared by every frame: settings and the table cache.
pub struct AppContext {
    pub config: AppConfig,
    pub tables: TableCache<FileSource>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let tables = TableCache::new(FileSource::new(config.data_path.clone()));
        Self { config, tables }
    }
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PlantHealthApp {
    pub context: AppContext,
    pub state: AppState,
    gallery: Vec<GalleryImage>,
}

impl PlantHealthApp {
    pub fn new(config: AppConfig) -> Self {
        let context = AppContext::new(config);
        let mut state = AppState::new(context.config.top_diseases);

        match context.tables.get() {
            Ok(table) => state.set_table(table),
            Err(e) => state.set_load_error(&e),
        }

        let gallery = resolve_gallery(context.config.gallery_paths());

        Self {
            context,
            state,
            gallery,
        }
    }
}

impl eframe::App for PlantHealthApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: navigation ----
        let source = self.context.tables.source().describe();
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &source);
        });

        // ---- Left side panel: filters (dashboard only) ----
        if self.state.page == Page::Dashboard {
            egui::SidePanel::left("filter_panel")
                .default_width(220.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::side_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel: current page ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::Home => home::home_page(ui, &self.gallery),
            Page::Dashboard => dashboard::dashboard_page(ui, &self.state),
        });
    }
}
