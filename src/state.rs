use std::sync::Arc;

use crate::analytics::metrics::{Summary, TOP_DISEASES};
use crate::analytics::series::ChartSeries;
use crate::color::StatusPalette;
use crate::data::filter::{apply, toggle, FilterSelection};
use crate::data::loader::DataLoadError;
use crate::data::model::{Observation, ObservationTable, Status};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which page the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Dashboard,
}

/// One of the three filterable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Crop,
    Status,
    Region,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub page: Page,

    /// Loaded table (None until loaded, or when loading failed).
    pub table: Option<Arc<ObservationTable>>,

    /// Current crop / status / region selection.
    pub selection: FilterSelection,

    /// Indices of rows passing the current selection.
    pub visible_indices: Vec<usize>,

    /// Metrics and aggregates for the visible rows.
    pub summary: Summary,

    /// Chart series derived from `summary`.
    pub charts: ChartSeries,

    pub status_palette: StatusPalette,

    /// Number of bars in the disease alert chart.
    pub top_diseases: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TOP_DISEASES)
    }
}

impl AppState {
    pub fn new(top_diseases: usize) -> Self {
        Self {
            page: Page::default(),
            table: None,
            selection: FilterSelection::default(),
            visible_indices: Vec::new(),
            summary: Summary::default(),
            charts: ChartSeries::default(),
            status_palette: StatusPalette::default(),
            top_diseases,
            status_message: None,
        }
    }

    /// Ingest the loaded table, initialise filters and colours.
    pub fn set_table(&mut self, table: Arc<ObservationTable>) {
        self.selection = FilterSelection::defaults_for(&table);
        self.status_palette = StatusPalette::new(table.statuses());
        self.table = Some(table);
        self.status_message = None;
        self.refilter();
    }

    pub fn set_load_error(&mut self, err: &DataLoadError) {
        self.table = None;
        self.status_message = Some(format!("Error: {err}"));
        self.visible_indices.clear();
        self.summary = Summary::default();
        self.charts = ChartSeries::default();
    }

    /// Recompute the view, metrics and chart series from scratch.
    pub fn refilter(&mut self) {
        let Some(table) = &self.table else {
            return;
        };
        let view = apply(table, &self.selection);
        self.summary = Summary::compute(&view, self.top_diseases);
        self.charts = ChartSeries::prepare(&self.summary);
        log::debug!("Refiltered: {} of {} rows visible", view.len(), table.len());
        self.visible_indices = view.into_indices();
    }

    /// All values available for a column, in first-seen order.
    ///
    /// The default statuses are always offered, even when absent from the
    /// data.
    pub fn options(&self, field: FilterField) -> Vec<String> {
        let Some(table) = &self.table else {
            return Vec::new();
        };
        match field {
            FilterField::Crop => table.crops().to_vec(),
            FilterField::Region => table.regions().to_vec(),
            FilterField::Status => {
                let mut statuses: Vec<Status> = FilterSelection::default_statuses()
                    .into_iter()
                    .collect();
                for status in table.statuses() {
                    if !statuses.contains(status) {
                        statuses.push(status.clone());
                    }
                }
                statuses.iter().map(|s| s.to_string()).collect()
            }
        }
    }

    pub fn is_selected(&self, field: FilterField, value: &str) -> bool {
        match field {
            FilterField::Crop => self.selection.crops.contains(value),
            FilterField::Region => self.selection.regions.contains(value),
            FilterField::Status => self.selection.statuses.contains(&Status::parse(value)),
        }
    }

    /// Number of selected values for a column.
    pub fn selected_count(&self, field: FilterField) -> usize {
        match field {
            FilterField::Crop => self.selection.crops.len(),
            FilterField::Region => self.selection.regions.len(),
            FilterField::Status => self.selection.statuses.len(),
        }
    }

    /// Toggle a single value in a column's selection.
    pub fn toggle_value(&mut self, field: FilterField, value: &str) {
        match field {
            FilterField::Crop => toggle(&mut self.selection.crops, &value.to_string()),
            FilterField::Region => toggle(&mut self.selection.regions, &value.to_string()),
            FilterField::Status => toggle(&mut self.selection.statuses, &Status::parse(value)),
        }
        self.refilter();
    }

    /// Select all values in a column.
    pub fn select_all(&mut self, field: FilterField) {
        let options = self.options(field);
        match field {
            FilterField::Crop => self.selection.crops = options.into_iter().collect(),
            FilterField::Region => self.selection.regions = options.into_iter().collect(),
            FilterField::Status => {
                self.selection.statuses = options.iter().map(|s| Status::parse(s)).collect()
            }
        }
        self.refilter();
    }

    /// Deselect all values in a column.
    pub fn select_none(&mut self, field: FilterField) {
        match field {
            FilterField::Crop => self.selection.crops.clear(),
            FilterField::Region => self.selection.regions.clear(),
            FilterField::Status => self.selection.statuses.clear(),
        }
        self.refilter();
    }

    /// Visible rows for the data table: status descending, source order
    /// within equal status.
    pub fn table_rows(&self) -> Vec<&Observation> {
        let Some(table) = &self.table else {
            return Vec::new();
        };
        let mut rows: Vec<&Observation> = self
            .visible_indices
            .iter()
            .filter_map(|&i| table.get(i))
            .collect();
        rows.sort_by(|a, b| b.status.as_str().cmp(a.status.as_str()));
        rows
    }
}
