use crate::color::ColorMap;
use crate::data::filter::FilterSelection;
use crate::data::loader::LoadError;
use crate::data::model::FilterField;
use crate::data::store::DataStore;
use crate::data::view::DataView;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Source data, read once at startup (None if that load failed).
    pub store: Option<DataStore>,

    /// Fatal load failure shown instead of chart and table.
    pub load_error: Option<LoadError>,

    /// Current per-field filter selections.
    pub selection: FilterSelection,

    /// Filter + aggregate result for `selection` (cached).
    pub view: DataView,

    /// Colour per sex category for the chart series.
    pub color_map: ColorMap,
}

impl AppState {
    /// Build the state from the outcome of the startup load.
    pub fn new(loaded: Result<DataStore, LoadError>) -> Self {
        match loaded {
            Ok(store) => {
                let color_map = store
                    .dataset()
                    .unique_values
                    .get(&FilterField::Sex)
                    .map(ColorMap::new)
                    .unwrap_or_else(|| ColorMap::new(&Default::default()));
                let selection = FilterSelection::default();
                let view = DataView::evaluate(store.dataset(), &selection);
                Self {
                    store: Some(store),
                    load_error: None,
                    selection,
                    view,
                    color_map,
                }
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e}");
                Self {
                    store: None,
                    load_error: Some(e),
                    selection: FilterSelection::default(),
                    view: DataView::NoData,
                    color_map: ColorMap::new(&Default::default()),
                }
            }
        }
    }

    /// Recompute `view` after a selection change.
    pub fn refilter(&mut self) {
        if let Some(store) = &self.store {
            self.view = DataView::evaluate(store.dataset(), &self.selection);
        }
    }

    /// Flip one value of a field's selection.
    pub fn toggle_filter_value(&mut self, field: FilterField, value: &str) {
        self.selection.get_mut(field).toggle(value);
        self.refilter();
    }

    /// Turn a field's "All" option on or off.
    pub fn set_all(&mut self, field: FilterField, all: bool) {
        self.selection.get_mut(field).set_all(all);
        self.refilter();
    }

    /// Back to "All" for every field.
    pub fn reset_filters(&mut self) {
        self.selection = FilterSelection::default();
        self.refilter();
    }

    pub fn total_records(&self) -> usize {
        self.store.as_ref().map_or(0, |s| s.dataset().len())
    }
}
