use super::aggregate::{births_by_state_and_sex, AggregateRow};
use super::filter::{apply_filters, FilterSelection};
use super::model::NatalityDataset;

/// What the dashboard shows for one filter selection.
#[derive(Debug, Clone, PartialEq)]
pub enum DataView {
    /// The filters left nothing; chart and table are skipped.
    NoData,
    Populated {
        /// Row-level records backing the detail table.
        filtered: NatalityDataset,
        /// Grouped totals backing the chart.
        aggregates: Vec<AggregateRow>,
    },
}

impl DataView {
    /// Run filter → aggregate over the unfiltered dataset.
    pub fn evaluate(dataset: &NatalityDataset, selection: &FilterSelection) -> Self {
        let filtered = apply_filters(dataset, selection);
        log::debug!(
            "Selection {selection:?} keeps {} of {} records",
            filtered.len(),
            dataset.len()
        );

        if filtered.is_empty() {
            return DataView::NoData;
        }

        let aggregates = births_by_state_and_sex(&filtered);
        DataView::Populated {
            filtered,
            aggregates,
        }
    }

    pub fn visible_records(&self) -> usize {
        match self {
            DataView::NoData => 0,
            DataView::Populated { filtered, .. } => filtered.len(),
        }
    }
}
