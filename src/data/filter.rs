use std::collections::BTreeSet;

use super::model::{BirthRecord, FilterField, NatalityDataset};

// ---------------------------------------------------------------------------
// Selection: the state of one field's filter
// ---------------------------------------------------------------------------

/// What is selected for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No predicate for this field.
    #[default]
    AllValues,
    /// Keep only records whose value is in the set. An empty set keeps nothing.
    Subset(BTreeSet<String>),
}

impl Selection {
    pub fn subset<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::Subset(values.into_iter().map(Into::into).collect())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::AllValues)
    }

    /// Whether a record with `value` passes this field's filter.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::AllValues => true,
            Selection::Subset(values) => values.contains(value),
        }
    }

    /// Whether `value` is explicitly picked (never true under `AllValues`).
    pub fn is_picked(&self, value: &str) -> bool {
        match self {
            Selection::AllValues => false,
            Selection::Subset(values) => values.contains(value),
        }
    }

    /// Flip a single value. Picking a value while `AllValues` is active
    /// narrows the field to just that value.
    pub fn toggle(&mut self, value: &str) {
        match self {
            Selection::AllValues => *self = Selection::subset([value]),
            Selection::Subset(values) => {
                if !values.remove(value) {
                    values.insert(value.to_string());
                }
            }
        }
    }

    /// Switch the "All" option on (bypass) or off (empty subset).
    pub fn set_all(&mut self, all: bool) {
        *self = if all {
            Selection::AllValues
        } else {
            Selection::Subset(BTreeSet::new())
        };
    }
}

// ---------------------------------------------------------------------------
// FilterSelection: one Selection per filterable field
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub state: Selection,
    pub month: Selection,
    pub sex: Selection,
}

impl FilterSelection {
    pub fn get(&self, field: FilterField) -> &Selection {
        match field {
            FilterField::State => &self.state,
            FilterField::Month => &self.month,
            FilterField::Sex => &self.sex,
        }
    }

    pub fn get_mut(&mut self, field: FilterField) -> &mut Selection {
        match field {
            FilterField::State => &mut self.state,
            FilterField::Month => &mut self.month,
            FilterField::Sex => &mut self.sex,
        }
    }

    /// Builder-style setter.
    #[cfg(test)]
    pub fn with(mut self, field: FilterField, selection: Selection) -> Self {
        *self.get_mut(field) = selection;
        self
    }

    /// A record passes when every field's filter accepts it.
    pub fn matches(&self, record: &BirthRecord) -> bool {
        FilterField::ALL
            .iter()
            .all(|&field| self.get(field).matches(field.value_of(record)))
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Indices of records passing all active filters, in source order.
pub fn filtered_indices(dataset: &NatalityDataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| selection.matches(record))
        .map(|(i, _)| i)
        .collect()
}

/// A new dataset with only the passing records. May be empty.
pub fn apply_filters(dataset: &NatalityDataset, selection: &FilterSelection) -> NatalityDataset {
    dataset.subset(&filtered_indices(dataset, selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{dataset, record};

    fn sample() -> NatalityDataset {
        dataset(vec![
            record("CA", "Jan", "M", 100.0),
            record("CA", "Feb", "F", 90.0),
            record("TX", "Jan", "M", 50.0),
            record("CA", "Mar", "M", 10.0),
            record("TX", "Feb", "F", 20.0),
        ])
    }

    fn keys(ds: &NatalityDataset) -> Vec<(&str, &str, &str)> {
        ds.records
            .iter()
            .map(|r| (r.state_of_residence.as_str(), r.month.as_str(), r.sex_of_infant.as_str()))
            .collect()
    }

    #[test]
    fn default_selection_keeps_everything() {
        let ds = sample();
        let out = apply_filters(&ds, &FilterSelection::default());
        assert_eq!(out.records, ds.records);
    }

    #[test]
    fn multi_field_filter_ignores_month_when_all() {
        let ds = sample();
        let sel = FilterSelection::default()
            .with(FilterField::State, Selection::subset(["CA"]))
            .with(FilterField::Sex, Selection::subset(["M"]));

        let out = apply_filters(&ds, &sel);
        assert_eq!(keys(&out), vec![("CA", "Jan", "M"), ("CA", "Mar", "M")]);
    }

    #[test]
    fn unknown_value_yields_empty_result() {
        let ds = sample();
        let sel = FilterSelection::default().with(FilterField::State, Selection::subset(["NY"]));
        assert!(apply_filters(&ds, &sel).is_empty());
    }

    #[test]
    fn empty_subset_keeps_nothing() {
        let ds = sample();
        let mut sel = FilterSelection::default();
        sel.get_mut(FilterField::Month).set_all(false);
        assert!(filtered_indices(&ds, &sel).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = sample();
        let sel = FilterSelection::default()
            .with(FilterField::Month, Selection::subset(["Jan", "Feb"]))
            .with(FilterField::Sex, Selection::subset(["F"]));

        let once = apply_filters(&ds, &sel);
        let twice = apply_filters(&once, &sel);
        assert_eq!(once.records, twice.records);
    }

    #[test]
    fn all_values_equals_omitting_the_field() {
        let ds = sample();
        let narrowed =
            FilterSelection::default().with(FilterField::State, Selection::subset(["TX"]));
        let explicit_all = narrowed.clone().with(FilterField::Month, Selection::AllValues);

        assert_eq!(
            filtered_indices(&ds, &narrowed),
            filtered_indices(&ds, &explicit_all)
        );
        // Selecting every observed value matches "All" too.
        let every_state = Selection::subset(ds.options(FilterField::State));
        let all_listed = FilterSelection::default().with(FilterField::State, every_state);
        assert_eq!(filtered_indices(&ds, &all_listed), (0..ds.len()).collect::<Vec<_>>());
    }

    #[test]
    fn toggle_narrows_from_all_then_flips() {
        let mut sel = Selection::AllValues;
        sel.toggle("CA");
        assert_eq!(sel, Selection::subset(["CA"]));
        sel.toggle("TX");
        assert!(sel.is_picked("TX"));
        sel.toggle("CA");
        assert_eq!(sel, Selection::subset(["TX"]));
        sel.set_all(true);
        assert!(sel.is_all());
        assert!(!sel.is_picked("TX"));
        assert!(sel.matches("anything"));
    }
}
