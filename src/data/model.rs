use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Required logical fields
// ---------------------------------------------------------------------------

pub const STATE_OF_RESIDENCE: &str = "state_of_residence";
pub const MONTH: &str = "month";
pub const MONTH_CODE: &str = "month_code";
pub const YEAR_CODE: &str = "year_code";
pub const SEX_OF_INFANT: &str = "sex_of_infant";
pub const BIRTHS: &str = "births";

/// Logical fields every input file must carry after label normalization.
pub const REQUIRED_FIELDS: [&str; 6] = [
    STATE_OF_RESIDENCE,
    MONTH,
    MONTH_CODE,
    YEAR_CODE,
    SEX_OF_INFANT,
    BIRTHS,
];

// ---------------------------------------------------------------------------
// FilterField – the three categorical fields a user can filter on
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterField {
    State,
    Month,
    Sex,
}

impl FilterField {
    /// Display order in the side panel.
    pub const ALL: [FilterField; 3] = [FilterField::State, FilterField::Month, FilterField::Sex];

    /// Selector caption shown above the value list.
    pub fn label(self) -> &'static str {
        match self {
            FilterField::State => "Select State",
            FilterField::Month => "Select Month",
            FilterField::Sex => "Select Gender",
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            FilterField::State => STATE_OF_RESIDENCE,
            FilterField::Month => MONTH,
            FilterField::Sex => SEX_OF_INFANT,
        }
    }

    /// The record's value for this field.
    pub fn value_of(self, record: &BirthRecord) -> &str {
        match self {
            FilterField::State => &record.state_of_residence,
            FilterField::Month => &record.month,
            FilterField::Sex => &record.sex_of_infant,
        }
    }
}

// ---------------------------------------------------------------------------
// BirthRecord – one row of the source file
// ---------------------------------------------------------------------------

/// One row of the natality file. Categorical cells are kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthRecord {
    pub state_of_residence: String,
    pub month: String,
    pub month_code: String,
    pub year_code: String,
    pub sex_of_infant: String,
    /// Always a number once the loader has accepted the row.
    pub births: f64,
}

// ---------------------------------------------------------------------------
// NatalityDataset – an ordered, immutable collection of records
// ---------------------------------------------------------------------------

/// Records sharing one column schema, with pre-computed option lists for the
/// filterable fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NatalityDataset {
    /// Rows in source order.
    pub records: Vec<BirthRecord>,
    /// Normalized column labels observed in the source header.
    pub columns: Vec<String>,
    /// For each filterable field the sorted set of distinct values.
    pub unique_values: BTreeMap<FilterField, BTreeSet<String>>,
}

impl NatalityDataset {
    /// Build option indices from the loaded records.
    pub fn from_records(records: Vec<BirthRecord>, columns: Vec<String>) -> Self {
        let mut unique_values: BTreeMap<FilterField, BTreeSet<String>> = FilterField::ALL
            .iter()
            .map(|field| (*field, BTreeSet::new()))
            .collect();

        for record in &records {
            for field in FilterField::ALL {
                unique_values
                    .entry(field)
                    .or_default()
                    .insert(field.value_of(record).to_string());
            }
        }

        NatalityDataset {
            records,
            columns,
            unique_values,
        }
    }

    /// A new dataset holding the records at `indices`, in the given order.
    pub fn subset(&self, indices: &[usize]) -> Self {
        let records = indices
            .iter()
            .filter_map(|&i| self.records.get(i).cloned())
            .collect();
        Self::from_records(records, self.columns.clone())
    }

    /// Sorted distinct values of a filterable field.
    pub fn options(&self, field: FilterField) -> impl Iterator<Item = &str> {
        self.unique_values
            .get(&field)
            .into_iter()
            .flat_map(|values| values.iter().map(String::as_str))
    }

    pub fn total_births(&self) -> f64 {
        self.records.iter().map(|r| r.births).sum()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn record(state: &str, month: &str, sex: &str, births: f64) -> BirthRecord {
    BirthRecord {
        state_of_residence: state.to_string(),
        month: month.to_string(),
        month_code: "1".to_string(),
        year_code: "2025".to_string(),
        sex_of_infant: sex.to_string(),
        births,
    }
}

#[cfg(test)]
pub(crate) fn dataset(records: Vec<BirthRecord>) -> NatalityDataset {
    let columns = REQUIRED_FIELDS.iter().map(|c| c.to_string()).collect();
    NatalityDataset::from_records(records, columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_are_sorted_and_distinct() {
        let ds = dataset(vec![
            record("TX", "Jan", "M", 1.0),
            record("CA", "Feb", "F", 2.0),
            record("TX", "Jan", "F", 3.0),
        ]);

        let states: Vec<&str> = ds.options(FilterField::State).collect();
        assert_eq!(states, vec!["CA", "TX"]);
        let sexes: Vec<&str> = ds.options(FilterField::Sex).collect();
        assert_eq!(sexes, vec!["F", "M"]);
    }

    #[test]
    fn empty_dataset_still_lists_every_field() {
        let ds = dataset(Vec::new());
        assert!(ds.is_empty());
        for field in FilterField::ALL {
            assert_eq!(ds.options(field).count(), 0);
        }
    }

    #[test]
    fn subset_preserves_requested_order() {
        let ds = dataset(vec![
            record("AL", "Jan", "M", 1.0),
            record("AK", "Jan", "M", 2.0),
            record("AZ", "Jan", "M", 3.0),
        ]);
        let sub = ds.subset(&[0, 2]);
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.records[0].state_of_residence, "AL");
        assert_eq!(sub.records[1].state_of_residence, "AZ");
        assert_eq!(sub.columns, ds.columns);
        assert_eq!(sub.total_births(), 4.0);
    }
}
