use std::collections::BTreeMap;

use super::model::NatalityDataset;

/// Summed births for one (state, sex) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub state: String,
    pub sex: String,
    pub total_births: f64,
}

/// Group by (state, sex) and sum births, ordered by state then sex.
pub fn births_by_state_and_sex(dataset: &NatalityDataset) -> Vec<AggregateRow> {
    let mut groups: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for record in &dataset.records {
        *groups
            .entry((record.state_of_residence.as_str(), record.sex_of_infant.as_str()))
            .or_insert(0.0) += record.births;
    }

    groups
        .into_iter()
        .map(|((state, sex), total_births)| AggregateRow {
            state: state.to_string(),
            sex: sex.to_string(),
            total_births,
        })
        .collect()
}

/// Per-state totals across all sexes, largest first (ties by state name).
pub fn state_totals_descending(rows: &[AggregateRow]) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.state.as_str()).or_insert(0.0) += row.total_births;
    }

    let mut ordered: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(state, total)| (state.to_string(), total))
        .collect();
    // Stable sort keeps the alphabetical order from the map for equal totals.
    ordered.sort_by(|a, b| b.1.total_cmp(&a.1));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{dataset, record};

    fn row(state: &str, sex: &str, total: f64) -> AggregateRow {
        AggregateRow {
            state: state.to_string(),
            sex: sex.to_string(),
            total_births: total,
        }
    }

    #[test]
    fn groups_and_sorts_by_state() {
        let ds = dataset(vec![
            record("TX", "Jan", "M", 50.0),
            record("CA", "Jan", "M", 100.0),
            record("CA", "Jan", "F", 90.0),
        ]);

        assert_eq!(
            births_by_state_and_sex(&ds),
            vec![row("CA", "F", 90.0), row("CA", "M", 100.0), row("TX", "M", 50.0)]
        );
    }

    #[test]
    fn sums_records_sharing_a_group() {
        let ds = dataset(vec![
            record("CA", "Jan", "M", 100.0),
            record("CA", "Feb", "M", 25.0),
            record("CA", "Mar", "M", 5.0),
        ]);
        assert_eq!(births_by_state_and_sex(&ds), vec![row("CA", "M", 130.0)]);
    }

    #[test]
    fn totals_match_the_input_exactly() {
        let records: Vec<_> = (0..200)
            .map(|i| {
                let state = ["AL", "AK", "AZ", "AR", "CA"][i % 5];
                let sex = if i % 3 == 0 { "F" } else { "M" };
                let odd = if i % 7 == 0 { "U" } else { sex };
                record(state, "Jan", odd, (i * 37 % 1000) as f64)
            })
            .collect();
        let ds = dataset(records);

        let rows = births_by_state_and_sex(&ds);
        let aggregated: f64 = rows.iter().map(|r| r.total_births).sum();
        assert_eq!(aggregated, ds.total_births());
        assert!(rows.iter().any(|r| r.sex == "U"));
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(births_by_state_and_sex(&dataset(Vec::new())).is_empty());
    }

    #[test]
    fn state_totals_order_by_descending_total() {
        let rows = vec![
            row("CA", "F", 90.0),
            row("CA", "M", 100.0),
            row("NV", "M", 50.0),
            row("TX", "F", 300.0),
            row("AZ", "M", 50.0),
        ];
        let totals = state_totals_descending(&rows);
        assert_eq!(
            totals,
            vec![
                ("TX".to_string(), 300.0),
                ("CA".to_string(), 190.0),
                ("AZ".to_string(), 50.0),
                ("NV".to_string(), 50.0),
            ]
        );
    }
}
