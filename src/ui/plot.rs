use std::collections::{BTreeSet, HashMap};

use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::ColorMap;
use crate::config::CHART_HEIGHT;
use crate::data::aggregate::{state_totals_descending, AggregateRow};

/// Share of each state's slot taken up by its group of bars.
const GROUP_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Chart model: where every bar goes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBar {
    pub state: String,
    /// Bar centre on the x axis.
    pub x: f64,
    pub total_births: f64,
}

/// One coloured series: all bars for a single sex.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub sex: String,
    pub bars: Vec<PlacedBar>,
}

/// Bars grouped by state, states ordered by descending total.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBars {
    /// State label for slot `i` (centred on `x = i`).
    pub states: Vec<String>,
    pub series: Vec<BarSeries>,
    pub bar_width: f64,
}

impl GroupedBars {
    pub fn from_aggregates(rows: &[AggregateRow]) -> Self {
        let states: Vec<String> = state_totals_descending(rows)
            .into_iter()
            .map(|(state, _)| state)
            .collect();
        let slot: HashMap<&str, usize> = states
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_str(), i))
            .collect();

        let sexes: BTreeSet<&str> = rows.iter().map(|r| r.sex.as_str()).collect();
        let n = sexes.len().max(1) as f64;
        let bar_width = GROUP_WIDTH / n;

        let series = sexes
            .iter()
            .enumerate()
            .map(|(j, &sex)| {
                let offset = (j as f64 - (n - 1.0) / 2.0) * bar_width;
                let mut bars: Vec<PlacedBar> = rows
                    .iter()
                    .filter(|r| r.sex == sex)
                    .filter_map(|r| {
                        let i = *slot.get(r.state.as_str())?;
                        Some(PlacedBar {
                            state: r.state.clone(),
                            x: i as f64 + offset,
                            total_births: r.total_births,
                        })
                    })
                    .collect();
                bars.sort_by(|a, b| a.x.total_cmp(&b.x));
                BarSeries {
                    sex: sex.to_string(),
                    bars,
                }
            })
            .collect();

        GroupedBars {
            states,
            series,
            bar_width,
        }
    }

    /// Axis label for a tick position; only whole slots get a label.
    pub fn label_at(&self, x: f64) -> Option<&str> {
        let slot = x.round();
        if slot < 0.0 || (x - slot).abs() > 1e-6 {
            return None;
        }
        self.states.get(slot as usize).map(String::as_str)
    }

    /// Legend entries under the "Gender" title, in series order.
    pub fn legend(&self, colors: &ColorMap) -> Vec<(&str, Color32)> {
        self.series
            .iter()
            .map(|s| (s.sex.as_str(), colors.color_for(&s.sex)))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Births chart (central panel)
// ---------------------------------------------------------------------------

/// Render the grouped "births by state and gender" bar chart.
pub fn births_chart(ui: &mut Ui, rows: &[AggregateRow], colors: &ColorMap) {
    let model = GroupedBars::from_aggregates(rows);

    ui.label(RichText::new("Total Births by State and Gender").strong());

    // egui_plot legends carry no title, so the title and swatches sit above the plot.
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Gender");
        for (sex, color) in model.legend(colors) {
            ui.label(RichText::new(format!("■ {sex}")).color(color));
        }
    });

    let axis = model.clone();
    Plot::new("births_chart")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("State")
        .y_axis_label("Total Births")
        .x_axis_formatter(move |mark, _range| {
            axis.label_at(mark.value).unwrap_or_default().to_string()
        })
        .include_y(0.0)
        .include_x(-0.5)
        .include_x(model.states.len() as f64 - 0.5)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &model.series {
                let color = colors.color_for(&series.sex);
                let bars: Vec<Bar> = series
                    .bars
                    .iter()
                    .map(|b| {
                        Bar::new(b.x, b.total_births)
                            .width(model.bar_width)
                            .name(format!("{} · {}", b.state, series.sex))
                            .fill(color)
                    })
                    .collect();

                let chart = BarChart::new(bars).name(&series.sex).color(color);
                plot_ui.bar_chart(chart);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(state: &str, sex: &str, total: f64) -> AggregateRow {
        AggregateRow {
            state: state.to_string(),
            sex: sex.to_string(),
            total_births: total,
        }
    }

    #[test]
    fn states_are_ordered_by_descending_total() {
        let rows = vec![row("CA", "F", 90.0), row("CA", "M", 100.0), row("TX", "M", 500.0)];
        let model = GroupedBars::from_aggregates(&rows);
        assert_eq!(model.states, vec!["TX", "CA"]);
        assert_eq!(model.label_at(0.0), Some("TX"));
        assert_eq!(model.label_at(1.0), Some("CA"));
        assert_eq!(model.label_at(0.5), None);
        assert_eq!(model.label_at(2.0), None);
        assert_eq!(model.label_at(-1.0), None);
    }

    #[test]
    fn one_series_per_sex_side_by_side() {
        let rows = vec![row("CA", "F", 90.0), row("CA", "M", 100.0), row("TX", "M", 50.0)];
        let model = GroupedBars::from_aggregates(&rows);

        assert_eq!(model.bar_width, 0.4);
        let names: Vec<&str> = model.series.iter().map(|s| s.sex.as_str()).collect();
        assert_eq!(names, vec!["F", "M"]);

        let female = &model.series[0];
        assert_eq!(female.bars.len(), 1);
        assert!((female.bars[0].x - (-0.2)).abs() < 1e-9);

        let male = &model.series[1];
        let xs: Vec<f64> = male.bars.iter().map(|b| b.x).collect();
        assert_eq!(male.bars[0].state, "CA");
        assert!((xs[0] - 0.2).abs() < 1e-9);
        assert!((xs[1] - 1.2).abs() < 1e-9);
    }

    #[test]
    fn legend_lists_sexes_by_value_with_their_colours() {
        let rows = vec![row("CA", "M", 100.0), row("CA", "F", 90.0)];
        let model = GroupedBars::from_aggregates(&rows);
        let sexes = ["F", "M"].iter().map(|s| s.to_string()).collect();
        let colors = ColorMap::new(&sexes);

        let legend = model.legend(&colors);
        let labels: Vec<&str> = legend.iter().map(|(sex, _)| *sex).collect();
        assert_eq!(labels, vec!["F", "M"]);
        assert_eq!(legend[0].1, colors.color_for("F"));
        assert_ne!(legend[0].1, legend[1].1);
    }

    #[test]
    fn chart_totals_match_aggregates() {
        let rows = vec![row("A", "F", 1.0), row("B", "M", 2.0), row("B", "U", 3.0)];
        let model = GroupedBars::from_aggregates(&rows);
        let plotted: f64 = model
            .series
            .iter()
            .flat_map(|s| s.bars.iter().map(|b| b.total_births))
            .sum();
        assert_eq!(plotted, 6.0);
    }
}
