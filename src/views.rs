//! View functions: pure maps from (dataset, selection) to chart descriptions.
//!
//! Names in the selection that are not in the dataset contribute no series;
//! an empty selection yields only the background series.

use tracing::info;

use crate::chart::{
    Axis, BarMode, BarSeries, ChartDescription, Font, HoverLabel, Layout, Marker, ScatterMode,
    ScatterSeries, Series, TextPosition,
};
use crate::dataset::Dataset;
use crate::error::DashError;
use crate::schema::age_bracket;
use crate::selection::Selection;

pub const MEDIAN_AGE_TITLE: &str = "Median Age by Country: ";
pub const AGE_DISTRIBUTION_TITLE: &str = "Age Distribution by Country: ";

const FONT_FAMILY: &str = "Palatino";
const BACKGROUND: &str = "#eeeeee";
const BACKGROUND_MARKER: &str = "#bbbbbb";
const HOVER_FONT_SIZE: u32 = 20;
const HIGHLIGHT_MARKER_SIZE: f64 = 15.0;
const PLACEHOLDER_BAR_WIDTH: f64 = 0.1;

// ── Median age scatter ──────────────────────────────────────────────────────

/// Scatter of every country's median age (gray, unlabeled) with one
/// highlighted single-point series per selected country, in name order.
pub fn median_age_chart(
    dataset: &Dataset,
    selection: &Selection,
) -> Result<ChartDescription, DashError> {
    info!(countries = ?selection, "median age chart");

    let background = Series::Scatter(ScatterSeries {
        name: String::new(),
        x: dataset.records().iter().map(|r| r.country.clone()).collect(),
        y: dataset.records().iter().map(|r| r.median_age).collect(),
        mode: ScatterMode::Markers,
        show_legend: false,
        legend_group: Some("one".to_string()),
        marker: Marker {
            color: Some(BACKGROUND_MARKER.to_string()),
            size: None,
        },
        hover_label: Some(HoverLabel {
            font: Font::size(HOVER_FONT_SIZE),
        }),
    });

    let highlights = selection
        .sorted()
        .into_iter()
        .filter_map(|name| dataset.get(name))
        .map(|record| {
            Series::Scatter(ScatterSeries {
                name: record.country.clone(),
                x: vec![record.country.clone()],
                y: vec![record.median_age],
                mode: ScatterMode::Markers,
                show_legend: true,
                legend_group: None,
                marker: Marker {
                    color: None,
                    size: Some(HIGHLIGHT_MARKER_SIZE),
                },
                hover_label: Some(HoverLabel {
                    font: Font::size(HOVER_FONT_SIZE),
                }),
            })
        });

    let series = std::iter::once(background).chain(highlights).collect();

    let layout = Layout {
        title: format!("{}{}", MEDIAN_AGE_TITLE, selection.joined()),
        x_axis: Axis::titled("Countries").without_tick_labels(),
        y_axis: Axis::titled("Median Age"),
        font: Font::family(FONT_FAMILY),
        bar_mode: None,
        paper_bgcolor: BACKGROUND.to_string(),
        plot_bgcolor: BACKGROUND.to_string(),
    };

    ChartDescription::new(series, layout)
}

// ── Age distribution bars ───────────────────────────────────────────────────

/// Grouped bars of age-bracket percentages, one group member per selected
/// country in name order.
///
/// The title lists the selection in pick order while the bars are sorted.
pub fn age_distribution_chart(
    dataset: &Dataset,
    selection: &Selection,
) -> Result<ChartDescription, DashError> {
    let brackets: Vec<String> = age_bracket::ALL.iter().map(|b| b.to_string()).collect();

    // Zero-height bar keeps the bracket axis in place when nothing is selected.
    let placeholder = Series::Bar(BarSeries {
        name: String::new(),
        x: brackets.clone(),
        y: vec![0.0; age_bracket::COUNT],
        text: Vec::new(),
        show_legend: false,
        width: Some(PLACEHOLDER_BAR_WIDTH),
        hover_info: "none".to_string(),
        text_position: None,
        text_font: None,
    });

    let mut matched: Vec<_> = dataset
        .records()
        .iter()
        .filter(|r| selection.contains(&r.country))
        .collect();
    matched.sort_by(|a, b| a.country.cmp(&b.country));

    let bars = matched.into_iter().map(|record| {
        Series::Bar(BarSeries {
            name: record.country.clone(),
            x: brackets.clone(),
            y: record.age_percentages.to_vec(),
            text: record
                .age_percentages
                .iter()
                .map(|p| format_percentage(*p))
                .collect(),
            show_legend: true,
            width: None,
            hover_info: "name+y".to_string(),
            text_position: Some(TextPosition::Inside),
            text_font: Some(Font::color("white")),
        })
    });

    let series = std::iter::once(placeholder).chain(bars).collect();

    let layout = Layout {
        title: format!("{}{}", AGE_DISTRIBUTION_TITLE, selection.joined()),
        x_axis: Axis::titled("Age Group Percentage"),
        y_axis: Axis::titled("Percentage"),
        font: Font::family(FONT_FAMILY),
        bar_mode: Some(BarMode::Group),
        paper_bgcolor: BACKGROUND.to_string(),
        plot_bgcolor: BACKGROUND.to_string(),
    };

    ChartDescription::new(series, layout)
}

/// Bar label for a percentage: whole numbers keep one decimal ("30.0%"),
/// everything else prints its shortest exact form ("25.37%").
pub fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}%", value)
    } else {
        format!("{}%", value)
    }
}
