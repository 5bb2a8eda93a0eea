//! Chart description: the declarative structure the view functions return
//! and the page renders.
//!
//! Serializes as `{"data": [series...], "layout": {...}}` with plotly-style
//! key names, which is what `dashboard.js` reads.

use serde::Serialize;

use crate::error::DashError;

// ── Styling ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Font {
    pub fn family(family: &str) -> Self {
        Self {
            family: Some(family.to_string()),
            ..Default::default()
        }
    }

    pub fn size(size: u32) -> Self {
        Self {
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn color(color: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverLabel {
    pub font: Font,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

// ── Series ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScatterMode {
    Markers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    Inside,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub mode: ScatterMode,
    #[serde(rename = "showlegend")]
    pub show_legend: bool,
    #[serde(rename = "legendgroup", skip_serializing_if = "Option::is_none")]
    pub legend_group: Option<String>,
    pub marker: Marker,
    #[serde(rename = "hoverlabel", skip_serializing_if = "Option::is_none")]
    pub hover_label: Option<HoverLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    /// Per-bar labels; empty means no labels.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(rename = "showlegend")]
    pub show_legend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(rename = "hoverinfo")]
    pub hover_info: String,
    #[serde(rename = "textposition", skip_serializing_if = "Option::is_none")]
    pub text_position: Option<TextPosition>,
    #[serde(rename = "textfont", skip_serializing_if = "Option::is_none")]
    pub text_font: Option<Font>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Series {
    Scatter(ScatterSeries),
    Bar(BarSeries),
}

impl Series {
    pub fn name(&self) -> &str {
        match self {
            Series::Scatter(s) => &s.name,
            Series::Bar(b) => &b.name,
        }
    }

    pub fn x(&self) -> &[String] {
        match self {
            Series::Scatter(s) => &s.x,
            Series::Bar(b) => &b.x,
        }
    }

    pub fn y(&self) -> &[f64] {
        match self {
            Series::Scatter(s) => &s.y,
            Series::Bar(b) => &b.y,
        }
    }

    pub fn show_legend(&self) -> bool {
        match self {
            Series::Scatter(s) => s.show_legend,
            Series::Bar(b) => b.show_legend,
        }
    }

    fn validate(&self) -> Result<(), DashError> {
        if self.x().len() != self.y().len() {
            return Err(DashError::Validation(format!(
                "Series '{}': {} x values but {} y values",
                self.name(),
                self.x().len(),
                self.y().len()
            )));
        }
        if let Some(v) = self.y().iter().find(|v| !v.is_finite()) {
            return Err(DashError::Validation(format!(
                "Series '{}': non-finite value {}",
                self.name(),
                v
            )));
        }
        if let Series::Bar(bar) = self {
            if !bar.text.is_empty() && bar.text.len() != bar.y.len() {
                return Err(DashError::Validation(format!(
                    "Series '{}': {} labels for {} bars",
                    bar.name,
                    bar.text.len(),
                    bar.y.len()
                )));
            }
        }
        Ok(())
    }
}

// ── Layout ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    pub zeroline: bool,
    #[serde(rename = "showticklabels")]
    pub show_tick_labels: bool,
}

impl Axis {
    /// Titled axis without a zero line.
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            zeroline: false,
            show_tick_labels: true,
        }
    }

    pub fn without_tick_labels(mut self) -> Self {
        self.show_tick_labels = false;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Group,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    #[serde(rename = "xaxis")]
    pub x_axis: Axis,
    #[serde(rename = "yaxis")]
    pub y_axis: Axis,
    pub font: Font,
    #[serde(rename = "barmode", skip_serializing_if = "Option::is_none")]
    pub bar_mode: Option<BarMode>,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
}

// ── Chart ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription {
    #[serde(rename = "data")]
    series: Vec<Series>,
    layout: Layout,
}

impl ChartDescription {
    /// Build a chart, rejecting empty series lists, mismatched x/y lengths,
    /// mismatched bar labels and non-finite values.
    pub fn new(series: Vec<Series>, layout: Layout) -> Result<Self, DashError> {
        if series.is_empty() {
            return Err(DashError::Validation(format!(
                "Chart '{}' has no series",
                layout.title
            )));
        }
        for s in &series {
            s.validate()?;
        }
        Ok(Self { series, layout })
    }

    pub fn title(&self) -> &str {
        &self.layout.title
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout {
            title: "t".into(),
            x_axis: Axis::titled("x"),
            y_axis: Axis::titled("y"),
            font: Font::family("Palatino"),
            bar_mode: None,
            paper_bgcolor: "#eeeeee".into(),
            plot_bgcolor: "#eeeeee".into(),
        }
    }

    fn bar(x: &[&str], y: &[f64], text: &[&str]) -> Series {
        Series::Bar(BarSeries {
            name: "b".into(),
            x: x.iter().map(|s| s.to_string()).collect(),
            y: y.to_vec(),
            text: text.iter().map(|s| s.to_string()).collect(),
            show_legend: true,
            width: None,
            hover_info: "name+y".into(),
            text_position: None,
            text_font: None,
        })
    }

    #[test]
    fn accepts_consistent_series() {
        let chart = ChartDescription::new(vec![bar(&["a", "b"], &[1.0, 2.0], &["1%", "2%"])], layout());
        assert!(chart.is_ok());
    }

    #[test]
    fn rejects_empty_chart() {
        assert!(matches!(
            ChartDescription::new(Vec::new(), layout()),
            Err(DashError::Validation(_))
        ));
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = ChartDescription::new(vec![bar(&["a", "b"], &[1.0], &[])], layout()).unwrap_err();
        assert!(err.to_string().contains("1 y values"));
    }

    #[test]
    fn rejects_label_mismatch() {
        let res = ChartDescription::new(vec![bar(&["a"], &[1.0], &["1%", "2%"])], layout());
        assert!(matches!(res, Err(DashError::Validation(_))));
    }

    #[test]
    fn rejects_non_finite_values() {
        let res = ChartDescription::new(vec![bar(&["a"], &[f64::INFINITY], &[])], layout());
        assert!(res.is_err());
    }

    #[test]
    fn serializes_with_plotly_keys() {
        let chart = ChartDescription::new(vec![bar(&["a"], &[1.0], &[])], layout()).unwrap();
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["data"][0]["type"], "bar");
        assert_eq!(json["data"][0]["showlegend"], true);
        assert!(json["data"][0].get("text").is_none());
        assert_eq!(json["layout"]["xaxis"]["zeroline"], false);
        assert_eq!(json["layout"]["font"]["family"], "Palatino");
        assert!(json["layout"].get("barmode").is_none());
    }
}
