/// Visualization module: the dashboard page.
///
/// Produces a self-contained HTML string with inline JS that handles:
/// - The multi-select country dropdown (selection is kept client-side)
/// - SVG rendering of both chart descriptions
/// - Posting the selection on every change and redrawing both charts
///
/// All SVG rendering is done client-side by dashboard.js. This module
/// serializes the initial charts and dropdown options to JSON and emits the
/// HTML shell.
use serde::Serialize;

use crate::dashboard::{ChartUpdate, Dashboard, DropdownOption};
use crate::error::DashError;

const DASHBOARD_JS: &str = include_str!("dashboard.js");

pub const MEDIAN_AGE_GRAPH_ID: &str = "median_age_graph";
pub const AGE_GRAPH_ID: &str = "age_graph";
pub const COUNTRY_DROPDOWN_ID: &str = "country_dropdown";
pub const CHARTS_ENDPOINT: &str = "/api/charts";

// ── Config ──────────────────────────────────────────────────────────────────

/// Configuration for the dashboard page.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Document title shown by the browser
    pub page_title: String,
    /// Page background color
    pub background: String,
    /// Dropdown width as a percentage of the page (centred)
    pub dropdown_width_pct: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_title: "Median Age and Age Distribution by Country".to_string(),
            background: "#eeeeee".to_string(),
            dropdown_width_pct: 50,
        }
    }
}

// ── Client bootstrap ────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientConfig<'a> {
    median_age_id: &'a str,
    age_id: &'a str,
    dropdown_id: &'a str,
    endpoint: &'a str,
    options: &'a [DropdownOption],
    selection: &'a [String],
    charts: &'a ChartUpdate,
}

// ── HTML generation ─────────────────────────────────────────────────────────

/// Main entry point: generates the dashboard page for the empty selection.
pub fn render_page(dashboard: &Dashboard, config: &PageConfig) -> Result<String, DashError> {
    let options = dashboard.dropdown_options();
    let charts = dashboard.initial()?;

    let client = ClientConfig {
        median_age_id: MEDIAN_AGE_GRAPH_ID,
        age_id: AGE_GRAPH_ID,
        dropdown_id: COUNTRY_DROPDOWN_ID,
        endpoint: CHARTS_ENDPOINT,
        options: &options,
        selection: &[],
        charts: &charts,
    };

    let margin = (100 - config.dropdown_width_pct.min(100)) / 2;

    let html = format!(
        r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
    body {{ margin: 0; background-color: {background}; font-family: Palatino, serif; }}
    .graph {{ width: 100%; min-height: 450px; }}
    .dropdown {{ width: {width}%; margin-left: {margin}%; }}
    .dropdown select {{ width: 100%; padding: 6px; font-size: 14px; }}
    .chip {{ display: inline-block; margin: 2px; padding: 2px 6px; border: 1px solid #c2e0ff;
             border-radius: 2px; background: #ebf5ff; font-size: 13px; }}
    .chip a {{ cursor: pointer; color: #007eff; }}
  </style>
</head>
<body>
  <div id="{median_id}" class="graph"></div>
  <div class="dropdown">
    <div id="{dropdown_id}-chips"></div>
    <select id="{dropdown_id}"></select>
  </div>
  <div id="{age_id}" class="graph"></div>
<script>
{dashboard_js}
AgeDashboard.create({client_json});
</script>
</body>
</html>
"##,
        title = escape_html(&config.page_title),
        background = escape_html(&config.background),
        width = config.dropdown_width_pct.min(100),
        margin = margin,
        median_id = MEDIAN_AGE_GRAPH_ID,
        age_id = AGE_GRAPH_ID,
        dropdown_id = COUNTRY_DROPDOWN_ID,
        dashboard_js = DASHBOARD_JS,
        client_json = script_json(&client)?,
    );

    Ok(html)
}

// ── Escaping helpers ────────────────────────────────────────────────────────

/// JSON safe to inline in a <script> element.
fn script_json<T: Serialize>(value: &T) -> Result<String, DashError> {
    Ok(serde_json::to_string(value)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{CountryRecord, Dataset};

    fn dashboard() -> Dashboard {
        Dashboard::new(
            Dataset::from_records(vec![
                CountryRecord::new("Bosnia & Herzegovina", 43.3, [13.4, 11.6, 45.3, 14.0, 15.7]),
                CountryRecord::new("Angola", 15.9, [47.8, 19.5, 27.1, 3.1, 2.5]),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn page_contains_regions_and_script() {
        let html = render_page(&dashboard(), &PageConfig::default()).unwrap();
        assert!(html.contains(r#"id="median_age_graph""#));
        assert!(html.contains(r#"id="age_graph""#));
        assert!(html.contains(r#"<select id="country_dropdown">"#));
        assert!(html.contains("AgeDashboard.create("));
        assert!(html.contains("background-color: #eeeeee"));
        assert!(html.contains("width: 50%; margin-left: 25%"));
    }

    #[test]
    fn median_chart_region_comes_before_dropdown_and_age_chart() {
        let html = render_page(&dashboard(), &PageConfig::default()).unwrap();
        let median = html.find(r#"id="median_age_graph""#).unwrap();
        let dropdown = html.find(r#"<select id="country_dropdown""#).unwrap();
        let age = html.find(r#"id="age_graph""#).unwrap();
        assert!(median < dropdown && dropdown < age);
    }

    #[test]
    fn embedded_json_is_script_safe() {
        let html = render_page(&dashboard(), &PageConfig::default()).unwrap();
        assert!(html.contains(r#""value":"Bosnia \u0026 Herzegovina""#));
        assert!(!html.contains("Bosnia & Herzegovina"));
        assert!(html.contains("Median Age by Country: "));
    }

    #[test]
    fn script_json_escapes_closing_tags() {
        let s = script_json(&"</script>").unwrap();
        assert!(!s.contains("</"));
    }

    #[test]
    fn escape_html_handles_markup() {
        assert_eq!(escape_html(r#"<a href="x">&"#), "&lt;a href=&quot;x&quot;&gt;&amp;");
    }
}
