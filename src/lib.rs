pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod schema;
pub mod selection;
pub mod server;
pub mod views;
mod visualization;

pub use config::DashboardConfig;
pub use dashboard::{ChartUpdate, Dashboard, DropdownOption};
pub use dataset::{CountryRecord, Dataset};
pub use error::DashError;
pub use selection::Selection;
pub use visualization::{render_page, PageConfig};
