use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::chart::ChartDescription;
use crate::dataset::Dataset;
use crate::error::DashError;
use crate::selection::Selection;
use crate::views;

/// One entry of the country dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Both charts, computed from the same selection snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartUpdate {
    pub median_age: ChartDescription,
    pub age_distribution: ChartDescription,
}

/// Presentation shell: owns the read-only dataset and dispatches selection
/// changes to the view functions.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
}

impl Dashboard {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Dropdown options, sorted by country name.
    pub fn dropdown_options(&self) -> Vec<DropdownOption> {
        self.dataset
            .country_names_sorted()
            .into_iter()
            .map(|name| DropdownOption {
                label: name.clone(),
                value: name,
            })
            .collect()
    }

    /// Recompute both charts for a new selection.
    ///
    /// The selection is taken by value: both views read the same snapshot.
    pub fn on_selection_changed(&self, selection: Selection) -> Result<ChartUpdate, DashError> {
        let unknown: Vec<&str> = selection
            .iter()
            .filter(|c| !self.dataset.contains(c))
            .collect();
        if !unknown.is_empty() {
            debug!(?unknown, "selection contains countries not in the dataset");
        }

        Ok(ChartUpdate {
            median_age: views::median_age_chart(&self.dataset, &selection)?,
            age_distribution: views::age_distribution_chart(&self.dataset, &selection)?,
        })
    }

    /// Charts for the initial, empty dropdown.
    pub fn initial(&self) -> Result<ChartUpdate, DashError> {
        self.on_selection_changed(Selection::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CountryRecord;

    fn dashboard() -> Dashboard {
        let even = [20.0; 5];
        Dashboard::new(
            Dataset::from_records(vec![
                CountryRecord::new("Uganda", 16.7, even),
                CountryRecord::new("Germany", 47.8, even),
                CountryRecord::new("India", 28.7, even),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn options_sorted_with_matching_label_and_value() {
        let opts = dashboard().dropdown_options();
        let values: Vec<&str> = opts.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Germany", "India", "Uganda"]);
        assert!(opts.iter().all(|o| o.label == o.value));
    }

    #[test]
    fn update_uses_one_selection_for_both_charts() {
        let sel: Selection = ["India", "Germany"].into_iter().collect();
        let update = dashboard().on_selection_changed(sel).unwrap();
        assert_eq!(update.median_age.title(), "Median Age by Country: India, Germany");
        assert_eq!(
            update.age_distribution.title(),
            "Age Distribution by Country: India, Germany"
        );
        assert_eq!(update.median_age.series().len(), 3);
        assert_eq!(update.age_distribution.series().len(), 3);
    }

    #[test]
    fn initial_update_is_background_only() {
        let update = dashboard().initial().unwrap();
        assert_eq!(update.median_age.series().len(), 1);
        assert_eq!(update.age_distribution.series().len(), 1);
    }

    #[test]
    fn unknown_countries_do_not_fail() {
        let sel: Selection = ["Atlantis"].into_iter().collect();
        let update = dashboard().on_selection_changed(sel).unwrap();
        assert_eq!(update.median_age.series().len(), 1);
        assert_eq!(update.age_distribution.series().len(), 1);
    }
}
