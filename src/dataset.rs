use std::collections::HashMap;
use std::path::Path;

use polars::prelude::*;
use tracing::{info, warn};

use crate::error::DashError;
use crate::schema::{age_bracket, country, is_selected_column};

/// Percentage rows further than this from 100 are logged, not rejected.
const PERCENTAGE_SUM_TOLERANCE: f64 = 2.0;

/// One row of the dataset: a country, its median age and the share of its
/// population in each age bracket (same order as `age_bracket::ALL`).
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub country: String,
    pub median_age: f64,
    pub age_percentages: [f64; age_bracket::COUNT],
}

impl CountryRecord {
    pub fn new(
        country: impl Into<String>,
        median_age: f64,
        age_percentages: [f64; age_bracket::COUNT],
    ) -> Self {
        Self {
            country: country.into(),
            median_age,
            age_percentages,
        }
    }
}

/// Immutable country table, sorted ascending by median age.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<CountryRecord>,
    index: HashMap<String, usize>,
}

impl Dataset {
    // ── Loading ─────────────────────────────────────────────────────────────

    /// Load the country CSV.
    ///
    /// Keeps `country`, `median_age_total` and every column whose header
    /// contains "perc" (in file order, one per age bracket). Numeric columns
    /// are parsed strictly: a non-numeric or empty value fails the load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DashError> {
        let path = path.as_ref();
        std::fs::metadata(path)?;

        let raw = read_csv_as_strings(path)?;
        let percentage_cols = percentage_columns(&raw)?;
        let frame = select_and_parse(raw, &percentage_cols)?;
        let records = extract_records(&frame, &percentage_cols)?;

        let dataset = Self::from_records(records)?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            columns = frame.width(),
            "loaded country dataset"
        );
        Ok(dataset)
    }

    /// Build a dataset from already-parsed records.
    ///
    /// Validates names and values, then sorts by median age. The sort is
    /// stable so equal ages keep their input order.
    pub fn from_records(mut records: Vec<CountryRecord>) -> Result<Self, DashError> {
        for record in &mut records {
            record.country = record.country.trim().to_string();
            validate_record(record)?;
        }
        records.sort_by(|a, b| a.median_age.total_cmp(&b.median_age));

        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.country.clone(), i).is_some() {
                return Err(DashError::InvalidData(format!(
                    "Duplicate country '{}'",
                    record.country
                )));
            }
        }

        Ok(Self { records, index })
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, country: &str) -> Option<&CountryRecord> {
        self.index.get(country).map(|&i| &self.records[i])
    }

    pub fn contains(&self, country: &str) -> bool {
        self.index.contains_key(country)
    }

    /// Country names in lexicographic order, as offered by the dropdown.
    pub fn country_names_sorted(&self) -> Vec<String> {
        let mut names: Vec<String> = self.records.iter().map(|r| r.country.clone()).collect();
        names.sort();
        names
    }
}

// ── Private helpers ─────────────────────────────────────────────────────────

/// Read a CSV file with all columns as String dtype.
/// Trims whitespace from column names.
fn read_csv_as_strings(path: &Path) -> Result<DataFrame, DashError> {
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0)) // all columns as String
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let trimmed: Vec<String> = df
        .get_column_names_str()
        .iter()
        .map(|c| c.trim().to_string())
        .collect();
    df.set_column_names(trimmed.as_slice())?;

    Ok(df)
}

/// Percentage columns in file order. There must be one per age bracket.
fn percentage_columns(df: &DataFrame) -> Result<Vec<String>, DashError> {
    let names = df.get_column_names_str();
    for required in [country::COUNTRY, country::MEDIAN_AGE_TOTAL] {
        if !names.contains(&required) {
            return Err(DashError::MissingColumn(required.to_string()));
        }
    }

    let percentage_cols: Vec<String> = names
        .iter()
        .filter(|c| is_selected_column(c) && c.contains(country::PERCENTAGE_MARKER))
        .map(|c| c.to_string())
        .collect();

    if percentage_cols.len() != age_bracket::COUNT {
        return Err(DashError::InvalidData(format!(
            "Expected {} percentage columns (header containing '{}'), found {}: {:?}",
            age_bracket::COUNT,
            country::PERCENTAGE_MARKER,
            percentage_cols.len(),
            percentage_cols
        )));
    }
    Ok(percentage_cols)
}

/// Project onto the dashboard columns, parse the numeric ones strictly and
/// sort by median age.
fn select_and_parse(raw: DataFrame, percentage_cols: &[String]) -> Result<DataFrame, DashError> {
    let mut selected = vec![col(country::COUNTRY), col(country::MEDIAN_AGE_TOTAL)];
    selected.extend(percentage_cols.iter().map(|c| col(c.as_str())));

    let numeric = std::iter::once(country::MEDIAN_AGE_TOTAL)
        .chain(percentage_cols.iter().map(|c| c.as_str()))
        .map(|c| {
            col(c)
                .str()
                .strip_chars(lit(" \t\r\n"))
                .strict_cast(DataType::Float64)
        })
        .collect::<Vec<_>>();

    let df = raw
        .lazy()
        .select(selected)
        .with_columns(numeric)
        .sort(
            [country::MEDIAN_AGE_TOTAL],
            SortMultipleOptions::default().with_maintain_order(true),
        )
        .collect()?;

    Ok(df)
}

fn extract_records(
    df: &DataFrame,
    percentage_cols: &[String],
) -> Result<Vec<CountryRecord>, DashError> {
    let countries = df.column(country::COUNTRY)?.str()?;
    let medians = df.column(country::MEDIAN_AGE_TOTAL)?.f64()?;
    let brackets = percentage_cols
        .iter()
        .map(|c| Ok::<_, DashError>((c.as_str(), df.column(c.as_str())?.f64()?)))
        .collect::<Result<Vec<_>, _>>()?;

    let missing = |row: usize, column: &str| {
        DashError::InvalidData(format!("Row {}: empty value in column '{}'", row + 1, column))
    };

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let name = countries
            .get(i)
            .ok_or_else(|| missing(i, country::COUNTRY))?;
        let median_age = medians
            .get(i)
            .ok_or_else(|| missing(i, country::MEDIAN_AGE_TOTAL))?;

        let mut age_percentages = [0.0; age_bracket::COUNT];
        for (slot, (column, values)) in age_percentages.iter_mut().zip(&brackets) {
            *slot = values.get(i).ok_or_else(|| missing(i, *column))?;
        }

        records.push(CountryRecord::new(name, median_age, age_percentages));
    }
    Ok(records)
}

fn validate_record(record: &CountryRecord) -> Result<(), DashError> {
    if record.country.is_empty() {
        return Err(DashError::InvalidData("Empty country name".to_string()));
    }
    if !record.median_age.is_finite() || record.median_age < 0.0 {
        return Err(DashError::InvalidData(format!(
            "Country '{}': invalid median age {}",
            record.country, record.median_age
        )));
    }
    if let Some(bad) = record
        .age_percentages
        .iter()
        .find(|p| !p.is_finite() || **p < 0.0)
    {
        return Err(DashError::InvalidData(format!(
            "Country '{}': invalid age percentage {}",
            record.country, bad
        )));
    }

    let total: f64 = record.age_percentages.iter().sum();
    if (total - 100.0).abs() > PERCENTAGE_SUM_TOLERANCE {
        warn!(country = %record.country, total, "age percentages do not sum to 100");
    }
    Ok(())
}
