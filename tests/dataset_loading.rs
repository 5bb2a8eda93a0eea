//! # Dataset loading from CSV files
//!
//! Column selection, parsing, ordering and the fatal load errors.

use std::io::Write;

use age_dashboard::{DashError, Dataset};
use tempfile::NamedTempFile;

const HEADER: &str = "country,median_age_total,median_age_male,\
age_0_14_perc,age_15_24_perc,age_25_54_perc,age_55_64_perc,age_65_plus_perc,population";

fn csv_file(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn sample() -> NamedTempFile {
    csv_file(&format!(
        "{HEADER}\n\
         A,10,9.5,45,20,28,4,3,1000\n\
         C,30,29,20,12.5,40,12.5,15,3000\n\
         B,20,19,30,18,38,8,6,2000\n"
    ))
}

#[test]
fn loads_and_sorts_by_median_age() {
    let file = sample();
    let ds = Dataset::load(file.path()).unwrap();

    let order: Vec<(&str, f64)> = ds
        .records()
        .iter()
        .map(|r| (r.country.as_str(), r.median_age))
        .collect();
    assert_eq!(order, vec![("A", 10.0), ("B", 20.0), ("C", 30.0)]);
}

#[test]
fn keeps_percentage_columns_in_file_order() {
    let file = sample();
    let ds = Dataset::load(file.path()).unwrap();
    assert_eq!(
        ds.get("C").unwrap().age_percentages,
        [20.0, 12.5, 40.0, 12.5, 15.0]
    );
    assert_eq!(ds.len(), 3);
}

#[test]
fn trims_headers_and_values() {
    let file = csv_file(
        " country , median_age_total ,a_perc,b_perc,c_perc,d_perc,e_perc\n\
         Chad, 16.1 ,47.4,20.1,26.9,3.2,2.4\n",
    );
    let ds = Dataset::load(file.path()).unwrap();
    assert_eq!(ds.get("Chad").unwrap().median_age, 16.1);
}

#[test]
fn quoted_country_names() {
    let file = csv_file(&format!(
        "{HEADER}\n\"Korea, South\",43.2,41.9,12.8,11.8,45.7,15.4,14.3,51000000\n"
    ));
    let ds = Dataset::load(file.path()).unwrap();
    assert!(ds.contains("Korea, South"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::load(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, DashError::Io(_)));
}

#[test]
fn missing_median_age_column() {
    let file = csv_file("country,a_perc,b_perc,c_perc,d_perc,e_perc\nA,1,2,3,4,90\n");
    let err = Dataset::load(file.path()).unwrap_err();
    assert!(matches!(err, DashError::MissingColumn(ref c) if c == "median_age_total"));
}

#[test]
fn wrong_number_of_percentage_columns() {
    let file = csv_file("country,median_age_total,a_perc,b_perc\nA,10,50,50\n");
    let err = Dataset::load(file.path()).unwrap_err();
    assert!(matches!(err, DashError::InvalidData(_)));
}

#[test]
fn non_numeric_value_fails_the_load() {
    let file = csv_file(&format!("{HEADER}\nA,ten,9.5,45,20,28,4,3,1000\n"));
    assert!(Dataset::load(file.path()).is_err());
}

#[test]
fn empty_numeric_value_fails_the_load() {
    let file = csv_file(&format!("{HEADER}\nA,10,9.5,,20,28,4,3,1000\n"));
    assert!(Dataset::load(file.path()).is_err());
}

#[test]
fn duplicate_country_fails_the_load() {
    let file = csv_file(&format!(
        "{HEADER}\nA,10,9.5,45,20,28,4,3,1000\nA,11,9.5,45,20,28,4,3,1000\n"
    ));
    let err = Dataset::load(file.path()).unwrap_err();
    assert!(matches!(err, DashError::InvalidData(_)));
}
