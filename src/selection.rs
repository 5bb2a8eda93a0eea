use serde::{Deserialize, Serialize};

/// The countries chosen in the dropdown.
///
/// Keeps the order in which the user picked them (titles are built from
/// it); duplicates are dropped on construction, first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Selection {
    countries: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn contains(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    /// Members in lexicographic order, used for series ordering.
    pub fn sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.iter().collect();
        sorted.sort_unstable();
        sorted
    }

    /// Members joined by ", " in selection order.
    pub fn joined(&self) -> String {
        self.countries.join(", ")
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut countries: Vec<String> = Vec::new();
        for country in iter {
            let country = country.into();
            if !countries.contains(&country) {
                countries.push(country);
            }
        }
        Self { countries }
    }
}

impl From<Vec<String>> for Selection {
    fn from(countries: Vec<String>) -> Self {
        countries.into_iter().collect()
    }
}

impl From<Selection> for Vec<String> {
    fn from(selection: Selection) -> Self {
        selection.countries
    }
}
