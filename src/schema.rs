/// Column-name constants for the country demographics CSV.
/// Single source of truth for the loader and the view functions.

// ── Country columns ─────────────────────────────────────────────────────────
pub mod country {
    pub const COUNTRY: &str = "country";
    pub const MEDIAN_AGE_TOTAL: &str = "median_age_total";

    /// Substring marking an age-bracket percentage column.
    pub const PERCENTAGE_MARKER: &str = "perc";
}

// ── Age brackets ────────────────────────────────────────────────────────────
pub mod age_bracket {
    pub const AGE_0_14: &str = "0-14";
    pub const AGE_15_24: &str = "15-24";
    pub const AGE_25_54: &str = "25-54";
    pub const AGE_55_64: &str = "55-64";
    pub const AGE_65_PLUS: &str = "65+";

    pub const COUNT: usize = 5;

    pub const ALL: [&str; COUNT] = [AGE_0_14, AGE_15_24, AGE_25_54, AGE_55_64, AGE_65_PLUS];
}

/// Column predicate used when loading: percentage columns plus the two fixed
/// country columns.
pub fn is_selected_column(name: &str) -> bool {
    name.contains(country::PERCENTAGE_MARKER)
        || name == country::COUNTRY
        || name == country::MEDIAN_AGE_TOTAL
}
