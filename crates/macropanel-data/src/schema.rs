//! Canonical panel schema.
//!
//! Every table that crosses a crate boundary uses these column names and
//! dtypes. Raw source files may name their columns however they like; the
//! loader maps them onto this vocabulary before anything downstream runs.

use polars::prelude::DataType;

/// Country identifier column (composite key, part 1).
pub const COUNTRY: &str = "country";

/// Observation year column (composite key, part 2).
pub const YEAR: &str = "year";

/// Annual GDP growth, percent.
pub const GDP_GROWTH: &str = "gdp_growth";

/// Annual inflation rate, percent.
pub const INFLATION: &str = "inflation";

/// Unemployment rate, percent.
pub const UNEMPLOYMENT: &str = "unemployment";

/// Government expenditure as a share of GDP, percent.
pub const GOVEXP_SHARE: &str = "govexp_share";

/// Next-year GDP growth, the supervised-learning target.
pub const GDP_GROWTH_T1: &str = "gdp_growth_t1";

/// Value columns of the macro indicators source.
pub const MACRO_VALUE_COLUMNS: [&str; 3] = [GDP_GROWTH, INFLATION, UNEMPLOYMENT];

/// Predictor columns of the merged panel, in canonical order.
pub const FEATURE_COLUMNS: [&str; 4] = [GDP_GROWTH, INFLATION, UNEMPLOYMENT, GOVEXP_SHARE];

/// The dtype a canonical column must carry.
///
/// Unknown names fall through to `Float64`, which is what every value
/// column in the panel uses.
pub fn canonical_dtype(column: &str) -> DataType {
    match column {
        COUNTRY => DataType::String,
        YEAR => DataType::Int32,
        _ => DataType::Float64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_dtypes() {
        assert_eq!(canonical_dtype(COUNTRY), DataType::String);
        assert_eq!(canonical_dtype(YEAR), DataType::Int32);
    }

    #[test]
    fn test_value_dtypes() {
        for column in FEATURE_COLUMNS {
            assert_eq!(canonical_dtype(column), DataType::Float64);
        }
        assert_eq!(canonical_dtype(GDP_GROWTH_T1), DataType::Float64);
    }
}
