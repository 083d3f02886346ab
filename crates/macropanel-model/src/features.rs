//! Target derivation: next-year GDP growth per country.

use crate::error::Result;
use crate::panel::ensure_columns;
use macropanel_data::schema;
use polars::prelude::*;

/// Append `gdp_growth_t1` (the same country's GDP growth for year + 1) and
/// drop rows without a known next year.
///
/// The shift runs within each country partition in year order; countries
/// never mix. A row keeps its target only when the same country actually
/// has an observation for year + 1, so both a country's last observed year
/// and rows followed by a gap in the series are removed. The input frame
/// is not mutated.
///
/// # Returns
/// A DataFrame with the input columns plus `gdp_growth_t1`.
pub fn derive_target(panel: &DataFrame) -> Result<DataFrame> {
    ensure_columns(
        panel,
        &[schema::COUNTRY, schema::YEAR, schema::GDP_GROWTH],
        "panel",
    )?;

    // Re-sorting here keeps the shift correct even on a caller-reordered
    // frame; on an already-sorted panel it is a no-op.
    let derived = panel
        .clone()
        .lazy()
        .sort(
            [schema::COUNTRY, schema::YEAR],
            SortMultipleOptions::default().with_maintain_order(true),
        )
        .with_column(
            col(schema::GDP_GROWTH)
                .shift(lit(-1))
                .over([col(schema::COUNTRY)])
                .alias(schema::GDP_GROWTH_T1),
        )
        .filter(
            col(schema::GDP_GROWTH_T1).is_not_null().and(
                // The following observation must be exactly year + 1.
                col(schema::YEAR)
                    .shift(lit(-1))
                    .over([col(schema::COUNTRY)])
                    .eq(col(schema::YEAR) + lit(1)),
            ),
        )
        .collect()?;

    Ok(derived)
}
