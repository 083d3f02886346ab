//! Merging the two normalized sources into a single panel.

use crate::error::{PanelError, Result};
use macropanel_data::schema;
use polars::prelude::*;

/// Validate that `df` carries the canonical columns with canonical dtypes.
///
/// The merge must never proceed on a guessed column mapping; frames that
/// were not normalized by the loader are rejected here.
pub(crate) fn ensure_columns(df: &DataFrame, required: &[&str], table: &str) -> Result<()> {
    for name in required {
        let Ok(column) = df.column(name) else {
            return Err(PanelError::SchemaMismatch {
                table: table.to_string(),
                column: (*name).to_string(),
                detail: "is missing".to_string(),
            });
        };
        let expected = schema::canonical_dtype(name);
        if column.dtype() != &expected {
            return Err(PanelError::SchemaMismatch {
                table: table.to_string(),
                column: (*name).to_string(),
                detail: format!("has dtype {}, expected {expected}", column.dtype()),
            });
        }
    }
    Ok(())
}

/// Inner-join the macro and government-expenditure tables on
/// (country, year) and sort the result ascending by country then year.
///
/// Keys present on only one side are dropped; partial records are not
/// imputed. The stable sort fixes the row order the per-country target
/// shift depends on.
///
/// # Returns
/// A DataFrame with columns: country, year, gdp_growth, inflation,
/// unemployment, govexp_share
pub fn build_panel(macro_df: &DataFrame, govexp_df: &DataFrame) -> Result<DataFrame> {
    ensure_columns(
        macro_df,
        &[
            schema::COUNTRY,
            schema::YEAR,
            schema::GDP_GROWTH,
            schema::INFLATION,
            schema::UNEMPLOYMENT,
        ],
        "macro",
    )?;
    ensure_columns(
        govexp_df,
        &[schema::COUNTRY, schema::YEAR, schema::GOVEXP_SHARE],
        "govexp",
    )?;

    let panel = macro_df
        .clone()
        .lazy()
        .join(
            govexp_df.clone().lazy(),
            [col(schema::COUNTRY), col(schema::YEAR)],
            [col(schema::COUNTRY), col(schema::YEAR)],
            JoinArgs::new(JoinType::Inner),
        )
        .sort(
            [schema::COUNTRY, schema::YEAR],
            SortMultipleOptions::default().with_maintain_order(true),
        )
        .select([
            col(schema::COUNTRY),
            col(schema::YEAR),
            col(schema::GDP_GROWTH),
            col(schema::INFLATION),
            col(schema::UNEMPLOYMENT),
            col(schema::GOVEXP_SHARE),
        ])
        .collect()?;

    Ok(panel)
}
