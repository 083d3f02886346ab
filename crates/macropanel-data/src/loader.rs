//! Loading of the raw macro and government-expenditure tables.
//!
//! Source files live in an explicitly configured data directory and may use
//! deployment-specific column names ("Country Name" vs "country"). The
//! loader maps each source column onto the canonical schema, strict-casts
//! the key and value columns, and rejects duplicate (country, year) keys so
//! the downstream join can never fan out.

use crate::error::{DataError, Result};
use crate::schema;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default file name of the macro indicators source.
pub const DEFAULT_MACRO_FILE: &str = "macro_indicators.csv";

/// Default file name of the government expenditure source.
pub const DEFAULT_GOVEXP_FILE: &str = "govexp_share.csv";

/// Source-column names of the macro indicators file.
///
/// Each field holds the column name as it appears in the raw file; the
/// loader renames it to the canonical schema name. Defaults assume the
/// file already uses canonical names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroColumns {
    /// Country identifier column.
    pub country: String,
    /// Year column.
    pub year: String,
    /// GDP growth column.
    pub gdp_growth: String,
    /// Inflation column.
    pub inflation: String,
    /// Unemployment column.
    pub unemployment: String,
}

impl Default for MacroColumns {
    fn default() -> Self {
        Self {
            country: schema::COUNTRY.to_string(),
            year: schema::YEAR.to_string(),
            gdp_growth: schema::GDP_GROWTH.to_string(),
            inflation: schema::INFLATION.to_string(),
            unemployment: schema::UNEMPLOYMENT.to_string(),
        }
    }
}

impl MacroColumns {
    /// (source, canonical) pairs in canonical column order.
    fn mapping(&self) -> Vec<(&str, &'static str)> {
        vec![
            (self.country.as_str(), schema::COUNTRY),
            (self.year.as_str(), schema::YEAR),
            (self.gdp_growth.as_str(), schema::GDP_GROWTH),
            (self.inflation.as_str(), schema::INFLATION),
            (self.unemployment.as_str(), schema::UNEMPLOYMENT),
        ]
    }
}

/// Source-column names of the government expenditure file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovExpColumns {
    /// Country identifier column.
    pub country: String,
    /// Year column.
    pub year: String,
    /// Expenditure share column.
    pub govexp_share: String,
}

impl Default for GovExpColumns {
    fn default() -> Self {
        Self {
            country: schema::COUNTRY.to_string(),
            year: schema::YEAR.to_string(),
            govexp_share: schema::GOVEXP_SHARE.to_string(),
        }
    }
}

impl GovExpColumns {
    fn mapping(&self) -> Vec<(&str, &'static str)> {
        vec![
            (self.country.as_str(), schema::COUNTRY),
            (self.year.as_str(), schema::YEAR),
            (self.govexp_share.as_str(), schema::GOVEXP_SHARE),
        ]
    }
}

/// Loader for the two raw panel sources.
///
/// Construct with the data directory, then override file names or column
/// maps as the deployment requires:
///
/// ```ignore
/// let loader = PanelLoader::new("data/raw")
///     .with_files("Infl-Gdp-une.csv", "GovExp.csv")
///     .with_macro_columns(MacroColumns {
///         country: "Country Name".to_string(),
///         ..MacroColumns::default()
///     });
/// let macro_df = loader.load_macro_data()?;
/// ```
#[derive(Debug, Clone)]
pub struct PanelLoader {
    data_dir: PathBuf,
    macro_file: String,
    govexp_file: String,
    macro_columns: MacroColumns,
    govexp_columns: GovExpColumns,
}

impl PanelLoader {
    /// Create a loader reading from `data_dir` with default file names and
    /// canonical column names.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            macro_file: DEFAULT_MACRO_FILE.to_string(),
            govexp_file: DEFAULT_GOVEXP_FILE.to_string(),
            macro_columns: MacroColumns::default(),
            govexp_columns: GovExpColumns::default(),
        }
    }

    /// Override the source file names.
    pub fn with_files(mut self, macro_file: impl Into<String>, govexp_file: impl Into<String>) -> Self {
        self.macro_file = macro_file.into();
        self.govexp_file = govexp_file.into();
        self
    }

    /// Override the macro source column map.
    pub fn with_macro_columns(mut self, columns: MacroColumns) -> Self {
        self.macro_columns = columns;
        self
    }

    /// Override the government expenditure source column map.
    pub fn with_govexp_columns(mut self, columns: GovExpColumns) -> Self {
        self.govexp_columns = columns;
        self
    }

    /// The configured data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load the macro indicators table.
    ///
    /// # Returns
    /// A DataFrame with columns: country, year, gdp_growth, inflation,
    /// unemployment
    pub fn load_macro_data(&self) -> Result<DataFrame> {
        self.load_normalized(&self.macro_file, &self.macro_columns.mapping())
    }

    /// Load the government expenditure table.
    ///
    /// # Returns
    /// A DataFrame with columns: country, year, govexp_share
    pub fn load_govexp_data(&self) -> Result<DataFrame> {
        self.load_normalized(&self.govexp_file, &self.govexp_columns.mapping())
    }

    /// Read one source file and normalize it onto the canonical schema.
    fn load_normalized(&self, file_name: &str, mapping: &[(&str, &'static str)]) -> Result<DataFrame> {
        let path = self.data_dir.join(file_name);
        if !path.is_file() {
            return Err(DataError::NotFound { path });
        }

        let raw = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.clone()))?
            .finish()?;

        let mut columns: Vec<Column> = Vec::with_capacity(mapping.len());
        for (source, canonical) in mapping {
            let column = raw.column(source).map_err(|_| DataError::MissingColumn {
                path: path.clone(),
                column: (*source).to_string(),
            })?;
            let dtype = schema::canonical_dtype(canonical);
            let mut series = column
                .as_materialized_series()
                .strict_cast(&dtype)
                .map_err(|e| DataError::NonNumeric {
                    path: path.clone(),
                    column: (*source).to_string(),
                    reason: e.to_string(),
                })?;
            series.rename((*canonical).into());
            columns.push(series.into());
        }

        let df = DataFrame::new(columns)?;
        check_unique_keys(&df, &path)?;
        Ok(df)
    }
}

/// Reject tables holding more than one row per (country, year).
///
/// A duplicated key would fan out in the inner join downstream and silently
/// multiply rows, so it is treated as a data-quality failure here.
fn check_unique_keys(df: &DataFrame, path: &Path) -> Result<()> {
    let duplicates = df
        .clone()
        .lazy()
        .group_by([col(schema::COUNTRY), col(schema::YEAR)])
        .agg([len().alias("rows")])
        .filter(col("rows").gt(lit(1u32)))
        .collect()?;

    if duplicates.height() > 0 {
        let country = duplicates
            .column(schema::COUNTRY)?
            .str()?
            .get(0)
            .unwrap_or_default()
            .to_string();
        let year = duplicates
            .column(schema::YEAR)?
            .i32()?
            .get(0)
            .unwrap_or_default();
        return Err(DataError::DuplicateKey {
            path: path.to_path_buf(),
            country,
            year,
        });
    }
    Ok(())
}
