//! Train/test split of the feature-built panel.

use crate::error::Result;
use crate::features::derive_target;
use macropanel_data::schema;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Default train-side boundary year.
pub const DEFAULT_TRAIN_END_YEAR: i32 = 2015;

/// Configuration for the temporal train/test split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Last year assigned to the train subset. The boundary is inclusive
    /// on the train side: rows with `year <= train_end_year` train, rows
    /// with `year > train_end_year` test.
    pub train_end_year: i32,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_end_year: DEFAULT_TRAIN_END_YEAR,
        }
    }
}

/// Feature/target tables produced by [`make_train_test`].
///
/// `y_train` is row-aligned with `x_train`, `y_test` with `x_test`.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    /// Train predictors, restricted to the feature columns.
    pub x_train: DataFrame,
    /// Test predictors, restricted to the feature columns.
    pub x_test: DataFrame,
    /// Train targets (next-year GDP growth).
    pub y_train: Series,
    /// Test targets (next-year GDP growth).
    pub y_test: Series,
}

impl TrainTestSplit {
    /// Number of training examples.
    pub fn train_len(&self) -> usize {
        self.x_train.height()
    }

    /// Number of test examples.
    pub fn test_len(&self) -> usize {
        self.x_test.height()
    }

    /// Total number of examples across both subsets.
    pub fn len(&self) -> usize {
        self.train_len() + self.test_len()
    }

    /// Whether the split holds no examples at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derive the target and partition the panel into train and test sets.
///
/// Runs [`derive_target`] first, then assigns every remaining row to
/// exactly one subset: train iff `year <= config.train_end_year`. No row
/// is dropped by the partition itself; all filtering happens in the target
/// derivation.
pub fn make_train_test(panel: &DataFrame, config: &SplitConfig) -> Result<TrainTestSplit> {
    let features = derive_target(panel)?;

    let train = features
        .clone()
        .lazy()
        .filter(col(schema::YEAR).lt_eq(lit(config.train_end_year)))
        .collect()?;
    let test = features
        .lazy()
        .filter(col(schema::YEAR).gt(lit(config.train_end_year)))
        .collect()?;

    let (x_train, y_train) = split_xy(&train)?;
    let (x_test, y_test) = split_xy(&test)?;

    Ok(TrainTestSplit {
        x_train,
        x_test,
        y_train,
        y_test,
    })
}

/// Separate predictors from the target column.
fn split_xy(df: &DataFrame) -> Result<(DataFrame, Series)> {
    let x = df.select(schema::FEATURE_COLUMNS)?;
    let y = df
        .column(schema::GDP_GROWTH_T1)?
        .as_materialized_series()
        .clone();
    Ok((x, y))
}
