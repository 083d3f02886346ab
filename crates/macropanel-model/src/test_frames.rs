//! Shared fixture frames for unit tests.

use macropanel_data::schema;
use polars::prelude::*;

/// Build a normalized macro indicators frame from
/// (country, year, gdp_growth, inflation, unemployment) rows.
pub(crate) fn macro_frame(rows: &[(&str, i32, f64, f64, f64)]) -> DataFrame {
    let countries: Vec<&str> = rows.iter().map(|r| r.0).collect();
    let years: Vec<i32> = rows.iter().map(|r| r.1).collect();
    let growth: Vec<f64> = rows.iter().map(|r| r.2).collect();
    let inflation: Vec<f64> = rows.iter().map(|r| r.3).collect();
    let unemployment: Vec<f64> = rows.iter().map(|r| r.4).collect();

    DataFrame::new(vec![
        Series::new(schema::COUNTRY.into(), countries).into(),
        Series::new(schema::YEAR.into(), years).into(),
        Series::new(schema::GDP_GROWTH.into(), growth).into(),
        Series::new(schema::INFLATION.into(), inflation).into(),
        Series::new(schema::UNEMPLOYMENT.into(), unemployment).into(),
    ])
    .unwrap()
}

/// Build a normalized government expenditure frame from
/// (country, year, govexp_share) rows.
pub(crate) fn govexp_frame(rows: &[(&str, i32, f64)]) -> DataFrame {
    let countries: Vec<&str> = rows.iter().map(|r| r.0).collect();
    let years: Vec<i32> = rows.iter().map(|r| r.1).collect();
    let share: Vec<f64> = rows.iter().map(|r| r.2).collect();

    DataFrame::new(vec![
        Series::new(schema::COUNTRY.into(), countries).into(),
        Series::new(schema::YEAR.into(), years).into(),
        Series::new(schema::GOVEXP_SHARE.into(), share).into(),
    ])
    .unwrap()
}
