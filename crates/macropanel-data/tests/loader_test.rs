//! Integration tests for CSV loading and schema normalization.

use approx::assert_relative_eq;
use macropanel_data::{DataError, GovExpColumns, MacroColumns, PanelLoader, schema};
use std::fs;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

fn canonical_fixtures() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_fixture(
        &dir,
        "macro_indicators.csv",
        "country,year,gdp_growth,inflation,unemployment\n\
         A,2014,1.0,2.0,3.0\n\
         A,2015,1.5,2.1,3.2\n\
         B,2014,0.5,1.0,7.5\n",
    );
    write_fixture(
        &dir,
        "govexp_share.csv",
        "country,year,govexp_share\n\
         A,2014,5.0\n\
         A,2015,5.1\n\
         B,2014,18.0\n",
    );
    dir
}

#[test]
fn test_load_macro_data_canonical_columns() {
    let dir = canonical_fixtures();
    let loader = PanelLoader::new(dir.path());

    let df = loader.load_macro_data().unwrap();
    assert_eq!(df.height(), 3);
    assert_eq!(
        df.get_column_names(),
        vec!["country", "year", "gdp_growth", "inflation", "unemployment"]
    );
    assert_eq!(df.column(schema::YEAR).unwrap().i32().unwrap().get(0), Some(2014));
    assert_relative_eq!(
        df.column(schema::GDP_GROWTH).unwrap().f64().unwrap().get(1).unwrap(),
        1.5
    );
}

#[test]
fn test_load_govexp_data_canonical_columns() {
    let dir = canonical_fixtures();
    let loader = PanelLoader::new(dir.path());

    let df = loader.load_govexp_data().unwrap();
    assert_eq!(df.height(), 3);
    assert_eq!(df.get_column_names(), vec!["country", "year", "govexp_share"]);
    assert_relative_eq!(
        df.column(schema::GOVEXP_SHARE).unwrap().f64().unwrap().get(2).unwrap(),
        18.0
    );
}

#[test]
fn test_source_column_names_are_remapped() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        &dir,
        "Infl-Gdp-une.csv",
        "Country Name,Year,GDP growth (annual %),Inflation,Unemployment\n\
         A,2014,1.0,2.0,3.0\n",
    );
    write_fixture(
        &dir,
        "GovExp.csv",
        "Country Name,Year,GovExp (% of GDP)\n\
         A,2014,5.0\n",
    );

    let loader = PanelLoader::new(dir.path())
        .with_files("Infl-Gdp-une.csv", "GovExp.csv")
        .with_macro_columns(MacroColumns {
            country: "Country Name".to_string(),
            year: "Year".to_string(),
            gdp_growth: "GDP growth (annual %)".to_string(),
            inflation: "Inflation".to_string(),
            unemployment: "Unemployment".to_string(),
        })
        .with_govexp_columns(GovExpColumns {
            country: "Country Name".to_string(),
            year: "Year".to_string(),
            govexp_share: "GovExp (% of GDP)".to_string(),
        });

    let macro_df = loader.load_macro_data().unwrap();
    assert_eq!(
        macro_df.get_column_names(),
        vec!["country", "year", "gdp_growth", "inflation", "unemployment"]
    );
    let gov_df = loader.load_govexp_data().unwrap();
    assert_eq!(gov_df.get_column_names(), vec!["country", "year", "govexp_share"]);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let loader = PanelLoader::new(dir.path());
    let result = loader.load_macro_data();
    assert!(matches!(result, Err(DataError::NotFound { .. })));
}

#[test]
fn test_missing_column() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        &dir,
        "macro_indicators.csv",
        "country,year,gdp_growth,inflation\nA,2014,1.0,2.0\n",
    );
    let loader = PanelLoader::new(dir.path());
    let result = loader.load_macro_data();
    match result {
        Err(DataError::MissingColumn { column, .. }) => assert_eq!(column, "unemployment"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn test_non_numeric_value_column() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        &dir,
        "macro_indicators.csv",
        "country,year,gdp_growth,inflation,unemployment\n\
         A,2014,1.0,2.0,3.0\n\
         A,2015,n/a,2.1,3.2\n",
    );
    let loader = PanelLoader::new(dir.path());
    let result = loader.load_macro_data();
    match result {
        Err(DataError::NonNumeric { column, .. }) => assert_eq!(column, "gdp_growth"),
        other => panic!("expected NonNumeric, got {other:?}"),
    }
}

#[test]
fn test_duplicate_key_in_source() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        &dir,
        "govexp_share.csv",
        "country,year,govexp_share\n\
         A,2014,5.0\n\
         A,2014,5.5\n",
    );
    let loader = PanelLoader::new(dir.path());
    let result = loader.load_govexp_data();
    match result {
        Err(DataError::DuplicateKey { country, year, .. }) => {
            assert_eq!(country, "A");
            assert_eq!(year, 2014);
        }
        other => panic!("expected DuplicateKey, got {other:?}"),
    }
}

#[test]
fn test_sources_are_not_mutated() {
    let dir = canonical_fixtures();
    let before = fs::read_to_string(dir.path().join("macro_indicators.csv")).unwrap();

    let loader = PanelLoader::new(dir.path());
    loader.load_macro_data().unwrap();
    loader.load_macro_data().unwrap();

    let after = fs::read_to_string(dir.path().join("macro_indicators.csv")).unwrap();
    assert_eq!(before, after);
}
