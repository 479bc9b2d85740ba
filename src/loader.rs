//! CSV source loading.
//!
//! Every failure at this boundary is converted to an empty table plus a
//! logged error, so downstream stages consume one uniform shape and never
//! carry their own I/O error handling.

use std::collections::HashMap;
use std::path::PathBuf;

use polars::datatypes::TimeUnit;
use polars::prelude::StrptimeOptions;
use polars::prelude::*;
use tracing::error;

use crate::error::DashboardError;

const TRIM_SET: &str = " \t\r\n";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LoadKey {
    file: String,
    date_columns: Vec<String>,
}

/// Reads tabular sources below a base directory, memoizing each result by
/// its exact (file, requested date columns) signature. Source files are
/// treated as static for the Loader's lifetime, so no invalidation policy
/// runs implicitly; [`Loader::invalidate`] exists as an explicit hook.
#[derive(Debug, Default)]
pub struct Loader {
    base_path: PathBuf,
    cache: HashMap<LoadKey, DataFrame>,
}

impl Loader {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            cache: HashMap::new(),
        }
    }

    /// Load one source, serving from the cache when the same (file, date
    /// columns) pair was requested before. Failures yield an empty table.
    pub fn load(&mut self, file: &str, date_columns: &[&str]) -> DataFrame {
        let key = LoadKey {
            file: file.to_string(),
            date_columns: date_columns.iter().map(|c| c.to_string()).collect(),
        };
        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }
        let df = self.load_uncached(file, date_columns);
        self.cache.insert(key, df.clone());
        df
    }

    /// Cache-bypass variant: always re-reads the file.
    pub fn load_uncached(&self, file: &str, date_columns: &[&str]) -> DataFrame {
        match self.read(file, date_columns) {
            Ok(df) => df,
            Err(DashboardError::SourceNotFound(path)) => {
                error!(%path, "data file not found, serving empty table");
                DataFrame::empty()
            }
            Err(err) => {
                error!(file, %err, "failed to load data file, serving empty table");
                DataFrame::empty()
            }
        }
    }

    /// Drop every cached table.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    fn read(&self, file: &str, date_columns: &[&str]) -> Result<DataFrame, DashboardError> {
        let path = self.base_path.join(file);
        if !path.exists() {
            return Err(DashboardError::SourceNotFound(path.display().to_string()));
        }

        let mut df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path))?
            .finish()?;

        // Trim whitespace from column names
        let trimmed: Vec<String> = df
            .get_column_names_str()
            .iter()
            .map(|c| c.trim().to_string())
            .collect();
        df.set_column_names(trimmed.as_slice())?;

        let string_columns: Vec<String> = df
            .get_columns()
            .iter()
            .filter(|c| c.dtype() == &DataType::String)
            .map(|c| c.name().to_string())
            .collect();

        let mut lazy = df.lazy();

        if !string_columns.is_empty() {
            let trims: Vec<Expr> = string_columns
                .iter()
                .map(|c| col(c.as_str()).str().strip_chars(lit(TRIM_SET)))
                .collect();
            lazy = lazy.with_columns(trims);
        }

        // Parse the designated date columns; unparseable cells become null
        // rather than failing the load. Columns absent from the file (or
        // already non-string) are left alone.
        for &date_column in date_columns {
            if string_columns.iter().any(|c| c == date_column) {
                lazy = lazy.with_columns([col(date_column).str().to_datetime(
                    Some(TimeUnit::Microseconds),
                    None,
                    StrptimeOptions {
                        format: None,
                        strict: false,
                        ..Default::default()
                    },
                    lit("raise"),
                )]);
            }
        }

        Ok(lazy.collect()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture(dir: &std::path::Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_load_trims_headers_and_cells() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(
            dir.path(),
            "stability.csv",
            "Date , Site,Hires\n2024-01-05,  SiteA  ,3\n2024-01-20,SiteB,2\n",
        );

        let mut loader = Loader::new(dir.path());
        let df = loader.load("stability.csv", &["Date"]);

        assert_eq!(df.height(), 2);
        assert!(df.column("Date").is_ok(), "header whitespace must be trimmed");
        let sites = df.column("Site").unwrap().as_materialized_series().clone();
        let sites = sites.str().unwrap();
        assert_eq!(sites.get(0), Some("SiteA"));
    }

    #[test]
    fn test_load_parses_dates_and_marks_bad_cells_null() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(
            dir.path(),
            "tasks.csv",
            "Task Date,Task Compliance Rate (%)\n2024-03-01,96.0\nnot-a-date,94.0\n",
        );

        let mut loader = Loader::new(dir.path());
        let df = loader.load("tasks.csv", &["Task Date"]);

        let dates = df.column("Task Date").unwrap();
        assert!(matches!(dates.dtype(), DataType::Datetime(_, _)));
        assert_eq!(dates.null_count(), 1);
    }

    #[test]
    fn test_missing_file_yields_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = Loader::new(dir.path());
        let df = loader.load("nowhere.csv", &[]);
        assert_eq!(df.height(), 0);
    }

    #[test]
    fn test_cache_serves_without_rereading() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), "oee.csv", "OEE (%)\n85.0\n90.0\n");

        let mut loader = Loader::new(dir.path());
        let first = loader.load("oee.csv", &[]);
        assert_eq!(first.height(), 2);

        // Rewrite the file; the cached entry must still be served.
        write_fixture(dir.path(), "oee.csv", "OEE (%)\n85.0\n");
        let second = loader.load("oee.csv", &[]);
        assert_eq!(second.height(), 2);
        assert!(first.equals_missing(&second));

        // The bypass hook and invalidation both see the new contents.
        assert_eq!(loader.load_uncached("oee.csv", &[]).height(), 1);
        loader.invalidate();
        assert_eq!(loader.load("oee.csv", &[]).height(), 1);
    }

    #[test]
    fn test_cache_key_includes_date_columns() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), "w.csv", "Wellbeing Survey Date,Well-Being Index (0-10)\n2024-02-01,7.5\n");

        let mut loader = Loader::new(dir.path());
        let untyped = loader.load("w.csv", &[]);
        let typed = loader.load("w.csv", &["Wellbeing Survey Date"]);

        assert_eq!(untyped.column("Wellbeing Survey Date").unwrap().dtype(), &DataType::String);
        assert!(matches!(
            typed.column("Wellbeing Survey Date").unwrap().dtype(),
            DataType::Datetime(_, _)
        ));
    }
}
