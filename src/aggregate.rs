//! Time-based aggregation: calendar-month bucketing with declarative
//! per-column reducers, plus trailing rolling means used as smoothed trend
//! companions.
//!
//! Buckets are anchored to the month start; the same anchor is applied for
//! every panel.

use polars::prelude::*;
use tracing::warn;

use crate::error::DashboardError;

/// How one value column is reduced per bucket: `Sum` for counts (hires,
/// exits, incidents), `Mean` for rates and scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    Sum,
    Mean,
}

/// Declarative reduction of one column.
#[derive(Debug, Clone)]
pub struct ColumnAgg {
    column: String,
    reducer: Reducer,
    alias: Option<String>,
}

impl ColumnAgg {
    pub fn sum(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            reducer: Reducer::Sum,
            alias: None,
        }
    }

    pub fn mean(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            reducer: Reducer::Mean,
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// Name of the reduced column in the output frame.
    pub fn output_name(&self) -> String {
        match &self.alias {
            Some(alias) => alias.clone(),
            None => match self.reducer {
                Reducer::Sum => format!("{}_sum", self.column),
                Reducer::Mean => format!("{}_avg", self.column),
            },
        }
    }
}

/// Group a filtered table into calendar-month buckets and reduce each
/// requested column.
///
/// Rows with a missing date are dropped first; buckets come back sorted
/// ascending. A missing or non-temporal date column, or a reducer list with
/// no resolvable columns, degrades to an empty frame rather than an error.
pub fn aggregate_monthly(
    table: &DataFrame,
    date_column: &str,
    aggs: &[ColumnAgg],
) -> Result<DataFrame, DashboardError> {
    if table.is_empty() {
        return Ok(DataFrame::empty());
    }

    let schema = table.schema();
    if !schema.contains(date_column) {
        warn!(column = date_column, "date column missing, no trend data");
        return Ok(DataFrame::empty());
    }
    let date_dtype = table.column(date_column)?.dtype();
    if !matches!(date_dtype, DataType::Datetime(_, _) | DataType::Date) {
        warn!(column = date_column, dtype = ?date_dtype, "date column is not temporal, no trend data");
        return Ok(DataFrame::empty());
    }

    let mut reduced: Vec<Expr> = Vec::with_capacity(aggs.len());
    for agg in aggs {
        if !schema.contains(agg.column()) {
            warn!(column = agg.column(), "aggregation column missing, skipped");
            continue;
        }
        let value = col(agg.column()).cast(DataType::Float64);
        let expr = match agg.reducer {
            Reducer::Sum => value.sum(),
            Reducer::Mean => value.mean(),
        };
        reduced.push(expr.alias(agg.output_name()));
    }
    if reduced.is_empty() {
        return Ok(DataFrame::empty());
    }

    let out = table
        .clone()
        .lazy()
        .filter(col(date_column).is_not_null())
        .with_columns([col(date_column).dt().truncate(lit("1mo"))])
        .group_by([col(date_column)])
        .agg(reduced)
        .sort([date_column], Default::default())
        .collect()?;

    Ok(out)
}

/// Append a trailing rolling mean of `column` as `{column}_ma{window}`.
///
/// The first `window - 1` positions average the partial window that exists
/// so far (minimum periods of one); nulls inside a window are skipped and an
/// all-null window stays null.
pub fn with_rolling_mean(
    series: &DataFrame,
    column: &str,
    window: usize,
) -> Result<DataFrame, DashboardError> {
    if series.is_empty() {
        return Ok(series.clone());
    }
    if !series.schema().contains(column) {
        return Err(DashboardError::MissingColumn(column.to_string()));
    }

    let values: Vec<Option<f64>> = series
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::Float64)?
        .f64()?
        .into_iter()
        .collect();
    let rolled = rolling_mean(&values, window);

    let mut out = series.clone();
    out.with_column(Series::new(
        format!("{column}_ma{window}").into(),
        rolled,
    ))?;
    Ok(out)
}

/// Trailing mean over the last `window` positions, minimum periods of one.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let mut sum = 0.0;
            let mut count = 0usize;
            for value in values[start..=i].iter().flatten() {
                sum += value;
                count += 1;
            }
            if count == 0 {
                None
            } else {
                Some(sum / count as f64)
            }
        })
        .collect()
}
