//! Scalar KPI-card reductions over a filtered table.
//!
//! Every helper degrades to `None` — the "no data" card state — when the
//! concept is unregistered, the column is absent, or no usable values
//! remain. Panels never see an error from here.

use polars::prelude::*;
use tracing::warn;

use crate::config::ColumnRegistry;

fn numeric_column(
    table: &DataFrame,
    registry: &ColumnRegistry,
    concept_key: &str,
) -> Option<Series> {
    let Some(actual) = registry.actual(concept_key) else {
        warn!(concept = concept_key, "metric key not found in column registry");
        return None;
    };
    if table.is_empty() {
        return None;
    }
    let Ok(column) = table.column(actual) else {
        warn!(column = actual, "metric column not present in table");
        return None;
    };
    column
        .as_materialized_series()
        .cast(&DataType::Float64)
        .ok()
}

/// Mean of a metric column, e.g. the average rotation rate card.
pub fn mean_value(table: &DataFrame, registry: &ColumnRegistry, concept_key: &str) -> Option<f64> {
    numeric_column(table, registry, concept_key)?.mean()
}

/// Sum of a metric column, e.g. total downtime minutes.
pub fn sum_value(table: &DataFrame, registry: &ColumnRegistry, concept_key: &str) -> Option<f64> {
    numeric_column(table, registry, concept_key)?.sum::<f64>().ok()
}

/// Count of distinct non-missing values, e.g. downtime incidents by id.
pub fn distinct_count(
    table: &DataFrame,
    registry: &ColumnRegistry,
    concept_key: &str,
) -> Option<usize> {
    let Some(actual) = registry.actual(concept_key) else {
        warn!(concept = concept_key, "metric key not found in column registry");
        return None;
    };
    if table.is_empty() {
        return None;
    }
    let column = table.column(actual).ok()?;
    let series = column.as_materialized_series();
    let unique = series.n_unique().ok()?;
    Some(unique - usize::from(series.null_count() > 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::concept;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_and_sum() {
        let registry = ColumnRegistry::new();
        let table = df![
            "Rotation Rate (%)" => [4.0f64, 6.0],
            "Hires" => [3i64, 2],
        ]
        .unwrap();

        assert_relative_eq!(
            mean_value(&table, &registry, concept::ROTATION_RATE).unwrap(),
            5.0
        );
        assert_relative_eq!(sum_value(&table, &registry, concept::HIRES).unwrap(), 5.0);
    }

    #[test]
    fn test_degrades_to_none() {
        let registry = ColumnRegistry::new();
        let table = df!["Hires" => [1i64]].unwrap();

        assert!(mean_value(&table, &registry, "no_such_concept").is_none());
        assert!(mean_value(&table, &registry, concept::ROTATION_RATE).is_none());
        assert!(mean_value(&DataFrame::empty(), &registry, concept::HIRES).is_none());
    }

    #[test]
    fn test_distinct_count_excludes_missing() {
        let registry = ColumnRegistry::new();
        let table = df![
            "IncidentID" => [Some("D-1"), Some("D-2"), Some("D-1"), None],
        ]
        .unwrap();
        assert_eq!(
            distinct_count(&table, &registry, concept::PRODUCTION_INCIDENT_ID),
            Some(2)
        );
    }
}
