//! Categorical filtering: selector-option extraction and multi-dimensional
//! filter application.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::*;
use tracing::warn;

use crate::config::ColumnRegistry;
use crate::error::DashboardError;
use crate::schema::concept;

/// The fixed list of filterable dimensions. Selections cannot name anything
/// outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterField {
    Site,
    Region,
    Department,
    FunctionalCategory,
    Shift,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Site,
        FilterField::Region,
        FilterField::Department,
        FilterField::FunctionalCategory,
        FilterField::Shift,
    ];

    pub fn concept(&self) -> &'static str {
        match self {
            FilterField::Site => concept::SITE,
            FilterField::Region => concept::REGION,
            FilterField::Department => concept::DEPARTMENT,
            FilterField::FunctionalCategory => concept::FUNCTIONAL_CATEGORY,
            FilterField::Shift => concept::SHIFT,
        }
    }
}

/// Chosen values per filterable field. An absent or empty set means "no
/// constraint on this field"; values are compared as trimmed, case-sensitive
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    selected: BTreeMap<FilterField, BTreeSet<String>>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style constraint on one field.
    pub fn select<I, S>(mut self, field: FilterField, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(field, values.into_iter().map(Into::into).collect());
        self
    }

    pub fn set(&mut self, field: FilterField, values: BTreeSet<String>) {
        self.selected.insert(field, values);
    }

    pub fn values(&self, field: FilterField) -> Option<&BTreeSet<String>> {
        self.selected.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterField, &BTreeSet<String>)> {
        self.selected.iter().map(|(field, values)| (*field, values))
    }

    /// True when no field carries a non-empty value set.
    pub fn is_unconstrained(&self) -> bool {
        self.selected.values().all(|values| values.is_empty())
    }
}

/// Distinct, non-missing values of one conceptual column across several raw
/// tables, string-coerced and lexically sorted. Used to populate selector
/// widgets in the (external) UI layer.
pub fn unique_options(
    tables: &[DataFrame],
    registry: &ColumnRegistry,
    concept_key: &str,
) -> Vec<String> {
    let Some(actual) = registry.actual(concept_key) else {
        warn!(concept = concept_key, "filter column key not found in column registry");
        return Vec::new();
    };

    let mut options: BTreeSet<String> = BTreeSet::new();
    for table in tables {
        if table.is_empty() {
            continue;
        }
        let Ok(column) = table.column(actual) else {
            continue;
        };
        let Ok(as_strings) = column.as_materialized_series().cast(&DataType::String) else {
            continue;
        };
        let Ok(values) = as_strings.str() else {
            continue;
        };
        for value in values.into_iter().flatten() {
            options.insert(value.to_string());
        }
    }
    options.into_iter().collect()
}

/// Narrow a table to the rows matching every constrained field of the
/// selection. Constraints on columns the table does not carry are silently
/// skipped, so sources with heterogeneous schemas pass through the same
/// call site. The input table is never mutated.
pub fn apply_filters(
    table: &DataFrame,
    registry: &ColumnRegistry,
    selection: &FilterSelection,
) -> Result<DataFrame, DashboardError> {
    if table.is_empty() {
        return Ok(table.clone());
    }

    let schema = table.schema();
    let mut predicate: Option<Expr> = None;

    for (field, values) in selection.iter() {
        if values.is_empty() {
            continue;
        }
        let Some(actual) = registry.actual(field.concept()) else {
            warn!(field = ?field, "filter field not found in column registry, skipped");
            continue;
        };
        if !schema.contains(actual) {
            continue;
        }

        let allowed: Vec<String> = values.iter().cloned().collect();
        let allowed = Series::new("allowed".into(), allowed);
        let clause = col(actual)
            .cast(DataType::String)
            .is_in(lit(allowed), false);

        predicate = Some(match predicate {
            Some(existing) => existing.and(clause),
            None => clause,
        });
    }

    match predicate {
        Some(predicate) => Ok(table.clone().lazy().filter(predicate).collect()?),
        None => Ok(table.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataFrame {
        df![
            "Site" => ["SiteA", "SiteA", "SiteB", "SiteC"],
            "Shift" => ["Day", "Night", "Day", "Day"],
            "Hires" => [3i64, 2, 5, 1],
        ]
        .unwrap()
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let registry = ColumnRegistry::new();
        let table = sample();
        let filtered = apply_filters(&table, &registry, &FilterSelection::new()).unwrap();
        assert!(table.equals_missing(&filtered));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let registry = ColumnRegistry::new();
        let selection = FilterSelection::new()
            .select(FilterField::Site, ["SiteA"])
            .select(FilterField::Shift, ["Day"]);
        let filtered = apply_filters(&sample(), &registry, &selection).unwrap();
        assert_eq!(filtered.height(), 1);
        let hires = filtered.column("Hires").unwrap().as_materialized_series().clone();
        assert_eq!(hires.i64().unwrap().get(0), Some(3));
    }

    #[test]
    fn test_adding_a_constraint_narrows_rows() {
        let registry = ColumnRegistry::new();
        let broad = FilterSelection::new().select(FilterField::Site, ["SiteA", "SiteB"]);
        let narrow = broad.clone().select(FilterField::Shift, ["Night"]);

        let broad_rows = apply_filters(&sample(), &registry, &broad).unwrap();
        let narrow_rows = apply_filters(&sample(), &registry, &narrow).unwrap();

        assert!(narrow_rows.height() <= broad_rows.height());
        assert_eq!(broad_rows.height(), 3);
        assert_eq!(narrow_rows.height(), 1);
    }

    #[test]
    fn test_constraint_on_absent_column_is_skipped() {
        let registry = ColumnRegistry::new();
        let table = df!["Site" => ["SiteA", "SiteB"]].unwrap();
        // The table has no Region column, so that constraint is ignored.
        let selection = FilterSelection::new().select(FilterField::Region, ["North"]);
        let filtered = apply_filters(&table, &registry, &selection).unwrap();
        assert!(table.equals_missing(&filtered));
    }

    #[test]
    fn test_empty_table_passes_through() {
        let registry = ColumnRegistry::new();
        let table = DataFrame::empty();
        let selection = FilterSelection::new().select(FilterField::Site, ["SiteA"]);
        let filtered = apply_filters(&table, &registry, &selection).unwrap();
        assert_eq!(filtered.height(), 0);
    }

    #[test]
    fn test_unique_options_union_across_tables() {
        let registry = ColumnRegistry::new();
        let first = df!["Site" => ["SiteB", "SiteA", "SiteB"]].unwrap();
        let second = df!["Site" => ["SiteC", "SiteA"]].unwrap();
        let options = unique_options(&[first, second], &registry, concept::SITE);
        assert_eq!(options, vec!["SiteA", "SiteB", "SiteC"]);
    }

    #[test]
    fn test_unique_options_unknown_concept_is_empty() {
        let registry = ColumnRegistry::new();
        let table = df!["Site" => ["SiteA"]].unwrap();
        assert!(unique_options(&[table], &registry, "no_such_concept").is_empty());
    }

    #[test]
    fn test_unique_options_skips_missing_values_and_empty_tables() {
        let registry = ColumnRegistry::new();
        let with_nulls = df!["Site" => [Some("SiteA"), None, Some("SiteB")]].unwrap();
        let options = unique_options(&[with_nulls, DataFrame::empty()], &registry, concept::SITE);
        assert_eq!(options, vec!["SiteA", "SiteB"]);
    }
}
