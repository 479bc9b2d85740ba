//! Explicit session context.
//!
//! Replaces the dynamically keyed session state of a UI runtime with a
//! statically typed structure, and orchestrates the one synchronous pass a
//! user interaction triggers: load every registered source (cached), apply
//! the current selection, hand the per-dataset tables to the panel layer.

use std::collections::BTreeMap;
use std::path::PathBuf;

use polars::prelude::*;

use crate::config::{ColumnRegistry, DatasetKey};
use crate::error::DashboardError;
use crate::filter::{apply_filters, unique_options, FilterField, FilterSelection};
use crate::loader::Loader;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Es,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    #[default]
    Dashboard,
    Glossary,
}

/// Per-session UI state, passed by reference through the call chain.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub language: Language,
    pub navigation: NavigationMode,
    pub filters: FilterSelection,
}

/// Owns the column registry and the loader; every public operation is a
/// pure function of its inputs plus the loader's content cache.
#[derive(Debug)]
pub struct DashboardContext {
    columns: ColumnRegistry,
    loader: Loader,
}

impl DashboardContext {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            columns: ColumnRegistry::new(),
            loader: Loader::new(base_path),
        }
    }

    pub fn columns(&self) -> &ColumnRegistry {
        &self.columns
    }

    /// Load one registered source, resolving its date column through the
    /// column registry. An unresolvable date concept loads without date
    /// parsing rather than failing.
    pub fn load_source(&mut self, key: DatasetKey) -> DataFrame {
        let source = key.source();
        let date_actual = source.date_concept.and_then(|c| self.columns.actual(c));
        match date_actual {
            Some(column) => self.loader.load(source.file, &[column]),
            None => self.loader.load(source.file, &[]),
        }
    }

    /// Every registered source, loaded raw; empty tables are excluded.
    /// Used once per session to populate the filter-option widgets.
    pub fn raw_tables(&mut self) -> Vec<DataFrame> {
        DatasetKey::ALL
            .into_iter()
            .map(|key| self.load_source(key))
            .filter(|table| !table.is_empty())
            .collect()
    }

    /// Sorted distinct choices for one filterable dimension across all
    /// sources.
    pub fn filter_options(&mut self, field: FilterField) -> Vec<String> {
        let tables = self.raw_tables();
        unique_options(&tables, &self.columns, field.concept())
    }

    /// One filtered table per dataset — the contract the panel layer
    /// consumes. Recomputed whenever the selection changes; raw loads come
    /// from the cache.
    pub fn load_filtered(
        &mut self,
        selection: &FilterSelection,
    ) -> Result<BTreeMap<DatasetKey, DataFrame>, DashboardError> {
        let mut filtered = BTreeMap::new();
        for key in DatasetKey::ALL {
            let raw = self.load_source(key);
            filtered.insert(key, apply_filters(&raw, &self.columns, selection)?);
        }
        Ok(filtered)
    }

    /// Explicit cache reset, e.g. when the session's source directory is
    /// swapped in tests.
    pub fn invalidate_cache(&mut self) {
        self.loader.invalidate();
    }
}
