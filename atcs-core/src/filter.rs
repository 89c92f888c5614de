// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Case-insensitive name search over whichever collection is in view.

use crate::dataset::Dataset;
use crate::province::Province;
use crate::regency::Regency;
use crate::view_state::{ViewLevel, ViewState};

/// Anything that can be searched by its display name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Province {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Regency {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Returns `true` if `name` contains `query`, ignoring case.
///
/// An empty query matches every name.
pub fn matches_name(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Keeps the items whose name contains `query`, in their original order.
///
/// # Examples
///
/// ```
/// use atcs_core::filter::filter_by_name;
/// use atcs_core::Province;
///
/// let provinces = vec![
///     Province::new("jateng", "Jawa Tengah", vec![]),
///     Province::new("jatim", "Jawa Timur", vec![]),
/// ];
///
/// let hits = filter_by_name(&provinces, "TIMUR");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, "jatim");
/// ```
pub fn filter_by_name<'a, T: Named>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches_name(item.name(), query))
        .collect()
}

/// The filtered collection for the current view level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilteredItems<'a> {
    Provinces(Vec<&'a Province>),
    Regencies(Vec<&'a Regency>),
    /// Location level, or a level whose selection is missing.
    Nothing,
}

impl FilteredItems<'_> {
    pub fn len(&self) -> usize {
        match self {
            Self::Provinces(items) => items.len(),
            Self::Regencies(items) => items.len(),
            Self::Nothing => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Applies the search query of `state` to the collection it has in view.
///
/// At the province level only province names are matched, never the names
/// of the regencies underneath.
pub fn filter_active<'a>(state: &'a ViewState, dataset: &'a Dataset) -> FilteredItems<'a> {
    let query = state.search_query();
    match (state.level(), state.selected_province()) {
        (ViewLevel::Province, _) => {
            FilteredItems::Provinces(filter_by_name(&dataset.provinces, query))
        }
        (ViewLevel::Regency, Some(province)) => {
            FilteredItems::Regencies(filter_by_name(&province.regencies, query))
        }
        _ => FilteredItems::Nothing,
    }
}
