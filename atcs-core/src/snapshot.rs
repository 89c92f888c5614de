// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Serialize;

use crate::aggregate::Aggregate;
use crate::breadcrumb::{breadcrumbs, Breadcrumb};
use crate::dataset::Dataset;
use crate::filter::{filter_active, FilteredItems};
use crate::labels::{search_placeholder, subtitle, title, EMPTY_STATE_MESSAGE};
use crate::province::Province;
use crate::regency::Regency;
use crate::stats::{stats_for, StatsSummary};
use crate::view_state::{ViewLevel, ViewState};

/// One card of the list in view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRow {
    pub id: String,
    pub name: String,
    pub total_cctv: u64,
    pub online_count: u64,
    pub alert_count: u64,
    /// Present on province rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regency_count: Option<usize>,
    /// Present on regency rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ViewRow {
    pub const fn shows_alert_badge(&self) -> bool {
        self.alert_count > 0
    }
}

impl From<&Province> for ViewRow {
    fn from(province: &Province) -> Self {
        let aggregate = province.aggregate();
        Self {
            id: province.id.clone(),
            name: province.name.clone(),
            total_cctv: aggregate.total_cctv,
            online_count: aggregate.online_count,
            alert_count: aggregate.alert_count,
            regency_count: Some(aggregate.regency_count),
            url: None,
        }
    }
}

impl From<&Regency> for ViewRow {
    fn from(regency: &Regency) -> Self {
        let aggregate = Aggregate::of(regency);
        Self {
            id: regency.id.clone(),
            name: regency.name.clone(),
            total_cctv: aggregate.total_cctv,
            online_count: aggregate.online_count,
            alert_count: aggregate.alert_count,
            regency_count: None,
            url: Some(regency.url.clone()),
        }
    }
}

/// Everything a front end needs to draw the current screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub level: ViewLevel,
    pub title: String,
    pub subtitle: String,
    pub search_placeholder: String,
    pub search_query: String,
    pub back_visible: bool,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub stats: StatsSummary,
    pub rows: Vec<ViewRow>,
    /// Set when the filtered list is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl ViewSnapshot {
    /// Renders `state` against `dataset`. Nothing is cached.
    pub fn capture(state: &ViewState, dataset: &Dataset) -> Self {
        let rows: Vec<ViewRow> = match filter_active(state, dataset) {
            FilteredItems::Provinces(items) => items.into_iter().map(ViewRow::from).collect(),
            FilteredItems::Regencies(items) => items.into_iter().map(ViewRow::from).collect(),
            FilteredItems::Nothing => Vec::new(),
        };
        let level = state.level();

        Self {
            level,
            title: title(state),
            subtitle: subtitle(level).to_string(),
            search_placeholder: search_placeholder(level).to_string(),
            search_query: state.search_query().to_string(),
            back_visible: state.can_go_back(),
            breadcrumbs: breadcrumbs(state),
            stats: stats_for(state, dataset),
            empty_message: rows
                .is_empty()
                .then(|| EMPTY_STATE_MESSAGE.to_string()),
            rows,
        }
    }
}
