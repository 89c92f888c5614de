// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Serialize;

use crate::aggregate::Aggregate;
use crate::dataset::Dataset;
use crate::regency::Regency;
use crate::view_state::{ViewLevel, ViewState};

/// Header counters: total cameras, online cameras, alerts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub total: u64,
    pub online: u64,
    pub alerts: u64,
}

impl StatsSummary {
    /// Fallback when a selection the level expects is missing.
    pub const ZERO: Self = Self {
        total: 0,
        online: 0,
        alerts: 0,
    };
}

impl From<Aggregate> for StatsSummary {
    fn from(aggregate: Aggregate) -> Self {
        Self {
            total: aggregate.total_cctv,
            online: aggregate.online_count,
            alerts: aggregate.alert_count,
        }
    }
}

impl From<&Regency> for StatsSummary {
    fn from(regency: &Regency) -> Self {
        Aggregate::of(regency).into()
    }
}

/// Counters for the current view.
///
/// The province level always sums over the whole dataset, so an active
/// search never changes the numbers.
pub fn stats_for(state: &ViewState, dataset: &Dataset) -> StatsSummary {
    match state.level() {
        ViewLevel::Province => dataset.totals().into(),
        ViewLevel::Regency => state
            .selected_province()
            .map_or(StatsSummary::ZERO, |province| province.aggregate().into()),
        ViewLevel::Location => state
            .selected_regency()
            .map_or(StatsSummary::ZERO, StatsSummary::from),
    }
}
