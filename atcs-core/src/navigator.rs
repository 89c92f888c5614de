// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use crate::breadcrumb::{breadcrumbs, Breadcrumb};
use crate::dataset::Dataset;
use crate::filter::{filter_active, FilteredItems};
use crate::link_opener::{LinkOpener, LogLinkOpener};
use crate::logging::debug;
use crate::snapshot::ViewSnapshot;
use crate::stats::{stats_for, StatsSummary};
use crate::view_state::{Effect, NavigationAction, Transition, ViewLevel, ViewState};

/// Drives one browsing session over a static dataset.
///
/// The navigator turns ids and row positions into records, feeds the
/// resulting actions through [`ViewState::apply`] and hands outbound
/// navigation to its [`LinkOpener`]. Derived data (totals, filtered rows,
/// stats) is recomputed on every read.
#[derive(Debug)]
pub struct Navigator<O = LogLinkOpener> {
    dataset: Arc<Dataset>,
    state: ViewState,
    opener: O,
}

impl Navigator<LogLinkOpener> {
    /// Navigator whose outbound links are only logged.
    pub fn with_dataset(dataset: impl Into<Arc<Dataset>>) -> Self {
        Self::new(dataset, LogLinkOpener)
    }
}

impl<O: LinkOpener> Navigator<O> {
    pub fn new(dataset: impl Into<Arc<Dataset>>, opener: O) -> Self {
        Self {
            dataset: dataset.into(),
            state: ViewState::new(),
            opener,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    pub const fn opener(&self) -> &O {
        &self.opener
    }

    /// Applies an action and performs its effect.
    pub fn dispatch(&mut self, action: NavigationAction) -> Option<Transition> {
        let label = action_label(&action);
        let Some(transition) = self.state.apply(action) else {
            debug!("ignored {} at {:?} level", label, self.state.level());
            return None;
        };

        debug!("{}: {:?} -> {:?}", label, transition.from, transition.to);
        if let Effect::OpenExternal(url) = &transition.effect {
            self.opener.open(url);
        }
        Some(transition)
    }

    /// Selects a province by id. Unknown ids are ignored.
    pub fn select_province(&mut self, id: &str) -> Option<Transition> {
        let province = self.dataset.province(id).cloned()?;
        self.dispatch(NavigationAction::SelectProvince(province))
    }

    /// Selects a regency of the selected province by id.
    pub fn select_regency(&mut self, id: &str) -> Option<Transition> {
        let regency = self.state.selected_province()?.regency(id).cloned()?;
        self.dispatch(NavigationAction::SelectRegency(regency))
    }

    /// Selects the row at `index` (0-based) of the filtered list in view.
    pub fn select_visible(&mut self, index: usize) -> Option<Transition> {
        let action = match self.visible() {
            FilteredItems::Provinces(items) => {
                NavigationAction::SelectProvince(items.get(index).copied()?.clone())
            }
            FilteredItems::Regencies(items) => {
                NavigationAction::SelectRegency(items.get(index).copied()?.clone())
            }
            FilteredItems::Nothing => return None,
        };
        self.dispatch(action)
    }

    pub fn back(&mut self) -> Option<Transition> {
        self.dispatch(NavigationAction::Back)
    }

    pub fn reset_to_root(&mut self) -> Option<Transition> {
        self.dispatch(NavigationAction::ResetToRoot)
    }

    pub fn breadcrumb(&mut self, level: ViewLevel) -> Option<Transition> {
        self.dispatch(NavigationAction::Breadcrumb(level))
    }

    /// Replaces the search query, as on every keystroke.
    pub fn search(&mut self, query: impl Into<String>) -> Option<Transition> {
        self.dispatch(NavigationAction::Search(query.into()))
    }

    /// The filtered collection for the current level.
    pub fn visible(&self) -> FilteredItems<'_> {
        filter_active(&self.state, &self.dataset)
    }

    pub fn stats(&self) -> StatsSummary {
        stats_for(&self.state, &self.dataset)
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        breadcrumbs(&self.state)
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::capture(&self.state, &self.dataset)
    }
}

fn action_label(action: &NavigationAction) -> &'static str {
    match action {
        NavigationAction::SelectProvince(_) => "select province",
        NavigationAction::SelectRegency(_) => "select regency",
        NavigationAction::Back => "back",
        NavigationAction::ResetToRoot => "reset to root",
        NavigationAction::Breadcrumb(_) => "breadcrumb",
        NavigationAction::Search(_) => "search",
    }
}
