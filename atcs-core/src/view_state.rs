// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Three-level drill-down: province list, regency list, external location.
//!
//! Every transition and its side effects live in [`ViewState::apply`]. An
//! action that is not valid from the current level leaves the state untouched
//! and yields `None`.
//!
//! | From     | Action               | To       | Side effect                                   |
//! |----------|----------------------|----------|-----------------------------------------------|
//! | Province | `SelectProvince(p)`  | Regency  | province := p, query := ""                    |
//! | Regency  | `SelectRegency(r)`   | Location | regency := r, query := "", open `r.url`       |
//! | Regency  | `Back`               | Province | province := none, query := ""                 |
//! | Location | `Back`               | Regency  | regency := none, query := ""                  |
//! | any      | `ResetToRoot`        | Province | province := none, regency := none, query := ""|
//! | any      | `Breadcrumb(level)`  | level    | no-op on the current level, else as above     |
//! | Province, Regency | `Search(q)` | same     | query := q                                    |

use serde::{Deserialize, Serialize};

use crate::province::Province;
use crate::regency::Regency;

/// Which collection is displayed and searched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewLevel {
    #[default]
    Province,
    Regency,
    /// Terminal: the portal of the selected regency has been handed off.
    Location,
}

/// A user intent, carrying the records it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    SelectProvince(Province),
    SelectRegency(Regency),
    Back,
    ResetToRoot,
    Breadcrumb(ViewLevel),
    Search(String),
}

/// Work for the host environment produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the URL in a new browsing context. Fire-and-forget.
    OpenExternal(String),
}

/// Result of an applied action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: ViewLevel,
    pub to: ViewLevel,
    pub effect: Effect,
}

/// Session-scoped navigation state, owned by the UI layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    level: ViewLevel,
    selected_province: Option<Province>,
    selected_regency: Option<Regency>,
    search_query: String,
}

impl ViewState {
    /// Initial state: province level, nothing selected, empty query.
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn level(&self) -> ViewLevel {
        self.level
    }

    pub const fn selected_province(&self) -> Option<&Province> {
        self.selected_province.as_ref()
    }

    pub const fn selected_regency(&self) -> Option<&Regency> {
        self.selected_regency.as_ref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Back is hidden at the province level.
    pub fn can_go_back(&self) -> bool {
        self.level != ViewLevel::Province
    }

    /// Applies `action`, returning the transition it caused.
    pub fn apply(&mut self, action: NavigationAction) -> Option<Transition> {
        use NavigationAction as Action;
        use ViewLevel as Level;

        let from = self.level;
        let effect = match (from, action) {
            (Level::Province, Action::SelectProvince(province)) => {
                self.selected_province = Some(province);
                self.enter(Level::Regency);
                Effect::None
            }
            (Level::Regency, Action::SelectRegency(regency)) => {
                let url = regency.url.clone();
                self.selected_regency = Some(regency);
                self.enter(Level::Location);
                Effect::OpenExternal(url)
            }
            (Level::Regency, Action::Back) => {
                self.selected_province = None;
                self.enter(Level::Province);
                Effect::None
            }
            (Level::Location, Action::Back) => {
                self.selected_regency = None;
                self.enter(Level::Regency);
                Effect::None
            }
            (_, Action::ResetToRoot) => {
                *self = Self::default();
                Effect::None
            }
            (current, Action::Breadcrumb(target)) if current == target => return None,
            (_, Action::Breadcrumb(Level::Province)) => return self.apply(Action::ResetToRoot),
            (Level::Location, Action::Breadcrumb(Level::Regency)) => {
                return self.apply(Action::Back)
            }
            (Level::Province | Level::Regency, Action::Search(query)) => {
                self.search_query = query;
                Effect::None
            }
            _ => return None,
        };

        Some(Transition {
            from,
            to: self.level,
            effect,
        })
    }

    fn enter(&mut self, level: ViewLevel) {
        self.level = level;
        self.search_query.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn semarang() -> Regency {
        Regency::new("semarang", "Semarang", 165, 154, 0, "https://semarang.invalid/")
    }

    fn jateng() -> Province {
        Province::new("jateng", "Jawa Tengah", vec![semarang()])
    }

    #[test]
    fn initial_state_is_province_level_without_selection() {
        let state = ViewState::new();

        assert_eq!(state.level(), ViewLevel::Province);
        assert!(state.selected_province().is_none());
        assert!(state.selected_regency().is_none());
        assert_eq!(state.search_query(), "");
        assert!(!state.can_go_back());
    }

    #[test]
    fn back_is_ignored_at_province_level() {
        let mut state = ViewState::new();
        state.apply(NavigationAction::Search("ja".into()));

        assert_eq!(state.apply(NavigationAction::Back), None);
        assert_eq!(state.search_query(), "ja");
    }

    #[test]
    fn selecting_a_regency_requests_external_navigation() {
        let mut state = ViewState::new();
        state.apply(NavigationAction::SelectProvince(jateng()));

        let transition = state.apply(NavigationAction::SelectRegency(semarang()));

        assert_eq!(
            transition,
            Some(Transition {
                from: ViewLevel::Regency,
                to: ViewLevel::Location,
                effect: Effect::OpenExternal("https://semarang.invalid/".into()),
            })
        );
        assert_eq!(state.selected_regency(), Some(&semarang()));
    }

    #[test]
    fn out_of_place_selections_are_ignored() {
        let mut state = ViewState::new();

        assert_eq!(state.apply(NavigationAction::SelectRegency(semarang())), None);

        state.apply(NavigationAction::SelectProvince(jateng()));
        assert_eq!(state.apply(NavigationAction::SelectProvince(jateng())), None);
        assert_eq!(state.level(), ViewLevel::Regency);
    }

    #[test]
    fn search_is_ignored_at_location_level() {
        let mut state = ViewState::new();
        state.apply(NavigationAction::SelectProvince(jateng()));
        state.apply(NavigationAction::SelectRegency(semarang()));

        assert_eq!(state.apply(NavigationAction::Search("x".into())), None);
        assert_eq!(state.search_query(), "");
    }
}
