// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use atcs_core::{Effect, NavigationAction, Transition, ViewLevel, ViewState};
use atcs_test_utils::fixtures::{jawa_tengah, semarang};

fn at_regency_level() -> ViewState {
    let mut state = ViewState::new();
    state.apply(NavigationAction::SelectProvince(jawa_tengah()));
    state
}

fn at_location_level() -> ViewState {
    let mut state = at_regency_level();
    state.apply(NavigationAction::SelectRegency(semarang()));
    state
}

#[test]
fn test_select_province_enters_regency_level() {
    // Arrange
    let mut state = ViewState::new();
    state.apply(NavigationAction::Search("jawa".into()));

    // Act
    let transition = state.apply(NavigationAction::SelectProvince(jawa_tengah()));

    // Assert
    assert_eq!(
        transition,
        Some(Transition {
            from: ViewLevel::Province,
            to: ViewLevel::Regency,
            effect: Effect::None,
        })
    );
    assert_eq!(state.selected_province(), Some(&jawa_tengah()));
    assert_eq!(state.search_query(), "");
    assert!(state.can_go_back());
}

#[test]
fn test_select_regency_enters_location_and_resets_query() {
    let mut state = at_regency_level();
    state.apply(NavigationAction::Search("sem".into()));

    let transition = state.apply(NavigationAction::SelectRegency(semarang()));

    assert_eq!(state.level(), ViewLevel::Location);
    assert_eq!(state.search_query(), "");
    assert_eq!(
        transition.map(|t| t.effect),
        Some(Effect::OpenExternal(semarang().url))
    );
    // The province stays selected underneath
    assert_eq!(state.selected_province(), Some(&jawa_tengah()));
}

#[test]
fn test_province_regency_back_round_trip() {
    // Arrange
    let mut state = ViewState::new();

    // Act
    state.apply(NavigationAction::SelectProvince(jawa_tengah()));
    let transition = state.apply(NavigationAction::Back);

    // Assert
    assert_eq!(transition.map(|t| t.to), Some(ViewLevel::Province));
    assert_eq!(state, ViewState::new());
}

#[test]
fn test_back_from_location_clears_only_regency() {
    let mut state = at_location_level();

    let transition = state.apply(NavigationAction::Back);

    assert_eq!(transition.map(|t| (t.from, t.to)), Some((ViewLevel::Location, ViewLevel::Regency)));
    assert_eq!(state.selected_regency(), None);
    assert_eq!(state.selected_province(), Some(&jawa_tengah()));
    assert_eq!(state.search_query(), "");
}

#[test]
fn test_reset_to_root_from_every_state() {
    let mut searching = ViewState::new();
    searching.apply(NavigationAction::Search("kal".into()));
    let mut regency_searching = at_regency_level();
    regency_searching.apply(NavigationAction::Search("x".into()));

    for mut state in [
        ViewState::new(),
        searching,
        at_regency_level(),
        regency_searching,
        at_location_level(),
    ] {
        let transition = state.apply(NavigationAction::ResetToRoot);

        assert!(transition.is_some());
        assert_eq!(state, ViewState::new());
        assert_eq!(state.level(), ViewLevel::Province);
        assert!(state.selected_province().is_none());
        assert!(state.selected_regency().is_none());
        assert_eq!(state.search_query(), "");
    }
}

#[test]
fn test_breadcrumb_on_current_level_is_noop() {
    let mut province = ViewState::new();
    province.apply(NavigationAction::Search("ja".into()));
    let mut regency = at_regency_level();
    let mut location = at_location_level();

    assert_eq!(province.apply(NavigationAction::Breadcrumb(ViewLevel::Province)), None);
    assert_eq!(province.search_query(), "ja");
    assert_eq!(regency.apply(NavigationAction::Breadcrumb(ViewLevel::Regency)), None);
    assert_eq!(regency, at_regency_level());
    assert_eq!(location.apply(NavigationAction::Breadcrumb(ViewLevel::Location)), None);
    assert_eq!(location, at_location_level());
}

#[test]
fn test_breadcrumb_to_province_resets_everything() {
    let mut state = at_location_level();

    let transition = state.apply(NavigationAction::Breadcrumb(ViewLevel::Province));

    assert_eq!(transition.map(|t| t.to), Some(ViewLevel::Province));
    assert_eq!(state, ViewState::new());
}

#[test]
fn test_breadcrumb_to_regency_from_location_goes_back() {
    let mut state = at_location_level();

    state.apply(NavigationAction::Breadcrumb(ViewLevel::Regency));

    assert_eq!(state, at_regency_level());
}

#[test]
fn test_breadcrumb_forward_is_ignored() {
    let mut state = at_regency_level();

    assert_eq!(state.apply(NavigationAction::Breadcrumb(ViewLevel::Location)), None);
    assert_eq!(state.level(), ViewLevel::Regency);
}

#[test]
fn test_search_replaces_query_without_leaving_level() {
    let mut state = at_regency_level();

    state.apply(NavigationAction::Search("p".into()));
    let transition = state.apply(NavigationAction::Search("pe".into()));

    assert_eq!(
        transition,
        Some(Transition {
            from: ViewLevel::Regency,
            to: ViewLevel::Regency,
            effect: Effect::None,
        })
    );
    assert_eq!(state.search_query(), "pe");
}
