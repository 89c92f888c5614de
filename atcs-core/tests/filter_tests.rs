// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use atcs_core::filter::{filter_active, matches_name};
use atcs_core::{filter_by_name, FilteredItems, NavigationAction, Regency, ViewState};
use atcs_test_utils::fixtures::{
    gersik, jawa_tengah, jawa_timur, kotawaringin_barat, sample_dataset, semarang,
};

fn names<T: atcs_core::Named>(items: &[&T]) -> Vec<String> {
    items.iter().map(|item| item.name().to_string()).collect()
}

#[test]
fn test_empty_query_is_identity() {
    let dataset = sample_dataset();

    let all = filter_by_name(&dataset.provinces, "");

    assert_eq!(all.len(), dataset.provinces.len());
    assert!(all.iter().zip(&dataset.provinces).all(|(a, b)| *a == b));
}

#[test]
fn test_filter_is_case_insensitive_substring() {
    let regencies = jawa_tengah().regencies;

    assert_eq!(names(&filter_by_name(&regencies, "LONG")), vec!["Pekalongan"]);
    assert_eq!(names(&filter_by_name(&regencies, "o")), vec!["Pekalongan", "Wonosobo"]);
}

#[test]
fn test_filter_preserves_order_and_partitions_items() {
    let regencies: Vec<Regency> = vec![
        kotawaringin_barat(),
        semarang(),
        gersik(),
        jawa_tengah().regencies[1].clone(),
    ];

    for query in ["a", "ar", "S", "zzz", "barat", " "] {
        let kept = filter_by_name(&regencies, query);

        // Subsequence in original order
        let mut cursor = regencies.iter();
        for item in &kept {
            assert!(cursor.any(|r| r == *item), "order broken for {query:?}");
        }

        // Every kept item matches, every dropped item does not
        for regency in &regencies {
            let was_kept = kept.iter().any(|k| *k == regency);
            assert_eq!(was_kept, matches_name(&regency.name, query), "{query:?}");
        }
    }
}

#[test]
fn test_no_match_yields_empty_list() {
    let dataset = sample_dataset();

    assert!(filter_by_name(&dataset.provinces, "sumatra").is_empty());
}

#[test]
fn test_province_level_matches_province_names_only() {
    // Arrange
    let dataset = atcs_core::Dataset::new(vec![jawa_tengah(), jawa_timur()]);
    let mut state = ViewState::new();

    // Act
    state.apply(NavigationAction::Search("sema".into()));

    // Assert: "Semarang" lives under Jawa Tengah, but only province names count
    assert_eq!(filter_active(&state, &dataset), FilteredItems::Provinces(vec![]));
}

#[test]
fn test_regency_level_filters_selected_province() {
    let dataset = sample_dataset();
    let mut state = ViewState::new();
    state.apply(NavigationAction::SelectProvince(jawa_tengah()));
    state.apply(NavigationAction::Search("WONO".into()));

    match filter_active(&state, &dataset) {
        FilteredItems::Regencies(items) => assert_eq!(names(&items), vec!["Wonosobo"]),
        other => panic!("expected regencies, got {other:?}"),
    }
}

#[test]
fn test_location_level_has_nothing_to_filter() {
    let dataset = sample_dataset();
    let mut state = ViewState::new();
    state.apply(NavigationAction::SelectProvince(jawa_tengah()));
    state.apply(NavigationAction::SelectRegency(semarang()));

    let items = filter_active(&state, &dataset);

    assert_eq!(items, FilteredItems::Nothing);
    assert!(items.is_empty());
}
