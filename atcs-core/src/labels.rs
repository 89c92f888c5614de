// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Indonesian UI copy derived from the view state.

use crate::view_state::{ViewLevel, ViewState};

pub const APP_TITLE: &str = "ATCS Monitor Indonesia";
pub const EMPTY_STATE_MESSAGE: &str = "Tidak ada data yang ditemukan";

/// Page heading: the app name, then the name of the current selection.
pub fn title(state: &ViewState) -> String {
    match state.level() {
        ViewLevel::Province => APP_TITLE.to_string(),
        ViewLevel::Regency => state
            .selected_province()
            .map(|province| province.name.clone())
            .unwrap_or_default(),
        ViewLevel::Location => state
            .selected_regency()
            .map(|regency| regency.name.clone())
            .unwrap_or_default(),
    }
}

pub const fn subtitle(level: ViewLevel) -> &'static str {
    match level {
        ViewLevel::Province => "",
        ViewLevel::Regency => "Pilih Kabupaten/Kota",
        ViewLevel::Location => "Lokasi CCTV",
    }
}

pub const fn search_placeholder(level: ViewLevel) -> &'static str {
    match level {
        ViewLevel::Province => "Cari provinsi...",
        ViewLevel::Regency => "Cari kabupaten/kota...",
        ViewLevel::Location => "Cari lokasi...",
    }
}
