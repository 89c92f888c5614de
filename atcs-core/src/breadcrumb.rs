// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Serialize;

use crate::view_state::{ViewLevel, ViewState};

/// Label of the root crumb.
pub const ROOT_LABEL: &str = "Indonesia";

/// One entry of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    /// Level a click on this crumb jumps to.
    pub level: ViewLevel,
    /// `false` for the crumb of the current level, whose click is a no-op.
    pub clickable: bool,
}

/// Root crumb first, then the selected province and regency, if any.
pub fn breadcrumbs(state: &ViewState) -> Vec<Breadcrumb> {
    let current = state.level();
    let crumb = |label: &str, level: ViewLevel| Breadcrumb {
        label: label.to_string(),
        level,
        clickable: level != current,
    };

    let mut trail = vec![crumb(ROOT_LABEL, ViewLevel::Province)];
    if let Some(province) = state.selected_province() {
        trail.push(crumb(&province.name, ViewLevel::Regency));
    }
    if let Some(regency) = state.selected_regency() {
        trail.push(crumb(&regency.name, ViewLevel::Location));
    }
    trail
}
