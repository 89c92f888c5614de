// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};

/// A regency or city: the leaf of the directory.
///
/// Counts are static numbers taken from the dataset. `online_count` is
/// expected not to exceed `cctv_count` but this is never enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regency {
    pub id: String,
    pub name: String,
    pub cctv_count: u32,
    pub online_count: u32,
    pub alert_count: u32,
    /// Camera portal operated by the local government.
    pub url: String,
}

impl Regency {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cctv_count: u32,
        online_count: u32,
        alert_count: u32,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cctv_count,
            online_count,
            alert_count,
            url: url.into(),
        }
    }

    /// Whether the alert badge is shown for this regency.
    #[must_use]
    pub const fn has_alerts(&self) -> bool {
        self.alert_count > 0
    }
}
