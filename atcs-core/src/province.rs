// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;
use crate::regency::Regency;

/// A province and its regencies in display order.
///
/// Totals are not stored: [`Province::aggregate`] folds them from the
/// current regencies on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub regencies: Vec<Regency>,
}

impl Province {
    pub fn new(id: impl Into<String>, name: impl Into<String>, regencies: Vec<Regency>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            regencies,
        }
    }

    /// Camera, online and alert totals plus the regency count.
    #[must_use]
    pub fn aggregate(&self) -> Aggregate {
        Aggregate::from_regencies(&self.regencies)
    }

    /// Finds a regency of this province by id.
    pub fn regency(&self, id: &str) -> Option<&Regency> {
        self.regencies.iter().find(|regency| regency.id == id)
    }
}
