// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The static province/regency hierarchy and its TOML loader.

use std::collections::HashSet;
use std::fmt::{self, Display};
use std::path::Path;

use atcs_error::{AtcsError, IntoAtcsError, Result};
use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;
use crate::logging::warn;
use crate::province::Province;

const EMBEDDED_DATASET: &str = include_str!("../data/cctv.toml");

/// Immutable, ordered list of provinces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub provinces: Vec<Province>,
}

impl Dataset {
    pub fn new(provinces: Vec<Province>) -> Self {
        Self { provinces }
    }

    /// Load the dataset compiled into the binary.
    ///
    /// # Errors
    /// Returns [`AtcsError::Context`] if the embedded TOML is malformed.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_DATASET)
            .map_err(|e| e.into_atcs_error("parsing embedded dataset"))
    }

    /// Parse a dataset from TOML text.
    ///
    /// # Errors
    /// Returns [`AtcsError::Dataset`] when the text is not a valid dataset,
    /// including negative counts.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| AtcsError::dataset(e.to_string()))
    }

    /// Read and parse a dataset file.
    ///
    /// # Errors
    /// Returns [`AtcsError::Io`] if the file cannot be read and
    /// [`AtcsError::Dataset`] if it cannot be parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| AtcsError::io(path.display().to_string(), e))?;
        Self::from_toml_str(&text)
    }

    pub fn province(&self, id: &str) -> Option<&Province> {
        self.provinces.iter().find(|province| province.id == id)
    }

    /// Totals across all provinces.
    #[must_use]
    pub fn totals(&self) -> Aggregate {
        self.provinces.iter().map(Province::aggregate).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }

    /// Upstream precondition violations present in the data.
    ///
    /// These are reported, never rejected: every other operation keeps
    /// computing mechanically on whatever the data says.
    pub fn diagnostics(&self) -> Vec<DatasetIssue> {
        let mut issues = Vec::new();
        let mut province_ids = HashSet::new();

        for province in &self.provinces {
            if !province_ids.insert(province.id.as_str()) {
                issues.push(DatasetIssue::DuplicateProvinceId {
                    province: province.id.clone(),
                });
            }

            let mut regency_ids = HashSet::new();
            for regency in &province.regencies {
                if !regency_ids.insert(regency.id.as_str()) {
                    issues.push(DatasetIssue::DuplicateRegencyId {
                        province: province.id.clone(),
                        regency: regency.id.clone(),
                    });
                }
                if regency.online_count > regency.cctv_count {
                    issues.push(DatasetIssue::OnlineExceedsTotal {
                        regency: regency.id.clone(),
                        online: regency.online_count,
                        total: regency.cctv_count,
                    });
                }
            }
        }

        issues
    }

    /// Logs every diagnostic as a warning and returns how many were found.
    pub fn log_diagnostics(&self) -> usize {
        let issues = self.diagnostics();
        for issue in &issues {
            warn!("dataset: {}", issue);
        }
        issues.len()
    }
}

/// A data quality problem found by [`Dataset::diagnostics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetIssue {
    DuplicateProvinceId {
        province: String,
    },
    DuplicateRegencyId {
        province: String,
        regency: String,
    },
    OnlineExceedsTotal {
        regency: String,
        online: u32,
        total: u32,
    },
}

impl Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateProvinceId { province } => {
                write!(f, "duplicate province id '{province}'")
            }
            Self::DuplicateRegencyId { province, regency } => {
                write!(f, "duplicate regency id '{regency}' in province '{province}'")
            }
            Self::OnlineExceedsTotal {
                regency,
                online,
                total,
            } => write!(
                f,
                "regency '{regency}' reports {online} online cameras out of {total}"
            ),
        }
    }
}
