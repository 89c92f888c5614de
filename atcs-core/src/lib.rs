// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core of the ATCS CCTV directory browser.
//!
//! A static hierarchy of provinces and regencies, each regency linking out to
//! a traffic-camera portal run by a local government. The crate provides:
//!
//! - [`Dataset`]: the immutable hierarchy, loaded from embedded TOML
//! - [`Aggregate`]: per-province totals, recomputed on read
//! - [`filter`]: case-insensitive name search over the collection in view
//! - [`ViewState`]: the province → regency → location state machine
//! - [`Navigator`]: a session tying the above to an outbound [`LinkOpener`]
//!
//! # Example
//!
//! ```
//! use atcs_core::{Dataset, Navigator, ViewLevel};
//!
//! let mut navigator = Navigator::with_dataset(Dataset::embedded().unwrap());
//! navigator.select_province("jateng");
//!
//! let snapshot = navigator.snapshot();
//! assert_eq!(snapshot.level, ViewLevel::Regency);
//! assert_eq!(snapshot.stats.total, 216);
//! ```

pub mod aggregate;
pub mod breadcrumb;
pub mod command;
pub mod dataset;
pub mod filter;
pub mod labels;
pub mod link_opener;
mod logging;
pub mod navigator;
pub mod province;
pub mod regency;
pub mod snapshot;
pub mod stats;
pub mod stream_item;
pub mod view_state;

pub use self::aggregate::{summarize, Aggregate, ProvinceSummary};
pub use self::breadcrumb::Breadcrumb;
pub use self::command::NavigationCommand;
pub use self::dataset::{Dataset, DatasetIssue};
pub use self::filter::{filter_by_name, FilteredItems, Named};
pub use self::link_opener::{LinkOpener, LogLinkOpener};
pub use self::navigator::Navigator;
pub use self::province::Province;
pub use self::regency::Regency;
pub use self::snapshot::{ViewRow, ViewSnapshot};
pub use self::stats::StatsSummary;
pub use self::stream_item::StreamItem;
pub use self::view_state::{Effect, NavigationAction, Transition, ViewLevel, ViewState};
pub use atcs_error::{AtcsError, Result};
