// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # ATCS Monitor
//!
//! Browse the traffic-camera (ATCS) portals of Indonesian local governments,
//! grouped by province and regency.
//!
//! This crate bundles the workspace for applications:
//!
//! - [`atcs_core`]: dataset, aggregation, search and the view-state machine
//! - [`atcs_stream`]: stream-driven navigation sessions
//! - [`cli`], [`render`] and [`session`]: the terminal front end used by `atcs-monitor`
//!
//! ## Quick Start
//!
//! ```rust
//! use atcs::prelude::*;
//!
//! let mut navigator = Navigator::with_dataset(Dataset::embedded().unwrap());
//! navigator.select_province("jatim");
//!
//! let screen = atcs::render::render(&navigator.snapshot());
//! assert!(screen.contains("Gersik"));
//! ```

pub mod cli;
pub mod opener;
pub mod render;
pub mod session;

pub use atcs_core::{
    Breadcrumb, Dataset, Effect, NavigationAction, NavigationCommand, Navigator, Province,
    Regency, StatsSummary, StreamItem, Transition, ViewLevel, ViewRow, ViewSnapshot, ViewState,
};
pub use atcs_error::{AtcsError, Result};
pub use atcs_stream::{NavigateExt, NavigationUpdate};

/// Prelude module for convenient imports
pub mod prelude {
    pub use atcs_core::{
        Dataset, LinkOpener, NavigationCommand, Navigator, StreamItem, ViewLevel, ViewSnapshot,
    };
    pub use atcs_stream::{NavigateExt, NavigationUpdate};
}
