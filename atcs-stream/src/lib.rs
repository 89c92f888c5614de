// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Event-driven navigation sessions.
//!
//! Front ends turn clicks and keystrokes into a stream of
//! [`NavigationCommand`](atcs_core::NavigationCommand)s; [`NavigateExt::navigate`]
//! folds them through a single [`Navigator`](atcs_core::Navigator) and emits
//! a fresh screen for each one.

mod logging;
pub mod navigate;

pub use self::navigate::{NavigateExt, NavigationUpdate};
