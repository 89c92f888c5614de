// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the ATCS workspace.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! - [`fixtures`]: the reference provinces and regencies as plain builders
//! - [`RecordingOpener`]: a link opener that remembers every URL it was handed
//! - [`test_channel`]: push values imperatively, receive a `StreamItem` stream
//!
//! ```rust
//! use atcs_core::Navigator;
//! use atcs_test_utils::{fixtures::sample_dataset, RecordingOpener};
//!
//! let opener = RecordingOpener::new();
//! let mut navigator = Navigator::new(sample_dataset(), opener.clone());
//! navigator.select_province("jatim");
//! navigator.select_regency("gersik");
//!
//! assert_eq!(opener.opened(), vec!["https://cctvkanjeng.gresikkab.go.id/"]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod fixtures;
pub mod helpers;
pub mod recording_opener;

use atcs_core::StreamItem;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use helpers::{assert_no_element_emitted, unwrap_stream, unwrap_value};
pub use recording_opener::RecordingOpener;

/// Creates a test channel that automatically wraps values in `StreamItem::Value`.
///
/// # Example
///
/// ```rust
/// use atcs_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel::<u32>();
/// tx.send(7).unwrap();
///
/// let item = stream.next().await.unwrap().unwrap();
/// assert_eq!(item, 7);
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` for testing error propagation.
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
