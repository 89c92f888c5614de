// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use atcs_core::StreamItem;
use futures::stream::StreamExt;
use futures::Stream;
use tokio::time::{sleep, timeout};

/// Asserts that `stream` stays silent for `timeout_ms` milliseconds.
///
/// # Panics
///
/// Panics if the stream yields an item or ends within the window.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _state = stream.next() => {
            panic!("Unexpected item emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Waits up to `timeout_ms` milliseconds for the next stream item.
///
/// # Panics
///
/// Panics on timeout or if the stream has ended.
pub async fn unwrap_stream<T, S>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Expected a stream item but the stream ended"),
        Err(_) => panic!("Timed out after {timeout_ms}ms waiting for a stream item"),
    }
}

/// Extracts the value of a received item.
///
/// # Panics
///
/// Panics if there was no item or the item is an error.
pub fn unwrap_value<T>(item: Option<StreamItem<T>>) -> T {
    match item {
        Some(StreamItem::Value(value)) => value,
        Some(StreamItem::Error(e)) => panic!("Expected a value but got error: {e}"),
        None => panic!("Expected a value but the stream ended"),
    }
}
