// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use atcs_core::{LinkOpener, NavigationCommand, Navigator, StreamItem, Transition, ViewSnapshot};
use futures::{Stream, StreamExt};

use crate::logging::warn;

/// What a session emits for each command it receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationUpdate {
    /// `None` when the command did not change the view.
    pub transition: Option<Transition>,
    pub snapshot: ViewSnapshot,
}

/// Drives a [`Navigator`] from a stream of commands.
pub trait NavigateExt: Stream<Item = StreamItem<NavigationCommand>> + Sized {
    /// Applies each command in arrival order and emits the resulting screen.
    ///
    /// The navigator is owned by the returned stream, so the whole session
    /// runs on whichever task polls it; there is no shared state to lock.
    ///
    /// # Behavior
    ///
    /// - One output per input, in order
    /// - Commands that are invalid at the current level still emit, with
    ///   `transition: None` and an unchanged snapshot
    /// - Errors are forwarded unchanged and never touch the view state
    ///
    /// # Examples
    ///
    /// ```rust
    /// use atcs_core::{NavigationCommand, Navigator, ViewLevel};
    /// use atcs_stream::NavigateExt;
    /// use atcs_test_utils::{fixtures::sample_dataset, test_channel, unwrap_stream, unwrap_value};
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let (tx, stream) = test_channel::<NavigationCommand>();
    /// let mut updates = Box::pin(stream.navigate(Navigator::with_dataset(sample_dataset())));
    ///
    /// tx.send(NavigationCommand::SelectProvince("jateng".into()))?;
    ///
    /// let update = unwrap_value(Some(unwrap_stream(&mut updates, 500).await));
    /// assert_eq!(update.snapshot.level, ViewLevel::Regency);
    /// # Ok(())
    /// # }
    /// ```
    fn navigate<O>(self, navigator: Navigator<O>) -> impl Stream<Item = StreamItem<NavigationUpdate>>
    where
        O: LinkOpener;
}

impl<S> NavigateExt for S
where
    S: Stream<Item = StreamItem<NavigationCommand>> + Sized,
{
    fn navigate<O>(self, mut navigator: Navigator<O>) -> impl Stream<Item = StreamItem<NavigationUpdate>>
    where
        O: LinkOpener,
    {
        self.map(move |item| match item {
            StreamItem::Value(command) => {
                let transition = navigator.execute(command);
                StreamItem::Value(NavigationUpdate {
                    transition,
                    snapshot: navigator.snapshot(),
                })
            }
            StreamItem::Error(e) => {
                warn!("navigation input error: {}", e);
                StreamItem::Error(e)
            }
        })
    }
}
