// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The interactive loop behind `atcs-monitor`.
//!
//! Stdout carries only screens: rendered text, or one JSON object per line in
//! [`OutputMode::Json`]. Help, input errors and logs go to stderr.

use std::io::{self, Write};

use atcs_core::{Effect, LinkOpener, NavigationCommand, Navigator, StreamItem, ViewSnapshot};
use atcs_error::AtcsError;
use atcs_stream::{NavigateExt, NavigationUpdate};
use futures::{future, Stream, StreamExt};
use serde_json::json;
use tracing::{debug, error, info};

use crate::cli::{parse_input, Input, HELP};
use crate::render::render;

/// How screens are written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    /// One JSON document per line.
    Json,
}

impl OutputMode {
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// One screen in the given mode.
///
/// # Errors
/// Returns the serializer error if the snapshot cannot be encoded as JSON.
pub fn format_snapshot(snapshot: &ViewSnapshot, mode: OutputMode) -> serde_json::Result<String> {
    match mode {
        OutputMode::Text => Ok(render(snapshot)),
        OutputMode::Json => serde_json::to_string(snapshot),
    }
}

/// Output lines for one update.
///
/// In JSON mode a hand-off to an external portal follows the snapshot as its
/// own `{"open_external": url}` line.
///
/// # Errors
/// Returns the serializer error if the snapshot cannot be encoded as JSON.
pub fn format_update(
    update: &NavigationUpdate,
    mode: OutputMode,
) -> serde_json::Result<Vec<String>> {
    let mut lines = vec![format_snapshot(&update.snapshot, mode)?];
    if mode == OutputMode::Json {
        if let Some(Effect::OpenExternal(url)) = update.transition.as_ref().map(|t| &t.effect) {
            lines.push(json!({ "open_external": url }).to_string());
        }
    }
    Ok(lines)
}

/// Runs a session until the input ends or the user quits.
///
/// # Errors
/// Fails when reading the input fails or the output cannot be written.
/// Unknown commands are reported on stderr and the session continues.
pub async fn run<S, O, W>(
    lines: S,
    navigator: Navigator<O>,
    mode: OutputMode,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: Stream<Item = io::Result<String>>,
    O: LinkOpener,
    W: Write,
{
    writeln!(out, "{}", format_snapshot(&navigator.snapshot(), mode)?)?;
    if mode == OutputMode::Text {
        eprintln!("{HELP}");
    }

    let commands = lines
        .map(|line| {
            line.map_err(|e| AtcsError::io("<stdin>", e))
                .and_then(|text| parse_input(&text))
        })
        .take_while(|input| future::ready(!matches!(input, Ok(Input::Quit))))
        .filter_map(|input| {
            future::ready(match input {
                Ok(Input::Navigate(command)) => Some(StreamItem::Value(command)),
                Ok(Input::Help) => {
                    eprintln!("{HELP}");
                    None
                }
                Ok(Input::Quit) => None,
                Err(e) => Some(StreamItem::<NavigationCommand>::Error(e)),
            })
        });

    let mut updates = Box::pin(commands.navigate(navigator));
    while let Some(item) = updates.next().await {
        match item {
            StreamItem::Value(update) => {
                if update.transition.is_none() {
                    debug!("command left the view unchanged");
                }
                for line in format_update(&update, mode)? {
                    writeln!(out, "{line}")?;
                }
                out.flush()?;
            }
            StreamItem::Error(e) if e.is_recoverable() => {
                eprintln!("{e} (ketik 'help' untuk bantuan)");
            }
            StreamItem::Error(e) => {
                error!("input closed: {e}");
                return Err(e.into());
            }
        }
    }

    info!("session ended");
    Ok(())
}
