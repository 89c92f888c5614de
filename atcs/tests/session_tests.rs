// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::io;

use atcs::opener::ConsoleOpener;
use atcs::session::{run, OutputMode};
use atcs::Navigator;
use atcs_test_utils::fixtures::{sample_dataset, semarang};
use atcs_test_utils::RecordingOpener;
use futures::stream;
use serde_json::Value;

fn input(lines: &[&str]) -> impl futures::Stream<Item = io::Result<String>> {
    stream::iter(
        lines
            .iter()
            .map(|line| Ok(line.to_string()))
            .collect::<Vec<_>>(),
    )
}

#[tokio::test]
async fn test_json_mode_writes_only_json_lines() -> anyhow::Result<()> {
    // Arrange
    let opener = RecordingOpener::new();
    let navigator = Navigator::new(sample_dataset(), opener.clone());
    let mut out = Vec::new();

    // Act
    run(input(&["1", "1", "zoom", "b"]), navigator, OutputMode::Json, &mut out).await?;

    // Assert
    let text = String::from_utf8(out)?;
    let documents = text
        .lines()
        .map(serde_json::from_str::<Value>)
        .collect::<Result<Vec<_>, _>>()?;

    // initial screen, province, regency + hand-off, back
    assert_eq!(documents.len(), 5);
    assert_eq!(documents[0]["level"], "province");
    assert_eq!(documents[1]["title"], "Jawa Tengah");
    assert_eq!(documents[2]["level"], "location");
    assert_eq!(documents[3]["open_external"], semarang().url.as_str());
    assert_eq!(documents[4]["level"], "regency");
    assert_eq!(opener.opened(), vec![semarang().url]);
    Ok(())
}

#[tokio::test]
async fn test_json_mode_keeps_console_opener_output_apart() -> anyhow::Result<()> {
    // Arrange
    let navigator = Navigator::new(sample_dataset(), ConsoleOpener::new(Vec::new()));
    let mut out = Vec::new();

    // Act
    run(input(&["p jatim", "r gersik"]), navigator, OutputMode::Json, &mut out).await?;

    // Assert
    let text = String::from_utf8(out)?;
    assert!(!text.contains("Buka portal CCTV"));
    assert!(text
        .lines()
        .all(|line| serde_json::from_str::<Value>(line).is_ok()));
    Ok(())
}

#[tokio::test]
async fn test_text_mode_renders_each_screen() -> anyhow::Result<()> {
    let mut out = Vec::new();

    run(
        input(&["/timur", "1"]),
        Navigator::with_dataset(sample_dataset()),
        OutputMode::Text,
        &mut out,
    )
    .await?;

    let text = String::from_utf8(out)?;
    assert!(text.starts_with("== ATCS Monitor Indonesia ==\n"));
    assert!(text.contains("Cari: timur\n  1. Jawa Timur"));
    assert!(text.contains("== Jawa Timur ==\nPilih Kabupaten/Kota\n"));
    Ok(())
}

#[tokio::test]
async fn test_quit_stops_reading_input() -> anyhow::Result<()> {
    let opener = RecordingOpener::new();
    let navigator = Navigator::new(sample_dataset(), opener.clone());
    let mut out = Vec::new();

    run(input(&["q", "p jateng", "1"]), navigator, OutputMode::Json, &mut out).await?;

    assert_eq!(String::from_utf8(out)?.lines().count(), 1);
    assert_eq!(opener.count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_read_failure_ends_session_with_error() {
    // Arrange
    let lines = stream::iter(vec![
        Ok("p jateng".to_string()),
        Err(io::Error::other("stdin closed")),
        Ok("1".to_string()),
    ]);
    let mut out = Vec::new();

    // Act
    let result = run(
        lines,
        Navigator::with_dataset(sample_dataset()),
        OutputMode::Json,
        &mut out,
    )
    .await;

    // Assert
    let error = result.unwrap_err();
    assert!(error.to_string().contains("<stdin>"));
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
}
