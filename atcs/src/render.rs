// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use atcs_core::{ViewRow, ViewSnapshot};

/// Separator between breadcrumbs.
pub const CRUMB_SEPARATOR: &str = " > ";

/// Plain-text rendering of one screen.
///
/// Layout, top to bottom: title and subtitle, breadcrumb trail, header
/// counters, search box, then the numbered list or the empty-state message.
pub fn render(snapshot: &ViewSnapshot) -> String {
    let mut lines = vec![format!("== {} ==", snapshot.title)];
    if !snapshot.subtitle.is_empty() {
        lines.push(snapshot.subtitle.clone());
    }

    let trail: Vec<String> = snapshot
        .breadcrumbs
        .iter()
        .enumerate()
        .map(|(position, crumb)| {
            if crumb.clickable {
                format!("[{position}] {}", crumb.label)
            } else {
                crumb.label.clone()
            }
        })
        .collect();
    lines.push(trail.join(CRUMB_SEPARATOR));

    lines.push(format!(
        "Total CCTV: {}  Online: {}  Alert: {}",
        snapshot.stats.total, snapshot.stats.online, snapshot.stats.alerts
    ));

    lines.push(if snapshot.search_query.is_empty() {
        format!("({})", snapshot.search_placeholder)
    } else {
        format!("Cari: {}", snapshot.search_query)
    });

    if let Some(message) = &snapshot.empty_message {
        lines.push(format!("  {message}"));
    }
    lines.extend(
        snapshot
            .rows
            .iter()
            .enumerate()
            .map(|(position, row)| format!("{:>3}. {}", position + 1, row_line(row))),
    );

    if snapshot.back_visible {
        lines.push("[b] Kembali".to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// One list entry: name, counters, then the alert badge if any.
pub fn row_line(row: &ViewRow) -> String {
    let regencies = row
        .regency_count
        .map(|count| format!(", {count} kab/kota"))
        .unwrap_or_default();
    let badge = if row.shows_alert_badge() {
        format!(" [! {}]", row.alert_count)
    } else {
        String::new()
    };

    format!(
        "{} ({} CCTV, {} online{regencies}){badge}",
        row.name, row.total_cctv, row.online_count
    )
}
