// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::PathBuf;

use atcs_core::{Dataset, NavigationCommand, ViewLevel};
use atcs_error::{AtcsError, Result};
use clap::Parser;

/// Command line of the terminal browser.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "atcs-monitor",
    about = "Browse the ATCS traffic-camera directory of Indonesia",
    version
)]
pub struct Args {
    /// TOML dataset to load instead of the built-in one
    #[arg(value_name = "DATASET", env = "ATCS_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Print every screen as one JSON line instead of text
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Reads the dataset named on the command line, or the embedded one.
    pub fn load_dataset(&self) -> Result<Dataset> {
        match &self.dataset {
            Some(path) => Dataset::from_path(path),
            None => Dataset::embedded(),
        }
    }
}

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Navigate(NavigationCommand),
    Help,
    Quit,
}

/// Interactive commands, shown at startup and on `help`.
pub const HELP: &str = "\
Perintah:
  <n>          buka baris ke-n dari daftar
  p <id>       buka provinsi berdasarkan id
  r <id>       buka kabupaten/kota berdasarkan id
  /<teks>      cari; '/' saja menghapus pencarian
  b, back      kembali satu tingkat
  root, home   kembali ke daftar provinsi
  crumb <n>    lompat ke breadcrumb ke-n (0 = Indonesia)
  help, ?      tampilkan bantuan ini
  q, quit      keluar
  (baris kosong menampilkan ulang layar)";

/// Parses one line typed at the prompt.
///
/// Leading and trailing whitespace is ignored except after `/`, where the
/// rest of the line is taken verbatim as the search text.
pub fn parse_input(line: &str) -> Result<Input> {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(query) = line.trim_start().strip_prefix('/') {
        return Ok(Input::Navigate(NavigationCommand::Search(query.to_string())));
    }

    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    let command = match (word.to_ascii_lowercase().as_str(), rest) {
        ("", _) => NavigationCommand::Refresh,
        ("q" | "quit" | "exit", "") => return Ok(Input::Quit),
        ("help" | "?", "") => return Ok(Input::Help),
        ("b" | "back", "") => NavigationCommand::Back,
        ("root" | "home", "") => NavigationCommand::ResetToRoot,
        ("p", id) if !id.is_empty() => NavigationCommand::SelectProvince(id.to_string()),
        ("r", id) if !id.is_empty() => NavigationCommand::SelectRegency(id.to_string()),
        ("crumb", position) => NavigationCommand::Breadcrumb(
            crumb_level(position).ok_or_else(|| AtcsError::unknown_command(trimmed))?,
        ),
        (number, "") if number.bytes().all(|b| b.is_ascii_digit()) => match number.parse::<usize>()
        {
            Ok(row) if row > 0 => NavigationCommand::SelectVisible(row - 1),
            _ => return Err(AtcsError::unknown_command(trimmed)),
        },
        _ => return Err(AtcsError::unknown_command(trimmed)),
    };
    Ok(Input::Navigate(command))
}

fn crumb_level(position: &str) -> Option<ViewLevel> {
    match position {
        "0" => Some(ViewLevel::Province),
        "1" => Some(ViewLevel::Regency),
        "2" => Some(ViewLevel::Location),
        _ => None,
    }
}
