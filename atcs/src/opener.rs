// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::io::Write;

use atcs_core::LinkOpener;
use tracing::{info, warn};

/// Opener for a terminal: prints the portal address for the user to follow.
#[derive(Debug)]
pub struct ConsoleOpener<W = std::io::Stdout> {
    out: W,
}

impl ConsoleOpener {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleOpener<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LinkOpener for ConsoleOpener<W> {
    fn open(&mut self, url: &str) {
        info!(url, "opening external portal");
        if let Err(e) = writeln!(self.out, "Buka portal CCTV: {url}") {
            warn!(error = %e, "could not print portal address");
        }
    }
}
