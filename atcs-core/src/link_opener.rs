// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::info;

/// The host's "open external resource" capability.
///
/// Opening is fire-and-forget: nothing is returned and failures such as an
/// unreachable portal or a blocked pop-up are not observed.
pub trait LinkOpener {
    fn open(&mut self, url: &str);
}

impl<F> LinkOpener for F
where
    F: FnMut(&str),
{
    fn open(&mut self, url: &str) {
        self(url);
    }
}

/// Opener for hosts without a browser: records the hand-off in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLinkOpener;

impl LinkOpener for LogLinkOpener {
    fn open(&mut self, url: &str) {
        info!("handing off to external portal {}", url);
    }
}
