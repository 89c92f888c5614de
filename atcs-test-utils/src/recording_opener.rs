// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cell::RefCell;
use std::rc::Rc;

use atcs_core::LinkOpener;

/// Link opener that records URLs instead of opening them.
///
/// Clones share one log, so a test can keep a handle while the navigator
/// owns another. Single-threaded on purpose, like the session it observes.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every URL handed off so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.opened.borrow().len()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}
