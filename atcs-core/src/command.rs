// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};

use crate::link_opener::LinkOpener;
use crate::navigator::Navigator;
use crate::view_state::{Transition, ViewLevel};

/// User input as a front end reports it: by id or by row position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "arg", rename_all = "snake_case")]
pub enum NavigationCommand {
    SelectProvince(String),
    SelectRegency(String),
    /// 0-based position in the filtered list currently in view.
    SelectVisible(usize),
    Back,
    ResetToRoot,
    Breadcrumb(ViewLevel),
    /// New content of the search box.
    Search(String),
    /// Re-render without changing anything.
    Refresh,
}

impl<O: LinkOpener> Navigator<O> {
    /// Resolves and applies a command.
    pub fn execute(&mut self, command: NavigationCommand) -> Option<Transition> {
        match command {
            NavigationCommand::SelectProvince(id) => self.select_province(&id),
            NavigationCommand::SelectRegency(id) => self.select_regency(&id),
            NavigationCommand::SelectVisible(index) => self.select_visible(index),
            NavigationCommand::Back => self.back(),
            NavigationCommand::ResetToRoot => self.reset_to_root(),
            NavigationCommand::Breadcrumb(level) => self.breadcrumb(level),
            NavigationCommand::Search(query) => self.search(query),
            NavigationCommand::Refresh => None,
        }
    }
}
