// SPDX-License-Identifier: MPL-2.0
//! Service cards accordion: at most one card shows its details.

use crate::error::{Error, Result};
use crate::ui::view_sync::{ViewSync, ViewUpdate};

#[derive(Debug, Clone, Default)]
pub struct Services {
    count: usize,
    expanded: Option<usize>,
}

impl Services {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count,
            expanded: None,
        }
    }

    #[must_use]
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Collapses any other card and flips `index`.
    pub fn toggle(&mut self, index: usize, sync: &mut ViewSync) -> Result<()> {
        if index >= self.count {
            return Err(Error::MissingTarget(format!("service card {index}")));
        }
        match self.expanded {
            Some(open) if open == index => {
                self.expanded = None;
                sync.push(ViewUpdate::ServicePanel {
                    index,
                    expanded: false,
                });
            }
            previous => {
                if let Some(open) = previous {
                    sync.push(ViewUpdate::ServicePanel {
                        index: open,
                        expanded: false,
                    });
                }
                self.expanded = Some(index);
                sync.push(ViewUpdate::ServicePanel {
                    index,
                    expanded: true,
                });
            }
        }
        Ok(())
    }
}
