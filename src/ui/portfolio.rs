// SPDX-License-Identifier: MPL-2.0
//! Portfolio category filter.
//!
//! Changing the filter reveals or hides every item in a staggered cascade:
//! item `i` is updated `i * stagger` after the change. Each update reads the
//! filter current when it fires, and a new filter cancels whatever is left
//! of the previous cascade.

use crate::timing::{TimerHandle, TimerQueue};
use crate::ui::modal::ModalContent;
use crate::ui::view_sync::{ViewSync, ViewUpdate};
use std::time::Duration;

/// Filter value matching every category.
pub const ALL: &str = "all";

/// Timers owned by the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    Reveal { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioItem {
    pub category: String,
    pub details: ModalContent,
}

impl PortfolioItem {
    pub fn new(category: impl Into<String>, details: ModalContent) -> Self {
        Self {
            category: category.into(),
            details,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Portfolio {
    items: Vec<PortfolioItem>,
    current_filter: String,
    reveals: Vec<TimerHandle>,
    stagger: Duration,
}

impl Portfolio {
    #[must_use]
    pub fn new(items: Vec<PortfolioItem>, stagger: Duration) -> Self {
        Self {
            items,
            current_filter: ALL.to_string(),
            reveals: Vec::new(),
            stagger,
        }
    }

    #[must_use]
    pub fn current_filter(&self) -> &str {
        &self.current_filter
    }

    #[must_use]
    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&PortfolioItem> {
        self.items.get(index)
    }

    /// Whether item `index` matches the current filter.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.items
            .get(index)
            .is_some_and(|item| matches_filter(&self.current_filter, &item.category))
    }

    /// Reveal timers of the current cascade that have not fired yet.
    #[must_use]
    pub fn pending_reveals<T>(&self, timers: &TimerQueue<T>) -> usize {
        self.reveals
            .iter()
            .filter(|handle| timers.is_pending(**handle))
            .count()
    }

    /// Switches to `category`. Returns `false` when it is already active.
    pub fn set_filter<T: From<Timer>>(
        &mut self,
        category: &str,
        timers: &mut TimerQueue<T>,
        sync: &mut ViewSync,
    ) -> bool {
        if self.current_filter == category {
            return false;
        }
        self.current_filter = category.to_string();
        sync.push(ViewUpdate::FilterActive(self.current_filter.clone()));

        for handle in self.reveals.drain(..) {
            timers.cancel(handle);
        }
        for index in 0..self.items.len() {
            let delay = self.stagger.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
            self.reveals
                .push(timers.schedule(delay, Timer::Reveal { index }.into()));
        }
        tracing::debug!(filter = category, items = self.items.len(), "portfolio filter changed");
        true
    }

    /// Drops the pending reveal cascade. Items keep their last visibility.
    pub fn cancel_reveals<T>(&mut self, timers: &mut TimerQueue<T>) {
        for handle in self.reveals.drain(..) {
            timers.cancel(handle);
        }
    }

    pub fn on_timer(&mut self, timer: Timer, sync: &mut ViewSync) {
        match timer {
            Timer::Reveal { index } => {
                if index < self.items.len() {
                    sync.push(ViewUpdate::PortfolioItem {
                        index,
                        visible: self.is_visible(index),
                    });
                }
            }
        }
    }
}

fn matches_filter(filter: &str, category: &str) -> bool {
    filter == ALL || filter == category
}
