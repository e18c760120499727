// SPDX-License-Identifier: MPL-2.0
//! Portfolio detail overlay. One modal at most; opening again replaces its
//! content.

use crate::ui::view_sync::{ViewSync, ViewUpdate};

/// What the modal shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalContent {
    pub image: String,
    pub title: String,
    pub description: String,
}

impl ModalContent {
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Modal {
    present: bool,
    content: Option<ModalContent>,
}

impl Modal {
    #[must_use]
    pub fn new(present: bool) -> Self {
        Self {
            present,
            content: None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    #[must_use]
    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    pub fn open(&mut self, content: ModalContent, sync: &mut ViewSync) {
        if !self.present {
            return;
        }
        let was_open = self.is_open();
        sync.push(ViewUpdate::ModalContent(content.clone()));
        self.content = Some(content);
        if !was_open {
            sync.push(ViewUpdate::ModalVisible(true));
        }
        sync.push(ViewUpdate::FocusModalImage);
    }

    /// Returns `true` if the modal was open.
    pub fn close(&mut self, sync: &mut ViewSync) -> bool {
        if self.content.take().is_none() {
            return false;
        }
        sync.push(ViewUpdate::ModalVisible(false));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopening_replaces_content() {
        let mut modal = Modal::new(true);
        let mut sync = ViewSync::default();
        modal.open(ModalContent::new("a.webp", "A", "first"), &mut sync);
        modal.open(ModalContent::new("b.webp", "B", "second"), &mut sync);

        assert!(modal.is_open());
        assert_eq!(modal.content().map(|c| c.title.as_str()), Some("B"));
        let visible = sync
            .iter()
            .filter(|u| **u == ViewUpdate::ModalVisible(true))
            .count();
        assert_eq!(visible, 1);
    }

    #[test]
    fn close_is_idempotent() {
        let mut modal = Modal::new(true);
        let mut sync = ViewSync::default();
        assert!(!modal.close(&mut sync));
        modal.open(ModalContent::default(), &mut sync);
        assert!(modal.close(&mut sync));
        assert!(!modal.close(&mut sync));
        assert!(!modal.is_open());
    }

    #[test]
    fn missing_modal_never_opens() {
        let mut modal = Modal::new(false);
        let mut sync = ViewSync::default();
        modal.open(ModalContent::default(), &mut sync);
        assert!(!modal.is_open());
        assert!(sync.is_empty());
    }
}
