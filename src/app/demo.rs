// SPDX-License-Identifier: MPL-2.0
//! Showcase page rendered by the preview shell.
//!
//! Section heights follow the window height so the scroll spy has
//! something realistic to work with. Service cards are the reveal targets,
//! stacked inside the services section.

use crate::page::{Layout, Page};
use crate::ui::modal::ModalContent;
use crate::ui::portfolio::PortfolioItem;
use crate::ui::scroll_spy::Section;
use iced::Size;

/// Section ids in document order, with their height in viewport units.
pub const SECTIONS: [(&str, f32); 6] = [
    ("home", 1.0),
    ("storia", 0.8),
    ("servizi", 1.2),
    ("portfolio", 1.4),
    ("testimonianze", 0.7),
    ("contatti", 1.0),
];

pub const SLIDES: [&str; 3] = [
    "Professional and punctual from design to site supervision.",
    "A reliable partner for complex structural work.",
    "Clear answers and sound engineering, every time.",
];

/// Offset of the first service card below the top of its section.
const SERVICE_CARDS_OFFSET: f32 = 120.0;
const SERVICE_CARD_PITCH: f32 = 160.0;
const SERVICE_CARD_HEIGHT: f32 = 140.0;

pub const SERVICES: [(&str, &str); 3] = [
    ("Structural design", "Steel, concrete and timber structures."),
    ("Site supervision", "Direction of works and safety coordination."),
    ("Energy efficiency", "Audits, retrofits and certification."),
];

/// Categories offered by the filter bar, `all` first.
pub const CATEGORIES: [&str; 4] = ["all", "civil", "industrial", "energy"];

#[must_use]
pub fn portfolio() -> Vec<PortfolioItem> {
    [
        ("civil", "img/fiumicino.jpg", "Terminal roof", "Steel roof for an airport terminal."),
        ("industrial", "img/fotoCimolai.jpg", "Assembly hall", "Crane girders and bracing."),
        ("energy", "img/solar.jpg", "Solar carport", "Photovoltaic canopy for 200 spaces."),
        ("civil", "img/bridge.jpg", "Footbridge", "Cable-stayed pedestrian crossing."),
    ]
    .into_iter()
    .map(|(category, image, title, description)| {
        PortfolioItem::new(category, ModalContent::new(image, title, description))
    })
    .collect()
}

/// Page geometry for a window of `viewport` size.
#[must_use]
pub fn layout(viewport: Size) -> Layout {
    let mut top = 0.0;
    let sections = SECTIONS
        .iter()
        .map(|(id, units)| {
            let height = viewport.height * units;
            let section = Section::new(*id, top, height);
            top += height;
            section
        })
        .collect::<Vec<_>>();

    let services_top = sections
        .iter()
        .find(|section| section.id == "servizi")
        .map_or(0.0, |section| section.top);
    let reveal_targets = (0..SERVICES.len())
        .map(|index| {
            Section::new(
                format!("service-{index}"),
                services_top + SERVICE_CARDS_OFFSET + index as f32 * SERVICE_CARD_PITCH,
                SERVICE_CARD_HEIGHT,
            )
        })
        .collect();

    Layout {
        viewport,
        sections,
        document_height: top,
        slide_count: SLIDES.len(),
        reveal_targets,
    }
}

#[must_use]
pub fn page(viewport: Size) -> Page {
    let mut page = Page::complete(layout(viewport));
    page.portfolio = portfolio();
    page.service_count = SERVICES.len();
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_tile_the_document() {
        let layout = layout(Size::new(1000.0, 500.0));
        assert_eq!(layout.sections.len(), SECTIONS.len());
        for pair in layout.sections.windows(2) {
            assert_eq!(pair[0].top + pair[0].height, pair[1].top);
        }
        let last = &layout.sections[SECTIONS.len() - 1];
        assert_eq!(layout.document_height, last.top + last.height);
    }

    #[test]
    fn service_cards_sit_inside_their_section() {
        let layout = layout(Size::new(1000.0, 500.0));
        let services = layout
            .sections
            .iter()
            .find(|section| section.id == "servizi")
            .expect("services section");
        assert_eq!(layout.reveal_targets.len(), SERVICES.len());
        for card in &layout.reveal_targets {
            assert!(services.contains(card.top));
        }
    }

    #[test]
    fn every_portfolio_category_is_filterable() {
        for item in portfolio() {
            assert!(CATEGORIES.contains(&item.category.as_str()));
        }
    }
}
