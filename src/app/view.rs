// SPDX-License-Identifier: MPL-2.0
//! View rendering for the preview shell.
//!
//! Everything shown here is read from the [`ViewModel`]; the widgets only
//! emit messages.

use super::{demo, Message};
use crate::coordinator::UiEvent;
use crate::i18n::I18n;
use crate::ui::contact::ContactFields;
use crate::ui::portfolio::{PortfolioItem, ALL};
use crate::ui::view_sync::{MountedNotification, ViewModel};
use iced::widget::{
    button, column, container, mouse_area, opaque, row, scrollable, text, text_input, Column, Row,
    Space, Stack,
};
use iced::{Alignment, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub model: &'a ViewModel,
    pub i18n: &'a I18n,
    pub form: &'a ContactFields,
    pub portfolio: &'a [PortfolioItem],
    pub current_slide: usize,
}

/// Renders the page with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = column![
        view_navbar(&ctx),
        view_hero(&ctx),
        view_services(&ctx),
        view_portfolio(&ctx),
        view_carousel(&ctx),
        view_contact(&ctx),
    ]
    .spacing(32)
    .padding(16)
    .width(Length::Fill);

    let content = scrollable(page)
        .on_scroll(|viewport| {
            Message::Ui(UiEvent::Scroll {
                y: viewport.absolute_offset().y,
            })
        })
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers: Vec<Element<'_, Message>> = vec![content.into()];
    if let Some(modal) = view_modal(&ctx) {
        layers.push(modal);
    }
    if let Some(toast) = ctx.model.notifications.last() {
        layers.push(view_notification(toast, ctx.i18n));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_navbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toggle = button(text(ctx.i18n.tr("nav-toggle-label")))
        .on_press(Message::Ui(UiEvent::NavToggle));
    let bottom = button(text(ctx.i18n.tr("nav-scroll-bottom")))
        .on_press(Message::Ui(UiEvent::ScrollToBottom))
        .style(button::text);

    let links = demo::SECTIONS.iter().map(|(id, _)| {
        let active = ctx.model.active_link.as_deref() == Some(*id);
        button(text(*id))
            .on_press(Message::Ui(UiEvent::NavLinkClicked(format!("#{id}"))))
            .style(if active { button::primary } else { button::text })
            .into()
    });

    let bar = row![toggle, Space::new().width(Length::Fill), bottom]
        .spacing(8)
        .align_y(Alignment::Center);
    let mut navbar = Column::new().push(bar).spacing(8);
    if ctx.model.drawer_open || ctx.model.navbar_scrolled {
        navbar = navbar.push(Row::with_children(links).spacing(4));
    }
    container(navbar)
        .padding(8)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn view_hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    column![
        text("ENGINT").size(40),
        text(format!("{:.0}px", ctx.model.hero_offset)).size(12),
    ]
    .spacing(4)
    .into()
}

fn view_services<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = demo::SERVICES
        .iter()
        .enumerate()
        .map(|(index, (title, details))| {
            let expanded = ctx.model.expanded_services.get(&index) == Some(&true);
            let mut title = text(*title).size(18);
            if !ctx.model.revealed.contains(&index) {
                // Not scrolled into view yet.
                title = title.style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.color),
                });
            }
            let mut card = column![row![
                title,
                Space::new().width(Length::Fill),
                button(text(ctx.i18n.tr("service-toggle")))
                    .on_press(Message::Ui(UiEvent::ServiceToggled(index)))
                    .style(button::secondary),
            ]
            .align_y(Alignment::Center)];
            if expanded {
                card = card.push(text(*details));
            }
            container(card.spacing(6))
                .padding(12)
                .width(Length::Fill)
                .style(container::rounded_box)
                .into()
        });
    Column::with_children(cards).spacing(8).into()
}

fn view_portfolio<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.model.active_filter.as_deref().unwrap_or(ALL);
    let filters = demo::CATEGORIES.iter().map(|category| {
        let label = if *category == ALL {
            ctx.i18n.tr("filter-all")
        } else {
            (*category).to_string()
        };
        button(text(label))
            .on_press(Message::Ui(UiEvent::FilterSelected((*category).to_string())))
            .style(if *category == active {
                button::primary
            } else {
                button::secondary
            })
            .into()
    });

    let items = ctx
        .portfolio
        .iter()
        .enumerate()
        .filter(|(index, _)| {
            ctx.model
                .portfolio_visible
                .get(index)
                .copied()
                .unwrap_or(true)
        })
        .map(|(index, item)| {
            container(
                column![
                    text(item.details.title.clone()).size(16),
                    text(item.category.clone()).size(12),
                    button(text(ctx.i18n.tr("portfolio-open")))
                        .on_press(Message::Ui(UiEvent::PortfolioOpened(index))),
                ]
                .spacing(4),
            )
            .padding(12)
            .style(container::rounded_box)
            .into()
        });

    column![
        Row::with_children(filters).spacing(6),
        Row::with_children(items).spacing(8),
    ]
    .spacing(12)
    .into()
}

fn view_carousel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let slide = demo::SLIDES
        .get(ctx.current_slide)
        .copied()
        .unwrap_or_default();
    let track = mouse_area(
        container(text(slide).size(18))
            .padding(24)
            .width(Length::Fill)
            .style(container::rounded_box),
    )
    .on_enter(Message::Ui(UiEvent::CarouselPointerEntered))
    .on_exit(Message::Ui(UiEvent::CarouselPointerLeft));

    let dots = (0..ctx.model.dot_count).map(|index| {
        let label = ctx
            .i18n
            .tr_with_args("carousel-dot-label", &[("index", &(index + 1).to_string())]);
        button(text(label).size(12))
            .on_press(Message::Ui(UiEvent::CarouselDotClicked(index)))
            .style(if index == ctx.model.active_dot {
                button::primary
            } else {
                button::text
            })
            .into()
    });

    column![
        track,
        row![
            button(text(ctx.i18n.tr("carousel-previous")))
                .on_press(Message::Ui(UiEvent::CarouselPrevious)),
            Row::with_children(dots).spacing(4),
            button(text(ctx.i18n.tr("carousel-next"))).on_press(Message::Ui(UiEvent::CarouselNext)),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    ]
    .spacing(8)
    .into()
}

fn view_contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let submit_label = if ctx.model.submit_busy {
        ctx.i18n.tr("contact-sending")
    } else {
        ctx.i18n.tr("contact-submit")
    };
    let submit = button(text(submit_label))
        .on_press_maybe((!ctx.model.submit_busy).then_some(Message::SubmitPressed));

    let mut form = column![
        text_input(&ctx.i18n.tr("contact-name"), &ctx.form.name).on_input(Message::NameChanged),
        text_input(&ctx.i18n.tr("contact-email"), &ctx.form.email).on_input(Message::EmailChanged),
        text_input(&ctx.i18n.tr("contact-subject"), &ctx.form.subject)
            .on_input(Message::SubjectChanged),
        text_input(&ctx.i18n.tr("contact-message"), &ctx.form.message)
            .on_input(Message::MessageChanged),
    ]
    .spacing(8);
    if ctx.model.file_upload_visible {
        form = form.push(text(ctx.i18n.tr("contact-attachment")).size(12));
    }
    form.push(submit).into()
}

fn view_modal<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.model.modal_visible {
        return None;
    }
    let content = ctx.model.modal_content.as_ref()?;

    let backdrop = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(Message::Ui(UiEvent::ModalBackdropClicked));

    let dialog = container(
        column![
            text(content.title.clone()).size(24),
            text(content.image.clone()).size(12),
            text(content.description.clone()),
            button(text(ctx.i18n.tr("modal-close")))
                .on_press(Message::Ui(UiEvent::ModalCloseClicked)),
        ]
        .spacing(8),
    )
    .padding(24)
    .max_width(480.0)
    .style(container::rounded_box);

    // Presses on the dialog body must not reach the backdrop below.
    let layers: Vec<Element<'a, Message>> = vec![
        backdrop.into(),
        container(opaque(dialog))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    ];
    Some(Stack::with_children(layers).into())
}

fn view_notification<'a>(toast: &'a MountedNotification, i18n: &I18n) -> Element<'a, Message> {
    let close = button(text(i18n.tr("notification-close-label")).size(12))
        .on_press(Message::Ui(UiEvent::NotificationClosed(toast.id)))
        .style(button::text);
    let body = row![
        text(format!("[{}] {}", toast.kind.css_suffix(), toast.message)),
        close,
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(container(body).padding(12).style(container::rounded_box))
        .align_right(Length::Fill)
        .padding(20)
        .into()
}
