// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout: sidebar on the left, header above the catalog on the right, the
//! catalog's modal layers over the whole window and the toast column on top
//! of everything.

use super::i18n::fluent::I18n;
use super::Message;
use crate::ui::catalog::{self, Section};
use crate::ui::header;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::sidebar;
use crate::ui::theming::ThemeMode;
use iced::widget::{Column, Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub notifications: &'a Manager,
    pub catalog: &'a catalog::State,
    pub active_section: Section,
    pub query: &'a str,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let catalog_ctx = catalog::ViewContext { i18n: ctx.i18n };

    let sidebar = sidebar::view(sidebar::ViewContext {
        i18n: ctx.i18n,
        active: ctx.active_section,
        query: ctx.query,
    })
    .map(Message::Sidebar);

    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        query: ctx.query,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Header);

    let page = ctx.catalog.view(&catalog_ctx).map(Message::Catalog);

    let layout: Element<'_, Message> = Row::new()
        .push(sidebar)
        .push(
            Column::new()
                .push(header)
                .push(page)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let with_overlays = view_overlays(ctx.catalog, layout, &catalog_ctx);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Container::new(Stack::new().push(with_overlays).push(toasts))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Lays the catalog's modal or drawer over the full window.
fn view_overlays<'a>(
    catalog: &'a catalog::State,
    base: Element<'a, Message>,
    ctx: &catalog::ViewContext<'a>,
) -> Element<'a, Message> {
    if !(catalog.modal_open || catalog.drawer_open) {
        return base;
    }
    // Open layers are rendered against an empty base and stacked over the
    // application layout so the scrim spans the sidebar and header too.
    let layer = catalog
        .view_overlays(Column::new().into(), ctx)
        .map(Message::Catalog);
    Stack::new().push(base).push(layer).into()
}
