// SPDX-License-Identifier: MPL-2.0
//! Navigation components: breadcrumb, tabs, menu, carousel, pagination,
//! accordion, stepper.

use super::{
    heading, showcase_labels, Demo, Message, Section, State, ViewContext, MENU_ITEMS, STEP_COUNT,
};
use crate::ui::components::button::{GameButton, Size, Variant};
use crate::ui::components::showcase::Showcase;
use crate::ui::components::{accordion, breadcrumb, carousel, menu, pagination, stepper, tabs};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Row, Text};
use iced::Element;

pub const CAROUSEL_CODE: &str = r#"let mut carousel = Carousel::new(3);
carousel.next(); // 0 -> 1
carousel.prev(); // 1 -> 0
carousel.prev(); // wraps to 2"#;

pub const TABS_CODE: &str = r#"tabs::view(&state.tabs, &labels, Message::TabSelected)"#;

const TAB_KEYS: [(&str, &str); 3] = [
    ("tabs-account", "tabs-account-body"),
    ("tabs-security", "tabs-security-body"),
    ("tabs-billing", "tabs-billing-body"),
];

const SLIDE_KEYS: [&str; 3] = ["carousel-slide-forest", "carousel-slide-castle", "carousel-slide-sea"];

const FAQ_KEYS: [(&str, &str); 3] = [
    ("accordion-q-install", "accordion-a-install"),
    ("accordion-q-theme", "accordion-a-theme"),
    ("accordion-q-toasts", "accordion-a-toasts"),
];

/// Breadcrumb trail: label key and the section each crumb jumps to.
const CRUMBS: [(&str, Section); 3] = [
    ("breadcrumb-home", Section::Intro),
    ("breadcrumb-components", Section::Buttons),
    ("section-navigation", Section::Navigation),
];

const MENU_KEYS: [&str; MENU_ITEMS] = ["menu-item-equip", "menu-item-inspect", "menu-item-drop"];

const STEP_KEYS: [&str; STEP_COUNT] = ["stepper-class", "stepper-stats", "stepper-gear", "stepper-ready"];

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let labels = showcase_labels(i18n);
    let tr_all = |keys: &[&str]| keys.iter().map(|key| i18n.tr(key)).collect::<Vec<_>>();

    let crumbs: Vec<String> = CRUMBS.iter().map(|(key, _)| i18n.tr(key)).collect();
    let breadcrumb_card = Showcase::new(
        i18n.tr("breadcrumb-card-title"),
        breadcrumb::view(&crumbs, |index| {
            Message::JumpTo(CRUMBS.get(index).map_or(Section::Navigation, |(_, section)| *section))
        }),
    )
    .view(&labels);

    let menu_items = tr_all(&MENU_KEYS);
    let menu_status = match state.menu.selected().and_then(|index| menu_items.get(index)) {
        Some(item) => i18n.tr_with_args("menu-selected", &[("item", item.as_str())]),
        None => i18n.tr("menu-none"),
    };
    let menu_preview = Row::new()
        .spacing(spacing::LG)
        .push(menu::view(
            &state.menu,
            i18n.tr("menu-trigger"),
            &menu_items,
            Message::ToggleMenu,
            Message::MenuSelected,
        ))
        .push(Text::new(menu_status).size(typography::BODY_SM));
    let menu_card = Showcase::new(i18n.tr("menu-card-title"), menu_preview)
        .description(i18n.tr("menu-card-description"))
        .view(&labels);

    let tab_labels: Vec<String> = TAB_KEYS.iter().map(|(label, _)| i18n.tr(label)).collect();
    let tab_body = TAB_KEYS
        .get(state.tabs.selected())
        .map(|(_, body)| i18n.tr(body))
        .unwrap_or_default();
    let tabs_preview = Column::new()
        .spacing(spacing::MD)
        .push(tabs::view(&state.tabs, &tab_labels, Message::TabSelected))
        .push(Text::new(tab_body).size(typography::BODY));
    let tabs_card = Showcase::new(i18n.tr("tabs-card-title"), tabs_preview)
        .code(
            TABS_CODE,
            state.mode(Demo::Tabs),
            |mode| Message::ModeChanged(Demo::Tabs, mode),
            Message::CopyCode(Demo::Tabs),
        )
        .view(&labels);

    let carousel_card = Showcase::new(
        i18n.tr("carousel-card-title"),
        carousel::view(
            &state.carousel,
            &tr_all(&SLIDE_KEYS),
            Message::CarouselPrev,
            Message::CarouselNext,
            Message::CarouselSelect,
        ),
    )
    .code(
        CAROUSEL_CODE,
        state.mode(Demo::Carousel),
        |mode| Message::ModeChanged(Demo::Carousel, mode),
        Message::CopyCode(Demo::Carousel),
    )
    .view(&labels);

    let pagination_preview = Column::new()
        .spacing(spacing::SM)
        .push(pagination::view(
            &state.pagination,
            Message::PagePrev,
            Message::PageNext,
            Message::PageSelected,
        ))
        .push(
            Text::new(i18n.tr_with_args(
                "pagination-status",
                &[
                    ("current", state.pagination.current().to_string().as_str()),
                    ("total", state.pagination.total().to_string().as_str()),
                ],
            ))
            .size(typography::BODY_SM),
        );
    let pagination_card =
        Showcase::new(i18n.tr("pagination-card-title"), pagination_preview).view(&labels);

    let faq: Vec<(String, String)> = FAQ_KEYS
        .iter()
        .map(|(q, a)| (i18n.tr(q), i18n.tr(a)))
        .collect();
    let accordion_card = Showcase::new(
        i18n.tr("accordion-card-title"),
        accordion::view(&state.accordion, &faq, Message::AccordionToggled),
    )
    .view(&labels);

    let stepper_preview = Column::new()
        .spacing(spacing::MD)
        .push(stepper::view(&tr_all(&STEP_KEYS), state.step))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(
                    GameButton::new(i18n.tr("stepper-back"))
                        .variant(Variant::Secondary)
                        .size(Size::Sm)
                        .on_press(Message::StepBack)
                        .view(),
                )
                .push(
                    GameButton::new(i18n.tr("stepper-next"))
                        .size(Size::Sm)
                        .on_press(Message::StepNext)
                        .view(),
                ),
        );
    let stepper_card = Showcase::new(i18n.tr("stepper-card-title"), stepper_preview).view(&labels);

    heading(Section::Navigation, "navigation-subtitle", ctx)
        .spacing(spacing::LG)
        .push(breadcrumb_card)
        .push(tabs_card)
        .push(menu_card)
        .push(carousel_card)
        .push(pagination_card)
        .push(accordion_card)
        .push(stepper_card)
        .into()
}
