// SPDX-License-Identifier: MPL-2.0
//! The component catalog: every section of the page and its demo state.
//!
//! The catalog never touches the notification queue directly. Anything that
//! should surface a toast, reach the clipboard, open a file dialog or move
//! the scroll position is returned to the application as an [`Event`].

mod buttons;
mod colors;
mod data;
mod feedback;
mod forms;
mod intro;
mod navigation;
mod typography;

use crate::app::i18n::fluent::I18n;
use crate::ui::components::button::Variant;
use crate::ui::components::showcase::{self, Mode};
use crate::ui::components::swatch::BRAND;
use crate::ui::components::{
    accordion::Accordion, carousel::Carousel, divider::divider, menu::Menu, overlay,
    pagination::Pagination, spinner::Spinner, tabs::Tabs,
};
use crate::ui::design_tokens::{spacing, typography as type_scale};
use crate::ui::notifications::Category;
use crate::ui::styles::container as container_styles;
use chrono::NaiveDate;
use iced::widget::{scrollable, Column, Container, Id, Text};
use iced::{Element, Length};
use std::fmt;

/// Identifier of the catalog scrollable, targeted by sidebar navigation.
pub const SCROLLABLE_ID: &str = "catalog-scrollable";

/// Date format accepted by the birth date field.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Page sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Intro,
    Colors,
    Typography,
    Buttons,
    Forms,
    Feedback,
    Data,
    Navigation,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Intro,
        Section::Colors,
        Section::Typography,
        Section::Buttons,
        Section::Forms,
        Section::Feedback,
        Section::Data,
        Section::Navigation,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Intro => "section-intro",
            Section::Colors => "section-colors",
            Section::Typography => "section-typography",
            Section::Buttons => "section-buttons",
            Section::Forms => "section-forms",
            Section::Feedback => "section-feedback",
            Section::Data => "section-data",
            Section::Navigation => "section-navigation",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Vertical scroll position of the section, from 0.0 (top) to 1.0.
    ///
    /// Sections are spread evenly over the scroll range by index. Their
    /// rendered heights differ, so the snap lands near the section heading
    /// rather than exactly on it.
    #[must_use]
    pub fn relative_offset(self) -> f32 {
        self.index() as f32 / (Self::ALL.len() - 1) as f32
    }

    /// Case-insensitive substring match of `query` against `label`.
    /// A blank query matches everything.
    #[must_use]
    pub fn matches(label: &str, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || label.to_lowercase().contains(&query.to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Plan {
    #[default]
    Monthly,
    Yearly,
}

impl Plan {
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Plan::Monthly => "forms-plan-monthly",
            Plan::Yearly => "forms-plan-yearly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    NaEast,
    Europe,
    Asia,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::NaEast, Region::Europe, Region::Asia];
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Region::NaEast => "NA East",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
        })
    }
}

/// Showcase cards that offer a Code view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Buttons,
    Inputs,
    Alerts,
    Toasts,
    Carousel,
    Tabs,
}

impl Demo {
    const COUNT: usize = 6;

    fn slot(self) -> usize {
        self as usize
    }

    /// Snippet shown in the card's Code view.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Demo::Buttons => buttons::CODE,
            Demo::Inputs => forms::CODE,
            Demo::Alerts => feedback::ALERT_CODE,
            Demo::Toasts => feedback::TOAST_CODE,
            Demo::Carousel => navigation::CAROUSEL_CODE,
            Demo::Tabs => navigation::TABS_CODE,
        }
    }
}

/// Inputs of the toast playground.
#[derive(Debug, Clone, Default)]
pub struct Playground {
    pub title: String,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    JumpTo(Section),
    ModeChanged(Demo, Mode),
    CopyCode(Demo),
    // Colors
    CopySwatch(usize),
    // Buttons
    DemoButtonPressed(Variant),
    ToggleLoading,
    SpinnerTick,
    // Forms
    NotificationsToggled(bool),
    SoundToggled(bool),
    TermsToggled(bool),
    PlanSelected(Plan),
    NameChanged(String),
    EmailChanged(String),
    BirthDateChanged(String),
    BioChanged(String),
    RegionSelected(Region),
    VolumeChanged(f32),
    PickAvatar,
    AvatarPicked(Option<String>),
    SubmitForm,
    // Feedback
    OpenModal,
    CloseModal,
    OpenDrawer,
    CloseDrawer,
    TogglePopover,
    CloseOverlays,
    PlaygroundTitleChanged(String),
    PlaygroundDescriptionChanged(String),
    PlaygroundCategoryChanged(String),
    PublishPlayground,
    QuickToast(Category),
    // Data
    RemoveChip(usize),
    ResetChips,
    // Navigation
    CarouselPrev,
    CarouselNext,
    CarouselSelect(usize),
    PagePrev,
    PageNext,
    PageSelected(usize),
    AccordionToggled(usize),
    TabSelected(usize),
    ToggleMenu,
    MenuSelected(usize),
    StepNext,
    StepBack,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Notify {
        title: String,
        description: String,
        category: Category,
    },
    CopyToClipboard {
        text: String,
        title: String,
        description: String,
    },
    PickAvatar,
    ScrollTo(Section),
}

pub const CAROUSEL_SLIDES: usize = 3;
pub const PAGE_COUNT: usize = 5;
pub const ACCORDION_ITEMS: usize = 3;
pub const TAB_COUNT: usize = 3;
pub const STEP_COUNT: usize = 4;
pub const MENU_ITEMS: usize = 3;
pub const DEFAULT_VOLUME: f32 = 50.0;
pub const DEFAULT_CHIPS: [&str; 4] = ["Rust", "Iced", "Pixel Art", "Daikon"];

/// Demo state of every section.
#[derive(Debug, Clone)]
pub struct State {
    modes: [Mode; Demo::COUNT],
    pub loading: bool,
    pub notifications_enabled: bool,
    pub sound_enabled: bool,
    pub accept_terms: bool,
    pub plan: Plan,
    pub character_name: String,
    pub email: String,
    pub birth_date: String,
    pub bio: String,
    pub region: Option<Region>,
    pub volume: f32,
    pub avatar: Option<String>,
    pub modal_open: bool,
    pub drawer_open: bool,
    pub popover_open: bool,
    pub playground: Playground,
    pub chips: Vec<String>,
    pub carousel: Carousel,
    pub pagination: Pagination,
    pub accordion: Accordion,
    pub tabs: Tabs,
    pub step: usize,
    pub menu: Menu,
    pub spinner: Spinner,
}

impl Default for State {
    fn default() -> Self {
        Self {
            modes: [Mode::Preview; Demo::COUNT],
            loading: false,
            notifications_enabled: true,
            sound_enabled: false,
            accept_terms: true,
            plan: Plan::Monthly,
            character_name: String::new(),
            email: String::new(),
            birth_date: String::new(),
            bio: String::new(),
            region: None,
            volume: DEFAULT_VOLUME,
            avatar: None,
            modal_open: false,
            drawer_open: false,
            popover_open: false,
            playground: Playground {
                category: "success".to_string(),
                ..Playground::default()
            },
            chips: default_chips(),
            carousel: Carousel::new(CAROUSEL_SLIDES),
            pagination: Pagination::new(PAGE_COUNT),
            accordion: Accordion::new(ACCORDION_ITEMS),
            tabs: Tabs::new(TAB_COUNT),
            step: 1,
            menu: Menu::new(MENU_ITEMS),
            spinner: Spinner::default(),
        }
    }
}

fn default_chips() -> Vec<String> {
    DEFAULT_CHIPS.iter().map(ToString::to_string).collect()
}

/// Contextual data needed to render the catalog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    #[must_use]
    pub fn mode(&self, demo: Demo) -> Mode {
        self.modes[demo.slot()]
    }

    /// Returns true when anything Escape should close is shown.
    #[must_use]
    pub fn has_open_overlay(&self) -> bool {
        self.modal_open || self.drawer_open || self.popover_open || self.menu.is_open()
    }

    /// i18n key of the birth date error, if the field is filled in and invalid.
    #[must_use]
    pub fn birth_date_error(&self) -> Option<&'static str> {
        let raw = self.birth_date.trim();
        if raw.is_empty() {
            return None;
        }
        match NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT) {
            Ok(date) if date > chrono::Local::now().date_naive() => Some("forms-birth-date-future"),
            Ok(_) => None,
            Err(_) => Some("forms-birth-date-invalid"),
        }
    }

    /// Minimal `local@domain.tld` shape check.
    #[must_use]
    pub fn email_is_valid(&self) -> bool {
        let Some((local, domain)) = self.email.trim().split_once('@') else {
            return false;
        };
        !local.is_empty()
            && domain
                .split_once('.')
                .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
    }

    /// Process a catalog message and return the corresponding event.
    pub fn update(&mut self, message: Message, i18n: &I18n) -> Event {
        match message {
            Message::JumpTo(section) => Event::ScrollTo(section),
            Message::ModeChanged(demo, mode) => {
                self.modes[demo.slot()] = mode;
                Event::None
            }
            Message::CopyCode(demo) => Event::CopyToClipboard {
                text: demo.code().to_string(),
                title: i18n.tr("toast-code-copied-title"),
                description: i18n.tr("toast-code-copied-description"),
            },
            Message::CopySwatch(index) => match BRAND.get(index) {
                Some(swatch) => {
                    let hex = swatch.hex();
                    Event::CopyToClipboard {
                        description: i18n.tr_with_args(
                            "toast-color-copied-description",
                            &[("name", swatch.name), ("hex", hex.as_str())],
                        ),
                        text: hex,
                        title: i18n.tr("toast-color-copied-title"),
                    }
                }
                None => Event::None,
            },
            Message::DemoButtonPressed(variant) => Event::Notify {
                title: i18n.tr("toast-button-pressed-title"),
                description: i18n.tr_with_args(
                    "toast-button-pressed-description",
                    &[("variant", i18n.tr(variant.label_key()).as_str())],
                ),
                category: if variant == Variant::Danger {
                    Category::Error
                } else {
                    Category::Info
                },
            },
            Message::ToggleLoading => {
                self.loading = !self.loading;
                if !self.loading {
                    self.spinner.reset();
                }
                Event::None
            }
            Message::SpinnerTick => {
                if self.loading {
                    self.spinner.tick();
                }
                Event::None
            }
            Message::NotificationsToggled(value) => {
                self.notifications_enabled = value;
                Event::None
            }
            Message::SoundToggled(value) => {
                self.sound_enabled = value;
                Event::None
            }
            Message::TermsToggled(value) => {
                self.accept_terms = value;
                Event::None
            }
            Message::PlanSelected(plan) => {
                self.plan = plan;
                Event::None
            }
            Message::NameChanged(value) => {
                self.character_name = value;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::BirthDateChanged(value) => {
                self.birth_date = value;
                Event::None
            }
            Message::BioChanged(value) => {
                self.bio = value;
                Event::None
            }
            Message::RegionSelected(region) => {
                self.region = Some(region);
                Event::None
            }
            Message::VolumeChanged(value) => {
                self.volume = value.clamp(0.0, 100.0);
                Event::None
            }
            Message::PickAvatar => Event::PickAvatar,
            Message::AvatarPicked(Some(name)) => {
                let event = Event::Notify {
                    title: i18n.tr("toast-avatar-title"),
                    description: i18n.tr_with_args("toast-avatar-description", &[("file", name.as_str())]),
                    category: Category::Success,
                };
                self.avatar = Some(name);
                event
            }
            Message::AvatarPicked(None) => Event::None,
            Message::SubmitForm => self.submit(i18n),
            Message::OpenModal => {
                self.modal_open = true;
                Event::None
            }
            Message::CloseModal => {
                self.modal_open = false;
                Event::None
            }
            Message::OpenDrawer => {
                self.drawer_open = true;
                Event::None
            }
            Message::CloseDrawer => {
                self.drawer_open = false;
                Event::None
            }
            Message::TogglePopover => {
                self.popover_open = !self.popover_open;
                Event::None
            }
            Message::CloseOverlays => {
                self.modal_open = false;
                self.drawer_open = false;
                self.popover_open = false;
                self.menu.close();
                Event::None
            }
            Message::PlaygroundTitleChanged(value) => {
                self.playground.title = value;
                Event::None
            }
            Message::PlaygroundDescriptionChanged(value) => {
                self.playground.description = value;
                Event::None
            }
            Message::PlaygroundCategoryChanged(value) => {
                self.playground.category = value;
                Event::None
            }
            Message::PublishPlayground => self.playground_event(i18n),
            Message::QuickToast(category) => quick_toast(category, i18n),
            Message::RemoveChip(index) => {
                if index < self.chips.len() {
                    self.chips.remove(index);
                }
                Event::None
            }
            Message::ResetChips => {
                self.chips = default_chips();
                Event::None
            }
            Message::CarouselPrev => {
                self.carousel.prev();
                Event::None
            }
            Message::CarouselNext => {
                self.carousel.next();
                Event::None
            }
            Message::CarouselSelect(index) => {
                self.carousel.select(index);
                Event::None
            }
            Message::PagePrev => {
                self.pagination.prev();
                Event::None
            }
            Message::PageNext => {
                self.pagination.next();
                Event::None
            }
            Message::PageSelected(page) => {
                self.pagination.go_to(page);
                Event::None
            }
            Message::AccordionToggled(index) => {
                self.accordion.toggle(index);
                Event::None
            }
            Message::TabSelected(index) => {
                self.tabs.select(index);
                Event::None
            }
            Message::ToggleMenu => {
                self.menu.toggle();
                Event::None
            }
            Message::MenuSelected(index) => {
                self.menu.select(index);
                Event::None
            }
            Message::StepNext => {
                self.step = (self.step + 1).min(STEP_COUNT);
                Event::None
            }
            Message::StepBack => {
                self.step = self.step.saturating_sub(1);
                Event::None
            }
        }
    }

    fn submit(&self, i18n: &I18n) -> Event {
        let problem = if self.character_name.trim().is_empty() {
            Some("forms-error-name-required")
        } else if !self.email_is_valid() {
            Some("forms-error-email-invalid")
        } else if let Some(key) = self.birth_date_error() {
            Some(key)
        } else if !self.accept_terms {
            Some("forms-error-terms")
        } else {
            None
        };

        match problem {
            Some(key) => Event::Notify {
                title: i18n.tr("toast-form-error-title"),
                description: i18n.tr(key),
                category: Category::Error,
            },
            None => Event::Notify {
                title: i18n.tr("toast-form-saved-title"),
                description: i18n.tr_with_args(
                    "toast-form-saved-description",
                    &[("name", self.character_name.trim())],
                ),
                category: Category::Success,
            },
        }
    }

    /// Event published by the playground. Blank fields fall back to
    /// defaults; the category text is passed through verbatim.
    fn playground_event(&self, i18n: &I18n) -> Event {
        let or_default = |value: &str, key: &str| {
            let value = value.trim();
            if value.is_empty() {
                i18n.tr(key)
            } else {
                value.to_string()
            }
        };
        let category = self.playground.category.trim();

        Event::Notify {
            title: or_default(&self.playground.title, "toast-playground-default-title"),
            description: or_default(
                &self.playground.description,
                "toast-playground-default-description",
            ),
            category: if category.is_empty() {
                Category::Info
            } else {
                Category::parse(category)
            },
        }
    }

    /// Renders every section in one scrollable column, separated by dividers.
    pub fn view<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let sections = Section::ALL.iter().enumerate().fold(
            Column::new()
                .spacing(spacing::XXL)
                .padding(spacing::XL)
                .width(Length::Fill),
            |column, (index, section)| {
                let column = if index > 0 {
                    column.push(divider(None))
                } else {
                    column
                };
                column.push(self.view_section(*section, ctx))
            },
        );

        Container::new(
            scrollable(sections)
                .id(Id::new(SCROLLABLE_ID))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_styles::page)
        .into()
    }

    fn view_section<'a>(&'a self, section: Section, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        match section {
            Section::Intro => intro::view(ctx),
            Section::Colors => colors::view(ctx),
            Section::Typography => typography::view(ctx),
            Section::Buttons => buttons::view(self, ctx),
            Section::Forms => forms::view(self, ctx),
            Section::Feedback => feedback::view(self, ctx),
            Section::Data => data::view(self, ctx),
            Section::Navigation => navigation::view(self, ctx),
        }
    }

    /// Layers the open modal or drawer over `base`.
    pub fn view_overlays<'a>(
        &'a self,
        base: Element<'a, Message>,
        ctx: &ViewContext<'a>,
    ) -> Element<'a, Message> {
        if self.modal_open {
            overlay::modal(base, feedback::modal_content(ctx), Message::CloseModal)
        } else if self.drawer_open {
            overlay::drawer(base, feedback::drawer_content(ctx), Message::CloseDrawer)
        } else {
            base
        }
    }
}

fn quick_toast(category: Category, i18n: &I18n) -> Event {
    let (title, description) = match category {
        Category::Success => ("toast-quest-title", "toast-quest-description"),
        Category::Error => ("toast-connection-title", "toast-connection-description"),
        Category::Info | Category::Other(_) => {
            ("toast-maintenance-title", "toast-maintenance-description")
        }
    };
    Event::Notify {
        title: i18n.tr(title),
        description: i18n.tr(description),
        category,
    }
}

/// Section heading shared by every section view.
fn heading<'a>(section: Section, subtitle_key: &str, ctx: &ViewContext<'a>) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr(section.label_key())).size(type_scale::TITLE_LG))
        .push(Text::new(ctx.i18n.tr(subtitle_key)).size(type_scale::BODY_LG))
}

fn showcase_labels(i18n: &I18n) -> showcase::Labels {
    showcase::Labels {
        preview: i18n.tr("showcase-preview"),
        code: i18n.tr("showcase-code"),
        copy: i18n.tr("showcase-copy"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn sections_are_in_display_order() {
        assert_eq!(Section::ALL.first(), Some(&Section::Intro));
        assert_eq!(Section::ALL.last(), Some(&Section::Navigation));
        assert_eq!(Section::Buttons.index(), 3);
    }

    #[test]
    fn relative_offsets_span_the_page() {
        assert_eq!(Section::Intro.relative_offset(), 0.0);
        assert_eq!(Section::Navigation.relative_offset(), 1.0);
        let offsets: Vec<f32> = Section::ALL.iter().map(|s| s.relative_offset()).collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn search_is_case_insensitive() {
        assert!(Section::matches("Typography", "TYPO"));
        assert!(Section::matches("Typography", "  "));
        assert!(!Section::matches("Typography", "button"));
    }

    #[test]
    fn defaults_match_catalog_demo() {
        let state = State::default();
        assert!(state.notifications_enabled);
        assert!(!state.sound_enabled);
        assert!(state.accept_terms);
        assert_eq!(state.plan, Plan::Monthly);
        assert_eq!(state.volume, DEFAULT_VOLUME);
        assert_eq!(state.pagination.total(), PAGE_COUNT);
        assert_eq!(state.pagination.current(), 1);
        assert_eq!(state.accordion.open(), Some(0));
        assert_eq!(state.mode(Demo::Buttons), Mode::Preview);
    }

    #[test]
    fn birth_date_validation() {
        let mut state = State::default();
        assert_eq!(state.birth_date_error(), None);

        state.birth_date = "1994-02-30".to_string();
        assert_eq!(state.birth_date_error(), Some("forms-birth-date-invalid"));

        state.birth_date = "02/03/1994".to_string();
        assert_eq!(state.birth_date_error(), Some("forms-birth-date-invalid"));

        state.birth_date = "2999-01-01".to_string();
        assert_eq!(state.birth_date_error(), Some("forms-birth-date-future"));

        state.birth_date = "1994-03-02".to_string();
        assert_eq!(state.birth_date_error(), None);
    }

    #[test]
    fn email_shape_check() {
        let mut state = State::default();
        for (email, valid) in [
            ("hero@daikon.dev", true),
            ("hero@daikon", false),
            ("@daikon.dev", false),
            ("hero.daikon.dev", false),
        ] {
            state.email = email.to_string();
            assert_eq!(state.email_is_valid(), valid, "{email}");
        }
    }

    #[test]
    fn submit_reports_first_problem_as_error_toast() {
        let i18n = i18n();
        let mut state = State::default();
        let Event::Notify { category, .. } = state.update(Message::SubmitForm, &i18n) else {
            panic!("expected a toast");
        };
        assert_eq!(category, Category::Error);

        state.character_name = "Daikon Knight".to_string();
        state.email = "knight@daikon.dev".to_string();
        let Event::Notify {
            category,
            description,
            ..
        } = state.update(Message::SubmitForm, &i18n)
        else {
            panic!("expected a toast");
        };
        assert_eq!(category, Category::Success);
        assert!(description.contains("Daikon Knight"));
    }

    #[test]
    fn playground_passes_category_through_verbatim() {
        let i18n = i18n();
        let mut state = State::default();
        state.update(Message::PlaygroundTitleChanged("Loot".into()), &i18n);
        state.update(Message::PlaygroundCategoryChanged("legendary".into()), &i18n);

        let event = state.update(Message::PublishPlayground, &i18n);

        let Event::Notify {
            title, category, ..
        } = event
        else {
            panic!("expected a toast");
        };
        assert_eq!(title, "Loot");
        assert_eq!(category, Category::Other("legendary".into()));
    }

    #[test]
    fn blank_playground_uses_defaults() {
        let i18n = i18n();
        let mut state = State::default();
        state.update(Message::PlaygroundCategoryChanged("   ".into()), &i18n);
        let Event::Notify {
            title, category, ..
        } = state.update(Message::PublishPlayground, &i18n)
        else {
            panic!("expected a toast");
        };
        assert!(!title.is_empty());
        assert_eq!(category, Category::Info);
    }

    #[test]
    fn copy_swatch_targets_clipboard() {
        let i18n = i18n();
        let mut state = State::default();
        let event = state.update(Message::CopySwatch(0), &i18n);
        assert_eq!(
            event,
            Event::CopyToClipboard {
                text: "#f98476".to_string(),
                title: i18n.tr("toast-color-copied-title"),
                description: "Salmon (#f98476) copied.".to_string(),
            }
        );
        assert_eq!(state.update(Message::CopySwatch(99), &i18n), Event::None);
    }

    #[test]
    fn avatar_pick_is_announced() {
        let i18n = i18n();
        let mut state = State::default();
        assert_eq!(state.update(Message::PickAvatar, &i18n), Event::PickAvatar);
        assert_eq!(state.update(Message::AvatarPicked(None), &i18n), Event::None);

        let event = state.update(Message::AvatarPicked(Some("hero.png".into())), &i18n);
        assert!(matches!(event, Event::Notify { category: Category::Success, .. }));
        assert_eq!(state.avatar.as_deref(), Some("hero.png"));
    }

    #[test]
    fn close_overlays_closes_everything() {
        let i18n = i18n();
        let mut state = State::default();
        state.update(Message::OpenModal, &i18n);
        state.update(Message::OpenDrawer, &i18n);
        state.update(Message::TogglePopover, &i18n);
        state.update(Message::ToggleMenu, &i18n);
        assert!(state.has_open_overlay());

        state.update(Message::CloseOverlays, &i18n);
        assert!(!state.has_open_overlay());
        assert!(!state.menu.is_open());
    }

    #[test]
    fn open_menu_counts_as_overlay() {
        let i18n = i18n();
        let mut state = State::default();
        state.update(Message::ToggleMenu, &i18n);
        assert!(state.has_open_overlay());

        state.update(Message::MenuSelected(2), &i18n);
        assert_eq!(state.menu.selected(), Some(2));
        assert!(!state.has_open_overlay());
    }

    #[test]
    fn spinner_only_turns_while_loading() {
        let i18n = i18n();
        let mut state = State::default();
        state.update(Message::SpinnerTick, &i18n);
        assert_eq!(state.spinner, Spinner::default());

        state.update(Message::ToggleLoading, &i18n);
        state.update(Message::SpinnerTick, &i18n);
        assert_ne!(state.spinner, Spinner::default());

        state.update(Message::ToggleLoading, &i18n);
        assert_eq!(state.spinner, Spinner::default());
    }

    #[test]
    fn navigation_messages_drive_component_state() {
        let i18n = i18n();
        let mut state = State::default();
        state.update(Message::CarouselPrev, &i18n);
        assert_eq!(state.carousel.current(), CAROUSEL_SLIDES - 1);
        state.update(Message::PageSelected(99), &i18n);
        assert_eq!(state.pagination.current(), PAGE_COUNT);
        state.update(Message::TabSelected(2), &i18n);
        assert_eq!(state.tabs.selected(), 2);
        state.update(Message::AccordionToggled(1), &i18n);
        assert_eq!(state.accordion.open(), Some(1));
        for _ in 0..10 {
            state.update(Message::StepNext, &i18n);
        }
        assert_eq!(state.step, STEP_COUNT);
    }

    #[test]
    fn chips_can_be_removed_and_reset() {
        let i18n = i18n();
        let mut state = State::default();
        state.update(Message::RemoveChip(0), &i18n);
        state.update(Message::RemoveChip(42), &i18n);
        assert_eq!(state.chips.len(), DEFAULT_CHIPS.len() - 1);
        state.update(Message::ResetChips, &i18n);
        assert_eq!(state.chips.len(), DEFAULT_CHIPS.len());
    }

    #[test]
    fn jump_to_requests_scroll() {
        let i18n = i18n();
        let mut state = State::default();
        assert_eq!(
            state.update(Message::JumpTo(Section::Colors), &i18n),
            Event::ScrollTo(Section::Colors)
        );
    }

    #[test]
    fn every_demo_has_code() {
        for demo in [
            Demo::Buttons,
            Demo::Inputs,
            Demo::Alerts,
            Demo::Toasts,
            Demo::Carousel,
            Demo::Tabs,
        ] {
            assert!(!demo.code().is_empty());
        }
    }
}
