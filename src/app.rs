//! Core application state and Iced Application implementation
//!
//! The view only reads `SearchState`; every message is forwarded to the
//! controller and any timer it hands back becomes a `Task`.

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Background, Border, Element, Length, Padding, Task, Theme};

use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::config::Config;
use crate::controller::{Controller, SearchState, Timer, TimerEvent};
use crate::quotes::{QuoteStore, TopicCategory, CATEGORIES};
use crate::ui::format;
use crate::ui::search_bar;
use crate::ui::theme::SlateTheme;

pub const TITLE: &str = "QuoteStream";

pub struct QuoteStream {
    controller: Controller<Box<dyn ClipboardWriter>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submit,
    CategorySelected(&'static str),
    CopyQuote { index: usize, text: String },
    TimerElapsed(TimerEvent),
}

impl QuoteStream {
    pub fn new(config: &Config) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(config: &Config, clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self {
            controller: Controller::new(QuoteStore::default(), config.delays, clipboard),
        }
    }

    pub fn state(&self) -> &SearchState {
        self.controller.state()
    }

    pub fn title(&self) -> String {
        String::from(TITLE)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let timer = match message {
            Message::QueryChanged(query) => {
                self.controller.update_query_text(query);
                None
            }
            Message::Submit => self.controller.submit_search(),
            Message::CategorySelected(key) => Some(self.controller.select_category(key)),
            Message::CopyQuote { index, text } => self.controller.copy_quote(&text, index),
            Message::TimerElapsed(event) => self.controller.on_timer(event),
        };

        schedule(timer)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let state = self.controller.state();

        let body: Element<'_, Message> = if !state.results.is_empty() {
            view_results(state)
        } else if !state.is_loading {
            view_empty_state()
        } else {
            Space::with_height(0).into()
        };

        let content = column![
            view_header(),
            view_search(state),
            view_categories(state),
            body,
            view_footer(),
        ]
        .spacing(24)
        .padding(24)
        .max_width(1100.0);

        container(scrollable(
            container(content).width(Length::Fill).center_x(Length::Fill),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(SlateTheme::BACKGROUND)),
            ..Default::default()
        })
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn view_search(state: &SearchState) -> Element<'_, Message> {
    let can_submit = !state.is_loading && !state.query_text.trim().is_empty();
    let label = if state.is_loading { "Processing..." } else { "Search" };

    let submit = button(text(label).size(16))
        .padding(Padding::from([12.0, 32.0]))
        .style(button::primary)
        .on_press_maybe(can_submit.then_some(Message::Submit));

    card(
        column![
            text("Search Quotes").size(18).color(SlateTheme::TEXT),
            text("Find inspirational quotes by topic or keyword")
                .size(14)
                .color(SlateTheme::TEXT_MUTED),
            row![
                container(search_bar::view(
                    &state.query_text,
                    Message::QueryChanged,
                    Message::Submit,
                ))
                .width(Length::Fill),
                submit,
            ]
            .spacing(16)
            .align_y(Alignment::Center),
        ]
        .spacing(8),
    )
}

fn view_results(state: &SearchState) -> Element<'_, Message> {
    let items: Vec<Element<'_, Message>> = state
        .results
        .iter()
        .enumerate()
        .map(|(index, quote)| {
            view_quote(quote, index, &state.query_text, state.copied_index == Some(index))
        })
        .collect();

    card(
        column![
            row![
                text(format::results_heading(state.results.len()))
                    .size(18)
                    .color(SlateTheme::TEXT),
                Space::with_width(Length::Fill),
                text(format::category_caption(&state.query_text))
                    .size(14)
                    .color(SlateTheme::TEXT_MUTED),
            ]
            .align_y(Alignment::Center),
            column(items).spacing(16),
        ]
        .spacing(20),
    )
}

fn schedule(timer: Option<Timer>) -> Task<Message> {
    match timer {
        Some(timer) => Task::perform(timer.elapsed(), Message::TimerElapsed),
        None => Task::none(),
    }
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(SlateTheme::SURFACE)),
            border: Border {
                color: SlateTheme::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn view_header<'a>() -> Element<'a, Message> {
    card(
        column![
            text(TITLE).size(26).color(SlateTheme::TEXT),
            text("Professional Quote Management System")
                .size(14)
                .color(SlateTheme::TEXT_MUTED),
        ]
        .spacing(4),
    )
}

fn view_categories<'a>(state: &'a SearchState) -> Element<'a, Message> {
    let buttons: Vec<Element<'a, Message>> = CATEGORIES
        .iter()
        .map(|category| {
            let selected = state.selected_category.as_deref() == Some(category.key);
            view_category(*category, selected)
        })
        .collect();

    card(
        column![
            text("Quick Categories").size(18).color(SlateTheme::TEXT),
            row(buttons).spacing(16),
        ]
        .spacing(16),
    )
}

fn view_category<'a>(category: TopicCategory, selected: bool) -> Element<'a, Message> {
    let accent = SlateTheme::category_accent(category.key);

    let swatch = container(Space::new(24, 24)).style(move |_theme| container::Style {
        background: Some(Background::Color(accent)),
        border: Border::default().rounded(6),
        ..Default::default()
    });

    let content = row![
        swatch,
        column![
            text(category.label).size(15).color(SlateTheme::TEXT),
            text("View quotes").size(13).color(SlateTheme::TEXT_MUTED),
        ]
        .spacing(2),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    button(content)
        .padding(16)
        .width(Length::Fill)
        .style(move |theme, status| {
            let mut style = button::secondary(theme, status);
            style.background = Some(Background::Color(if selected {
                SlateTheme::SURFACE_MUTED
            } else {
                SlateTheme::SURFACE
            }));
            style.text_color = SlateTheme::TEXT;
            style.border = Border {
                color: if selected {
                    SlateTheme::BORDER_STRONG
                } else {
                    SlateTheme::BORDER
                },
                width: 2.0,
                radius: 8.0.into(),
            };
            style
        })
        .on_press(Message::CategorySelected(category.key))
        .into()
}

fn view_quote<'a>(
    quote: &'a str,
    index: usize,
    query: &'a str,
    copied: bool,
) -> Element<'a, Message> {
    let meta = row![
        text(format::topic_caption(query))
            .size(13)
            .color(SlateTheme::TEXT_MUTED),
        text("•").size(13).color(SlateTheme::TEXT_MUTED),
        text(format!("ID: {}", format::quote_id(index)))
            .size(13)
            .color(SlateTheme::TEXT_MUTED),
    ]
    .spacing(12);

    let copy = button(text("Copy").size(13))
        .padding(Padding::from([6.0, 12.0]))
        .style(button::text)
        .on_press(Message::CopyQuote {
            index,
            text: quote.to_string(),
        });

    let mut body = column![row![
        column![
            text(format::quoted(quote)).size(18).color(SlateTheme::TEXT),
            meta,
        ]
        .spacing(12)
        .width(Length::Fill),
        copy,
    ]
    .spacing(16)]
    .spacing(12);

    if copied {
        body = body.push(
            container(
                text("Quote copied to clipboard")
                    .size(13)
                    .color(SlateTheme::SUCCESS_TEXT),
            )
            .padding(8)
            .width(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(SlateTheme::SUCCESS_BG)),
                border: Border::default().rounded(4),
                ..Default::default()
            }),
        );
    }

    container(body)
        .padding(20)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(SlateTheme::SURFACE_MUTED)),
            border: Border {
                color: SlateTheme::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn view_empty_state<'a>() -> Element<'a, Message> {
    card(
        column![
            text("No quotes found").size(18).color(SlateTheme::TEXT),
            text("Enter a topic above or select a category to get started")
                .size(14)
                .color(SlateTheme::TEXT_MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    )
}

fn view_footer<'a>() -> Element<'a, Message> {
    container(
        text("© 2025 QuoteStream. All rights reserved.")
            .size(13)
            .color(SlateTheme::TEXT_MUTED),
    )
    .padding(Padding::from([16.0, 0.0]))
    .width(Length::Fill)
    .into()
}
