// SPDX-License-Identifier: MPL-2.0
//! Interactive gallery for the notification area.
//!
//! A small form for composing notifications: message text, category,
//! display duration, and entry/exit effects, with the toast overlay
//! stacked on top. Useful for trying out display policies:
//!
//! ```text
//! cargo run --example gallery -- --anchor bottom-right --max-visible 4
//! ```
//!
//! Flags: `--anchor <anchor>`, `--max-visible <n>`, `--config <toml>`.

use iced::widget::{button, pick_list, slider, text, text_input, Column, Container, Row, Stack};
use iced::{alignment, Element, Length, Subscription, Task, Theme};
use iced_toasts::{config, Anchor, Category, Config, Effect, Notification, NotificationArea};
use std::path::PathBuf;
use std::time::Duration;

const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 600.0;

/// Label column width for the form rows.
const LABEL_WIDTH: f32 = 170.0;

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap();
    let anchor: Option<Anchor> = args.opt_value_from_str("--anchor").unwrap();
    let max_visible: Option<usize> = args.opt_value_from_str("--max-visible").unwrap();

    let mut config = match &config_path {
        Some(path) => config::load_from_path(path).unwrap_or_else(|err| {
            log::warn!("could not read {}: {err}", path.display());
            Config::default()
        }),
        None => Config::default(),
    };
    if anchor.is_some() {
        config.anchor = anchor;
    }
    if max_visible.is_some() {
        config.max_visible = max_visible;
    }

    // iced 0.14 requires boot to be Fn, so the config is cloned per call.
    let boot = move || Gallery::new(config.clone());

    iced::application(boot, Gallery::update, Gallery::view)
        .title(Gallery::title)
        .theme(Gallery::theme)
        .window(iced::window::Settings {
            size: iced::Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            ..Default::default()
        })
        .subscription(Gallery::subscription)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Toasts(iced_toasts::Message),
    MessageChanged(String),
    CategoryPicked(Category),
    TimeoutChanged(u32),
    EntryEffectPicked(Effect),
    EntryDurationChanged(u32),
    ExitEffectPicked(Effect),
    ExitDurationChanged(u32),
    Send,
    DismissAll,
    Clear,
}

/// Gallery state: the notification area plus the form being composed.
struct Gallery {
    toasts: NotificationArea,
    message: String,
    category: Category,
    timeout_ms: u32,
    entry_effect: Effect,
    entry_duration_ms: u32,
    exit_effect: Effect,
    exit_duration_ms: u32,
}

impl Gallery {
    fn new(config: Config) -> Self {
        let entry_effect = config.entry_effect();
        let entry_duration_ms = config.entry_duration().as_millis() as u32;
        let exit_effect = config.exit_effect();
        let exit_duration_ms = config.exit_duration().as_millis() as u32;

        Self {
            toasts: NotificationArea::with_config(config),
            message: String::new(),
            category: Category::Primary,
            timeout_ms: 2000,
            entry_effect,
            entry_duration_ms,
            exit_effect,
            exit_duration_ms,
        }
    }

    fn title(&self) -> String {
        String::from("iced_toasts gallery")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toasts(message) => self.toasts.update(message),
            Message::MessageChanged(value) => self.message = value,
            Message::CategoryPicked(category) => self.category = category,
            Message::TimeoutChanged(ms) => self.timeout_ms = ms,
            Message::EntryEffectPicked(effect) => self.entry_effect = effect,
            Message::EntryDurationChanged(ms) => self.entry_duration_ms = ms,
            Message::ExitEffectPicked(effect) => self.exit_effect = effect,
            Message::ExitDurationChanged(ms) => self.exit_duration_ms = ms,
            Message::Send => self.send(),
            Message::DismissAll => self.toasts.dismiss_all(),
            Message::Clear => self.toasts.clear(),
        }
        Task::none()
    }

    fn send(&mut self) {
        let message = self.message.trim();
        if message.is_empty() {
            return;
        }

        self.toasts.set_entry_effect(
            self.entry_effect,
            Duration::from_millis(u64::from(self.entry_duration_ms)),
        );
        self.toasts.set_exit_effect(
            self.exit_effect,
            Duration::from_millis(u64::from(self.exit_duration_ms)),
        );
        self.toasts.push(
            Notification::new(self.category, message)
                .timeout(Duration::from_millis(u64::from(self.timeout_ms))),
        );
    }

    fn view(&self) -> Element<'_, Message> {
        Stack::new()
            .push(self.view_form())
            .push(self.toasts.view().map(Message::Toasts))
            .into()
    }

    fn view_form(&self) -> Element<'_, Message> {
        let message_input = text_input("What happened?", &self.message)
            .on_input(Message::MessageChanged)
            .on_submit(Message::Send)
            .padding(8);

        let mut form = Column::new()
            .spacing(12)
            .push(text("Send a notification").size(24))
            .push(labeled("Message", message_input.into()))
            .push(labeled(
                "Category",
                pick_list(Category::ALL, Some(self.category), Message::CategoryPicked)
                    .width(Length::Fill)
                    .into(),
            ))
            .push(duration_row(
                "Display duration",
                500..=5000,
                self.timeout_ms,
                Message::TimeoutChanged,
            ))
            .push(labeled(
                "Entry effect",
                pick_list(
                    Effect::ALL,
                    Some(self.entry_effect),
                    Message::EntryEffectPicked,
                )
                .width(Length::Fill)
                .into(),
            ));

        if self.entry_effect != Effect::None {
            form = form.push(duration_row(
                "Entry duration",
                100..=1000,
                self.entry_duration_ms,
                Message::EntryDurationChanged,
            ));
        }

        form = form.push(labeled(
            "Exit effect",
            pick_list(
                Effect::ALL,
                Some(self.exit_effect),
                Message::ExitEffectPicked,
            )
            .width(Length::Fill)
            .into(),
        ));

        if self.exit_effect != Effect::None {
            form = form.push(duration_row(
                "Exit duration",
                100..=1000,
                self.exit_duration_ms,
                Message::ExitDurationChanged,
            ));
        }

        let buttons = Row::new()
            .spacing(12)
            .push(button(text("Send")).on_press(Message::Send).padding([8, 16]))
            .push(
                button(text("Dismiss all"))
                    .on_press(Message::DismissAll)
                    .padding([8, 16]),
            )
            .push(
                button(text("Clear"))
                    .on_press(Message::Clear)
                    .padding([8, 16]),
            );

        let status = text(format!(
            "{} visible, {} queued",
            self.toasts.active_count(),
            self.toasts.pending_count()
        ))
        .size(13);

        form = form.push(buttons).push(status);

        Container::new(form.max_width(560.0))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(24)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toasts.subscription().map(Message::Toasts)
    }
}

fn labeled<'a>(label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    Row::new()
        .spacing(12)
        .align_y(alignment::Vertical::Center)
        .push(text(label).width(Length::Fixed(LABEL_WIDTH)))
        .push(control)
        .into()
}

fn duration_row<'a>(
    label: &'a str,
    range: std::ops::RangeInclusive<u32>,
    value: u32,
    on_change: impl Fn(u32) -> Message + 'a,
) -> Element<'a, Message> {
    let control = Row::new()
        .spacing(12)
        .align_y(alignment::Vertical::Center)
        .push(slider(range, value, on_change).step(50u32))
        .push(text(format!("{value} ms")).size(13).width(Length::Fixed(64.0)));

    labeled(label, control.into())
}
