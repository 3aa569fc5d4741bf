// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo host.

use super::{App, Message, HOST_SCROLL_ID};
use crate::player::Lifecycle;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::overlay::{state_label, PlayerOverlay};
use iced::widget::scrollable::Viewport;
use iced::widget::{button, canvas, Column, Container, Id, Row, Scrollable, Stack, Text};
use iced::{Element, Length};

/// Number of rows in the host list; enough to scroll well past a transition.
const HOST_ROWS: usize = 40;

pub fn view(app: &App) -> Element<'_, Message> {
    let mut surface = Stack::new()
        .push(host_list())
        .width(Length::Fill)
        .height(Length::Fill);

    if app.player.is_shown() {
        let frame = app.player.presented_frame(app.now);
        let progress = app
            .player
            .state()
            .progress()
            .map_or(0.0, |progress| progress.value());
        let overlay = PlayerOverlay::new(frame, state_label(app.player.state()), progress);
        surface = surface.push(
            canvas::Canvas::new(overlay)
                .width(Length::Fill)
                .height(Length::Fill),
        );
    }

    Column::new()
        .push(surface)
        .push(controls(app))
        .into()
}

fn host_list<'a>() -> Element<'a, Message> {
    let rows = (1..=HOST_ROWS).fold(Column::new(), |column, index| {
        column.push(
            Container::new(Text::new(format!("Related video #{index}")).size(typography::BODY))
                .padding(spacing::MD)
                .height(Length::Fixed(sizing::HOST_ROW_HEIGHT))
                .width(Length::Fill),
        )
    });

    Scrollable::new(rows)
        .id(Id::new(HOST_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::HostScrolled(viewport.absolute_offset().y))
        .into()
}

fn controls(app: &App) -> Element<'_, Message> {
    let cleaned = app.player.is_cleaned();
    let shown = app.player.is_shown();
    let action = |label: &'static str, message: Message, enabled: bool| {
        button(Text::new(label).size(typography::CAPTION))
            .on_press_maybe(enabled.then_some(message))
            .padding(spacing::XXS)
    };

    let playback_label = if app.player.playback_state().is_playing() {
        "Pause"
    } else {
        "Play"
    };

    let mut buttons = Row::new()
        .spacing(spacing::XS)
        .push(action("Minimize", Message::Minimize, shown))
        .push(action("Maximize", Message::Maximize, shown))
        .push(action("Fullscreen", Message::ToggleFullScreen, shown))
        .push(action(playback_label, Message::TogglePlayback, !cleaned))
        .push(action("Next clip", Message::NextClip, !cleaned));

    buttons = if app.player.lifecycle() == Lifecycle::Removed {
        buttons.push(action("Show", Message::ShowPlayer, true))
    } else {
        buttons.push(action("Clean up", Message::Clean, !cleaned))
    };

    let status_color = if app.player.last_playback_error().is_some() {
        palette::ERROR_500
    } else {
        palette::GRAY_200
    };
    let status = Text::new(app.status.as_str())
        .size(typography::CAPTION)
        .color(status_color);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(buttons)
            .push(status),
    )
    .padding(spacing::XS)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CONTROLS_HEIGHT))
    .into()
}
