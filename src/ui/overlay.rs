// SPDX-License-Identifier: MPL-2.0
//! Canvas overlay that draws the player at its presented frame.
//!
//! The overlay knows nothing about gestures: the host computes the frame from
//! the player and hands it over on every view.

use crate::domain::ui::{PlayerFrame, PlayerState};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use iced::widget::canvas;
use iced::{mouse, Color, Pixels, Point, Rectangle, Size, Theme};

const SURFACE: Color = Color {
    a: opacity::OPAQUE,
    ..palette::GRAY_900
};
const LABEL: Color = palette::WHITE;
const STRIP: Color = palette::PRIMARY_500;

impl From<PlayerFrame> for Rectangle {
    fn from(frame: PlayerFrame) -> Self {
        Rectangle {
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
        }
    }
}

/// Short status text drawn in the player's corner.
#[must_use]
pub fn state_label(state: PlayerState) -> String {
    match state {
        PlayerState::Maximized => "Maximized".to_string(),
        PlayerState::Minimized => "Minimized".to_string(),
        PlayerState::Transitioning { progress, .. } => {
            format!("{:.0}%", progress.value() * 100.0)
        }
        PlayerState::FullScreen { .. } => "Fullscreen".to_string(),
    }
}

/// Draws the player rectangle, its label and a progress strip.
#[derive(Debug, Clone)]
pub struct PlayerOverlay {
    frame: PlayerFrame,
    label: String,
    /// Fraction of the way to the minimized layout, for the strip.
    progress: f32,
}

impl PlayerOverlay {
    #[must_use]
    pub fn new(frame: PlayerFrame, label: String, progress: f32) -> Self {
        Self {
            frame,
            label,
            progress: progress.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        self.frame.into()
    }
}

impl<Message> canvas::Program<Message> for PlayerOverlay {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let player = self.bounds();

        let body = canvas::Path::rectangle(player.position(), player.size());
        frame.fill(&body, SURFACE);

        if self.progress > 0.0 {
            let strip = canvas::Path::rectangle(
                Point::new(player.x, player.y + player.height - sizing::PROGRESS_STRIP),
                Size::new(player.width * self.progress, sizing::PROGRESS_STRIP),
            );
            frame.fill(&strip, STRIP);
        }

        let size = if player.width < 200.0 {
            typography::CAPTION
        } else {
            typography::BODY
        };
        frame.fill_text(canvas::Text {
            content: self.label.clone(),
            position: Point::new(player.x + spacing::XS, player.y + spacing::XS),
            color: LABEL,
            size: Pixels(size),
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }
}
