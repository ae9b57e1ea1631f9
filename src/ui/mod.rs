/// Presentation helpers for the photo slot screen
///
/// Everything here is a pure function of controller state plus the
/// thumbnails the app has rendered so far.

pub mod alert;

use iced::alignment::Horizontal;
use iced::widget::image::Handle;
use iced::widget::{button, container, image, text};
use iced::{Background, Border, Color, ContentFit, Element, Length, Theme};

use crate::state::data::Slot;
use crate::Message;

/// On-screen slot size in logical pixels
pub const SLOT_WIDTH: f32 = 100.0;
pub const SLOT_HEIGHT: f32 = 150.0;

const EMPTY_SLOT: Color = Color::from_rgb(0.827, 0.827, 0.827);
const ACCENT: Color = Color::from_rgb(1.0, 0.078, 0.576); // #ff1493
const DISABLED: Color = Color::from_rgb(0.5, 0.5, 0.5);

pub const TITLE: &str = "Pick the photos that make you stand out";
pub const SUBTITLE: &str =
    "Use our guide to increase your matching. We want you to have the best experience!";

/// Text under the grid while photos are still missing
pub fn guidance_message(remaining: usize) -> Option<String> {
    if remaining == 0 {
        return None;
    }

    let noun = if remaining == 1 { "picture" } else { "pictures" };
    Some(format!(
        "We need {} more {} to finalize your profile.\n\
         Tip: Make sure at least one of the pictures shows your face clearly!",
        remaining, noun
    ))
}

/// One tappable slot box
pub fn slot_tile<'a>(slot: &'a Slot, thumbnail: Option<&Handle>, pending: bool) -> Element<'a, Message> {
    let content: Element<'a, Message> = if pending {
        text("Loading...").size(12).into()
    } else if let Some(handle) = thumbnail {
        image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into()
    } else if let Some(reference) = &slot.content {
        // Thumbnail still rendering, show the file as-is
        image(Handle::from_path(reference.to_path()))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into()
    } else {
        text(slot.label)
            .size(12)
            .align_x(Horizontal::Center)
            .into()
    };

    let filled = slot.is_filled();

    button(
        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(SLOT_WIDTH))
    .height(Length::Fixed(SLOT_HEIGHT))
    .padding(0)
    .style(move |_theme: &Theme, _status| button::Style {
        background: (!filled).then_some(Background::Color(EMPTY_SLOT)),
        text_color: Color::BLACK,
        border: Border {
            color: EMPTY_SLOT,
            width: 2.0,
            radius: 10.0.into(),
        },
        ..button::Style::default()
    })
    .on_press_maybe((!pending).then_some(Message::SlotPressed(slot.index)))
    .into()
}

/// Completion button, only pressable once every required photo is in
pub fn action_button<'a>(enabled: bool) -> Element<'a, Message> {
    let color = if enabled { ACCENT } else { DISABLED };

    button(text("You are all set !").size(16).color(Color::WHITE))
        .padding([10, 20])
        .style(move |_theme: &Theme, _status| button::Style {
            background: Some(Background::Color(color)),
            text_color: Color::WHITE,
            border: Border {
                radius: 5.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        })
        .on_press_maybe(enabled.then_some(Message::ConfirmPressed))
        .into()
}
