use iced::widget::image::Handle;
use iced::widget::{column, container, text, Column};
use iced::{Alignment, Element, Length, Size, Task, Theme};
use iced::alignment::Horizontal;
use iced_aw::Wrap;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod media;
mod state;
mod ui;

use config::Config;
use media::{MediaPicker, NativePicker, PickOutcome};
use state::data::{ImageRef, SLOT_COUNT};
use state::selection::{PickTicket, SlotSelectionController};
use ui::alert::{self, Alert};

/// Main application state
struct ProfilePhotos {
    /// Slots, remaining count and completion gating
    controller: SlotSelectionController,
    /// Device media library
    picker: Arc<dyn MediaPicker>,
    /// Rendered thumbnails, one per slot
    thumbnails: [Option<Handle>; SLOT_COUNT],
    /// Thumbnail size in pixels
    thumbnail_size: (u32, u32),
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User tapped a slot box
    SlotPressed(usize),
    /// Permission prompt and picker finished for a slot
    PickFinished(PickTicket, PickOutcome),
    /// Background thumbnail render finished
    ThumbnailReady(usize, ImageRef, Result<Handle, String>),
    /// User pressed the completion button
    ConfirmPressed,
    /// User dismissed an alert
    AlertClosed,
}

impl ProfilePhotos {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::load().unwrap_or_else(|err| {
            tracing::warn!("⚠️ {err}; using default settings");
            Config::default()
        });

        tracing::info!(
            required = config.required_photos,
            "🎨 Profile photos ready with {} slots",
            SLOT_COUNT
        );

        let app = ProfilePhotos {
            controller: SlotSelectionController::with_required(config.required_photos),
            picker: Arc::new(NativePicker::new(&config)),
            thumbnails: Default::default(),
            thumbnail_size: (config.thumbnail_width, config.thumbnail_height),
        };

        (app, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SlotPressed(index) => match self.controller.begin_pick(index) {
                Ok(ticket) => {
                    let picker = Arc::clone(&self.picker);

                    Task::perform(
                        async move { media::pick_with_permission(picker.as_ref()).await },
                        move |outcome| Message::PickFinished(ticket.clone(), outcome),
                    )
                }
                Err(err) => self.report(err),
            },
            Message::PickFinished(ticket, outcome) => {
                let index = ticket.index();

                match self.controller.finish_pick(ticket, outcome) {
                    Ok(report) => {
                        tracing::debug!(
                            index,
                            replaced = report.previous.is_some(),
                            filled = self.controller.slots().filled_count(),
                            "pick applied"
                        );

                        if report.completed_now {
                            tracing::info!("🎉 all required photos picked");
                        }

                        let reference = self
                            .controller
                            .slots()
                            .get(report.index)
                            .and_then(|slot| slot.content.clone());

                        // A new image makes the old thumbnail stale
                        self.thumbnails[report.index] = None;

                        match reference {
                            Some(reference) => self.render_thumbnail(report.index, reference),
                            None => Task::none(),
                        }
                    }
                    Err(err) => {
                        tracing::debug!(index, "pick finished without a photo");
                        self.report(err)
                    }
                }
            }
            Message::ThumbnailReady(index, reference, result) => {
                let current = self
                    .controller
                    .slots()
                    .get(index)
                    .and_then(|slot| slot.content.as_ref());

                // The slot was re-picked while this one was rendering
                if current != Some(&reference) {
                    tracing::debug!(index, "dropping stale thumbnail");
                    return Task::none();
                }

                self.thumbnails[index] = Some(match result {
                    Ok(handle) => handle,
                    Err(err) => {
                        tracing::warn!("⚠️ {err}; showing the original file");
                        Handle::from_path(reference.to_path())
                    }
                });

                Task::none()
            }
            Message::ConfirmPressed => match self.controller.confirm() {
                Ok(ack) => Task::perform(alert::show(Alert::from(ack)), |_| Message::AlertClosed),
                Err(err) => self.report(err),
            },
            Message::AlertClosed => Task::none(),
        }
    }

    /// Log a controller condition and alert the user if it is one they should see
    fn report(&self, err: error::SelectionError) -> Task<Message> {
        if !err.is_user_visible() {
            tracing::debug!("ignored: {err}");
            return Task::none();
        }

        tracing::info!("{err}");
        Task::perform(alert::show(Alert::from(&err)), |_| Message::AlertClosed)
    }

    /// Render a slot thumbnail in the background
    fn render_thumbnail(&self, index: usize, reference: ImageRef) -> Task<Message> {
        let (width, height) = self.thumbnail_size;
        let key = reference.clone();

        Task::perform(
            media::thumbnail::load_thumbnail(reference, width, height),
            move |result| {
                Message::ThumbnailReady(index, key.clone(), result.map_err(|err| err.to_string()))
            },
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let tiles: Vec<Element<Message>> = self
            .controller
            .slots()
            .iter()
            .map(|slot| {
                ui::slot_tile(
                    slot,
                    self.thumbnails[slot.index].as_ref(),
                    self.controller.is_pending(slot.index),
                )
            })
            .collect();

        let grid = Wrap::with_elements(tiles).spacing(10.0).line_spacing(10.0);

        let mut content: Column<Message> = column![
            text(ui::TITLE).size(24),
            text(ui::SUBTITLE).size(15),
            container(grid).center_x(Length::Fill),
        ]
        .spacing(20)
        .padding([1, 17])
        .align_x(Alignment::Center);

        if let Some(guidance) = ui::guidance_message(self.controller.remaining_required()) {
            content = content.push(text(guidance).size(14).align_x(Horizontal::Center));
        }

        content = content.push(ui::action_button(self.controller.is_action_enabled()));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("profile_photos=info")),
        )
        .init();

    iced::application(
        "Profile Photos",
        ProfilePhotos::update,
        ProfilePhotos::view,
    )
    .theme(ProfilePhotos::theme)
    .window_size(Size::new(420.0, 760.0))
    .centered()
    .run_with(ProfilePhotos::new)
}
