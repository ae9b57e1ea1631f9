/// Desktop media picker backed by native dialogs (rfd)
use async_trait::async_trait;
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{MediaPicker, PickResult};
use crate::config::Config;
use crate::state::data::ImageRef;

/// Picks photos from the local filesystem.
///
/// Desktop platforms have no media-library permission of their own, so the
/// permission step is a Yes/No prompt. Once granted it is not asked again
/// for the rest of the session.
pub struct NativePicker {
    ask_permission: bool,
    granted: AtomicBool,
    start_dir: Option<PathBuf>,
    extensions: Vec<String>,
}

impl NativePicker {
    pub fn new(config: &Config) -> Self {
        Self {
            ask_permission: config.ask_permission,
            granted: AtomicBool::new(false),
            start_dir: config.picker_start_dir(),
            extensions: config.extensions.clone(),
        }
    }
}

#[async_trait]
impl MediaPicker for NativePicker {
    async fn request_permission(&self) -> bool {
        if !self.ask_permission || self.granted.load(Ordering::Acquire) {
            return true;
        }

        let answer = AsyncMessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("Photo library")
            .set_description("Allow access to your photo library?")
            .set_buttons(MessageButtons::YesNo)
            .show()
            .await;
        tracing::debug!(?answer, "permission prompt answered");

        let granted = matches!(answer, MessageDialogResult::Yes);
        if granted {
            self.granted.store(true, Ordering::Release);
        }
        granted
    }

    async fn pick_image(&self) -> PickResult {
        let mut dialog = AsyncFileDialog::new()
            .set_title("Choose a photo")
            .add_filter("Images", &self.extensions[..]);

        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        match dialog.pick_file().await {
            Some(handle) => PickResult::Selected(ImageRef::from(handle.path())),
            None => PickResult::Cancelled,
        }
    }
}
