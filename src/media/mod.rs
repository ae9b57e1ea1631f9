/// Media library access
///
/// This module handles:
/// - The picker collaborator seam (`MediaPicker`)
/// - The native rfd-backed picker (native.rs)
/// - Rendering chosen photos into slot thumbnails (thumbnail.rs)

pub mod native;
pub mod thumbnail;

use async_trait::async_trait;
use crate::state::data::ImageRef;

pub use native::NativePicker;

/// What the image picker returned
#[derive(Debug, Clone, PartialEq)]
pub enum PickResult {
    Cancelled,
    Selected(ImageRef),
}

/// Result of the whole permission + pick flow
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    PermissionDenied,
    Cancelled,
    Selected(ImageRef),
}

/// Device media library: permission prompt and image selection UI
#[async_trait]
pub trait MediaPicker: Send + Sync {
    /// Ask for access to the media library. Returns true if granted.
    async fn request_permission(&self) -> bool;

    /// Let the user choose one image.
    async fn pick_image(&self) -> PickResult;
}

/// Request permission, then run the picker if it was granted
pub async fn pick_with_permission(picker: &dyn MediaPicker) -> PickOutcome {
    let granted = picker.request_permission().await;
    tracing::debug!(granted, "permission result");

    if !granted {
        return PickOutcome::PermissionDenied;
    }

    match picker.pick_image().await {
        PickResult::Selected(reference) => {
            tracing::debug!(%reference, "image picker returned a selection");
            PickOutcome::Selected(reference)
        }
        PickResult::Cancelled => {
            tracing::debug!("image picker was cancelled");
            PickOutcome::Cancelled
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Picker double that replays a fixed script of results
    pub struct ScriptedPicker {
        granted: bool,
        results: Mutex<VecDeque<PickResult>>,
        picks: AtomicUsize,
    }

    impl ScriptedPicker {
        pub fn granting(results: impl IntoIterator<Item = PickResult>) -> Self {
            Self {
                granted: true,
                results: Mutex::new(results.into_iter().collect()),
                picks: AtomicUsize::new(0),
            }
        }

        pub fn denying() -> Self {
            Self {
                granted: false,
                results: Mutex::new(VecDeque::new()),
                picks: AtomicUsize::new(0),
            }
        }

        /// Picker that selects each of `locators` in turn
        pub fn selecting(locators: &[&str]) -> Self {
            Self::granting(
                locators
                    .iter()
                    .map(|locator| PickResult::Selected(ImageRef::from(*locator))),
            )
        }

        pub fn pick_count(&self) -> usize {
            self.picks.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MediaPicker for ScriptedPicker {
        async fn request_permission(&self) -> bool {
            self.granted
        }

        async fn pick_image(&self) -> PickResult {
            self.picks.fetch_add(1, Ordering::SeqCst);
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(PickResult::Cancelled)
        }
    }
}
