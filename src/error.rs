/// Error types for slot selection, configuration and thumbnail rendering

use std::path::PathBuf;
use thiserror::Error;

/// Conditions reported back from the selection controller.
///
/// The `Display` text of each variant is what the user sees in the alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("There is no photo slot number {index}.")]
    InvalidIndex { index: usize },

    #[error("Permission to access media library is required.")]
    PermissionDenied,

    #[error("You did not select any image.")]
    SelectionCancelled,

    #[error("A photo is already being picked for slot {index}.")]
    PickInFlight { index: usize },

    #[error("We still need {remaining} more pictures.")]
    ActionDisabled { remaining: usize },

    #[error("A finished or replaced pick for slot {index} was reported again.")]
    StalePick { index: usize },
}

impl SelectionError {
    /// Whether this should be surfaced to the user as an alert.
    /// A pick already in flight is a swallowed double tap.
    pub fn is_user_visible(&self) -> bool {
        !matches!(
            self,
            SelectionError::PickInFlight { .. }
                | SelectionError::ActionDisabled { .. }
                | SelectionError::StalePick { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("thumbnail worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_texts() {
        assert_eq!(
            SelectionError::PermissionDenied.to_string(),
            "Permission to access media library is required."
        );
        assert_eq!(
            SelectionError::SelectionCancelled.to_string(),
            "You did not select any image."
        );
    }

    #[test]
    fn test_visibility() {
        assert!(SelectionError::PermissionDenied.is_user_visible());
        assert!(SelectionError::SelectionCancelled.is_user_visible());
        assert!(SelectionError::InvalidIndex { index: 9 }.is_user_visible());
        assert!(!SelectionError::PickInFlight { index: 0 }.is_user_visible());
        assert!(!SelectionError::ActionDisabled { remaining: 2 }.is_user_visible());
        assert!(!SelectionError::StalePick { index: 1 }.is_user_visible());
    }
}
