/// User-visible alerts shown as native message dialogs
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

use crate::error::SelectionError;
use crate::state::selection::Acknowledgment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Info(String),
    Warning(String),
}

impl Alert {
    pub fn text(&self) -> &str {
        match self {
            Alert::Info(text) | Alert::Warning(text) => text,
        }
    }

    fn level(&self) -> MessageLevel {
        match self {
            Alert::Info(_) => MessageLevel::Info,
            Alert::Warning(_) => MessageLevel::Warning,
        }
    }
}

impl From<&SelectionError> for Alert {
    fn from(error: &SelectionError) -> Self {
        Alert::Warning(error.to_string())
    }
}

impl From<Acknowledgment> for Alert {
    fn from(ack: Acknowledgment) -> Self {
        Alert::Info(ack.message().to_string())
    }
}

/// Show the alert and wait for the user to dismiss it
pub async fn show(alert: Alert) {
    AsyncMessageDialog::new()
        .set_level(alert.level())
        .set_title("Profile photos")
        .set_description(alert.text())
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_from_condition() {
        let denied = Alert::from(&SelectionError::PermissionDenied);
        assert_eq!(denied.text(), "Permission to access media library is required.");
        assert!(matches!(denied, Alert::Warning(_)));

        let done = Alert::from(Acknowledgment);
        assert_eq!(done, Alert::Info("You are all set!".to_string()));
    }
}
