/// Slot selection controller
///
/// Owns the slot set and the remaining-required counter, and gates the
/// completion action on that counter. Picks are two-phase: `begin_pick`
/// arms a per-slot single-flight guard, `finish_pick` applies whatever the
/// media picker produced. `request_pick` runs both phases end to end.

use super::data::{ImageRef, SlotSet, REQUIRED_PHOTOS, SLOT_COUNT};
use crate::error::SelectionError;
use crate::media::{self, MediaPicker, PickOutcome};

/// Proof that a pick was started for a slot. Only `begin_pick` creates one,
/// and only the most recent ticket for a slot can finish it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickTicket {
    index: usize,
    serial: u64,
}

impl PickTicket {
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Summary of a successful pick
#[derive(Debug, Clone, PartialEq)]
pub struct PickReport {
    pub index: usize,
    /// Image the slot held before (None on a first fill)
    pub previous: Option<ImageRef>,
    pub remaining_required: usize,
    /// True if this pick is the one that enabled the completion action
    pub completed_now: bool,
}

/// Returned by `confirm` once all required photos are in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgment;

impl Acknowledgment {
    pub fn message(&self) -> &'static str {
        "You are all set!"
    }
}

#[derive(Debug, Clone)]
pub struct SlotSelectionController {
    slots: SlotSet,
    remaining_required: usize,
    /// Serial of the outstanding ticket per slot
    in_flight: [Option<u64>; SLOT_COUNT],
    next_serial: u64,
}

impl SlotSelectionController {
    pub fn new() -> Self {
        Self::with_required(REQUIRED_PHOTOS)
    }

    /// Controller needing `required` photos, capped at `REQUIRED_PHOTOS`
    pub fn with_required(required: usize) -> Self {
        Self {
            slots: SlotSet::new(),
            remaining_required: required.min(REQUIRED_PHOTOS),
            in_flight: [None; SLOT_COUNT],
            next_serial: 0,
        }
    }

    pub fn slots(&self) -> &SlotSet {
        &self.slots
    }

    pub fn remaining_required(&self) -> usize {
        self.remaining_required
    }

    pub fn is_action_enabled(&self) -> bool {
        self.remaining_required == 0
    }

    /// Whether a pick for `index` is currently outstanding
    pub fn is_pending(&self, index: usize) -> bool {
        matches!(self.in_flight.get(index), Some(Some(_)))
    }

    /// Start a pick for `index`. Fails if the index is out of range or a
    /// pick for the same slot is still outstanding.
    pub fn begin_pick(&mut self, index: usize) -> Result<PickTicket, SelectionError> {
        if index >= SLOT_COUNT {
            return Err(SelectionError::InvalidIndex { index });
        }
        if self.in_flight[index].is_some() {
            return Err(SelectionError::PickInFlight { index });
        }

        let serial = self.next_serial;
        self.next_serial += 1;
        self.in_flight[index] = Some(serial);
        tracing::debug!(index, serial, "pick started");
        Ok(PickTicket { index, serial })
    }

    /// Apply the picker's outcome to the ticket's slot.
    ///
    /// Denied and cancelled picks leave slots and counter untouched. A
    /// ticket that is not the slot's outstanding one is rejected with
    /// `StalePick` and changes nothing.
    pub fn finish_pick(
        &mut self,
        ticket: PickTicket,
        outcome: PickOutcome,
    ) -> Result<PickReport, SelectionError> {
        let index = ticket.index;
        if self.in_flight[index] != Some(ticket.serial) {
            tracing::warn!(index, serial = ticket.serial, "stale pick ticket");
            return Err(SelectionError::StalePick { index });
        }
        self.in_flight[index] = None;

        let reference = match outcome {
            PickOutcome::Selected(reference) => reference,
            PickOutcome::PermissionDenied => {
                tracing::info!(index, "media library permission denied");
                return Err(SelectionError::PermissionDenied);
            }
            PickOutcome::Cancelled => {
                tracing::info!(index, "pick cancelled");
                return Err(SelectionError::SelectionCancelled);
            }
        };

        let was_complete = self.is_action_enabled();
        let previous = self.slots.replace_content(index, reference);

        // Only a slot's first fill counts toward the requirement
        if previous.is_none() {
            self.remaining_required = self.remaining_required.saturating_sub(1);
        }

        let report = PickReport {
            index,
            previous,
            remaining_required: self.remaining_required,
            completed_now: !was_complete && self.is_action_enabled(),
        };

        tracing::info!(
            index,
            replaced = report.previous.is_some(),
            remaining = report.remaining_required,
            "📸 slot filled"
        );

        Ok(report)
    }

    /// Ask the picker for an image and place it in slot `index`.
    /// The iced loop runs the two phases itself so it never awaits on `&mut self`.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn request_pick(
        &mut self,
        index: usize,
        picker: &dyn MediaPicker,
    ) -> Result<PickReport, SelectionError> {
        let ticket = self.begin_pick(index)?;
        let outcome = media::pick_with_permission(picker).await;
        self.finish_pick(ticket, outcome)
    }

    /// Completion action; inert until every required photo is in
    pub fn confirm(&self) -> Result<Acknowledgment, SelectionError> {
        if !self.is_action_enabled() {
            return Err(SelectionError::ActionDisabled {
                remaining: self.remaining_required,
            });
        }

        tracing::info!("✅ profile photos confirmed");
        Ok(Acknowledgment)
    }
}

impl Default for SlotSelectionController {
    fn default() -> Self {
        Self::new()
    }
}
