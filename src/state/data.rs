/// Shared data structures for the application state
/// 
/// These structs represent the data model that flows between
/// the selection controller and the UI layer.

use std::path::{Path, PathBuf};

/// Number of photo slots on the screen
pub const SLOT_COUNT: usize = 6;

/// Photos needed before the profile can be finalized
pub const REQUIRED_PHOTOS: usize = 3;

/// Category shown in each empty slot, in slot order
pub const SLOT_LABELS: [&str; SLOT_COUNT] = [
    "Portrait",
    "Group/Friends",
    "Activity/Sports",
    "Full Body",
    "Pets/Outdoor",
    "Smiling",
];

/// Opaque locator for an image chosen through the media picker
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filesystem path of the image (a `file://` prefix is stripped)
    pub fn to_path(&self) -> PathBuf {
        let raw = self.0.strip_prefix("file://").unwrap_or(&self.0);
        PathBuf::from(raw)
    }
}

impl From<&str> for ImageRef {
    fn from(locator: &str) -> Self {
        Self::new(locator)
    }
}

impl From<&Path> for ImageRef {
    fn from(path: &Path) -> Self {
        Self(path.to_string_lossy().to_string())
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single photo slot
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    /// Position on screen (0..SLOT_COUNT)
    pub index: usize,
    /// Category name, fixed at construction
    pub label: &'static str,
    /// Chosen image (None until the first successful pick)
    pub content: Option<ImageRef>,
}

impl Slot {
    pub fn is_filled(&self) -> bool {
        self.content.is_some()
    }
}

/// Fixed-length, ordered set of slots
#[derive(Debug, Clone, PartialEq)]
pub struct SlotSet {
    slots: [Slot; SLOT_COUNT],
}

impl SlotSet {
    /// Create six empty slots labelled in category order
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|index| Slot {
                index,
                label: SLOT_LABELS[index],
                content: None,
            }),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_filled()).count()
    }

    /// Store `reference` in a slot and hand back whatever it replaced.
    /// Callers validate `index` first.
    pub(crate) fn replace_content(&mut self, index: usize, reference: ImageRef) -> Option<ImageRef> {
        self.slots[index].content.replace(reference)
    }
}

impl Default for SlotSet {
    fn default() -> Self {
        Self::new()
    }
}
