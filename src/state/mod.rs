/// State management module
/// 
/// This module handles all application state, including:
/// - Slot data structures and category labels (data.rs)
/// - The slot selection controller and completion gating (selection.rs)

pub mod data;
pub mod selection;
