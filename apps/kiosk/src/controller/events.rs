//! Backend-to-UI events and error modeling for the kiosk controller.

use std::sync::Arc;

use content::ContentStore;
use shared::domain::{CollegeId, MinistryId};

pub enum UiEvent {
    ContentLoaded(Arc<ContentStore>),
    Error(UiError),
    NewsTick,
}

/// Interactions emitted by section views and applied by the app shell. The
/// views never mutate controller state directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionAction {
    SelectCollege(CollegeId),
    BackToCouncilOverview,
    NewsNext,
    NewsPrevious,
    NewsGoTo(usize),
    ToggleMinistry(MinistryId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    ContentLoad,
}

pub fn describe_content_failure(message: &str) -> String {
    let lower = message.to_ascii_lowercase();
    if lower.contains("failed to read fixture") {
        format!("Fixture files are missing or unreadable: {message}")
    } else if lower.contains("failed to parse fixture") {
        format!("Fixture files are malformed: {message}")
    } else if lower.contains("duplicate id") || lower.contains("empty") {
        format!("Fixture content failed validation: {message}")
    } else {
        format!("Content error: {message}")
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
