//! Shared types for both backend and frontend (WASM-compatible).
//!
//! These types cross the Tauri invoke boundary as JSON, so they must not depend
//! on backend-only code.

use serde::{Deserialize, Serialize};

/// Raw contents of the three form inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.quantity.is_empty() && self.price.is_empty()
    }
}

/// One of the window's four buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormAction {
    Add,
    List,
    Remove,
    UpdateQuantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Error,
}

impl NoticeKind {
    pub fn title(&self) -> &'static str {
        match self {
            NoticeKind::Info => "Information",
            NoticeKind::Error => "Error",
        }
    }
}

/// A message the shell shows as a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: NoticeKind::Info.title().to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: NoticeKind::Error.title().to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Everything the window needs to re-render after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    pub fields: FormFields,
    /// Contents of the read-only output area.
    pub output: String,
    pub notice: Option<Notice>,
    pub total_value: String,
}
