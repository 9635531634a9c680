//! `stockroom-desktop`
//!
//! **Responsibility:** the warehouse window.
//!
//! This crate provides:
//! - A toolkit-independent form controller (parse fields, call the warehouse,
//!   produce notices, clear inputs)
//! - Shared app state dispatching button presses to the controller
//! - Tauri commands wrapping that state (feature `tauri`)
//! - A Leptos frontend rendering the form (wasm32 only)

pub mod form;
pub mod types;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;

#[cfg(not(target_arch = "wasm32"))]
pub mod state;

#[cfg(feature = "tauri")]
pub mod commands;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use form::WarehouseForm;
pub use types::{FormAction, FormFields, FormView, Notice, NoticeKind};
