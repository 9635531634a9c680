//! Tauri commands for frontend integration.
//!
//! Every command takes the raw form fields, presses one button on the shared
//! [`AppState`] and returns the resulting view. Domain errors never surface
//! here; they arrive as error notices inside the view.

use anyhow::Context;
use tauri::{Manager, State};

use crate::config::DesktopConfig;
use crate::state::AppState;
use crate::types::{FormAction, FormFields, FormView};

#[tauri::command]
pub fn add_product(fields: FormFields, state: State<'_, AppState>) -> Result<FormView, String> {
    state.submit(FormAction::Add, fields)
}

#[tauri::command]
pub fn remove_product(fields: FormFields, state: State<'_, AppState>) -> Result<FormView, String> {
    state.submit(FormAction::Remove, fields)
}

#[tauri::command]
pub fn update_quantity(fields: FormFields, state: State<'_, AppState>) -> Result<FormView, String> {
    state.submit(FormAction::UpdateQuantity, fields)
}

/// Fill the output area with every product and the stock total.
#[tauri::command]
pub fn list_products(fields: FormFields, state: State<'_, AppState>) -> Result<FormView, String> {
    state.submit(FormAction::List, fields)
}

#[tauri::command]
pub fn total_value(state: State<'_, AppState>) -> Result<String, String> {
    state.total_value()
}

/// Current view, used by the frontend on first render.
#[tauri::command]
pub fn form_state(state: State<'_, AppState>) -> Result<FormView, String> {
    state.view()
}

/// Build the window and block until it is closed.
pub fn run(config: DesktopConfig) -> anyhow::Result<()> {
    let title = config.title.clone();

    tauri::Builder::default()
        .manage(AppState::new(&config))
        .invoke_handler(tauri::generate_handler![
            add_product,
            remove_product,
            update_quantity,
            list_products,
            total_value,
            form_state,
        ])
        .setup(move |app| {
            if let Some(window) = app.get_webview_window("main") {
                window.set_title(&title)?;
            }
            Ok(())
        })
        .run(tauri::generate_context!())
        .context("error while running tauri application")
}
