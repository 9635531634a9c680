//! Application state behind the Tauri commands.

use std::sync::{Mutex, MutexGuard};

use crate::config::DesktopConfig;
use crate::form::WarehouseForm;
use crate::types::{FormAction, FormFields, FormView};

/// One warehouse form shared by every command invocation.
#[derive(Debug)]
pub struct AppState {
    form: Mutex<WarehouseForm>,
}

impl AppState {
    pub fn new(config: &DesktopConfig) -> Self {
        Self {
            form: Mutex::new(WarehouseForm::new(config.currency.clone())),
        }
    }

    fn form(&self) -> Result<MutexGuard<'_, WarehouseForm>, String> {
        self.form
            .lock()
            .map_err(|_| "warehouse state is unavailable".to_string())
    }

    /// Load the typed fields and press one button.
    pub fn submit(&self, action: FormAction, fields: FormFields) -> Result<FormView, String> {
        let mut form = self.form()?;
        form.set_fields(fields);
        Ok(match action {
            FormAction::Add => form.add_product(),
            FormAction::List => form.list_products(),
            FormAction::Remove => form.remove_product(),
            FormAction::UpdateQuantity => form.update_quantity(),
        })
    }

    pub fn view(&self) -> Result<FormView, String> {
        Ok(self.form()?.view())
    }

    pub fn total_value(&self) -> Result<String, String> {
        Ok(self.form()?.total_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Notice, NoticeKind};

    fn state() -> AppState {
        AppState::new(&DesktopConfig {
            currency: "RUB".to_string(),
            ..DesktopConfig::default()
        })
    }

    #[test]
    fn submit_loads_fields_before_pressing_the_button() {
        let state = state();

        let view = state
            .submit(FormAction::Add, FormFields::new("Bolt", "10", "2.5"))
            .unwrap();

        assert_eq!(view.notice, Some(Notice::info("Product added.")));
        assert!(view.fields.is_empty());
        assert_eq!(view.total_value, "25.0 RUB");
    }

    #[test]
    fn every_action_reaches_the_shared_form() {
        let state = state();
        state
            .submit(FormAction::Add, FormFields::new("Bolt", "10", "2.5"))
            .unwrap();

        let view = state
            .submit(FormAction::UpdateQuantity, FormFields::new("Bolt", "-4", ""))
            .unwrap();
        assert_eq!(view.notice.unwrap().kind, NoticeKind::Info);

        let view = state
            .submit(FormAction::List, FormFields::new("Nut", "", ""))
            .unwrap();
        assert_eq!(
            view.output,
            "Bolt, quantity: 6, price: 2.5 RUB\nTotal value: 15.0 RUB"
        );
        assert_eq!(view.fields.name, "Nut");

        let view = state
            .submit(FormAction::Remove, FormFields::new("Bolt", "", ""))
            .unwrap();
        assert_eq!(view.notice, Some(Notice::info("Product 'Bolt' removed.")));

        assert_eq!(state.total_value().unwrap(), "0 RUB");
        assert_eq!(state.view().unwrap().output, view.output);
    }

    #[test]
    fn rejected_input_comes_back_as_an_error_notice() {
        let state = state();

        let view = state
            .submit(FormAction::Remove, FormFields::new("Ghost", "", ""))
            .unwrap();

        assert_eq!(view.notice, Some(Notice::error("Product 'Ghost' not found.")));
    }
}
