//! Form controller: the window's behaviour without any toolkit.
//!
//! Each action reads the raw text fields, calls the warehouse, records a
//! notice for the shell to show, and (for add/remove/update) clears the fields
//! whatever the outcome. Listing only rewrites the output area.

use core::str::FromStr;

use rust_decimal::Decimal;
use stockroom_core::{DomainError, DomainResult};
use stockroom_inventory::Warehouse;

use crate::types::{FormFields, FormView, Notice};

const EMPTY_STOCK: &str = "No products in stock.";

/// Presentation state for a single warehouse window.
#[derive(Debug, Default)]
pub struct WarehouseForm {
    warehouse: Warehouse,
    fields: FormFields,
    output: String,
    notice: Option<Notice>,
    currency: String,
}

impl WarehouseForm {
    /// `currency` is appended to every price shown in the output area
    /// (empty for none).
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            ..Self::default()
        }
    }

    pub fn warehouse(&self) -> &Warehouse {
        &self.warehouse
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn set_fields(&mut self, fields: FormFields) {
        self.fields = fields;
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn view(&self) -> FormView {
        FormView {
            fields: self.fields.clone(),
            output: self.output.clone(),
            notice: self.notice.clone(),
            total_value: self.total_value(),
        }
    }

    /// "Add product" button.
    pub fn add_product(&mut self) -> FormView {
        let result = self.try_add();
        self.finish(result)
    }

    /// "Remove product" button.
    pub fn remove_product(&mut self) -> FormView {
        let result = self.try_remove();
        self.finish(result)
    }

    /// "Update quantity" button. The quantity field holds a signed delta.
    pub fn update_quantity(&mut self) -> FormView {
        let result = self.try_update();
        self.finish(result)
    }

    /// "List products" button. Leaves the input fields alone.
    pub fn list_products(&mut self) -> FormView {
        let suffix = self.currency_suffix();
        let mut lines = self.warehouse.list();
        if lines.is_empty() {
            lines.push(EMPTY_STOCK.to_string());
        } else {
            for line in &mut lines {
                line.push_str(&suffix);
            }
        }
        lines.push(format!("Total value: {}", self.total_value()));

        self.output = lines.join("\n");
        self.notice = None;
        tracing::debug!(products = self.warehouse.len(), "listed products");
        self.view()
    }

    /// Total stock value formatted for display.
    pub fn total_value(&self) -> String {
        match self.warehouse.total_value() {
            Ok(total) => format!("{}{}", total, self.currency_suffix()),
            Err(err) => describe(&err),
        }
    }

    fn try_add(&mut self) -> DomainResult<String> {
        let name = required_name(&self.fields.name)?;
        let quantity: i128 = parse_field(&self.fields.quantity, "quantity")?;
        let price: Decimal = parse_field(&self.fields.price, "price")?;
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        let quantity = u64::try_from(quantity)
            .map_err(|_| DomainError::validation("quantity is out of range"))?;
        if price <= Decimal::ZERO {
            return Err(DomainError::validation("price must be positive"));
        }

        self.warehouse.add(name, quantity, price)?;
        tracing::info!(name, quantity, %price, "product added");
        Ok("Product added.".to_string())
    }

    fn try_remove(&mut self) -> DomainResult<String> {
        let name = self.fields.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("enter a product name"));
        }

        self.warehouse.remove(name.as_str())?;
        tracing::info!(name = %name, "product removed");
        Ok(format!("Product '{name}' removed."))
    }

    fn try_update(&mut self) -> DomainResult<String> {
        let name = required_name(&self.fields.name)?.to_string();
        let delta: i64 = parse_field(&self.fields.quantity, "quantity")?;
        if delta == 0 {
            return Err(DomainError::validation("quantity change cannot be zero"));
        }

        self.warehouse.adjust_quantity(name.as_str(), delta)?;
        tracing::info!(name = %name, delta, "quantity updated");
        Ok(format!("Quantity of '{name}' updated."))
    }

    fn finish(&mut self, result: DomainResult<String>) -> FormView {
        self.notice = Some(match result {
            Ok(message) => Notice::info(message),
            Err(err) => {
                tracing::warn!(error = %err, "form action rejected");
                Notice::error(describe(&err))
            }
        });
        self.fields = FormFields::default();
        self.view()
    }

    fn currency_suffix(&self) -> String {
        if self.currency.is_empty() {
            String::new()
        } else {
            format!(" {}", self.currency)
        }
    }
}

fn required_name(raw: &str) -> DomainResult<&str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(name)
}

fn parse_field<T: FromStr>(raw: &str, field: &str) -> DomainResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::validation(format!("{field} must be a number")))
}

/// User-facing text for a domain error.
fn describe(err: &DomainError) -> String {
    match err {
        DomainError::Validation(msg) => format!("Invalid input: {msg}."),
        DomainError::DuplicateName(name) => format!("Product '{name}' already exists."),
        DomainError::NotFound(name) => format!("Product '{name}' not found."),
        DomainError::InsufficientStock { name, available, .. } => {
            format!("Not enough '{name}' in stock (available: {available}).")
        }
        DomainError::InvariantViolation(msg) => msg.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NoticeKind;
    use stockroom_core::AggregateRoot;

    fn submit(form: &mut WarehouseForm, name: &str, quantity: &str, price: &str) {
        form.set_fields(FormFields::new(name, quantity, price));
    }

    fn notice_of(view: &FormView) -> &Notice {
        view.notice.as_ref().expect("action always leaves a notice")
    }

    #[test]
    fn add_success_reports_info_and_clears_fields() {
        let mut form = WarehouseForm::default();
        submit(&mut form, "  Bolt ", "10", "2.5");

        let view = form.add_product();

        assert_eq!(notice_of(&view), &Notice::info("Product added."));
        assert!(view.fields.is_empty());
        assert_eq!(form.warehouse().get("Bolt").unwrap().quantity(), 10);
        assert_eq!(view.total_value, "25.0");
    }

    #[test]
    fn add_rejects_non_numeric_and_non_positive_input() {
        let cases = [
            ("Bolt", "ten", "2.5"),
            ("Bolt", "10", "cheap"),
            ("Bolt", "0", "2.5"),
            ("Bolt", "-3", "2.5"),
            ("Bolt", "10", "0"),
            ("", "10", "2.5"),
        ];

        for (name, quantity, price) in cases {
            let mut form = WarehouseForm::default();
            submit(&mut form, name, quantity, price);

            let view = form.add_product();

            let notice = notice_of(&view);
            assert_eq!(notice.kind, NoticeKind::Error, "{name}/{quantity}/{price}");
            assert!(notice.message.starts_with("Invalid input"));
            assert!(view.fields.is_empty());
            assert!(form.warehouse().is_empty());
        }
    }

    #[test]
    fn add_accepts_full_u64_quantity_and_reports_larger_as_out_of_range() {
        let mut form = WarehouseForm::default();
        submit(&mut form, "Grain", "18446744073709551615", "1");
        let view = form.add_product();
        assert_eq!(notice_of(&view), &Notice::info("Product added."));
        assert_eq!(form.warehouse().get("Grain").unwrap().quantity(), u64::MAX);

        submit(&mut form, "Sand", "18446744073709551616", "1");
        let view = form.add_product();
        assert_eq!(
            notice_of(&view),
            &Notice::error("Invalid input: quantity is out of range.")
        );
        assert!(form.warehouse().get("Sand").is_none());
    }

    #[test]
    fn add_beyond_decimal_range_is_refused_and_total_stays_exact() {
        let mut form = WarehouseForm::default();
        submit(&mut form, "Ingot", "1", "79228162514264337593543950335");
        form.add_product();

        submit(&mut form, "Bolt", "1", "1");
        let view = form.add_product();

        assert!(notice_of(&view).is_error());
        assert_eq!(view.total_value, "79228162514264337593543950335");
    }

    #[test]
    fn add_duplicate_shows_error_and_still_clears() {
        let mut form = WarehouseForm::default();
        submit(&mut form, "Bolt", "10", "2.5");
        form.add_product();
        submit(&mut form, "Bolt", "1", "1");

        let view = form.add_product();

        assert_eq!(
            notice_of(&view),
            &Notice::error("Product 'Bolt' already exists.")
        );
        assert!(view.fields.is_empty());
        assert_eq!(form.warehouse().len(), 1);
    }

    #[test]
    fn remove_requires_a_name() {
        let mut form = WarehouseForm::default();
        submit(&mut form, "   ", "5", "");

        let view = form.remove_product();

        assert!(notice_of(&view).is_error());
        assert!(view.fields.is_empty());
    }

    #[test]
    fn remove_missing_and_existing_products() {
        let mut form = WarehouseForm::default();
        submit(&mut form, "Bolt", "10", "2.5");
        form.add_product();

        submit(&mut form, "Nut", "", "");
        let view = form.remove_product();
        assert_eq!(notice_of(&view), &Notice::error("Product 'Nut' not found."));

        submit(&mut form, "Bolt", "", "");
        let view = form.remove_product();
        assert_eq!(notice_of(&view), &Notice::info("Product 'Bolt' removed."));
        assert!(form.warehouse().is_empty());
    }

    #[test]
    fn update_quantity_applies_signed_delta() {
        let mut form = WarehouseForm::default();
        submit(&mut form, "Bolt", "10", "2.5");
        form.add_product();

        submit(&mut form, "Bolt", "-12", "");
        let view = form.update_quantity();
        assert_eq!(
            notice_of(&view),
            &Notice::error("Not enough 'Bolt' in stock (available: 10).")
        );
        assert_eq!(form.warehouse().get("Bolt").unwrap().quantity(), 10);

        submit(&mut form, "Bolt", "-10", "");
        let view = form.update_quantity();
        assert_eq!(
            notice_of(&view),
            &Notice::info("Quantity of 'Bolt' updated.")
        );
        assert_eq!(form.warehouse().get("Bolt").unwrap().quantity(), 0);
        assert!(view.fields.is_empty());
    }

    #[test]
    fn update_quantity_rejects_zero_delta() {
        let mut form = WarehouseForm::default();
        submit(&mut form, "Bolt", "10", "2.5");
        form.add_product();
        submit(&mut form, "Bolt", "0", "");

        let view = form.update_quantity();

        assert!(notice_of(&view).is_error());
        assert_eq!(form.warehouse().version(), 1);
    }

    #[test]
    fn list_shows_lines_with_currency_and_total() {
        let mut form = WarehouseForm::new("RUB");
        submit(&mut form, "Bolt", "10", "2.5");
        form.add_product();
        submit(&mut form, "Nut", "4", "0.5");
        form.add_product();
        submit(&mut form, "Washer", "", "");

        let view = form.list_products();

        assert_eq!(
            view.output,
            "Bolt, quantity: 10, price: 2.5 RUB\nNut, quantity: 4, price: 0.5 RUB\nTotal value: 27.0 RUB"
        );
        assert_eq!(view.fields.name, "Washer");
        assert!(view.notice.is_none());
    }

    #[test]
    fn list_on_empty_warehouse_says_so() {
        let mut form = WarehouseForm::default();

        let view = form.list_products();

        assert_eq!(view.output, "No products in stock.\nTotal value: 0");
    }
}
