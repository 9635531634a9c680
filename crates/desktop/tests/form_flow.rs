//! Black-box walk through the warehouse window's buttons.

use stockroom_desktop::{FormFields, NoticeKind, WarehouseForm};

fn press(form: &mut WarehouseForm, name: &str, quantity: &str, price: &str) -> NoticeKind {
    form.set_fields(FormFields::new(name, quantity, price));
    let view = form.add_product();
    view.notice.expect("add always leaves a notice").kind
}

#[test]
fn stocking_session_end_to_end() {
    let mut form = WarehouseForm::new("RUB");

    assert_eq!(press(&mut form, "Bolt", "10", "2.5"), NoticeKind::Info);
    assert_eq!(press(&mut form, "Nut", "100", "0.1"), NoticeKind::Info);
    assert_eq!(press(&mut form, "Bolt", "5", "3"), NoticeKind::Error);

    form.set_fields(FormFields::new("Nut", "-40", ""));
    let view = form.update_quantity();
    assert_eq!(view.notice.unwrap().kind, NoticeKind::Info);

    form.set_fields(FormFields::new("Bolt", "", ""));
    let view = form.remove_product();
    assert_eq!(view.notice.unwrap().message, "Product 'Bolt' removed.");
    assert_eq!(view.fields, FormFields::default());

    let view = form.list_products();
    assert_eq!(
        view.output,
        "Nut, quantity: 60, price: 0.1 RUB\nTotal value: 6.0 RUB"
    );
    assert_eq!(form.total_value(), "6.0 RUB");
}

#[test]
fn mistakes_never_change_stock() {
    let mut form = WarehouseForm::default();
    press(&mut form, "Bolt", "10", "2.5");

    for (name, quantity) in [("Bolt", "-11"), ("Bolt", "abc"), ("Screw", "1"), ("", "1")] {
        form.set_fields(FormFields::new(name, quantity, ""));
        let view = form.update_quantity();
        assert_eq!(view.notice.unwrap().kind, NoticeKind::Error);
        assert!(view.fields.is_empty());
    }

    assert_eq!(form.warehouse().get("Bolt").unwrap().quantity(), 10);
    assert_eq!(form.warehouse().total_value().unwrap().to_string(), "25.0");
}
