//! Leptos warehouse form.

use leptos::*;

use crate::frontend::api;
use crate::types::{FormAction, FormFields, FormView};

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let quantity = create_rw_signal(String::new());
    let price = create_rw_signal(String::new());
    let output = create_rw_signal(String::new());
    let total = create_rw_signal(String::new());
    let is_submitting = create_rw_signal(false);

    let render = move |view: FormView| {
        name.set(view.fields.name);
        quantity.set(view.fields.quantity);
        price.set(view.fields.price);
        output.set(view.output);
        total.set(view.total_value);
        if let Some(notice) = view.notice {
            alert(&format!("{}: {}", notice.title, notice.message));
        }
    };

    spawn_local(async move {
        match api::form_state().await {
            Ok(view) => render(view),
            Err(e) => alert(&format!("Failed to load warehouse: {}", e)),
        }
    });

    let run = move |action: FormAction| {
        if is_submitting.get_untracked() {
            return;
        }
        is_submitting.set(true);

        let fields = FormFields {
            name: name.get_untracked(),
            quantity: quantity.get_untracked(),
            price: price.get_untracked(),
        };

        spawn_local(async move {
            let result = match action {
                FormAction::Add => api::add_product(&fields).await,
                FormAction::List => api::list_products(&fields).await,
                FormAction::Remove => api::remove_product(&fields).await,
                FormAction::UpdateQuantity => api::update_quantity(&fields).await,
            };
            match result {
                Ok(view) => render(view),
                Err(e) => alert(&format!("Error: {}", e)),
            }
            is_submitting.set(false);
        });
    };

    view! {
        <div class="app">
            <main class="warehouse-form">
                <div class="form-group">
                    <label for="name">"Product name:"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="quantity">"Quantity:"</label>
                    <input
                        type="text"
                        id="quantity"
                        prop:value=move || quantity.get()
                        on:input=move |ev| quantity.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="price">"Price:"</label>
                    <input
                        type="text"
                        id="price"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-actions">
                    <button disabled=move || is_submitting.get() on:click=move |_| run(FormAction::Add)>
                        "Add product"
                    </button>
                    <button disabled=move || is_submitting.get() on:click=move |_| run(FormAction::List)>
                        "Show products"
                    </button>
                    <button disabled=move || is_submitting.get() on:click=move |_| run(FormAction::Remove)>
                        "Remove product"
                    </button>
                    <button
                        disabled=move || is_submitting.get()
                        on:click=move |_| run(FormAction::UpdateQuantity)
                    >
                        "Update quantity"
                    </button>
                </div>

                <textarea class="output" readonly=true rows="10" cols="50" prop:value=move || output.get()></textarea>
                <p class="total">"Total value: " {move || total.get()}</p>
            </main>
        </div>
    }
}
