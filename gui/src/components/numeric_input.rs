// Text input for numbers in pt-BR format
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::brazilian_format::{self, SeparatorPolicy};
use shared::models::NumberKind;
use shared::numeric_field::NumericField;

// Formatted while unfocused ("R$ 1.234,50"), plain while editing ("1234,5").
// `value` is owned by the parent, `unit` may be empty; every keystroke reports the new canonical value through `onchange`.
#[component]
pub fn NumericInput(
    id: String,
    label: String,
    kind: NumberKind,
    value: f64,
    unit: String,
    policy: SeparatorPolicy,
    onchange: EventHandler<f64>,
) -> Element {
    let mut field = use_signal(|| NumericField::with_policy(kind, value, policy));

    let display = {
        let field = field.read();
        if field.is_focused() {
            field.display().to_string()
        } else {
            brazilian_format::format(value, kind)
        }
    };

    rsx! {
        div {
            class: "numeric-input",
            label { r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                r#type: "text",
                value: "{display}",
                onfocus: move |_| {
                    // The parent may have changed the value since the last edit
                    let mut field = field.write();
                    field.set_value(value);
                    field.focus();
                },
                oninput: move |evt: FormEvent| {
                    let canonical = field.write().input(&evt.value());
                    onchange.call(canonical);
                },
                onblur: move |_| field.write().blur(),
            }
            if !unit.is_empty() {
                span { class: "unit", "{unit}" }
            }
        }
    }
}
