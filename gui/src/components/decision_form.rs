// Marketing-mix decisions of the current round
#![allow(non_snake_case)]
use dioxus::prelude::*;

use super::NumericInput;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

#[component]
pub fn DecisionForm() -> Element {
    let config = use_context::<AppConfig>();
    let mut app_state = use_context::<Signal<AppState>>();

    let (team, round) = {
        let state = app_state.read();
        (state.team.clone(), state.round)
    };
    let summary = app_state.read().summary(&config);
    let policy = config.number_format;

    rsx! {
        section {
            class: "decision-form",
            h2 { "Decisões de {team} · Rodada {round}" }
            {config.decision_fields.iter().map(|field| {
                let field_id = field.id.clone();
                rsx! {
                    NumericInput {
                        key: "{field.id}",
                        id: field.id.clone(),
                        label: field.label.clone(),
                        kind: field.kind,
                        value: app_state.read().value(&field.id),
                        unit: field.unit.clone().unwrap_or_default(),
                        policy: policy,
                        onchange: move |value: f64| app_state.write().set_value(&field_id, value),
                    }
                }
            })}
            button {
                onclick: move |_| app_state.write().reset_values(),
                "Restaurar valores padrão"
            }
            table {
                class: "decision-summary",
                for (label, display) in summary {
                    tr {
                        td { "{label}" }
                        td { "{display}" }
                    }
                }
            }
        }
    }
}
