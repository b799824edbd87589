#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::DecisionForm;
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let mut app_state = use_context_provider(|| Signal::new(AppState::from_config(&config)));

    let palette = ThemePalette::for_theme(&app_state.read().current_theme);
    let title = config.app.title.clone();
    let language = app_state.read().language.clone();

    rsx! {
        div {
            style: "background-color: {palette.background}; color: {palette.foreground}; min-height: 100vh; padding: 16px; font-family: sans-serif;",
            header {
                style: "display: flex; justify-content: space-between; border-bottom: 2px solid {palette.accent};",
                h1 { style: "color: {palette.primary};", "{title}" }
                button {
                    style: "background-color: {palette.input_background}; color: {palette.foreground}; border: 1px solid {palette.input_border};",
                    onclick: move |_| app_state.write().toggle_theme(),
                    "Alternar tema"
                }
            }
            DecisionForm {}
            footer {
                style: "color: {palette.secondary}; font-size: 12px; margin-top: 24px;",
                "Idioma: {language} · configuração {config.version}"
            }
        }
    }
}
