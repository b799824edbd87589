// Global application state for the GUI
// Holds the canonical values of the decision form. Display strings live in each
// NumericInput; only the f64 values here would be submitted.

use serde::{Deserialize, Serialize};
use shared::brazilian_format;
use std::collections::BTreeMap;

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub current_theme: Theme,
    pub language: String, // e.g., "pt-BR"
    pub team: String,
    pub round: u32,

    // Canonical decision values keyed by field id
    pub values: BTreeMap<String, f64>,
    defaults: BTreeMap<String, f64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_theme: Theme::Light,
            language: "pt-BR".to_string(),
            team: String::new(),
            round: 1,
            values: BTreeMap::new(),
            defaults: BTreeMap::new(),
        }
    }
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let defaults: BTreeMap<String, f64> = config
            .decision_fields
            .iter()
            .map(|field| (field.id.clone(), field.default))
            .collect();
        Self {
            current_theme: Theme::from_name(&config.app.theme),
            language: config.app.language.clone(),
            team: config.app.team.clone(),
            round: config.app.round,
            values: defaults.clone(),
            defaults,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.current_theme = match self.current_theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    pub fn value(&self, field_id: &str) -> f64 {
        self.values.get(field_id).copied().unwrap_or(0.0)
    }

    pub fn set_value(&mut self, field_id: &str, value: f64) {
        tracing::debug!(field = field_id, value, "Decision value changed");
        self.values.insert(field_id.to_string(), value);
    }

    /// Puts every field back to its configured default.
    pub fn reset_values(&mut self) {
        tracing::info!(team = %self.team, round = self.round, "Resetting decision form");
        self.values = self.defaults.clone();
    }

    /// (label, formatted value) for each configured field, in config order.
    pub fn summary(&self, config: &AppConfig) -> Vec<(String, String)> {
        config
            .decision_fields
            .iter()
            .map(|field| {
                let value = self.value(&field.id);
                let display = match &field.unit {
                    Some(unit) => brazilian_format::format_with_unit(value, unit),
                    None => brazilian_format::format(value, field.kind),
                };
                (field.label.clone(), display)
            })
            .collect()
    }
}
