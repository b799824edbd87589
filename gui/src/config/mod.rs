// GUI configuration module
pub mod theme; // Colors for the dark and light themes

// Structure of assets/config/default.json
use serde::Deserialize;
use shared::brazilian_format::SeparatorPolicy;
use shared::models::NumberKind;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    #[serde(default)]
    pub number_format: SeparatorPolicy, // How ambiguous separators are read while typing
    pub decision_fields: Vec<DecisionFieldConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub theme: String, // "dark" or "light"
    pub language: String,
    pub team: String,
    pub round: u32,
}

/// One marketing-mix input of the decision form.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DecisionFieldConfig {
    pub id: String,
    pub label: String,
    pub kind: NumberKind,
    #[serde(default)]
    pub unit: Option<String>, // Shown next to quantities, e.g. "un", "kg"
    #[serde(default)]
    pub default: f64,
}

impl AppConfig {
    // The default config is embedded so the binary runs from any directory
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json"); // Path relative to this .rs file
        Self::from_json(config_str)
    }

    pub fn from_json(config_str: &str) -> Result<Self, anyhow::Error> {
        let config: AppConfig = serde_json::from_str(config_str)?;
        if let Some(duplicate) = config
            .decision_fields
            .iter()
            .enumerate()
            .find(|(i, field)| config.decision_fields[..*i].iter().any(|other| other.id == field.id))
            .map(|(_, field)| field.id.clone())
        {
            anyhow::bail!("Decision field '{}' is declared more than once", duplicate);
        }
        Ok(config)
    }
}
