// Theme specific configurations (colors)
use serde::{Deserialize, Serialize};

use crate::state::app_state::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub input_background: String,
    pub input_border: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            primary: "#007acc".to_string(),
            secondary: "#565656".to_string(),
            accent: "#26a69a".to_string(),
            input_background: "#2a2a2a".to_string(),
            input_border: "#565656".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#000000".to_string(),
            primary: "#007acc".to_string(),
            secondary: "#e0e0e0".to_string(),
            accent: "#009688".to_string(),
            input_background: "#fafafa".to_string(),
            input_border: "#bdbdbd".to_string(),
        }
    }

    pub fn for_theme(theme: &Theme) -> Self {
        match theme {
            Theme::Dark => Self::default_dark(),
            Theme::Light => Self::default_light(),
        }
    }
}
