use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a numeric value stands for. Drives decimals and affixes when formatting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    /// Reais, shown as `R$ 1.234,56`
    Currency,
    /// Plain amounts (units, points), shown as `1.234`
    #[default]
    Quantity,
    /// Shown as `12,5%`
    Percentage,
}

impl NumberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberKind::Currency => "currency",
            NumberKind::Quantity => "quantity",
            NumberKind::Percentage => "percentage",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNumberKind(pub String);

impl fmt::Display for UnknownNumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown number kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownNumberKind {}

// Decision sheets are filled in by students, so the Portuguese names are accepted too.
impl FromStr for NumberKind {
    type Err = UnknownNumberKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "currency" | "moeda" | "r$" => Ok(NumberKind::Currency),
            "quantity" | "quantidade" | "qtd" => Ok(NumberKind::Quantity),
            "percentage" | "percentual" | "%" => Ok(NumberKind::Percentage),
            _ => Err(UnknownNumberKind(s.to_string())),
        }
    }
}

/// Argument accepted by the formatter: a number, some text typed or stored somewhere, or nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormatInput {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl From<f64> for FormatInput {
    fn from(value: f64) -> Self {
        FormatInput::Number(value)
    }
}

impl From<i64> for FormatInput {
    fn from(value: i64) -> Self {
        FormatInput::Number(value as f64)
    }
}

impl From<Option<f64>> for FormatInput {
    fn from(value: Option<f64>) -> Self {
        value.map_or(FormatInput::Empty, FormatInput::Number)
    }
}

impl From<&str> for FormatInput {
    fn from(value: &str) -> Self {
        FormatInput::Text(value.to_string())
    }
}

impl From<String> for FormatInput {
    fn from(value: String) -> Self {
        FormatInput::Text(value)
    }
}

/// One marketing-mix decision submitted by a team for a round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Decision {
    pub team: String,
    pub round: u32,
    /// Decision field, e.g. `preco`, `producao`, `verba_publicidade`
    pub field: String,
    pub kind: NumberKind,
    /// Canonical value, the only thing the simulation consumes
    pub value: f64,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_kind_from_portuguese_names() {
        assert_eq!("moeda".parse::<NumberKind>().unwrap(), NumberKind::Currency);
        assert_eq!(" Quantidade ".parse::<NumberKind>().unwrap(), NumberKind::Quantity);
        assert_eq!("%".parse::<NumberKind>().unwrap(), NumberKind::Percentage);
        assert_eq!("percentage".parse::<NumberKind>().unwrap(), NumberKind::Percentage);
    }

    #[test]
    fn test_number_kind_unknown() {
        let err = "litros".parse::<NumberKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown number kind 'litros'");
    }

    #[test]
    fn test_number_kind_serde_names() {
        let kind: NumberKind = serde_json::from_str("\"currency\"").unwrap();
        assert_eq!(kind, NumberKind::Currency);
        assert_eq!(serde_json::to_string(&NumberKind::Percentage).unwrap(), "\"percentage\"");
    }

    #[test]
    fn test_format_input_conversions() {
        assert_eq!(FormatInput::from(None), FormatInput::Empty);
        assert_eq!(FormatInput::from(Some(2.5)), FormatInput::Number(2.5));
        assert_eq!(FormatInput::from(3_i64), FormatInput::Number(3.0));
        assert_eq!(FormatInput::from("1,5"), FormatInput::Text("1,5".to_string()));
    }
}
