// Conversions between domain decisions and their gRPC counterparts
use crate::error::EngineError;
use crate::services::ProtoDecision;
use shared::brazilian_format;
use shared::models::{Decision, NumberKind};

pub fn to_proto_decision(decision: &Decision) -> ProtoDecision {
    ProtoDecision {
        team: decision.team.clone(),
        round: decision.round,
        field: decision.field.clone(),
        kind: decision.kind.as_str().to_string(),
        value: decision.value,
        display: brazilian_format::format(decision.value, decision.kind),
        submitted_at: decision.submitted_at.timestamp_millis(),
    }
}

/// Number kind named in a request; empty means quantity.
pub fn parse_kind(kind: &str) -> Result<NumberKind, EngineError> {
    if kind.trim().is_empty() {
        return Ok(NumberKind::default());
    }
    kind.parse::<NumberKind>()
        .map_err(|e| EngineError::InvalidArgument(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::decision_sheet::brazilian_datetime::parse_datetime;

    #[test]
    fn test_to_proto_decision_carries_display_string() {
        let decision = Decision {
            team: "Azul".to_string(),
            round: 2,
            field: "preco".to_string(),
            kind: NumberKind::Currency,
            value: 1234.5,
            submitted_at: parse_datetime("01/01/2025", "00:00:00").unwrap(),
        };
        let proto = to_proto_decision(&decision);
        assert_eq!(proto.kind, "currency");
        assert_eq!(proto.display, "R$ 1.234,50");
        assert_eq!(proto.submitted_at, 1_735_689_600_000);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("").unwrap(), NumberKind::Quantity);
        assert_eq!(parse_kind("moeda").unwrap(), NumberKind::Currency);
        assert!(matches!(parse_kind("litros"), Err(EngineError::InvalidArgument(_))));
    }
}
