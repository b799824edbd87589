// gRPC surface of the engine. Code generated from proto/decisions.proto lives in `generated`.
pub mod generated {
    tonic::include_proto!("simulador.decisions");
}

pub mod decision_service;

pub use generated::decision_engine_server::{DecisionEngine, DecisionEngineServer};
pub use generated::{
    format_request, Decision as ProtoDecision, DecisionsRequest, DecisionsResponse, FormatRequest, FormatResponse,
    LoadSheetRequest, LoadSheetResponse, ParseRequest, ParseResponse, SanitizeRequest, SanitizeResponse,
};
