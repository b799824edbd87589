// Handlers for FormatValue, ParseValue and SanitizeInput: the number handling of
// `shared::brazilian_format` exposed to clients that can't link the Rust crate.
use tonic::{Response, Status};

use super::helpers::parse_kind;
use crate::services::{
    format_request::Input, FormatRequest, FormatResponse, ParseRequest, ParseResponse, SanitizeRequest,
    SanitizeResponse,
};
use shared::brazilian_format::{self, SeparatorPolicy};
use shared::models::FormatInput;

pub fn handle_format_value(req_payload: FormatRequest) -> Result<Response<FormatResponse>, Status> {
    let kind = parse_kind(&req_payload.kind)?;
    let input = match req_payload.input {
        Some(Input::Number(number)) => FormatInput::Number(number),
        Some(Input::Text(text)) => FormatInput::Text(text),
        None => FormatInput::Empty,
    };
    Ok(Response::new(FormatResponse {
        display: brazilian_format::format(input, kind),
    }))
}

pub fn handle_parse_value(req_payload: ParseRequest) -> Result<Response<ParseResponse>, Status> {
    let parsed = brazilian_format::try_parse(&req_payload.text);
    Ok(Response::new(ParseResponse {
        value: parsed.unwrap_or(0.0),
        recognized: parsed.is_some(),
    }))
}

pub fn handle_sanitize_input(
    req_payload: SanitizeRequest,
    policy: &SeparatorPolicy,
) -> Result<Response<SanitizeResponse>, Status> {
    Ok(Response::new(SanitizeResponse {
        text: brazilian_format::sanitize_with(&req_payload.text, policy),
    }))
}
