// Main module of the DecisionEngine service: the service struct, the trait impl
// that dispatches to one handler module per RPC, and their shared helpers.
use super::{
    DecisionEngine, DecisionsRequest, DecisionsResponse, FormatRequest, FormatResponse, LoadSheetRequest,
    LoadSheetResponse, ParseRequest, ParseResponse, SanitizeRequest, SanitizeResponse,
};
use crate::data::decision_store::DecisionStore;
use shared::brazilian_format::SeparatorPolicy;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};

pub mod get_decisions;
pub mod helpers;
pub mod load_decision_sheet;
pub mod normalize;

pub struct MyDecisionEngine {
    decision_store: Arc<RwLock<DecisionStore>>,
    number_format: SeparatorPolicy,
}

impl MyDecisionEngine {
    pub fn new(decision_store: Arc<RwLock<DecisionStore>>, number_format: SeparatorPolicy) -> Self {
        MyDecisionEngine {
            decision_store,
            number_format,
        }
    }
}

#[tonic::async_trait]
impl DecisionEngine for MyDecisionEngine {
    async fn load_decision_sheet(
        &self,
        request: Request<LoadSheetRequest>,
    ) -> Result<Response<LoadSheetResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            team = %req_payload.team,
            path = %req_payload.file_path,
            "Received LoadDecisionSheetRequest, dispatching to handler."
        );
        load_decision_sheet::handle_load_decision_sheet(req_payload, self.decision_store.clone()).await
    }

    type GetDecisionsStream = ReceiverStream<Result<DecisionsResponse, Status>>;
    async fn get_decisions(
        &self,
        request: Request<DecisionsRequest>,
    ) -> Result<Response<Self::GetDecisionsStream>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            team = %req_payload.team,
            round = ?req_payload.round,
            "Received GetDecisionsRequest, dispatching to handler."
        );
        get_decisions::handle_get_decisions(req_payload, self.decision_store.clone()).await
    }

    async fn format_value(&self, request: Request<FormatRequest>) -> Result<Response<FormatResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::debug!(kind = %req_payload.kind, input = ?req_payload.input, "Received FormatValueRequest.");
        normalize::handle_format_value(req_payload)
    }

    async fn parse_value(&self, request: Request<ParseRequest>) -> Result<Response<ParseResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::debug!(text = %req_payload.text, "Received ParseValueRequest.");
        normalize::handle_parse_value(req_payload)
    }

    async fn sanitize_input(&self, request: Request<SanitizeRequest>) -> Result<Response<SanitizeResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::debug!(text = %req_payload.text, "Received SanitizeInputRequest.");
        normalize::handle_sanitize_input(req_payload, &self.number_format)
    }
}
