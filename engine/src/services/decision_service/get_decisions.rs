// Handler for the GetDecisions RPC
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::RwLock;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Response, Status};

use super::helpers::to_proto_decision;
use crate::data::decision_store::DecisionStore;
use crate::services::{DecisionsRequest, DecisionsResponse, ProtoDecision};

pub async fn handle_get_decisions(
    req_payload: DecisionsRequest,
    decision_store: Arc<RwLock<DecisionStore>>,
) -> Result<Response<ReceiverStream<Result<DecisionsResponse, Status>>>, Status> {
    tracing::debug!(team = %req_payload.team, round = ?req_payload.round, "Handling GetDecisionsRequest in dedicated handler");

    // Collect everything under the read lock, then stream without holding it
    let store = decision_store.read().await;
    let rounds = match req_payload.round {
        Some(round) => vec![round],
        None => store.rounds(&req_payload.team),
    };
    let batches: Vec<(u32, Vec<ProtoDecision>)> = rounds
        .into_iter()
        .filter_map(|round| {
            store
                .get_decisions(&req_payload.team, round)
                .map(|decisions| (round, decisions.iter().map(to_proto_decision).collect()))
        })
        .collect();
    drop(store);

    if batches.is_empty() {
        tracing::warn!(team = %req_payload.team, round = ?req_payload.round, "No decisions found (handler).");
        let message = match req_payload.round {
            Some(round) => format!("No decisions found for team '{}' in round {}", req_payload.team, round),
            None => format!("No decisions found for team '{}'", req_payload.team),
        };
        return Err(Status::not_found(message));
    }

    let (tx, rx) = mpsc::channel(4);
    let team = req_payload.team;

    tokio::spawn(async move {
        for (round, decisions) in batches {
            tracing::debug!(team = %team, round, count = decisions.len(), "Streaming decisions (handler).");
            let response = DecisionsResponse {
                team: team.clone(),
                round,
                decisions,
            };
            if let Err(e) = tx.send(Ok(response)).await {
                tracing::error!(error = ?e, team = %team, "Failed to send decisions to stream (handler)");
                return;
            }
        }
    });

    Ok(Response::new(ReceiverStream::new(rx)))
}
