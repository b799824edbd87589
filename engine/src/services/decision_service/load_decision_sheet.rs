// Handler for the LoadDecisionSheet RPC
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{Response, Status};

use crate::data::decision_sheet::DecisionSheetParser;
use crate::data::decision_store::DecisionStore;
use crate::error::EngineError;
use crate::services::{LoadSheetRequest, LoadSheetResponse};

pub async fn handle_load_decision_sheet(
    req_payload: LoadSheetRequest,
    decision_store: Arc<RwLock<DecisionStore>>,
) -> Result<Response<LoadSheetResponse>, Status> {
    if req_payload.file_path.trim().is_empty() {
        return Err(EngineError::InvalidArgument("Missing 'file_path'".to_string()).into());
    }

    // Parsing is blocking file I/O, keep it off the async workers
    let file_path = req_payload.file_path.clone();
    let team = req_payload.team.clone();
    let decisions = tokio::task::spawn_blocking(move || DecisionSheetParser::load_decisions_from_csv(&file_path, &team))
        .await
        .map_err(|e| EngineError::from(anyhow::anyhow!("Decision sheet task failed: {}", e)))??;

    let parsed = decisions.len();
    let mut store = decision_store.write().await;
    let accepted = store
        .add_decisions(decisions)
        .map_err(|e| EngineError::DecisionStoreError(e.to_string()))?;
    drop(store);

    tracing::info!(path = %req_payload.file_path, parsed, accepted, "Decision sheet loaded");
    Ok(Response::new(LoadSheetResponse {
        success: true,
        message: format!(
            "Loaded {} decisions from {} ({} superseded by newer ones)",
            accepted,
            req_payload.file_path,
            parsed - accepted
        ),
        decisions_loaded: accepted as i32,
    }))
}
