// Engine main entry point
use engine::config::settings::EngineSettings;
use engine::data::decision_store::DecisionStore;
use engine::services::decision_service::MyDecisionEngine;
use engine::services::DecisionEngineServer;
use std::net::ToSocketAddrs;
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::transport::Server;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    info!("Starting Simulador de Marketing decision engine...");

    let settings = EngineSettings::load()?;
    let addr = settings
        .listen_address()
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| format!("Could not resolve {}", settings.listen_address()))?;
    info!("Engine will listen on {}", addr);

    let decision_store = Arc::new(RwLock::new(DecisionStore::new()));
    let decision_engine_service = MyDecisionEngine::new(decision_store.clone(), settings.number_format);

    Server::builder()
        .add_service(DecisionEngineServer::new(decision_engine_service))
        .serve(addr)
        .await?;

    Ok(())
}
