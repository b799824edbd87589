// Engine library root
// Decision sheets, the in-memory decision store and the DecisionEngine gRPC service.

pub mod config;
pub mod data;
pub mod error;
pub mod services;

// The build script generates the protobuf code into OUT_DIR, which services/mod.rs includes.
