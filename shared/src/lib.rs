pub mod brazilian_format;
pub mod models;
pub mod numeric_field;

// Shared between the engine (decision sheets, RPC) and the GUI (numeric inputs).
// Nothing in here does I/O.
