// Decision sheets in and decisions at rest
pub mod decision_sheet;
pub mod decision_store;
