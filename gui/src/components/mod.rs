// GUI components module
pub mod decision_form;
pub mod numeric_input;

pub use decision_form::DecisionForm;
pub use numeric_input::NumericInput;
