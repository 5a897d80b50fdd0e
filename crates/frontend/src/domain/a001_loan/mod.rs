pub mod actions;

pub use actions::{run_loan_action, ActionOutcome};
