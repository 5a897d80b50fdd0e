pub mod input;
pub mod page;
pub mod view;

pub use page::calculate_payment;
pub use view::{LoanCalculator, LOAN_CALCULATOR_ROOT_ID};
