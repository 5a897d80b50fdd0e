//! Fixed-rate amortization: monthly payment, totals and the month-by-month schedule.

pub mod amortization;

pub use amortization::{AmortizationRow, LoanTerms, PaymentSummary};
