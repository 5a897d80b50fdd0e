//! Calculator fields on the loan application page.

use super::input::{parse_amount, parse_term};
use crate::shared::number_format::format_plain_amount;
use crate::shared::platform::{Document, Element};
use contracts::usecases::u001_payment_calculator::{LoanTerms, PaymentSummary};

pub const PRINCIPAL_INPUT_ID: &str = "principal_amount";
pub const RATE_INPUT_ID: &str = "interest_rate";
pub const TERM_INPUT_ID: &str = "loan_term";
pub const MONTHLY_DISPLAY_ID: &str = "monthly_payment_display";
pub const TOTAL_DISPLAY_ID: &str = "total_payment_display";

fn field_value<D: Document>(document: &D, id: &str) -> String {
    document
        .element_by_id(id)
        .and_then(|e| e.value())
        .unwrap_or_default()
}

/// Missing or unreadable fields read as zero.
pub fn read_terms<D: Document>(document: &D) -> LoanTerms {
    LoanTerms::new(
        parse_amount(&field_value(document, PRINCIPAL_INPUT_ID)),
        parse_amount(&field_value(document, RATE_INPUT_ID)),
        parse_term(&field_value(document, TERM_INPUT_ID)),
    )
}

/// Recomputes the monthly and total payment displays.
///
/// Does nothing unless all three inputs are positive, so the last valid
/// result stays on screen while the user is still typing.
pub fn calculate_payment<D: Document>(document: &D, currency_symbol: &str) -> Option<PaymentSummary> {
    let summary = read_terms(document).summary()?;

    if let Some(display) = document.element_by_id(MONTHLY_DISPLAY_ID) {
        display.set_text_content(&format_plain_amount(currency_symbol, summary.monthly_payment));
    }
    if let Some(display) = document.element_by_id(TOTAL_DISPLAY_ID) {
        display.set_text_content(&format_plain_amount(currency_symbol, summary.total_payment));
    }
    Some(summary)
}
