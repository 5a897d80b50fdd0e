//! Approve / reject buttons on the loan pages.

use crate::shared::api_utils::ApiClient;
use crate::shared::platform::{HttpMethod, HttpTransport, WindowHost};
use contracts::domain::a001_loan::{LoanAction, LoanId};
use contracts::shared::api_response::ApiStatusResponse;

/// What happened after the officer clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The confirmation dialog was dismissed; nothing was sent.
    Declined,
    /// The server accepted the action and the page is reloading.
    Reloaded,
    /// The server answered 2xx without `success: true`; the page is left alone.
    NotApplied,
    /// The call failed; carries the alert text.
    Failed(String),
}

/// confirm → POST → reload on success, alert on failure.
///
/// The page reload is the only way new state reaches the screen.
pub async fn run_loan_action<T: HttpTransport, W: WindowHost>(
    client: &ApiClient<T>,
    window: &W,
    action: LoanAction,
    loan_id: LoanId,
) -> ActionOutcome {
    if !window.confirm(action.confirmation_prompt()) {
        return ActionOutcome::Declined;
    }

    match client
        .request(&action.endpoint(loan_id), HttpMethod::Post, None)
        .await
    {
        Ok(body) => {
            if ApiStatusResponse::from_value(&body).success {
                log::info!("loan {} {}d", loan_id, action.as_str());
                window.reload();
                ActionOutcome::Reloaded
            } else {
                ActionOutcome::NotApplied
            }
        }
        Err(e) => {
            let message = format!("{}: {}", action.failure_prefix(), e);
            window.alert(&message);
            ActionOutcome::Failed(message)
        }
    }
}
