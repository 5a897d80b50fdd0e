//! Loan identity and the two review actions an officer can take on a loan.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Numeric loan id as issued by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoanId(pub u64);

impl LoanId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid loan id: {0:?}")]
pub struct ParseLoanIdError(pub String);

impl FromStr for LoanId {
    type Err = ParseLoanIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(LoanId)
            .map_err(|_| ParseLoanIdError(s.to_string()))
    }
}

/// Review action on a pending loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanAction {
    Approve,
    Reject,
}

impl LoanAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanAction::Approve => "approve",
            LoanAction::Reject => "reject",
        }
    }

    /// `POST` target for this action.
    pub fn endpoint(&self, loan_id: LoanId) -> String {
        format!("/api/loan/{}/{}", loan_id, self.as_str())
    }

    pub fn confirmation_prompt(&self) -> &'static str {
        match self {
            LoanAction::Approve => "Are you sure you want to approve this loan?",
            LoanAction::Reject => "Are you sure you want to reject this loan?",
        }
    }

    /// Prefix of the alert shown when the action fails.
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            LoanAction::Approve => "Error approving loan",
            LoanAction::Reject => "Error rejecting loan",
        }
    }
}
