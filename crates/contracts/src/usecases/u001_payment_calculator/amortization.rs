use serde::{Deserialize, Serialize};

/// Inputs of the payment calculator as typed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    /// Annual rate in percent, e.g. `10.5`.
    pub annual_rate: f64,
    pub term_months: u32,
}

/// Result of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// One month of the repayment schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub balance: f64,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate: f64, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate,
            term_months,
        }
    }

    /// Only strictly positive inputs produce a result.
    pub fn is_computable(&self) -> bool {
        self.principal > 0.0 && self.annual_rate > 0.0 && self.term_months > 0
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 100.0 / 12.0
    }

    /// `P * r / (1 - (1+r)^-n)`, the usual annuity formula divided through by `(1+r)^n`.
    ///
    /// Terms long enough to overflow `(1+r)^n` tend to the interest-only payment `P * r`.
    /// When `r` is too small to move `(1+r)^-n` off 1.0 the denominator is zero;
    /// the payment then degenerates to straight-line repayment `P / n`.
    pub fn monthly_payment(&self) -> f64 {
        let rate = self.monthly_rate();
        let months = f64::from(self.term_months);
        let denominator = 1.0 - (1.0 + rate).powf(-months);
        if denominator == 0.0 {
            return self.principal / months;
        }
        self.principal * rate / denominator
    }

    pub fn summary(&self) -> Option<PaymentSummary> {
        if !self.is_computable() {
            return None;
        }
        let monthly_payment = self.monthly_payment();
        let total_payment = monthly_payment * self.term_months as f64;
        Some(PaymentSummary {
            monthly_payment,
            total_payment,
            total_interest: total_payment - self.principal,
        })
    }

    /// Like [`schedule`](Self::schedule), but `None` when the term runs past `max_months`,
    /// so a stray keystroke cannot allocate millions of rows.
    pub fn schedule_within(&self, max_months: u32) -> Option<Vec<AmortizationRow>> {
        (self.term_months <= max_months).then(|| self.schedule())
    }

    /// Month-by-month split of each payment into interest and principal.
    /// Empty when the terms are not computable.
    pub fn schedule(&self) -> Vec<AmortizationRow> {
        if !self.is_computable() {
            return Vec::new();
        }

        let rate = self.monthly_rate();
        let payment = self.monthly_payment();
        let mut balance = self.principal;

        (1..=self.term_months)
            .map(|month| {
                let interest = balance * rate;
                let principal = payment - interest;
                balance -= principal;
                AmortizationRow {
                    month,
                    payment,
                    principal,
                    interest,
                    balance: balance.max(0.0),
                }
            })
            .collect()
    }
}
