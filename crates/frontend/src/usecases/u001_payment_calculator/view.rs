use super::input::{parse_amount, parse_term};
use crate::config;
use crate::shared::number_format::format_currency;
use contracts::usecases::u001_payment_calculator::{AmortizationRow, LoanTerms, PaymentSummary};
use leptos::prelude::*;

/// Placeholder the interactive calculator is mounted into.
pub const LOAN_CALCULATOR_ROOT_ID: &str = "loan-calculator-app";

/// Standalone calculator with the repayment schedule, recomputed on every keystroke.
#[component]
pub fn LoanCalculator() -> impl IntoView {
    let principal = RwSignal::new(String::new());
    let rate = RwSignal::new(String::new());
    let term = RwSignal::new(String::new());
    let config = config::current();
    let symbol = StoredValue::new(config.currency_symbol);
    let max_months = config.max_schedule_months;

    let terms = Memo::new(move |_| {
        LoanTerms::new(
            parse_amount(&principal.get()),
            parse_amount(&rate.get()),
            parse_term(&term.get()),
        )
    });
    let summary = Memo::new(move |_| terms.get().summary());
    let schedule = Memo::new(move |_| terms.get().schedule_within(max_months));
    let money = move |value: f64| symbol.with_value(|s| format_currency(s, value));

    let summary_text = move |pick: fn(&PaymentSummary) -> f64| {
        move || summary.get().map(|s| money(pick(&s))).unwrap_or_else(|| "-".to_string())
    };

    view! {
        <div class="card loan-calculator">
            <div class="card-body">
                <h5 class="card-title">"Loan Calculator"</h5>
                <div class="row g-3">
                    <div class="col-md-4">
                        <label class="form-label" for="calc-principal">"Loan amount"</label>
                        <input
                            id="calc-principal"
                            class="form-control"
                            type="number"
                            min="0"
                            prop:value=move || principal.get()
                            on:input=move |ev| principal.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="col-md-4">
                        <label class="form-label" for="calc-rate">"Interest rate (% per year)"</label>
                        <input
                            id="calc-rate"
                            class="form-control"
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || rate.get()
                            on:input=move |ev| rate.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="col-md-4">
                        <label class="form-label" for="calc-term">"Term (months)"</label>
                        <input
                            id="calc-term"
                            class="form-control"
                            type="number"
                            min="1"
                            prop:value=move || term.get()
                            on:input=move |ev| term.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <dl class="row mt-3 mb-0">
                    <dt class="col-sm-4">"Monthly payment"</dt>
                    <dd class="col-sm-8">{summary_text(|s| s.monthly_payment)}</dd>
                    <dt class="col-sm-4">"Total payment"</dt>
                    <dd class="col-sm-8">{summary_text(|s| s.total_payment)}</dd>
                    <dt class="col-sm-4">"Total interest"</dt>
                    <dd class="col-sm-8">{summary_text(|s| s.total_interest)}</dd>
                </dl>

                <Show
                    when=move || summary.get().is_some()
                    fallback=|| view! {
                        <p class="text-muted mt-3 mb-0">
                            "Enter amount, rate and term to see the repayment schedule."
                        </p>
                    }
                >
                    <Show
                        when=move || schedule.with(Option::is_some)
                        fallback=move || view! {
                            <p class="text-muted mt-3 mb-0">
                                {format!("The repayment schedule is shown for terms up to {} months.", max_months)}
                            </p>
                        }
                    >
                        <div class="table-responsive mt-3">
                            <table class="table table-sm table-striped">
                                <thead>
                                    <tr>
                                        <th>"Month"</th>
                                        <th>"Payment"</th>
                                        <th>"Principal"</th>
                                        <th>"Interest"</th>
                                        <th>"Balance"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || schedule.get().unwrap_or_default()
                                        key=|row: &AmortizationRow| (row.month, row.payment.to_bits(), row.balance.to_bits())
                                        children=move |row: AmortizationRow| view! {
                                            <tr>
                                                <td>{row.month}</td>
                                                <td>{money(row.payment)}</td>
                                                <td>{money(row.principal)}</td>
                                                <td>{money(row.interest)}</td>
                                                <td>{money(row.balance)}</td>
                                            </tr>
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
