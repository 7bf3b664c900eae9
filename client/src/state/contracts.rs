//! Contract list state and dashboard aggregation.
//!
//! DESIGN
//! ======
//! Totals are grouped per currency; amounts in different currencies are
//! never summed together.

#[cfg(test)]
#[path = "contracts_test.rs"]
mod contracts_test;

use std::collections::BTreeMap;

use crate::net::types::{ContractStatus, ContractSummary};

/// Contract inventory shared by the dashboard and the contracts page.
#[derive(Clone, Debug, Default)]
pub struct ContractsState {
    pub items: Vec<ContractSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Per-status counts and per-currency money totals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractTotals {
    pub drafts: usize,
    pub awaiting_signature: usize,
    pub awaiting_payment: usize,
    pub paid: usize,
    /// Sent + signed amounts, keyed by currency.
    pub outstanding: BTreeMap<String, i64>,
    /// Paid amounts, keyed by currency.
    pub collected: BTreeMap<String, i64>,
}

/// Aggregate a contract list for the dashboard. Void contracts are ignored.
#[must_use]
pub fn summarize(contracts: &[ContractSummary]) -> ContractTotals {
    let mut totals = ContractTotals::default();
    for contract in contracts {
        match contract.status {
            ContractStatus::Draft => totals.drafts += 1,
            ContractStatus::Sent => totals.awaiting_signature += 1,
            ContractStatus::Signed => totals.awaiting_payment += 1,
            ContractStatus::Paid => totals.paid += 1,
            ContractStatus::Void => continue,
        }
        if contract.status.is_outstanding() {
            let sum = totals.outstanding.entry(contract.currency.clone()).or_default();
            *sum = sum.saturating_add(contract.amount_cents);
        } else if contract.status == ContractStatus::Paid {
            let sum = totals.collected.entry(contract.currency.clone()).or_default();
            *sum = sum.saturating_add(contract.amount_cents);
        }
    }
    totals
}

/// Contracts filtered to one status, newest list order preserved.
#[must_use]
pub fn with_status(contracts: &[ContractSummary], status: ContractStatus) -> Vec<ContractSummary> {
    contracts.iter().filter(|c| c.status == status).cloned().collect()
}
