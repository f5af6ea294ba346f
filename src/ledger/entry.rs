//! Statement rows for party ledgers

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::PartyKind;

/// The transaction that produced a ledger row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEntryKind {
    #[serde(rename = "Sales Invoice")]
    SalesInvoice,
    #[serde(rename = "Purchase Bill")]
    PurchaseBill,
    Receipt,
    Payment,
}

impl fmt::Display for LedgerEntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LedgerEntryKind::SalesInvoice => "Sales Invoice",
            LedgerEntryKind::PurchaseBill => "Purchase Bill",
            LedgerEntryKind::Receipt => "Receipt",
            LedgerEntryKind::Payment => "Payment",
        };
        f.write_str(label)
    }
}

/// One row of a party statement.
///
/// At most one of debit/credit is non-zero per source record, but both
/// fields are always present (zero when unused) so statement columns
/// render uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub ref_no: String,
    #[serde(rename = "type")]
    pub kind: LedgerEntryKind,
    pub description: String,
    pub debit: BigDecimal,
    pub credit: BigDecimal,
    /// Running balance after this row; sign interpretation depends on
    /// the party kind
    pub balance: BigDecimal,
}

/// Conventional Dr/Cr label for a signed balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceSide {
    /// "Dr" - receivable for a customer, advance paid for a supplier
    Debit,
    /// "Cr" - advance received for a customer, payable for a supplier
    Credit,
}

impl fmt::Display for BalanceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BalanceSide::Debit => "Dr",
            BalanceSide::Credit => "Cr",
        })
    }
}

/// Label a running balance for display.
///
/// A positive customer balance is receivable ("Dr"); a positive supplier
/// balance is payable ("Cr"). Negative balances flip to the advance side.
pub fn balance_side(kind: PartyKind, balance: &BigDecimal) -> BalanceSide {
    let negative = *balance < BigDecimal::from(0);
    match (kind, negative) {
        (PartyKind::Customer, false) => BalanceSide::Debit,
        (PartyKind::Customer, true) => BalanceSide::Credit,
        (PartyKind::Supplier, false) => BalanceSide::Credit,
        (PartyKind::Supplier, true) => BalanceSide::Debit,
    }
}
