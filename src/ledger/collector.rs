//! Collecting one party's records from the store
//!
//! The collector narrows the full record snapshots down to a single
//! party before the statement is built. Statement building itself stays
//! synchronous and pure; only the snapshot fetch is async.

use crate::ledger::builder::build_ledger;
use crate::ledger::entry::LedgerEntry;
use crate::traits::RecordStore;
use crate::types::{KhataError, KhataResult, PartyKind, PurchaseBill, SalesInvoice, Voucher};

/// The records that feed one party's statement
#[derive(Debug, Clone, Default)]
pub struct PartyRecords {
    pub sales: Vec<SalesInvoice>,
    pub purchases: Vec<PurchaseBill>,
    pub vouchers: Vec<Voucher>,
}

/// Filter the store's record sets down to one party.
///
/// Customers contribute sales invoices, suppliers contribute purchase
/// bills; vouchers are matched for either kind.
pub async fn collect_party_records<S: RecordStore + ?Sized>(
    store: &S,
    party_id: &str,
    kind: PartyKind,
) -> KhataResult<PartyRecords> {
    let sales = match kind {
        PartyKind::Customer => store
            .sales_invoices()
            .await?
            .into_iter()
            .filter(|invoice| invoice.customer_id == party_id)
            .collect(),
        PartyKind::Supplier => Vec::new(),
    };
    let purchases = match kind {
        PartyKind::Supplier => store
            .purchase_bills()
            .await?
            .into_iter()
            .filter(|bill| bill.supplier_id == party_id)
            .collect(),
        PartyKind::Customer => Vec::new(),
    };
    let vouchers = store
        .vouchers()
        .await?
        .into_iter()
        .filter(|voucher| voucher.party_id == party_id)
        .collect();

    Ok(PartyRecords {
        sales,
        purchases,
        vouchers,
    })
}

/// Fetch one party's records and build its statement in one call
pub async fn party_ledger<S: RecordStore + ?Sized>(
    store: &S,
    party_id: &str,
    kind: PartyKind,
) -> KhataResult<Vec<LedgerEntry>> {
    let records = collect_party_records(store, party_id, kind).await?;
    Ok(build_ledger(
        party_id,
        kind,
        &records.sales,
        &records.purchases,
        &records.vouchers,
    ))
}

/// Resolve a party's display name, failing with `UnknownParty` when no
/// master record matches.
///
/// An unknown party still gets an empty statement from `party_ledger`;
/// this lookup is for callers that want to warn about the party itself.
pub async fn party_display_name<S: RecordStore + ?Sized>(
    store: &S,
    party_id: &str,
    kind: PartyKind,
) -> KhataResult<String> {
    let name = match kind {
        PartyKind::Customer => store.get_customer(party_id).await?.map(|c| c.name),
        PartyKind::Supplier => store.get_supplier(party_id).await?.map(|s| s.name),
    };
    name.ok_or_else(|| KhataError::UnknownParty(party_id.to_string()))
}
