//! Building a chronological running-balance statement for one party
//!
//! Sales invoices, purchase bills, and vouchers have different field
//! sets; each is mapped through one translation function into the
//! uniform `LedgerEntry` shape before merging.

use bigdecimal::BigDecimal;

use crate::ledger::entry::{LedgerEntry, LedgerEntryKind};
use crate::types::{PartyKind, PurchaseBill, SalesInvoice, Voucher, VoucherKind};

/// A source record contributing one statement row
enum EntrySource<'a> {
    Sales(&'a SalesInvoice),
    Purchase(&'a PurchaseBill),
    Voucher(&'a Voucher),
}

impl EntrySource<'_> {
    fn translate(&self) -> LedgerEntry {
        match self {
            EntrySource::Sales(invoice) => LedgerEntry {
                date: invoice.date,
                ref_no: invoice.invoice_no.clone(),
                kind: LedgerEntryKind::SalesInvoice,
                description: format!("Sales to {}", invoice.customer_name),
                debit: invoice.grand_total.clone(),
                credit: BigDecimal::from(0),
                balance: BigDecimal::from(0),
            },
            EntrySource::Purchase(bill) => LedgerEntry {
                date: bill.date,
                ref_no: bill.invoice_no.clone(),
                kind: LedgerEntryKind::PurchaseBill,
                description: format!("Purchase from {}", bill.supplier_name),
                debit: BigDecimal::from(0),
                credit: bill.total_amount.clone(),
                balance: BigDecimal::from(0),
            },
            EntrySource::Voucher(voucher) => {
                let (kind, ref_no, action) = match voucher.kind {
                    VoucherKind::Receipt => (LedgerEntryKind::Receipt, "RCPT", "Payment Received"),
                    VoucherKind::Payment => (LedgerEntryKind::Payment, "PMT", "Paid to Supplier"),
                };
                let mut description = format!("{} ({})", action, voucher.mode);
                if !voucher.notes.is_empty() {
                    description.push(' ');
                    description.push_str(&voucher.notes);
                }
                let (debit, credit) = match voucher.kind {
                    VoucherKind::Receipt => (BigDecimal::from(0), voucher.amount.clone()),
                    VoucherKind::Payment => (voucher.amount.clone(), BigDecimal::from(0)),
                };
                LedgerEntry {
                    date: voucher.date,
                    ref_no: ref_no.to_string(),
                    kind,
                    description,
                    debit,
                    credit,
                    balance: BigDecimal::from(0),
                }
            }
        }
    }
}

/// Build the statement for one party from full record sets.
///
/// Records are filtered to the party, translated, sorted by date (the
/// sort is stable, so same-date documents stay ahead of vouchers), and
/// walked to produce the running balance from a zero opening. A party
/// with no matching records yields an empty statement, not an error.
pub fn build_ledger(
    party_id: &str,
    kind: PartyKind,
    sales: &[SalesInvoice],
    purchases: &[PurchaseBill],
    vouchers: &[Voucher],
) -> Vec<LedgerEntry> {
    let mut sources: Vec<EntrySource> = Vec::new();

    match kind {
        PartyKind::Customer => sources.extend(
            sales
                .iter()
                .filter(|invoice| invoice.customer_id == party_id)
                .map(EntrySource::Sales),
        ),
        PartyKind::Supplier => sources.extend(
            purchases
                .iter()
                .filter(|bill| bill.supplier_id == party_id)
                .map(EntrySource::Purchase),
        ),
    }
    sources.extend(
        vouchers
            .iter()
            .filter(|voucher| voucher.party_id == party_id)
            .map(EntrySource::Voucher),
    );

    let mut entries: Vec<LedgerEntry> = sources.iter().map(EntrySource::translate).collect();
    entries.sort_by_key(|entry| entry.date);

    let mut balance = BigDecimal::from(0);
    for entry in &mut entries {
        let delta = match kind {
            // Receivable: debits increase what the customer owes
            PartyKind::Customer => &entry.debit - &entry.credit,
            // Payable: credits increase what we owe the supplier
            PartyKind::Supplier => &entry.credit - &entry.debit,
        };
        balance += delta;
        entry.balance = balance.clone();
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::entry::{balance_side, BalanceSide};
    use crate::types::{InvoiceStatus, LineItem};
    use chrono::NaiveDate;

    fn invoice(customer_id: &str, date: NaiveDate, grand_total: i64) -> SalesInvoice {
        SalesInvoice {
            id: format!("inv-{}", date),
            invoice_no: format!("INV-2024-{}", date.format("%m%d")),
            date,
            customer_id: customer_id.to_string(),
            customer_name: "Acme Traders".to_string(),
            customer_gstin: "21AAAAA0000A1Z5".to_string(),
            billing_address: String::new(),
            shipping_address: String::new(),
            place_of_supply: "Odisha".to_string(),
            items: Vec::<LineItem>::new(),
            sub_total: BigDecimal::from(0),
            freight_charges: BigDecimal::from(0),
            freight_tax_rate: BigDecimal::from(0),
            loading_charges: BigDecimal::from(0),
            round_off: BigDecimal::from(0),
            grand_total: BigDecimal::from(grand_total),
            total_in_words: String::new(),
            status: InvoiceStatus::Generated,
            is_inter_state: false,
        }
    }

    fn bill(supplier_id: &str, date: NaiveDate, total: i64) -> PurchaseBill {
        PurchaseBill {
            id: format!("pur-{}", date),
            supplier_id: supplier_id.to_string(),
            supplier_name: "Mehta Supplies".to_string(),
            invoice_no: "SUP-881".to_string(),
            date,
            items: Vec::new(),
            total_amount: BigDecimal::from(total),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_customer_statement() {
        let sales = vec![invoice("c1", date(2024, 1, 5), 10_000)];
        let vouchers = vec![Voucher::receipt(
            "c1".to_string(),
            date(2024, 1, 10),
            BigDecimal::from(4_000),
            "Cash".to_string(),
        )];

        let entries = build_ledger("c1", PartyKind::Customer, &sales, &[], &vouchers);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, LedgerEntryKind::SalesInvoice);
        assert_eq!(entries[0].debit, BigDecimal::from(10_000));
        assert_eq!(entries[0].credit, BigDecimal::from(0));
        assert_eq!(entries[0].balance, BigDecimal::from(10_000));
        assert_eq!(entries[1].kind, LedgerEntryKind::Receipt);
        assert_eq!(entries[1].credit, BigDecimal::from(4_000));
        assert_eq!(entries[1].balance, BigDecimal::from(6_000));
        for entry in &entries {
            assert_eq!(
                balance_side(PartyKind::Customer, &entry.balance),
                BalanceSide::Debit
            );
        }
    }

    #[test]
    fn test_supplier_same_date_tie_break() {
        let day = date(2024, 2, 1);
        let purchases = vec![bill("s1", day, 5_000)];
        let vouchers = vec![Voucher::payment(
            "s1".to_string(),
            day,
            BigDecimal::from(2_000),
            "Bank".to_string(),
        )];

        let entries = build_ledger("s1", PartyKind::Supplier, &[], &purchases, &vouchers);

        // same date: the bill stays ahead of the payment
        assert_eq!(entries[0].kind, LedgerEntryKind::PurchaseBill);
        assert_eq!(entries[0].balance, BigDecimal::from(5_000));
        assert_eq!(entries[1].kind, LedgerEntryKind::Payment);
        assert_eq!(entries[1].debit, BigDecimal::from(2_000));
        assert_eq!(entries[1].balance, BigDecimal::from(3_000));
        for entry in &entries {
            assert_eq!(
                balance_side(PartyKind::Supplier, &entry.balance),
                BalanceSide::Credit
            );
        }
    }

    #[test]
    fn test_entries_sorted_by_date() {
        let sales = vec![
            invoice("c1", date(2024, 3, 15), 1_000),
            invoice("c1", date(2024, 1, 2), 2_000),
        ];
        let vouchers = vec![Voucher::receipt(
            "c1".to_string(),
            date(2024, 2, 10),
            BigDecimal::from(500),
            "Cash".to_string(),
        )];

        let entries = build_ledger("c1", PartyKind::Customer, &sales, &[], &vouchers);
        let dates: Vec<NaiveDate> = entries.iter().map(|entry| entry.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 2), date(2024, 2, 10), date(2024, 3, 15)]);
        assert_eq!(entries[2].balance, BigDecimal::from(2_500));
    }

    #[test]
    fn test_other_parties_filtered_out() {
        let sales = vec![
            invoice("c1", date(2024, 1, 5), 10_000),
            invoice("c2", date(2024, 1, 6), 7_000),
        ];
        let entries = build_ledger("c1", PartyKind::Customer, &sales, &[], &[]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].debit, BigDecimal::from(10_000));
    }

    #[test]
    fn test_unknown_party_yields_empty_statement() {
        let sales = vec![invoice("c1", date(2024, 1, 5), 10_000)];
        let entries = build_ledger("nobody", PartyKind::Customer, &sales, &[], &[]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let sales = vec![
            invoice("c1", date(2024, 1, 5), 10_000),
            invoice("c1", date(2024, 1, 5), 3_000),
        ];
        let vouchers = vec![Voucher::receipt(
            "c1".to_string(),
            date(2024, 1, 5),
            BigDecimal::from(4_000),
            "Cash".to_string(),
        )];

        let first = build_ledger("c1", PartyKind::Customer, &sales, &[], &vouchers);
        let second = build_ledger("c1", PartyKind::Customer, &sales, &[], &vouchers);
        assert_eq!(first, second);
    }

    #[test]
    fn test_customer_advance_goes_negative() {
        let vouchers = vec![Voucher::receipt(
            "c1".to_string(),
            date(2024, 1, 2),
            BigDecimal::from(1_000),
            "Bank".to_string(),
        )];
        let entries = build_ledger("c1", PartyKind::Customer, &[], &[], &vouchers);
        assert_eq!(entries[0].balance, BigDecimal::from(-1_000));
        assert_eq!(
            balance_side(PartyKind::Customer, &entries[0].balance),
            BalanceSide::Credit
        );
    }
}
