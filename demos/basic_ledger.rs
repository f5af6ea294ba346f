//! Party ledger statement walkthrough

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use khata_core::{
    balance_side, constants::state_name, party_display_name, party_ledger, utils::MemoryStore,
    Customer, PartyKind, PurchaseBill, Supplier, Voucher,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📒 Khata Core - Ledger Book Walkthrough\n");

    let store = MemoryStore::new();

    store.save_customer(Customer {
        id: "cust-1".to_string(),
        name: "Acme Traders".to_string(),
        gstin: "21AAAAA0000A1Z5".to_string(),
        billing_address: "Station Road, Cuttack".to_string(),
        shipping_address: "Station Road, Cuttack".to_string(),
        state: state_name("21").unwrap_or("Odisha").to_string(),
        state_code: "21".to_string(),
        phone: "9000000001".to_string(),
        email: None,
    });
    store.save_supplier(Supplier {
        id: "sup-1".to_string(),
        name: "Mehta Supplies".to_string(),
        gstin: "27BBBBB0000B1Z4".to_string(),
        address: "MIDC, Pune".to_string(),
        state: "Maharashtra".to_string(),
        state_code: "27".to_string(),
        phone: "9000000002".to_string(),
        email: None,
    });

    let feb_1 = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    store.save_purchase_bill(PurchaseBill {
        id: "pur-1".to_string(),
        supplier_id: "sup-1".to_string(),
        supplier_name: "Mehta Supplies".to_string(),
        invoice_no: "SUP-881".to_string(),
        date: feb_1,
        items: Vec::new(),
        total_amount: BigDecimal::from(5_000),
    });
    store.save_voucher(
        Voucher::payment(
            "sup-1".to_string(),
            feb_1,
            BigDecimal::from(2_000),
            "Bank".to_string(),
        )
        .with_notes("part payment".to_string()),
    );

    let kind = PartyKind::Supplier;
    let name = party_display_name(&store, "sup-1", kind).await?;
    let entries = party_ledger(&store, "sup-1", kind).await?;

    println!("Statement of Account: {}\n", name);
    println!(
        "{:<12} {:<10} {:<15} {:<34} {:>8} {:>8} {:>12}",
        "Date", "Ref No", "Type", "Description", "Debit", "Credit", "Balance"
    );
    for entry in &entries {
        println!(
            "{:<12} {:<10} {:<15} {:<34} {:>8} {:>8} {:>9} {}",
            entry.date,
            entry.ref_no,
            entry.kind.to_string(),
            entry.description,
            entry.debit,
            entry.credit,
            entry.balance,
            balance_side(kind, &entry.balance),
        );
    }

    if let Some(last) = entries.last() {
        println!(
            "\nCurrent Balance: ₹{} {}",
            last.balance.abs(),
            balance_side(kind, &last.balance)
        );
    }

    Ok(())
}
