//! GST invoice computation walkthrough

use bigdecimal::BigDecimal;
use khata_core::{is_inter_state, GstSlab, LineItem, PriceTier, Product, TaxableDocument};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Khata Core - GST Invoice Walkthrough\n");

    println!("📊 Standard GST Slabs:");
    for slab in [
        GstSlab::Exempt,
        GstSlab::Reduced,
        GstSlab::Standard,
        GstSlab::Higher,
        GstSlab::Luxury,
    ] {
        println!("  {:?}: {}%", slab, slab.rate());
    }
    println!();

    let product = Product {
        id: "prod-1".to_string(),
        name: "Cement Bag 50kg".to_string(),
        hsn_code: "2523".to_string(),
        unit: "BAG".to_string(),
        tax_rate: BigDecimal::from(18),
        stock: BigDecimal::from(120),
        purchase_price: BigDecimal::from(310),
        sale_price_1: BigDecimal::from(400),
        sale_price_2: BigDecimal::from(390),
        sale_price_3: BigDecimal::from(380),
        price: None,
    };

    // Customer in Odisha (21), firm in Odisha (21): intra-state
    let inter_state = is_inter_state("21", "21");
    let mut document = TaxableDocument::new(inter_state);

    let mut item = LineItem::new();
    item.prefill_from_product(&product, PriceTier::Sale1);
    item.quantity = BigDecimal::from(25);
    document.items.push(item);
    document.freight_charges = BigDecimal::from(500);
    document.freight_tax_rate = BigDecimal::from(18);

    let summary = document.recompute()?;
    println!("🏢 Intra-state invoice (CGST + SGST):");
    println!("  Sub Total:    ₹{}", summary.sub_total);
    println!("  CGST:         ₹{}", summary.cgst_total);
    println!("  SGST:         ₹{}", summary.sgst_total);
    println!("  IGST:         ₹{}", summary.igst_total);
    println!("  Freight:      ₹{}", document.freight_charges);
    println!("  Freight Tax:  ₹{}", summary.freight_tax);
    println!("  Round Off:    ₹{}", summary.round_off);
    println!("  Grand Total:  ₹{}", summary.grand_total);
    println!("  In Words:     {}", summary.total_in_words);
    println!();

    let summary = document.set_inter_state(true)?;
    println!("🌍 Same invoice shipped interstate (IGST only):");
    println!("  CGST:         ₹{}", summary.cgst_total);
    println!("  SGST:         ₹{}", summary.sgst_total);
    println!("  IGST:         ₹{}", summary.igst_total);
    println!("  Grand Total:  ₹{}", summary.grand_total);

    Ok(())
}
