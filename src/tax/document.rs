//! Document-level totals: subtotal, tax totals, round-off, grand total
//!
//! Freight carries its own tax rate and is split by the same interstate
//! rule as line items, so the CGST/SGST/IGST totals cover both line-level
//! and freight-level tax. The raw total is rounded once, half away from
//! zero, to the nearest whole rupee; the signed remainder is reported as
//! the round-off so the printed breakdown reconciles exactly.

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::tax::engine::{recompute_item, split_tax};
use crate::types::{KhataError, KhataResult, LineItem};
use crate::utils::validation::ensure_non_negative;
use crate::words::rupees_in_words;

/// Computed totals for a sales/purchase document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    /// Sum of line taxable values
    pub sub_total: BigDecimal,
    /// Line CGST plus half the freight tax (intra-state documents)
    pub cgst_total: BigDecimal,
    pub sgst_total: BigDecimal,
    /// Line IGST plus the full freight tax (interstate documents)
    pub igst_total: BigDecimal,
    pub freight_tax: BigDecimal,
    /// Signed difference between the rounded grand total and the raw
    /// total; always reported, even when zero
    pub round_off: BigDecimal,
    pub grand_total: BigDecimal,
    pub total_in_words: String,
}

impl DocumentSummary {
    /// Total tax across all components, freight tax included
    pub fn tax_total(&self) -> BigDecimal {
        &self.cgst_total + &self.sgst_total + &self.igst_total
    }
}

/// A line-item document being edited: a sales invoice, quotation, or
/// purchase bill before it is persisted.
///
/// This is a transient view object; the durable records live with the
/// host's record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxableDocument {
    pub items: Vec<LineItem>,
    pub freight_charges: BigDecimal,
    pub freight_tax_rate: BigDecimal,
    pub loading_charges: BigDecimal,
    pub is_inter_state: bool,
}

impl TaxableDocument {
    /// Create an empty document with no charges
    pub fn new(is_inter_state: bool) -> Self {
        Self {
            items: Vec::new(),
            freight_charges: BigDecimal::from(0),
            freight_tax_rate: BigDecimal::from(0),
            loading_charges: BigDecimal::from(0),
            is_inter_state,
        }
    }

    /// Totals over the current line items as-is
    pub fn totals(&self) -> KhataResult<DocumentSummary> {
        compute_totals(
            &self.items,
            &self.freight_charges,
            &self.freight_tax_rate,
            &self.loading_charges,
            self.is_inter_state,
        )
    }

    /// Recompute every line's derived fields, then the totals.
    ///
    /// Lines are rewritten before summing, so a stale split (e.g. after
    /// the interstate flag changed) can never reach the totals.
    pub fn recompute(&mut self) -> KhataResult<DocumentSummary> {
        let inter_state = self.is_inter_state;
        for item in &mut self.items {
            recompute_item(item, inter_state)?;
        }
        self.totals()
    }

    /// Flip the interstate flag and recompute everything that depends on it
    pub fn set_inter_state(&mut self, inter_state: bool) -> KhataResult<DocumentSummary> {
        self.is_inter_state = inter_state;
        self.recompute()
    }
}

/// Aggregate line items plus freight/loading charges into document totals
pub fn compute_totals(
    items: &[LineItem],
    freight_charges: &BigDecimal,
    freight_tax_rate: &BigDecimal,
    loading_charges: &BigDecimal,
    inter_state: bool,
) -> KhataResult<DocumentSummary> {
    ensure_non_negative("freightCharges", freight_charges)?;
    ensure_non_negative("freightTaxRate", freight_tax_rate)?;
    ensure_non_negative("loadingCharges", loading_charges)?;

    let sub_total: BigDecimal = items.iter().map(|item| &item.taxable_value).sum();
    let mut cgst_total: BigDecimal = items.iter().map(|item| &item.cgst_amount).sum();
    let mut sgst_total: BigDecimal = items.iter().map(|item| &item.sgst_amount).sum();
    let mut igst_total: BigDecimal = items.iter().map(|item| &item.igst_amount).sum();

    let freight_tax = (freight_charges * freight_tax_rate) / BigDecimal::from(100);
    let (freight_cgst, freight_sgst, freight_igst) = split_tax(&freight_tax, inter_state);
    cgst_total += freight_cgst;
    sgst_total += freight_sgst;
    igst_total += freight_igst;

    let tax_total = &cgst_total + &sgst_total + &igst_total;
    let raw_total = &sub_total + &tax_total + freight_charges + loading_charges;
    let grand_total = raw_total.with_scale_round(0, RoundingMode::HalfUp);
    let round_off = &grand_total - &raw_total;
    let total_in_words = rupees_in_words(whole_rupees(&grand_total)?);

    Ok(DocumentSummary {
        sub_total,
        cgst_total,
        sgst_total,
        igst_total,
        freight_tax,
        round_off,
        grand_total,
        total_in_words,
    })
}

fn whole_rupees(grand_total: &BigDecimal) -> KhataResult<u64> {
    grand_total.to_u64().ok_or_else(|| {
        KhataError::NonFiniteResult(format!(
            "Grand total {} cannot be expressed in words",
            grand_total
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::engine::compute_line;

    fn line(qty: i64, rate: i64, tax_rate: i64, inter_state: bool) -> LineItem {
        let mut item = LineItem::new();
        item.quantity = BigDecimal::from(qty);
        item.rate = BigDecimal::from(rate);
        item.tax_rate = BigDecimal::from(tax_rate);
        let computation = compute_line(
            &item.quantity,
            &item.rate,
            &item.discount,
            &item.tax_rate,
            inter_state,
        )
        .unwrap();
        computation.apply_to_item(&mut item);
        item
    }

    #[test]
    fn test_simple_totals() {
        let items = vec![line(2, 100, 18, false), line(1, 300, 18, false)];
        let summary = compute_totals(
            &items,
            &BigDecimal::from(0),
            &BigDecimal::from(0),
            &BigDecimal::from(0),
            false,
        )
        .unwrap();

        assert_eq!(summary.sub_total, BigDecimal::from(500));
        assert_eq!(summary.cgst_total, BigDecimal::from(45));
        assert_eq!(summary.sgst_total, BigDecimal::from(45));
        assert_eq!(summary.igst_total, BigDecimal::from(0));
        assert_eq!(summary.grand_total, BigDecimal::from(590));
        assert_eq!(summary.round_off, BigDecimal::from(0));
        assert_eq!(
            summary.total_in_words,
            "Rupees Five Hundred Ninety Only"
        );
    }

    #[test]
    fn test_freight_tax_splits_like_lines() {
        let items = vec![line(1, 1000, 18, false)];
        // 500 freight at 18% = 90 tax, halved into CGST/SGST
        let summary = compute_totals(
            &items,
            &BigDecimal::from(500),
            &BigDecimal::from(18),
            &BigDecimal::from(0),
            false,
        )
        .unwrap();

        assert_eq!(summary.freight_tax, BigDecimal::from(90));
        assert_eq!(summary.cgst_total, BigDecimal::from(135));
        assert_eq!(summary.sgst_total, BigDecimal::from(135));
        assert_eq!(summary.igst_total, BigDecimal::from(0));

        let interstate = compute_totals(
            &vec![line(1, 1000, 18, true)],
            &BigDecimal::from(500),
            &BigDecimal::from(18),
            &BigDecimal::from(0),
            true,
        )
        .unwrap();
        assert_eq!(interstate.cgst_total, BigDecimal::from(0));
        assert_eq!(interstate.igst_total, BigDecimal::from(270));
    }

    #[test]
    fn test_round_off_reconciles() {
        // 3 x 33.33 @ 18% leaves a fractional raw total
        let mut item = LineItem::new();
        item.quantity = BigDecimal::from(3);
        item.rate = BigDecimal::try_from(33.33).unwrap();
        item.tax_rate = BigDecimal::from(18);
        recompute_item(&mut item, false).unwrap();

        let freight = BigDecimal::try_from(10.50).unwrap();
        let loading = BigDecimal::from(7);
        let summary = compute_totals(
            &[item],
            &freight,
            &BigDecimal::from(5),
            &loading,
            false,
        )
        .unwrap();

        let reconciled = &summary.sub_total
            + summary.tax_total()
            + &freight
            + &loading
            + &summary.round_off;
        assert_eq!(reconciled, summary.grand_total);
        assert!(summary.round_off.abs() < BigDecimal::from(1));
    }

    #[test]
    fn test_grand_total_rounds_half_away_from_zero() {
        let mut item = LineItem::new();
        item.quantity = BigDecimal::from(1);
        item.rate = BigDecimal::try_from(100.50).unwrap();
        item.tax_rate = BigDecimal::from(0);
        recompute_item(&mut item, false).unwrap();

        let summary = compute_totals(
            &[item],
            &BigDecimal::from(0),
            &BigDecimal::from(0),
            &BigDecimal::from(0),
            false,
        )
        .unwrap();
        assert_eq!(summary.grand_total, BigDecimal::from(101));
        assert_eq!(summary.round_off, BigDecimal::try_from(0.50).unwrap());
    }

    #[test]
    fn test_interstate_toggle_recomputes_lines() {
        let mut document = TaxableDocument::new(false);
        let mut item = LineItem::new();
        item.quantity = BigDecimal::from(2);
        item.rate = BigDecimal::from(100);
        item.tax_rate = BigDecimal::from(18);
        document.items.push(item);

        let intra = document.recompute().unwrap();
        assert_eq!(intra.cgst_total, BigDecimal::from(18));
        assert_eq!(document.items[0].sgst_amount, BigDecimal::from(18));
        assert_eq!(document.items[0].igst_amount, BigDecimal::from(0));

        let inter = document.set_inter_state(true).unwrap();
        assert_eq!(inter.cgst_total, BigDecimal::from(0));
        assert_eq!(inter.igst_total, BigDecimal::from(36));
        assert_eq!(document.items[0].cgst_amount, BigDecimal::from(0));
        assert_eq!(document.items[0].igst_amount, BigDecimal::from(36));
        // grand total is unchanged by the split
        assert_eq!(intra.grand_total, inter.grand_total);
    }

    #[test]
    fn test_negative_charges_rejected() {
        let summary = compute_totals(
            &[],
            &BigDecimal::from(-1),
            &BigDecimal::from(0),
            &BigDecimal::from(0),
            false,
        );
        assert!(matches!(summary, Err(KhataError::InvalidLineInput(_))));
    }

    #[test]
    fn test_empty_document() {
        let summary = TaxableDocument::new(false).totals().unwrap();
        assert_eq!(summary.grand_total, BigDecimal::from(0));
        assert_eq!(summary.total_in_words, "Zero");
    }
}
