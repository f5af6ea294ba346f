//! Per-line GST computation for Indian tax compliance
//!
//! CGST+SGST apply to intra-state transactions (the rate split evenly),
//! IGST applies to inter-state transactions (full rate, no split).
//! Splits are exact at line level; rounding happens once, at the
//! document total, so summed line totals always reconcile.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::{KhataResult, LineItem};
use crate::utils::validation::{ensure_non_negative, ensure_percent};

/// Standard GST slabs for categories of goods and services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstSlab {
    /// Essential items (food, medicines) - 0%
    Exempt,
    /// Reduced rate items - 5%
    Reduced,
    /// Standard rate items - 12%
    Standard,
    /// Higher rate items (most services) - 18%
    Higher,
    /// Luxury/sin goods - 28%
    Luxury,
}

impl GstSlab {
    /// The rate percentage for this slab
    pub fn rate(&self) -> BigDecimal {
        match self {
            GstSlab::Exempt => BigDecimal::from(0),
            GstSlab::Reduced => BigDecimal::from(5),
            GstSlab::Standard => BigDecimal::from(12),
            GstSlab::Higher => BigDecimal::from(18),
            GstSlab::Luxury => BigDecimal::from(28),
        }
    }

    /// Map a rate percentage back to its slab, if it is a standard one
    pub fn from_rate(rate: &BigDecimal) -> Option<Self> {
        [
            GstSlab::Exempt,
            GstSlab::Reduced,
            GstSlab::Standard,
            GstSlab::Higher,
            GstSlab::Luxury,
        ]
        .into_iter()
        .find(|slab| slab.rate() == *rate)
    }
}

/// Derived values for one line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineComputation {
    /// Quantity x rate, less discount
    pub taxable_value: BigDecimal,
    pub cgst_amount: BigDecimal,
    pub sgst_amount: BigDecimal,
    pub igst_amount: BigDecimal,
    /// Taxable value plus total tax
    pub total_amount: BigDecimal,
}

impl LineComputation {
    /// Total tax across all three components
    pub fn tax_amount(&self) -> BigDecimal {
        &self.cgst_amount + &self.sgst_amount + &self.igst_amount
    }

    /// Write the derived values back onto a line item
    pub fn apply_to_item(&self, item: &mut LineItem) {
        item.taxable_value = self.taxable_value.clone();
        item.cgst_amount = self.cgst_amount.clone();
        item.sgst_amount = self.sgst_amount.clone();
        item.igst_amount = self.igst_amount.clone();
        item.total_amount = self.total_amount.clone();
    }
}

/// Compute taxable value, tax split, and total for one line.
///
/// Inputs are validated first: negative quantity/rate and a discount
/// outside 0-100 are rejected before anything is computed. The function
/// is pure; recomputation with the same inputs yields the same output.
pub fn compute_line(
    quantity: &BigDecimal,
    rate: &BigDecimal,
    discount_percent: &BigDecimal,
    tax_rate_percent: &BigDecimal,
    inter_state: bool,
) -> KhataResult<LineComputation> {
    ensure_non_negative("quantity", quantity)?;
    ensure_non_negative("rate", rate)?;
    ensure_percent("discount", discount_percent)?;
    ensure_non_negative("taxRate", tax_rate_percent)?;

    let gross = quantity * rate;
    let discount = (&gross * discount_percent) / BigDecimal::from(100);
    let taxable_value = &gross - &discount;

    let tax_amount = (&taxable_value * tax_rate_percent) / BigDecimal::from(100);
    let (cgst_amount, sgst_amount, igst_amount) = split_tax(&tax_amount, inter_state);
    let total_amount = &taxable_value + &tax_amount;

    Ok(LineComputation {
        taxable_value,
        cgst_amount,
        sgst_amount,
        igst_amount,
        total_amount,
    })
}

/// Split a tax amount per the interstate rule: IGST takes the full
/// amount across state lines, otherwise CGST and SGST take exact halves.
pub(crate) fn split_tax(
    tax_amount: &BigDecimal,
    inter_state: bool,
) -> (BigDecimal, BigDecimal, BigDecimal) {
    if inter_state {
        (BigDecimal::from(0), BigDecimal::from(0), tax_amount.clone())
    } else {
        let half = tax_amount / BigDecimal::from(2);
        (half.clone(), half, BigDecimal::from(0))
    }
}

/// Recompute a line item's derived fields in place
pub fn recompute_item(item: &mut LineItem, inter_state: bool) -> KhataResult<()> {
    let computation = compute_line(
        &item.quantity,
        &item.rate,
        &item.discount,
        &item.tax_rate,
        inter_state,
    )?;
    computation.apply_to_item(item);
    Ok(())
}

/// Whether a document is interstate: true when the party's state code
/// differs from the firm's and both are present
pub fn is_inter_state(party_state_code: &str, firm_state_code: &str) -> bool {
    !party_state_code.is_empty()
        && !firm_state_code.is_empty()
        && party_state_code != firm_state_code
}
