//! Record types and error taxonomy for the bookkeeping core
//!
//! Field names follow the persisted shapes of the host's record store
//! (camelCase on the wire), so snapshots deserialize without adapters.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which side of a party relationship a statement is built for.
///
/// Customers and suppliers are structurally different records with
/// opposite running-balance sign conventions, so the kind is an explicit
/// enum rather than a property of the party record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyKind {
    /// Receivable view: debits increase the balance
    Customer,
    /// Payable view: credits increase the balance
    Supplier,
}

/// A customer master record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub gstin: String,
    pub billing_address: String,
    pub shipping_address: String,
    pub state: String,
    /// Two-digit GST state code, compared against the firm's code to
    /// decide interstate treatment
    pub state_code: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A supplier master record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub gstin: String,
    pub address: String,
    pub state: String,
    #[serde(default)]
    pub state_code: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A product master record with tiered pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// HSN classification code, opaque to the core
    pub hsn_code: String,
    pub unit: String,
    /// GST rate percentage (standard slabs: 0, 5, 12, 18, 28)
    pub tax_rate: BigDecimal,
    /// Stock on hand, carried through unchanged (the core never adjusts it)
    #[serde(default)]
    pub stock: BigDecimal,
    pub purchase_price: BigDecimal,
    pub sale_price_1: BigDecimal,
    pub sale_price_2: BigDecimal,
    pub sale_price_3: BigDecimal,
    /// Legacy single-price field kept as a fallback for old records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<BigDecimal>,
}

/// Price tier used when a product is selected onto a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceTier {
    Purchase,
    Sale1,
    Sale2,
    Sale3,
}

impl PriceTier {
    /// Resolve the tier price for a product, falling back to the legacy
    /// `price` field when the tier is unset (zero)
    pub fn price_of(&self, product: &Product) -> BigDecimal {
        let tier_price = match self {
            PriceTier::Purchase => &product.purchase_price,
            PriceTier::Sale1 => &product.sale_price_1,
            PriceTier::Sale2 => &product.sale_price_2,
            PriceTier::Sale3 => &product.sale_price_3,
        };
        if *tier_price == BigDecimal::from(0) {
            product.price.clone().unwrap_or_else(|| BigDecimal::from(0))
        } else {
            tier_price.clone()
        }
    }
}

/// One product/service row on a sales, quotation, or purchase document.
///
/// `taxable_value` and the tax/total amounts are derived fields: they are
/// only ever written by recomputation, never trusted as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub hsn_code: String,
    pub quantity: BigDecimal,
    pub unit: String,
    pub rate: BigDecimal,
    /// Discount percentage on the gross line value, 0-100
    pub discount: BigDecimal,
    pub taxable_value: BigDecimal,
    pub tax_rate: BigDecimal,
    pub cgst_amount: BigDecimal,
    pub sgst_amount: BigDecimal,
    pub igst_amount: BigDecimal,
    pub total_amount: BigDecimal,
}

impl LineItem {
    /// Create a blank line with the usual entry defaults
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_id: String::new(),
            product_name: String::new(),
            hsn_code: String::new(),
            quantity: BigDecimal::from(1),
            unit: "NOS".to_string(),
            rate: BigDecimal::from(0),
            discount: BigDecimal::from(0),
            taxable_value: BigDecimal::from(0),
            tax_rate: BigDecimal::from(18),
            cgst_amount: BigDecimal::from(0),
            sgst_amount: BigDecimal::from(0),
            igst_amount: BigDecimal::from(0),
            total_amount: BigDecimal::from(0),
        }
    }

    /// Fill rate, tax rate, HSN code, and unit from a product master.
    ///
    /// This is a one-time default-fill at selection time, not a binding:
    /// later edits to the product master leave existing lines untouched.
    pub fn prefill_from_product(&mut self, product: &Product, tier: PriceTier) {
        self.product_id = product.id.clone();
        self.product_name = product.name.clone();
        self.hsn_code = product.hsn_code.clone();
        self.unit = product.unit.clone();
        self.rate = tier.price_of(product);
        self.tax_rate = product.tax_rate.clone();
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle status of a sales invoice, carried through unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Draft,
    Generated,
    Paid,
}

/// A durable sales invoice record owned by the host's record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesInvoice {
    pub id: String,
    pub invoice_no: String,
    pub date: NaiveDate,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_gstin: String,
    pub billing_address: String,
    pub shipping_address: String,
    pub place_of_supply: String,
    pub items: Vec<LineItem>,
    pub sub_total: BigDecimal,
    pub freight_charges: BigDecimal,
    #[serde(default)]
    pub freight_tax_rate: BigDecimal,
    pub loading_charges: BigDecimal,
    pub round_off: BigDecimal,
    pub grand_total: BigDecimal,
    pub total_in_words: String,
    pub status: InvoiceStatus,
    pub is_inter_state: bool,
}

/// A durable purchase bill record (the supplier's invoice)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseBill {
    pub id: String,
    pub supplier_id: String,
    pub supplier_name: String,
    /// The supplier's own invoice number
    pub invoice_no: String,
    pub date: NaiveDate,
    pub items: Vec<LineItem>,
    pub total_amount: BigDecimal,
}

/// Direction of a voucher, independent of which party it is booked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoucherKind {
    /// Money received; always a credit entry on the statement
    Receipt,
    /// Money paid out; always a debit entry on the statement
    Payment,
}

/// A receipt/payment voucher booked against a party
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: String,
    pub party_id: String,
    #[serde(default)]
    pub party_name: String,
    #[serde(rename = "type")]
    pub kind: VoucherKind,
    pub date: NaiveDate,
    pub amount: BigDecimal,
    /// Settlement mode, e.g. "Cash" or "Bank"
    pub mode: String,
    #[serde(default)]
    pub notes: String,
}

impl Voucher {
    /// Create a receipt voucher (money received from a party)
    pub fn receipt(party_id: String, date: NaiveDate, amount: BigDecimal, mode: String) -> Self {
        Self::new(party_id, VoucherKind::Receipt, date, amount, mode)
    }

    /// Create a payment voucher (money paid to a party)
    pub fn payment(party_id: String, date: NaiveDate, amount: BigDecimal, mode: String) -> Self {
        Self::new(party_id, VoucherKind::Payment, date, amount, mode)
    }

    fn new(
        party_id: String,
        kind: VoucherKind,
        date: NaiveDate,
        amount: BigDecimal,
        mode: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            party_id,
            party_name: String::new(),
            kind,
            date,
            amount,
            mode,
            notes: String::new(),
        }
    }

    /// Attach a free-text note shown on ledger statements
    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = notes;
        self
    }
}

/// Errors that can occur in the bookkeeping core
#[derive(Debug, thiserror::Error)]
pub enum KhataError {
    /// Negative quantity/rate, discount outside 0-100, or a negative charge;
    /// rejected before any derived value is produced
    #[error("Invalid line input: {0}")]
    InvalidLineInput(String),
    /// A party master lookup found no matching record
    #[error("Unknown party: {0}")]
    UnknownParty(String),
    /// A host-supplied number was NaN/infinite, or a result left the
    /// representable range; never silently coerced to zero
    #[error("Non-finite result: {0}")]
    NonFiniteResult(String),
    /// Passthrough for record-store implementations
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for bookkeeping operations
pub type KhataResult<T> = Result<T, KhataError>;
