//! Storage abstraction for the host's record store
//!
//! The core never performs I/O of its own; a `RecordStore` hands it
//! read-only snapshots of the durable records. Any backend works
//! (browser storage bridge, SQL, in-memory) by implementing this trait.

use async_trait::async_trait;

use crate::types::*;

/// Read-only record snapshots supplied by the storage collaborator.
///
/// Each call returns an independent snapshot; the core treats the
/// returned records as immutable for the duration of one computation.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All sales invoices
    async fn sales_invoices(&self) -> KhataResult<Vec<SalesInvoice>>;

    /// All purchase bills
    async fn purchase_bills(&self) -> KhataResult<Vec<PurchaseBill>>;

    /// All receipt/payment vouchers
    async fn vouchers(&self) -> KhataResult<Vec<Voucher>>;

    /// Look up a customer master record
    async fn get_customer(&self, customer_id: &str) -> KhataResult<Option<Customer>>;

    /// Look up a supplier master record
    async fn get_supplier(&self, supplier_id: &str) -> KhataResult<Option<Supplier>>;

    /// Look up a product master record
    async fn get_product(&self, product_id: &str) -> KhataResult<Option<Product>>;

    /// All customer master records
    async fn list_customers(&self) -> KhataResult<Vec<Customer>>;

    /// All supplier master records
    async fn list_suppliers(&self) -> KhataResult<Vec<Supplier>>;

    /// All product master records
    async fn list_products(&self) -> KhataResult<Vec<Product>>;
}
