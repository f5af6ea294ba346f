//! In-memory record store for testing and development

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::traits::RecordStore;
use crate::types::*;

/// In-memory `RecordStore` backed by shared vectors.
///
/// Records keep their insertion order, so statements built from the
/// same store contents come out identical run after run. Upserts match
/// on record id, mirroring the usual key-value store behavior.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    customers: Arc<RwLock<Vec<Customer>>>,
    suppliers: Arc<RwLock<Vec<Supplier>>>,
    products: Arc<RwLock<Vec<Product>>>,
    sales: Arc<RwLock<Vec<SalesInvoice>>>,
    purchases: Arc<RwLock<Vec<PurchaseBill>>>,
    vouchers: Arc<RwLock<Vec<Voucher>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(Vec::new())),
            suppliers: Arc::new(RwLock::new(Vec::new())),
            products: Arc::new(RwLock::new(Vec::new())),
            sales: Arc::new(RwLock::new(Vec::new())),
            purchases: Arc::new(RwLock::new(Vec::new())),
            vouchers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.customers.write().unwrap().clear();
        self.suppliers.write().unwrap().clear();
        self.products.write().unwrap().clear();
        self.sales.write().unwrap().clear();
        self.purchases.write().unwrap().clear();
        self.vouchers.write().unwrap().clear();
    }

    pub fn save_customer(&self, customer: Customer) {
        upsert(&self.customers, customer, |c| c.id.clone());
    }

    pub fn save_supplier(&self, supplier: Supplier) {
        upsert(&self.suppliers, supplier, |s| s.id.clone());
    }

    pub fn save_product(&self, product: Product) {
        upsert(&self.products, product, |p| p.id.clone());
    }

    pub fn save_sales_invoice(&self, invoice: SalesInvoice) {
        upsert(&self.sales, invoice, |i| i.id.clone());
    }

    pub fn save_purchase_bill(&self, bill: PurchaseBill) {
        upsert(&self.purchases, bill, |b| b.id.clone());
    }

    pub fn save_voucher(&self, voucher: Voucher) {
        upsert(&self.vouchers, voucher, |v| v.id.clone());
    }
}

fn upsert<T>(records: &Arc<RwLock<Vec<T>>>, record: T, id_of: impl Fn(&T) -> String) {
    let mut records = records.write().unwrap();
    let id = id_of(&record);
    match records.iter().position(|existing| id_of(existing) == id) {
        Some(index) => records[index] = record,
        None => records.push(record),
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn sales_invoices(&self) -> KhataResult<Vec<SalesInvoice>> {
        Ok(self.sales.read().unwrap().clone())
    }

    async fn purchase_bills(&self) -> KhataResult<Vec<PurchaseBill>> {
        Ok(self.purchases.read().unwrap().clone())
    }

    async fn vouchers(&self) -> KhataResult<Vec<Voucher>> {
        Ok(self.vouchers.read().unwrap().clone())
    }

    async fn get_customer(&self, customer_id: &str) -> KhataResult<Option<Customer>> {
        Ok(self
            .customers
            .read()
            .unwrap()
            .iter()
            .find(|c| c.id == customer_id)
            .cloned())
    }

    async fn get_supplier(&self, supplier_id: &str) -> KhataResult<Option<Supplier>> {
        Ok(self
            .suppliers
            .read()
            .unwrap()
            .iter()
            .find(|s| s.id == supplier_id)
            .cloned())
    }

    async fn get_product(&self, product_id: &str) -> KhataResult<Option<Product>> {
        Ok(self
            .products
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == product_id)
            .cloned())
    }

    async fn list_customers(&self) -> KhataResult<Vec<Customer>> {
        Ok(self.customers.read().unwrap().clone())
    }

    async fn list_suppliers(&self) -> KhataResult<Vec<Supplier>> {
        Ok(self.suppliers.read().unwrap().clone())
    }

    async fn list_products(&self) -> KhataResult<Vec<Product>> {
        Ok(self.products.read().unwrap().clone())
    }
}
