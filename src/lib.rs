//! # Khata Core
//!
//! A bookkeeping computation core for small-business GST billing,
//! providing tax splits, document totals, and party ledger statements.
//!
//! ## Features
//!
//! - **Line-level GST**: Indian CGST/SGST/IGST splits driven by an interstate flag
//! - **Document totals**: subtotal, tax totals, freight tax, round-off, grand total
//! - **Amount in words**: Indian-numbering (lakh/crore) rupee word form
//! - **Party ledger**: chronological running-balance statements for customers and suppliers
//! - **Storage abstraction**: read-only record snapshots via a trait-based store
//!
//! The core is a pure function of the records handed to it: it performs no I/O,
//! keeps no state between calls, and never mutates the durable records it reads.
//!
//! ## Quick Start
//!
//! ```rust
//! use khata_core::{compute_line, rupees_in_words};
//! use bigdecimal::BigDecimal;
//!
//! let line = compute_line(
//!     &BigDecimal::from(2),
//!     &BigDecimal::from(100),
//!     &BigDecimal::from(0),
//!     &BigDecimal::from(18),
//!     false,
//! ).unwrap();
//! assert_eq!(line.total_amount, BigDecimal::from(236));
//! assert_eq!(rupees_in_words(236), "Rupees Two Hundred Thirty Six Only");
//! ```

pub mod constants;
pub mod ledger;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;
pub mod words;

// Re-export commonly used types
pub use ledger::*;
pub use tax::*;
pub use traits::*;
pub use types::*;
pub use words::*;
