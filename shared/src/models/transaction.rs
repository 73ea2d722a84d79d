//! Transaction record model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::counterparty::Counterparty;

/// Printable document types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    SalesReceipt,
    PurchaseReceipt,
    FinancialReport,
    IncomeStatement,
    PurchaseOrder,
}

impl DocumentKind {
    /// Stable identifier used for settings keys and the verification payload
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentKind::SalesReceipt => "sales_receipt",
            DocumentKind::PurchaseReceipt => "purchase_receipt",
            DocumentKind::FinancialReport => "financial_report",
            DocumentKind::IncomeStatement => "income_statement",
            DocumentKind::PurchaseOrder => "purchase_order",
        }
    }

    /// Document title as printed in the built-in layouts
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::SalesReceipt => "SALES RECEIPT",
            DocumentKind::PurchaseReceipt => "PURCHASE RECEIPT",
            DocumentKind::FinancialReport => "FINANCIAL REPORT",
            DocumentKind::IncomeStatement => "INCOME STATEMENT",
            DocumentKind::PurchaseOrder => "PURCHASE ORDER",
        }
    }

    /// Whether this kind carries tendered/change payment data
    pub fn is_payment_bearing(&self) -> bool {
        matches!(
            self,
            DocumentKind::SalesReceipt | DocumentKind::PurchaseReceipt
        )
    }

    /// Purchase documents show an informational tax line (18% of subtotal)
    /// that is never folded into the total
    pub fn is_purchase_document(&self) -> bool {
        matches!(
            self,
            DocumentKind::PurchaseReceipt | DocumentKind::PurchaseOrder
        )
    }
}

/// A single transaction line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    /// Unit price, non-negative
    pub unit_price: Decimal,
    /// Quantity, non-negative; financial figures use 0 (no row arithmetic)
    pub quantity: u32,
}

impl LineItem {
    /// Row total: quantity x unit price (computed, never taken from the
    /// transaction total)
    pub fn row_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The pipeline input: one printable transaction
///
/// Immutable once handed to the pipeline. `total_amount` is rendered
/// verbatim; some document kinds show tax for information only, so the
/// total is not required to equal subtotal + tax - discount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub document_kind: DocumentKind,
    /// Document identity (receipt / order number)
    pub reference_number: String,
    pub timestamp: DateTime<Utc>,
    pub line_items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    pub total_amount: Decimal,
    /// Only present on payment-bearing receipts
    pub amount_tendered: Option<Decimal>,
    pub change_due: Option<Decimal>,
    pub counterparty: Option<Counterparty>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_total() {
        let item = LineItem {
            name: "Widget".to_string(),
            unit_price: Decimal::new(1000, 2),
            quantity: 3,
        };
        assert_eq!(item.row_total(), Decimal::new(3000, 2));
    }

    #[test]
    fn test_kind_slugs_are_unique() {
        let kinds = [
            DocumentKind::SalesReceipt,
            DocumentKind::PurchaseReceipt,
            DocumentKind::FinancialReport,
            DocumentKind::IncomeStatement,
            DocumentKind::PurchaseOrder,
        ];
        let mut slugs: Vec<_> = kinds.iter().map(|k| k.slug()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), kinds.len());
    }

    #[test]
    fn test_payment_bearing_kinds() {
        assert!(DocumentKind::SalesReceipt.is_payment_bearing());
        assert!(DocumentKind::PurchaseReceipt.is_payment_bearing());
        assert!(!DocumentKind::FinancialReport.is_payment_bearing());
        assert!(!DocumentKind::PurchaseOrder.is_payment_bearing());
    }
}
