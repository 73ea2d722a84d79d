//! Built-in per-kind layouts
//!
//! Layout is data: each document kind maps to an ordered list of sections.
//! The section renderers themselves live in the parent module and are
//! shared with the custom-template path.

use shared::DocumentKind;

/// One optional block of a composed document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    BusinessInfo,
    TransactionDetails,
    CounterpartyInfo,
    LineItems,
    Totals,
    PaymentInfo,
    Verification,
    Footer,
}

const RECEIPT_SECTIONS: &[Section] = &[
    Section::BusinessInfo,
    Section::TransactionDetails,
    Section::CounterpartyInfo,
    Section::LineItems,
    Section::Totals,
    Section::PaymentInfo,
    Section::Verification,
    Section::Footer,
];

const ORDER_SECTIONS: &[Section] = &[
    Section::BusinessInfo,
    Section::TransactionDetails,
    Section::CounterpartyInfo,
    Section::LineItems,
    Section::Totals,
    Section::Verification,
    Section::Footer,
];

const REPORT_SECTIONS: &[Section] = &[
    Section::BusinessInfo,
    Section::TransactionDetails,
    Section::LineItems,
    Section::Totals,
    Section::Verification,
    Section::Footer,
];

/// Ordered sections of the built-in layout for a document kind
pub fn sections_for(kind: DocumentKind) -> &'static [Section] {
    match kind {
        DocumentKind::SalesReceipt | DocumentKind::PurchaseReceipt => RECEIPT_SECTIONS,
        DocumentKind::PurchaseOrder => ORDER_SECTIONS,
        DocumentKind::FinancialReport | DocumentKind::IncomeStatement => REPORT_SECTIONS,
    }
}
