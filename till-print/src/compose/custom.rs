//! Custom-template renderer
//!
//! Applies the user's header/footer text and per-section toggles. Reuses
//! the shared section renderers so custom and built-in documents stay
//! consistent; the verification section ignores the toggles and always
//! renders.

use shared::{TemplateConfig, TransactionRecord};

use super::layout::Section;
use super::{html_shell, render_section};
use crate::verify::Verification;

/// Render a document through the custom template
pub fn render(
    transaction: &TransactionRecord,
    template: &TemplateConfig,
    verification: &Verification,
) -> String {
    let toggled = [
        (template.show_business_info, Section::BusinessInfo),
        (template.show_transaction_details, Section::TransactionDetails),
        (template.show_transaction_details, Section::CounterpartyInfo),
        (template.show_item_details, Section::LineItems),
        (template.show_totals, Section::Totals),
        (template.show_payment_info, Section::PaymentInfo),
        (true, Section::Verification),
        (!template.footer_text.is_empty(), Section::Footer),
    ];

    let mut body = String::new();
    for (enabled, section) in toggled {
        if enabled {
            body.push_str(&render_section(section, transaction, template, verification));
        }
    }

    html_shell(transaction.document_kind.title(), template, &body)
}
