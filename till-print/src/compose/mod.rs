//! Document composer
//!
//! Combines a transaction, its resolved template, and the verification
//! payload into one self-contained HTML document. All styling is inlined
//! so the markup can be handed to a detached browsing context that shares
//! no network or style access with the parent page.

pub mod custom;
pub mod layout;

use rust_decimal::{Decimal, RoundingStrategy};

use shared::{TemplateConfig, TransactionRecord};

use crate::verify::Verification;
use layout::{Section, sections_for};

/// Characters of the serialized payload shown when the QR image is missing
const TEXT_FALLBACK_LEN: usize = 48;

/// Informational tax rate displayed on purchase documents. Display only,
/// never folded into the rendered total.
pub(crate) const PURCHASE_DISPLAY_TAX_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Opaque, self-contained markup document
///
/// Created fresh per print call and carries everything needed to print
/// with no further data dependency.
#[derive(Debug, Clone)]
pub struct RenderedDocument(String);

impl RenderedDocument {
    pub fn new(markup: String) -> Self {
        Self(markup)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Document composer
pub struct DocumentComposer;

impl DocumentComposer {
    /// Compose the printable document
    ///
    /// Custom-enabled templates delegate to the custom renderer; otherwise
    /// the built-in per-kind layout applies. Either way the verification
    /// section always renders, with a textual fallback when the image is
    /// missing.
    pub fn compose(
        transaction: &TransactionRecord,
        template: &TemplateConfig,
        verification: &Verification,
    ) -> RenderedDocument {
        let markup = if template.custom_enabled {
            custom::render(transaction, template, verification)
        } else {
            render_builtin(transaction, template, verification)
        };
        RenderedDocument::new(markup)
    }
}

fn render_builtin(
    transaction: &TransactionRecord,
    template: &TemplateConfig,
    verification: &Verification,
) -> String {
    let kind = transaction.document_kind;
    let mut body = String::new();

    for &section in sections_for(kind) {
        body.push_str(&render_section(section, transaction, template, verification));
    }

    html_shell(kind.title(), template, &body)
}

/// Render one section of the built-in layout
pub(crate) fn render_section(
    section: Section,
    transaction: &TransactionRecord,
    template: &TemplateConfig,
    verification: &Verification,
) -> String {
    match section {
        Section::BusinessInfo => business_info(template),
        Section::TransactionDetails => transaction_details(transaction),
        Section::CounterpartyInfo => counterparty_info(transaction),
        Section::LineItems => line_items(transaction),
        Section::Totals => totals(transaction),
        Section::PaymentInfo => payment_info(transaction),
        Section::Verification => verification_section(transaction, verification),
        Section::Footer => footer(template),
    }
}

fn business_info(template: &TemplateConfig) -> String {
    let mut lines = template.header_lines();
    let name = lines.next().unwrap_or_default();

    let mut html = format!(
        "<div class=\"header\"><div class=\"business-name\">{}</div>",
        esc(name)
    );
    for line in lines {
        html.push_str(&format!(
            "<div class=\"business-info\">{}</div>",
            esc(line)
        ));
    }
    html.push_str("</div>");
    html
}

fn transaction_details(transaction: &TransactionRecord) -> String {
    format!(
        "<div class=\"doc-title\">{}</div>\
         <div class=\"receipt-info\">\
         <div>Receipt #: {}</div>\
         <div>Date: {}</div>\
         <div>Time: {}</div>\
         </div>",
        transaction.document_kind.title(),
        esc(&display_reference(transaction)),
        transaction.timestamp.format("%Y-%m-%d"),
        transaction.timestamp.format("%H:%M:%S"),
    )
}

fn counterparty_info(transaction: &TransactionRecord) -> String {
    let Some(ref counterparty) = transaction.counterparty else {
        return String::new();
    };

    let label = if transaction.document_kind.is_purchase_document() {
        "Supplier"
    } else {
        "Customer"
    };

    let mut html = format!(
        "<div class=\"counterparty-info\">\
         <div class=\"total-row\"><div><strong>{}:</strong></div><div>{}</div></div>",
        label,
        esc(&counterparty.name)
    );
    for (field, value) in counterparty.detail_rows() {
        html.push_str(&format!(
            "<div class=\"total-row\"><div><strong>{}:</strong></div><div>{}</div></div>",
            field,
            esc(&value)
        ));
    }
    html.push_str("</div>");
    html
}

fn line_items(transaction: &TransactionRecord) -> String {
    let mut html = String::from("<div class=\"items\">");

    for item in &transaction.line_items {
        if item.quantity == 0 {
            // financial figures carry no quantity arithmetic
            html.push_str(&format!(
                "<div class=\"item\"><div class=\"item-name\">{}</div>\
                 <div class=\"item-details\"><span class=\"item-total\">{}</span></div></div>",
                esc(&item.name),
                money(item.unit_price),
            ));
        } else {
            html.push_str(&format!(
                "<div class=\"item\"><div class=\"item-name\">{}</div></div>\
                 <div class=\"item\"><div class=\"item-details\">\
                 <span class=\"item-quantity\">{}</span> \
                 <span class=\"item-price\">{}</span> \
                 <span class=\"item-total\">{}</span>\
                 </div></div>",
                esc(&item.name),
                item.quantity,
                money(item.unit_price),
                money(item.row_total()),
            ));
        }
    }

    html.push_str("</div>");
    html
}

fn totals(transaction: &TransactionRecord) -> String {
    let mut html = format!(
        "<div class=\"totals\">\
         <div class=\"total-row\"><div>Subtotal:</div><div>{}</div></div>",
        money(transaction.subtotal)
    );

    if transaction.document_kind.is_purchase_document() {
        // informational only, deliberately excluded from the total
        let display_tax = transaction.subtotal * PURCHASE_DISPLAY_TAX_RATE;
        html.push_str(&format!(
            "<div class=\"total-row\"><div>Tax (18%):</div><div>{}</div></div>",
            money(display_tax)
        ));
    } else if transaction.tax_amount > Decimal::ZERO {
        html.push_str(&format!(
            "<div class=\"total-row\"><div>Tax:</div><div>{}</div></div>",
            money(transaction.tax_amount)
        ));
    }

    if transaction.discount_amount > Decimal::ZERO {
        html.push_str(&format!(
            "<div class=\"total-row\"><div>Discount:</div><div>-{}</div></div>",
            money(transaction.discount_amount)
        ));
    }

    // the caller-supplied total, rendered verbatim
    html.push_str(&format!(
        "<div class=\"total-row final-total\"><div>TOTAL:</div><div>{}</div></div></div>",
        money(transaction.total_amount)
    ));
    html
}

fn payment_info(transaction: &TransactionRecord) -> String {
    if !transaction.document_kind.is_payment_bearing() {
        return String::new();
    }
    let Some(tendered) = transaction.amount_tendered else {
        return String::new();
    };
    let change = transaction.change_due.unwrap_or(Decimal::ZERO);

    format!(
        "<div class=\"payment-info\">\
         <div class=\"total-row\"><div>Amount Received:</div><div>{}</div></div>\
         <div class=\"total-row\"><div>Change:</div><div>{}</div></div>\
         </div>",
        money(tendered),
        money(change),
    )
}

fn verification_section(transaction: &TransactionRecord, verification: &Verification) -> String {
    let code = match &verification.image {
        Some(uri) => format!(
            "<img src=\"{}\" alt=\"verification code\" \
             style=\"max-width: 120px; height: auto; margin: 10px auto; display: block;\"/>",
            uri
        ),
        None => {
            // textual fallback keeps the document auditable
            let prefix: String = verification.serialized.chars().take(TEXT_FALLBACK_LEN).collect();
            format!("<div class=\"qr-fallback\">{}</div>", esc(&prefix))
        }
    };

    format!(
        "<div class=\"qr-section\">{}\
         <div class=\"qr-label\">Scan for Details</div>\
         <div style=\"font-size: 8px; margin-top: 5px;\">Order #: {}</div>\
         </div>",
        code,
        esc(&display_reference(transaction)),
    )
}

fn footer(template: &TemplateConfig) -> String {
    let mut lines = template.footer_lines();
    let Some(first) = lines.next() else {
        return String::new();
    };

    let mut html = format!(
        "<div class=\"footer\"><div class=\"thank-you\">{}</div>",
        esc(first)
    );
    for line in lines {
        html.push_str(&format!("<div>{}</div>", esc(line)));
    }
    html.push_str("</div>");
    html
}

/// Reference number for display; an empty caller value gets a generated
/// placeholder in the document only (the verification payload keeps the
/// caller's value so it stays deterministic)
pub(crate) fn display_reference(transaction: &TransactionRecord) -> String {
    if transaction.reference_number.is_empty() {
        format!("TXN-{}", transaction.timestamp.timestamp_millis())
    } else {
        transaction.reference_number.clone()
    }
}

/// Complete HTML document shell with all styling inlined
pub(crate) fn html_shell(title: &str, template: &TemplateConfig, body: &str) -> String {
    let font = template.font_size;
    let width = template.page_width;

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1.0"/>
<title>{title}</title>
<style>
@media print {{
  @page {{ margin: 0.5in; size: auto; }}
  body {{ margin: 0.5in; padding: 0; }}
}}
body {{ font-family: 'Courier New', monospace; font-size: {font}px; max-width: {width}px; margin: 0 auto; padding: 10px; }}
.header {{ text-align: center; border-bottom: 1px dashed #000; padding-bottom: 10px; margin-bottom: 10px; }}
.business-name {{ font-size: {name_font}px; font-weight: bold; margin-bottom: 5px; }}
.business-info {{ font-size: {small_font}px; margin-bottom: 5px; }}
.doc-title {{ text-align: center; font-size: {name_font}px; font-weight: bold; margin-bottom: 5px; }}
.receipt-info {{ display: flex; justify-content: space-between; font-size: {small_font}px; margin-bottom: 10px; }}
.counterparty-info {{ margin-bottom: 10px; padding-bottom: 10px; border-bottom: 1px dashed #000; }}
.items {{ margin-bottom: 10px; }}
.item {{ display: flex; margin-bottom: 5px; }}
.item-name {{ flex: 2; }}
.item-details {{ flex: 1; text-align: right; }}
.item-price::before {{ content: "@ "; }}
.item-total {{ font-weight: bold; }}
.totals {{ border-top: 1px dashed #000; padding-top: 10px; margin-top: 10px; }}
.total-row {{ display: flex; justify-content: space-between; margin-bottom: 5px; }}
.final-total {{ font-weight: bold; font-size: {total_font}px; margin: 10px 0; }}
.payment-info {{ border-top: 1px dashed #000; padding-top: 10px; margin-top: 10px; }}
.qr-section {{ text-align: center; margin-top: 15px; padding-top: 10px; border-top: 1px dashed #000; }}
.qr-label {{ font-size: {small_font}px; font-weight: bold; }}
.qr-fallback {{ font-size: 8px; word-break: break-all; margin: 10px 0; }}
.footer {{ text-align: center; margin-top: 20px; font-size: {small_font}px; }}
.thank-you {{ font-weight: bold; margin-bottom: 10px; }}
</style>
</head>
<body>{body}</body>
</html>"#,
        title = esc(title),
        name_font = font.saturating_add(4),
        small_font = font.saturating_sub(2),
        total_font = font.saturating_add(2),
        body = body,
    )
}

/// Escape text for HTML interpolation
pub(crate) fn esc(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Monetary display: exactly 2 decimal places, no currency symbol
pub(crate) fn money(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
