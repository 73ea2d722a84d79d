//! Receipt template configuration model

use serde::{Deserialize, Serialize};

/// Per-document-kind template configuration
///
/// Persisted by the settings screens; the printing pipeline only reads it.
/// Unknown or missing fields fall back to the defaults so a partially
/// stored value never breaks printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// When set, rendering goes through the custom-template path
    pub custom_enabled: bool,
    /// Header block, one line per `\n`
    pub header_text: String,
    /// Footer block, one line per `\n`
    pub footer_text: String,
    pub show_business_info: bool,
    pub show_transaction_details: bool,
    pub show_item_details: bool,
    pub show_totals: bool,
    pub show_payment_info: bool,
    /// Base font size in px
    pub font_size: u32,
    /// Page width in px
    pub page_width: u32,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            custom_enabled: false,
            header_text: "POS BUSINESS\n123 Business St, City, Country\nPhone: (123) 456-7890"
                .to_string(),
            footer_text:
                "Thank you for your business!\nItems sold are not returnable\nVisit us again soon"
                    .to_string(),
            show_business_info: true,
            show_transaction_details: true,
            show_item_details: true,
            show_totals: true,
            show_payment_info: true,
            font_size: 12,
            page_width: 320,
        }
    }
}

impl TemplateConfig {
    /// Header split into display lines
    pub fn header_lines(&self) -> impl Iterator<Item = &str> {
        self.header_text.lines()
    }

    /// Footer split into display lines
    pub fn footer_lines(&self) -> impl Iterator<Item = &str> {
        self.footer_text.lines()
    }
}
