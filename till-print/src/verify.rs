//! Verification payload builder
//!
//! Derives a compact, deterministic summary of a transaction and encodes
//! it as a scannable QR image for post-print auditing. Encoding failure is
//! a degraded-but-successful outcome: the composer falls back to printing
//! a prefix of the serialized payload instead.

use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::Luma;
use qrcode::{EcLevel, QrCode};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use shared::TransactionRecord;

/// Target edge length of the rendered QR image in pixels
const QR_TARGET_PX: u32 = 120;

/// Error correction level M: balances payload density against resilience
/// to print-quality degradation
const QR_EC_LEVEL: EcLevel = EcLevel::M;

#[derive(Debug, Error)]
enum EncodeError {
    #[error("QR encoding failed: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// One line of the payload's item summary
#[derive(Debug, Clone, Serialize)]
pub struct PayloadLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total: Decimal,
}

/// Canonical transaction summary
///
/// Field order is the serialization order; it must stay fixed so the same
/// transaction always yields a byte-identical serialized string.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationPayload {
    pub kind: &'static str,
    pub reference_number: String,
    pub timestamp: String,
    pub line_items: Vec<PayloadLine>,
    pub total_amount: Decimal,
}

impl VerificationPayload {
    /// Derive the canonical payload from a transaction
    pub fn from_transaction(transaction: &TransactionRecord) -> Self {
        Self {
            kind: transaction.document_kind.slug(),
            reference_number: transaction.reference_number.clone(),
            timestamp: transaction.timestamp.to_rfc3339(),
            line_items: transaction
                .line_items
                .iter()
                .map(|item| PayloadLine {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    total: item.row_total(),
                })
                .collect(),
            total_amount: transaction.total_amount,
        }
    }

    /// Canonical string form (fixed key order)
    pub fn serialize(&self) -> String {
        // Struct serialization order is declaration order; a payload of
        // plain strings and decimals cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Built verification data handed to the composer
#[derive(Debug, Clone)]
pub struct Verification {
    /// Canonical serialized payload
    pub serialized: String,
    /// PNG data URI of the QR image, or `None` when encoding failed
    pub image: Option<String>,
}

impl Verification {
    /// Build the verification payload for a transaction
    ///
    /// Never fails: an oversized payload or encoder error yields
    /// `image: None` and printing proceeds with the textual fallback.
    pub fn build(transaction: &TransactionRecord) -> Self {
        let serialized = VerificationPayload::from_transaction(transaction).serialize();

        let image = match encode_qr_data_uri(&serialized) {
            Ok(uri) => Some(uri),
            Err(e) => {
                warn!(
                    reference = %transaction.reference_number,
                    payload_len = serialized.len(),
                    error = %e,
                    "Verification code encoding failed, printing without it"
                );
                None
            }
        };

        Self { serialized, image }
    }
}

/// Encode a payload string as a PNG data URI
fn encode_qr_data_uri(data: &str) -> Result<String, EncodeError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), QR_EC_LEVEL)?;

    let img = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .min_dimensions(QR_TARGET_PX, QR_TARGET_PX)
        .build();

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::{DocumentKind, LineItem};

    fn create_test_transaction() -> TransactionRecord {
        TransactionRecord {
            document_kind: DocumentKind::SalesReceipt,
            reference_number: "TXN-1001".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 22, 14, 32, 15).unwrap(),
            line_items: vec![
                LineItem {
                    name: "Widget".to_string(),
                    unit_price: Decimal::new(1000, 2),
                    quantity: 2,
                },
                LineItem {
                    name: "Gadget".to_string(),
                    unit_price: Decimal::new(1500, 2),
                    quantity: 1,
                },
            ],
            subtotal: Decimal::new(3500, 2),
            tax_amount: Decimal::new(350, 2),
            discount_amount: Decimal::new(500, 2),
            total_amount: Decimal::new(3350, 2),
            amount_tendered: Some(Decimal::new(4000, 2)),
            change_due: Some(Decimal::new(650, 2)),
            counterparty: None,
        }
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let transaction = create_test_transaction();

        let first = VerificationPayload::from_transaction(&transaction).serialize();
        let second = VerificationPayload::from_transaction(&transaction).serialize();

        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_payload_key_order_is_fixed() {
        let transaction = create_test_transaction();
        let serialized = VerificationPayload::from_transaction(&transaction).serialize();

        let kind_pos = serialized.find("\"kind\"").unwrap();
        let reference_pos = serialized.find("\"reference_number\"").unwrap();
        let timestamp_pos = serialized.find("\"timestamp\"").unwrap();
        let items_pos = serialized.find("\"line_items\"").unwrap();
        let total_pos = serialized.find("\"total_amount\"").unwrap();

        assert!(kind_pos < reference_pos);
        assert!(reference_pos < timestamp_pos);
        assert!(timestamp_pos < items_pos);
        assert!(items_pos < total_pos);
    }

    #[test]
    fn test_payload_carries_row_totals_and_source_total() {
        let transaction = create_test_transaction();
        let payload = VerificationPayload::from_transaction(&transaction);

        assert_eq!(payload.line_items[0].total, Decimal::new(2000, 2));
        assert_eq!(payload.line_items[1].total, Decimal::new(1500, 2));
        // total is the caller's figure, not recomputed
        assert_eq!(payload.total_amount, Decimal::new(3350, 2));
    }

    #[test]
    fn test_build_produces_png_data_uri() {
        let transaction = create_test_transaction();
        let verification = Verification::build(&transaction);

        let image = verification.image.expect("image should encode");
        assert!(image.starts_with("data:image/png;base64,"));
        assert!(image.len() > 100);
    }

    #[test]
    fn test_oversized_payload_degrades_to_no_image() {
        let mut transaction = create_test_transaction();
        // QR version 40 at EC level M tops out around 2.3 KB of bytes;
        // blow well past it
        transaction.line_items = (0..200)
            .map(|i| LineItem {
                name: format!("Very long descriptive product name number {i}"),
                unit_price: Decimal::new(999, 2),
                quantity: 1,
            })
            .collect();

        let verification = Verification::build(&transaction);
        assert!(verification.image.is_none());
        assert!(!verification.serialized.is_empty());
    }
}
